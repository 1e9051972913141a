//! Capability statements, health and root endpoints

#[allow(unused)]
mod support;

use axum::http::{Method, StatusCode};
use meridian_models::FhirVersion;
use support::{assert_status, minimal_observation, with_test_app, with_test_app_with_config};

#[tokio::test]
async fn namespace_metadata_lists_schemas_with_counts() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            app.create("/3_0_1/Observation", &minimal_observation()).await?;

            let (status, _headers, statement) =
                app.request_json(Method::GET, "/3_0_1/metadata", None).await?;
            assert_status(status, StatusCode::OK, "metadata");
            assert_eq!(statement["resourceType"], "CapabilityStatement");
            assert_eq!(statement["fhirVersion"], "3.0.1");
            assert_eq!(statement["rest"][0]["mode"], "server");

            let resources = statement["rest"][0]["resource"].as_array().unwrap();
            assert_eq!(resources.len(), FhirVersion::Stu3.resource_types().len());

            let observation = resources
                .iter()
                .find(|r| r["type"] == "Observation")
                .expect("Observation listed");
            assert_eq!(observation["extension"][0]["valueDecimal"], 1);
            assert_eq!(
                observation["profile"]["reference"],
                "http://hl7.org/fhir/Profile/Observation"
            );
            let codes: Vec<&str> = observation["interaction"]
                .as_array()
                .unwrap()
                .iter()
                .filter_map(|i| i["code"].as_str())
                .collect();
            assert!(codes.contains(&"read"));
            assert!(codes.contains(&"search-type"));
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn dstu2_metadata_is_conformance() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let (_status, _headers, statement) =
                app.request_json(Method::GET, "/1_0_2/metadata", None).await?;
            assert_eq!(statement["resourceType"], "Conformance");
            assert_eq!(statement["fhirVersion"], "1.0.2");
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn root_metadata_uses_default_version() -> anyhow::Result<()> {
    with_test_app_with_config(
        |config| config.fhir.default_version = "uscore".to_string(),
        |app| {
            Box::pin(async move {
                let (status, _headers, statement) =
                    app.request_json(Method::GET, "/metadata", None).await?;
                assert_status(status, StatusCode::OK, "root metadata");
                let types: Vec<&str> = statement["rest"][0]["resource"]
                    .as_array()
                    .unwrap()
                    .iter()
                    .filter_map(|r| r["type"].as_str())
                    .collect();
                assert_eq!(types, FhirVersion::UsCore.resource_types());
                Ok(())
            })
        },
    )
    .await
}

#[tokio::test]
async fn health_and_root() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let (status, headers, health) =
                app.request_json(Method::GET, "/health", None).await?;
            assert_status(status, StatusCode::OK, "health");
            assert_eq!(health["status"], "ok");
            assert!(headers.contains_key("x-request-id"));

            let (_status, _headers, root) = app.request_json(Method::GET, "/", None).await?;
            assert_eq!(root["versions"].as_array().map(Vec::len), Some(4));
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn client_request_id_is_echoed_as_correlation_id() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let (_status, headers, _body) = app
                .request_with_extra_headers(Method::GET, "/health", None, &[("x-request-id", "abc")])
                .await?;
            assert_eq!(
                headers.get("x-correlation-id").and_then(|v| v.to_str().ok()),
                Some("abc")
            );
            assert_ne!(
                headers.get("x-request-id").and_then(|v| v.to_str().ok()),
                Some("abc")
            );
            Ok(())
        })
    })
    .await
}
