//! Resolver, type-check and body errors surfaced as OperationOutcomes

#[allow(unused)]
mod support;

use axum::body::Bytes;
use axum::http::{Method, StatusCode};
use serde_json::json;
use support::{
    assert_operation_outcome, assert_status, blood_pressure, minimal_observation,
    to_json_body, with_test_app, with_test_app_with_config, ObservationBuilder,
};

#[tokio::test]
async fn unknown_version_is_not_supported() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let (status, _headers, body) = app
                .request_json(Method::GET, "/9_9_9/Observation", None)
                .await?;
            assert_status(status, StatusCode::NOT_FOUND, "unknown version");
            let diagnostics = assert_operation_outcome(&body, "not-supported");
            assert!(diagnostics.contains("9_9_9"));
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn disabled_version_is_not_supported() -> anyhow::Result<()> {
    with_test_app_with_config(
        |config| config.fhir.versions = vec!["4_0_0".to_string()],
        |app| {
            Box::pin(async move {
                let (status, _headers, body) = app
                    .request_json(Method::GET, "/uscore/ObservationVitalSigns", None)
                    .await?;
                assert_status(status, StatusCode::NOT_FOUND, "disabled version");
                assert_operation_outcome(&body, "not-supported");
                Ok(())
            })
        },
    )
    .await
}

#[tokio::test]
async fn unknown_type_is_not_found() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            // ObservationVitalSigns only exists in the uscore namespace.
            let (status, _headers, body) = app
                .request_json(Method::GET, "/4_0_0/ObservationVitalSigns", None)
                .await?;
            assert_status(status, StatusCode::NOT_FOUND, "unknown type");
            assert_operation_outcome(&body, "not-found");
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn create_reports_expected_and_received_type() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let (status, _headers, body) = app
                .request_json(
                    Method::POST,
                    "/uscore/ObservationSmokingStatus",
                    Some(&blood_pressure()),
                )
                .await?;
            assert_status(status, StatusCode::BAD_REQUEST, "type mismatch");
            let diagnostics = assert_operation_outcome(&body, "invalid");
            assert_eq!(
                diagnostics,
                "'resourceType' expected to have value of 'ObservationSmokingStatus', \
                 received 'ObservationVitalSigns'"
            );
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn create_without_resource_type_is_rejected() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let (status, _headers, body) = app
                .request_json(Method::POST, "/4_0_0/Observation", Some(&json!({"status": "final"})))
                .await?;
            assert_status(status, StatusCode::BAD_REQUEST, "missing resourceType");
            let diagnostics = assert_operation_outcome(&body, "invalid");
            assert!(diagnostics.contains("undefined"));
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn strict_fields_rejects_undeclared_keys() -> anyhow::Result<()> {
    with_test_app_with_config(
        |config| config.fhir.strict_fields = true,
        |app| {
            Box::pin(async move {
                let typo = ObservationBuilder::new()
                    .field("valueQuantty", json!({ "value": 1 }))
                    .build();
                let (status, _headers, body) = app
                    .request_json(Method::POST, "/4_0_0/Observation", Some(&typo))
                    .await?;
                assert_status(status, StatusCode::BAD_REQUEST, "strict create");
                let diagnostics = assert_operation_outcome(&body, "invalid");
                assert!(diagnostics.contains("valueQuantty"));

                app.create("/4_0_0/Observation", &minimal_observation()).await?;
                Ok(())
            })
        },
    )
    .await
}

#[tokio::test]
async fn malformed_and_non_object_bodies() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let (status, _headers, _body) = app
                .request(
                    Method::POST,
                    "/4_0_0/Observation",
                    Some(Bytes::from_static(b"{not json")),
                )
                .await?;
            assert_status(status, StatusCode::BAD_REQUEST, "malformed JSON");

            let (status, _headers, _body) = app
                .request(
                    Method::POST,
                    "/4_0_0/Observation",
                    Some(to_json_body(&json!([minimal_observation()]))?),
                )
                .await?;
            assert_status(status, StatusCode::BAD_REQUEST, "array body");
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn xml_bodies_are_unsupported() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let (status, _headers, _body) = app
                .request_with_extra_headers(
                    Method::POST,
                    "/4_0_0/Observation",
                    Some(Bytes::from_static(b"<Observation/>")),
                    &[("content-type", "application/fhir+xml")],
                )
                .await?;
            assert_status(status, StatusCode::UNSUPPORTED_MEDIA_TYPE, "xml create");
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn unknown_route_is_operation_outcome() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let (status, _headers, body) = app
                .request_json(Method::GET, "/4_0_0/Observation/a/b/c/d", None)
                .await?;
            assert_status(status, StatusCode::NOT_FOUND, "unknown route");
            assert_operation_outcome(&body, "not-found");
            Ok(())
        })
    })
    .await
}
