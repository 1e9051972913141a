//! FHIR API Routes
//!
//! Every interaction lives under a namespace prefix, `/{base_version}`, one of
//! `1_0_2`, `3_0_1`, `4_0_0` or `uscore`. Paths and ids are case-sensitive.
//! Static segments (`metadata`, `_history`) take precedence over parameters.

use crate::api::handlers::{crud, history, metadata, search};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn fhir_routes() -> Router<AppState> {
    Router::new()
        .route("/metadata", get(metadata::default_capability_statement))
        .route(
            "/:base_version/metadata",
            get(metadata::capability_statement),
        )
        .route(
            "/:base_version/:resource_type",
            get(search::search_type).post(crud::create_resource),
        )
        .route(
            "/:base_version/:resource_type/_history",
            get(history::type_history),
        )
        .route(
            "/:base_version/:resource_type/:id",
            get(crud::read_resource)
                .put(crud::update_resource)
                .delete(crud::delete_resource),
        )
        .route(
            "/:base_version/:resource_type/:id/_history",
            get(history::instance_history),
        )
        .route(
            "/:base_version/:resource_type/:id/_history/:version_id",
            get(crud::vread_resource),
        )
}
