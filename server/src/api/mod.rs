pub mod generate;
pub mod ping;

use crate::AppState;
use axum::routing::{get, post};
use axum::Router;
use pantry_core::client::{GENERATE_RECIPE_PATH, PING_PATH};
use pantry_core::{ErrorResponse, GenerationRequest, Language, PingResponse, Recipe};
use utoipa::OpenApi;

/// Returns the router for all /api endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route(GENERATE_RECIPE_PATH, post(generate::generate_recipe))
        .route(PING_PATH, get(ping::ping))
}

#[derive(OpenApi)]
#[openapi(
    paths(generate::generate_recipe, ping::ping),
    components(schemas(ErrorResponse, GenerationRequest, Language, Recipe, PingResponse)),
    tags(
        (name = "recipes", description = "Sourced recipe generation"),
        (name = "testing", description = "Liveness checks")
    )
)]
pub struct ApiDoc;

/// The complete OpenAPI document served at /api-docs/openapi.json
pub fn openapi() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}
