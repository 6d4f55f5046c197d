//! End-to-end tests for the recipe relay.
//!
//! Each test serves the real router on an ephemeral port with a
//! `FakeProvider` behind it, then talks to it over HTTP, either with raw
//! requests or through `RecipeClient`.

use pantry_core::llm::SAMPLE_RECIPE_JSON;
use pantry_core::{FakeProvider, GenerateError, IngredientSet, Language, RecipeClient};
use pantry_server::{build_router, AppState};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;

async fn spawn_relay(provider: Arc<FakeProvider>) -> SocketAddr {
    let state: AppState = provider;
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move { axum::serve(listener, app).await.expect("serve app") });
    addr
}

async fn post_raw(addr: SocketAddr, body: &str) -> (u16, Value) {
    let response = reqwest::Client::new()
        .post(format!("http://{}/api/generate-recipe", addr))
        .header("content-type", "application/json")
        .body(body.to_string())
        .send()
        .await
        .expect("send request");
    let status = response.status().as_u16();
    let body = response.json::<Value>().await.expect("json body");
    (status, body)
}

fn client(addr: SocketAddr) -> RecipeClient {
    RecipeClient::new(format!("http://{}", addr))
}

fn ingredients(names: &[&str]) -> IngredientSet {
    names.iter().copied().collect()
}

#[tokio::test]
async fn empty_ingredients_are_rejected_before_the_provider() {
    let provider = Arc::new(FakeProvider::with_sample_recipe());
    let addr = spawn_relay(provider.clone()).await;

    let (status, body) = post_raw(addr, r#"{"ingredients": [], "language": "en"}"#).await;

    assert_eq!(status, 400);
    assert_eq!(body, json!({"error": "Ingredients are required."}));
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn missing_or_non_array_ingredients_are_rejected() {
    let provider = Arc::new(FakeProvider::with_sample_recipe());
    let addr = spawn_relay(provider.clone()).await;

    for body in [
        r#"{"language": "en"}"#,
        r#"{"ingredients": "flour", "language": "en"}"#,
    ] {
        let (status, response) = post_raw(addr, body).await;
        assert_eq!(status, 400, "body: {}", body);
        assert_eq!(response["error"], "Ingredients are required.");
    }
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn unknown_language_is_rejected() {
    let provider = Arc::new(FakeProvider::with_sample_recipe());
    let addr = spawn_relay(provider.clone()).await;

    let (status, body) = post_raw(addr, r#"{"ingredients": ["rice"], "language": "fr"}"#).await;

    assert_eq!(status, 400);
    assert_eq!(body, json!({"error": "Unsupported language."}));
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn invalid_json_body_is_rejected() {
    let provider = Arc::new(FakeProvider::with_sample_recipe());
    let addr = spawn_relay(provider.clone()).await;

    let (status, body) = post_raw(addr, "flour, sugar, eggs").await;

    assert_eq!(status, 400);
    assert_eq!(body["error"], "Request body must be valid JSON.");
}

#[tokio::test]
async fn provider_object_is_relayed_verbatim() {
    let provider = Arc::new(FakeProvider::with_sample_recipe());
    let addr = spawn_relay(provider.clone()).await;

    let (status, body) = post_raw(
        addr,
        r#"{"ingredients": ["flour","sugar","eggs"], "language": "en"}"#,
    )
    .await;

    let expected: Value = serde_json::from_str(SAMPLE_RECIPE_JSON).unwrap();
    assert_eq!(status, 200);
    assert_eq!(body, expected);
    assert_eq!(provider.calls(), 1);

    let prompt = provider.last_prompt().unwrap();
    assert!(prompt.contains("flour, sugar, eggs"));
    assert!(prompt.contains("English"));
}

#[tokio::test]
async fn provider_failure_maps_to_fixed_500() {
    let provider = Arc::new(FakeProvider::failing("quota exceeded for project 1234"));
    let addr = spawn_relay(provider.clone()).await;

    let (status, body) = post_raw(addr, r#"{"ingredients": ["flour"], "language": "en"}"#).await;

    assert_eq!(status, 500);
    assert_eq!(
        body,
        json!({"error": "Failed to generate recipe from the API."})
    );
    assert!(!body.to_string().contains("quota"));
}

#[tokio::test]
async fn unparseable_provider_output_maps_to_500() {
    let provider = Arc::new(FakeProvider::new().with_default_response("Sure! Here's a recipe..."));
    let addr = spawn_relay(provider.clone()).await;

    let (status, body) = post_raw(addr, r#"{"ingredients": ["flour"], "language": "en"}"#).await;

    assert_eq!(status, 500);
    assert_eq!(body["error"], "Failed to generate recipe from the API.");
}

#[tokio::test]
async fn identical_requests_are_not_cached() {
    let provider = Arc::new(FakeProvider::with_sample_recipe());
    let addr = spawn_relay(provider.clone()).await;
    let body = r#"{"ingredients": ["flour","sugar"], "language": "id"}"#;

    post_raw(addr, body).await;
    post_raw(addr, body).await;

    assert_eq!(provider.calls(), 2);
    assert!(provider.last_prompt().unwrap().contains("Indonesian"));
}

#[tokio::test]
async fn client_receives_validated_recipe() {
    let provider = Arc::new(FakeProvider::with_sample_recipe());
    let addr = spawn_relay(provider.clone()).await;

    let set = ingredients(&["Flour", "milk", "EGG"]);
    let recipe = client(addr)
        .generate_recipe(set.as_slice(), Language::En)
        .await
        .unwrap();

    assert_eq!(recipe.title, "Good Old-Fashioned Pancakes");
    assert_eq!(recipe.source_urls.len(), 1);
    assert!(recipe.tip.is_some());
    assert!(provider.last_prompt().unwrap().contains("flour, milk, egg"));
}

#[tokio::test]
async fn client_maps_sentinel_to_no_recipe_found() {
    let provider = Arc::new(FakeProvider::new().with_default_response(
        r#"{"title": "", "description": "", "ingredients": [], "instructions": [],
            "prepTime": "", "cookTime": "", "servings": "", "error": "NO_RECIPE_FOUND"}"#,
    ));
    let addr = spawn_relay(provider).await;

    let set = ingredients(&["chocolate", "sardines"]);
    let err = client(addr)
        .generate_recipe(set.as_slice(), Language::En)
        .await
        .unwrap_err();

    assert_eq!(err, GenerateError::NoRecipeFound);
}

#[tokio::test]
async fn client_rejects_recipe_without_sources() {
    let provider = Arc::new(FakeProvider::new().with_default_response(
        r#"{"title": "Sugar Cookies", "description": "Crisp cookies.",
            "ingredients": ["2 cups flour", "1 cup sugar"], "instructions": ["Bake."],
            "prepTime": "10 minutes", "cookTime": "12 minutes", "servings": "24 cookies"}"#,
    ));
    let addr = spawn_relay(provider).await;

    let set = ingredients(&["flour", "sugar"]);
    let err = client(addr)
        .generate_recipe(set.as_slice(), Language::En)
        .await
        .unwrap_err();

    assert!(matches!(err, GenerateError::MalformedResponse(_)));
}

#[tokio::test]
async fn client_surfaces_relay_error_message() {
    let provider = Arc::new(FakeProvider::failing("upstream exploded"));
    let addr = spawn_relay(provider).await;

    let set = ingredients(&["flour"]);
    let err = client(addr)
        .generate_recipe(set.as_slice(), Language::En)
        .await
        .unwrap_err();

    assert_eq!(
        err,
        GenerateError::Provider("Failed to generate recipe from the API.".to_string())
    );
}

#[tokio::test]
async fn ping_and_openapi_are_served() {
    let provider = Arc::new(FakeProvider::with_sample_recipe());
    let addr = spawn_relay(provider).await;

    assert_eq!(client(addr).ping().await.unwrap(), "pong");

    let spec: Value = reqwest::get(format!("http://{}/api-docs/openapi.json", addr))
        .await
        .expect("fetch openapi")
        .json()
        .await
        .expect("openapi json");
    assert!(spec["paths"]["/api/generate-recipe"]["post"].is_object());
}
