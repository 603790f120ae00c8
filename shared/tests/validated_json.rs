use axum::{routing::post, Json, Router};
use pipeline_shared::ValidatedJson;
use serde::Deserialize;
use serde_json::{json, Value};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
struct Greeting {
    #[validate(length(min = 1, max = 8, message = "name must be 1-8 characters"))]
    name: String,
}

async fn greet(ValidatedJson(body): ValidatedJson<Greeting>) -> Json<Value> {
    Json(json!({ "hello": body.name }))
}

async fn spawn() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local address");
    let app = Router::new().route("/greet", post(greet));
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server runs");
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn valid_body_reaches_handler() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = spawn().await;
    let response = reqwest::Client::new()
        .post(format!("{base_url}/greet"))
        .json(&json!({ "name": "ada" }))
        .send()
        .await?;

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await?;
    assert_eq!(body["hello"], "ada");
    Ok(())
}

#[tokio::test]
async fn invalid_body_is_rejected_with_message() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = spawn().await;
    let response = reqwest::Client::new()
        .post(format!("{base_url}/greet"))
        .json(&json!({ "name": "a-name-that-is-too-long" }))
        .send()
        .await?;

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await?;
    assert_eq!(body["error"], "name must be 1-8 characters");
    Ok(())
}
