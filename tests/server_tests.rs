use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use emailql::config::{GraphqlSettings, ServerSettings};
use emailql::error::EmailqlError;
use emailql::graphql::{bind, build_schema, router};
use serde_json::json;
use tower::ServiceExt;

fn app(settings: &GraphqlSettings) -> Router {
    router(build_schema(settings), settings)
}

fn post_graphql(uri: &str, query: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({ "query": query }).to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_post_executes_query() {
    let response = app(&GraphqlSettings::default())
        .oneshot(post_graphql("/graphql", "{ users { name email } }"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({ "data": { "users": [{ "name": "John Doe", "email": null }] } })
    );
}

#[tokio::test]
async fn test_post_invalid_email_reports_structured_error() {
    let response = app(&GraphqlSettings::default())
        .oneshot(post_graphql(
            "/graphql",
            r#"mutation { createUser(input: { name: "Jane", email: "not-an-email" }) { name } }"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(body["data"].is_null());
    let message = body["errors"][0]["message"].as_str().unwrap();
    assert!(
        message.contains("Value is not a valid email address: not-an-email"),
        "{}",
        message
    );
}

#[tokio::test]
async fn test_post_non_string_literal_reports_literal_kind() {
    let response = app(&GraphqlSettings::default())
        .oneshot(post_graphql(
            "/graphql",
            r#"mutation { createUser(input: { name: "Jane", email: 42 }) { name } }"#,
        ))
        .await
        .unwrap();

    let body = body_json(response).await;
    let message = body["errors"][0]["message"].as_str().unwrap();
    assert!(
        message.contains("Can only parse strings as email addresses but got a: IntValue"),
        "{}",
        message
    );
}

#[tokio::test]
async fn test_bind_resolves_host_names() {
    let settings = ServerSettings {
        host: "localhost".to_string(),
        port: 0,
    };
    let listener = bind(&settings).await.unwrap();
    assert!(listener.local_addr().unwrap().ip().is_loopback());
}

#[tokio::test]
async fn test_bind_unknown_host_is_server_error() {
    let settings = ServerSettings {
        host: "not a host".to_string(),
        port: 0,
    };
    assert!(matches!(
        bind(&settings).await,
        Err(EmailqlError::Server(_))
    ));
}

#[tokio::test]
async fn test_get_serves_graphiql_to_browsers() {
    let response = app(&GraphqlSettings::default())
        .oneshot(
            Request::builder()
                .uri("/graphql")
                .header(header::ACCEPT, "text/html")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let html = String::from_utf8_lossy(&bytes).to_lowercase();
    assert!(html.contains("graphiql"));
}

#[tokio::test]
async fn test_get_without_html_accept_is_rejected() {
    let response = app(&GraphqlSettings::default())
        .oneshot(Request::builder().uri("/graphql").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_graphiql_disabled() {
    let settings = GraphqlSettings {
        graphiql: false,
        ..GraphqlSettings::default()
    };
    let response = app(&settings)
        .oneshot(
            Request::builder()
                .uri("/graphql")
                .header(header::ACCEPT, "text/html")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_custom_path() {
    let settings = GraphqlSettings {
        path: "/api".to_string(),
        ..GraphqlSettings::default()
    };

    let response = app(&settings)
        .oneshot(post_graphql("/api", "{ users { name } }"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app(&settings)
        .oneshot(post_graphql("/graphql", "{ users { name } }"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
