//! API client tests against a live localhost socket.

#![allow(clippy::unwrap_used)]

use portfolio_core::{RegisterRequest, Role};
use portfolio_integration_tests::StubApi;
use portfolio_site::api::{
    ApiClient, ApiError, NoToken, RequestOptions,
    endpoints::{CurrentUser, ListContacts, ListUsers, Register},
};
use portfolio_site::config::ApiConfig;
use secrecy::SecretString;
use serde_json::Value;

fn client(stub: &StubApi) -> ApiClient {
    ApiClient::new(&ApiConfig {
        base_url: stub.base_url.clone(),
    })
    .unwrap()
}

#[tokio::test]
async fn test_http_error_status_in_message() {
    let stub = StubApi::spawn().await;
    let err = client(&stub)
        .request(&NoToken, "/missing", RequestOptions::default())
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Http { status: 404 }));
    assert!(err.to_string().contains("404"));
}

#[tokio::test]
async fn test_bearer_token_reaches_server() {
    let stub = StubApi::spawn().await;
    let api = client(&stub);

    api.request(&NoToken, "/users", RequestOptions::default())
        .await
        .unwrap();
    api.request(
        &SecretString::from("abc123"),
        "/users",
        RequestOptions::default(),
    )
    .await
    .unwrap();

    assert_eq!(
        stub.authorizations(),
        vec![None, Some("Bearer abc123".to_string())]
    );
}

#[tokio::test]
async fn test_empty_body_is_null() {
    let stub = StubApi::spawn().await;
    let value = client(&stub)
        .request(&NoToken, "/empty", RequestOptions::default())
        .await
        .unwrap();
    assert_eq!(value, Value::Null);
}

#[tokio::test]
async fn test_typed_call_decodes_envelope() {
    let stub = StubApi::spawn().await;
    let api = client(&stub);

    let users = api.call(&NoToken, &ListUsers::default()).await.unwrap();
    let items = users.items().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].role_or_default(), Role::Admin);
    assert_eq!(items[1].role_or_default(), Role::User);

    let contacts = api.call(&NoToken, &ListContacts::default()).await.unwrap();
    assert_eq!(contacts.total(), 12);
}

#[tokio::test]
async fn test_unreachable_backend_is_transport_error() {
    let api = ApiClient::new(&ApiConfig {
        base_url: portfolio_integration_tests::UNREACHABLE_API.to_string(),
    })
    .unwrap();
    let err = api
        .request(&NoToken, "/users", RequestOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}

#[tokio::test]
async fn test_register_then_current_user() {
    let stub = StubApi::spawn().await;
    let api = client(&stub);

    let registered = api
        .call(
            &NoToken,
            &Register(RegisterRequest {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                password: "hunter22".to_string(),
                role: None,
            }),
        )
        .await
        .unwrap();
    let user = registered.user().unwrap();
    assert_eq!(user.name, "Ada");
    assert_eq!(user.role, None);
    assert_eq!(user.role_or_default(), Role::User);
    let token = SecretString::from(registered.token().unwrap().to_string());

    let me = api.call(&token, &CurrentUser).await.unwrap();
    assert_eq!(me.into_items().unwrap().name, "Charbel");

    let err = api.call(&NoToken, &CurrentUser).await.unwrap_err();
    assert!(matches!(err, ApiError::Http { status: 401 }));
}
