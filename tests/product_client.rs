use std::time::Duration;

use discount_service::clients::product::{HttpProductClient, ProductClient, ProductClientError};
use mockito::Matcher;
use serde_json::json;

fn client_for(server: &mockito::ServerGuard) -> HttpProductClient {
    HttpProductClient::new(&format!("{}/app/products/", server.url()), Duration::from_secs(5))
        .expect("client builds")
}

#[actix_web::test]
async fn get_product_returns_payload() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/app/products/7")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id":7,"nombre":"Cafe","precio":"120.50"}"#)
        .create_async()
        .await;

    let product = client_for(&server)
        .get_product("7")
        .await
        .expect("request succeeds")
        .expect("product present");

    mock.assert_async().await;
    assert_eq!(product.price(), Some(120.5));
    assert_eq!(product.fields().get("nombre"), Some(&json!("Cafe")));
}

#[actix_web::test]
async fn get_product_treats_404_as_missing() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/app/products/8")
        .with_status(404)
        .with_body(r#"{"message":"not found"}"#)
        .create_async()
        .await;

    let product = client_for(&server).get_product("8").await.expect("request succeeds");

    assert!(product.is_none());
}

#[actix_web::test]
async fn get_product_treats_empty_or_null_body_as_missing() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/app/products/1")
        .with_status(200)
        .with_body("")
        .create_async()
        .await;
    let _null_mock = server
        .mock("GET", "/app/products/2")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("null")
        .create_async()
        .await;

    let client = client_for(&server);

    assert!(client.get_product("1").await.expect("request succeeds").is_none());
    assert!(client.get_product("2").await.expect("request succeeds").is_none());
}

#[actix_web::test]
async fn get_product_surfaces_server_errors() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/app/products/3")
        .with_status(503)
        .create_async()
        .await;

    let result = client_for(&server).get_product("3").await;

    assert!(matches!(result, Err(ProductClientError::Status(503))));
}

#[actix_web::test]
async fn get_product_rejects_malformed_json() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/app/products/4")
        .with_status(200)
        .with_body("{not json")
        .create_async()
        .await;

    let result = client_for(&server).get_product("4").await;

    assert!(matches!(result, Err(ProductClientError::Decode(_))));
}

#[actix_web::test]
async fn update_product_price_patches_update_route() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("PATCH", "/app/products/update/7")
        .match_body(Matcher::Json(json!({ "precio": 75.0 })))
        .with_status(200)
        .with_body(r#"{"message":"ok"}"#)
        .create_async()
        .await;

    client_for(&server)
        .update_product_price("7", 75.0)
        .await
        .expect("request succeeds");

    mock.assert_async().await;
}

#[actix_web::test]
async fn update_product_price_surfaces_failure() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("PATCH", "/app/products/update/7")
        .with_status(500)
        .create_async()
        .await;

    let result = client_for(&server).update_product_price("7", 10.0).await;

    assert!(matches!(result, Err(ProductClientError::Status(500))));
}

#[actix_web::test]
async fn get_product_forwards_opaque_ids() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/app/products/sku-42")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id":"sku-42","precio":10}"#)
        .create_async()
        .await;

    let product = client_for(&server)
        .get_product("sku-42")
        .await
        .expect("request succeeds");

    mock.assert_async().await;
    assert_eq!(product.and_then(|p| p.price()), Some(10.0));
}

#[actix_web::test]
async fn unreachable_service_is_a_network_error() {
    let client = HttpProductClient::new("http://127.0.0.1:9", Duration::from_secs(2))
        .expect("client builds");

    let result = client.get_product("1").await;

    assert!(matches!(result, Err(ProductClientError::Network(_))));
}
