use httpmock::prelude::*;
use pizza_storefront::{App, QueryCache, StorefrontClient};
use std::sync::Arc;
use tempfile::TempDir;

fn catalog_json() -> serde_json::Value {
    serde_json::json!([
        {
            "id": "pepperoni",
            "name": "The Pepperoni Pizza",
            "category": "Classic",
            "description": "classic pepperoni",
            "image": "/public/pizzas/pepperoni.webp",
            "sizes": { "S": 11.25, "M": 15.25, "L": 19.25 }
        },
        {
            "id": "calabrese",
            "name": "The Calabrese Pizza",
            "category": "Supreme",
            "description": "spicy salami",
            "sizes": { "S": 12.25, "M": 16.25, "L": 20.25 }
        }
    ])
}

fn pizza_of_the_day_json() -> serde_json::Value {
    serde_json::json!({
        "id": "hawaiian",
        "name": "The Hawaiian Pizza",
        "category": "Classic",
        "description": "ham and pineapple",
        "image": "/public/pizzas/hawaiian.webp",
        "sizes": { "S": 10.25, "M": 14.25, "L": 18.25 }
    })
}

#[tokio::test]
async fn test_order_route_renders_to_file_end_to_end() {
    let temp_dir = TempDir::new().unwrap();

    let server = MockServer::start();
    let catalog_mock = server.mock(|when, then| {
        when.method(GET).path("/api/pizzas");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(catalog_json());
    });
    let potd_mock = server.mock(|when, then| {
        when.method(GET).path("/api/pizza-of-the-day");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(pizza_of_the_day_json());
    });

    let client = StorefrontClient::new(server.base_url());
    let app = App::new(client, Arc::new(QueryCache::new()));

    let output_dir = temp_dir.path().join("site");
    let output_file = app.render_to_dir("/", &output_dir).await.unwrap();

    catalog_mock.assert();
    potd_mock.assert();
    assert_eq!(output_file, output_dir.join("index.html"));

    let html = std::fs::read_to_string(&output_file).unwrap();
    assert!(html.contains("Padre Gino"));
    assert!(html.contains("The Pepperoni Pizza"));
    assert!(html.contains("The Calabrese Pizza"));
    assert!(html.contains("The Hawaiian Pizza"));
    assert!(html.contains("Your cart is empty."));

    // The calabrese record has no image, so the card falls back.
    assert!(html.contains("https://picsum.photos/200"));
}

#[tokio::test]
async fn test_catalog_is_cached_across_renders_but_promo_is_not() {
    let server = MockServer::start();
    let catalog_mock = server.mock(|when, then| {
        when.method(GET).path("/api/pizzas");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(catalog_json());
    });
    let potd_mock = server.mock(|when, then| {
        when.method(GET).path("/api/pizza-of-the-day");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(pizza_of_the_day_json());
    });

    let client = StorefrontClient::new(server.base_url());
    let app = App::new(client, Arc::new(QueryCache::new()));

    app.render("/").await.unwrap();
    app.render("/").await.unwrap();

    // Catalog goes through the shared query cache; the promotional
    // fetch is single-shot per page view.
    assert_eq!(catalog_mock.hits(), 1);
    assert_eq!(potd_mock.hits(), 2);
}

#[tokio::test]
async fn test_order_route_survives_a_failing_promo_endpoint() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/pizzas");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(catalog_json());
    });
    let potd_mock = server.mock(|when, then| {
        when.method(GET).path("/api/pizza-of-the-day");
        then.status(500);
    });

    let client = StorefrontClient::new(server.base_url());
    let app = App::new(client, Arc::new(QueryCache::new()));

    let html = app.render("/").await.unwrap();

    potd_mock.assert();
    assert!(html.contains("The Pepperoni Pizza"));
    assert!(html.contains("The pizza of the day is unavailable right now."));
}

#[tokio::test]
async fn test_cart_contents_show_up_on_the_order_page() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/pizzas");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(catalog_json());
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/pizza-of-the-day");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(pizza_of_the_day_json());
    });

    let client = StorefrontClient::new(server.base_url());
    let mut app = App::new(client.clone(), Arc::new(QueryCache::new()));

    let catalog: Vec<pizza_storefront::Pizza> = {
        use pizza_storefront::domain::ports::StorefrontApi;
        client.pizzas().await.unwrap()
    };
    app.cart_mut().add(catalog[0].clone(), "M").unwrap();

    let html = app.render("/").await.unwrap();
    assert!(html.contains("<li>The Pepperoni Pizza (M) $15.25</li>"));
    assert!(html.contains("Total: $15.25"));
}

#[tokio::test]
async fn test_failing_catalog_fails_the_order_route() {
    let server = MockServer::start();
    let catalog_mock = server.mock(|when, then| {
        when.method(GET).path("/api/pizzas");
        then.status(503);
    });

    let client = StorefrontClient::new(server.base_url());
    let app = App::new(client, Arc::new(QueryCache::new()));

    let err = app.render("/").await.unwrap_err();
    catalog_mock.assert();
    assert!(err.to_string().contains("503"));
}
