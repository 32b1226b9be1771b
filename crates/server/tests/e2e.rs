use std::net::SocketAddr;

use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;

use configs::DatabaseConfig;

struct TestApp {
    base_url: String,
}

async fn start_server() -> anyhow::Result<TestApp> {
    let cfg = DatabaseConfig {
        url: "sqlite::memory:".into(),
        max_connections: 1,
        min_connections: 1,
        ..Default::default()
    };
    let db = server::startup::connect_database(&cfg).await?;
    service::seed::seed(&db).await?;

    let app = server::startup::build_app(db);
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = reqwest::get(format!("{}/health", app.base_url)).await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_create_then_delete_restaurant() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();

    let restaurants: Value = c.get(format!("{}/restaurants", app.base_url)).send().await?.json().await?;
    let pizzas: Value = c.get(format!("{}/pizzas", app.base_url)).send().await?.json().await?;
    let rid = restaurants[1]["id"].clone();
    let pid = pizzas[2]["id"].clone();

    let res = c
        .post(format!("{}/restaurant_pizzas", app.base_url))
        .json(&json!({"price": 12.5, "pizza_id": pid, "restaurant_id": rid}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let created: Value = res.json().await?;
    assert_eq!(created["price"], json!(12.5));
    assert_eq!(created["restaurant"]["id"], rid);

    let res = c.delete(format!("{}/restaurants/{}", app.base_url, rid)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NO_CONTENT);

    let res = c.get(format!("{}/restaurants/{}", app.base_url, rid)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    assert_eq!(res.json::<Value>().await?, json!({"error": "Restaurant not found"}));

    let pizzas_after: Value = c.get(format!("{}/pizzas", app.base_url)).send().await?.json().await?;
    assert_eq!(pizzas_after, pizzas);
    Ok(())
}

#[tokio::test]
async fn e2e_invalid_create_is_400() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = reqwest::Client::new()
        .post(format!("{}/restaurant_pizzas", app.base_url))
        .header("content-type", "application/json")
        .body("{\"price\": ")
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    assert_eq!(res.json::<Value>().await?, json!({"errors": ["validation errors"]}));
    Ok(())
}
