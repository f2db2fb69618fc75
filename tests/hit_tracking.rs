//! End-to-end tests for hit counting and the admin surface.

use serde_json::json;

mod common;

async fn metrics_page(client: &reqwest::Client, base: &str) -> String {
    client
        .get(format!("{base}/admin/metrics"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap()
}

#[tokio::test]
async fn concurrent_static_hits_are_all_counted() {
    let base = common::spawn_server().await;
    let client = reqwest::Client::new();

    let mut tasks = Vec::new();
    for _ in 0..3 {
        let client = client.clone();
        let url = format!("{base}/app/");
        tasks.push(tokio::spawn(async move {
            client.get(&url).send().await.unwrap().status()
        }));
    }
    for task in tasks {
        assert_eq!(task.await.unwrap(), 200);
    }

    let page = metrics_page(&client, &base).await;
    assert!(page.contains("visited 3 times"), "unexpected page: {page}");
}

#[tokio::test]
async fn static_site_serves_the_welcome_page() {
    let base = common::spawn_server().await;

    let res = reqwest::get(format!("{base}/app/")).await.unwrap();

    assert_eq!(res.status(), 200);
    let content_type = res.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/html"), "got {content_type}");
    assert!(res.text().await.unwrap().contains("Welcome to Chirpy"));
}

#[tokio::test]
async fn missing_static_file_is_404_but_still_counted() {
    let base = common::spawn_server().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{base}/app/no-such-file.txt"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 404);

    let page = metrics_page(&client, &base).await;
    assert!(page.contains("visited 1 times"), "unexpected page: {page}");
}

#[tokio::test]
async fn reset_clears_the_counter() {
    let base = common::spawn_server().await;
    let client = reqwest::Client::new();

    for _ in 0..2 {
        client
            .get(format!("{base}/app/"))
            .send()
            .await
            .unwrap();
    }
    let page = metrics_page(&client, &base).await;
    assert!(page.contains("visited 2 times"), "unexpected page: {page}");

    let res = client
        .post(format!("{base}/admin/reset"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(res.text().await.unwrap(), "Hits reset to 0");

    let page = metrics_page(&client, &base).await;
    assert!(page.contains("visited 0 times"), "unexpected page: {page}");
}

#[tokio::test]
async fn api_and_admin_requests_do_not_count_as_hits() {
    let base = common::spawn_server().await;
    let client = reqwest::Client::new();

    reqwest::get(format!("{base}/healthz")).await.unwrap();
    client
        .post(format!("{base}/api/validate_chirp"))
        .json(&json!({ "body": "hello" }))
        .send()
        .await
        .unwrap();

    let page = metrics_page(&client, &base).await;
    assert!(page.contains("visited 0 times"), "unexpected page: {page}");
}
