#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use vitals_server::{app_state::AppState, router};

/// Bind an ephemeral port and serve the real router behind it.
async fn spawn_server() -> String {
    let app = router::build_router(AppState::new());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn update_then_read_gauge() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/update/gauge/temperature/36.6"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    assert_eq!(resp.text().await.unwrap(), "");

    let resp = client
        .get(format!("{base}/value/gauge/temperature"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    assert_eq!(resp.text().await.unwrap(), "36.6");
}

#[tokio::test]
async fn gauge_updates_overwrite() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    for value in ["1.0", "2.5"] {
        let resp = client
            .post(format!("{base}/update/gauge/load/{value}"))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status().as_u16(), 200);
    }

    let body = client
        .get(format!("{base}/value/gauge/load"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert_eq!(body, "2.5");
}

#[tokio::test]
async fn counter_updates_accumulate() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    for value in ["5", "3"] {
        let resp = client
            .post(format!("{base}/update/counter/hits/{value}"))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status().as_u16(), 200);
    }

    let body = client
        .get(format!("{base}/value/counter/hits"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert_eq!(body, "8");
}

#[tokio::test]
async fn unknown_kind_on_update_is_bad_request() {
    let base = spawn_server().await;
    let resp = reqwest::Client::new()
        .post(format!("{base}/update/bogus/x/1"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 400);
}

#[tokio::test]
async fn malformed_value_is_bad_request() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/update/gauge/temperature/not-a-number"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 400);

    let resp = client
        .post(format!("{base}/update/counter/hits/1.5"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 400);

    // The rejected write must not have created the metric.
    let resp = client
        .get(format!("{base}/value/gauge/temperature"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 404);
}

#[tokio::test]
async fn missing_metric_is_not_found() {
    let base = spawn_server().await;
    let resp = reqwest::Client::new()
        .get(format!("{base}/value/counter/missing"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 404);
}

#[tokio::test]
async fn unknown_kind_on_read_is_not_found() {
    let base = spawn_server().await;
    let resp = reqwest::Client::new()
        .get(format!("{base}/value/bogus/anything"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 404);
}

#[tokio::test]
async fn index_lists_gauges_and_counters_as_html() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    client
        .post(format!("{base}/update/gauge/temperature/36.6"))
        .send()
        .await
        .unwrap();
    client
        .post(format!("{base}/update/counter/hits/5"))
        .send()
        .await
        .unwrap();

    let resp = client.get(format!("{base}/")).send().await.unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    let content_type = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/html"));

    let body = resp.text().await.unwrap();
    assert!(body.contains("<ul>"));
    assert!(body.contains("<li>temperature: 36.6</li>"));
    assert!(body.contains("<li>hits: 5</li>"));
}
