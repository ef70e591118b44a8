//! Failure injection tests for the geolocation upstream.
//!
//! Every upstream failure must still produce a 200 with placeholder geo fields.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;

mod common;

const SUCCESS_BODY: &str = r#"{"status":"success","country":"Vietnam","regionName":"Hanoi","city":"Hanoi","isp":"Viettel","proxy":false}"#;

async fn fetch_json(addr: std::net::SocketAddr) -> (u16, Value) {
    let res = common::client()
        .get(format!("http://{}/json", addr))
        .header("x-forwarded-for", "198.51.100.9")
        .header("user-agent", "Mozilla/5.0 (X11; Linux x86_64)")
        .send()
        .await
        .expect("Server unreachable");
    let status = res.status().as_u16();
    (status, res.json().await.unwrap())
}

fn assert_unknown_geo(body: &Value) {
    for key in ["city", "region_name", "country", "isp", "proxy"] {
        assert_eq!(body[key], "Unknown", "{key} should fall back to the placeholder");
    }
}

#[tokio::test]
async fn test_upstream_success_fills_record() {
    let upstream = common::start_mock_upstream(SUCCESS_BODY).await;
    let (addr, shutdown) = common::start_server(common::config_with_upstream(upstream, 2)).await;

    let (status, body) = fetch_json(addr).await;

    assert_eq!(status, 200);
    assert_eq!(body["ip"], "198.51.100.9");
    assert_eq!(body["city"], "Hanoi");
    assert_eq!(body["region_name"], "Hanoi");
    assert_eq!(body["country"], "Vietnam");
    assert_eq!(body["isp"], "Viettel");
    assert_eq!(body["proxy"], "No");
    assert_eq!(body["user_agent"], "Mozilla/5.0 (X11; Linux x86_64)");

    shutdown.trigger();
}

#[tokio::test]
async fn test_upstream_reported_failure_degrades() {
    let upstream =
        common::start_mock_upstream(r#"{"status":"fail","message":"reserved range"}"#).await;
    let (addr, shutdown) = common::start_server(common::config_with_upstream(upstream, 2)).await;

    let (status, body) = fetch_json(addr).await;

    assert_eq!(status, 200);
    assert_eq!(body["ip"], "198.51.100.9");
    assert_unknown_geo(&body);

    shutdown.trigger();
}

#[tokio::test]
async fn test_upstream_http_error_degrades() {
    let calls = Arc::new(AtomicU32::new(0));
    let c = calls.clone();
    let upstream = common::start_programmable_upstream(move || {
        let c = c.clone();
        async move {
            c.fetch_add(1, Ordering::SeqCst);
            (500, "oops".to_string())
        }
    })
    .await;
    let (addr, shutdown) = common::start_server(common::config_with_upstream(upstream, 2)).await;

    let (status, body) = fetch_json(addr).await;

    assert_eq!(status, 200);
    assert_unknown_geo(&body);
    assert_eq!(calls.load(Ordering::SeqCst), 1, "No retries on upstream failure");

    shutdown.trigger();
}

#[tokio::test]
async fn test_slow_upstream_times_out() {
    let upstream = common::start_programmable_upstream(|| async {
        tokio::time::sleep(Duration::from_secs(3)).await;
        (200, SUCCESS_BODY.to_string())
    })
    .await;
    let (addr, shutdown) = common::start_server(common::config_with_upstream(upstream, 1)).await;

    let started = std::time::Instant::now();
    let (status, body) = fetch_json(addr).await;

    assert_eq!(status, 200);
    assert_unknown_geo(&body);
    assert!(started.elapsed() < Duration::from_secs(3), "Lookup should be cut off by its timeout");

    shutdown.trigger();
}

#[tokio::test]
async fn test_unreachable_upstream_degrades_html_page() {
    // Bind then drop to get a port with nothing listening
    let dead = {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap()
    };
    let (addr, shutdown) = common::start_server(common::config_with_upstream(dead, 1)).await;

    let res = common::client()
        .get(format!("http://{}/", addr))
        .header("cf-connecting-ip", "203.0.113.7")
        .header("user-agent", "Mozilla/5.0")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 200);
    let html = res.text().await.unwrap();
    assert!(html.contains("203.0.113.7"));
    assert!(html.contains("Unknown"));

    shutdown.trigger();
}

#[tokio::test]
async fn test_cli_client_skips_upstream() {
    let calls = Arc::new(AtomicU32::new(0));
    let c = calls.clone();
    let upstream = common::start_programmable_upstream(move || {
        let c = c.clone();
        async move {
            c.fetch_add(1, Ordering::SeqCst);
            (200, SUCCESS_BODY.to_string())
        }
    })
    .await;
    let (addr, shutdown) = common::start_server(common::config_with_upstream(upstream, 2)).await;

    let res = common::client()
        .get(format!("http://{}/", addr))
        .header("x-real-ip", "198.51.100.20")
        .header("user-agent", "curl/7.88.1")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 200);
    assert_eq!(res.text().await.unwrap(), "198.51.100.20");
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    shutdown.trigger();
}

#[tokio::test]
async fn test_shutdown_stops_server() {
    let upstream = common::start_mock_upstream(SUCCESS_BODY).await;
    let (addr, shutdown) = common::start_server(common::config_with_upstream(upstream, 1)).await;

    shutdown.trigger();
    tokio::time::sleep(Duration::from_millis(200)).await;

    let result = common::client()
        .get(format!("http://{}/health", addr))
        .send()
        .await;
    assert!(result.is_err(), "Server should refuse connections after shutdown");
}
