#![cfg(feature = "async")]

mod common;

use std::time::{Duration, Instant};

use mystrom::{tokio::AsyncSwitch, Error};

use common::{closed_host, serve_once, stall_once};

#[tokio::test]
async fn async_report() {
    let (host, server) = serve_once(r#"{"power": 12.5, "relay": true}"#);
    let switch = AsyncSwitch::new(&host).unwrap();

    let report = switch.report().await.unwrap();

    assert_eq!(12.5, report.power);
    assert!(report.relay);
    assert_eq!("GET /report HTTP/1.1", server.join().unwrap());
}

#[tokio::test]
async fn async_temperature() {
    let (host, server) =
        serve_once(r#"{"measured": 21.0, "compensation": 0.5, "compensated": 21.5}"#);

    let temp = AsyncSwitch::new(&host).unwrap().temperature().await.unwrap();

    assert_eq!(21.5, temp.compensated);
    server.join().unwrap();
}

#[tokio::test]
async fn async_toggle() {
    let (host, server) = serve_once("");

    AsyncSwitch::new(&host).unwrap().toggle().await.unwrap();

    assert_eq!("GET /toggle HTTP/1.1", server.join().unwrap());
}

#[tokio::test]
async fn async_malformed_body() {
    let (host, server) = serve_once("not json");

    let result = AsyncSwitch::new(&host).unwrap().report().await;

    assert!(matches!(result, Err(Error::Decode(_))));
    server.join().unwrap();
}

#[tokio::test]
async fn async_connection_refused() {
    let switch = AsyncSwitch::new(&closed_host()).unwrap();

    assert!(matches!(switch.turn_on().await, Err(Error::Network(_))));
}

#[tokio::test]
async fn async_timeout_cuts_off_silent_device() {
    let host = stall_once(Duration::from_secs(5));
    let switch = AsyncSwitch::with_timeout(&host, Duration::from_millis(300)).unwrap();

    let started = Instant::now();
    let result = switch.report().await;

    assert!(matches!(result, Err(Error::Network(_))));
    assert!(started.elapsed() < Duration::from_secs(3));
}
