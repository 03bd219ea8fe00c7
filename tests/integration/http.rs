//! HTTP endpoints over a real socket.

use std::net::SocketAddr;
use std::sync::Arc;

use super::common::{vocabulary, ENGLISH_WORDS};
use majuscule::server::serve_on;
use majuscule::Suggester;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

async fn start_server() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let suggester = Arc::new(Suggester::new(vocabulary(ENGLISH_WORDS), None));
    tokio::spawn(serve_on(listener, suggester));
    addr
}

/// Send one request and return `(status, body)`.
async fn request(addr: SocketAddr, method: &str, path: &str, body: &str) -> (u16, String) {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    let raw = format!(
        "{method} {path} HTTP/1.1\r\n\
         Host: localhost\r\n\
         Content-Type: application/json\r\n\
         Content-Length: {}\r\n\
         Connection: close\r\n\
         \r\n\
         {body}",
        body.len()
    );
    stream.write_all(raw.as_bytes()).await.unwrap();

    let mut response = String::new();
    stream.read_to_string(&mut response).await.unwrap();

    let status = response
        .split_whitespace()
        .nth(1)
        .and_then(|code| code.parse().ok())
        .unwrap();
    let body = response
        .split_once("\r\n\r\n")
        .map(|(_, body)| body.to_string())
        .unwrap_or_default();
    (status, body)
}

#[tokio::test]
async fn get_complete_returns_ranked_hashtags() {
    let addr = start_server().await;
    let (status, body) = request(addr, "GET", "/complete?input=thisisatest&count=2", "").await;

    assert_eq!(status, 200);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["input"], "thisisatest");
    assert_eq!(json["count"], 2);
    assert_eq!(json["hashtags"].as_array().unwrap().len(), 2);
    assert_eq!(json["hashtags"][0]["tag"], "ThisIsATest");
    assert!(json.get("matches").is_none());
}

#[tokio::test]
async fn get_complete_with_debug_includes_matches() {
    let addr = start_server().await;
    let (status, body) = request(addr, "GET", "/complete?input=cleaner&debug=true", "").await;

    assert_eq!(status, 200);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["count"], 5);
    assert!(!json["matches"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn get_complete_rejects_bad_count() {
    let addr = start_server().await;
    let (status, body) = request(addr, "GET", "/complete?input=abc&count=lots", "").await;

    assert_eq!(status, 400);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["error"], "Invalid count");
}

#[tokio::test]
async fn post_complete_answers_each_input() {
    let addr = start_server().await;
    let body = r#"{"inputs": ["hashtag", "sunday"], "count": 1, "debug": false}"#;
    let (status, body) = request(addr, "POST", "/complete", body).await;

    assert_eq!(status, 200);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    let responses = json.as_array().unwrap();
    assert_eq!(responses.len(), 2);
    assert_eq!(responses[0]["hashtags"][0]["tag"], "Hashtag");
    assert_eq!(responses[1]["hashtags"][0]["tag"], "Sunday");
}

#[tokio::test]
async fn post_complete_rejects_malformed_body() {
    let addr = start_server().await;
    let (status, body) = request(addr, "POST", "/complete", r#"{"inputs": "#).await;

    assert_eq!(status, 400);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["error"], "Invalid request");
}

#[cfg(feature = "client")]
mod client {
    use super::start_server;
    use majuscule::client::Client;
    use majuscule::error::ClientError;
    use majuscule::CompleteRequest;

    /// Direct connections only, whatever proxy the environment sets.
    fn local_client(base: String) -> Client {
        let http = reqwest::Client::builder().no_proxy().build().unwrap();
        Client::with_http_client(&base, http)
    }

    #[tokio::test]
    async fn client_posts_batch_and_decodes_responses() {
        let addr = start_server().await;
        let client = local_client(format!("http://{}/", addr));
        let request = CompleteRequest {
            inputs: vec!["thisisatest".into(), "cleaner".into(), "x1".into()],
            count: 2,
            debug: true,
        };

        let responses = client.complete(&request).await.unwrap();

        assert_eq!(responses.len(), 3);
        assert_eq!(responses[0].input, "thisisatest");
        assert_eq!(responses[0].hashtags.len(), 2);
        assert_eq!(responses[0].hashtags[0].tag, "ThisIsATest");
        assert_eq!(responses[1].hashtags[0].tag, "Cleaner");
        assert!(responses[2].hashtags.is_empty());
        assert!(responses.iter().all(|r| r.matches.is_some()));
    }

    #[tokio::test]
    async fn client_reports_error_status() {
        let addr = start_server().await;
        let client = local_client(format!("http://{}/missing", addr));
        let request = CompleteRequest {
            inputs: vec!["cleaner".into()],
            count: 1,
            debug: false,
        };

        let err = client.complete(&request).await.unwrap_err();
        match err {
            ClientError::Status { status, url, .. } => {
                assert_eq!(status.as_u16(), 404);
                assert!(url.ends_with("/missing/complete"));
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn client_reports_unreachable_server() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = local_client(format!("http://{}", addr));
        let request = CompleteRequest {
            inputs: vec!["cleaner".into()],
            count: 1,
            debug: false,
        };
        let err = client.complete(&request).await.unwrap_err();
        assert!(matches!(err, ClientError::Request { .. }));
    }
}
