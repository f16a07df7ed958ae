use std::sync::{Arc, Mutex};
use serde_json::Value;
use warp::Filter;

#[derive(Debug, Clone)]
pub struct Canned {
    pub status: u16,
    pub body: String,
}

impl Canned {
    pub fn json(status: u16, body: Value) -> Self {
        Self { status, body: body.to_string() }
    }

    pub fn text(status: u16, body: &str) -> Self {
        Self { status, body: body.to_string() }
    }
}

#[derive(Debug, Clone)]
pub struct Recorded {
    pub endpoint: String,
    pub content_type: String,
    pub body: Value,
}

/// A local stand-in for both AI endpoints under `/v1/ai/{copilot,blackbox}`.
pub struct MockServer {
    pub base_url: String,
    received: Arc<Mutex<Vec<Recorded>>>,
}

impl MockServer {
    pub async fn start(copilot: Canned, blackbox: Canned) -> Self {
        let received = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&received);

        let route = warp::post()
            .and(warp::path!("v1" / "ai" / String))
            .and(warp::header::<String>("content-type"))
            .and(warp::body::json())
            .map(move |endpoint: String, content_type: String, body: Value| {
                let canned = if endpoint == "copilot" { &copilot } else { &blackbox };
                log.lock().unwrap().push(Recorded { endpoint, content_type, body });

                warp::http::Response::builder()
                    .status(canned.status)
                    .body(canned.body.clone())
                    .unwrap()
            });

        let (addr, server) = warp::serve(route).bind_ephemeral(([127, 0, 0, 1], 0));
        tokio::spawn(server);

        Self {
            base_url: format!("http://{}/v1/ai", addr),
            received,
        }
    }

    pub fn received(&self) -> Vec<Recorded> {
        self.received.lock().unwrap().clone()
    }
}

/// Base URL of a port nothing listens on.
pub fn unreachable_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/v1/ai", port)
}
