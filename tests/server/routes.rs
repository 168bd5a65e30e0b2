use axum::http::Method;
use serde_json::json;
use ticker_report::{AppState, PUBLIC_CACHE_CONTROL, router};

use crate::common::{self, StubSummaries};

fn app(stub: &StubSummaries) -> axum::Router {
    router(AppState::new(stub.clone()))
}

#[tokio::test]
async fn root_says_hello() {
    let stub = StubSummaries::failing();
    let (status, headers, body) = common::get(app(&stub), "/").await;

    assert_eq!(status, 200);
    assert_eq!(headers["cache-control"], PUBLIC_CACHE_CONTROL);
    assert!(
        headers["content-type"]
            .to_str()
            .unwrap()
            .starts_with("application/json")
    );
    assert_eq!(body, json!({"message": "hello!"}));
    assert_eq!(stub.calls(), 0);
}

#[tokio::test]
async fn unknown_paths_are_not_found() {
    let stub = StubSummaries::failing();
    for uri in ["/nope", "/query/AAPL/extra", "/api/query/AAPL", "/Query/AAPL"] {
        let (status, headers, body) = common::get(app(&stub), uri).await;
        assert_eq!(status, 404, "{uri}");
        assert_eq!(headers["cache-control"], PUBLIC_CACHE_CONTROL, "{uri}");
        assert_eq!(body, json!({"message": "Not Found"}), "{uri}");
    }
    assert_eq!(stub.calls(), 0);
}

#[tokio::test]
async fn unsupported_methods_are_not_found() {
    let stub = StubSummaries::failing();
    for (method, uri) in [
        (Method::POST, "/"),
        (Method::DELETE, "/query/AAPL"),
        (Method::PUT, "/query/"),
        (Method::PATCH, "/elsewhere"),
    ] {
        let (status, headers, body) = common::send(app(&stub), method.clone(), uri).await;
        assert_eq!(status, 404, "{method} {uri}");
        assert_eq!(headers["cache-control"], PUBLIC_CACHE_CONTROL);
        assert_eq!(body, json!({"message": "Not Found"}));
    }
    assert_eq!(stub.calls(), 0);
}

#[tokio::test]
async fn missing_or_blank_symbol_is_invalid_input() {
    let stub = StubSummaries::failing();
    for uri in ["/query", "/query/", "/query/%20", "/query/%20%20"] {
        let (status, headers, body) = common::get(app(&stub), uri).await;
        assert_eq!(status, 400, "{uri}");
        assert_eq!(headers["cache-control"], PUBLIC_CACHE_CONTROL, "{uri}");
        assert_eq!(body, json!({"message": "Invalid Input"}), "{uri}");
    }
    assert_eq!(stub.calls(), 0, "no upstream call for invalid input");
}
