use ticker_report::{AppState, load_report, router};

use crate::common;

#[tokio::test]
async fn fetches_cookie_and_crumb_before_first_query() {
    let server = common::setup_server();
    let (cookie_mock, crumb_mock) = common::mock_cookie_crumb(&server);

    let sym = "AAPL";
    let api = common::mock_summary(&server, sym, "crumb-value", 200, common::report_fixture(sym));

    let client = common::fresh_client(&server);
    let report = load_report(&client, sym).await.unwrap();

    cookie_mock.assert();
    crumb_mock.assert();
    api.assert();
    assert_eq!(report.get("name").and_then(|v| v.as_str()), Some("Apple Inc."));
}

#[tokio::test]
async fn credentials_are_reused_across_requests() {
    let server = common::setup_server();
    let (cookie_mock, crumb_mock) = common::mock_cookie_crumb(&server);
    let api = common::mock_summary(&server, "AAPL", "crumb-value", 200, common::report_fixture("AAPL"));

    let state = AppState::new(common::fresh_client(&server));
    for _ in 0..3 {
        let (status, _, _) = common::get(router(state.clone()), "/query/AAPL").await;
        assert_eq!(status, 200);
    }

    cookie_mock.assert_hits(1);
    crumb_mock.assert_hits(1);
    api.assert_hits(3);
}

#[tokio::test]
async fn refreshes_crumb_once_on_invalid_crumb() {
    let server = common::setup_server();

    // Start with a stale crumb so the first call is rejected.
    let client = ticker_report::YfClient::builder()
        .base_quote_api(
            url::Url::parse(&format!("{}/v10/finance/quoteSummary/", server.base_url())).unwrap(),
        )
        .cookie_url(url::Url::parse(&format!("{}/consent", server.base_url())).unwrap())
        .crumb_url(url::Url::parse(&format!("{}/v1/test/getcrumb", server.base_url())).unwrap())
        .preauth("cookie", "stale-crumb")
        .build()
        .unwrap();

    let sym = "AAPL";
    let invalid = common::mock_summary(
        &server,
        sym,
        "stale-crumb",
        200,
        r#"{"quoteSummary":{"result":null,"error":{"description":"Invalid Crumb"}}}"#,
    );
    let (cookie_mock, crumb_mock) = common::mock_cookie_crumb(&server);
    let ok = common::mock_summary(&server, sym, "crumb-value", 200, common::report_fixture(sym));

    let report = load_report(&client, sym).await.unwrap();

    invalid.assert();
    cookie_mock.assert();
    crumb_mock.assert();
    ok.assert();
    assert_eq!(report.get("sector").and_then(|v| v.as_str()), Some("Technology"));
}

#[tokio::test]
async fn gives_up_after_second_invalid_crumb() {
    let server = common::setup_server();
    let (cookie_mock, crumb_mock) = common::mock_cookie_crumb(&server);
    let invalid = server.mock(|when, then| {
        when.method(httpmock::Method::GET)
            .path("/v10/finance/quoteSummary/AAPL");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"quoteSummary":{"result":null,"error":{"description":"Invalid Crumb"}}}"#);
    });

    let client = common::fresh_client(&server);
    let err = load_report(&client, "AAPL").await.unwrap_err();

    invalid.assert_hits(2);
    cookie_mock.assert_hits(2);
    crumb_mock.assert_hits(2);
    assert!(
        err.to_string().contains("Invalid Crumb"),
        "unexpected error: {err}"
    );
}

#[tokio::test]
async fn unauthorized_stale_crumb_is_cleared_and_refreshed() {
    let server = common::setup_server();

    let client = ticker_report::YfClient::builder()
        .base_quote_api(
            url::Url::parse(&format!("{}/v10/finance/quoteSummary/", server.base_url())).unwrap(),
        )
        .cookie_url(url::Url::parse(&format!("{}/consent", server.base_url())).unwrap())
        .crumb_url(url::Url::parse(&format!("{}/v1/test/getcrumb", server.base_url())).unwrap())
        .preauth("cookie", "stale-crumb")
        .build()
        .unwrap();

    let sym = "AAPL";
    let stale = common::mock_summary(
        &server,
        sym,
        "stale-crumb",
        401,
        r#"{"quoteSummary":{"result":null,"error":{"description":"Invalid Crumb"}}}"#,
    );
    let (cookie_mock, crumb_mock) = common::mock_cookie_crumb(&server);
    let ok = common::mock_summary(&server, sym, "crumb-value", 200, common::report_fixture(sym));

    let state = AppState::new(client);
    let mut statuses = Vec::new();
    for _ in 0..3 {
        let (status, _, _) = common::get(router(state.clone()), "/query/AAPL").await;
        statuses.push(status.as_u16());
    }

    assert_eq!(statuses, vec![200, 200, 200]);
    stale.assert_hits(1);
    cookie_mock.assert_hits(1);
    crumb_mock.assert_hits(1);
    ok.assert_hits(3);
}

#[tokio::test]
async fn forbidden_after_refresh_is_a_status_error() {
    let server = common::setup_server();
    let (cookie_mock, crumb_mock) = common::mock_cookie_crumb(&server);
    let forbidden = server.mock(|when, then| {
        when.method(httpmock::Method::GET)
            .path("/v10/finance/quoteSummary/AAPL");
        then.status(403).body("Forbidden");
    });

    let client = common::fresh_client(&server);
    let err = load_report(&client, "AAPL").await.unwrap_err();

    forbidden.assert_hits(2);
    cookie_mock.assert_hits(2);
    crumb_mock.assert_hits(2);
    assert!(
        matches!(err, ticker_report::YfError::Status { status: 403, .. }),
        "unexpected error: {err:?}"
    );
}
