// tests/api_tests.rs
use actix_web::{test, web, App};
use algosolver::api::handlers::{BatchSolveResponse, SolveResponse};
use algosolver::api::{configure_routes, AppState};
use algosolver::config::{EndpointConfig, PLACEHOLDER_URL};
use algosolver::models::{ErrorKind, HttpMethod, RequestOutcome};
use algosolver::providers::mock::MockProvider;
use algosolver::runner::Solver;
use serde_json::{json, Value};
use std::time::Duration;

fn state() -> AppState {
    let solver = Solver::new(reqwest::Client::new(), MockProvider::new(Duration::from_millis(5)));
    AppState::with_solver(solver, EndpointConfig::default())
}

#[actix_web::test]
async fn test_health_check() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state()))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/v1/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "algosolver");
}

#[actix_web::test]
async fn test_solve_in_mock_mode() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state()))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/solve")
        .set_json(json!({ "slug": "two-sum", "platform": "leetcode" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: SolveResponse = test::read_body_json(resp).await;
    assert_eq!(body.mode, "mock");
    assert!(!body.id.is_empty());
    match body.outcome {
        RequestOutcome::Success(solution) => {
            assert_eq!(solution.language.as_deref(), Some("python"));
            assert!(solution.code.contains("two-sum"));
        }
        RequestOutcome::Failure(e) => panic!("unexpected failure: {}", e.message),
    }
}

#[actix_web::test]
async fn test_solve_blank_slug_is_bad_request() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state()))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/solve")
        .set_json(json!({ "slug": "  ", "platform": "atcoder", "language": "cpp" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: SolveResponse = test::read_body_json(resp).await;
    assert_eq!(body.outcome.error().map(|e| e.kind), Some(ErrorKind::Validation));
}

#[actix_web::test]
async fn test_unknown_platform_is_rejected() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state()))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/solve")
        .set_json(json!({ "slug": "two-sum", "platform": "topcoder" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_config_update_applies_to_next_solve() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state()))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::put()
        .uri("/api/v1/config")
        .set_json(json!({ "use_mock": false, "method": "GET" }))
        .to_request();
    let updated: EndpointConfig = test::call_and_read_body_json(&app, req).await;
    assert!(!updated.use_mock);
    assert_eq!(updated.method, HttpMethod::Get);
    assert_eq!(updated.url, PLACEHOLDER_URL);

    let req = test::TestRequest::get().uri("/api/v1/config").to_request();
    let current: EndpointConfig = test::call_and_read_body_json(&app, req).await;
    assert_eq!(current, updated);

    let req = test::TestRequest::post()
        .uri("/api/v1/solve")
        .set_json(json!({ "slug": "two-sum", "platform": "leetcode" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: SolveResponse = test::read_body_json(resp).await;
    assert_eq!(body.mode, "live");
    assert_eq!(body.outcome.error().map(|e| e.kind), Some(ErrorKind::Validation));
}

#[actix_web::test]
async fn test_config_update_rejects_unknown_fields() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state()))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::put()
        .uri("/api/v1/config")
        .set_json(json!({ "retries": 3 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_batch_reports_each_outcome() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state()))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/solve/batch")
        .set_json(json!([
            { "slug": "two-sum", "platform": "leetcode", "language": "javascript" },
            { "slug": "", "platform": "codeforces" },
            { "slug": "1234/A", "platform": "codeforces", "language": "cpp" }
        ]))
        .to_request();
    let body: BatchSolveResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body.total, 3);
    assert_eq!(body.succeeded, 2);
    assert_eq!(body.failed, 1);
    assert!(body.results[0].outcome.is_success());
    assert!(!body.results[1].outcome.is_success());
    assert_eq!(
        body.results[2].outcome.solution().and_then(|s| s.language.as_deref()),
        Some("cpp")
    );
}

#[actix_web::test]
async fn test_enum_values_are_case_insensitive() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state()))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::put()
        .uri("/api/v1/config")
        .set_json(json!({ "method": "get" }))
        .to_request();
    let updated: EndpointConfig = test::call_and_read_body_json(&app, req).await;
    assert_eq!(updated.method, HttpMethod::Get);

    let req = test::TestRequest::post()
        .uri("/api/v1/solve")
        .set_json(json!({ "slug": "two-sum", "platform": "LeetCode", "language": "CPP" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: SolveResponse = test::read_body_json(resp).await;
    let solution = body.outcome.solution().expect("mock mode succeeds");
    assert_eq!(solution.platform.as_deref(), Some("leetcode"));
    assert_eq!(solution.language.as_deref(), Some("cpp"));
}

#[actix_web::test]
async fn test_unreachable_endpoint_is_bad_gateway() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state()))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::put()
        .uri("/api/v1/config")
        .set_json(json!({ "url": "http://127.0.0.1:1/solve", "use_mock": false }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let req = test::TestRequest::post()
        .uri("/api/v1/solve")
        .set_json(json!({ "slug": "two-sum", "platform": "leetcode" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 502);

    let body: SolveResponse = test::read_body_json(resp).await;
    assert_eq!(body.mode, "live");
    assert_eq!(body.outcome.error().map(|e| e.kind), Some(ErrorKind::Transport));
}
