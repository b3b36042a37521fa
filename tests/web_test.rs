// ASIC ROI Calculator - Free and Open Source Software Statement
//
// This project, asic-roi, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: tests/web_test.rs
// Version: 1.0.1
//
// Integration tests for the calculator web server. Requests are sent straight
// to the router with tower's `oneshot`, no socket involved.
//
// Tree Location:
// - tests/web_test.rs (HTTP handler tests)
// - Depends on: asic-roi, axum, tower, tokio

#[cfg(test)]
mod tests {
    use asic_roi::web::router;
    use asic_roi::{AppConfig, RoiResult, Theme};
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use tower::ServiceExt;

    async fn send(request: Request<Body>) -> (StatusCode, String) {
        let response = router(AppConfig::default())
            .oneshot(request)
            .await
            .expect("Router should not fail");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");
        (status, String::from_utf8(bytes.to_vec()).expect("Body should be UTF-8"))
    }

    fn form_post(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .expect("Failed to build request")
    }

    #[tokio::test]
    async fn test_index_serves_empty_form() {
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        let (status, html) = send(request).await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("<form"), "Page should contain the form");
        assert!(html.contains(r#"name="electricity""#));
        assert!(!html.contains("Days to break even"), "No results before submission");
        assert!(html.contains(r#"class="theme-light""#));
    }

    #[tokio::test]
    async fn test_index_theme_query() {
        let request = Request::builder().uri("/?theme=dark").body(Body::empty()).unwrap();
        let (_, html) = send(request).await;
        assert!(html.contains(r#"class="theme-dark""#));
        assert!(html.contains("/?theme=light"), "Toggle should point to the other theme");

        let request = Request::builder().uri("/?theme=purple").body(Body::empty()).unwrap();
        let (_, html) = send(request).await;
        assert!(html.contains(r#"class="theme-light""#), "Unknown theme falls back to default");
    }

    #[tokio::test]
    async fn test_form_submission_renders_results() {
        let body = "model=Antminer+S19+Pro&hashrate=110&cost=2500&delivery=300&electricity=0.12&tax=15";
        let (status, html) = send(form_post("/", body)).await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Cost vs. income"));
        assert!(html.contains("$2800.00"));
        assert!(html.contains("$20.00"));
        assert!(html.contains(">140<"));
        assert!(html.contains("Investment: 99%"));
        assert!(html.contains("Daily income: 1%"));
        assert_eq!(html.matches(r#"<li class="legend-item">"#).count(), 2, "Legend lists both entries");
        assert!(html.contains(r#"style="background:#0088FE"></span>Investment</li>"#));
        assert!(html.contains(r#"style="background:#00C49F"></span>Daily income</li>"#));
        assert!(html.contains(r#"value="Antminer S19 Pro""#), "Inputs are echoed back");
    }

    #[tokio::test]
    async fn test_form_submission_with_missing_fields() {
        let (status, html) = send(form_post("/", "cost=abc")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("$0.00"));
        assert!(html.contains("chart-empty"), "Zero totals draw an empty ring");
    }

    #[tokio::test]
    async fn test_form_submission_escapes_model() {
        let (_, html) = send(form_post("/", "model=%3Cscript%3E&cost=100")).await;
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[tokio::test]
    async fn test_api_roi_returns_json() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/roi")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"cost":"2500","delivery":"300"}"#))
            .unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::OK);
        let result: RoiResult = serde_json::from_str(&body).expect("Response should be an RoiResult");
        assert_eq!(result.total_investment, 2800.0);
        assert_eq!(result.days_to_roi_rounded(), 140);
        assert_eq!(result.chart_data.len(), 2);
    }

    #[tokio::test]
    async fn test_health() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn test_configured_default_theme() {
        let config = AppConfig {
            default_theme: Theme::Dark,
            ..AppConfig::default()
        };
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        let response = router(config).oneshot(request).await.unwrap();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains(r#"class="theme-dark""#));
    }
}

// Changelog:
// - v1.0.1 (2026-10-18): Legend assertions on form submission.
// - v1.0.0 (2026-10-18): Page, form submission, JSON API and health tests.
