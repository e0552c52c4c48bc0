use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;
use venue_backend::{
    api::router::create_router, config::Config, infra::factory::bootstrap_state, state::AppState,
};

pub const TEST_ADMIN_SECRET: &str = "test-admin-secret";

pub struct AuthHeaders {
    pub access_token: String,
    pub csrf_token: String,
}

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub state: Arc<AppState>,
}

#[allow(dead_code)]
impl TestApp {
    pub async fn new() -> Self {
        let config = Config {
            database_url: "memory://".to_string(),
            port: 0,
            admin_secret: TEST_ADMIN_SECRET.to_string(),
            jwt_secret: "test-jwt-secret".to_string(),
            auth_issuer: "test-issuer".to_string(),
            default_hold_days: 7,
            sweep_interval_secs: 60,
        };

        let state = Arc::new(bootstrap_state(&config).await);
        let router = create_router(state.clone());

        Self { router, state }
    }

    pub async fn login_admin(&self) -> AuthHeaders {
        self.login(serde_json::json!({ "secret": TEST_ADMIN_SECRET })).await
    }

    pub async fn login_planner(&self, planner_id: &str) -> AuthHeaders {
        self.login(serde_json::json!({
            "secret": TEST_ADMIN_SECRET,
            "plannerId": planner_id,
        }))
        .await
    }

    async fn login(&self, payload: Value) -> AuthHeaders {
        let response = self
            .router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/auth/login")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(payload.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        if !response.status().is_success() {
            panic!("Login failed in test helper: status {}", response.status());
        }

        let cookies: Vec<String> = response
            .headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .map(|h| h.to_str().unwrap().to_string())
            .collect();

        let access_token_cookie = cookies
            .iter()
            .find(|c| c.contains("access_token="))
            .expect("No access_token cookie returned");

        let start = access_token_cookie.find("access_token=").unwrap() + 13;
        let end = access_token_cookie[start..]
            .find(';')
            .unwrap_or(access_token_cookie.len() - start);
        let access_token = access_token_cookie[start..start + end].to_string();

        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body_json: Value = serde_json::from_slice(&body_bytes).unwrap();
        let csrf_token = body_json["csrfToken"]
            .as_str()
            .expect("No csrfToken in body")
            .to_string();

        AuthHeaders {
            access_token,
            csrf_token,
        }
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        auth: Option<&AuthHeaders>,
        body: Option<Value>,
    ) -> axum::response::Response {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(auth) = auth {
            builder = builder
                .header(header::COOKIE, format!("access_token={}", auth.access_token))
                .header("X-CSRF-Token", auth.csrf_token.clone());
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        self.router.clone().oneshot(request).await.unwrap()
    }
}

#[allow(dead_code)]
pub async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
