//! Router assembly and shared state for the web front end.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use cardiocast_pipeline::InferencePipeline;
use tower_http::trace::TraceLayer;

use crate::handlers;

/// State shared by all request handlers.
///
/// The pipeline owns the one loaded classifier; cloning the state clones
/// an `Arc`, never the artifact.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<InferencePipeline>,
}

impl AppState {
    pub fn new(pipeline: InferencePipeline) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
        }
    }
}

/// Build the application router: form page, prediction, health.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::form_page))
        .route("/predict", post(handlers::predict))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use cardiocast_core::{FEATURE_COUNT, FeatureVector};
    use cardiocast_model::{Classifier, InferenceError};
    use tower::ServiceExt;

    use super::*;

    struct FixedClass(i64);

    impl Classifier for FixedClass {
        fn classify(&self, _features: &FeatureVector) -> Result<i64, InferenceError> {
            Ok(self.0)
        }

        fn feature_count(&self) -> usize {
            FEATURE_COUNT
        }

        fn name(&self) -> &str {
            "fixed-class"
        }
    }

    struct AlwaysFails;

    impl Classifier for AlwaysFails {
        fn classify(&self, _features: &FeatureVector) -> Result<i64, InferenceError> {
            Err(InferenceError::Backend("synthetic failure".into()))
        }

        fn feature_count(&self) -> usize {
            FEATURE_COUNT
        }

        fn name(&self) -> &str {
            "always-fails"
        }
    }

    fn app(classifier: Arc<dyn Classifier>) -> Router {
        build_router(AppState::new(InferencePipeline::new(classifier)))
    }

    const VALID_FORM: &str = "age=63&sex=1&cp=3&trestbps=145&chol=233&fbs=1&restecg=0&\
                              thalach=150&exang=0&oldpeak=2.3&slope=0&ca=0&thal=1";

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_form(body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/predict")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap()
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn form_page_serves_all_fields() {
        let response = app(Arc::new(FixedClass(0)))
            .oneshot(get_request("/"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("name=\"age\""));
        assert!(html.contains("name=\"thal\""));
        assert!(html.contains("Heart Disease Prediction App"));
    }

    #[tokio::test]
    async fn positive_class_renders_disease_message() {
        let response = app(Arc::new(FixedClass(1)))
            .oneshot(post_form(VALID_FORM))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("The Person has heart disease"));
    }

    #[tokio::test]
    async fn negative_class_renders_no_disease_message() {
        let response = app(Arc::new(FixedClass(0)))
            .oneshot(post_form(VALID_FORM))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("The person does not have heart disease"));
    }

    #[tokio::test]
    async fn blank_field_renders_reentry_notice() {
        let body = "age=&sex=1&cp=3&trestbps=145&chol=233&fbs=1&restecg=0&\
                    thalach=150&exang=0&oldpeak=2.3&slope=0&ca=0&thal=1";
        let response = app(Arc::new(FixedClass(1)))
            .oneshot(post_form(body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("Please enter valid numeric values for all fields."));
        assert!(!html.contains("heart disease</div>"));
    }

    #[tokio::test]
    async fn classifier_failure_is_surfaced_as_server_error() {
        let response = app(Arc::new(AlwaysFails))
            .oneshot(post_form(VALID_FORM))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let html = body_text(response).await;
        assert!(html.contains("temporarily unavailable"));
    }

    #[tokio::test]
    async fn health_reports_the_loaded_model() {
        let response = app(Arc::new(FixedClass(0)))
            .oneshot(get_request("/health"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["model"], "fixed-class");
    }
}
