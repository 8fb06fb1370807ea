use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use cardiocast_core::FEATURE_COUNT;
#[cfg(feature = "onnx")]
use cardiocast_model::OnnxClassifier;
use cardiocast_model::{Classifier, LinearArtifact};
use cardiocast_pipeline::InferencePipeline;
use clap::Parser;

mod config;
mod handlers;
mod page;
mod server;

use config::Config;
use server::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    tracing::info!("cardiocast v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::parse();

    let classifier = load_classifier(&config.model)?;
    anyhow::ensure!(
        classifier.feature_count() == FEATURE_COUNT,
        "model expects {} features, the form submits {}",
        classifier.feature_count(),
        FEATURE_COUNT
    );

    let state = AppState::new(InferencePipeline::new(classifier));
    let app = server::build_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("binding {}", config.bind))?;
    tracing::info!(addr = %config.bind, "serving heart disease prediction form");
    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}

/// Pick the classifier backend for the artifact at `path`.
fn load_classifier(path: &Path) -> anyhow::Result<Arc<dyn Classifier>> {
    #[cfg(feature = "onnx")]
    if path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("onnx"))
    {
        let classifier: Arc<dyn Classifier> = Arc::new(
            OnnxClassifier::load(path)
                .with_context(|| format!("loading onnx classifier from {}", path.display()))?,
        );
        return Ok(classifier);
    }

    let classifier: Arc<dyn Classifier> = Arc::new(
        LinearArtifact::load(path)
            .with_context(|| format!("loading classifier artifact from {}", path.display()))?,
    );
    Ok(classifier)
}
