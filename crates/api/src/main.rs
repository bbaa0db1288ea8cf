use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use advisor_core::domain::preference::PreferenceSet;
use advisor_core::domain::profile::{Profile, ProfileDetails};
use advisor_core::domain::recommendation::RecommendationSet;
use advisor_core::llm::openai::OpenAiClient;
use advisor_core::recommender::Recommender;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = advisor_core::config::Settings::from_env()?;
    let _sentry_guard = init_sentry(&settings);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer())
        .init();

    let recommender: Option<Recommender> = match OpenAiClient::from_settings(&settings) {
        Ok(client) => Some(Recommender::new(Arc::new(client))),
        Err(e) => {
            sentry_anyhow::capture_anyhow(&e);
            tracing::error!(error = %e, "OPENAI_API_KEY missing; starting API in degraded mode");
            None
        }
    };

    let state = AppState { recommender };

    let app = Router::new()
        .route("/healthz", get(healthz))
        .route("/profiles", get(list_profiles))
        .route("/recommendations", post(create_recommendations))
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(3000);
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));

    tracing::info!(%addr, "api listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn healthz() -> &'static str {
    "ok"
}

#[derive(Clone)]
struct AppState {
    recommender: Option<Recommender>,
}

#[derive(Debug, Serialize)]
struct ApiProfile {
    name: &'static str,
    details: &'static ProfileDetails,
}

async fn list_profiles() -> Json<Vec<ApiProfile>> {
    let profiles = Profile::ALL
        .into_iter()
        .map(|profile| ApiProfile {
            name: profile.as_str(),
            details: profile.details(),
        })
        .collect();
    Json(profiles)
}

async fn create_recommendations(
    State(state): State<AppState>,
    Json(prefs): Json<PreferenceSet>,
) -> Result<Json<RecommendationSet>, StatusCode> {
    let Some(recommender) = &state.recommender else {
        return Err(StatusCode::SERVICE_UNAVAILABLE);
    };

    let set = recommender.recommend(&prefs).await.map_err(|e| {
        sentry_anyhow::capture_anyhow(&e);
        tracing::error!(profile = prefs.profile.as_str(), error = %e, "recommendation request failed");
        StatusCode::BAD_GATEWAY
    })?;

    Ok(Json(set))
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}

fn init_sentry(settings: &advisor_core::config::Settings) -> Option<sentry::ClientInitGuard> {
    let dsn = settings.sentry_dsn.as_deref()?;
    Some(sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    )))
}
