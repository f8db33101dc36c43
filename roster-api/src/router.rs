use axum::{
    http::{HeaderValue, Method},
    response::Redirect,
    routing::get,
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    services::ServeDir,
    trace::{DefaultMakeSpan, TraceLayer},
};

use crate::{app_state::AppState, config::ApplicationSettings, routes};

const INDEX_PATH: &str = "/static/index.html";

pub fn create(app_state: AppState, settings: &ApplicationSettings) -> Router<()> {
    let mut app = Router::new()
        .route("/", get(|| async { Redirect::temporary(INDEX_PATH) }))
        .nest("/activities", routes::activities::router());

    if let Some(static_dir) = &settings.static_dir {
        tracing::info!("Serving static files from {}", static_dir);
        app = app.nest_service("/static", ServeDir::new(static_dir));
    }

    let origins = settings
        .cors_allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!("Ignoring invalid CORS origin '{}': {}", origin, err);
                None
            }
        })
        .collect::<Vec<_>>();
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_origin(AllowOrigin::list(origins));

    app.with_state(app_state)
        .layer(cors)
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
}
