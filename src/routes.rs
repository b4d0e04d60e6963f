// Route path constants - single source of truth for all API paths

use axum::{
    Router,
    routing::{any, get},
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::handlers;
use crate::state::AppState;

pub const HEALTH: &str = "/health";
pub const ITEMS: &str = "/items";
pub const ITEM: &str = "/items/{code}";
/// Routing pattern for item paths; also catches empty and nested codes so
/// they get rejected as malformed rather than unrouted.
pub const ITEM_ANY: &str = "/items/{*code}";
pub const ITEM_EMPTY: &str = "/items/";
pub const SWAGGER_UI: &str = "/swagger-ui";
pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";

/// Build the application router with all routes and middleware
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(HEALTH, get(handlers::health_handler))
        .route(
            ITEMS,
            get(handlers::list_handler)
                .put(handlers::create_handler)
                .post(handlers::create_handler)
                .fallback(handlers::items_method_not_allowed),
        )
        // Every method goes through one handler so the path code is
        // checked before the method is looked at.
        .route(ITEM_EMPTY, any(handlers::empty_code_handler))
        .route(ITEM_ANY, any(handlers::item_handler))
        .merge(SwaggerUi::new(SWAGGER_UI).url(OPENAPI_JSON, ApiDoc::openapi()))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}
