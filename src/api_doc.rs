use utoipa::OpenApi;

use crate::error::{ErrorResponse, HealthResponse};
use crate::handlers;
use crate::models::{Item, ItemPayload, ItemResponse};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "produce-catalog API",
        version = "1.0.0",
        description = "A small produce catalog backed by an in-memory sorted store"
    ),
    paths(
        handlers::health::health_handler,
        handlers::list::list_handler,
        handlers::put::create_handler,
        handlers::get::get_handler,
        handlers::put::put_handler,
        handlers::item::delete_handler
    ),
    components(
        schemas(
            Item,
            ItemPayload,
            ItemResponse,
            ErrorResponse,
            HealthResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "items", description = "Catalog item operations")
    )
)]
pub struct ApiDoc;
