use crate::error::{ApiError, ErrorResponse};
use crate::models::{ItemResponse, ListQuery};
use crate::routes;
use crate::state::AppState;
use crate::validation::parse_list_query;
use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    http::{HeaderMap, HeaderValue, StatusCode, header},
};

/// GET /items handler - List items in code order
///
/// Returns one page of items. When more items follow, a `Link` header with
/// `rel="next"` carries the cursor for the next page; no header means the
/// end of the list was reached.
/// Query parameters:
/// - count: Page size (optional, default: 10)
/// - cursor: Code of the last item already seen (optional, exclusive)
#[utoipa::path(
    method(get, head),
    path = routes::ITEMS,
    params(ListQuery),
    responses(
        (status = 200, description = "One page of items", body = Vec<ItemResponse>,
            headers(("link" = String, description = "Next page, when there is one"))),
        (status = 400, description = "Invalid count or cursor", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn list_handler(
    State(state): State<AppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<(StatusCode, HeaderMap, Json<Vec<ItemResponse>>), ApiError> {
    let Query(query) = query.map_err(|e| ApiError::InvalidQueryParam(e.body_text()))?;
    let (cursor, count) = parse_list_query(query, state.config.list_default_count)?;

    let (items, next_cursor) = state.store.list(&cursor, count);

    let mut headers = HeaderMap::new();
    if !next_cursor.is_empty() {
        let link = format!(
            "<{}?count={}&cursor={}>; rel=\"next\"",
            routes::ITEMS,
            count,
            next_cursor
        );
        match HeaderValue::from_str(&link) {
            Ok(value) => {
                headers.insert(header::LINK, value);
            }
            Err(e) => tracing::warn!("Cannot encode next link for cursor {}: {}", next_cursor, e),
        }
    }

    tracing::info!(
        "Listed {} items (cursor: {:?}, count: {}, next: {:?})",
        items.len(),
        cursor,
        count,
        next_cursor
    );

    let data = items.into_iter().map(ItemResponse::from).collect();
    Ok((StatusCode::OK, headers, Json(data)))
}

#[cfg(test)]
mod tests {
    use crate::config::Config;
    use crate::error::ErrorResponse;
    use crate::models::{Item, ItemResponse};
    use crate::state::AppState;
    use crate::store::Store;
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode, header},
    };
    use tower::ServiceExt;

    fn setup_test_app() -> (Router, AppState) {
        let state = AppState::new(Store::new(), Config::default());
        (crate::routes::router(state.clone()), state)
    }

    /// Issue a list request; returns status, next cursor from the Link header, and items
    async fn list(app: &Router, uri: &str) -> (StatusCode, Option<String>, Vec<ItemResponse>) {
        let response = app
            .clone()
            .oneshot(Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let next = response
            .headers()
            .get(header::LINK)
            .map(|value| value.to_str().unwrap().to_string())
            .map(|link| {
                let start = link.find("cursor=").unwrap() + "cursor=".len();
                let end = link.find('>').unwrap();
                link[start..end].to_string()
            });
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let items = if status == StatusCode::OK {
            serde_json::from_slice(&body).unwrap()
        } else {
            Vec::new()
        };
        (status, next, items)
    }

    #[tokio::test]
    async fn test_list_all_seed_items() {
        let (app, _) = setup_test_app();

        let (status, next, items) = list(&app, "/items").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(next, None);
        assert_eq!(items.len(), 4);
        assert_eq!(items[0].code, "A12T-4GH7-QPL9-3N4M");
        assert_eq!(items[0].url, "/items/A12T-4GH7-QPL9-3N4M");
        assert_eq!(items[3].name, "Green Pepper");
    }

    #[tokio::test]
    async fn test_list_link_header() {
        let (app, _) = setup_test_app();

        let response = app
            .oneshot(Request::builder().uri("/items?count=2").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::LINK).unwrap(),
            "</items?count=2&cursor=E5T6-9UI3-TH15-QR88>; rel=\"next\""
        );
    }

    #[tokio::test]
    async fn test_list_follows_cursors() {
        let (app, _) = setup_test_app();

        let (_, next, page) = list(&app, "/items?count=3").await;
        assert_eq!(page.len(), 3);
        assert_eq!(next.as_deref(), Some("TQ4C-VV6T-75ZX-1RMR"));

        // Lowercase cursors are accepted
        let (_, next, page) = list(&app, "/items?count=3&cursor=tq4c-vv6t-75zx-1rmr").await;
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].code, "YRT6-72AS-K736-L4AR");
        assert_eq!(next, None);
    }

    #[tokio::test]
    async fn test_list_pages_cover_everything() {
        let (app, state) = setup_test_app();
        for i in 0..7 {
            state
                .store
                .put(Item::new(format!("N{:03}-0000-0000-0000", i), "Nectarine", 1.25));
        }

        let mut seen = Vec::new();
        let mut uri = "/items?count=2".to_string();
        loop {
            let (status, next, page) = list(&app, &uri).await;
            assert_eq!(status, StatusCode::OK);
            seen.extend(page.into_iter().map(|it| it.code));
            match next {
                Some(cursor) => uri = format!("/items?count=2&cursor={}", cursor),
                None => break,
            }
        }

        let (all, _) = state.store.list("", usize::MAX);
        let expected: Vec<String> = all.into_iter().map(|it| it.code).collect();
        assert_eq!(seen.len(), 11);
        assert_eq!(seen, expected);
    }

    #[tokio::test]
    async fn test_list_zero_count() {
        let (app, _) = setup_test_app();

        let (status, next, items) = list(&app, "/items?count=0").await;

        assert_eq!(status, StatusCode::OK);
        assert!(items.is_empty());
        assert_eq!(next, None);

        // The cursor is handed back unchanged
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/items?count=0&cursor=A12T-4GH7-QPL9-3N4M")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::LINK).unwrap(),
            "</items?count=0&cursor=A12T-4GH7-QPL9-3N4M>; rel=\"next\""
        );
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let items: Vec<ItemResponse> = serde_json::from_slice(&body).unwrap();
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_list_beyond_end() {
        let (app, _) = setup_test_app();

        let (status, next, items) = list(&app, "/items?cursor=ZZZZ-ZZZZ-ZZZZ-ZZZZ").await;

        assert_eq!(status, StatusCode::OK);
        assert!(items.is_empty());
        assert_eq!(next, None);
    }

    #[tokio::test]
    async fn test_list_uses_configured_default_count() {
        let config = Config {
            list_default_count: 1,
            ..Config::default()
        };
        let app = crate::routes::router(AppState::new(Store::new(), config));

        let (_, next, items) = list(&app, "/items").await;

        assert_eq!(items.len(), 1);
        assert_eq!(next.as_deref(), Some("A12T-4GH7-QPL9-3N4M"));
    }

    #[tokio::test]
    async fn test_list_invalid_params() {
        let (app, _) = setup_test_app();

        for uri in [
            "/items?count=lots",
            "/items?count=-1",
            "/items?count=",
            "/items?cursor=whatever",
            "/items?cursor=AAAA-AAAA-AAAA-AAA",
        ] {
            let response = app
                .clone()
                .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "uri {}", uri);
            let body = axum::body::to_bytes(response.into_body(), usize::MAX)
                .await
                .unwrap();
            let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
            assert!(!error.error.is_empty());
        }
    }

    #[tokio::test]
    async fn test_list_after_create() {
        let (app, _) = setup_test_app();

        let body = serde_json::json!({ "name": "Avocado", "price": 4.99 }).to_string();
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/items/AAAA-AAAA-AAAA-AAAA")
                    .header("content-type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let (status, next, items) = list(&app, "/items").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(next, None);
        assert_eq!(items.len(), 5);
        // Digits sort before letters
        assert_eq!(items[0].code, "A12T-4GH7-QPL9-3N4M");
        assert_eq!(items[1].code, "AAAA-AAAA-AAAA-AAAA");
    }
}
