use serde::{Deserialize, Serialize};

use crate::routes;

/// A catalog item as held by the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Item {
    /// Canonical code, e.g. `A12T-4GH7-QPL9-3N4M`
    pub code: String,
    pub name: String,
    pub price: f64,
}

impl Item {
    pub fn new(code: impl Into<String>, name: impl Into<String>, price: f64) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            price,
        }
    }
}

/// Request body for create/update operations
///
/// Every field is optional on the wire. Absent and `null` fields both take
/// their zero value and are rejected later by validation where that matters.
/// Capitalised keys are accepted too.
#[derive(Debug, Default, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(default)]
pub struct ItemPayload {
    #[serde(alias = "Code", alias = "CODE")]
    pub code: Option<String>,
    #[serde(alias = "Name", alias = "NAME")]
    pub name: Option<String>,
    #[serde(alias = "Price", alias = "PRICE")]
    pub price: Option<f64>,
}

/// Item representation returned by the API, decorated with its URL
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ItemResponse {
    pub code: String,
    pub name: String,
    pub price: f64,
    pub url: String,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        let url = format!("{}/{}", routes::ITEMS, item.code);
        Self {
            code: item.code,
            name: item.name,
            price: item.price,
            url,
        }
    }
}

/// Query parameters for the list endpoint
///
/// Both are kept as raw strings so that parse failures surface as our own
/// error responses rather than extractor rejections.
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Page size; defaults to the configured list count
    pub count: Option<String>,
    /// Code of the last item already seen
    pub cursor: Option<String>,
}
