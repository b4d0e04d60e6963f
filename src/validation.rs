use crate::error::{ApiError, ValidationError};
use crate::models::{Item, ItemPayload, ListQuery};

/// Highest accepted price
pub const MAX_PRICE: f64 = 9999.0;

/// Check a code against the canonical `XXXX-XXXX-XXXX-XXXX` shape, where
/// every `X` is an uppercase ASCII letter or digit.
pub fn is_valid_code(code: &str) -> bool {
    let bytes = code.as_bytes();
    bytes.len() == 19
        && bytes.iter().enumerate().all(|(i, b)| {
            if i % 5 == 4 {
                *b == b'-'
            } else {
                b.is_ascii_uppercase() || b.is_ascii_digit()
            }
        })
}

/// Normalise a code taken from the URL path.
///
/// A path code that does not fit the canonical shape is a malformed request,
/// not a validation failure.
pub fn parse_path_code(raw: &str) -> Result<String, ApiError> {
    let code = raw.to_uppercase();
    if !is_valid_code(&code) {
        return Err(ApiError::InvalidCode(raw.to_string()));
    }
    Ok(code)
}

/// Turn a decoded payload into an item, merging in the code from the path.
///
/// Checks run in a fixed order and the first failure is returned.
pub fn validate_item(path_code: Option<&str>, payload: ItemPayload) -> Result<Item, ApiError> {
    let name = payload.name.unwrap_or_default();
    let price = payload.price.unwrap_or_default();

    let mut code = payload.code.unwrap_or_default().to_uppercase();
    if code.is_empty() {
        code = path_code.unwrap_or_default().to_string();
    }

    if let Some(path_code) = path_code {
        if path_code != code {
            return Err(ApiError::CodeMismatch {
                path: path_code.to_string(),
                body: code,
            });
        }
    }

    if code.is_empty() {
        return Err(ValidationError::MissingCode.into());
    }
    if !is_valid_code(&code) {
        return Err(ValidationError::BadCodeFormat(code).into());
    }
    if name.is_empty() {
        return Err(ValidationError::MissingName.into());
    }
    validate_price(price)?;

    Ok(Item::new(code, name, price))
}

fn validate_price(price: f64) -> Result<(), ValidationError> {
    if price == 0.0 {
        Err(ValidationError::MissingPrice)
    } else if price < 0.0 {
        Err(ValidationError::NegativePrice(price))
    } else if price > MAX_PRICE {
        Err(ValidationError::PriceOutOfRange(price))
    } else {
        Ok(())
    }
}

/// Resolve list query parameters into a `(cursor, count)` pair
pub fn parse_list_query(query: ListQuery, default_count: usize) -> Result<(String, usize), ApiError> {
    let count = match query.count {
        Some(raw) => raw
            .parse::<usize>()
            .map_err(|e| ApiError::InvalidQueryParam(format!("bad count '{}': {}", raw, e)))?,
        None => default_count,
    };

    let cursor = query.cursor.unwrap_or_default().to_uppercase();
    if !cursor.is_empty() && !is_valid_code(&cursor) {
        return Err(ApiError::InvalidCursor(cursor));
    }

    Ok((cursor, count))
}
