use std::sync::{PoisonError, RwLock};

use crate::models::Item;

/// Items every fresh store starts with, sorted by code.
const SEED: [(&str, &str, f64); 4] = [
    ("A12T-4GH7-QPL9-3N4M", "Lettuce", 3.46),
    ("E5T6-9UI3-TH15-QR88", "Peach", 2.99),
    ("TQ4C-VV6T-75ZX-1RMR", "Gala Apple", 3.59),
    ("YRT6-72AS-K736-L4AR", "Green Pepper", 0.79),
];

/// In-memory item catalog kept sorted by code.
///
/// A single `RwLock` guards the whole sequence: `get` and `list` share it,
/// `put` holds it exclusively for the search and the mutation. Reads hand
/// out clones, so nothing outside the store can change its contents.
#[derive(Debug)]
pub struct Store {
    items: RwLock<Vec<Item>>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    /// Create a store pre-loaded with the seed catalog
    pub fn new() -> Self {
        Self::from_items(
            SEED.iter()
                .map(|(code, name, price)| Item::new(*code, *name, *price))
                .collect(),
        )
    }

    /// Create a store from arbitrary items. Later duplicates win.
    pub fn from_items(items: Vec<Item>) -> Self {
        let store = Self {
            items: RwLock::new(Vec::with_capacity(items.len())),
        };
        for item in items {
            store.put(item);
        }
        store
    }

    /// Look up a single item by its exact code
    pub fn get(&self, code: &str) -> Option<Item> {
        let items = self.items.read().unwrap_or_else(PoisonError::into_inner);
        items
            .binary_search_by(|it| it.code.as_str().cmp(code))
            .ok()
            .map(|idx| items[idx].clone())
    }

    /// Insert a new item or overwrite the one with the same code.
    ///
    /// Existing items keep their position; new ones are spliced in at
    /// their sorted position.
    pub fn put(&self, item: Item) {
        let mut items = self.items.write().unwrap_or_else(PoisonError::into_inner);
        match items.binary_search_by(|it| it.code.as_str().cmp(&item.code)) {
            Ok(idx) => items[idx] = item,
            Err(idx) => items.insert(idx, item),
        }
    }

    /// Return up to `count` items with codes strictly greater than `cursor`.
    ///
    /// An empty cursor starts at the beginning. The returned cursor is the
    /// code of the last item on the page when more items follow, and empty
    /// at the end of the list. Asking for zero items echoes the cursor.
    pub fn list(&self, cursor: &str, count: usize) -> (Vec<Item>, String) {
        if count == 0 {
            return (Vec::new(), cursor.to_string());
        }

        let items = self.items.read().unwrap_or_else(PoisonError::into_inner);

        let start = if cursor.is_empty() {
            0
        } else {
            items.partition_point(|it| it.code.as_str() <= cursor)
        };
        let end = start.saturating_add(count).min(items.len());

        let page = items[start..end].to_vec();
        let next_cursor = match page.last() {
            Some(last) if end < items.len() => last.code.clone(),
            _ => String::new(),
        };

        (page, next_cursor)
    }

    /// Number of items currently held
    pub fn len(&self) -> usize {
        self.items.read().unwrap_or_else(PoisonError::into_inner).len()
    }
}
