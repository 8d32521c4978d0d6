use crate::domain::Item;
use std::collections::HashSet;

/// Serialize the list as a JSON array of `{id, text, completed}` records
pub fn encode_list(items: &[Item]) -> serde_json::Result<String> {
    serde_json::to_string(items)
}

/// Parse a stored list, None if the value has the wrong shape
pub fn decode_list(raw: &str) -> Option<Vec<Item>> {
    let items: Vec<Item> = match serde_json::from_str(raw) {
        Ok(items) => items,
        Err(e) => {
            tracing::warn!("discarding stored list: {}", e);
            return None;
        }
    };

    let mut seen = HashSet::new();
    if !items.iter().all(|item| seen.insert(item.id.as_str())) {
        tracing::warn!("discarding stored list: duplicate item ids");
        return None;
    }

    Some(items)
}
