use serde::{Deserialize, Serialize};

/// Texts of the default list used on first run and after a reset
pub const SEED_TEXTS: [&str; 3] = ["Learn JSX", "Master State", "Check of boxes"];

/// A single to-do entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Item {
    /// Opaque unique ID, assigned at creation and never reused
    pub id: String,
    /// Display text (never empty once stored)
    pub text: String,
    /// Whether the item has been checked off
    pub completed: bool,
}

impl Item {
    pub fn new(id: String, text: String) -> Self {
        Self {
            id,
            text,
            completed: false,
        }
    }

    /// Flip the completion flag
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}

/// Build a fresh seed list, drawing a new ID for every item
pub fn seed_items(mut next_id: impl FnMut() -> String) -> Vec<Item> {
    SEED_TEXTS
        .iter()
        .map(|text| Item::new(next_id(), text.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_new_is_incomplete() {
        let item = Item::new("a".to_string(), "Buy milk".to_string());
        assert_eq!(item.id, "a");
        assert_eq!(item.text, "Buy milk");
        assert!(!item.completed);
    }

    #[test]
    fn test_toggle() {
        let mut item = Item::new("a".to_string(), "Buy milk".to_string());
        item.toggle();
        assert!(item.completed);
        item.toggle();
        assert!(!item.completed);
    }

    #[test]
    fn test_seed_items() {
        let mut counter = 0;
        let items = seed_items(|| {
            counter += 1;
            format!("id-{}", counter)
        });

        let texts: Vec<&str> = items.iter().map(|i| i.text.as_str()).collect();
        assert_eq!(texts, SEED_TEXTS);
        assert!(items.iter().all(|i| !i.completed));
        assert_eq!(items[0].id, "id-1");
        assert_eq!(items[2].id, "id-3");
    }
}
