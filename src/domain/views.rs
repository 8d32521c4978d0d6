use super::item::Item;

/// Number of items still to do
pub fn remaining_count(items: &[Item]) -> usize {
    items.iter().filter(|item| !item.completed).count()
}

/// Checkbox glyph for an item
pub fn checkbox(item: &Item) -> &'static str {
    if item.completed {
        "[x]"
    } else {
        "[ ]"
    }
}

/// Header line shown above the list
pub fn remaining_label(items: &[Item]) -> String {
    format!("Todos Left: {}", remaining_count(items))
}
