use crate::models::Category;
use crate::store::ExpenseStore;

// The fixed category set. Read-only at runtime; never persisted, never
// user-editable. Icons and colors come from the app's seed data.
const CATEGORY_SEED: &[(&str, &str, &str, &str)] = &[
    ("food", "Food & Dining", "utensils", "#FF9800"),
    ("transport", "Transportation", "car", "#2196F3"),
    ("shopping", "Shopping", "shopping-bag", "#E91E63"),
    ("entertainment", "Entertainment", "film", "#9C27B0"),
    ("bills", "Bills & Utilities", "file-invoice", "#F44336"),
    ("health", "Health", "heartbeat", "#4CAF50"),
    ("travel", "Travel", "plane", "#03A9F4"),
    ("education", "Education", "graduation-cap", "#795548"),
    ("other", "Other", "ellipsis-h", "#607D8B"),
];

/// The full category set, in stable display order.
pub fn all() -> Vec<Category> {
    CATEGORY_SEED
        .iter()
        .map(|&(id, name, icon, color)| Category {
            id: id.to_string(),
            name: name.to_string(),
            icon: icon.to_string(),
            color: color.to_string(),
        })
        .collect()
}

pub fn by_id(id: &str) -> Option<Category> {
    CATEGORY_SEED
        .iter()
        .find(|&&(seed_id, ..)| seed_id == id)
        .map(|&(seed_id, name, icon, color)| Category {
            id: seed_id.to_string(),
            name: name.to_string(),
            icon: icon.to_string(),
            color: color.to_string(),
        })
}

pub fn exists(id: &str) -> bool {
    CATEGORY_SEED.iter().any(|&(seed_id, ..)| seed_id == id)
}

impl ExpenseStore {
    pub fn categories(&self) -> Vec<Category> {
        all()
    }
}
