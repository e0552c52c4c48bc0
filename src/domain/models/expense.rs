use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueExpense {
    pub id: String,
    pub date: String,
    pub category: String,
    pub amount: f64,
    pub description: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryItem {
    pub id: String,
    pub label: String,
    pub is_default: bool,
}

/// The fixed seed categories. These can neither be deleted nor relabeled.
pub fn default_categories() -> Vec<CategoryItem> {
    [
        ("electricity", "Electricity"),
        ("water", "Water"),
        ("gas", "Gas"),
        ("maintenance", "Maintenance"),
        ("supplies", "Supplies"),
        ("staff", "Staff"),
        ("cleaning", "Cleaning"),
        ("insurance", "Insurance"),
        ("taxes", "Taxes"),
        ("other", "Other"),
    ]
    .into_iter()
    .map(|(id, label)| CategoryItem {
        id: id.to_string(),
        label: label.to_string(),
        is_default: true,
    })
    .collect()
}
