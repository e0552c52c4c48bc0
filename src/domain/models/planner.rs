use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Planner {
    pub id: String,
    pub name: String,
    pub company_name: String,
    pub email: String,
    pub telephone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}
