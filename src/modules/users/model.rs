use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    pub email: String,
    pub display_name: String,
    pub role: String,
    pub password: String,
    pub created_at: bson::DateTime,
}

impl UserAccount {
    pub fn admin(email: String, display_name: String, password: String) -> Self {
        Self {
            email,
            display_name,
            role: "admin".to_string(),
            password,
            created_at: bson::DateTime::now(),
        }
    }
}
