use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One credential row: a username and the bcrypt hash of its password.
/// Rows are created by registration and never updated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
}
