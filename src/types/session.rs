use serde::{Deserialize, Serialize};

/// Identity of the logged-in user, persisted under the `user` key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserSession {
    pub id: String,
    pub email: String,
    pub name: String,
}
