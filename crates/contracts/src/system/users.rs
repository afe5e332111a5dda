use serde::{Deserialize, Serialize};

use crate::uuid_id;

uuid_id!(
    /// Unique user identifier
    UserId
);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub avatar_url: String,
}

impl User {
    /// Full name when set, username otherwise.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.username
        } else {
            &self.name
        }
    }
}

/// Response of `GET /api/v2/users?q=`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UsersResponse {
    pub users: Vec<User>,
    #[serde(default)]
    pub count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name() {
        let mut user = User {
            id: UserId::new_v4(),
            username: "alice".into(),
            name: String::new(),
            email: "alice@example.com".into(),
            avatar_url: String::new(),
        };
        assert_eq!(user.display_name(), "alice");
        user.name = "Alice Liddell".into();
        assert_eq!(user.display_name(), "Alice Liddell");
    }
}
