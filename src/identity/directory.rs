use super::user::{Role, User};

/// The one password every mock account shares. Hardcoded on purpose: this crate
/// reproduces the dashboard's mock auth service, where no real verification
/// exists. Never promote this scheme to a real deployment.
pub const MOCK_PASSWORD: &str = "password123";

/// Fixed directory of known identities, seeded at construction and immutable
/// afterwards.
#[derive(Debug, Clone)]
pub struct UserDirectory {
    users: Vec<User>,
}

impl UserDirectory {
    /// The two demo accounts shipped with the dashboard.
    pub fn with_defaults() -> Self {
        Self {
            users: vec![
                User {
                    id: "1".into(),
                    username: "admin".into(),
                    email: "admin@company.com".into(),
                    role: Role::Admin,
                    avatar: Some("https://api.dicebear.com/7.x/avataaars/svg?seed=admin".into()),
                },
                User {
                    id: "2".into(),
                    username: "user1".into(),
                    email: "user1@company.com".into(),
                    role: Role::User,
                    avatar: Some("https://api.dicebear.com/7.x/avataaars/svg?seed=user1".into()),
                },
            ],
        }
    }

    /// Exact, case-sensitive username match.
    pub fn find_by_username(&self, username: &str) -> Option<&User> {
        self.users.iter().find(|u| u.username == username)
    }

    pub fn find_by_id(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }
}

impl Default for UserDirectory {
    fn default() -> Self {
        Self::with_defaults()
    }
}
