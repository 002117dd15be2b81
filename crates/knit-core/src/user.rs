//! Admin user directory (read-only sample data)

use serde::Serialize;

/// An admin-tool user account
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct User {
    pub id: &'static str,
    pub name: &'static str,
    pub email: &'static str,
    pub role: &'static str,
    pub status: &'static str,
    pub last_login: &'static str,
}

impl User {
    /// The static user directory
    pub fn directory() -> &'static [User] {
        const USERS: &[User] = &[
            User {
                id: "1",
                name: "김수지",
                email: "admin@example.com",
                role: "관리자",
                status: "활성",
                last_login: "2024-04-10",
            },
            User {
                id: "2",
                name: "변수미",
                email: "user@example.com",
                role: "일반",
                status: "활성",
                last_login: "2024-04-08",
            },
        ];
        USERS
    }
}
