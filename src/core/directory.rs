//! Credential directory
//!
//! The app only consumes a lookup contract; [`MockDirectory`] is the
//! in-memory implementation seeded with the two demo accounts.

use crate::core::error::{Error, Result};
use crate::core::session::{Role, UserSession};

/// Account details returned by a successful lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl From<DirectoryEntry> for UserSession {
    fn from(entry: DirectoryEntry) -> Self {
        Self {
            name: entry.name,
            email: entry.email,
            role: entry.role,
        }
    }
}

pub trait CredentialDirectory {
    /// Returns the account matching both email and password, if any
    fn lookup(&self, email: &str, password: &str) -> Option<DirectoryEntry>;

    /// Adds a regular user account.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmailTaken` if the email is already registered.
    fn register(&mut self, name: &str, email: &str, password: &str) -> Result<DirectoryEntry>;

    fn contains_email(&self, email: &str) -> bool;
}

#[derive(Debug, Clone)]
struct Account {
    entry: DirectoryEntry,
    password: String,
}

/// Demo accounts shown in the login dialog
pub const DEMO_ACCOUNTS: &[(&str, &str, &str, Role)] = &[
    ("admin@glassy.tube", "admin123", "Admin User", Role::Admin),
    ("viewer@glassy.tube", "viewer123", "Viewer User", Role::User),
];

#[derive(Debug, Clone, Default)]
pub struct MockDirectory {
    accounts: Vec<Account>,
}

impl MockDirectory {
    pub fn seeded() -> Self {
        let accounts = DEMO_ACCOUNTS
            .iter()
            .map(|&(email, password, name, role)| Account {
                entry: DirectoryEntry {
                    name: name.to_string(),
                    email: email.to_string(),
                    role,
                },
                password: password.to_string(),
            })
            .collect();
        Self { accounts }
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl CredentialDirectory for MockDirectory {
    fn lookup(&self, email: &str, password: &str) -> Option<DirectoryEntry> {
        let email = email.trim();
        self.accounts
            .iter()
            .find(|a| a.entry.email.eq_ignore_ascii_case(email) && a.password == password)
            .map(|a| a.entry.clone())
    }

    fn register(&mut self, name: &str, email: &str, password: &str) -> Result<DirectoryEntry> {
        if self.contains_email(email) {
            return Err(Error::EmailTaken(email.trim().to_string()));
        }
        let entry = DirectoryEntry {
            name: name.to_string(),
            email: email.trim().to_lowercase(),
            role: Role::User,
        };
        self.accounts.push(Account {
            entry: entry.clone(),
            password: password.to_string(),
        });
        Ok(entry)
    }

    fn contains_email(&self, email: &str) -> bool {
        let email = email.trim();
        self.accounts
            .iter()
            .any(|a| a.entry.email.eq_ignore_ascii_case(email))
    }
}
