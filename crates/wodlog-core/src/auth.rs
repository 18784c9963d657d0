//! Sign-in state and the pluggable authenticator behind it.
//!
//! The shipped [`MockAuthenticator`] accepts any well-formed credentials;
//! a real backend only has to implement [`Authenticator`].

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::rc::Rc;
use std::sync::LazyLock;
use uuid::Uuid;

use crate::error::{AuthError, Result};
use crate::platform::{Navigator, Route};
use crate::storage::{load_json, save_json, KeyValueStore, USER_KEY};

pub const MIN_NAME_LEN: usize = 2;
pub const MIN_PASSWORD_LEN: usize = 6;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl User {
    /// Up to two uppercase initials of the display name.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect()
    }
}

#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    Login {
        email: String,
        password: String,
    },
    Register {
        name: String,
        email: String,
        password: String,
    },
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Credentials::Login { email, .. } => f
                .debug_struct("Login")
                .field("email", email)
                .finish_non_exhaustive(),
            Credentials::Register { name, email, .. } => f
                .debug_struct("Register")
                .field("name", name)
                .field("email", email)
                .finish_non_exhaustive(),
        }
    }
}

impl Credentials {
    /// Shape checks shared by every authenticator.
    pub fn validate(&self) -> Result<(), AuthError> {
        match self {
            Credentials::Login { email, password } => {
                require(email, "email")?;
                require(password, "password")?;
                validate_email(email)
            }
            Credentials::Register {
                name,
                email,
                password,
            } => {
                require(name, "name")?;
                require(email, "email")?;
                require(password, "password")?;
                if name.trim().chars().count() < MIN_NAME_LEN {
                    return Err(AuthError::NameTooShort { min: MIN_NAME_LEN });
                }
                validate_email(email)?;
                if password.chars().count() < MIN_PASSWORD_LEN {
                    return Err(AuthError::WeakPassword {
                        min: MIN_PASSWORD_LEN,
                    });
                }
                Ok(())
            }
        }
    }
}

fn require(value: &str, field: &'static str) -> Result<(), AuthError> {
    if value.trim().is_empty() {
        Err(AuthError::MissingField(field))
    } else {
        Ok(())
    }
}

fn validate_email(email: &str) -> Result<(), AuthError> {
    if EMAIL_RE.is_match(email.trim()) {
        Ok(())
    } else {
        Err(AuthError::InvalidEmail(email.to_string()))
    }
}

pub trait Authenticator {
    fn authenticate(&self, credentials: &Credentials) -> Result<User, AuthError>;
}

/// Local stand-in for a real backend.
///
/// Login derives the user name from the email's local part; registration
/// mints a fresh id.
#[derive(Debug, Default)]
pub struct MockAuthenticator;

impl Authenticator for MockAuthenticator {
    fn authenticate(&self, credentials: &Credentials) -> Result<User, AuthError> {
        credentials.validate()?;
        let user = match credentials {
            Credentials::Login { email, .. } => {
                let email = email.trim();
                User {
                    id: "1".into(),
                    name: email.split('@').next().unwrap_or(email).to_string(),
                    email: email.to_string(),
                }
            }
            Credentials::Register { name, email, .. } => User {
                id: Uuid::new_v4().to_string(),
                name: name.trim().to_string(),
                email: email.trim().to_string(),
            },
        };
        Ok(user)
    }
}

/// Signed-in user, persisted under the `user` key.
pub struct AuthStore {
    storage: Rc<dyn KeyValueStore>,
    authenticator: Box<dyn Authenticator>,
    navigator: Rc<dyn Navigator>,
    user: Option<User>,
    initialized: bool,
}

impl AuthStore {
    pub fn new(
        storage: Rc<dyn KeyValueStore>,
        authenticator: Box<dyn Authenticator>,
        navigator: Rc<dyn Navigator>,
    ) -> Self {
        Self {
            storage,
            authenticator,
            navigator,
            user: None,
            initialized: false,
        }
    }

    /// Restore the persisted user. Unreadable data means signed out.
    pub fn init(&mut self) {
        self.user = load_json(self.storage.as_ref(), USER_KEY);
        self.initialized = true;
        tracing::debug!(signed_in = self.user.is_some(), "auth store initialized");
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn require_user(&self) -> Result<&User, AuthError> {
        self.user.as_ref().ok_or(AuthError::NotAuthenticated)
    }

    pub fn login(&mut self, email: &str, password: &str) -> Result<User> {
        self.sign_in(Credentials::Login {
            email: email.to_string(),
            password: password.to_string(),
        })
    }

    pub fn register(&mut self, name: &str, email: &str, password: &str) -> Result<User> {
        self.sign_in(Credentials::Register {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        })
    }

    /// Forget the persisted user, then the in-memory one. A failed removal
    /// leaves the session signed in.
    pub fn logout(&mut self) -> Result<()> {
        self.storage.remove(USER_KEY)?;
        self.user = None;
        tracing::info!("signed out");
        self.navigator.replace(Route::Auth);
        Ok(())
    }

    fn sign_in(&mut self, credentials: Credentials) -> Result<User> {
        let user = self.authenticator.authenticate(&credentials)?;
        save_json(self.storage.as_ref(), USER_KEY, &user)?;
        self.user = Some(user.clone());
        tracing::info!(user_id = %user.id, "signed in");
        self.navigator.replace(Route::Tabs);
        Ok(user)
    }
}
