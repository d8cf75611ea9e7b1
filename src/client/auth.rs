//! Credential checking
//!
//! The game only needs to know whether a login succeeded; the token returned
//! is opaque and is held in memory until logout.

use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// Username and password entered by the player
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Both fields filled in
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }
}

// Keep passwords out of logs and panic messages
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Opaque proof of a successful login
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token(String);

impl Token {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Error type for authentication
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Invalid login credentials")]
    InvalidCredentials,
}

/// Checks credentials and issues tokens
pub trait Authenticator {
    /// # Errors
    /// Returns `AuthError::InvalidCredentials` if the login is refused.
    fn authenticate(&self, credentials: &Credentials) -> Result<Token, AuthError>;
}

/// In-process authenticator
///
/// In open mode any username/password pair is accepted. Otherwise only the
/// registered users can log in.
#[derive(Debug, Default)]
pub struct LocalAuthenticator {
    users: FxHashMap<String, String>,
}

impl LocalAuthenticator {
    /// Accept any credentials
    #[must_use]
    pub fn open() -> Self {
        Self::default()
    }

    /// Accept only the given `(username, password)` pairs
    #[must_use]
    pub fn with_users<I, U, P>(users: I) -> Self
    where
        I: IntoIterator<Item = (U, P)>,
        U: Into<String>,
        P: Into<String>,
    {
        Self {
            users: users
                .into_iter()
                .map(|(u, p)| (u.into(), p.into()))
                .collect(),
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.users.is_empty()
    }
}

impl Authenticator for LocalAuthenticator {
    fn authenticate(&self, credentials: &Credentials) -> Result<Token, AuthError> {
        if !self.is_open()
            && self.users.get(&credentials.username) != Some(&credentials.password)
        {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(Token::new(format!("{:016x}", rand::random::<u64>())))
    }
}
