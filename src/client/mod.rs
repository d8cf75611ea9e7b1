//! Client lifecycle: login, game start, logout
//!
//! The client owns the login token and at most one game session. Logging out
//! drops both; nothing is persisted.

mod auth;

pub use auth::{AuthError, Authenticator, Credentials, LocalAuthenticator, Token};

use crate::game::{GameError, GameSession, InputEvent, Update};
use crate::wordlists::{SourceError, WordSource};
use thiserror::Error;

/// Error type for client operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    #[error("Please enter both username and password")]
    MissingCredentials,
    #[error("Login failed: {0}")]
    Auth(#[from] AuthError),
    #[error("Missing authorization token")]
    NotLoggedIn,
    #[error("Failed to fetch word: {0}")]
    Source(#[from] SourceError),
    #[error("No game in progress")]
    NoGame,
    #[error(transparent)]
    Game(#[from] GameError),
}

/// Game client owning credentials state and the current session
pub struct Client<A: Authenticator, W: WordSource> {
    authenticator: A,
    source: W,
    max_attempts: usize,
    token: Option<Token>,
    username: Option<String>,
    session: Option<GameSession>,
}

impl<A: Authenticator, W: WordSource> Client<A, W> {
    /// Create a logged-out client
    ///
    /// # Parameters
    /// - `authenticator`: checks credentials on login
    /// - `source`: supplies the target word for each new game
    /// - `max_attempts`: rows per game
    pub const fn new(authenticator: A, source: W, max_attempts: usize) -> Self {
        Self {
            authenticator,
            source,
            max_attempts,
            token: None,
            username: None,
            session: None,
        }
    }

    /// Log in with the given credentials
    ///
    /// # Errors
    /// - `ClientError::MissingCredentials` if either field is empty
    /// - `ClientError::Auth` if the authenticator refuses the login
    pub fn login(&mut self, credentials: &Credentials) -> Result<(), ClientError> {
        if !credentials.is_complete() {
            return Err(ClientError::MissingCredentials);
        }

        match self.authenticator.authenticate(credentials) {
            Ok(token) => {
                tracing::info!(username = %credentials.username, "login successful");
                self.token = Some(token);
                self.username = Some(credentials.username.clone());
                Ok(())
            }
            Err(e) => {
                tracing::warn!(username = %credentials.username, error = %e, "login refused");
                Err(e.into())
            }
        }
    }

    #[must_use]
    pub const fn is_logged_in(&self) -> bool {
        self.token.is_some()
    }

    /// Name of the logged-in user
    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// Start a new game, replacing any current one
    ///
    /// # Errors
    /// - `ClientError::NotLoggedIn` without a token
    /// - `ClientError::Source` if no target word is available
    /// - `ClientError::Game` if the attempt count is invalid
    pub fn start_game(&mut self) -> Result<&mut GameSession, ClientError> {
        if self.token.is_none() {
            return Err(ClientError::NotLoggedIn);
        }

        let target = self.source.next_word()?;
        let session = GameSession::new(target, self.max_attempts)?;
        tracing::info!(
            word_length = session.word_length(),
            max_attempts = session.max_attempts(),
            "game started"
        );

        Ok(self.session.insert(session))
    }

    /// Forward an input event to the current session
    ///
    /// # Errors
    /// `ClientError::NoGame` without a session, otherwise whatever the
    /// session returns.
    pub fn dispatch(&mut self, event: InputEvent) -> Result<Update, ClientError> {
        let session = self.session.as_mut().ok_or(ClientError::NoGame)?;
        Ok(session.dispatch(event)?)
    }

    #[must_use]
    pub const fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    /// Mutable access to the current game, for driving it directly
    pub fn session_mut(&mut self) -> Option<&mut GameSession> {
        self.session.as_mut()
    }

    /// Drop the token and the current session
    ///
    /// Returns false if nobody was logged in.
    pub fn logout(&mut self) -> bool {
        let was_logged_in = self.token.take().is_some();
        self.session = None;

        if let Some(username) = self.username.take() {
            tracing::info!(%username, "logged out");
        }
        was_logged_in
    }
}
