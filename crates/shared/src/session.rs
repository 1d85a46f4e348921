//! Explicit user session passed into the API client.
//!
//! The bearer token is never read from ambient global state. Whoever builds
//! the client decides where the session comes from; the CLI keeps it in a
//! [`TokenStore`] file between invocations.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// The caller's authentication state.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    /// Creates a session with no credentials.
    #[must_use]
    pub const fn anonymous() -> Self {
        Self { token: None }
    }

    /// Creates a session carrying a bearer token.
    ///
    /// A blank token yields an anonymous session.
    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        let token = token.into();
        let token = token.trim();
        if token.is_empty() {
            Self::anonymous()
        } else {
            Self {
                token: Some(token.to_string()),
            }
        }
    }

    /// Returns the bearer token, if any.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Returns true if a token is present.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// File-backed persistence for a [`Session`].
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    /// Creates a store backed by the given file.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the stored session. A missing file is an anonymous session.
    pub fn load(&self) -> io::Result<Session> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Session::with_token(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Session::anonymous()),
            Err(err) => Err(err),
        }
    }

    /// Persists the session token, creating parent directories as needed.
    ///
    /// Saving an anonymous session removes the file.
    pub fn save(&self, session: &Session) -> io::Result<()> {
        let Some(token) = session.token() else {
            return self.clear();
        };
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&self.path, token)
    }

    /// Removes the stored token. Removing a missing file succeeds.
    pub fn clear(&self) -> io::Result<()> {
        match std::fs::remove_file(&self.path) {
            Err(err) if err.kind() != io::ErrorKind::NotFound => Err(err),
            _ => Ok(()),
        }
    }
}
