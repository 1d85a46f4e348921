//! State of data fetched from the backend.
//!
//! A failed fetch is shown as a failure. Nothing is ever substituted with
//! sample data.

use std::fmt::Display;

/// Loading, loaded, or failed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState<T> {
    /// The request has not completed yet.
    #[default]
    Loading,
    /// The data arrived.
    Loaded(T),
    /// The request failed with this message.
    Failed(String),
}

impl<T> LoadState<T> {
    /// Converts a fetch result, keeping the error's message.
    pub fn from_result<E: Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Loaded(value),
            Err(err) => Self::Failed(err.to_string()),
        }
    }

    /// Returns true while loading.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// The loaded value, if any.
    #[must_use]
    pub fn loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            _ => None,
        }
    }

    /// The failure message, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Maps the loaded value.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> LoadState<U> {
        match self {
            Self::Loading => LoadState::Loading,
            Self::Loaded(value) => LoadState::Loaded(f(value)),
            Self::Failed(message) => LoadState::Failed(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_loading() {
        let state: LoadState<u32> = LoadState::default();
        assert!(state.is_loading());
        assert_eq!(state.loaded(), None);
        assert_eq!(state.error(), None);
    }

    #[test]
    fn test_from_result() {
        let ok: LoadState<u32> = LoadState::from_result(Ok::<_, String>(3));
        assert_eq!(ok.loaded(), Some(&3));

        let failed: LoadState<u32> = LoadState::from_result(Err("timeout"));
        assert_eq!(failed.error(), Some("timeout"));
        assert_eq!(failed.loaded(), None);
    }

    #[test]
    fn test_map_preserves_failure() {
        let failed: LoadState<u32> = LoadState::Failed("nope".to_string());
        assert_eq!(failed.map(|v| v * 2), LoadState::Failed("nope".to_string()));
        assert_eq!(LoadState::Loaded(2).map(|v| v * 2), LoadState::Loaded(4));
    }
}
