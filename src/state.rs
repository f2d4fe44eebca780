//! Shared worker state.
//!
//! Holds the settings loaded at startup so components receive them
//! explicitly instead of reaching for a global.

use std::sync::Arc;

use crate::config::Settings;

/// State handed to every component of the worker.
///
/// Cloning is cheap since the settings sit behind an `Arc`. There is no way
/// to mutate them after construction.
#[derive(Debug, Clone)]
pub struct AppState {
    settings: Arc<Settings>,
}

impl AppState {
    /// Wrap freshly loaded settings.
    ///
    /// # Example
    /// ```ignore
    /// let settings = atlas_worker::config::load()?;
    /// let state = AppState::new(settings);
    /// ```
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: Arc::new(settings),
        }
    }

    /// Read access to the settings
    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_state_is_shareable() {
        assert_send_sync::<AppState>();
    }

    #[test]
    fn test_clones_share_settings() {
        let state = AppState::new(Settings::default());
        let clone = state.clone();
        assert!(std::ptr::eq(state.settings(), clone.settings()));
        assert_eq!(clone.settings().argo_dac, "incois");
    }

    #[test]
    fn test_concurrent_readers() {
        let state = AppState::new(Settings::default());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let state = state.clone();
                std::thread::spawn(move || state.settings().s3_bucket_name.clone())
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), "atlas");
        }
    }
}
