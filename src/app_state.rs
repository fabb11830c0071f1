//! Implements a struct that holds the state of the web server.

use std::sync::{Arc, Mutex};

use crate::{Error, store::TransactionStore, timezone::get_local_offset};

/// The state of the web server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The local timezone as a canonical timezone name, e.g. "Asia/Kolkata".
    pub local_timezone: String,

    /// Every transaction recorded since the server started.
    pub store: Arc<Mutex<TransactionStore>>,
}

impl AppState {
    /// Create a new [AppState] that serves the transactions in `store`.
    ///
    /// `local_timezone` should be a valid, canonical timezone name, e.g. "Asia/Kolkata".
    ///
    /// # Errors
    /// Returns [Error::InvalidTimezoneError] if `local_timezone` is not a known timezone.
    pub fn new(store: TransactionStore, local_timezone: &str) -> Result<Self, Error> {
        if get_local_offset(local_timezone).is_none() {
            return Err(Error::InvalidTimezoneError(local_timezone.to_owned()));
        }

        Ok(Self {
            local_timezone: local_timezone.to_owned(),
            store: Arc::new(Mutex::new(store)),
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::{AppState, Error, store::TransactionStore};

    #[test]
    fn rejects_unknown_timezone() {
        let result = AppState::new(TransactionStore::new(), "Mars/Olympus_Mons");

        assert_eq!(
            result.map(|_| ()),
            Err(Error::InvalidTimezoneError("Mars/Olympus_Mons".to_owned()))
        );
    }

    #[test]
    fn accepts_canonical_timezone() {
        let state = AppState::new(TransactionStore::new(), "Asia/Kolkata").unwrap();

        assert_eq!(state.local_timezone, "Asia/Kolkata");
    }
}
