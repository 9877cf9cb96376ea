use web_sys::{window, Storage};

use crate::config;
use crate::error::StorageError;

/// Persistence for the cookie notice acknowledgement.
pub trait ConsentStore {
    fn read(&self) -> Result<Option<String>, StorageError>;
    fn write(&self, value: &str) -> Result<(), StorageError>;

    /// An empty stored value counts as not acknowledged.
    fn is_acknowledged(&self) -> bool {
        matches!(self.read(), Ok(Some(value)) if !value.is_empty())
    }

    fn acknowledge(&self) -> Result<(), StorageError> {
        self.write(config::COOKIE_CONSENT_VALUE)
    }
}

/// Backed by `window.localStorage`, so the flag survives reloads.
pub struct LocalConsentStore;

impl LocalConsentStore {
    fn storage() -> Result<Storage, StorageError> {
        window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }
}

impl ConsentStore for LocalConsentStore {
    fn read(&self) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(config::COOKIE_CONSENT_KEY)
            .map_err(|_| StorageError::Unavailable)
    }

    fn write(&self, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(config::COOKIE_CONSENT_KEY, value)
            .map_err(|_| StorageError::WriteRejected {
                key: config::COOKIE_CONSENT_KEY.to_string(),
            })
    }
}

pub fn should_show_banner(store: &impl ConsentStore) -> bool {
    !store.is_acknowledged()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct MemoryStore {
        value: RefCell<Option<String>>,
        broken: bool,
    }

    impl ConsentStore for MemoryStore {
        fn read(&self) -> Result<Option<String>, StorageError> {
            if self.broken {
                return Err(StorageError::Unavailable);
            }
            Ok(self.value.borrow().clone())
        }

        fn write(&self, value: &str) -> Result<(), StorageError> {
            if self.broken {
                return Err(StorageError::Unavailable);
            }
            *self.value.borrow_mut() = Some(value.to_string());
            Ok(())
        }
    }

    #[test]
    fn banner_shows_on_first_visit() {
        assert!(should_show_banner(&MemoryStore::default()));
    }

    #[test]
    fn banner_hidden_after_acknowledgement() {
        let store = MemoryStore::default();
        store.acknowledge().unwrap();
        assert!(!should_show_banner(&store));
        assert_eq!(store.read().unwrap().as_deref(), Some("accepted"));
    }

    #[test]
    fn acknowledging_twice_is_same_as_once() {
        let store = MemoryStore::default();
        store.acknowledge().unwrap();
        store.acknowledge().unwrap();
        assert!(store.is_acknowledged());
        assert_eq!(store.read().unwrap().as_deref(), Some("accepted"));
    }

    #[test]
    fn empty_value_is_not_acknowledgement() {
        let store = MemoryStore::default();
        store.write("").unwrap();
        assert!(should_show_banner(&store));
    }

    #[test]
    fn any_non_empty_value_counts() {
        let store = MemoryStore::default();
        store.write("yes").unwrap();
        assert!(!should_show_banner(&store));
    }

    #[test]
    fn unavailable_storage_shows_banner_and_reports_error() {
        let store = MemoryStore {
            broken: true,
            ..Default::default()
        };
        assert!(should_show_banner(&store));
        assert_eq!(store.acknowledge(), Err(StorageError::Unavailable));
    }
}
