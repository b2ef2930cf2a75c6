//! `localStorage` backend for the persisted credential record.
//!
//! Browser-only; native builds read nothing and write nowhere so the
//! session simply starts signed out.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use access::CredentialStore;

/// Handle to `window.localStorage`. Stateless; every call looks the storage
/// object up again so a blocked or missing storage never poisons the handle.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

#[cfg(feature = "csr")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Log a failed storage call at `warn`. Returns whether it failed.
#[cfg_attr(not(feature = "csr"), allow(dead_code))]
fn warn_on_failure<E: std::fmt::Debug>(action: &str, key: &str, result: Result<(), E>) -> bool {
    match result {
        Ok(()) => false,
        Err(e) => {
            log::warn!("failed to {action} {key} in localStorage: {e:?}");
            true
        }
    }
}

impl CredentialStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = storage() else {
                log::warn!("localStorage unavailable; {key} not saved");
                return;
            };
            warn_on_failure("write", key, storage.set_item(key, value));
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = storage() else {
                log::warn!("localStorage unavailable; {key} not removed");
                return;
            };
            warn_on_failure("remove", key, storage.remove_item(key));
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
        }
    }
}
