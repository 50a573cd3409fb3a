//! Browser `localStorage` helpers.
//!
//! Hydrate-only; SSR and native test builds see an empty store and writes
//! are dropped.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

/// Read `key` from `localStorage`.
pub fn get_item(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Write `value` under `key` in `localStorage`.
pub fn set_item(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        if storage.set_item(key, value).is_err() {
            log::warn!("localStorage write failed for {key}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

/// Remove `key` from `localStorage`.
pub fn remove_item(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        if storage.remove_item(key).is_err() {
            log::warn!("localStorage remove failed for {key}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}
