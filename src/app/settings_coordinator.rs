//! Generic settings persistence coordination.
//!
//! Provides a reusable API for persisting application settings to storage.
//! Settings are stored as JSON strings in eframe's key/value storage.

use serde::{Deserialize, Serialize};

/// Coordinates generic settings persistence.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Loads a setting from persistent storage with a default fallback.
    ///
    /// Returns the deserialized value if found and valid, otherwise the
    /// default value for type T.
    pub fn load_setting<T>(storage: Option<&dyn eframe::Storage>, key: &str) -> T
    where
        T: for<'de> Deserialize<'de> + Default,
    {
        if let Some(storage) = storage {
            if let Some(json_str) = storage.get_string(key) {
                if let Ok(value) = serde_json::from_str(&json_str) {
                    return value;
                }
            }
        }
        T::default()
    }

    /// Saves a setting to persistent storage.
    pub fn save_setting<T>(storage: &mut dyn eframe::Storage, key: &str, value: &T)
    where
        T: Serialize,
    {
        if let Ok(json_str) = serde_json::to_string(value) {
            storage.set_string(key, json_str);
            storage.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::Storage;
    use std::collections::HashMap;

    /// In-memory Storage implementation for testing
    #[derive(Default)]
    struct MemStorage(HashMap<String, String>);

    impl eframe::Storage for MemStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.0.get(key).cloned()
        }
        fn set_string(&mut self, key: &str, value: String) {
            self.0.insert(key.to_string(), value);
        }
        fn flush(&mut self) {}
    }

    #[test]
    fn round_trips_filter_setting() {
        use orgview::{Category, CategoryFilter};

        let mut storage = MemStorage::default();
        SettingsCoordinator::save_setting(
            &mut storage,
            "filter",
            &CategoryFilter::Only(Category::Roads),
        );

        let loaded: CategoryFilter =
            SettingsCoordinator::load_setting(Some(&storage), "filter");
        assert_eq!(loaded, CategoryFilter::Only(Category::Roads));
    }

    #[test]
    fn missing_key_returns_default() {
        let storage = MemStorage::default();
        let loaded: bool = SettingsCoordinator::load_setting(Some(&storage), "reduced_motion");
        assert!(!loaded);
    }

    #[test]
    fn corrupt_value_returns_default() {
        let mut storage = MemStorage::default();
        storage.set_string("reduced_motion", "not json".to_string());
        let loaded: bool = SettingsCoordinator::load_setting(Some(&storage), "reduced_motion");
        assert!(!loaded);
    }
}
