//! # About Info Store
//!
//! Company information shown on the About page and edited from the admin
//! panel. Exactly one record exists; there is no create or delete.

use std::sync::Arc;
use tracing::info;

use decor_core::{AboutInfo, AboutInfoPatch};

use crate::defaults::default_about_info;
use crate::error::StoreResult;
use crate::record::SingletonRecordStore;
use crate::storage::Storage;

/// Storage key of the about-info snapshot.
pub const ABOUT_KEY: &str = "kd-arts-about";

#[derive(Debug)]
pub struct AboutInfoStore {
    inner: SingletonRecordStore<AboutInfo>,
}

impl AboutInfoStore {
    /// Opens the record, falling back to the placeholder company info.
    pub fn open(storage: Arc<dyn Storage>, key: impl Into<String>) -> Self {
        AboutInfoStore {
            inner: SingletonRecordStore::open(storage, key, default_about_info),
        }
    }

    pub fn get(&self) -> &AboutInfo {
        self.inner.get()
    }

    /// Overwrites the fields set in `patch`; the rest keep their values.
    pub fn update(&mut self, patch: AboutInfoPatch) -> StoreResult<()> {
        self.inner.update(|info| info.apply(patch))?;
        info!(company = %self.get().company_name, "About info updated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn test_defaults_then_partial_update() {
        let storage = Arc::new(MemoryStorage::new());
        let mut store = AboutInfoStore::open(storage.clone(), ABOUT_KEY);
        assert_eq!(store.get().phone, "Enter number here");

        store
            .update(AboutInfoPatch {
                phone: Some("+91 98765 43210".to_string()),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(store.get().phone, "+91 98765 43210");
        assert_eq!(store.get().company_name, "K.D. Arts");

        let reopened = AboutInfoStore::open(storage, ABOUT_KEY);
        assert_eq!(reopened.get(), store.get());
    }

    #[test]
    fn test_admin_form_submits_whole_record() {
        let storage = Arc::new(MemoryStorage::new());
        let mut store = AboutInfoStore::open(storage, ABOUT_KEY);

        let mut edited = store.get().clone();
        edited.email = "hello@kdarts.in".to_string();
        edited.push_specialty(Some("Eco-friendly idols".to_string()));
        assert!(edited.remove_specialty(0));

        store.update(edited.clone().into()).unwrap();
        assert_eq!(store.get(), &edited);
        assert_eq!(store.get().specialties.len(), 3);
    }

    #[test]
    fn test_empty_patch_changes_nothing() {
        let storage = Arc::new(MemoryStorage::new());
        let mut store = AboutInfoStore::open(storage, ABOUT_KEY);
        let before = store.get().clone();

        store.update(AboutInfoPatch::default()).unwrap();
        assert_eq!(store.get(), &before);
    }
}
