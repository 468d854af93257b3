//! Browser localStorage persistence for the gallery tab selection.
//!
//! Hydrate-only: SSR paths no-op so server rendering stays deterministic.
//! Storage failures are swallowed; losing the remembered tab is harmless.

use crate::state::ui::MediaTab;

#[cfg(feature = "hydrate")]
const MEDIA_TAB_KEY: &str = "pitchside_media_tab";

/// Read the persisted gallery tab, if any.
pub fn load_media_tab() -> Option<MediaTab> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let raw = storage.get_item(MEDIA_TAB_KEY).ok().flatten()?;
        Some(MediaTab::from_storage_key(&raw))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist the active gallery tab.
pub fn save_media_tab(tab: MediaTab) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(MEDIA_TAB_KEY, tab.storage_key());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = tab;
    }
}
