//! Shared UI chrome state (gallery tabs).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of domain state so the gallery
//! tab selection can be shared and persisted independently of media data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// The two featured-media gallery tabs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MediaTab {
    #[default]
    Videos,
    News,
}

impl MediaTab {
    pub const ALL: [Self; 2] = [Self::Videos, Self::News];

    /// Stable key used for localStorage persistence.
    pub fn storage_key(self) -> &'static str {
        match self {
            Self::Videos => "videos",
            Self::News => "news",
        }
    }

    /// Restore a tab from its persisted key; unknown keys fall back to the
    /// default tab rather than erroring.
    pub fn from_storage_key(key: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|tab| tab.storage_key() == key)
            .unwrap_or_default()
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Videos => "Videos",
            Self::News => "News",
        }
    }
}

/// UI state shared via context.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub active_media_tab: MediaTab,
}
