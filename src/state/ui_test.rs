use super::*;

#[test]
fn media_tab_default_is_videos() {
    assert_eq!(MediaTab::default(), MediaTab::Videos);
}

#[test]
fn media_tab_storage_keys_round_trip() {
    for tab in MediaTab::ALL {
        assert_eq!(MediaTab::from_storage_key(tab.storage_key()), tab);
    }
}

#[test]
fn media_tab_unknown_key_falls_back_to_default() {
    assert_eq!(MediaTab::from_storage_key("scorecards"), MediaTab::Videos);
    assert_eq!(MediaTab::from_storage_key(""), MediaTab::Videos);
}

#[test]
fn ui_state_default_opens_on_videos() {
    assert_eq!(UiState::default().active_media_tab, MediaTab::Videos);
}
