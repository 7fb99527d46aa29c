use std::time::Duration;

use rsearch_client::{ClientOptions, HighlightTags};
use rsearch_core::config::SearchSettings;

#[test]
fn default_settings_match_default_options() {
    let options = ClientOptions::from(&SearchSettings::default());
    assert_eq!(options, ClientOptions::default());
    assert_eq!(options.timeout, Some(Duration::from_secs(30)));
    assert_eq!(options.highlight_tags, HighlightTags::default());
}

#[test]
fn zero_timeout_disables_it() {
    let settings = SearchSettings { timeout_ms: 0, ..Default::default() };
    assert_eq!(ClientOptions::from(&settings).timeout, None);
}

#[test]
fn settings_carry_modifiers_and_tags() {
    let settings = SearchSettings {
        with_scores: false,
        highlight: true,
        highlight_open_tag: "<em>".into(),
        highlight_close_tag: "</em>".into(),
        timeout_ms: 1500,
    };
    let options = ClientOptions::from(&settings);
    assert!(!options.with_scores);
    assert!(options.highlight);
    assert_eq!(options.highlight_tags, HighlightTags { open: "<em>".into(), close: "</em>".into() });
    assert_eq!(options.timeout, Some(Duration::from_millis(1500)));
}
