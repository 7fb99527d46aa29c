use std::time::Duration;

use rsearch_core::config::{SearchSettings, DEFAULT_HIGHLIGHT_CLOSE_TAG, DEFAULT_HIGHLIGHT_OPEN_TAG, DEFAULT_TIMEOUT_MS};

/// Markup wrapped around highlighted terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightTags {
    pub open: String,
    pub close: String,
}

impl Default for HighlightTags {
    fn default() -> Self {
        Self { open: DEFAULT_HIGHLIGHT_OPEN_TAG.to_string(), close: DEFAULT_HIGHLIGHT_CLOSE_TAG.to_string() }
    }
}

/// Per-client search modifiers and engine timeout. Fixed once the client is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientOptions {
    pub with_scores: bool,
    pub highlight: bool,
    pub highlight_tags: HighlightTags,
    /// `None` waits for the engine indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            with_scores: true,
            highlight: false,
            highlight_tags: HighlightTags::default(),
            timeout: Some(Duration::from_millis(DEFAULT_TIMEOUT_MS)),
        }
    }
}

impl ClientOptions {
    pub fn with_highlight(mut self, highlight: bool) -> Self { self.highlight = highlight; self }

    pub fn with_scores(mut self, with_scores: bool) -> Self { self.with_scores = with_scores; self }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self { self.timeout = timeout; self }
}

impl From<&SearchSettings> for ClientOptions {
    fn from(s: &SearchSettings) -> Self {
        Self {
            with_scores: s.with_scores,
            highlight: s.highlight,
            highlight_tags: HighlightTags { open: s.highlight_open_tag.clone(), close: s.highlight_close_tag.clone() },
            timeout: (s.timeout_ms > 0).then(|| Duration::from_millis(s.timeout_ms)),
        }
    }
}
