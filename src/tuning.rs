//! Data-driven page timing and motion settings
//!
//! Every empirically-chosen constant lives here so the page can override it
//! without a rebuild: an optional inline JSON island (`#page-tuning`) is
//! merged over the defaults at startup. Nothing is persisted across loads.

use serde::{Deserialize, Serialize};

use crate::consts;

/// Timing/motion settings for all page behaviors
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Delay before the load-time scroll reset fires (ms)
    pub scroll_reset_delay_ms: i32,
    /// Fixed-header offset for nav scroll targets (px)
    pub header_offset_px: f64,

    /// Hero parallax damping factor
    pub parallax_damping: f32,
    /// Hero parallax zoom while hovered
    pub parallax_zoom: f32,

    /// Typewriter per-character delay (ms)
    pub typing_speed_ms: u32,
    /// Typewriter hold after completing a phrase (ms)
    pub typing_pause_ms: u32,
    /// Phrases the typewriter cycles through
    pub typing_phrases: Vec<String>,

    /// Gutter added to a card's width per carousel step (px)
    pub carousel_gutter_px: i32,

    /// Per-card stagger step for the about reveal (ms)
    pub card_stagger_ms: u32,
    /// Section observer visibility threshold
    pub section_visibility_threshold: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            scroll_reset_delay_ms: consts::SCROLL_RESET_DELAY_MS,
            header_offset_px: consts::HEADER_OFFSET_PX,
            parallax_damping: consts::PARALLAX_DAMPING,
            parallax_zoom: consts::PARALLAX_ZOOM,
            typing_speed_ms: consts::TYPING_SPEED_MS,
            typing_pause_ms: consts::TYPING_PAUSE_MS,
            typing_phrases: vec![
                "Informatics Student, Faculty of Computer Science UNEJ".to_string(),
                "Publishing Division of UKM-P Binary".to_string(),
            ],
            carousel_gutter_px: consts::CAROUSEL_GUTTER_PX,
            card_stagger_ms: consts::CARD_STAGGER_MS,
            section_visibility_threshold: consts::SECTION_VISIBILITY_THRESHOLD,
        }
    }
}

impl Tuning {
    /// Element id of the optional inline JSON override
    const CONFIG_ELEMENT_ID: &'static str = "page-tuning";

    /// Parse a JSON override; unspecified fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load from the page's inline config element, or defaults (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load(document: &web_sys::Document) -> Self {
        let json = document
            .get_element_by_id(Self::CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content());

        if let Some(json) = json {
            match Self::from_json(&json) {
                Ok(tuning) => {
                    log::info!("Loaded page tuning from #{}", Self::CONFIG_ELEMENT_ID);
                    return tuning;
                }
                Err(err) => log::warn!("Ignoring malformed page tuning: {err}"),
            }
        }

        log::info!("Using default page tuning");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_consts() {
        let tuning = Tuning::default();
        assert_eq!(tuning.header_offset_px, 70.0);
        assert_eq!(tuning.scroll_reset_delay_ms, 50);
        assert_eq!(tuning.typing_speed_ms, 80);
        assert_eq!(tuning.typing_pause_ms, 1500);
        assert_eq!(tuning.card_stagger_ms, 150);
        assert_eq!(tuning.carousel_gutter_px, 20);
        assert_eq!(tuning.section_visibility_threshold, 0.15);
        assert_eq!(tuning.typing_phrases.len(), 2);
    }

    #[test]
    fn test_partial_json_override_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{"typing_speed_ms": 40}"#).unwrap();
        assert_eq!(tuning.typing_speed_ms, 40);
        assert_eq!(tuning.typing_pause_ms, 1500);
        assert_eq!(tuning.header_offset_px, 70.0);
    }

    #[test]
    fn test_phrase_override() {
        let tuning = Tuning::from_json(r#"{"typing_phrases": ["AB", "CD"]}"#).unwrap();
        assert_eq!(tuning.typing_phrases, ["AB", "CD"]);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(Tuning::from_json("{not json").is_err());
    }
}
