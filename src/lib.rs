//! Redporto - interactive front-end for a single-page portfolio site
//!
//! Core modules:
//! - `ui`: DOM-independent interaction logic (typewriter, reveals, modal data, motion math)
//! - `tuning`: Data-driven timing and motion settings

pub mod tuning;
pub mod ui;

pub use tuning::Tuning;
pub use ui::{AboutReveal, ProjectInfo, SubmitOutcome, TypeFrame, Typewriter, TypingTask};

/// Page behavior constants (defaults for [`Tuning`])
pub mod consts {
    /// Fixed-header offset subtracted from nav scroll targets (px)
    pub const HEADER_OFFSET_PX: f64 = 70.0;
    /// Delay before the load-time scroll reset fires (ms).
    /// Empirical: must run after the browser's own scroll-restore pass.
    pub const SCROLL_RESET_DELAY_MS: i32 = 50;

    /// Hero parallax damping applied to the pointer's offset from center
    pub const PARALLAX_DAMPING: f32 = 0.05;
    /// Constant zoom applied while the pointer is over the hero image
    pub const PARALLAX_ZOOM: f32 = 1.02;

    /// Typewriter delay between character steps (ms)
    pub const TYPING_SPEED_MS: u32 = 80;
    /// Typewriter hold after a phrase is fully typed (ms)
    pub const TYPING_PAUSE_MS: u32 = 1500;

    /// Gutter added to a card's width for one carousel scroll step (px)
    pub const CAROUSEL_GUTTER_PX: i32 = 20;

    /// Per-card delay step for the about-card stagger (ms)
    pub const CARD_STAGGER_MS: u32 = 150;
    /// Visibility ratio at which a section counts as on-screen
    pub const SECTION_VISIBILITY_THRESHOLD: f64 = 0.15;

    /// Fixed label shown for a project's live-demo link
    pub const LIVE_LINK_LABEL: &str = "Website Compiler";
}
