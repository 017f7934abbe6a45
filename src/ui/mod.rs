//! Page interaction logic
//!
//! Everything here is DOM-free and unit-testable:
//! - Explicit state where the page has state (typewriter, about reveal)
//! - Plain data records at the DOM boundary (modal, form status)
//! - Pure math for motion (parallax, carousel steps)
//!
//! The wasm entry wires these against the document; nothing in this module
//! touches `web-sys`.

pub mod contact;
pub mod modal;
pub mod motion;
pub mod reveal;
pub mod typing;

pub use contact::SubmitOutcome;
pub use modal::{ProjectInfo, strip_scheme};
pub use motion::{RESET_TRANSFORM, carousel_scroll_amount, parallax_offset, parallax_transform};
pub use reveal::{AboutReveal, stagger_delay_ms};
pub use typing::{TypeFrame, Typewriter, TypingTask};
