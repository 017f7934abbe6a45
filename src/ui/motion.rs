//! Motion math: hero parallax and carousel scroll steps
//!
//! Pure helpers; the wasm glue feeds them event coordinates and element
//! geometry and writes the results back to the DOM.

use glam::Vec2;

/// Transform applied when the pointer leaves the hero image
pub const RESET_TRANSFORM: &str = "translate(0, 0) scale(1)";

/// Damped offset of the pointer from the image's own center
///
/// `rect_origin` is the image's viewport position, `rect_size` its rendered
/// size, `pointer` the event's client coordinates.
#[inline]
pub fn parallax_offset(pointer: Vec2, rect_origin: Vec2, rect_size: Vec2, damping: f32) -> Vec2 {
    (pointer - rect_origin - rect_size * 0.5) * damping
}

/// CSS transform for a parallax offset: translation plus constant zoom
pub fn parallax_transform(offset: Vec2, zoom: f32) -> String {
    format!("translate({}px, {}px) scale({})", offset.x, offset.y, zoom)
}

/// Pixels one carousel button click scrolls the track
///
/// First card's rendered width plus the gutter; the track's own visible
/// width when the carousel holds no card.
#[inline]
pub fn carousel_scroll_amount(first_card_width: Option<i32>, track_width: i32, gutter: i32) -> f64 {
    match first_card_width {
        Some(width) => (width + gutter) as f64,
        None => track_width as f64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_pointer_has_zero_offset() {
        let offset = parallax_offset(
            Vec2::new(150.0, 200.0),
            Vec2::new(100.0, 100.0),
            Vec2::new(100.0, 200.0),
            0.05,
        );
        assert_eq!(offset, Vec2::ZERO);
    }

    #[test]
    fn test_offset_scales_with_damping() {
        let rect_origin = Vec2::new(0.0, 0.0);
        let rect_size = Vec2::new(200.0, 100.0);
        // Pointer at the right edge, vertical center: raw offset (100, 0)
        let offset = parallax_offset(Vec2::new(200.0, 50.0), rect_origin, rect_size, 0.05);
        assert_eq!(offset, Vec2::new(5.0, 0.0));

        let offset = parallax_offset(Vec2::new(200.0, 50.0), rect_origin, rect_size, 0.1);
        assert_eq!(offset, Vec2::new(10.0, 0.0));
    }

    #[test]
    fn test_transform_formatting() {
        assert_eq!(
            parallax_transform(Vec2::new(5.0, -2.5), 1.02),
            "translate(5px, -2.5px) scale(1.02)"
        );
        assert_eq!(
            parallax_transform(Vec2::ZERO, 1.02),
            "translate(0px, 0px) scale(1.02)"
        );
    }

    #[test]
    fn test_carousel_amount_with_card() {
        assert_eq!(carousel_scroll_amount(Some(280), 900, 20), 300.0);
    }

    #[test]
    fn test_carousel_amount_without_card_uses_track_width() {
        assert_eq!(carousel_scroll_amount(None, 900, 20), 900.0);
    }
}
