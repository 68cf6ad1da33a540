/// Largest card rotation in degrees, reached at the card's edges.
pub const MAX_TILT: f64 = 8.0;

/// Card rotation for a pointer at `(x, y)` relative to a `width` x `height` card.
///
/// Returns `(rotate_x, rotate_y)` in degrees. The top edge tilts toward the
/// viewer, the right edge away.
pub fn tilt(width: f64, height: f64, x: f64, y: f64) -> (f64, f64) {
    if width <= 0.0 || height <= 0.0 {
        return (0.0, 0.0);
    }
    let center_x = width / 2.0;
    let center_y = height / 2.0;
    let rotate_x = ((y - center_y) / center_y).clamp(-1.0, 1.0) * -MAX_TILT;
    let rotate_y = ((x - center_x) / center_x).clamp(-1.0, 1.0) * MAX_TILT;
    (rotate_x, rotate_y)
}

pub fn tilt_css(rotate_x: f64, rotate_y: f64) -> String {
    use super::style::css_number;

    format!(
        "transform: perspective(1000px) rotateX({}deg) rotateY({}deg);transform-style: preserve-3d;",
        css_number(rotate_x),
        css_number(rotate_y)
    )
}
