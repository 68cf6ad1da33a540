//! Navigation bar response to page scroll.

use super::curve::Curve;
use super::style::css_number;

const BACKGROUND_ALPHA: Curve = Curve::linear(&[(0.0, 0.0), (100.0, 0.05)]);
const BACKDROP_BLUR: Curve = Curve::linear(&[(0.0, 0.0), (100.0, 12.0)]);
/// Past this many pixels the bar gains its border and shadow.
pub const SCROLLED_THRESHOLD: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavChrome {
    pub background_alpha: f64,
    pub backdrop_blur: f64,
    pub scrolled: bool,
}

impl NavChrome {
    pub fn at(scroll_y: f64) -> Self {
        Self {
            background_alpha: BACKGROUND_ALPHA.evaluate(scroll_y),
            backdrop_blur: BACKDROP_BLUR.evaluate(scroll_y),
            scrolled: scroll_y > SCROLLED_THRESHOLD,
        }
    }

    pub fn to_css(&self) -> String {
        let blur = css_number(self.backdrop_blur);
        format!(
            "background-color: rgba(255, 255, 255, {});backdrop-filter: blur({}px);-webkit-backdrop-filter: blur({}px);",
            css_number(self.background_alpha),
            blur,
            blur
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_of_page_is_transparent() {
        let chrome = NavChrome::at(0.0);
        assert_eq!(chrome.background_alpha, 0.0);
        assert_eq!(chrome.backdrop_blur, 0.0);
        assert!(!chrome.scrolled);
    }

    #[test]
    fn test_ramps_then_holds() {
        let half = NavChrome::at(50.0);
        assert_eq!(half.background_alpha, 0.025);
        assert_eq!(half.backdrop_blur, 6.0);
        assert!(!half.scrolled);

        let far = NavChrome::at(4000.0);
        assert_eq!(far.background_alpha, 0.05);
        assert_eq!(far.backdrop_blur, 12.0);
        assert!(far.scrolled);
        assert_eq!(
            far.to_css(),
            "background-color: rgba(255, 255, 255, 0.05);backdrop-filter: blur(12px);-webkit-backdrop-filter: blur(12px);"
        );
    }
}
