//! CSS formatting for composed animation frames.
//!
//! Everything here is a pure function of its inputs so the same frame always
//! renders to the same string.

use std::fmt::Write;

/// Formats a number with at most three decimals, without trailing zeros.
pub fn css_number(value: f64) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let mut s = format!("{:.3}", value);
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed);
    }
    if s == "-0" {
        s = "0".to_string();
    }
    s
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform3d {
    pub translate_x: f64,
    pub translate_y: f64,
    pub translate_z: f64,
    pub scale: f64,
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Default for Transform3d {
    fn default() -> Self {
        Self {
            translate_x: 0.0,
            translate_y: 0.0,
            translate_z: 0.0,
            scale: 1.0,
            rotate_x: 0.0,
            rotate_y: 0.0,
        }
    }
}

impl Transform3d {
    pub fn scale(scale: f64) -> Self {
        Self {
            scale,
            ..Default::default()
        }
    }

    /// Translation first, then scale, then rotations; rotations are in degrees.
    pub fn to_css(&self) -> String {
        format!(
            "translate3d({}px, {}px, {}px) scale({}) rotateX({}deg) rotateY({}deg)",
            css_number(self.translate_x),
            css_number(self.translate_y),
            css_number(self.translate_z),
            css_number(self.scale),
            css_number(self.rotate_x),
            css_number(self.rotate_y),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb(pub u8, pub u8, pub u8);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxShadow {
    pub offset_y: f64,
    pub blur: f64,
    pub spread: f64,
    pub color: Rgb,
    pub opacity: f64,
    pub inset: bool,
}

impl BoxShadow {
    pub fn to_css(&self) -> String {
        let Rgb(r, g, b) = self.color;
        format!(
            "{}0 {}px {}px {}px rgba({}, {}, {}, {})",
            if self.inset { "inset " } else { "" },
            css_number(self.offset_y),
            css_number(self.blur),
            css_number(self.spread),
            r,
            g,
            b,
            css_number(self.opacity.clamp(0.0, 1.0)),
        )
    }
}

/// One element's frame-local style. Unset properties are left to the stylesheet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementStyle {
    pub transform: Option<Transform3d>,
    pub opacity: Option<f64>,
    pub blur: Option<f64>,
    pub shadows: Vec<BoxShadow>,
}

impl ElementStyle {
    pub fn filter_css(&self) -> Option<String> {
        self.blur
            .map(|radius| format!("blur({}px)", css_number(radius.max(0.0))))
    }

    pub fn box_shadow_css(&self) -> Option<String> {
        if self.shadows.is_empty() {
            return None;
        }
        Some(
            self.shadows
                .iter()
                .map(BoxShadow::to_css)
                .collect::<Vec<_>>()
                .join(", "),
        )
    }

    /// Inline `style` attribute value.
    pub fn to_css(&self) -> String {
        let mut css = String::new();
        if let Some(transform) = &self.transform {
            let _ = write!(css, "transform: {};", transform.to_css());
        }
        if let Some(opacity) = self.opacity {
            let _ = write!(css, "opacity: {};", css_number(opacity.clamp(0.0, 1.0)));
        }
        if let Some(filter) = self.filter_css() {
            let _ = write!(css, "filter: {};", filter);
        }
        if let Some(shadow) = self.box_shadow_css() {
            let _ = write!(css, "box-shadow: {};", shadow);
        }
        css
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_number() {
        assert_eq!(css_number(1.0), "1");
        assert_eq!(css_number(0.5), "0.5");
        assert_eq!(css_number(-15.0), "-15");
        assert_eq!(css_number(0.123456), "0.123");
        assert_eq!(css_number(-0.0001), "0");
        assert_eq!(css_number(f64::NAN), "0");
        assert_eq!(css_number(80.0), "80");
    }

    #[test]
    fn test_transform_css() {
        let t = Transform3d {
            translate_y: 80.0,
            scale: 0.7,
            rotate_x: 25.0,
            rotate_y: -15.0,
            ..Default::default()
        };
        assert_eq!(
            t.to_css(),
            "translate3d(0px, 80px, 0px) scale(0.7) rotateX(25deg) rotateY(-15deg)"
        );
    }

    #[test]
    fn test_element_style_is_deterministic() {
        let style = ElementStyle {
            transform: Some(Transform3d::scale(0.85)),
            opacity: Some(0.5),
            blur: Some(4.0),
            shadows: vec![
                BoxShadow {
                    offset_y: 25.0,
                    blur: 50.0,
                    spread: -12.0,
                    color: Rgb(0, 0, 0),
                    opacity: 0.5,
                    inset: false,
                },
                BoxShadow {
                    offset_y: 0.0,
                    blur: 0.0,
                    spread: 1.0,
                    color: Rgb(255, 255, 255),
                    opacity: 0.1,
                    inset: true,
                },
            ],
        };
        let first = style.to_css();
        assert_eq!(first, style.clone().to_css());
        assert_eq!(
            first,
            "transform: translate3d(0px, 0px, 0px) scale(0.85) rotateX(0deg) rotateY(0deg);\
             opacity: 0.5;\
             filter: blur(4px);\
             box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.5), inset 0 0px 0px 1px rgba(255, 255, 255, 0.1);"
        );
    }

    #[test]
    fn test_empty_style() {
        let style = ElementStyle::default();
        assert_eq!(style.to_css(), "");
        assert_eq!(style.filter_css(), None);
        assert_eq!(style.box_shadow_css(), None);
    }
}
