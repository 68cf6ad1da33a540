//! The About section's portrait entrance: one curve per visual channel, all
//! driven by the same smoothed progress.
//!
//! Breakpoints are hand-tuned. Sibling channels are free to disagree on
//! their phase windows.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::curve::Curve;
use super::pipeline::Scene;
use super::style::{BoxShadow, ElementStyle, Rgb, Transform3d};

const INSET_RING: BoxShadow = BoxShadow {
    offset_y: 0.0,
    blur: 0.0,
    spread: 1.0,
    color: Rgb(255, 255, 255),
    opacity: 0.1,
    inset: true,
};
const GLOW_BLUR: f64 = 40.0;
const ACCENT_BLUR: f64 = 1.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MotionPreset {
    /// Two-point fades: scale, tilt and blur resolve together.
    Standard,
    /// Multi-phase curves that push past the resting pose and settle back.
    #[default]
    Cinematic,
}

impl FromStr for MotionPreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(MotionPreset::Standard),
            "cinematic" => Ok(MotionPreset::Cinematic),
            other => Err(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccentCurves {
    pub opacity: Curve,
    pub scale: Curve,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PortraitCurves {
    pub scale: Curve,
    pub opacity: Curve,
    pub rotate_x: Curve,
    pub rotate_y: Curve,
    pub translate_y: Curve,
    pub translate_z: Curve,
    pub blur: Curve,
    pub glow_opacity: Curve,
    pub glow_scale: Curve,
    pub shadow_opacity: Curve,
    pub shadow_blur: Curve,
    pub shadow_offset: Curve,
    pub accent_primary: AccentCurves,
    pub accent_secondary: AccentCurves,
}

pub const STANDARD: PortraitCurves = PortraitCurves {
    scale: Curve::linear(&[(0.0, 0.7), (0.8, 1.0)]),
    opacity: Curve::linear(&[(0.0, 0.0), (0.5, 1.0)]),
    rotate_x: Curve::linear(&[(0.0, 25.0), (1.0, 0.0)]),
    rotate_y: Curve::linear(&[(0.0, -15.0), (1.0, 0.0)]),
    translate_y: Curve::linear(&[(0.0, 80.0), (1.0, 0.0)]),
    translate_z: Curve::linear(&[(0.0, 0.0), (1.0, 0.0)]),
    blur: Curve::linear(&[(0.0, 8.0), (0.6, 0.0)]),
    glow_opacity: Curve::linear(&[(0.3, 0.0), (1.0, 0.6)]),
    glow_scale: Curve::linear(&[(0.3, 0.8), (1.0, 1.1)]),
    shadow_opacity: Curve::linear(&[(0.0, 0.5), (1.0, 0.5)]),
    shadow_blur: Curve::linear(&[(0.0, 50.0), (1.0, 50.0)]),
    shadow_offset: Curve::linear(&[(0.0, 25.0), (1.0, 25.0)]),
    accent_primary: AccentCurves {
        opacity: Curve::linear(&[(0.5, 0.0), (1.0, 0.8)]),
        scale: Curve::linear(&[(0.5, 0.5), (1.0, 1.0)]),
    },
    accent_secondary: AccentCurves {
        opacity: Curve::linear(&[(0.6, 0.0), (1.0, 0.7)]),
        scale: Curve::linear(&[(0.6, 0.5), (1.0, 1.0)]),
    },
};

pub const CINEMATIC: PortraitCurves = PortraitCurves {
    scale: Curve::new(&[(0.0, 0.6), (0.55, 1.06), (0.8, 0.98), (1.0, 1.0)]),
    opacity: Curve::linear(&[(0.0, 0.0), (0.4, 1.0)]),
    rotate_x: Curve::new(&[(0.0, 30.0), (0.7, -4.0), (1.0, 0.0)]),
    rotate_y: Curve::new(&[(0.0, -20.0), (0.7, 3.0), (1.0, 0.0)]),
    translate_y: Curve::new(&[(0.0, 120.0), (0.6, -10.0), (1.0, 0.0)]),
    translate_z: Curve::new(&[(0.0, -200.0), (0.6, 20.0), (1.0, 0.0)]),
    blur: Curve::linear(&[(0.0, 12.0), (0.5, 0.0)]),
    glow_opacity: Curve::new(&[(0.2, 0.0), (0.7, 0.75), (1.0, 0.6)]),
    glow_scale: Curve::new(&[(0.2, 0.7), (0.7, 1.2), (1.0, 1.1)]),
    shadow_opacity: Curve::linear(&[(0.0, 0.1), (1.0, 0.5)]),
    shadow_blur: Curve::linear(&[(0.0, 10.0), (1.0, 50.0)]),
    shadow_offset: Curve::new(&[(0.0, 5.0), (0.6, 32.0), (1.0, 25.0)]),
    accent_primary: AccentCurves {
        opacity: Curve::linear(&[(0.4, 0.0), (1.0, 0.8)]),
        scale: Curve::new(&[(0.4, 0.4), (0.8, 1.1), (1.0, 1.0)]),
    },
    accent_secondary: AccentCurves {
        opacity: Curve::linear(&[(0.5, 0.0), (1.0, 0.7)]),
        scale: Curve::new(&[(0.5, 0.4), (0.85, 1.1), (1.0, 1.0)]),
    },
};

impl PortraitCurves {
    pub fn for_preset(preset: MotionPreset) -> Self {
        match preset {
            MotionPreset::Standard => STANDARD,
            MotionPreset::Cinematic => CINEMATIC,
        }
    }

    pub fn named(&self) -> [(&'static str, Curve); 16] {
        [
            ("scale", self.scale),
            ("opacity", self.opacity),
            ("rotate_x", self.rotate_x),
            ("rotate_y", self.rotate_y),
            ("translate_y", self.translate_y),
            ("translate_z", self.translate_z),
            ("blur", self.blur),
            ("glow_opacity", self.glow_opacity),
            ("glow_scale", self.glow_scale),
            ("shadow_opacity", self.shadow_opacity),
            ("shadow_blur", self.shadow_blur),
            ("shadow_offset", self.shadow_offset),
            ("accent_primary.opacity", self.accent_primary.opacity),
            ("accent_primary.scale", self.accent_primary.scale),
            ("accent_secondary.opacity", self.accent_secondary.opacity),
            ("accent_secondary.scale", self.accent_secondary.scale),
        ]
    }
}

/// Styles for every layer of the portrait at one instant.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PortraitStyle {
    /// The 3D-transformed wrapper.
    pub portrait: ElementStyle,
    /// Image frame: blur reveal and drop shadow.
    pub frame: ElementStyle,
    pub glow: ElementStyle,
    pub accent_primary: ElementStyle,
    pub accent_secondary: ElementStyle,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PortraitScene {
    curves: PortraitCurves,
}

impl PortraitScene {
    pub fn new(preset: MotionPreset) -> Self {
        Self {
            curves: PortraitCurves::for_preset(preset),
        }
    }

    fn accent(curves: &AccentCurves, progress: f64) -> ElementStyle {
        ElementStyle {
            transform: Some(Transform3d::scale(curves.scale.evaluate(progress))),
            opacity: Some(curves.opacity.evaluate(progress)),
            blur: Some(ACCENT_BLUR),
            shadows: Vec::new(),
        }
    }
}

impl Scene for PortraitScene {
    type Style = PortraitStyle;

    fn compose(&self, progress: f64) -> PortraitStyle {
        let c = &self.curves;
        let portrait = ElementStyle {
            transform: Some(Transform3d {
                translate_x: 0.0,
                translate_y: c.translate_y.evaluate(progress),
                translate_z: c.translate_z.evaluate(progress),
                scale: c.scale.evaluate(progress),
                rotate_x: c.rotate_x.evaluate(progress),
                rotate_y: c.rotate_y.evaluate(progress),
            }),
            opacity: Some(c.opacity.evaluate(progress)),
            ..Default::default()
        };
        let drop_shadow = BoxShadow {
            offset_y: c.shadow_offset.evaluate(progress),
            blur: c.shadow_blur.evaluate(progress),
            spread: -12.0,
            color: Rgb(0, 0, 0),
            opacity: c.shadow_opacity.evaluate(progress),
            inset: false,
        };
        let frame = ElementStyle {
            blur: Some(c.blur.evaluate(progress)),
            shadows: vec![drop_shadow, INSET_RING],
            ..Default::default()
        };
        let glow = ElementStyle {
            transform: Some(Transform3d::scale(c.glow_scale.evaluate(progress))),
            opacity: Some(c.glow_opacity.evaluate(progress)),
            blur: Some(GLOW_BLUR),
            shadows: Vec::new(),
        };
        PortraitStyle {
            portrait,
            frame,
            glow,
            accent_primary: Self::accent(&c.accent_primary, progress),
            accent_secondary: Self::accent(&c.accent_secondary, progress),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_curve_is_monotonic() {
        for preset in [MotionPreset::Standard, MotionPreset::Cinematic] {
            for (name, curve) in PortraitCurves::for_preset(preset).named() {
                assert!(
                    curve.is_monotonic(),
                    "{:?} curve `{}` has non-increasing breakpoints",
                    preset,
                    name
                );
            }
        }
    }

    #[test]
    fn test_resting_pose_is_identity() {
        for preset in [MotionPreset::Standard, MotionPreset::Cinematic] {
            let style = PortraitScene::new(preset).compose(1.0);
            let t = style.portrait.transform.expect("portrait transform");
            assert_eq!(t.scale, 1.0);
            assert_eq!(t.rotate_x, 0.0);
            assert_eq!(t.rotate_y, 0.0);
            assert_eq!(t.translate_y, 0.0);
            assert_eq!(t.translate_z, 0.0);
            assert_eq!(style.portrait.opacity, Some(1.0));
            assert_eq!(style.frame.blur, Some(0.0));
        }
    }

    #[test]
    fn test_standard_entry_pose() {
        let style = PortraitScene::new(MotionPreset::Standard).compose(0.0);
        let t = style.portrait.transform.expect("portrait transform");
        assert_eq!(t.scale, 0.7);
        assert_eq!(t.rotate_x, 25.0);
        assert_eq!(t.rotate_y, -15.0);
        assert_eq!(t.translate_y, 80.0);
        assert_eq!(style.portrait.opacity, Some(0.0));
        assert_eq!(style.frame.blur, Some(8.0));
        assert_eq!(style.glow.opacity, Some(0.0));
        assert_eq!(
            style.frame.box_shadow_css().as_deref(),
            Some("0 25px 50px -12px rgba(0, 0, 0, 0.5), inset 0 0px 0px 1px rgba(255, 255, 255, 0.1)")
        );
    }

    #[test]
    fn test_cinematic_overshoots_then_settles() {
        let scene = PortraitScene::new(MotionPreset::Cinematic);
        let mid = scene.compose(0.55).portrait.transform.expect("transform");
        assert!(mid.scale > 1.0);
        let end = scene.compose(1.0).portrait.transform.expect("transform");
        assert_eq!(end.scale, 1.0);
    }

    #[test]
    fn test_compose_is_pure() {
        let scene = PortraitScene::new(MotionPreset::Cinematic);
        for p in [0.0, 0.13, 0.5, 0.77, 1.0] {
            let a = scene.compose(p);
            let b = scene.compose(p);
            assert_eq!(a, b);
            assert_eq!(a.portrait.to_css(), b.portrait.to_css());
            assert_eq!(a.frame.to_css(), b.frame.to_css());
        }
    }

    #[test]
    fn test_preset_parsing() {
        assert_eq!("Standard".parse(), Ok(MotionPreset::Standard));
        assert_eq!(" cinematic ".parse(), Ok(MotionPreset::Cinematic));
        assert!("wobbly".parse::<MotionPreset>().is_err());
        assert_eq!(MotionPreset::default(), MotionPreset::Cinematic);
    }
}
