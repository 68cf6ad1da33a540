//! Scroll-linked animation.
//!
//! A scroll reading becomes normalized [`ScrollRange`] progress, a [`Spring`]
//! smooths it frame by frame, and a [`Scene`] maps the smoothed value through
//! its [`Curve`]s into styles. Nothing flows back upstream. The types here are
//! independent of Leptos; `app::hooks` binds them to the page.

pub mod chrome;
pub mod curve;
pub mod pipeline;
pub mod portrait;
pub mod scroll;
pub mod spring;
pub mod style;
pub mod tilt;

pub use curve::Curve;
pub use pipeline::{RenderTarget, Scene, ScrollPipeline};
pub use portrait::{MotionPreset, PortraitScene, PortraitStyle};
pub use scroll::{Boundary, Edge, Geometry, ScrollRange};
pub use spring::{Spring, SpringConfig};
pub use style::{BoxShadow, ElementStyle, Transform3d};
