//! Per-element wiring of scroll range, spring and scene.

use super::scroll::{Geometry, ScrollRange};
use super::spring::{Spring, SpringConfig};

/// Maps smoothed progress to a frame's styles.
pub trait Scene {
    type Style;

    fn compose(&self, progress: f64) -> Self::Style;
}

/// Receives composed frames. Implementations write to the rendered element.
pub trait RenderTarget<S> {
    fn apply(&mut self, style: &S);
}

/// Scroll position in, styled frames out: progress source, spring smoother
/// and scene composer for one mounted element.
pub struct ScrollPipeline<S, T>
where
    S: Scene,
{
    range: ScrollRange,
    spring: Spring,
    scene: S,
    target: Option<T>,
    /// Raw, unsmoothed progress from the latest scroll reading.
    progress: f64,
}

impl<S, T> ScrollPipeline<S, T>
where
    S: Scene,
    T: RenderTarget<S::Style>,
{
    pub fn new(range: ScrollRange, config: SpringConfig, scene: S) -> Self {
        Self {
            range,
            spring: Spring::new(config, 0.0),
            scene,
            target: None,
            progress: 0.0,
        }
    }

    /// Attaches the render target and paints the current frame.
    pub fn mount(&mut self, target: T) {
        self.target = Some(target);
        self.render();
    }

    /// Detaches the render target; later scroll and frame calls write nothing.
    pub fn unmount(&mut self) -> Option<T> {
        self.target.take()
    }

    /// Records a scroll or layout change. Returns whether animation frames are
    /// now needed.
    pub fn on_scroll(&mut self, geometry: &Geometry, scroll_y: f64) -> bool {
        if self.target.is_none() {
            return false;
        }
        self.progress = self.range.progress(geometry, scroll_y);
        self.spring.set_target(self.progress);
        !self.spring.is_resting()
    }

    /// Places the spring at the current progress without animating, e.g. when
    /// the page is restored mid-scroll.
    pub fn snap(&mut self) {
        self.spring.jump_to(self.progress);
        self.render();
    }

    /// Advances one animation frame of `dt` seconds. Returns whether more
    /// frames are needed.
    pub fn on_frame(&mut self, dt: f64) -> bool {
        if self.target.is_none() {
            return false;
        }
        let moving = self.spring.step(dt);
        self.render();
        moving
    }

    fn render(&mut self) {
        if let Some(target) = self.target.as_mut() {
            let style = self.scene.compose(self.spring.value());
            target.apply(&style);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::motion::portrait::{MotionPreset, PortraitScene, PortraitStyle};

    const FRAME: f64 = 1.0 / 60.0;

    #[derive(Clone, Default)]
    struct Recorder {
        frames: Arc<Mutex<Vec<f64>>>,
    }

    impl Recorder {
        fn count(&self) -> usize {
            self.frames.lock().expect("recorder lock").len()
        }

        fn last(&self) -> Option<f64> {
            self.frames.lock().expect("recorder lock").last().copied()
        }
    }

    struct Identity;

    impl Scene for Identity {
        type Style = f64;

        fn compose(&self, progress: f64) -> f64 {
            progress
        }
    }

    impl RenderTarget<f64> for Recorder {
        fn apply(&mut self, style: &f64) {
            self.frames.lock().expect("recorder lock").push(*style);
        }
    }

    fn geometry() -> Geometry {
        Geometry::new(1500.0, 600.0, 800.0)
    }

    fn pipeline() -> ScrollPipeline<Identity, Recorder> {
        ScrollPipeline::new(
            ScrollRange::entering_to_center(),
            SpringConfig::default(),
            Identity,
        )
    }

    #[test]
    fn test_mount_paints_first_frame() {
        let recorder = Recorder::default();
        let mut p = pipeline();
        p.mount(recorder.clone());
        assert_eq!(recorder.count(), 1);
        assert_eq!(recorder.last(), Some(0.0));
    }

    #[test]
    fn test_scroll_then_frames_settle_on_progress() {
        let recorder = Recorder::default();
        let mut p = pipeline();
        p.mount(recorder.clone());

        assert!(p.on_scroll(&geometry(), 1050.0));
        assert_eq!(p.progress, 0.5);

        let mut frames = 0;
        while p.on_frame(FRAME) {
            frames += 1;
            assert!(frames < 600);
        }
        assert_eq!(p.spring.value(), 0.5);
        assert_eq!(recorder.last(), Some(0.5));

        // unchanged scroll at rest needs no frames
        assert!(!p.on_scroll(&geometry(), 1050.0));
    }

    #[test]
    fn test_unmount_stops_all_writes() {
        let recorder = Recorder::default();
        let mut p = pipeline();
        p.mount(recorder.clone());
        p.on_scroll(&geometry(), 1400.0);
        for _ in 0..5 {
            p.on_frame(FRAME);
        }
        let written = recorder.count();
        assert!(p.spring.value() < 1.0);

        assert!(p.unmount().is_some());
        assert!(p.unmount().is_none());
        assert!(!p.on_scroll(&geometry(), 700.0));
        for _ in 0..60 {
            assert!(!p.on_frame(FRAME));
        }
        p.snap();
        assert_eq!(recorder.count(), written);
    }

    #[test]
    fn test_snap_skips_animation() {
        let recorder = Recorder::default();
        let mut p = pipeline();
        p.mount(recorder.clone());
        p.on_scroll(&geometry(), 1400.0);
        p.snap();
        assert_eq!(recorder.last(), Some(1.0));
        assert!(!p.on_frame(FRAME));
    }

    struct StyleSink(Vec<PortraitStyle>);

    impl RenderTarget<PortraitStyle> for StyleSink {
        fn apply(&mut self, style: &PortraitStyle) {
            self.0.push(style.clone());
        }
    }

    #[test]
    fn test_portrait_scene_reaches_rest_pose() {
        let mut p = ScrollPipeline::new(
            ScrollRange::entering_to_center(),
            SpringConfig::default(),
            PortraitScene::new(MotionPreset::Cinematic),
        );
        p.mount(StyleSink(Vec::new()));
        p.on_scroll(&geometry(), 2000.0);
        while p.on_frame(FRAME) {}

        let sink = p.unmount().expect("mounted target");
        let last = sink.0.last().expect("at least one frame");
        assert_eq!(last.portrait.opacity, Some(1.0));
        assert_eq!(last.frame.blur, Some(0.0));
    }

    #[test]
    fn test_unmeasurable_layout_does_not_poison_spring() {
        let recorder = Recorder::default();
        let mut p = pipeline();
        p.mount(recorder.clone());

        // viewport height not yet known
        p.on_scroll(&Geometry::new(1500.0, 600.0, f64::INFINITY), 2000.0);
        assert_eq!(p.progress, 0.0);
        assert!(p.spring.value().is_finite());

        assert!(p.on_scroll(&geometry(), 2000.0));
        let mut frames = 0;
        while p.on_frame(FRAME) {
            frames += 1;
            assert!(frames < 600, "spring failed to settle within ten seconds");
        }
        assert_eq!(p.spring.value(), 1.0);
        assert_eq!(recorder.last(), Some(1.0));
    }

    #[test]
    fn test_reflow_at_same_scroll_moves_progress() {
        let recorder = Recorder::default();
        let mut p = pipeline();
        p.mount(recorder.clone());
        p.on_scroll(&geometry(), 1050.0);
        p.snap();
        assert_eq!(p.progress, 0.5);

        // a narrower window wraps text above the section and pushes it down
        let reflowed = Geometry::new(1850.0, 600.0, 800.0);
        assert!(p.on_scroll(&reflowed, 1050.0));
        assert_eq!(p.progress, 0.0);
        while p.on_frame(FRAME) {}
        assert_eq!(recorder.last(), Some(0.0));
    }
}
