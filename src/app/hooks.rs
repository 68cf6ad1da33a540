use std::sync::{Arc, Mutex};

use leptos::{html::Div, prelude::*};
use leptos_use::{
    use_element_visibility, use_raf_fn_with_options, use_window_scroll, use_window_size,
    UseRafFnCallbackArgs, UseRafFnOptions, UseWindowSizeReturn,
};

use crate::motion::{Geometry, RenderTarget, Scene, ScrollPipeline, ScrollRange, SpringConfig};

// resuming after a pause reports the whole paused interval as one frame
const MAX_FRAME_SECONDS: f64 = 0.1;

/// Publishes each composed frame into a signal the view binds to.
struct SignalTarget<S: Send + Sync + 'static>(RwSignal<S>);

impl<S> RenderTarget<S> for SignalTarget<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn apply(&mut self, style: &S) {
        self.0.set(style.clone());
    }
}

/// Drives `scene` from the scroll position of the element behind `node`.
///
/// Frames are requested only while the spring is moving. When the owner is
/// disposed the pipeline is unmounted, so pending frames write nothing.
pub fn use_scroll_animation<S>(
    node: NodeRef<Div>,
    range: ScrollRange,
    config: SpringConfig,
    scene: S,
) -> Signal<S::Style>
where
    S: Scene + Send + 'static,
    S::Style: Clone + Default + Send + Sync + 'static,
{
    let style = RwSignal::new(S::Style::default());
    let mut pipeline = ScrollPipeline::new(range, config, scene);
    pipeline.mount(SignalTarget(style));
    let shared = Arc::new(Mutex::new(pipeline));
    let pipeline = StoredValue::new(shared.clone());
    let settled = RwSignal::new(true);

    let pausable = use_raf_fn_with_options(
        move |args: UseRafFnCallbackArgs| {
            let dt = (args.delta / 1000.0).min(MAX_FRAME_SECONDS);
            let moving = pipeline.with_value(|p| {
                p.lock()
                    .expect("should be able to lock scroll pipeline")
                    .on_frame(dt)
            });
            if !moving {
                settled.set(true);
            }
        },
        UseRafFnOptions::default().immediate(false),
    );
    Effect::watch(
        move || settled.get(),
        move |settled, _, _| {
            if *settled {
                (pausable.pause)();
            } else {
                (pausable.resume)();
            }
        },
        false,
    );

    let (_, scroll_y) = use_window_scroll();
    let UseWindowSizeReturn { width, height } = use_window_size();
    Effect::new(move |measured: Option<bool>| {
        let y = scroll_y.get();
        let viewport_height = height.get();
        // width-only resizes still reflow the page above the element
        width.track();
        let Some(el) = node.get() else {
            return measured.unwrap_or(false);
        };
        let rect = el.get_bounding_client_rect();
        let geometry = Geometry::from_client_rect(rect.top(), rect.height(), y, viewport_height);
        pipeline.with_value(|p| {
            let mut p = p.lock().expect("should be able to lock scroll pipeline");
            let needs_frames = p.on_scroll(&geometry, y);
            if measured != Some(true) {
                // first reading, e.g. a reload mid-page: no entrance to animate
                p.snap();
            } else if needs_frames {
                settled.set(false);
            }
        });
        true
    });

    on_cleanup(move || {
        shared
            .lock()
            .expect("should be able to lock scroll pipeline")
            .unmount();
    });

    style.into()
}

/// Becomes true the first time the element scrolls into view and stays true.
pub fn use_reveal(node: NodeRef<Div>) -> Signal<bool> {
    let visible = use_element_visibility(node);
    let revealed = RwSignal::new(false);
    Effect::watch(
        move || visible.get(),
        move |visible, _, _| {
            if *visible {
                revealed.set(true);
            }
        },
        true,
    );
    revealed.into()
}
