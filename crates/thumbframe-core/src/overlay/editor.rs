//! Stateful wrapper around the reducer.

use super::event::EditorEvent;
use super::geometry::Point;
use super::handle::{Corner, Handle, Side};
use super::layout::{hit_test, HitTarget, RenderLayout};
use super::reducer::{reduce, EditorState};
use crate::config::EditorConfig;
use crate::error::EditorError;

/// Capability supplied by the rendering side: where the rectangle's center
/// currently is on screen.
///
/// The editor asks for it exactly once per rotate gesture, at the start.
pub trait ScreenMeasure {
    fn rect_center(&self) -> Point;
}

impl ScreenMeasure for Point {
    fn rect_center(&self) -> Point {
        *self
    }
}

/// An editor instance: config plus the current state.
///
/// Every event replaces the whole state value, so readers always see a
/// state that some complete event produced.
#[derive(Debug, Clone, Default)]
pub struct Editor {
    config: EditorConfig,
    state: EditorState,
}

impl Editor {
    /// Create an editor with a validated config.
    pub fn new(config: EditorConfig) -> Result<Self, EditorError> {
        config.validate()?;
        Ok(Self {
            config,
            state: EditorState::new(),
        })
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    /// Fold one event into the state.
    pub fn dispatch(&mut self, event: EditorEvent) {
        let before = self.state.gesture.kind();
        match event {
            EditorEvent::PointerMove { dx, dy, .. } => {
                log::trace!("{} dx={} dy={} ({})", event.name(), dx, dy, before);
            }
            EditorEvent::ImageLoaded {
                natural_width,
                natural_height,
            } => {
                log::debug!("image loaded: {}x{}", natural_width, natural_height);
            }
            EditorEvent::ImageLoadFailed => {
                log::warn!("image failed to load; keeping previous geometry");
            }
            _ => {}
        }

        self.state = reduce(&self.state, &event, &self.config);

        let after = self.state.gesture.kind();
        if before != after {
            log::debug!("gesture {} -> {} on {}", before, after, event.name());
        } else if event.is_begin() {
            log::debug!("ignored {} while {} is active", event.name(), before);
        }
    }

    /// Start a rotate gesture, measuring the center once.
    pub fn begin_rotate<M: ScreenMeasure + ?Sized>(&mut self, pointer: Point, measure: &M) {
        let center = measure.rect_center();
        self.dispatch(EditorEvent::BeginRotate { pointer, center });
    }

    /// Start a gesture from a handle identifier such as `"nw"` or `"rotate"`.
    pub fn begin_handle(&mut self, id: &str, pointer: Point) -> Result<(), EditorError> {
        match id.parse::<Handle>()? {
            Handle::Corner(c) => self.dispatch(EditorEvent::BeginResize(c)),
            Handle::Side(s) => self.dispatch(EditorEvent::BeginCrop(s)),
            Handle::Rotate => {
                let layout = self.layout();
                self.begin_rotate(pointer, &layout);
            }
        }
        Ok(())
    }

    pub fn begin_resize(&mut self, corner: Corner) {
        self.dispatch(EditorEvent::BeginResize(corner));
    }

    pub fn begin_crop(&mut self, side: Side) {
        self.dispatch(EditorEvent::BeginCrop(side));
    }

    /// Handle a pointer press at a point in scaled surface coordinates.
    ///
    /// Hit-tests the current layout and begins exactly one gesture: a handle
    /// press never also starts a pan. Presses while a gesture is running are
    /// reported but ignored.
    pub fn pointer_down(&mut self, point: Point) -> HitTarget {
        let layout = self.layout();
        let target = hit_test(&layout, point);
        if self.state.gesture.is_active() {
            return target;
        }
        match target {
            HitTarget::Handle(Handle::Corner(c)) => self.dispatch(EditorEvent::BeginResize(c)),
            HitTarget::Handle(Handle::Side(s)) => self.dispatch(EditorEvent::BeginCrop(s)),
            HitTarget::Handle(Handle::Rotate) => self.begin_rotate(point, &layout),
            HitTarget::Interior => self.dispatch(EditorEvent::BeginPan),
            HitTarget::Outside => {}
        }
        target
    }

    pub fn pointer_move(&mut self, dx: f64, dy: f64, pointer: Point) {
        self.dispatch(EditorEvent::PointerMove { dx, dy, pointer });
    }

    pub fn end_gesture(&mut self) {
        self.dispatch(EditorEvent::EndGesture);
    }

    pub fn layout(&self) -> RenderLayout {
        RenderLayout::from_state(&self.state, &self.config)
    }
}
