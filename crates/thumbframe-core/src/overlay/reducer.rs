//! Editor state and the pure reducer that advances it.

use super::event::EditorEvent;
use super::geometry::Geometry;
use super::gesture::{GestureMode, RotateAnchor};
use crate::config::EditorConfig;

/// Complete editing state of the overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EditorState {
    /// Rectangle being edited
    pub geometry: Geometry,
    /// Rotation in degrees, clockwise, unbounded
    pub rotation: f64,
    /// Surface zoom, set only from outside the gesture handlers
    pub scale: f64,
    /// Gesture in progress
    pub gesture: GestureMode,
}

impl Default for EditorState {
    fn default() -> Self {
        Self {
            geometry: Geometry::default(),
            rotation: 0.0,
            scale: 1.0,
            gesture: GestureMode::None,
        }
    }
}

impl EditorState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Compute the state that follows `state` after `event`.
///
/// Total over all inputs: events that make no sense in the current mode
/// (a move with no gesture, a second begin while one is active, ending when
/// nothing is active) return the state unchanged.
pub fn reduce(state: &EditorState, event: &EditorEvent, config: &EditorConfig) -> EditorState {
    let mut next = *state;

    if event.is_begin() && state.gesture.is_active() {
        return next;
    }

    match *event {
        EditorEvent::ImageLoaded {
            natural_width,
            natural_height,
        } => {
            next.geometry = Geometry::from_natural_size(natural_width, natural_height);
        }
        EditorEvent::ImageLoadFailed => {}
        EditorEvent::SetScale(scale) => {
            if scale.is_finite() && scale > 0.0 {
                next.scale = scale;
            }
        }
        EditorEvent::BeginPan => next.gesture = GestureMode::Move,
        EditorEvent::BeginResize(corner) => next.gesture = GestureMode::Corner(corner),
        EditorEvent::BeginCrop(side) => next.gesture = GestureMode::Side(side),
        EditorEvent::BeginRotate { pointer, center } => {
            next.gesture =
                GestureMode::Rotate(RotateAnchor::capture(pointer, center, state.rotation));
        }
        EditorEvent::PointerMove { dx, dy, pointer } => match state.gesture {
            GestureMode::None => {}
            GestureMode::Move => next.geometry.translate(dx, dy),
            GestureMode::Corner(corner) => next.geometry.drag_edges(corner.edges(), dx, dy),
            GestureMode::Side(side) => next.geometry.drag_edges(side.edges(), dx, dy),
            GestureMode::Rotate(anchor) => next.rotation = anchor.rotation_at(pointer),
        },
        EditorEvent::EndGesture | EditorEvent::PointerCaptureLost => {
            if state.gesture.is_active() {
                next.gesture = GestureMode::None;
                next.geometry = config.normalization.size.apply(next.geometry);
                next.rotation = config.normalization.rotation.apply(next.rotation);
            }
        }
    }

    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlay::{
        Corner, GestureKind, Handle, Normalization, Point, RotationPolicy, Side, SizePolicy,
    };

    fn run(state: EditorState, events: &[EditorEvent]) -> EditorState {
        let config = EditorConfig::default();
        events.iter().fold(state, |s, e| reduce(&s, e, &config))
    }

    fn loaded(w: u32, h: u32) -> EditorState {
        run(
            EditorState::new(),
            &[EditorEvent::ImageLoaded {
                natural_width: w,
                natural_height: h,
            }],
        )
    }

    fn mv(dx: f64, dy: f64) -> EditorEvent {
        EditorEvent::PointerMove {
            dx,
            dy,
            pointer: Point::default(),
        }
    }

    fn on_circle(center: Point, degrees: f64) -> Point {
        let r = degrees.to_radians();
        Point::new(center.x + 100.0 * r.cos(), center.y + 100.0 * r.sin())
    }

    #[test]
    fn test_initial_state() {
        let s = EditorState::new();
        assert_eq!(s.gesture, GestureMode::None);
        assert_eq!(s.scale, 1.0);
        assert_eq!(s.rotation, 0.0);
    }

    #[test]
    fn test_image_loaded_seeds_geometry() {
        let s = loaded(400, 300);
        assert_eq!(s.geometry, Geometry::new(0.0, 0.0, 400.0, 300.0));
    }

    #[test]
    fn test_pan_scenario() {
        let s = run(
            loaded(400, 300),
            &[EditorEvent::BeginPan, mv(10.0, 5.0), mv(-3.0, 2.0)],
        );
        assert_eq!(s.geometry, Geometry::new(7.0, 7.0, 400.0, 300.0));
        assert_eq!(s.gesture.kind(), GestureKind::Move);

        let s = run(s, &[EditorEvent::EndGesture]);
        assert_eq!(s.gesture, GestureMode::None);
    }

    #[test]
    fn test_corner_se_scenario() {
        let s = run(
            loaded(400, 300),
            &[EditorEvent::BeginResize(Corner::Se), mv(20.0, -10.0)],
        );
        assert_eq!(s.geometry, Geometry::new(0.0, 0.0, 420.0, 290.0));
    }

    #[test]
    fn test_corner_se_can_go_negative() {
        let s = run(
            loaded(400, 300),
            &[EditorEvent::BeginResize(Corner::Se), mv(0.0, -500.0)],
        );
        assert_eq!(s.geometry.height, -200.0);
        assert_eq!(s.geometry.y, 0.0);
    }

    #[test]
    fn test_side_crop_single_axis() {
        let s = run(
            loaded(400, 300),
            &[EditorEvent::BeginCrop(Side::N), mv(33.0, 40.0)],
        );
        assert_eq!(s.geometry, Geometry::new(0.0, 40.0, 400.0, 260.0));

        let s = run(
            loaded(400, 300),
            &[EditorEvent::BeginCrop(Side::W), mv(25.0, 99.0)],
        );
        assert_eq!(s.geometry, Geometry::new(25.0, 0.0, 375.0, 300.0));
    }

    #[test]
    fn test_rotate_scenario() {
        let center = Point::new(200.0, 150.0);
        let s = run(
            loaded(400, 300),
            &[
                EditorEvent::BeginRotate {
                    pointer: on_circle(center, 30.0),
                    center,
                },
                EditorEvent::PointerMove {
                    dx: 0.0,
                    dy: 0.0,
                    pointer: on_circle(center, 50.0),
                },
            ],
        );
        let anchor = s.gesture.rotate_anchor().unwrap();
        assert!((anchor.angle - 30.0).abs() < 1e-9);
        assert!((s.rotation - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_rotate_uses_captured_center() {
        let center = Point::new(0.0, 0.0);
        let mut s = run(
            loaded(400, 300),
            &[EditorEvent::BeginRotate {
                pointer: Point::new(10.0, 0.0),
                center,
            }],
        );
        // The anchor center is fixed for the whole gesture
        s.geometry = Geometry::new(500.0, 500.0, 10.0, 10.0);
        let s = run(
            s,
            &[EditorEvent::PointerMove {
                dx: 0.0,
                dy: 0.0,
                pointer: Point::new(0.0, 10.0),
            }],
        );
        assert!((s.rotation - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_move_without_gesture_is_noop() {
        let s = loaded(400, 300);
        assert_eq!(run(s, &[mv(50.0, 50.0)]), s);
    }

    #[test]
    fn test_begin_while_active_is_ignored() {
        let s = run(
            loaded(400, 300),
            &[EditorEvent::BeginPan, EditorEvent::BeginResize(Corner::Nw)],
        );
        assert_eq!(s.gesture, GestureMode::Move);
    }

    #[test]
    fn test_end_gesture_from_every_mode() {
        let begins = [
            EditorEvent::BeginPan,
            EditorEvent::BeginResize(Corner::Ne),
            EditorEvent::BeginCrop(Side::E),
            EditorEvent::BeginRotate {
                pointer: Point::new(1.0, 1.0),
                center: Point::default(),
            },
        ];
        for begin in begins {
            for end in [EditorEvent::EndGesture, EditorEvent::PointerCaptureLost] {
                let s = run(loaded(10, 10), &[begin, end]);
                assert_eq!(s.gesture, GestureMode::None);
                assert_eq!(s.gesture.active_handle(), None::<Handle>);
            }
        }
    }

    #[test]
    fn test_end_gesture_when_idle_is_noop() {
        let config = EditorConfig {
            normalization: Normalization {
                size: SizePolicy::ClampToZero,
                rotation: RotationPolicy::Wrap,
            },
            ..Default::default()
        };
        let mut s = loaded(10, 10);
        s.geometry.width = -5.0;
        s.rotation = 400.0;
        assert_eq!(reduce(&s, &EditorEvent::EndGesture, &config), s);
    }

    #[test]
    fn test_end_gesture_applies_normalization() {
        let config = EditorConfig {
            normalization: Normalization {
                size: SizePolicy::Flip,
                rotation: RotationPolicy::Wrap,
            },
            ..Default::default()
        };
        let events = [
            EditorEvent::BeginResize(Corner::Se),
            mv(-500.0, 0.0),
            EditorEvent::EndGesture,
        ];
        let s = events
            .iter()
            .fold(loaded(400, 300), |s, e| reduce(&s, e, &config));
        assert_eq!(s.geometry, Geometry::new(-100.0, 0.0, 100.0, 300.0));

        let mut rotated = loaded(10, 10);
        rotated.rotation = -30.0;
        rotated.gesture = GestureMode::Move;
        let s = reduce(&rotated, &EditorEvent::EndGesture, &config);
        assert!((s.rotation - 330.0).abs() < 1e-9);
    }

    #[test]
    fn test_image_loaded_discards_edits() {
        let s = run(
            loaded(400, 300),
            &[
                EditorEvent::BeginPan,
                mv(40.0, 40.0),
                EditorEvent::ImageLoaded {
                    natural_width: 640,
                    natural_height: 360,
                },
            ],
        );
        assert_eq!(s.geometry, Geometry::new(0.0, 0.0, 640.0, 360.0));
    }

    #[test]
    fn test_image_load_failed_keeps_geometry() {
        let before = run(loaded(400, 300), &[EditorEvent::BeginPan, mv(5.0, 5.0)]);
        let after = run(before, &[EditorEvent::ImageLoadFailed]);
        assert_eq!(before, after);
    }

    #[test]
    fn test_set_scale() {
        let s = run(loaded(10, 10), &[EditorEvent::SetScale(2.5)]);
        assert_eq!(s.scale, 2.5);

        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert_eq!(run(s, &[EditorEvent::SetScale(bad)]).scale, 2.5);
        }
    }

    #[test]
    fn test_gestures_never_touch_scale() {
        let s = run(
            loaded(400, 300),
            &[
                EditorEvent::SetScale(0.5),
                EditorEvent::BeginResize(Corner::Nw),
                mv(10.0, 10.0),
                EditorEvent::EndGesture,
                EditorEvent::BeginPan,
                mv(10.0, 10.0),
                EditorEvent::EndGesture,
            ],
        );
        assert_eq!(s.scale, 0.5);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
