//! Transform overlay editor: pan, resize, crop and rotate a rectangle.
//!
//! # Gestures
//!
//! | Grab            | Mode     | Effect of a pointer move                   |
//! |-----------------|----------|--------------------------------------------|
//! | interior        | `move`   | `x += dx`, `y += dy`                        |
//! | corner `nw..se` | `corner` | row and column edges of the corner          |
//! | side `n e s w`  | `side`   | the one edge named                          |
//! | rotate grip     | `rotate` | angle of the pointer around the anchor center |
//!
//! A gesture ends on pointer-up anywhere (or lost pointer capture), which
//! returns the mode to `none` and runs the configured [`Normalization`].
//!
//! # Coordinate System
//!
//! - Geometry is in surface units, origin top-left, y pointing down
//! - Rotation is in degrees, positive = clockwise on screen, not wrapped
//! - Render composition: scale the surface, then translate and rotate the
//!   rectangle about its center, then fill it with the image content

mod affine;
mod editor;
mod event;
mod geometry;
mod gesture;
mod handle;
mod layout;
mod normalize;
mod reducer;

pub use affine::Affine2;
pub use editor::{Editor, ScreenMeasure};
pub use event::EditorEvent;
pub use geometry::{Edges, Geometry, Point};
pub use gesture::{pointer_angle, GestureKind, GestureMode, RotateAnchor};
pub use handle::{Corner, Handle, Side};
pub use layout::{hit_test, HandleLayout, HitTarget, RenderLayout};
pub use normalize::{Normalization, RotationPolicy, SizePolicy};
pub use reducer::{reduce, EditorState};
