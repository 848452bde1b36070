//! Thumbframe Core - Thumbnail framing overlay editor
//!
//! This crate provides the platform-independent model behind the thumbnail
//! framing overlay: a rectangle that the user can pan, corner-resize,
//! edge-crop and free-rotate with pointer drags, plus the render layout a
//! paint layer consumes to draw the result.
//!
//! # Architecture
//!
//! All editing state lives in one [`EditorState`] value. Pointer input is
//! turned into [`EditorEvent`]s and folded through the pure [`reduce`]
//! function. [`RenderLayout`] is a separate pure projection of the state.
//! [`Editor`] bundles a state with its [`EditorConfig`] for callers that
//! want a mutable handle instead of threading values themselves.

pub mod config;
pub mod error;
pub mod overlay;

pub use config::EditorConfig;
pub use error::EditorError;
pub use overlay::{
    reduce, Affine2, Corner, Editor, EditorEvent, EditorState, Geometry, GestureKind,
    GestureMode, Handle, HitTarget, Normalization, Point, RenderLayout, RotateAnchor,
    RotationPolicy, ScreenMeasure, Side, SizePolicy,
};
