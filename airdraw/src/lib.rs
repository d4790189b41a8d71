//! Gesture-to-pointer engine for drawing with pinches in front of a camera.
//!
//! Each frame the host hands in the recognizer's hand landmarks. The engine
//! classifies pinches, debounces discrete gestures, and turns a held index
//! pinch into pointer down/move/up events on an injected drawing surface,
//! cycling tools on a middle pinch. Landmarks are mapped into client space
//! through the same cover-crop and mirror the camera preview uses, so input
//! lands where the user sees their fingers.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`session`] | Per-session pipeline: [`session::SessionCore`] and frame reports |
//! | [`gesture`] | Pinch classification from landmarks |
//! | [`debounce`] | Edge detection for discrete gestures, per hand |
//! | [`stroke`] | Active stroke points with the jitter filter |
//! | [`pointer`] | Pointer event types and the down/move/up synthesizer |
//! | [`tools`] | Tool cycling |
//! | [`scaling`] | Cover-fit camera-to-client mapping |
//! | [`hand`] | Hand observations and landmark names |
//! | [`surface`] | Drawing-surface capability and an in-memory recorder |
//! | [`capture`] | Video-source capability, frame gating, capture teardown |
//! | [`overlay`] | Client-space hand markers |
//! | [`config`] | Pipeline tunables |
//! | [`render`] | Overlay drawing to a 2D canvas |
//! | [`web`] | `wasm-bindgen` host binding |
//! | [`consts`] | Shared numeric constants |

pub mod capture;
pub mod config;
pub mod consts;
pub mod debounce;
pub mod gesture;
pub mod hand;
pub mod overlay;
pub mod pointer;
pub mod render;
pub mod scaling;
pub mod session;
pub mod stroke;
pub mod surface;
pub mod tools;
pub mod web;
