// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Test modules unwrap freely
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

//! Multi-source orbit camera controller for browser AR viewers.
//!
//! A camera feed fills the background while a 3D object is drawn on top;
//! arcam decides where the virtual camera sits. Device orientation,
//! rotation rate, touch drags and pinches, mouse drags, and the scroll
//! wheel all write into one spherical [`camera::OrbitState`]. Once per
//! frame the [`camera::CameraResolver`] converts it to an eye position,
//! eases toward it, and aims at the tracked object.
//!
//! # Key entry points
//!
//! - [`camera::OrbitController`] - owns the orbit, the input adapters and
//!   the resolver
//! - [`input::InputEvent`] - platform-agnostic input (serde-tagged for
//!   recorded traces)
//! - [`options::Options`] - TOML configuration (bounds, damping,
//!   sensitivities, debug overlay)
//!
//! # Features
//!
//! - `web` - wasm-bindgen `WebOrbitController` with DOM listener wiring
//! - `viewer` - winit window-event translation
//! - `binary` - the `arcam` trace replay tool

pub mod camera;
pub mod error;
pub mod input;
pub mod options;
pub mod util;
#[cfg(feature = "web")]
pub mod web;

pub use camera::{CameraPose, DebugSnapshot, OrbitController};
pub use error::ArcamError;
pub use input::InputEvent;
pub use options::Options;
