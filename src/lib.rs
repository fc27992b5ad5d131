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
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Graphics math allowances
#![allow(clippy::float_cmp)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::suboptimal_flops)]

//! Free-fly camera and view/projection pipeline for interactive 3D
//! viewers.
//!
//! Flycam owns the viewer-side state of a 3D scene — where the eye is,
//! where it points, how wide it sees — and turns polled input events
//! into updated view and projection matrices each frame. Rendering is
//! deliberately left to the embedding application: the crate hands out
//! matrices and a GPU-ready uniform block, never touching a graphics
//! API.
//!
//! # Key entry points
//!
//! - [`camera::Camera`] - free-fly camera state and matrix builders
//! - [`camera::CameraController`] - input-scaled camera mutation
//! - [`input::InputProcessor`] - raw events to [`FlycamCommand`]s
//! - [`options::Options`] - runtime configuration with TOML presets
//! - `Viewer` (feature `viewer`) - winit event-loop shell
//!
//! # Architecture
//!
//! Everything is single-threaded and frame-driven. The event loop
//! feeds window events through an [`input::InputProcessor`], which
//! emits commands applied to a [`camera::CameraController`]. Held
//! movement keys are advanced once per frame, scaled by the elapsed
//! time from [`util::FrameTiming`], strictly before the frame's
//! matrices are read for rendering.

pub mod camera;
mod command;
mod error;
pub mod input;
pub mod options;
pub mod util;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use command::FlycamCommand;
pub use error::FlycamError;
#[cfg(feature = "viewer")]
pub use viewer::{RenderFrame, Viewer, ViewerBuilder};
