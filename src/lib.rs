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
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
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

//! A rotating cube navigation menu rendered with wgpu.
//!
//! The crate models a two-screen menu: a welcome spectrum that gives way to
//! a six-faced cube. Dragging, swiping or scrolling turns the cube; tapping a
//! face opens its page and snaps the cube to that face. Orientation is kept
//! as a target plus a smoothed current value that eases toward it each
//! frame.
//!
//! # Key entry points
//!
//! - [`engine::CubeEngine`] - navigation state, input handling and the
//!   per-frame driver
//! - [`options::Options`] - runtime configuration (motion, input, camera,
//!   faces, timing, keybindings)
//! - [`renderer::RenderSurface`] - anything that can draw a
//!   [`renderer::SceneFrame`]; [`renderer::GpuRenderer`] is the wgpu one
//! - [`picking::hit_test`] - pointer-to-face ray casting
//!
//! # Architecture
//!
//! The engine is GPU-free. Platform events are converted to
//! [`input::InputEvent`]s, translated into [`engine::CubeCommand`]s, and
//! applied by the engine. Each frame the host calls
//! [`engine::CubeEngine::update`] with the elapsed time and then
//! [`engine::CubeEngine::render`] with its surface. The optional `viewer`
//! feature wraps all of this in a winit window.

pub mod camera;
pub mod engine;
pub mod error;
pub mod gpu;
pub mod input;
pub mod options;
pub mod picking;
pub mod renderer;
pub mod scene;
pub mod util;
#[cfg(feature = "viewer")]
mod viewer;

pub use engine::{CubeCommand, CubeEngine};
pub use error::FaceCubeError;
#[cfg(feature = "viewer")]
pub use viewer::{Viewer, ViewerBuilder};
