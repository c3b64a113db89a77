#![forbid(unsafe_code)]

//! # Hello
//!
//! A terminal gallery of small demos. Each page shows the demo's doc
//! comment, runs the demo, and prints the demo's own code underneath.
//!
//! The code panel comes from the embedded source of each demo file: the
//! function is sliced out, its leading `/*! ... */` doc is stripped and the
//! body is shifted back to column 0 by [`codeview`].
//!
//! ## Public Modules
//!
//! - [`app`] - Top-level commands
//! - [`cli`] - Command-line arguments
//! - [`config`] - Runtime configuration
//! - [`demos`] - The demo functions
//! - [`dispatcher`] - Page layout around a demo
//! - [`registry`] - Demo table, docs and listings
//! - [`render`] - Terminal drawing
//! - [`ui`] - Page model the demos draw into

pub mod app;
pub mod cli;
pub mod config;
pub mod demos;
pub mod dispatcher;
pub mod error;
pub mod logging;
pub mod menu;
pub mod registry;
pub mod render;
pub mod theme;
pub mod ui;

pub use app::App;
pub use config::Config;
pub use error::{GalleryError, Result};
pub use registry::{Demo, Registry};
