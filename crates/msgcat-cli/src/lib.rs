//! # msgcat CLI
//!
//! Command line front end for the msgcat message catalog: render a message
//! to the console, list the known keys, check a locale file for missing
//! entries, and format durations.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod app;
pub mod cli;
pub mod error;

pub use app::*;
pub use cli::*;
pub use error::*;
