//! # msgcat Config
//!
//! Settings for msgcat: where the locale file lives, which language is
//! active, rendering switches and logging.
//!
//! Settings are read from YAML, overridden from `MSGCAT_*` environment
//! variables and validated before use.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod defaults;
pub mod loader;
pub mod schema;
pub mod validator;

pub use defaults::*;
pub use loader::*;
pub use schema::*;
pub use validator::*;
