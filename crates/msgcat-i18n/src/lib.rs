//! # msgcat I18n
//!
//! Keyed message catalog for msgcat.
//!
//! A [`MessageKey`] resolves to raw text from the active locale file, or from
//! the bundled English default when the locale file lacks it. The text is
//! split into lines at the `\n` marker and the key's placeholder tags are
//! replaced with caller supplied values. Problems never surface as errors at
//! retrieval time; they are reported to a [`Diagnostics`] sink and rendered
//! best-effort.
//!
//! # Example
//!
//! ```rust
//! use msgcat_i18n::{FileHandler, MessageCatalog, MessageKey, MessageSource};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let locale = MessageSource::from_yaml_str(
//!     "messages_de.yml",
//!     "captcha:\n  wrong_captcha: 'Nutze /captcha %captcha_code'\n",
//! )?;
//! let catalog = MessageCatalog::new(FileHandler::with_bundled_default(locale)?);
//!
//! let text = catalog.retrieve_single_with(MessageKey::CaptchaWrongError, &["1234"]);
//! assert_eq!(text, "Nutze /captcha 1234");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod catalog;
pub mod diagnostics;
pub mod duration;
pub mod error;
pub mod file_handler;
pub mod keys;
pub mod recipient;
pub mod source;
pub mod template;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use catalog::{CatalogOptions, MessageCatalog};
pub use diagnostics::{Diagnostic, Diagnostics, Severity, TracingDiagnostics};
pub use duration::{Duration, DurationFormatter, EnglishUnitLabels, TimeUnit, UnitLabels};
pub use error::{CatalogError, CatalogResult};
pub use file_handler::{resolve, FileHandler, BUNDLED_DEFAULT_NAME};
pub use keys::MessageKey;
pub use recipient::{Recipient, WriterRecipient};
pub use source::MessageSource;

/// Builds the replacement array for [`MessageCatalog::retrieve_with`] from
/// values of any [`Display`](std::fmt::Display) type.
#[macro_export]
macro_rules! replacements {
    () => {
        <[String; 0]>::default()
    };
    ($($value:expr),+ $(,)?) => {
        [$($value.to_string()),+]
    };
}
