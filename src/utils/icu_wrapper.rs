//! ICU abstraction layer for locale-aware headword ordering.
//!
//! Entries are sorted by headword with a Unicode collator rather than by code point,
//! so that accented and capitalised headwords land where a reader expects them.
//! The backend is selected at compile time based on feature flags:
//! - `icu` feature: Uses the pure Rust ICU4X crates (default)
//! - `rust-icu` feature: Uses the rust_icu crate (requires system ICU library)

use std::cmp::Ordering;

use crate::Result;

#[cfg(feature = "rust-icu")]
mod rust_icu_impl {
    use super::*;
    use rust_icu_ucol::UCollator as RustIcuCollator;
    use rust_icu_common::Error as RustIcuError;
    use snafu::Backtrace;

    use crate::LexiconError;

    /// Unicode collator using rust_icu backend.
    #[derive(Debug)]
    pub struct UCollator {
        inner: RustIcuCollator,
        locale_str: String,
    }

    impl UCollator {
        /// Creates a collator for the specified locale.
        pub fn try_from(locale_str: &str) -> Result<Self> {
            log::info!("Creating collator for locale: {}", locale_str);
            let inner = RustIcuCollator::try_from(locale_str)
                .map_err(|e| LexiconError::IcuError { source: e, backtrace: Backtrace::capture() })?;
            Ok(Self { inner, locale_str: locale_str.to_string() })
        }

        /// Compares two UTF-8 strings according to the collation rules.
        pub fn strcoll_utf8(&self, left: &str, right: &str) -> Result<Ordering> {
            self.inner.strcoll_utf8(left, right)
                .map_err(|e| LexiconError::IcuError { source: e, backtrace: Backtrace::capture() })
        }

        /// The locale string this collator was created from.
        pub fn locale(&self) -> &str {
            &self.locale_str
        }
    }

    pub type IcuError = RustIcuError;
}

#[cfg(feature = "icu")]
mod icu_impl {
    use super::*;
    use icu_collator::{Collator, CollatorBorrowed, CollatorPreferences};
    use icu_collator::options::{AlternateHandling, CaseLevel, CollatorOptions, Strength};
    use icu_locale::Locale;

    /// Unicode collator using pure Rust icu backend.
    #[derive(Debug)]
    pub struct UCollator {
        collator: CollatorBorrowed<'static>,
        locale_str: String,
    }

    /// Maps the `-u-` extension keywords of a locale onto collator options.
    ///
    /// `ks` (strength), `ka` (alternate handling) and `kc` (case level) are read here;
    /// `co`, `kf`, `kn` and `kb` reach the collator through `CollatorPreferences`.
    fn options_from_locale(locale: &Locale) -> CollatorOptions {
        let mut options = CollatorOptions::default();
        for (key, value) in locale.extensions.unicode.keywords.iter() {
            let value = value.to_string();
            match key.as_str() {
                "ks" => {
                    options.strength = match value.as_str() {
                        "level1" => Some(Strength::Primary),
                        "level2" => Some(Strength::Secondary),
                        "level3" => Some(Strength::Tertiary),
                        "level4" => Some(Strength::Quaternary),
                        "identic" => Some(Strength::Identical),
                        _ => {
                            log::warn!("Unknown strength value: {}, using default", value);
                            None
                        }
                    };
                }
                "ka" => {
                    options.alternate_handling = match value.as_str() {
                        "shifted" => Some(AlternateHandling::Shifted),
                        "noignore" | "non-ignorable" => Some(AlternateHandling::NonIgnorable),
                        _ => {
                            log::warn!("Unknown alternate handling value: {}, using default", value);
                            None
                        }
                    };
                }
                "kc" => {
                    options.case_level = match value.as_str() {
                        "true" | "yes" | "on" => Some(CaseLevel::On),
                        "false" | "no" | "off" => Some(CaseLevel::Off),
                        _ => {
                            log::warn!("Unknown case level value: {}, using default", value);
                            None
                        }
                    };
                }
                "co" | "kf" | "kn" | "kb" => {
                    log::debug!("Extension '{}={}' is handled by CollatorPreferences", key.as_str(), value);
                }
                other => {
                    log::warn!("Unicode extension '{}' is not supported, will be ignored", other);
                }
            }
        }
        options
    }

    impl UCollator {
        /// Creates a collator for the specified BCP-47 locale string.
        ///
        /// An empty string selects the root collation.
        ///
        /// ```ignore
        /// let latin = UCollator::try_from("la")?;
        /// let case_blind = UCollator::try_from("en-u-ks-level1")?;
        /// ```
        pub fn try_from(locale_str: &str) -> Result<Self> {
            log::info!("Creating collator for locale: {}", locale_str);
            let (prefs, options) = if locale_str.is_empty() {
                (CollatorPreferences::default(), CollatorOptions::default())
            } else {
                let locale: Locale = locale_str.parse().map_err(|e| {
                    log::error!("Failed to parse locale '{}': {:?}", locale_str, e);
                    IcuError::new(format!("Invalid BCP-47 locale string '{}': {}", locale_str, e))
                })?;
                log::debug!("Parsed locale: {:?}", locale);
                (CollatorPreferences::from(&locale), options_from_locale(&locale))
            };

            let collator = Collator::try_new(prefs, options).map_err(|e| {
                log::error!("Failed to create collator: {:?}", e);
                IcuError::new(format!("Failed to create collator for '{}': {}", locale_str, e))
            })?;

            Ok(Self {
                collator,
                locale_str: locale_str.to_string(),
            })
        }

        /// Compare two UTF-8 strings according to the collation rules
        pub fn strcoll_utf8(&self, left: &str, right: &str) -> Result<Ordering> {
            Ok(self.collator.compare(left, right))
        }

        /// The locale string this collator was created from.
        pub fn locale(&self) -> &str {
            &self.locale_str
        }
    }

    /// Locale parsing or collator construction failure, carried by `LexiconError::IcuError`.
    #[derive(Debug)]
    pub struct IcuError {
        message: String,
    }

    impl IcuError {
        pub fn new<S: Into<String>>(message: S) -> Self {
            Self {
                message: message.into(),
            }
        }
    }

    impl std::fmt::Display for IcuError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "ICU error: {}", self.message)
        }
    }

    impl std::error::Error for IcuError {}

}

#[cfg(feature = "rust-icu")]
pub use rust_icu_impl::{UCollator, IcuError};

#[cfg(feature = "icu")]
pub use icu_impl::{UCollator, IcuError};

impl UCollator {
    /// Infallible comparison used for sorting headwords.
    ///
    /// Falls back to code-point order if the backend reports an error.
    pub fn compare(&self, left: &str, right: &str) -> Ordering {
        match self.strcoll_utf8(left, right) {
            Ok(ordering) => ordering,
            Err(e) => {
                log::warn!("Collation of '{}' and '{}' failed, using code-point order: {}", left, right, e);
                left.cmp(right)
            }
        }
    }
}

// Compile-time check to ensure exactly one ICU implementation is selected
#[cfg(all(feature = "rust-icu", feature = "icu"))]
compile_error!("Cannot enable both 'rust-icu' and 'icu' features at the same time");

#[cfg(not(any(feature = "rust-icu", feature = "icu")))]
compile_error!("Must enable either 'rust-icu' or 'icu' feature");
