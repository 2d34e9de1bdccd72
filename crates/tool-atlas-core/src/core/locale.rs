// crates/tool-atlas-core/src/core/locale.rs
// ============================================================================
// Module: Locales and Localized Values
// Description: Supported display locales and per-locale text containers.
// Purpose: Normalize every locale-bearing field into one required-key shape.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Every locale-bearing catalog field is stored as a mapping with one value
//! per supported [`Locale`]. The shape is fixed at the type level so callers
//! never branch on "plain string versus map"; emptiness is checked by the
//! catalog loader.
//!
//! ## Invariants
//! - [`Locale::En`] is the default and fallback locale.
//! - [`SUPPORTED_LOCALES`] ordering is stable for deterministic iteration.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Locale
// ============================================================================

/// Supported display locales.
///
/// # Invariants
/// - Variants are stable for query-string parsing and catalog lookup.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    /// English (default).
    #[default]
    En,
    /// Spanish.
    Es,
}

impl Locale {
    /// Returns the canonical locale label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
        }
    }

    /// Returns the other locale; used by the two-value language toggle.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::En => Self::Es,
            Self::Es => Self::En,
        }
    }

    /// Attempts to parse a locale value (case-insensitive, tolerant of region tags).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.is_empty() {
            return None;
        }
        let normalized = value.to_ascii_lowercase();
        let lang = normalized.split(['-', '_']).next().unwrap_or("");
        match lang {
            "en" => Some(Self::En),
            "es" => Some(Self::Es),
            _ => None,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered list of supported locales.
pub const SUPPORTED_LOCALES: &[Locale] = &[Locale::En, Locale::Es];

// ============================================================================
// SECTION: Localized Values
// ============================================================================

/// A value carried once per supported locale.
///
/// # Invariants
/// - Both locales are required at deserialization time; a missing key fails
///   the catalog load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Localized<T> {
    /// English value.
    pub en: T,
    /// Spanish value.
    pub es: T,
}

impl<T> Localized<T> {
    /// Creates a localized value from both locale entries.
    pub const fn new(en: T, es: T) -> Self {
        Self {
            en,
            es,
        }
    }

    /// Returns the value for `locale`.
    #[must_use]
    pub const fn get(&self, locale: Locale) -> &T {
        match locale {
            Locale::En => &self.en,
            Locale::Es => &self.es,
        }
    }

    /// Iterates `(locale, value)` pairs in [`SUPPORTED_LOCALES`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Locale, &T)> {
        SUPPORTED_LOCALES.iter().map(move |locale| (*locale, self.get(*locale)))
    }
}

/// Localized free text (descriptions, pricing features).
pub type LocalizedText = Localized<String>;

/// Localized ordered bullet list (use cases, highlights).
pub type LocalizedList = Localized<Vec<String>>;

impl LocalizedText {
    /// Returns the text for `locale` as a string slice.
    #[must_use]
    pub fn text(&self, locale: Locale) -> &str {
        self.get(locale)
    }
}

impl LocalizedList {
    /// Returns the items for `locale` as a slice.
    #[must_use]
    pub fn items(&self, locale: Locale) -> &[String] {
        self.get(locale)
    }
}
