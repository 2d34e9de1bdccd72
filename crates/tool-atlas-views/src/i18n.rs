// crates/tool-atlas-views/src/i18n.rs
// ============================================================================
// Module: UI Dictionary
// Description: Per-locale interface strings for rendered pages.
// Purpose: Keep every user-visible page label in one translated catalog.
// Dependencies: tool-atlas-core
// ============================================================================

//! ## Overview
//! Page chrome (headings, filter labels, card sections, empty states) is
//! looked up by key in a per-locale catalog. Unlike the CLI, which picks one
//! locale per process, pages choose the locale per request, so every lookup
//! takes the locale explicitly. Use the [`ui!`](crate::ui) macro in
//! rendering code.
//!
//! ## Invariants
//! - Catalogs are built once and read-only thereafter.
//! - Missing keys fall back to English and then to the key itself.
//! - Every locale carries the same keys and placeholders as English.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::HashMap;
use std::sync::OnceLock;

use tool_atlas_core::Locale;

// ============================================================================
// SECTION: Types
// ============================================================================

/// A formatted message argument substituted into a `{placeholder}`.
#[derive(Clone)]
pub struct MessageArg {
    /// Placeholder name without braces (for example, `count`).
    pub key: &'static str,
    /// Preformatted replacement value.
    pub value: String,
}

impl MessageArg {
    /// Constructs a new [`MessageArg`] from a key and displayable value.
    pub fn new(key: &'static str, value: impl Into<String>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }
}

// ============================================================================
// SECTION: Catalog
// ============================================================================

/// English interface strings.
const CATALOG_EN: &[(&str, &str)] = &[
    ("header.title", "AI Tool Atlas"),
    ("header.subtitle", "A curated guide to the AI tools worth adopting, by purpose and skill level."),
    ("header.curated_by", "Curated by the automation team"),
    ("header.design", "Design"),
    ("header.language_switch", "Español"),
    ("filters.all", "All"),
    ("filters.category", "Category"),
    ("filters.recommendation", "Recommendation"),
    ("filters.level", "Level"),
    ("filters.search_placeholder", "Search tools..."),
    ("filters.search_submit", "Search"),
    ("filters.clear", "Clear filters"),
    ("filters.option_count", "{label} ({count})"),
    ("results.count", "{count} tools"),
    ("card.visit", "Visit site"),
    ("card.pricing", "Pricing"),
    ("card.use_cases", "Use cases"),
    ("card.why_its_good", "Why it's good"),
    ("card.departments", "Departments"),
    ("card.more_departments", "+{count}"),
    ("card.show_details", "Show details"),
    ("card.hide_details", "Hide details"),
    ("card.starting_at", "From {price}"),
    ("card.contact_pricing", "Contact for pricing"),
    ("table.tool", "Tool"),
    ("table.category", "Category"),
    ("table.level", "Level"),
    ("table.price", "Price"),
    ("detail.empty", "Select a tool to see its details."),
    ("detail.close", "Close"),
    ("sections.expand_all", "Expand all"),
    ("sections.collapse_all", "Collapse all"),
    ("sections.tool_count", "{count} tools"),
    ("layout.list", "List"),
    ("layout.grid", "Grid"),
    ("empty.no_tools", "No tools match these filters."),
];

/// Spanish interface strings.
const CATALOG_ES: &[(&str, &str)] = &[
    ("header.title", "Atlas de Herramientas IA"),
    ("header.subtitle", "Una guía seleccionada de las herramientas de IA que vale la pena adoptar, por propósito y nivel."),
    ("header.curated_by", "Seleccionado por el equipo de automatización"),
    ("header.design", "Diseño"),
    ("header.language_switch", "English"),
    ("filters.all", "Todas"),
    ("filters.category", "Categoría"),
    ("filters.recommendation", "Recomendación"),
    ("filters.level", "Nivel"),
    ("filters.search_placeholder", "Buscar herramientas..."),
    ("filters.search_submit", "Buscar"),
    ("filters.clear", "Limpiar filtros"),
    ("filters.option_count", "{label} ({count})"),
    ("results.count", "{count} herramientas"),
    ("card.visit", "Visitar sitio"),
    ("card.pricing", "Precios"),
    ("card.use_cases", "Casos de uso"),
    ("card.why_its_good", "Por qué es buena"),
    ("card.departments", "Departamentos"),
    ("card.more_departments", "+{count}"),
    ("card.show_details", "Ver detalles"),
    ("card.hide_details", "Ocultar detalles"),
    ("card.starting_at", "Desde {price}"),
    ("card.contact_pricing", "Consultar"),
    ("table.tool", "Herramienta"),
    ("table.category", "Categoría"),
    ("table.level", "Nivel"),
    ("table.price", "Precio"),
    ("detail.empty", "Selecciona una herramienta para ver sus detalles."),
    ("detail.close", "Cerrar"),
    ("sections.expand_all", "Expandir todo"),
    ("sections.collapse_all", "Contraer todo"),
    ("sections.tool_count", "{count} herramientas"),
    ("layout.list", "Lista"),
    ("layout.grid", "Cuadrícula"),
    ("empty.no_tools", "No hay herramientas que coincidan con estos filtros."),
];

/// Returns the raw catalog entries for `locale`.
#[must_use]
pub const fn catalog_entries_for(locale: Locale) -> &'static [(&'static str, &'static str)] {
    match locale {
        Locale::En => CATALOG_EN,
        Locale::Es => CATALOG_ES,
    }
}

/// Key-to-template lookup for one locale.
pub type MessageCatalog = HashMap<&'static str, &'static str>;

/// Returns the message catalog for `locale`.
#[must_use]
pub fn catalog_for(locale: Locale) -> &'static MessageCatalog {
    static CATALOG_EN_MAP: OnceLock<MessageCatalog> = OnceLock::new();
    static CATALOG_ES_MAP: OnceLock<MessageCatalog> = OnceLock::new();
    match locale {
        Locale::En => CATALOG_EN_MAP.get_or_init(|| CATALOG_EN.iter().copied().collect()),
        Locale::Es => CATALOG_ES_MAP.get_or_init(|| CATALOG_ES.iter().copied().collect()),
    }
}

// ============================================================================
// SECTION: Translation
// ============================================================================

/// Translates `key` for `locale` while substituting `args`.
#[must_use]
pub fn translate(locale: Locale, key: &str, args: Vec<MessageArg>) -> String {
    translate_from(catalog_for, locale, key, args)
}

/// Translates `key` against any per-locale catalog.
///
/// Looks in `catalogs(locale)`, then in English, then returns the key itself.
#[must_use]
pub fn translate_from(
    catalogs: fn(Locale) -> &'static MessageCatalog,
    locale: Locale,
    key: &str,
    args: Vec<MessageArg>,
) -> String {
    let template = catalogs(locale)
        .get(key)
        .copied()
        .or_else(|| catalogs(Locale::En).get(key).copied())
        .unwrap_or(key);
    if args.is_empty() {
        return template.to_string();
    }

    let mut result = template.to_string();
    for arg in args {
        let placeholder = format!("{{{}}}", arg.key);
        result = result.replace(&placeholder, &arg.value);
    }
    result
}

// ============================================================================
// SECTION: Macro
// ============================================================================

/// Formats an interface string for a locale from a key and named arguments.
///
/// ```ignore
/// let label = ui!(locale, "results.count", count = 3);
/// ```
#[macro_export]
macro_rules! ui {
    ($locale:expr, $key:literal $(, $name:ident = $value:expr )* $(,)?) => {{
        let args = ::std::vec![
            $(
                $crate::i18n::MessageArg::new(stringify!($name), $value.to_string()),
            )*
        ];
        $crate::i18n::translate($locale, $key, args)
    }};
}
