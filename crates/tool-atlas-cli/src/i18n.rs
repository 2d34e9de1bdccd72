// crates/tool-atlas-cli/src/i18n.rs
// ============================================================================
// Module: CLI Internationalization Helpers
// Description: Provides message catalog and translation utilities for the CLI.
// Purpose: Centralize user-facing strings so every command speaks both locales.
// Dependencies: tool-atlas-core (Locale), tool-atlas-views (translation)
// ============================================================================

//! ## Overview
//! The Tool Atlas CLI stores user-facing strings in a small translation
//! catalog. The locale is chosen once per process (from `--lang` or
//! `TOOL_ATLAS_LANG`) and all runtime output is routed through the
//! [`t!`](crate::t) macro.
//!
//! ## Invariants
//! - The catalog is initialized once and read-only thereafter.
//! - Missing keys fall back to English and then to the key itself.
//! - Placeholder substitutions preserve deterministic order.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::OnceLock;

pub use tool_atlas_core::Locale;
pub use tool_atlas_core::SUPPORTED_LOCALES;
pub use tool_atlas_views::i18n::MessageArg;
use tool_atlas_views::i18n::MessageCatalog;
use tool_atlas_views::i18n::translate_from;

// ============================================================================
// SECTION: Locale Selection
// ============================================================================

/// Global locale selection for CLI output.
static CURRENT_LOCALE: OnceLock<Locale> = OnceLock::new();

/// Sets the CLI locale. Only the first call wins.
pub fn set_locale(locale: Locale) {
    let _ = CURRENT_LOCALE.set(locale);
}

/// Returns the current CLI locale (defaults to English).
#[must_use]
pub fn current_locale() -> Locale {
    CURRENT_LOCALE.get().copied().unwrap_or(Locale::En)
}

// ============================================================================
// SECTION: Catalog
// ============================================================================

/// Static English catalog entries.
const CATALOG_EN: &[(&str, &str)] = &[
    ("main.version", "tool-atlas {version}"),
    ("i18n.lang.invalid_env", "Invalid value for {env}: {value}. Expected 'en' or 'es'."),
    ("output.stream.stdout", "stdout"),
    ("output.stream.stderr", "stderr"),
    ("output.stream.unknown", "output"),
    ("output.write_failed", "Failed to write to {stream}: {error}"),
    ("output.json_failed", "Failed to serialize output: {error}"),
    ("serve.config.load_failed", "Failed to load config: {error}"),
    ("serve.init_failed", "Failed to initialize server: {error}"),
    ("serve.failed", "Server failed: {error}"),
    ("serve.listening", "Serving Tool Atlas on http://{addr}"),
    ("serve.bind.allow_env_invalid", "Invalid value for {env}: {value}. Expected true or false."),
    ("serve.bind.parse_failed", "Invalid bind address {bind}: {error}"),
    (
        "serve.bind.non_loopback_opt_in",
        "Refusing to bind to non-loopback address {bind}. Pass --allow-non-loopback or set \
         {env}=1 to expose the catalog on the network.",
    ),
    (
        "serve.warn.network_exposed",
        "Warning: serving on non-loopback address {bind}; anyone who can reach it can read the \
         catalog.",
    ),
    ("config.load_failed", "Failed to load config: {error}"),
    ("config.validate.ok", "Config is valid."),
    ("catalog.load_failed", "Catalog is invalid: {error}"),
    ("catalog.read_failed", "Failed to read catalog at {path}: {error}"),
    (
        "catalog.read_too_large",
        "Refusing to read catalog at {path} because it is {size} bytes (limit {limit}).",
    ),
    ("catalog.validate.ok", "Catalog is valid: {count} tools."),
    ("design.unknown", "Unknown design '{value}'. Expected one of: {expected}."),
    ("tool.not_found", "Unknown tool: {id}"),
    ("list.summary", "{count} tools"),
    ("list.empty", "No tools match these filters."),
    ("show.category", "Category"),
    ("show.level", "Level"),
    ("show.tier", "Recommendation"),
    ("show.departments", "Departments"),
    ("show.pricing", "Pricing"),
    ("show.contact_pricing", "Contact for pricing"),
    ("show.use_cases", "Use cases"),
    ("show.highlights", "Why it's good"),
    ("show.url", "Website"),
    ("facets.total", "Total: {count} tools"),
    ("facets.categories", "Categories"),
    ("facets.tiers", "Recommendation tiers"),
    ("facets.levels", "Levels"),
    ("designs.default_marker", "(default)"),
    ("render.written", "Page written to {path}"),
    ("render.write_failed", "Failed to write page to {path}: {error}"),
];

/// Static Spanish catalog entries.
const CATALOG_ES: &[(&str, &str)] = &[
    ("main.version", "tool-atlas {version}"),
    ("i18n.lang.invalid_env", "Valor no válido para {env}: {value}. Se esperaba 'en' o 'es'."),
    ("output.stream.stdout", "salida estándar"),
    ("output.stream.stderr", "salida de errores"),
    ("output.stream.unknown", "salida"),
    ("output.write_failed", "No se pudo escribir en {stream}: {error}"),
    ("output.json_failed", "No se pudo serializar la salida: {error}"),
    ("serve.config.load_failed", "No se pudo cargar la configuración: {error}"),
    ("serve.init_failed", "No se pudo inicializar el servidor: {error}"),
    ("serve.failed", "El servidor falló: {error}"),
    ("serve.listening", "Tool Atlas disponible en http://{addr}"),
    (
        "serve.bind.allow_env_invalid",
        "Valor no válido para {env}: {value}. Se esperaba true o false.",
    ),
    ("serve.bind.parse_failed", "Dirección de escucha no válida {bind}: {error}"),
    (
        "serve.bind.non_loopback_opt_in",
        "Se rechaza escuchar en la dirección no local {bind}. Usa --allow-non-loopback o define \
         {env}=1 para exponer el catálogo en la red.",
    ),
    (
        "serve.warn.network_exposed",
        "Aviso: escuchando en la dirección no local {bind}; cualquiera que la alcance puede leer \
         el catálogo.",
    ),
    ("config.load_failed", "No se pudo cargar la configuración: {error}"),
    ("config.validate.ok", "La configuración es válida."),
    ("catalog.load_failed", "El catálogo no es válido: {error}"),
    ("catalog.read_failed", "No se pudo leer el catálogo en {path}: {error}"),
    (
        "catalog.read_too_large",
        "Se rechaza leer el catálogo en {path} porque ocupa {size} bytes (límite {limit}).",
    ),
    ("catalog.validate.ok", "El catálogo es válido: {count} herramientas."),
    ("design.unknown", "Diseño desconocido '{value}'. Se esperaba uno de: {expected}."),
    ("tool.not_found", "Herramienta desconocida: {id}"),
    ("list.summary", "{count} herramientas"),
    ("list.empty", "No hay herramientas que coincidan con estos filtros."),
    ("show.category", "Categoría"),
    ("show.level", "Nivel"),
    ("show.tier", "Recomendación"),
    ("show.departments", "Departamentos"),
    ("show.pricing", "Precios"),
    ("show.contact_pricing", "Consultar"),
    ("show.use_cases", "Casos de uso"),
    ("show.highlights", "Por qué es buena"),
    ("show.url", "Sitio web"),
    ("facets.total", "Total: {count} herramientas"),
    ("facets.categories", "Categorías"),
    ("facets.tiers", "Niveles de recomendación"),
    ("facets.levels", "Niveles"),
    ("designs.default_marker", "(predeterminado)"),
    ("render.written", "Página escrita en {path}"),
    ("render.write_failed", "No se pudo escribir la página en {path}: {error}"),
];

/// Returns the raw catalog entries for `locale`.
#[must_use]
pub const fn catalog_entries_for(locale: Locale) -> &'static [(&'static str, &'static str)] {
    match locale {
        Locale::En => CATALOG_EN,
        Locale::Es => CATALOG_ES,
    }
}

/// Returns the message catalog for the requested locale.
pub(crate) fn catalog_for(locale: Locale) -> &'static MessageCatalog {
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

/// Translates `key` using the selected locale while substituting `args`.
#[must_use]
pub fn translate(key: &str, args: Vec<MessageArg>) -> String {
    translate_from(catalog_for, current_locale(), key, args)
}

// ============================================================================
// SECTION: Macro
// ============================================================================

/// Formats a localized message from a key and named arguments.
///
/// # Arguments
///
/// - `$key` must match a catalog entry.
/// - Named arguments are substituted into `{placeholder}` positions.
#[macro_export]
macro_rules! t {
    ($key:literal $(, $name:ident = $value:expr )* $(,)?) => {{
        let args = ::std::vec![
            $(
                $crate::i18n::MessageArg::new(stringify!($name), $value.to_string()),
            )*
        ];
        $crate::i18n::translate($key, args)
    }};
}
