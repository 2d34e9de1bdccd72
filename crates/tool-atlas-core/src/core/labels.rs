// crates/tool-atlas-core/src/core/labels.rs
// ============================================================================
// Module: Taxonomy Labels
// Description: Per-locale display labels for the closed taxonomy enumerations.
// Purpose: Make a missing label a compile error instead of a blank render.
// Dependencies: crate::core::{locale, taxonomy}
// ============================================================================

//! ## Overview
//! Lookup tables are exhaustive `match` expressions over
//! `(enumeration, locale)`. Adding a variant or a locale without a label
//! fails to compile.

use crate::core::locale::Locale;
use crate::core::taxonomy::Category;
use crate::core::taxonomy::Department;
use crate::core::taxonomy::Level;
use crate::core::taxonomy::Tier;

/// Returns the display label for a category.
#[must_use]
pub const fn category_label(category: Category, locale: Locale) -> &'static str {
    match (category, locale) {
        (Category::Automation, Locale::En) => "Automation",
        (Category::Automation, Locale::Es) => "Automatización",
        (Category::Agents, Locale::En) => "AI Agents",
        (Category::Agents, Locale::Es) => "Agentes IA",
        (Category::Knowledge, Locale::En) => "Knowledge & Research",
        (Category::Knowledge, Locale::Es) => "Conocimiento e Investigación",
        (Category::Creativity, Locale::En) => "Creativity",
        (Category::Creativity, Locale::Es) => "Creatividad",
        (Category::NoCode, Locale::En) => "No-Code",
        (Category::NoCode, Locale::Es) => "No-Code",
        (Category::Development, Locale::En) => "Development",
        (Category::Development, Locale::Es) => "Desarrollo",
    }
}

/// Returns the display label for a skill level.
#[must_use]
pub const fn level_label(level: Level, locale: Locale) -> &'static str {
    match (level, locale) {
        (Level::Beginner, Locale::En) => "Beginner",
        (Level::Beginner, Locale::Es) => "Principiante",
        (Level::Intermediate, Locale::En) => "Intermediate",
        (Level::Intermediate, Locale::Es) => "Intermedio",
        (Level::Advanced, Locale::En) => "Advanced",
        (Level::Advanced, Locale::Es) => "Avanzado",
    }
}

/// Returns the short badge label for a tier.
#[must_use]
pub const fn tier_label(tier: Tier, locale: Locale) -> &'static str {
    match (tier, locale) {
        (Tier::Tier1, Locale::En) => "Top Pick",
        (Tier::Tier1, Locale::Es) => "Recomendado",
        (Tier::Tier2, Locale::En) => "Great Alternative",
        (Tier::Tier2, Locale::Es) => "Gran Alternativa",
        (Tier::Tier3, Locale::En) => "Specialized",
        (Tier::Tier3, Locale::Es) => "Especializado",
    }
}

/// Returns the tooltip description for a tier.
#[must_use]
pub const fn tier_description(tier: Tier, locale: Locale) -> &'static str {
    match (tier, locale) {
        (Tier::Tier1, Locale::En) => "Our first recommendation for most teams.",
        (Tier::Tier1, Locale::Es) => "Nuestra primera recomendación para la mayoría de equipos.",
        (Tier::Tier2, Locale::En) => "A strong option when the top pick does not fit.",
        (Tier::Tier2, Locale::Es) => "Una opción sólida cuando la recomendada no encaja.",
        (Tier::Tier3, Locale::En) => "Worth it for specific needs or advanced users.",
        (Tier::Tier3, Locale::Es) => "Vale la pena para necesidades concretas o usuarios avanzados.",
    }
}

/// Returns the label shown for tools without a tier.
#[must_use]
pub const fn untiered_label(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "Unranked",
        Locale::Es => "Sin clasificar",
    }
}

/// Returns the display label for a department.
#[must_use]
pub const fn department_label(department: Department, locale: Locale) -> &'static str {
    match (department, locale) {
        (Department::Marketing, Locale::En) => "Marketing",
        (Department::Marketing, Locale::Es) => "Marketing",
        (Department::Sales, Locale::En) => "Sales",
        (Department::Sales, Locale::Es) => "Ventas",
        (Department::Operations, Locale::En) => "Operations",
        (Department::Operations, Locale::Es) => "Operaciones",
        (Department::People, Locale::En) => "People",
        (Department::People, Locale::Es) => "Personas",
        (Department::Finance, Locale::En) => "Finance",
        (Department::Finance, Locale::Es) => "Finanzas",
        (Department::Engineering, Locale::En) => "Engineering",
        (Department::Engineering, Locale::Es) => "Ingeniería",
        (Department::Support, Locale::En) => "Support",
        (Department::Support, Locale::Es) => "Soporte",
        (Department::Leadership, Locale::En) => "Leadership",
        (Department::Leadership, Locale::Es) => "Dirección",
    }
}
