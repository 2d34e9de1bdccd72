// crates/tool-atlas-views/src/page.rs
// ============================================================================
// Module: Page State
// Description: Query-string parsing and link building for rendered pages.
// Purpose: Carry selection and expansion state through plain GET links.
// Dependencies: tool-atlas-core, tool-atlas-config, url
// ============================================================================

//! ## Overview
//! Pages hold no server-side session. Everything a user has chosen (design,
//! language, filters, expanded items) lives in the query string, and every
//! interactive control is a link to the next state. [`PageQuery`] is the raw
//! parameter bag; [`PageState`] is the resolved, variant-masked state.
//!
//! ## Invariants
//! - Resolution never fails; absent or unknown values fall back or select
//!   nothing.
//! - Axes a variant does not expose are always inactive for that variant.
//! - [`PageState::to_query`] omits defaults, so the initial page is `/`.

// ============================================================================
// SECTION: Imports
// ============================================================================

use tool_atlas_config::DisplayConfig;
use tool_atlas_core::AxisFilter;
use tool_atlas_core::Category;
use tool_atlas_core::ExpansionState;
use tool_atlas_core::FocusState;
use tool_atlas_core::Level;
use tool_atlas_core::Locale;
use tool_atlas_core::SectionExpansion;
use tool_atlas_core::Selection;
use tool_atlas_core::TierFilter;
use tool_atlas_core::ToolId;
use tool_atlas_core::ViewVariant;
use url::form_urlencoded;

use crate::variant::CategoryControl;
use crate::variant::TierControl;
use crate::variant::capabilities;

// ============================================================================
// SECTION: Raw Query
// ============================================================================

/// Raw page parameters as received.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageQuery {
    /// Design variant key.
    pub design: Option<String>,
    /// Locale tag.
    pub lang: Option<String>,
    /// Category key.
    pub category: Option<String>,
    /// Tier key or `untiered`.
    pub tier: Option<String>,
    /// Level key.
    pub level: Option<String>,
    /// Search text.
    pub q: Option<String>,
    /// Comma-separated expanded tool ids.
    pub open: Option<String>,
    /// Focused tool id.
    pub focus: Option<String>,
    /// Comma-separated expanded categories; present but empty means none.
    pub sections: Option<String>,
    /// `list` or `grid`.
    pub layout: Option<String>,
}

impl PageQuery {
    /// Parses an `application/x-www-form-urlencoded` query string.
    ///
    /// Unknown parameters are ignored; repeated parameters keep the last value.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let mut query = Self::default();
        for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
            let value = Some(value.into_owned());
            match key.as_ref() {
                "design" => query.design = value,
                "lang" => query.lang = value,
                "category" => query.category = value,
                "tier" => query.tier = value,
                "level" => query.level = value,
                "q" => query.q = value,
                "open" => query.open = value,
                "focus" => query.focus = value,
                "sections" => query.sections = value,
                "layout" => query.layout = value,
                _ => {}
            }
        }
        query
    }

    /// Returns the filters as given, without masking to any variant.
    #[must_use]
    pub fn selection(&self) -> Selection {
        Selection {
            category: AxisFilter::from_param(self.category.as_deref(), Category::parse),
            tier: TierFilter::from_param(self.tier.as_deref()),
            level: AxisFilter::from_param(self.level.as_deref(), Level::parse),
            query: self.q.clone().unwrap_or_default(),
        }
    }
}

// ============================================================================
// SECTION: Resolved State
// ============================================================================

/// List/grid presentation for variants that offer the switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListLayout {
    /// One item per line.
    #[default]
    List,
    /// Card grid.
    Grid,
}

impl ListLayout {
    /// Returns the query value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Grid => "grid",
        }
    }
}

/// Fully resolved page state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    /// Active design variant.
    pub variant: ViewVariant,
    /// Active locale.
    pub locale: Locale,
    /// Active filters, masked to the variant's controls.
    pub selection: Selection,
    /// Independently expanded items.
    pub expanded: ExpansionState,
    /// Focused item for single-focus variants.
    pub focus: FocusState,
    /// Expanded sections for grouped variants.
    pub sections: SectionExpansion,
    /// List/grid choice.
    pub list_layout: ListLayout,
}

impl PageState {
    /// Creates the initial state for a variant and locale.
    #[must_use]
    pub fn initial(variant: ViewVariant, locale: Locale) -> Self {
        let mut state = Self {
            variant,
            locale,
            selection: Selection::default(),
            expanded: ExpansionState::default(),
            focus: FocusState::default(),
            sections: SectionExpansion::default(),
            list_layout: ListLayout::default(),
        };
        state.mask_to_variant();
        state
    }

    /// Resolves raw parameters against configured defaults.
    #[must_use]
    pub fn resolve(query: &PageQuery, display: &DisplayConfig) -> Self {
        let variant =
            query.design.as_deref().and_then(ViewVariant::parse).unwrap_or(display.default_design);
        let locale = query.lang.as_deref().and_then(Locale::parse).unwrap_or(display.default_locale);
        let selection = query.selection();
        let expanded = query
            .open
            .as_deref()
            .map(|open| ExpansionState::from_ids(split_list(open)))
            .unwrap_or_default();
        let focus = query
            .focus
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(|id| FocusState::focused_on(ToolId::new(id)))
            .unwrap_or_default();
        let sections = query.sections.as_deref().map_or_else(SectionExpansion::all_expanded, |raw| {
            SectionExpansion::from_categories(split_list(raw).filter_map(Category::parse))
        });
        let list_layout = match query.layout.as_deref().map(str::trim) {
            Some(value) if value.eq_ignore_ascii_case("grid") => ListLayout::Grid,
            _ => ListLayout::List,
        };
        let mut state = Self {
            variant,
            locale,
            selection,
            expanded,
            focus,
            sections,
            list_layout,
        };
        state.mask_to_variant();
        state
    }

    /// Clears axes the variant does not expose and applies tab defaults.
    fn mask_to_variant(&mut self) {
        let caps = capabilities(self.variant);
        match caps.category {
            CategoryControl::Hidden => self.selection.category = AxisFilter::Any,
            CategoryControl::Tabs => {
                if self.selection.category == AxisFilter::Any {
                    self.selection.category = AxisFilter::Is(Category::ALL[0]);
                }
            }
            CategoryControl::Chips => {}
        }
        match caps.tier {
            TierControl::Hidden => self.selection.tier = TierFilter::Any,
            TierControl::Tiers => {
                if self.selection.tier == TierFilter::Untiered {
                    self.selection.tier = TierFilter::Unmatched;
                }
            }
            TierControl::TiersWithUntiered => {}
        }
        if !caps.level {
            self.selection.level = AxisFilter::Any;
        }
        if !caps.search {
            self.selection.query.clear();
        }
        if !caps.layout_switch {
            self.list_layout = ListLayout::List;
        }
    }

    // ------------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------------

    /// Returns the initial state of another variant in the same locale.
    #[must_use]
    pub fn with_variant(&self, variant: ViewVariant) -> Self {
        Self::initial(variant, self.locale)
    }

    /// Returns this state in another locale.
    #[must_use]
    pub fn with_locale(&self, locale: Locale) -> Self {
        Self {
            locale,
            ..self.clone()
        }
    }

    /// Returns this state with a new category filter.
    #[must_use]
    pub fn with_category(&self, category: AxisFilter<Category>) -> Self {
        let mut next = self.clone();
        next.selection.category = category;
        next
    }

    /// Returns this state with a new tier filter.
    #[must_use]
    pub fn with_tier(&self, tier: TierFilter) -> Self {
        let mut next = self.clone();
        next.selection.tier = tier;
        next
    }

    /// Returns this state with a new level filter.
    #[must_use]
    pub fn with_level(&self, level: AxisFilter<Level>) -> Self {
        let mut next = self.clone();
        next.selection.level = level;
        next
    }

    /// Returns this state with every filter cleared.
    #[must_use]
    pub fn cleared(&self) -> Self {
        let mut next = Self::initial(self.variant, self.locale);
        next.list_layout = self.list_layout;
        next
    }

    /// Returns this state with `id` toggled in the per-item expansion set.
    #[must_use]
    pub fn with_item_toggled(&self, id: &ToolId) -> Self {
        Self {
            expanded: self.expanded.with_toggled(id),
            ..self.clone()
        }
    }

    /// Returns this state with focus toggled on `id`.
    #[must_use]
    pub fn with_focus_toggled(&self, id: &ToolId) -> Self {
        Self {
            focus: self.focus.with_toggled(id),
            ..self.clone()
        }
    }

    /// Returns this state with one section toggled.
    #[must_use]
    pub fn with_section_toggled(&self, category: Category) -> Self {
        Self {
            sections: self.sections.with_toggled(category),
            ..self.clone()
        }
    }

    /// Returns this state with every section expanded or collapsed.
    #[must_use]
    pub fn with_all_sections(&self, expanded: bool) -> Self {
        let mut next = self.clone();
        if expanded {
            next.sections.expand_all();
        } else {
            next.sections.collapse_all();
        }
        next
    }

    /// Returns this state with another list/grid choice.
    #[must_use]
    pub fn with_list_layout(&self, list_layout: ListLayout) -> Self {
        Self {
            list_layout,
            ..self.clone()
        }
    }

    // ------------------------------------------------------------------------
    // Encoding
    // ------------------------------------------------------------------------

    /// Encodes the state as a query string, omitting defaults.
    #[must_use]
    pub fn to_query(&self, defaults: &DisplayConfig) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        if self.variant != defaults.default_design {
            serializer.append_pair("design", self.variant.as_str());
        }
        if self.locale != defaults.default_locale {
            serializer.append_pair("lang", self.locale.as_str());
        }
        let tab_default = capabilities(self.variant).category == CategoryControl::Tabs
            && self.selection.category == AxisFilter::Is(Category::ALL[0]);
        if let Some(category) = self.selection.category.selected()
            && !tab_default
        {
            serializer.append_pair("category", category.as_str());
        }
        if let Some(tier) = self.selection.tier.as_param() {
            serializer.append_pair("tier", tier);
        }
        if let Some(level) = self.selection.level.selected() {
            serializer.append_pair("level", level.as_str());
        }
        if !self.selection.query.is_empty() {
            serializer.append_pair("q", &self.selection.query);
        }
        if !self.expanded.is_empty() {
            let open: Vec<&str> = self.expanded.ids().map(ToolId::as_str).collect();
            serializer.append_pair("open", &open.join(","));
        }
        if let Some(focus) = self.focus.focused() {
            serializer.append_pair("focus", focus.as_str());
        }
        if !self.sections.is_all_expanded() {
            let sections: Vec<&str> = self.sections.categories().map(Category::as_str).collect();
            serializer.append_pair("sections", &sections.join(","));
        }
        if self.list_layout != ListLayout::default() {
            serializer.append_pair("layout", self.list_layout.as_str());
        }
        serializer.finish()
    }

    /// Returns the page link for this state.
    #[must_use]
    pub fn href(&self, defaults: &DisplayConfig) -> String {
        let query = self.to_query(defaults);
        if query.is_empty() { "/".to_string() } else { format!("/?{query}") }
    }
}

/// Splits a comma-separated list, dropping blanks.
fn split_list(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim).filter(|item| !item.is_empty())
}
