// crates/tool-atlas-core/src/runtime/expansion.rs
// ============================================================================
// Module: Expansion State
// Description: Expand/collapse state for cards, focus panels, and sections.
// Purpose: Replace per-layout toggle bookkeeping with three value types.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! - [`ExpansionState`]: any number of items expanded independently.
//! - [`FocusState`]: at most one item focused; focusing another replaces it.
//! - [`SectionExpansion`]: expanded categories for grouped layouts; all
//!   sections start expanded.
//!
//! State values are small and ordered so they can round-trip through query
//! strings. Each mutator has a `with_*` counterpart returning the next state,
//! which renderers use to build toggle links.
//!
//! ## Invariants
//! - Toggling the same key twice restores the previous state.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;

use crate::core::Category;
use crate::core::Tool;
use crate::core::ToolId;

// ============================================================================
// SECTION: Per-Item Expansion
// ============================================================================

/// Independent per-item expansion flags.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExpansionState {
    /// Expanded tool ids.
    expanded: BTreeSet<ToolId>,
}

impl ExpansionState {
    /// Creates a state with the given ids expanded.
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<ToolId>,
    {
        Self {
            expanded: ids.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns true when `id` is expanded.
    #[must_use]
    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    /// Flips the flag for `id`.
    pub fn toggle(&mut self, id: &ToolId) {
        if !self.expanded.remove(id.as_str()) {
            self.expanded.insert(id.clone());
        }
    }

    /// Marks `id` expanded.
    pub fn expand(&mut self, id: &ToolId) {
        self.expanded.insert(id.clone());
    }

    /// Marks `id` collapsed.
    pub fn collapse(&mut self, id: &ToolId) {
        self.expanded.remove(id.as_str());
    }

    /// Returns the state after toggling `id`.
    #[must_use]
    pub fn with_toggled(&self, id: &ToolId) -> Self {
        let mut next = self.clone();
        next.toggle(id);
        next
    }

    /// Drops flags for tools no longer visible.
    pub fn retain_visible(&mut self, visible: &[&Tool]) {
        self.expanded.retain(|id| visible.iter().any(|tool| tool.id == *id));
    }

    /// Iterates expanded ids in sorted order.
    pub fn ids(&self) -> impl Iterator<Item = &ToolId> {
        self.expanded.iter()
    }

    /// Returns true when nothing is expanded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }
}

// ============================================================================
// SECTION: Single Focus
// ============================================================================

/// Single-item accordion: at most one tool is focused.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FocusState {
    /// Focused tool id.
    focused: Option<ToolId>,
}

impl FocusState {
    /// Creates a state focused on `id`.
    #[must_use]
    pub fn focused_on(id: ToolId) -> Self {
        Self {
            focused: Some(id),
        }
    }

    /// Returns the focused id.
    #[must_use]
    pub const fn focused(&self) -> Option<&ToolId> {
        self.focused.as_ref()
    }

    /// Returns true when `id` is focused.
    #[must_use]
    pub fn is_focused(&self, id: &str) -> bool {
        self.focused.as_ref().is_some_and(|focused| focused.as_str() == id)
    }

    /// Focuses `id`, or clears focus when `id` already has it.
    pub fn toggle(&mut self, id: &ToolId) {
        if self.is_focused(id.as_str()) {
            self.focused = None;
        } else {
            self.focused = Some(id.clone());
        }
    }

    /// Clears focus.
    pub fn clear(&mut self) {
        self.focused = None;
    }

    /// Returns the state after toggling `id`.
    #[must_use]
    pub fn with_toggled(&self, id: &ToolId) -> Self {
        let mut next = self.clone();
        next.toggle(id);
        next
    }

    /// Clears focus when the focused tool is no longer visible.
    pub fn retain_visible(&mut self, visible: &[&Tool]) {
        if let Some(focused) = &self.focused
            && !visible.iter().any(|tool| tool.id == *focused)
        {
            self.focused = None;
        }
    }
}

// ============================================================================
// SECTION: Section Expansion
// ============================================================================

/// Expanded category sections for grouped layouts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionExpansion {
    /// Expanded categories.
    expanded: BTreeSet<Category>,
}

impl Default for SectionExpansion {
    fn default() -> Self {
        Self::all_expanded()
    }
}

impl SectionExpansion {
    /// Every section expanded.
    #[must_use]
    pub fn all_expanded() -> Self {
        Self {
            expanded: Category::ALL.into_iter().collect(),
        }
    }

    /// Every section collapsed.
    #[must_use]
    pub const fn all_collapsed() -> Self {
        Self {
            expanded: BTreeSet::new(),
        }
    }

    /// Creates a state with exactly `categories` expanded.
    pub fn from_categories(categories: impl IntoIterator<Item = Category>) -> Self {
        Self {
            expanded: categories.into_iter().collect(),
        }
    }

    /// Returns true when `category` is expanded.
    #[must_use]
    pub fn is_expanded(&self, category: Category) -> bool {
        self.expanded.contains(&category)
    }

    /// Flips one section.
    pub fn toggle(&mut self, category: Category) {
        if !self.expanded.remove(&category) {
            self.expanded.insert(category);
        }
    }

    /// Expands every section.
    pub fn expand_all(&mut self) {
        self.expanded.extend(Category::ALL);
    }

    /// Collapses every section.
    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }

    /// Returns the state after toggling `category`.
    #[must_use]
    pub fn with_toggled(&self, category: Category) -> Self {
        let mut next = self.clone();
        next.toggle(category);
        next
    }

    /// Returns true when every section is expanded.
    #[must_use]
    pub fn is_all_expanded(&self) -> bool {
        self.expanded.len() == Category::ALL.len()
    }

    /// Iterates expanded categories in display order.
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.expanded.iter().copied()
    }
}
