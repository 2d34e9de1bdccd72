// crates/tool-atlas-views/src/render.rs
// ============================================================================
// Module: HTML Renderer
// Description: Server-side HTML for every design variant.
// Purpose: One renderer driven by variant capabilities and theme.
// Dependencies: tool-atlas-core, tool-atlas-config
// ============================================================================

//! ## Overview
//! [`render_page`] turns a [`PageModel`] into a complete HTML document. The
//! page chrome (header, design switcher, language toggle, filter bar) is
//! shared; the result area dispatches on [`Layout`]. Every interactive
//! control is a plain link to the next [`PageState`], so pages work without
//! client-side script.
//!
//! ## Invariants
//! - Every catalog string is HTML-escaped before output.
//! - External links open in a new tab with `rel="noopener noreferrer"`.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt::Write;

use tool_atlas_config::DisplayConfig;
use tool_atlas_core::AxisFilter;
use tool_atlas_core::Category;
use tool_atlas_core::Level;
use tool_atlas_core::Locale;
use tool_atlas_core::Tier;
use tool_atlas_core::TierFilter;
use tool_atlas_core::Tool;
use tool_atlas_core::ViewVariant;
use tool_atlas_core::core::labels::category_label;
use tool_atlas_core::core::labels::department_label;
use tool_atlas_core::core::labels::level_label;
use tool_atlas_core::core::labels::tier_description;
use tool_atlas_core::core::labels::tier_label;
use tool_atlas_core::core::labels::untiered_label;
use url::form_urlencoded;

use crate::model::PageModel;
use crate::page::ListLayout;
use crate::page::PageState;
use crate::ui;
use crate::variant::CategoryControl;
use crate::variant::Layout;
use crate::variant::TierControl;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Departments shown on a card before the "+N" marker.
const DEPARTMENT_PREVIEW_LIMIT: usize = 3;

/// Shared stylesheet; variants differ through body and card classes.
const STYLESHEET: &str = "\
body{margin:0;font-family:system-ui,sans-serif;line-height:1.5}\
.scheme-light{background:#fafafa;color:#1f2933}\
.scheme-dark{background:#0f1115;color:#e6e8eb}\
.scheme-contrast{background:#fff;color:#000}\
.scheme-vivid{background:#fdf4ff;color:#2e1065}\
header,main{max-width:72rem;margin:0 auto;padding:1rem}\
nav a,.chip{display:inline-block;margin:0 .25rem .25rem 0;padding:.15rem .6rem;color:inherit}\
a.active{font-weight:700;text-decoration:underline}\
.cards{display:grid;grid-template-columns:repeat(auto-fill,minmax(18rem,1fr));gap:1rem}\
.tiles{display:grid;grid-template-columns:repeat(auto-fill,minmax(12rem,1fr));gap:.75rem}\
.tile-focused{grid-column:span 2}\
.card-outlined{border:1px solid #d0d5dd;border-radius:.5rem;padding:1rem}\
.card-elevated{border-radius:1rem;padding:1rem;box-shadow:0 4px 16px rgba(0,0,0,.08)}\
.card-blocky{border:3px solid #000;padding:1rem;box-shadow:6px 6px 0 #000}\
.card-gradient{border-radius:1rem;padding:1rem;background:linear-gradient(135deg,#f0abfc,#93c5fd)}\
.card-bare{padding:.5rem 0;border-bottom:1px solid rgba(127,127,127,.25)}\
.badge-pill{border-radius:999px;padding:0 .5rem;border:1px solid currentColor;font-size:.8rem}\
.badge-tag{padding:0 .4rem;background:rgba(127,127,127,.15);font-size:.8rem}\
.badge-text{font-size:.8rem;opacity:.75}\
.master-detail{display:grid;grid-template-columns:1fr 1fr;gap:1rem}\
table{width:100%;border-collapse:collapse}td,th{text-align:left;padding:.4rem}\
.empty-state{padding:2rem;text-align:center;opacity:.8}";

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// Renders a complete HTML document for `model`.
#[must_use]
pub fn render_page(model: &PageModel<'_>, defaults: &DisplayConfig) -> String {
    let locale = model.state.locale;
    let mut out = String::with_capacity(16 * 1024);
    out.push_str("<!doctype html>");
    let _ = write!(out, "<html lang=\"{}\">", locale.as_str());
    out.push_str("<head><meta charset=\"utf-8\">");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width,initial-scale=1\">");
    let _ = write!(
        out,
        "<title>{} | {}</title>",
        escape(&ui!(locale, "header.title")),
        escape(model.state.variant.display_name())
    );
    let _ = write!(out, "<style>{STYLESHEET}</style></head>");
    let _ = write!(
        out,
        "<body class=\"scheme-{} variant-{}\">",
        model.theme.scheme.as_str(),
        model.state.variant.as_str()
    );
    render_header(&mut out, &model.state, defaults);
    out.push_str("<main>");
    render_filters(&mut out, model, defaults);
    let _ = write!(
        out,
        "<p class=\"result-count\">{}</p>",
        escape(&ui!(locale, "results.count", count = model.tools.len()))
    );
    if model.is_empty() {
        render_empty_state(&mut out, &model.state, defaults);
    } else {
        render_results(&mut out, model, defaults);
    }
    out.push_str("</main></body></html>");
    out
}

// ============================================================================
// SECTION: Chrome
// ============================================================================

/// Renders the title, design switcher, and language toggle.
fn render_header(out: &mut String, state: &PageState, defaults: &DisplayConfig) {
    let locale = state.locale;
    out.push_str("<header class=\"site-header\">");
    let _ = write!(out, "<h1>{}</h1>", escape(&ui!(locale, "header.title")));
    let _ = write!(out, "<p class=\"subtitle\">{}</p>", escape(&ui!(locale, "header.subtitle")));
    let _ = write!(
        out,
        "<p class=\"curated-by\">{}</p>",
        escape(&ui!(locale, "header.curated_by"))
    );
    let _ = write!(
        out,
        "<nav class=\"design-switcher\" aria-label=\"{}\">",
        escape(&ui!(locale, "header.design"))
    );
    for variant in ViewVariant::ALL {
        out.push_str(&link(
            &state.with_variant(variant).href(defaults),
            "design-option",
            variant.display_name(),
            variant == state.variant,
        ));
    }
    out.push_str("</nav>");
    let toggled = state.with_locale(locale.toggled());
    let _ = write!(
        out,
        "<a class=\"lang-toggle\" hreflang=\"{}\" href=\"{}\">{}</a>",
        locale.toggled().as_str(),
        escape(&toggled.href(defaults)),
        escape(&ui!(locale, "header.language_switch"))
    );
    out.push_str("</header>");
}

/// Renders the filter controls the variant exposes.
fn render_filters(out: &mut String, model: &PageModel<'_>, defaults: &DisplayConfig) {
    let state = &model.state;
    let locale = state.locale;
    let caps = &model.capabilities;
    out.push_str("<section class=\"filters\">");

    match caps.category {
        CategoryControl::Hidden => {}
        CategoryControl::Tabs => {
            let _ = write!(
                out,
                "<nav class=\"category-tabs\" aria-label=\"{}\">",
                escape(&ui!(locale, "filters.category"))
            );
            for category in Category::ALL {
                out.push_str(&link(
                    &state.with_category(AxisFilter::Is(category)).href(defaults),
                    "tab",
                    category_label(category, locale),
                    state.selection.category == AxisFilter::Is(category),
                ));
            }
            out.push_str("</nav>");
        }
        CategoryControl::Chips => {
            open_filter_group(out, "category", &ui!(locale, "filters.category"));
            out.push_str(&link(
                &state.with_category(AxisFilter::Any).href(defaults),
                "chip",
                &ui!(locale, "filters.all"),
                state.selection.category == AxisFilter::Any,
            ));
            for category in Category::ALL {
                let label = option_label(
                    locale,
                    category_label(category, locale),
                    caps.facet_counts.then(|| model.facets.category(category)),
                );
                out.push_str(&link(
                    &state.with_category(AxisFilter::Is(category)).href(defaults),
                    "chip",
                    &label,
                    state.selection.category == AxisFilter::Is(category),
                ));
            }
            out.push_str("</div>");
        }
    }

    if caps.tier != TierControl::Hidden {
        open_filter_group(out, "tier", &ui!(locale, "filters.recommendation"));
        out.push_str(&link(
            &state.with_tier(TierFilter::Any).href(defaults),
            "chip",
            &ui!(locale, "filters.all"),
            state.selection.tier == TierFilter::Any,
        ));
        for tier in Tier::ALL {
            let selected = state.selection.tier == TierFilter::Is(tier);
            if caps.facet_counts && model.facets.tier(tier) == 0 && !selected {
                continue;
            }
            let label = option_label(
                locale,
                tier_label(tier, locale),
                caps.facet_counts.then(|| model.facets.tier(tier)),
            );
            out.push_str(&link(
                &state.with_tier(TierFilter::Is(tier)).href(defaults),
                "chip",
                &label,
                selected,
            ));
        }
        let untiered_selected = state.selection.tier == TierFilter::Untiered;
        let untiered_shown =
            !caps.facet_counts || model.facets.untiered > 0 || untiered_selected;
        if caps.tier == TierControl::TiersWithUntiered && untiered_shown {
            let label = option_label(
                locale,
                untiered_label(locale),
                caps.facet_counts.then_some(model.facets.untiered),
            );
            out.push_str(&link(
                &state.with_tier(TierFilter::Untiered).href(defaults),
                "chip",
                &label,
                untiered_selected,
            ));
        }
        out.push_str("</div>");
    }

    if caps.level {
        open_filter_group(out, "level", &ui!(locale, "filters.level"));
        out.push_str(&link(
            &state.with_level(AxisFilter::Any).href(defaults),
            "chip",
            &ui!(locale, "filters.all"),
            state.selection.level == AxisFilter::Any,
        ));
        for level in Level::ALL {
            let label = option_label(
                locale,
                level_label(level, locale),
                caps.facet_counts.then(|| model.facets.level(level)),
            );
            out.push_str(&link(
                &state.with_level(AxisFilter::Is(level)).href(defaults),
                "chip",
                &label,
                state.selection.level == AxisFilter::Is(level),
            ));
        }
        out.push_str("</div>");
    }

    if caps.search {
        render_search_form(out, state, defaults);
    }

    if caps.layout_switch {
        out.push_str("<div class=\"layout-switch\">");
        let options = [
            (ListLayout::List, ui!(locale, "layout.list")),
            (ListLayout::Grid, ui!(locale, "layout.grid")),
        ];
        for (layout, label) in options {
            out.push_str(&link(
                &state.with_list_layout(layout).href(defaults),
                "chip",
                &label,
                state.list_layout == layout,
            ));
        }
        out.push_str("</div>");
    }

    if caps.layout == Layout::Sections {
        out.push_str("<div class=\"section-controls\">");
        out.push_str(&link(
            &state.with_all_sections(true).href(defaults),
            "expand-all",
            &ui!(locale, "sections.expand_all"),
            false,
        ));
        out.push_str(&link(
            &state.with_all_sections(false).href(defaults),
            "collapse-all",
            &ui!(locale, "sections.collapse_all"),
            false,
        ));
        out.push_str("</div>");
    }

    if has_clearable_filters(state) {
        out.push_str(&link(
            &state.cleared().href(defaults),
            "clear-filters",
            &ui!(locale, "filters.clear"),
            false,
        ));
    }
    out.push_str("</section>");
}

/// Renders the search form, carrying the rest of the state as hidden fields.
fn render_search_form(out: &mut String, state: &PageState, defaults: &DisplayConfig) {
    let locale = state.locale;
    let mut carried = state.clone();
    carried.selection.query.clear();
    out.push_str("<form class=\"search\" method=\"get\" action=\"/\" role=\"search\">");
    let encoded = carried.to_query(defaults);
    for (key, value) in form_urlencoded::parse(encoded.as_bytes()) {
        let _ = write!(
            out,
            "<input type=\"hidden\" name=\"{}\" value=\"{}\">",
            escape(&key),
            escape(&value)
        );
    }
    let _ = write!(
        out,
        "<input type=\"search\" name=\"q\" value=\"{}\" placeholder=\"{}\">",
        escape(&state.selection.query),
        escape(&ui!(locale, "filters.search_placeholder"))
    );
    let _ = write!(
        out,
        "<button type=\"submit\">{}</button></form>",
        escape(&ui!(locale, "filters.search_submit"))
    );
}

/// Renders the empty state shown when no tool passes the filters.
fn render_empty_state(out: &mut String, state: &PageState, defaults: &DisplayConfig) {
    let locale = state.locale;
    let _ = write!(
        out,
        "<div class=\"empty-state\"><p>{}</p>",
        escape(&ui!(locale, "empty.no_tools"))
    );
    if has_clearable_filters(state) {
        out.push_str(&link(
            &state.cleared().href(defaults),
            "clear-filters",
            &ui!(locale, "filters.clear"),
            false,
        ));
    }
    out.push_str("</div>");
}

// ============================================================================
// SECTION: Result Layouts
// ============================================================================

/// Dispatches the result area on the variant layout.
fn render_results(out: &mut String, model: &PageModel<'_>, defaults: &DisplayConfig) {
    match model.capabilities.layout {
        Layout::Cards => render_cards(out, model, &model.tools, defaults),
        Layout::Rows => {
            if model.state.list_layout == ListLayout::Grid {
                render_cards(out, model, &model.tools, defaults);
            } else {
                render_rows(out, model, &model.tools, defaults);
            }
        }
        Layout::Table => render_table(out, model, defaults),
        Layout::MasterDetail => render_master_detail(out, model, defaults),
        Layout::Tiles => render_tiles(out, model, defaults),
        Layout::Sections => render_sections(out, model, defaults),
    }
}

/// Card grid with per-item expansion.
fn render_cards(out: &mut String, model: &PageModel<'_>, tools: &[&Tool], defaults: &DisplayConfig) {
    let state = &model.state;
    let locale = state.locale;
    out.push_str("<div class=\"cards\">");
    for tool in tools {
        let expanded = state.expanded.is_expanded(tool.id.as_str());
        let _ = write!(
            out,
            "<article class=\"card card-{}\" id=\"tool-{}\">",
            model.theme.card.as_str(),
            escape(tool.id.as_str())
        );
        render_tool_heading(out, model, tool, "h3");
        let _ = write!(
            out,
            "<p class=\"summary\">{}</p>",
            escape(tool.short_description.text(locale))
        );
        let _ = write!(out, "<p class=\"price\">{}</p>", escape(&starting_price_text(tool, locale)));
        render_department_preview(out, tool, locale);
        render_item_toggle(out, state, tool, expanded, defaults);
        if expanded {
            render_tool_details(out, tool, locale);
        }
        out.push_str("</article>");
    }
    out.push_str("</div>");
}

/// Compact rows with per-item expansion.
fn render_rows(out: &mut String, model: &PageModel<'_>, tools: &[&Tool], defaults: &DisplayConfig) {
    let state = &model.state;
    let locale = state.locale;
    out.push_str("<ul class=\"rows\">");
    for tool in tools {
        let expanded = state.expanded.is_expanded(tool.id.as_str());
        let _ = write!(
            out,
            "<li class=\"row card-{}\" id=\"tool-{}\">",
            model.theme.card.as_str(),
            escape(tool.id.as_str())
        );
        render_tool_heading(out, model, tool, "strong");
        let _ = write!(
            out,
            " <span class=\"summary\">{}</span> <span class=\"price\">{}</span> ",
            escape(tool.short_description.text(locale)),
            escape(&starting_price_text(tool, locale))
        );
        render_item_toggle(out, state, tool, expanded, defaults);
        if expanded {
            render_tool_details(out, tool, locale);
        }
        out.push_str("</li>");
    }
    out.push_str("</ul>");
}

/// Table with a single expanded row.
fn render_table(out: &mut String, model: &PageModel<'_>, defaults: &DisplayConfig) {
    let state = &model.state;
    let locale = state.locale;
    out.push_str("<table class=\"tool-table\"><thead><tr>");
    let headings = [
        ui!(locale, "table.tool"),
        ui!(locale, "table.category"),
        ui!(locale, "table.level"),
        ui!(locale, "table.price"),
    ];
    for heading in headings {
        let _ = write!(out, "<th>{}</th>", escape(&heading));
    }
    out.push_str("</tr></thead><tbody>");
    for tool in &model.tools {
        let focused = state.focus.is_focused(tool.id.as_str());
        let _ = write!(
            out,
            "<tr id=\"tool-{}\"{}>",
            escape(tool.id.as_str()),
            if focused { " class=\"focused\"" } else { "" }
        );
        let _ = write!(
            out,
            "<td><a href=\"{}\" aria-expanded=\"{focused}\">{}</a></td>",
            escape(&state.with_focus_toggled(&tool.id).href(defaults)),
            escape(&tool.name)
        );
        let _ = write!(out, "<td>{}</td>", escape(category_label(tool.category, locale)));
        let _ = write!(out, "<td>{}</td>", escape(level_label(tool.level, locale)));
        let _ = write!(
            out,
            "<td>{}</td></tr>",
            escape(tool.price_range().as_deref().unwrap_or("-"))
        );
        if focused {
            out.push_str("<tr class=\"detail-row\"><td colspan=\"4\">");
            let _ = write!(
                out,
                "<p class=\"summary\">{}</p>",
                escape(tool.short_description.text(locale))
            );
            render_tool_details(out, tool, locale);
            out.push_str("</td></tr>");
        }
    }
    out.push_str("</tbody></table>");
}

/// List with a detail panel for the focused tool.
fn render_master_detail(out: &mut String, model: &PageModel<'_>, defaults: &DisplayConfig) {
    let state = &model.state;
    let locale = state.locale;
    out.push_str("<div class=\"master-detail\"><ul class=\"tool-list\">");
    for tool in &model.tools {
        let focused = state.focus.is_focused(tool.id.as_str());
        let _ = write!(
            out,
            "<li class=\"card-{}{}\"><a href=\"{}\">{}</a> ",
            model.theme.card.as_str(),
            if focused { " focused" } else { "" },
            escape(&state.with_focus_toggled(&tool.id).href(defaults)),
            escape(&tool.name)
        );
        out.push_str(&badge(model, level_label(tool.level, locale), "level"));
        let _ = write!(
            out,
            "<p class=\"summary\">{}</p></li>",
            escape(tool.short_description.text(locale))
        );
    }
    out.push_str("</ul><aside class=\"detail-panel\">");
    let focused = state
        .focus
        .focused()
        .and_then(|id| model.tools.iter().find(|tool| tool.id == *id));
    match focused {
        Some(tool) => {
            render_tool_heading(out, model, tool, "h2");
            let _ = write!(
                out,
                "<p class=\"summary\">{}</p>",
                escape(tool.short_description.text(locale))
            );
            render_tool_details(out, tool, locale);
            out.push_str(&link(
                &state.with_focus_toggled(&tool.id).href(defaults),
                "close-detail",
                &ui!(locale, "detail.close"),
                false,
            ));
        }
        None => {
            let _ = write!(out, "<p>{}</p>", escape(&ui!(locale, "detail.empty")));
        }
    }
    out.push_str("</aside></div>");
}

/// Tile mosaic; the focused tile grows and shows details.
fn render_tiles(out: &mut String, model: &PageModel<'_>, defaults: &DisplayConfig) {
    let state = &model.state;
    let locale = state.locale;
    out.push_str("<div class=\"tiles\">");
    for tool in &model.tools {
        let focused = state.focus.is_focused(tool.id.as_str());
        let _ = write!(
            out,
            "<article class=\"tile card-{}{}\" id=\"tool-{}\">",
            model.theme.card.as_str(),
            if focused { " tile-focused" } else { "" },
            escape(tool.id.as_str())
        );
        render_tool_heading(out, model, tool, "h3");
        let _ = write!(
            out,
            "<p class=\"summary\">{}</p>",
            escape(tool.short_description.text(locale))
        );
        let label = if focused {
            ui!(locale, "card.hide_details")
        } else {
            ui!(locale, "card.show_details")
        };
        let _ = write!(
            out,
            "<a class=\"toggle\" href=\"{}\" aria-expanded=\"{focused}\">{}</a>",
            escape(&state.with_focus_toggled(&tool.id).href(defaults)),
            escape(&label)
        );
        if focused {
            render_tool_details(out, tool, locale);
        }
        out.push_str("</article>");
    }
    out.push_str("</div>");
}

/// Collapsible category sections with per-item expansion inside.
fn render_sections(out: &mut String, model: &PageModel<'_>, defaults: &DisplayConfig) {
    let state = &model.state;
    let locale = state.locale;
    for group in &model.groups {
        let open = state.sections.is_expanded(group.category);
        let _ = write!(
            out,
            "<section class=\"category-section\" id=\"section-{}\">",
            group.category.as_str()
        );
        let _ = write!(
            out,
            "<h2><a href=\"{}\" aria-expanded=\"{open}\">{} {}</a> <span class=\"count\">{}</span></h2>",
            escape(&state.with_section_toggled(group.category).href(defaults)),
            if open { "&#9662;" } else { "&#9656;" },
            escape(category_label(group.category, locale)),
            escape(&ui!(locale, "sections.tool_count", count = group.tools.len()))
        );
        if open {
            render_rows(out, model, &group.tools, defaults);
        }
        out.push_str("</section>");
    }
}

// ============================================================================
// SECTION: Tool Fragments
// ============================================================================

/// Renders the tool name with category, tier, and level badges.
fn render_tool_heading(out: &mut String, model: &PageModel<'_>, tool: &Tool, tag: &str) {
    let locale = model.state.locale;
    let _ = write!(out, "<{tag} class=\"tool-name\">{}</{tag}> ", escape(&tool.name));
    out.push_str(&badge(model, category_label(tool.category, locale), "category"));
    match tool.tier {
        Some(tier) => {
            let _ = write!(
                out,
                "<span class=\"badge badge-{} tier-{}\" title=\"{}\">{}</span>",
                model.theme.badge.as_str(),
                tier.as_str(),
                escape(tier_description(tier, locale)),
                escape(tier_label(tier, locale))
            );
        }
        None if model.capabilities.tier == TierControl::TiersWithUntiered => {
            out.push_str(&badge(model, untiered_label(locale), "tier-untiered"));
        }
        None => {}
    }
    out.push_str(&badge(model, level_label(tool.level, locale), "level"));
}

/// Renders the first departments and the overflow marker.
fn render_department_preview(out: &mut String, tool: &Tool, locale: Locale) {
    let preview = tool.department_preview(DEPARTMENT_PREVIEW_LIMIT);
    if preview.shown.is_empty() {
        return;
    }
    let _ = write!(
        out,
        "<p class=\"departments\" aria-label=\"{}\">",
        escape(&ui!(locale, "card.departments"))
    );
    for department in preview.shown {
        let _ = write!(
            out,
            "<span class=\"department\">{}</span> ",
            escape(department_label(department, locale))
        );
    }
    if preview.hidden > 0 {
        let _ = write!(
            out,
            "<span class=\"department-more\">{}</span>",
            escape(&ui!(locale, "card.more_departments", count = preview.hidden))
        );
    }
    out.push_str("</p>");
}

/// Renders the show/hide link for per-item expansion.
fn render_item_toggle(
    out: &mut String,
    state: &PageState,
    tool: &Tool,
    expanded: bool,
    defaults: &DisplayConfig,
) {
    let locale = state.locale;
    let label =
        if expanded { ui!(locale, "card.hide_details") } else { ui!(locale, "card.show_details") };
    let _ = write!(
        out,
        "<a class=\"toggle\" href=\"{}#tool-{}\" aria-expanded=\"{expanded}\">{}</a>",
        escape(&state.with_item_toggled(&tool.id).href(defaults)),
        escape(tool.id.as_str()),
        escape(&label)
    );
}

/// Renders the expanded body: description, use cases, highlights, pricing, link.
fn render_tool_details(out: &mut String, tool: &Tool, locale: Locale) {
    out.push_str("<div class=\"details\">");
    let _ = write!(out, "<p class=\"description\">{}</p>", escape(tool.description.text(locale)));
    render_bullets(out, &ui!(locale, "card.use_cases"), tool.use_cases.items(locale));
    render_bullets(out, &ui!(locale, "card.why_its_good"), tool.highlights.items(locale));
    let _ = write!(out, "<h4>{}</h4>", escape(&ui!(locale, "card.pricing")));
    if tool.pricing.is_empty() {
        let _ = write!(
            out,
            "<p class=\"price\">{}</p>",
            escape(&ui!(locale, "card.contact_pricing"))
        );
    } else {
        out.push_str("<ul class=\"pricing\">");
        for plan in &tool.pricing {
            let _ = write!(
                out,
                "<li><strong>{}</strong> {} <span>{}</span></li>",
                escape(&plan.plan),
                escape(&plan.price),
                escape(plan.features.text(locale))
            );
        }
        out.push_str("</ul>");
    }
    let _ = write!(
        out,
        "<a class=\"visit\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
        escape(&tool.url),
        escape(&ui!(locale, "card.visit"))
    );
    out.push_str("</div>");
}

/// Renders a titled bullet list.
fn render_bullets(out: &mut String, title: &str, items: &[String]) {
    let _ = write!(out, "<h4>{}</h4><ul>", escape(title));
    for item in items {
        let _ = write!(out, "<li>{}</li>", escape(item));
    }
    out.push_str("</ul>");
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Escapes HTML special characters.
#[must_use]
pub fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Renders a navigation link, marking the active option.
fn link(href: &str, class: &str, label: &str, active: bool) -> String {
    let active_class = if active { " active" } else { "" };
    let current = if active { " aria-current=\"true\"" } else { "" };
    format!(
        "<a class=\"{class}{active_class}\" href=\"{}\"{current}>{}</a>",
        escape(href),
        escape(label)
    )
}

/// Renders a themed badge.
fn badge(model: &PageModel<'_>, label: &str, kind: &str) -> String {
    format!(
        "<span class=\"badge badge-{} {kind}\">{}</span> ",
        model.theme.badge.as_str(),
        escape(label)
    )
}

/// Opens a labelled filter group.
fn open_filter_group(out: &mut String, axis: &str, label: &str) {
    let _ = write!(
        out,
        "<div class=\"filter-group filter-{axis}\" role=\"group\" aria-label=\"{}\">",
        escape(label)
    );
}

/// Formats an option label with an optional facet count.
fn option_label(locale: Locale, label: &str, count: Option<usize>) -> String {
    match count {
        Some(count) => ui!(locale, "filters.option_count", label = label, count = count),
        None => label.to_string(),
    }
}

/// Returns the card price line: the first plan price or the contact text.
fn starting_price_text(tool: &Tool, locale: Locale) -> String {
    match tool.starting_price() {
        Some(price) => ui!(locale, "card.starting_at", price = price),
        None => ui!(locale, "card.contact_pricing"),
    }
}

/// Returns true when clearing would change the selection.
fn has_clearable_filters(state: &PageState) -> bool {
    state.selection != state.cleared().selection
}
