// crates/tool-atlas-core/tests/common/mod.rs
// ============================================================================
// Module: Catalog Test Fixtures
// Description: Builders for small in-memory tool records.
// ============================================================================

#![allow(dead_code, reason = "Each test binary uses a subset of the fixtures.")]

use tool_atlas_core::Category;
use tool_atlas_core::Level;
use tool_atlas_core::LocalizedList;
use tool_atlas_core::LocalizedText;
use tool_atlas_core::Tier;
use tool_atlas_core::Tool;
use tool_atlas_core::ToolId;

/// Builds a minimal valid tool.
pub fn tool(id: &str, category: Category, tier: Option<Tier>) -> Tool {
    tool_with(id, category, tier, Level::Beginner, &format!("{id} summary"))
}

/// Builds a minimal valid tool with an explicit level and summary.
pub fn tool_with(
    id: &str,
    category: Category,
    tier: Option<Tier>,
    level: Level,
    summary: &str,
) -> Tool {
    Tool {
        id: ToolId::new(id),
        name: id.to_uppercase(),
        short_description: LocalizedText::new(summary.to_string(), format!("{summary} (es)")),
        description: LocalizedText::new(format!("{id} description"), format!("{id} descripción")),
        category,
        level,
        tier,
        departments: Vec::new(),
        pricing: Vec::new(),
        use_cases: LocalizedList::new(vec!["use".to_string()], vec!["uso".to_string()]),
        highlights: LocalizedList::new(vec!["good".to_string()], vec!["bueno".to_string()]),
        url: format!("https://example.com/{id}"),
    }
}

/// Five-tool scenario: A(tier1,X) B(tier2,X) C(none,Y) D(tier1,Y) E(tier3,X).
pub fn scenario() -> Vec<Tool> {
    vec![
        tool("a", Category::Automation, Some(Tier::Tier1)),
        tool("b", Category::Automation, Some(Tier::Tier2)),
        tool("c", Category::Agents, None),
        tool("d", Category::Agents, Some(Tier::Tier1)),
        tool("e", Category::Automation, Some(Tier::Tier3)),
    ]
}

/// Returns the ids of a result in order.
pub fn ids(tools: &[&Tool]) -> Vec<String> {
    tools.iter().map(|tool| tool.id.as_str().to_string()).collect()
}
