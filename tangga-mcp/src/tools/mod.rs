//! Tools exposed over MCP

mod helpers;
mod units;
mod quiz;

use crate::plugin::ToolRegistry;

/// Registry with every unit and quiz tool
pub fn standard_registry() -> ToolRegistry {
    ToolRegistry::new()
        // Unit table and conversion (5 tools)
        .with_tool(units::ListUnits)
        .with_tool(units::FactorOf)
        .with_tool(units::Convert)
        .with_tool(units::Compare)
        .with_tool(units::Ladder)

        // Quiz lifecycle (5 tools)
        .with_tool(quiz::QuizStart)
        .with_tool(quiz::QuizProblemTool)
        .with_tool(quiz::QuizAnswer)
        .with_tool(quiz::QuizNext)
        .with_tool(quiz::QuizEnd)
}
