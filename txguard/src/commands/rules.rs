// txguard/src/commands/rules.rs
//
// USE CASE: Show what runs, in which order.

use comfy_table::Table;
use txguard_core::RuleRegistry;

pub fn execute() -> anyhow::Result<()> {
    println!("{}", render(&RuleRegistry::standard()));
    Ok(())
}

fn render(registry: &RuleRegistry) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["#", "Rule", "Kind"]);
    for (idx, (kind, name)) in registry.describe().into_iter().enumerate() {
        table.add_row(vec![(idx + 1).to_string(), name.to_string(), kind.to_string()]);
    }
    table
}
