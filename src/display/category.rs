//! Category display formatting
//!
//! Formats the category catalog as a table and the goal groups as a tree.

use crate::models::{CategoryCatalog, GoalGroups};

/// Format the catalog as a table of ids, names, icons and budgets
pub fn format_catalog(catalog: &CategoryCatalog, symbol: &str) -> String {
    if catalog.is_empty() {
        return "No categories defined.".to_string();
    }

    let id_width = catalog
        .iter()
        .map(|c| c.id.as_str().len())
        .max()
        .unwrap_or(2)
        .max(2);
    let name_width = catalog
        .iter()
        .map(|c| c.display_name.chars().count())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:id_width$}  {:name_width$}  {:10}  {:>12}\n",
        "ID",
        "Name",
        "Icon",
        "Budget",
        id_width = id_width,
        name_width = name_width
    ));
    output.push_str(&"-".repeat(id_width + name_width + 28));
    output.push('\n');

    for category in catalog.iter() {
        output.push_str(&format!(
            "{:id_width$}  {:name_width$}  {:10}  {:>12}\n",
            category.id.as_str(),
            category.display_name,
            category.icon.to_string(),
            category.monthly_budget.format_with_symbol(symbol),
            id_width = id_width,
            name_width = name_width
        ));
    }

    output.push_str(&format!(
        "\nTotal monthly budget: {}\n",
        catalog.total_budget().format_with_symbol(symbol)
    ));

    output
}

/// Format goal groups as a tree of member categories with the group target
pub fn format_goal_groups(groups: &GoalGroups, catalog: &CategoryCatalog, symbol: &str) -> String {
    let mut output = String::new();

    for (i, group) in groups.iter().enumerate() {
        let primary = if i == 0 { " (primary)" } else { "" };
        output.push_str(&format!(
            "{}{} - target {}\n",
            group.label(catalog),
            primary,
            group.target(catalog).format_with_symbol(symbol)
        ));

        for (j, member) in group.members.iter().enumerate() {
            let prefix = if j == group.members.len() - 1 {
                "└── "
            } else {
                "├── "
            };
            let name = catalog
                .get(member)
                .map(|c| c.display_name.as_str())
                .unwrap_or(member.as_str());
            output.push_str(&format!("  {}{}\n", prefix, name));
        }
    }

    output
}
