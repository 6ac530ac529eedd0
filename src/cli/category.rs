//! Category CLI command
//!
//! Lists the category catalog and the goal groups built on it.

use crate::config::Settings;
use crate::display::category::{format_catalog, format_goal_groups};
use crate::error::KakeiboResult;
use crate::models::{CategoryCatalog, GoalGroups};

/// Handle the `categories` command
pub fn handle_categories_command(settings: &Settings) -> KakeiboResult<()> {
    let catalog = CategoryCatalog::default();
    let groups = GoalGroups::default();
    let symbol = &settings.currency_symbol;

    println!("Categories");
    println!("==========");
    print!("{}", format_catalog(&catalog, symbol));
    println!();
    println!("Goal Groups");
    println!("===========");
    print!("{}", format_goal_groups(&groups, &catalog, symbol));

    Ok(())
}
