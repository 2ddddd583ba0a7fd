//! Categories command - list expense categories and their keywords.

use clap::Args;
use console::style;

use kharcha_core::extract::category_rules;
use kharcha_core::models::Category;

/// Arguments for the categories command.
#[derive(Args)]
pub struct CategoriesArgs {
    /// Print category names only, one per line
    #[arg(long)]
    names_only: bool,
}

pub async fn run(args: CategoriesArgs) -> anyhow::Result<()> {
    if args.names_only {
        for category in Category::ALL {
            println!("{}", category);
        }
        return Ok(());
    }

    println!("{}", style("Expense Categories").bold());
    println!();

    for (category, keywords) in category_rules() {
        println!(
            "{}  {}",
            style(format!("▸ {}", category)).bold().cyan(),
            style(keywords.join(", ")).dim()
        );
    }
    println!(
        "{}  {}",
        style(format!("▸ {}", Category::Others)).bold().cyan(),
        style("assigned when no keyword matches").dim()
    );

    println!();
    println!("Categories are checked in order; the first keyword match wins.");

    Ok(())
}
