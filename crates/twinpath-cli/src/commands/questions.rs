//! The `twinpath questions` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use twinpath_core::model::Category;

use crate::commands::load_bank;

pub fn execute(bank_path: Option<PathBuf>, category: Option<String>) -> Result<()> {
    let bank = load_bank(bank_path.as_deref())?;

    let filter: Option<Category> = category
        .map(|c| c.parse().map_err(|e: String| anyhow::anyhow!("{e}")))
        .transpose()?;

    let mut table = Table::new();
    table.set_header(vec!["Id", "Category", "Kind", "Points", "Question"]);

    let mut shown = 0usize;
    for q in &bank.questions {
        if let Some(cat) = filter {
            if q.category != cat {
                continue;
            }
        }
        table.add_row(vec![
            Cell::new(&q.id),
            Cell::new(q.category.to_string()),
            Cell::new(q.kind.to_string()),
            Cell::new(
                q.points
                    .filter(|_| q.is_scored())
                    .map(|p| p.to_string())
                    .unwrap_or_else(|| "-".to_string()),
            ),
            Cell::new(&q.text),
        ]);
        shown += 1;
    }

    println!("Bank: {} ({} questions)", bank.name, bank.len());
    println!("{table}");
    if filter.is_some() {
        println!("{shown} question(s) shown");
    }

    Ok(())
}
