//! `rizz styles` - list the response styles.

use anyhow::Result;
use comfy_table::{presets, Cell, Color, ContentArrangement, Table};
use console::style;

use crate::http::handlers::styles::style_infos;

pub fn list_styles(json: bool) -> Result<()> {
    let styles = style_infos();

    if json {
        println!("{}", serde_json::to_string_pretty(&styles)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Style").fg(Color::White),
        Cell::new("What it asks for").fg(Color::White),
    ]);

    for info in &styles {
        let label = if info.default {
            Cell::new(format!("{} (default)", info.label)).fg(Color::Magenta)
        } else {
            Cell::new(info.label).fg(Color::Cyan)
        };
        table.add_row(vec![label, Cell::new(info.hint)]);
    }

    println!("{table}");
    println!(
        "  {}",
        style("Pick one with --style, e.g. rizz reply \"hey\" --style witty").dim()
    );

    Ok(())
}
