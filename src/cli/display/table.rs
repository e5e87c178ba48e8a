//! Table builder wrapper around comfy-table for settings display.

use comfy_table::{presets, Cell, CellAlignment, ContentArrangement, Table};

/// Create a two-column settings table.
///
/// Uses the NOTHING preset (no borders) for a clean CLI aesthetic.
pub fn settings_table(rows: &[(&str, String)]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::NOTHING)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(
            ["SETTING", "VALUE"]
                .iter()
                .map(|h| Cell::new(h).set_alignment(CellAlignment::Left)),
        );
    for (setting, value) in rows {
        table.add_row(vec![Cell::new(setting), Cell::new(value)]);
    }
    table
}
