use comfy_table::Table;
use erodibility::{AffineMap, Bounds, RescaleSummary};

fn bounds_cell(bounds: Option<Bounds>) -> String {
    bounds.map_or_else(|| String::from("-"), |bounds| bounds.to_string())
}

pub fn summary_table(map: &AffineMap, summary: &RescaleSummary) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["", "value"]);

    table.add_row(vec![String::from("source range"), map.source().to_string()]);
    table.add_row(vec![String::from("target range"), map.target().to_string()]);
    table.add_row(vec![String::from("records"), summary.records.to_string()]);
    table.add_row(vec![String::from("rescaled"), summary.rescaled.to_string()]);
    table.add_row(vec![
        String::from("without erodibility"),
        summary.skipped.to_string(),
    ]);
    table.add_row(vec![String::from("observed before"), bounds_cell(summary.before)]);
    table.add_row(vec![String::from("observed after"), bounds_cell(summary.after)]);

    table
}
