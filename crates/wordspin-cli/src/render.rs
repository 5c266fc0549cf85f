//! Text renderings of combinations and modes.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use wordspin_core::{OutputMode, Segment, combination_count};
use wordspin_model::MAX_WORDS;

/// One combination per line.
pub fn render_plain(combinations: &[String]) -> String {
    combinations.join("\n")
}

/// Pretty-printed JSON array.
pub fn render_json(combinations: &[String]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(combinations)
}

/// Numbered table with the word count of each combination.
pub fn render_table(combinations: &[String]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("#"), header_cell("Combination"), header_cell("Words")]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for (index, combination) in combinations.iter().enumerate() {
        table.add_row(vec![
            dim_cell(index + 1),
            Cell::new(combination),
            Cell::new(combination.split(' ').count()),
        ]);
    }
    table
}

/// Every output mode with its word requirement and worst-case size.
pub fn modes_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Mode"),
        header_cell("Min words"),
        header_cell("Arities"),
        header_cell(&format!("Max combinations ({MAX_WORDS} words)")),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for mode in OutputMode::ALL {
        let arities = mode.arities(MAX_WORDS);
        let arities = if arities.start() == arities.end() {
            arities.start().to_string()
        } else {
            format!("{}-{}", arities.start(), arities.end())
        };
        table.add_row(vec![
            Cell::new(mode.as_str())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(mode.min_words()),
            Cell::new(arities),
            Cell::new(combination_count(MAX_WORDS, mode)),
        ]);
    }
    table
}

/// Wheel layout with the winning segment highlighted.
pub fn segments_table(segments: &[Segment], winner: Option<usize>) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("#"), header_cell("Label"), header_cell("Degrees")]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for segment in segments {
        let range = format!("{:.1}-{:.1}", segment.start_degrees, segment.end_degrees);
        let label = if winner == Some(segment.index) {
            Cell::new(&segment.label)
                .fg(Color::Green)
                .add_attribute(Attribute::Bold)
        } else {
            Cell::new(&segment.label)
        };
        table.add_row(vec![dim_cell(segment.index), label, dim_cell(range)]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
