use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use finclusion_cli::report::{ModelReport, schema_rows};
use finclusion_model::{ClassLabel, FeatureVector, PredictionResult};

pub fn print_features(features: &FeatureVector) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Feature"), header_cell("Value")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (name, value) in features.iter() {
        let value_cell = if value == 0 {
            dim_cell(value)
        } else {
            Cell::new(value).add_attribute(Attribute::Bold)
        };
        table.add_row(vec![Cell::new(name), value_cell]);
    }
    println!("Input Data");
    println!("{table}");
}

pub fn print_prediction(result: &PredictionResult) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Class"),
        header_cell("Meaning"),
        header_cell("Probability"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Center);
    align_column(&mut table, 2, CellAlignment::Right);
    for label in [ClassLabel::NoAccount, ClassLabel::HasAccount] {
        let meaning = match label {
            ClassLabel::NoAccount => "no bank account",
            ClassLabel::HasAccount => "has bank account",
        };
        let probability = format!("{:.2}%", result.probabilities.of(label) * 100.0);
        let mut row = vec![Cell::new(label), Cell::new(meaning), Cell::new(probability)];
        if label == result.label {
            row = row
                .into_iter()
                .map(|cell| cell.add_attribute(Attribute::Bold))
                .collect();
        }
        table.add_row(row);
    }
    println!();
    println!("{table}");
    let color = match result.label {
        ClassLabel::HasAccount => Color::Green,
        ClassLabel::NoAccount => Color::Red,
    };
    let mut verdict = Table::new();
    verdict
        .load_preset(comfy_table::presets::NOTHING)
        .add_row(vec![
            Cell::new(result.verdict())
                .fg(color)
                .add_attribute(Attribute::Bold),
        ]);
    println!("{verdict}");
}

pub fn print_schema() {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Feature"),
        header_cell("Encoding"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for row in schema_rows() {
        table.add_row(vec![
            dim_cell(row.position),
            Cell::new(row.name),
            Cell::new(row.rule),
        ]);
    }
    println!("{table}");
}

pub fn print_model(report: &ModelReport) {
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.add_row(vec![header_cell("Path"), Cell::new(report.path.display())]);
    table.add_row(vec![header_cell("SHA-256"), Cell::new(&report.sha256)]);
    table.add_row(vec![header_cell("Estimator"), Cell::new(&report.estimator)]);
    table.add_row(vec![
        header_cell("Description"),
        match &report.description {
            Some(text) => Cell::new(text),
            None => dim_cell("-"),
        },
    ]);
    table.add_row(vec![
        header_cell("Features"),
        Cell::new(report.feature_count),
    ]);
    let schema_cell = match &report.mismatch {
        None => Cell::new("✓ matches encoder")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        Some(mismatch) => Cell::new(mismatch).fg(Color::Red).add_attribute(Attribute::Bold),
    };
    table.add_row(vec![header_cell("Schema"), schema_cell]);
    println!("{table}");
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
