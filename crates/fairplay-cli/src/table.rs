//! ASCII rendering of the help outcome matrix.

use fairplay_core::{Outcome, RuleTable};

const CORNER_LABEL: &str = "v PC \\ User >";

/// Render the full n x n outcome table: rows = computer move, columns =
/// player move, cells from the player's perspective.
pub fn render(rules: &RuleTable) -> String {
    let names: Vec<&str> = rules.moves().iter().collect();
    let matrix = rules.outcome_matrix();

    // First column holds the corner label and the computer move names;
    // outcome cells are at most "Draw" wide but never narrower than a name.
    let mut widths = Vec::with_capacity(names.len() + 1);
    let head_width = names
        .iter()
        .map(|n| n.len())
        .max()
        .unwrap_or(0)
        .max(CORNER_LABEL.len());
    widths.push(head_width);
    for name in &names {
        widths.push(name.len().max(4));
    }

    let mut out = String::new();
    push_separator(&mut out, &widths);
    push_row(&mut out, &widths, CORNER_LABEL, &names);
    push_separator(&mut out, &widths);
    for (name, row) in names.iter().zip(&matrix) {
        let cells: Vec<&str> = row.iter().map(Outcome::as_str).collect();
        push_row(&mut out, &widths, name, &cells);
        push_separator(&mut out, &widths);
    }
    out
}

fn push_separator(out: &mut String, widths: &[usize]) {
    for w in widths {
        out.push('+');
        out.push_str(&"-".repeat(w + 2));
    }
    out.push_str("+\n");
}

fn push_row(out: &mut String, widths: &[usize], head: &str, cells: &[&str]) {
    out.push_str(&format!("| {head:<width$} ", width = widths[0]));
    for (cell, &w) in cells.iter().zip(&widths[1..]) {
        out.push_str(&format!("| {cell:<w$} "));
    }
    out.push_str("|\n");
}
