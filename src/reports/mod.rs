use crate::cmd::LoadedWallet;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use coinword::filter::ScoredWord;
use coinword::glyphs::fold_char;

fn right_align(table: &mut Table, columns: std::ops::RangeInclusive<usize>) {
    for i in columns {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

pub fn print_wallet(wallet: &LoadedWallet) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Letter").add_attribute(Attribute::Bold),
        Cell::new("Coin"),
        Cell::new("Count"),
        Cell::new("Unit"),
        Cell::new("Value").fg(Color::Cyan),
    ]);
    right_align(&mut table, 2..=4);

    for rec in &wallet.records {
        let letter = fold_char(rec.letter);
        let unit = wallet.catalog.value_of(letter).unwrap_or(0);
        table.add_row(vec![
            Cell::new(letter).add_attribute(Attribute::Bold),
            Cell::new(&rec.name),
            Cell::new(rec.count),
            Cell::new(unit),
            Cell::new(rec.total_value).fg(Color::Cyan),
        ]);
    }

    table.add_row(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        Cell::new(""),
        Cell::new(wallet.inventory.coin_count()),
        Cell::new(""),
        Cell::new(wallet.inventory.total_value(&wallet.catalog))
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
    ]);
    println!("\n{}", table);

    // Letters the catalog knows but the wallet has no coin for.
    let missing: String = wallet
        .catalog
        .letters()
        .iter()
        .filter(|&&l| wallet.inventory.count_of(&wallet.catalog, l) == 0)
        .collect();
    if !missing.is_empty() {
        println!("No coins for: {}", missing);
    }
}

pub fn print_results(words: &[ScoredWord], limit: usize) {
    if words.is_empty() {
        println!("\nNo word can be built from this wallet.");
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("#"),
        Cell::new("Word").add_attribute(Attribute::Bold),
        Cell::new("Language"),
        Cell::new("Value").fg(Color::Cyan),
    ]);
    right_align(&mut table, 3..=3);

    // Ranking is ascending, so the most valuable words are at the end.
    let skipped = words.len().saturating_sub(limit);
    if skipped > 0 {
        println!("\n... {} cheaper words not shown (see the CSV export).", skipped);
    }

    for (i, w) in words.iter().enumerate().skip(skipped) {
        table.add_row(vec![
            Cell::new(i),
            Cell::new(&w.word).add_attribute(Attribute::Bold),
            Cell::new(&*w.tag),
            Cell::new(w.value).fg(Color::Cyan),
        ]);
    }
    println!("\n{}", table);
}
