use super::styles::{category_style, HEADER, LOW_STOCK, SCIENTIFIC, SELECTED};
use colored::Colorize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};
use verdefica::commands::{CmdMessage, MessageLevel};
use verdefica::compare::ComparisonTable;
use verdefica::index::DisplaySpecies;
use verdefica::model::{Condition, Species};
use verdefica::recommend::RegionSuggestion;
use verdefica::selection::Selection;

const NAME_WIDTH: usize = 22;
const SCI_WIDTH: usize = 28;
const CAT_WIDTH: usize = 11;
const SIZE_WIDTH: usize = 8;
const HEIGHT_WIDTH: usize = 8;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_species_list(listed: &[DisplaySpecies], selection: &Selection) {
    println!(
        "{}",
        HEADER.apply_to(format!("Espécies encontradas ({})", listed.len()))
    );
    if listed.is_empty() {
        return;
    }
    println!();

    for entry in listed {
        let sp = &entry.species;
        let marker = if selection.contains(&sp.id) {
            format!("{} ", SELECTED.apply_to("✓"))
        } else {
            "  ".to_string()
        };
        let index = format!("{:>2}. ", entry.index);
        let name = pad_to_width(&sp.name, NAME_WIDTH);
        let scientific = pad_to_width(&sp.scientific_name, SCI_WIDTH);
        let badge = pad_to_width(sp.category.label(), CAT_WIDTH);
        let size = pad_to_width(sp.size.label(), SIZE_WIDTH);
        let height = pad_to_width(&sp.height.to_string(), HEIGHT_WIDTH);
        let stock = if sp.low_stock {
            LOW_STOCK.apply_to(sp.stock_line()).to_string()
        } else {
            sp.stock_line()
        };

        println!(
            "{}{}{}{}{}{}{}{}",
            marker,
            index,
            name,
            SCIENTIFIC.apply_to(scientific),
            category_style(sp.category).apply_to(badge),
            size,
            height,
            stock
        );
    }
}

/// Ficha técnica, one card per species.
pub(super) fn print_cards(cards: &[Species]) {
    for (i, sp) in cards.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!(
            "{} {}",
            HEADER.apply_to(&sp.name),
            SCIENTIFIC.apply_to(format!("({})", sp.scientific_name))
        );
        println!("--------------------------------");
        println!(
            "Categoria:     {}",
            category_style(sp.category).apply_to(sp.category.label())
        );
        println!("Porte:         {} ({})", sp.size, sp.height);
        println!("Copa:          {}", sp.canopy);
        println!("Tipo de raiz:  {}", sp.root_type);
        println!("Sombreamento:  {}", sp.shade);
        println!("Manutenção:    {}", sp.maintenance_label());
        println!("Usos:          {}", join_uses(sp));
        let tolerances = tolerance_labels(sp);
        if !tolerances.is_empty() {
            println!("Tolerâncias:   {}", tolerances.join(", "));
        }
        if sp.low_stock {
            println!("Estoque:       {}", LOW_STOCK.apply_to(sp.stock_line()));
        } else {
            println!("Estoque:       {}", sp.stock_line());
        }
        println!("Imagem:        {}", sp.image_url.dimmed());
    }
}

pub(super) fn print_comparison(table: &ComparisonTable) {
    if table.is_empty() {
        return;
    }

    let attr_width = table
        .rows
        .iter()
        .map(|r| r.attribute.width())
        .max()
        .unwrap_or(0);

    let mut col_widths: Vec<usize> = table.names.iter().map(|n| n.width()).collect();
    for (i, sci) in table.scientific_names.iter().enumerate() {
        col_widths[i] = col_widths[i].max(sci.width());
    }
    for row in &table.rows {
        for (i, value) in row.values.iter().enumerate() {
            col_widths[i] = col_widths[i].max(value.width());
        }
    }

    // Header: common name over scientific name, one column per species.
    let mut line = pad_to_width("", attr_width + 2);
    for (i, name) in table.names.iter().enumerate() {
        line.push_str(&HEADER.apply_to(pad_to_width(name, col_widths[i] + 2)).to_string());
    }
    println!("{}", line.trim_end());

    let mut line = pad_to_width("", attr_width + 2);
    for (i, sci) in table.scientific_names.iter().enumerate() {
        line.push_str(&SCIENTIFIC.apply_to(pad_to_width(sci, col_widths[i] + 2)).to_string());
    }
    println!("{}", line.trim_end());

    let total = attr_width + 2 + col_widths.iter().map(|w| w + 2).sum::<usize>();
    println!("{}", "-".repeat(total));

    for row in &table.rows {
        let mut line = pad_to_width(row.attribute, attr_width + 2);
        for (i, value) in row.values.iter().enumerate() {
            line.push_str(&pad_to_width(value, col_widths[i] + 2));
        }
        println!("{}", line.trim_end());
    }
}

pub(super) fn print_suggestions(suggestions: &[RegionSuggestion]) {
    for (i, suggestion) in suggestions.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!(
            "{}  {}",
            HEADER.apply_to(format!("RPA {} ({})", suggestion.rpa, suggestion.name)),
            format!("déficit de arborização: {}%", suggestion.deficit_pct).dimmed()
        );
        if suggestion.species.is_empty() {
            println!("  nenhuma espécie adequada no catálogo");
            continue;
        }
        for (j, sp) in suggestion.species.iter().enumerate() {
            println!(
                "  {}. {} {}  {}",
                j + 1,
                pad_to_width(&sp.name, NAME_WIDTH),
                SCIENTIFIC.apply_to(pad_to_width(&sp.scientific_name, SCI_WIDTH)),
                sp.stock_line().dimmed()
            );
        }
    }
}

fn join_uses(sp: &Species) -> String {
    sp.uses
        .iter()
        .map(|u| u.label())
        .collect::<Vec<_>>()
        .join(", ")
}

fn tolerance_labels(sp: &Species) -> Vec<&'static str> {
    Condition::ALL
        .iter()
        .filter(|c| sp.meets(**c))
        .map(|c| c.label())
        .collect()
}

fn pad_to_width(s: &str, width: usize) -> String {
    let truncated = truncate_to_width(s, width);
    let padding = width.saturating_sub(truncated.width());
    format!("{}{}", truncated, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
