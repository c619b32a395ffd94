use crate::error::{Result, VerdeficaError};
use crate::filter::{FilterState, SortMode};
use crate::model::{fold_key, Species};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl FromStr for ExportFormat {
    type Err = VerdeficaError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match fold_key(s.trim()).as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            _ => Err(VerdeficaError::UnknownFacet("formato", s.to_string())),
        }
    }
}

/// Envelope written by the JSON export. Carries enough context that a
/// planning document can cite how the list was produced.
#[derive(Serialize)]
struct ExportDocument<'a> {
    generated_at: String,
    sort: &'a str,
    filters: Vec<String>,
    count: usize,
    species: &'a [Species],
}

pub fn to_json(species: &[Species], filters: &FilterState, sort: SortMode) -> Result<String> {
    let document = ExportDocument {
        generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        sort: sort.label(),
        filters: filters.summary(),
        count: species.len(),
        species,
    };
    Ok(serde_json::to_string_pretty(&document)?)
}

const CSV_HEADER: &str = "id,nome,nome_cientifico,categoria,porte,altura,copa,usos,estoque,\
estoque_limitado,raiz,sombreamento,sol_pleno,alagamentos,baixa_manutencao";

pub fn to_csv(species: &[Species]) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');
    for sp in species {
        let uses = sp
            .uses
            .iter()
            .map(|u| u.label())
            .collect::<Vec<_>>()
            .join("; ");
        let row = [
            sp.id.clone(),
            sp.name.clone(),
            sp.scientific_name.clone(),
            sp.category.to_string(),
            sp.size.to_string(),
            sp.height.to_string(),
            sp.canopy.to_string(),
            uses,
            sp.stock.to_string(),
            bool_cell(sp.low_stock).to_string(),
            sp.root_type.to_string(),
            sp.shade.to_string(),
            bool_cell(sp.full_sun).to_string(),
            bool_cell(sp.flooding).to_string(),
            bool_cell(sp.low_maintenance).to_string(),
        ];
        let line = row
            .iter()
            .map(|field| csv_field(field))
            .collect::<Vec<_>>()
            .join(",");
        out.push_str(&line);
        out.push('\n');
    }
    out
}

fn bool_cell(value: bool) -> &'static str {
    if value {
        "sim"
    } else {
        "não"
    }
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
