use crate::model::Species;

/// One attribute line of the comparison table, with one value per species
/// in column order.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRow {
    pub attribute: &'static str,
    pub values: Vec<String>,
}

/// Side-by-side table derived from the species passed in. Column order is
/// caller order, which the session keeps equal to the visible list order.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonTable {
    pub names: Vec<String>,
    pub scientific_names: Vec<String>,
    pub rows: Vec<ComparisonRow>,
}

impl ComparisonTable {
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn columns(&self) -> usize {
        self.names.len()
    }
}

pub fn build_table(species: &[Species]) -> ComparisonTable {
    ComparisonTable {
        names: species.iter().map(|s| s.name.clone()).collect(),
        scientific_names: species.iter().map(|s| s.scientific_name.clone()).collect(),
        rows: vec![
            row("Categoria", species, |s| s.category.to_string()),
            row("Porte", species, |s| s.size.to_string()),
            row("Altura", species, |s| s.height.to_string()),
            row("Copa", species, |s| s.canopy.to_string()),
            row("Tipo de raiz", species, |s| s.root_type.to_string()),
            row("Sombreamento", species, |s| s.shade.to_string()),
            row("Manutenção", species, |s| s.maintenance_label().to_string()),
            row("Usos recomendados", species, |s| {
                s.uses
                    .iter()
                    .map(|u| u.label())
                    .collect::<Vec<_>>()
                    .join(", ")
            }),
            row("Estoque", species, stock_cell),
        ],
    }
}

fn row(
    attribute: &'static str,
    species: &[Species],
    value: impl Fn(&Species) -> String,
) -> ComparisonRow {
    ComparisonRow {
        attribute,
        values: species.iter().map(value).collect(),
    }
}

fn stock_cell(species: &Species) -> String {
    if species.low_stock {
        format!("{} mudas (limitado)", species.stock)
    } else {
        format!("{} mudas", species.stock)
    }
}
