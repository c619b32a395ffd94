use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::compare::build_table;
use crate::error::Result;
use crate::filter::{self, FilterState, SortMode};
use crate::index::{self, index_species, SpeciesSelector};
use crate::model::Species;
use crate::selection::Selection;

/// Builds a side-by-side table for the selected species. Selecting the
/// same species twice toggles it back out, and columns always follow the
/// visible list order, not the order of the arguments.
pub fn run(
    catalog: &Catalog,
    filters: &FilterState,
    sort: SortMode,
    selectors: &[SpeciesSelector],
) -> Result<CmdResult> {
    let visible = index_species(filter::apply(catalog.species(), filters, sort));
    let resolved = index::resolve(&visible, catalog.species(), selectors)?;

    let mut selection = Selection::new();
    for sp in &resolved {
        selection.toggle(&sp.id);
    }

    let columns: Vec<Species> = visible
        .iter()
        .filter(|d| selection.contains(&d.species.id))
        .map(|d| d.species.clone())
        .collect();
    let hidden = selection.len() - columns.len();

    let mut result = CmdResult::default();
    if columns.is_empty() {
        result.add_message(CmdMessage::warning("Nenhuma espécie para comparar."));
    } else {
        result = result.with_table(build_table(&columns));
    }
    if hidden > 0 {
        result.add_message(CmdMessage::info(hidden_message(hidden)));
    }
    Ok(result)
}

fn hidden_message(hidden: usize) -> String {
    if hidden == 1 {
        "1 espécie selecionada está fora do filtro atual e ficou de fora da tabela.".to_string()
    } else {
        format!(
            "{} espécies selecionadas estão fora do filtro atual e ficaram de fora da tabela.",
            hidden
        )
    }
}
