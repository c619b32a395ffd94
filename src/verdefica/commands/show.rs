use crate::catalog::Catalog;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::filter::{self, FilterState, SortMode};
use crate::index::{self, index_species, SpeciesSelector};

/// Resolves the selectors and returns full technical cards for them.
/// Positions are interpreted against the filtered, sorted list; names
/// search the whole catalog.
pub fn run(
    catalog: &Catalog,
    filters: &FilterState,
    sort: SortMode,
    selectors: &[SpeciesSelector],
) -> Result<CmdResult> {
    let visible = index_species(filter::apply(catalog.species(), filters, sort));
    let cards = index::resolve(&visible, catalog.species(), selectors)?;
    Ok(CmdResult::default().with_cards(cards))
}
