use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::filter::{self, FilterState, SortMode};
use crate::index::index_species;

pub fn run(catalog: &Catalog, filters: &FilterState, sort: SortMode) -> Result<CmdResult> {
    let listed = index_species(filter::apply(catalog.species(), filters, sort));

    let mut result = CmdResult::default();
    if listed.is_empty() && !filters.is_empty() {
        result.add_message(CmdMessage::info(
            "Nenhuma espécie corresponde aos filtros ativos.",
        ));
    }
    Ok(result.with_listed(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;

    fn catalog() -> Catalog {
        Catalog::bundled().unwrap()
    }

    #[test]
    fn lists_the_whole_catalog_by_default() {
        let catalog = catalog();
        let result = run(&catalog, &FilterState::default(), SortMode::Relevance).unwrap();
        assert_eq!(result.listed.len(), catalog.len());
        assert_eq!(result.listed[0].index, 1);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn filtered_list_keeps_positions_contiguous() {
        let catalog = catalog();
        let mut filters = FilterState::default();
        filters.toggle_category(Category::Ornamental);

        let result = run(&catalog, &filters, SortMode::Name).unwrap();
        assert!(!result.listed.is_empty());
        for (i, entry) in result.listed.iter().enumerate() {
            assert_eq!(entry.index, i + 1);
        }
    }

    #[test]
    fn empty_match_explains_itself() {
        let catalog = catalog();
        let mut filters = FilterState::default();
        filters.query = "jacarandá".to_string();

        let result = run(&catalog, &filters, SortMode::Relevance).unwrap();
        assert!(result.listed.is_empty());
        assert_eq!(result.messages.len(), 1);
    }
}
