//! # Browse Session
//!
//! A `Session` is the state behind the interactive browser: active filters,
//! the sort mode, and the comparison selection. Everything shown to the
//! user derives from these three plus the catalog, so there is no cached
//! list to fall out of sync.

use crate::error::{Result, VerdeficaError};
use crate::filter::{self, FilterState, SortMode};
use crate::index::{index_species, DisplaySpecies};
use crate::model::Species;
use crate::selection::Selection;

#[derive(Debug, Clone, Default)]
pub struct Session {
    pub filters: FilterState,
    pub sort: SortMode,
    pub selection: Selection,
}

impl Session {
    pub fn new() -> Session {
        Session::default()
    }

    /// The list exactly as the user currently sees it.
    pub fn visible(&self, catalog: &[Species]) -> Vec<DisplaySpecies> {
        index_species(filter::apply(catalog, &self.filters, self.sort))
    }

    /// Selected species in visible order, ready for the comparison table.
    pub fn comparison(&self, catalog: &[Species]) -> Vec<Species> {
        filter::apply(catalog, &self.filters, self.sort)
            .into_iter()
            .filter(|s| self.selection.contains(&s.id))
            .collect()
    }

    /// How many selected species the active filters are hiding.
    pub fn hidden_selected(&self, catalog: &[Species]) -> usize {
        self.selection.len() - self.comparison(catalog).len()
    }

    /// Toggles the species at visible position `index`. Returns the species
    /// and whether it ended up selected.
    pub fn toggle_position(
        &mut self,
        catalog: &[Species],
        index: usize,
    ) -> Result<(Species, bool)> {
        let visible = self.visible(catalog);
        let found = visible
            .iter()
            .find(|d| d.index == index)
            .ok_or(VerdeficaError::IndexOutOfRange(index))?;
        let now_selected = self.selection.toggle(&found.species.id);
        Ok((found.species.clone(), now_selected))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::model::Category;

    fn catalog() -> Vec<Species> {
        Catalog::bundled().unwrap().species().to_vec()
    }

    #[test]
    fn visible_reflects_filters_and_sort() {
        let all = catalog();
        let mut session = Session::new();
        session.filters.toggle_category(Category::Frutifera);
        session.sort = SortMode::Stock;

        let listed = session.visible(&all);
        assert!(!listed.is_empty());
        assert!(listed
            .iter()
            .all(|d| d.species.category == Category::Frutifera));
        for pair in listed.windows(2) {
            assert!(pair[0].species.stock >= pair[1].species.stock);
        }
    }

    #[test]
    fn comparison_follows_visible_order_not_selection_order() {
        let all = catalog();
        let mut session = Session::new();
        session.sort = SortMode::Name;

        // Select in reverse alphabetical order.
        session.selection.toggle("pau-brasil");
        session.selection.toggle("mangueira");
        session.selection.toggle("craibeira");

        let compared = session.comparison(&all);
        let ids: Vec<&str> = compared.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["craibeira", "mangueira", "pau-brasil"]);
    }

    #[test]
    fn filters_hide_selected_species_without_deselecting() {
        let all = catalog();
        let mut session = Session::new();
        session.selection.toggle("mangueira");
        session.selection.toggle("oiti");

        session.filters.toggle_category(Category::Nativa);
        let compared = session.comparison(&all);
        assert_eq!(compared.len(), 1);
        assert_eq!(compared[0].id, "oiti");
        assert_eq!(session.hidden_selected(&all), 1);

        // Clearing the filter brings the mangueira column back.
        session.filters.clear();
        assert_eq!(session.comparison(&all).len(), 2);
        assert_eq!(session.hidden_selected(&all), 0);
    }

    #[test]
    fn toggle_position_uses_the_current_list() {
        let all = catalog();
        let mut session = Session::new();
        session.sort = SortMode::Stock;

        // Position 1 under stock sort is the largest stock, the oiti.
        let (species, selected) = session.toggle_position(&all, 1).unwrap();
        assert_eq!(species.id, "oiti");
        assert!(selected);

        // Same position under name sort is a different species.
        session.sort = SortMode::Name;
        let (species, selected) = session.toggle_position(&all, 1).unwrap();
        assert_eq!(species.id, "aroeira-vermelha");
        assert!(selected);
        assert_eq!(session.selection.len(), 2);
    }

    #[test]
    fn toggle_position_rejects_out_of_range() {
        let all = catalog();
        let mut session = Session::new();
        session.filters.query = "mangueira".to_string();

        let err = session.toggle_position(&all, 2).unwrap_err();
        assert!(matches!(err, VerdeficaError::IndexOutOfRange(2)));
    }
}
