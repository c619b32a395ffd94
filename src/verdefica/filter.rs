//! # Filtering and Ordering
//!
//! `FilterState` holds the active facets; `apply` narrows a catalog down to
//! the species that satisfy all of them and orders the survivors. Facets
//! combine with AND, values inside a facet with OR, and an empty facet adds
//! no constraint, so a fresh `FilterState` passes the whole catalog through.
//!
//! All sorts are stable, so species that tie keep their catalog order and
//! repeated runs render identical lists.

use crate::error::VerdeficaError;
use crate::model::{fold_key, Category, Condition, SizeClass, Species, UseTag};
use std::collections::BTreeSet;
use std::str::FromStr;

/// Stock penalty applied to species flagged `low_stock` when ranking by
/// relevance. Keeps nearly-depleted stock from crowding the top of the list.
pub const LOW_STOCK_PENALTY: i64 = 50;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub query: String,
    pub categories: BTreeSet<Category>,
    pub sizes: BTreeSet<SizeClass>,
    pub uses: BTreeSet<UseTag>,
    pub conditions: BTreeSet<Condition>,
}

impl FilterState {
    pub fn new() -> FilterState {
        FilterState::default()
    }

    pub fn is_empty(&self) -> bool {
        self.query.trim().is_empty()
            && self.categories.is_empty()
            && self.sizes.is_empty()
            && self.uses.is_empty()
            && self.conditions.is_empty()
    }

    /// Drops every facet at once ("Limpar filtros").
    pub fn clear(&mut self) {
        *self = FilterState::default();
    }

    pub fn toggle_category(&mut self, category: Category) -> bool {
        toggle(&mut self.categories, category)
    }

    pub fn toggle_size(&mut self, size: SizeClass) -> bool {
        toggle(&mut self.sizes, size)
    }

    pub fn toggle_use(&mut self, tag: UseTag) -> bool {
        toggle(&mut self.uses, tag)
    }

    pub fn toggle_condition(&mut self, condition: Condition) -> bool {
        toggle(&mut self.conditions, condition)
    }

    /// True when `species` satisfies every active facet.
    pub fn matches(&self, species: &Species) -> bool {
        let query = fold_key(self.query.trim());
        if !query.is_empty()
            && !fold_key(&species.name).contains(&query)
            && !fold_key(&species.scientific_name).contains(&query)
        {
            return false;
        }
        if !self.categories.is_empty() && !self.categories.contains(&species.category) {
            return false;
        }
        if !self.sizes.is_empty() && !self.sizes.contains(&species.size) {
            return false;
        }
        if !self.uses.is_empty() && !species.uses.iter().any(|u| self.uses.contains(u)) {
            return false;
        }
        self.conditions.iter().all(|c| species.meets(*c))
    }

    /// One line per active facet, for status displays and export headers.
    pub fn summary(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if !self.query.trim().is_empty() {
            lines.push(format!("busca: \"{}\"", self.query.trim()));
        }
        if !self.categories.is_empty() {
            lines.push(format!("categorias: {}", join_labels(&self.categories)));
        }
        if !self.sizes.is_empty() {
            lines.push(format!("portes: {}", join_labels(&self.sizes)));
        }
        if !self.uses.is_empty() {
            lines.push(format!("usos: {}", join_labels(&self.uses)));
        }
        if !self.conditions.is_empty() {
            lines.push(format!("condições: {}", join_labels(&self.conditions)));
        }
        lines
    }
}

fn toggle<T: Ord>(set: &mut BTreeSet<T>, value: T) -> bool {
    if set.remove(&value) {
        false
    } else {
        set.insert(value);
        true
    }
}

fn join_labels<T: ToString>(set: &BTreeSet<T>) -> String {
    set.iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortMode {
    #[default]
    Relevance,
    Name,
    Stock,
}

impl SortMode {
    pub fn label(self) -> &'static str {
        match self {
            SortMode::Relevance => "relevância",
            SortMode::Name => "nome",
            SortMode::Stock => "estoque",
        }
    }
}

impl FromStr for SortMode {
    type Err = VerdeficaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match fold_key(s.trim()).as_str() {
            "relevancia" | "relevance" => Ok(SortMode::Relevance),
            "nome" | "name" => Ok(SortMode::Name),
            "estoque" | "stock" => Ok(SortMode::Stock),
            _ => Err(VerdeficaError::UnknownFacet("ordenação", s.to_string())),
        }
    }
}

pub fn relevance_score(species: &Species) -> i64 {
    let penalty = if species.low_stock { LOW_STOCK_PENALTY } else { 0 };
    species.stock as i64 - penalty
}

pub fn sort_species(list: &mut [Species], mode: SortMode) {
    match mode {
        SortMode::Relevance => list.sort_by(|a, b| relevance_score(b).cmp(&relevance_score(a))),
        SortMode::Name => list.sort_by_cached_key(|s| fold_key(&s.name)),
        SortMode::Stock => list.sort_by(|a, b| b.stock.cmp(&a.stock)),
    }
}

/// Filters `catalog` through `filters` and sorts the result by `mode`.
pub fn apply(catalog: &[Species], filters: &FilterState, mode: SortMode) -> Vec<Species> {
    let mut out: Vec<Species> = catalog
        .iter()
        .filter(|s| filters.matches(s))
        .cloned()
        .collect();
    sort_species(&mut out, mode);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn species() -> Vec<Species> {
        Catalog::bundled().unwrap().species().to_vec()
    }

    fn ids(list: &[Species]) -> Vec<&str> {
        list.iter().map(|s| s.id.as_str()).collect()
    }

    #[test]
    fn empty_filter_passes_the_whole_catalog() {
        let all = species();
        let filters = FilterState::default();
        assert!(filters.is_empty());

        let result = apply(&all, &filters, SortMode::Relevance);
        assert_eq!(result.len(), all.len());
    }

    #[test]
    fn results_are_a_subset_that_each_match() {
        let all = species();
        let mut filters = FilterState::default();
        filters.query = "ipe".to_string();
        filters.toggle_category(Category::Nativa);

        let result = apply(&all, &filters, SortMode::Relevance);
        assert!(!result.is_empty());
        for sp in &result {
            assert!(filters.matches(sp));
            assert!(all.iter().any(|s| s.id == sp.id));
        }
    }

    #[test]
    fn query_ignores_accents_and_case() {
        let all = species();
        let mut filters = FilterState::default();

        filters.query = "ipê".to_string();
        let accented = apply(&all, &filters, SortMode::Name);

        filters.query = "IPE".to_string();
        let plain = apply(&all, &filters, SortMode::Name);

        assert_eq!(ids(&accented), ids(&plain));
        assert_eq!(ids(&plain), vec!["ipe-amarelo", "ipe-rosa", "ipe-roxo"]);
    }

    #[test]
    fn query_also_searches_the_scientific_name() {
        let all = species();
        let mut filters = FilterState::default();
        filters.query = "handroanthus".to_string();

        let result = apply(&all, &filters, SortMode::Name);
        assert_eq!(ids(&result), vec!["ipe-amarelo", "ipe-rosa", "ipe-roxo"]);
    }

    #[test]
    fn category_filter_keeps_only_that_category() {
        let all = species();
        let mut filters = FilterState::default();
        filters.toggle_category(Category::Nativa);

        let result = apply(&all, &filters, SortMode::Relevance);
        assert!(!result.is_empty());
        assert!(result.iter().all(|s| s.category == Category::Nativa));

        // Exactly the native species: none left behind by the other facets.
        let natives = all
            .iter()
            .filter(|s| s.category == Category::Nativa)
            .count();
        assert_eq!(result.len(), natives);
    }

    #[test]
    fn use_filter_needs_only_one_overlap() {
        let all = species();
        let mut filters = FilterState::default();
        filters.toggle_use(UseTag::RuasEstreitas);
        filters.toggle_use(UseTag::Avenidas);

        let result = apply(&all, &filters, SortMode::Relevance);
        for sp in &result {
            assert!(sp
                .uses
                .iter()
                .any(|u| *u == UseTag::RuasEstreitas || *u == UseTag::Avenidas));
        }
        // Munguba serves both avenues and narrow streets; it must appear once.
        assert_eq!(
            result.iter().filter(|s| s.id == "munguba").count(),
            1
        );
    }

    #[test]
    fn conditions_all_have_to_hold() {
        let all = species();
        let mut filters = FilterState::default();
        filters.toggle_condition(Condition::Alagamentos);
        filters.toggle_condition(Condition::BaixaManutencao);

        let result = apply(&all, &filters, SortMode::Name);
        assert_eq!(ids(&result), vec!["aroeira-vermelha", "munguba"]);
    }

    #[test]
    fn facets_combine_with_and() {
        let all = species();
        let mut filters = FilterState::default();
        filters.query = "ipe".to_string();
        filters.toggle_condition(Condition::Alagamentos);

        // The ipês all dislike waterlogged soil, so the intersection is empty.
        let result = apply(&all, &filters, SortMode::Relevance);
        assert!(result.is_empty());
    }

    #[test]
    fn clearing_restores_the_full_list() {
        let all = species();
        let mut filters = FilterState::default();
        filters.query = "mangueira".to_string();
        filters.toggle_size(SizeClass::Grande);
        assert_eq!(apply(&all, &filters, SortMode::Relevance).len(), 1);

        filters.clear();
        assert!(filters.is_empty());
        assert_eq!(apply(&all, &filters, SortMode::Relevance).len(), all.len());
    }

    #[test]
    fn toggling_twice_is_a_no_op() {
        let mut filters = FilterState::default();
        let before = filters.clone();

        assert!(filters.toggle_category(Category::Exotica));
        assert!(!filters.toggle_category(Category::Exotica));
        assert_eq!(filters, before);
    }

    #[test]
    fn name_sort_uses_folded_collation() {
        let all = species();
        let result = apply(&all, &FilterState::default(), SortMode::Name);
        let names: Vec<&str> = result.iter().map(|s| s.name.as_str()).collect();

        let mut expected: Vec<&str> = names.clone();
        expected.sort_by_key(|n| fold_key(n));
        assert_eq!(names, expected);

        // "Espatódea" sorts under E despite the accent.
        let pos_esp = names.iter().position(|n| *n == "Espatódea").unwrap();
        let pos_flam = names.iter().position(|n| *n == "Flamboyant").unwrap();
        assert!(pos_esp < pos_flam);

        // The three ipês land in one run, not scattered by the circumflex.
        let first_ipe = names.iter().position(|n| n.starts_with("Ipê")).unwrap();
        assert_eq!(names[first_ipe], "Ipê Amarelo");
        assert_eq!(names[first_ipe + 1], "Ipê Rosa");
        assert_eq!(names[first_ipe + 2], "Ipê Roxo");
    }

    #[test]
    fn stock_sort_is_descending() {
        let all = species();
        let result = apply(&all, &FilterState::default(), SortMode::Stock);
        assert_eq!(result[0].id, "oiti");
        assert_eq!(result[result.len() - 1].id, "pau-brasil");
        for pair in result.windows(2) {
            assert!(pair[0].stock >= pair[1].stock);
        }
    }

    #[test]
    fn relevance_penalizes_flagged_stock() {
        let all = species();
        let result = apply(&all, &FilterState::default(), SortMode::Relevance);
        let ids = ids(&result);

        // Palmeira-imperial holds 40 unflagged seedlings; Ipê Roxo holds 44
        // but is flagged, so the penalty drops it below the palmeira.
        let palmeira = ids.iter().position(|i| *i == "palmeira-imperial").unwrap();
        let ipe_roxo = ids.iter().position(|i| *i == "ipe-roxo").unwrap();
        assert!(palmeira < ipe_roxo);

        // All flagged species sink to the tail.
        assert_eq!(ids[ids.len() - 1], "pau-brasil");
    }

    #[test]
    fn ties_keep_catalog_order() {
        let all = species();
        let mut twins: Vec<Species> = all[..3].to_vec();
        for (i, sp) in twins.iter_mut().enumerate() {
            sp.stock = 100;
            sp.low_stock = false;
            sp.id = format!("twin-{i}");
        }
        let original: Vec<String> = twins.iter().map(|s| s.id.clone()).collect();

        sort_species(&mut twins, SortMode::Stock);
        let after: Vec<String> = twins.iter().map(|s| s.id.clone()).collect();
        assert_eq!(after, original);

        sort_species(&mut twins, SortMode::Relevance);
        let after: Vec<String> = twins.iter().map(|s| s.id.clone()).collect();
        assert_eq!(after, original);
    }

    #[test]
    fn summary_lists_active_facets_only() {
        let mut filters = FilterState::default();
        assert!(filters.summary().is_empty());

        filters.query = " ipê ".to_string();
        filters.toggle_category(Category::Nativa);
        filters.toggle_category(Category::Frutifera);
        filters.toggle_condition(Condition::SolPleno);

        let summary = filters.summary();
        assert_eq!(summary.len(), 3);
        assert_eq!(summary[0], "busca: \"ipê\"");
        assert_eq!(summary[1], "categorias: Nativa, Frutífera");
        assert_eq!(summary[2], "condições: Resistência ao sol pleno");
    }
}
