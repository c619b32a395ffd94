//! # API Facade
//!
//! The API layer is a thin facade over the command layer and the single
//! entry point for every catalog operation, regardless of the UI in front
//! of it.
//!
//! ## Role and Responsibilities
//!
//! The facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (raw CLI words become `SpeciesSelector`s)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: that belongs in `commands/*.rs`
//! - **Presentation concerns**: it returns data structures, never strings
//!   meant for a terminal
//!
//! Filter state and sort mode are owned by the caller, not the facade. The
//! one-shot CLI builds them from flags for a single call; the interactive
//! browser keeps a `Session` alive and passes its fields in.

use crate::catalog::Catalog;
use crate::commands;
use crate::error::Result;
use crate::export::ExportFormat;
use crate::filter::{FilterState, SortMode};
use crate::index;
use std::path::Path;

/// The main facade for catalog operations. Holds the loaded catalog and
/// hands it to the command layer call by call.
pub struct SelectorApi {
    catalog: Catalog,
}

impl SelectorApi {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn list(&self, filters: &FilterState, sort: SortMode) -> Result<commands::CmdResult> {
        commands::list::run(&self.catalog, filters, sort)
    }

    /// Full cards for the given selectors. All-numeric arguments are
    /// positions in the filtered list; anything else joins into one name
    /// search, so `ver ipê roxo` needs no quotes.
    pub fn show(
        &self,
        filters: &FilterState,
        sort: SortMode,
        selectors: &[String],
    ) -> Result<commands::CmdResult> {
        let selectors = index::parse_selectors(selectors);
        commands::show::run(&self.catalog, filters, sort, &selectors)
    }

    /// Comparison table for the given selectors. Unlike [`show`](Self::show),
    /// each argument stands on its own here, so several species can be
    /// named in one call.
    pub fn compare(
        &self,
        filters: &FilterState,
        sort: SortMode,
        selectors: &[String],
    ) -> Result<commands::CmdResult> {
        let selectors = index::parse_each(selectors);
        commands::compare::run(&self.catalog, filters, sort, &selectors)
    }

    pub fn export(
        &self,
        filters: &FilterState,
        sort: SortMode,
        format: ExportFormat,
        output: Option<&Path>,
    ) -> Result<commands::CmdResult> {
        commands::export::run(&self.catalog, filters, sort, format, output)
    }

    pub fn recommend(&self, per_region: usize) -> Result<commands::CmdResult> {
        commands::recommend::run(&self.catalog, per_region)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api() -> SelectorApi {
        SelectorApi::new(Catalog::bundled().unwrap())
    }

    fn words(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn list_passes_filters_through() {
        let api = api();
        let result = api.list(&FilterState::default(), SortMode::Relevance).unwrap();
        assert_eq!(result.listed.len(), api.catalog().len());
    }

    #[test]
    fn show_joins_words_into_one_name() {
        let api = api();
        let result = api
            .show(
                &FilterState::default(),
                SortMode::Relevance,
                &words(&["ipê", "roxo"]),
            )
            .unwrap();
        assert_eq!(result.cards.len(), 1);
        assert_eq!(result.cards[0].id, "ipe-roxo");
    }

    #[test]
    fn compare_takes_one_species_per_argument() {
        let api = api();
        let result = api
            .compare(
                &FilterState::default(),
                SortMode::Name,
                &words(&["oiti", "craibeira"]),
            )
            .unwrap();
        let table = result.table.unwrap();
        assert_eq!(table.columns(), 2);
    }

    #[test]
    fn export_returns_a_payload_without_output_path() {
        let api = api();
        let result = api
            .export(
                &FilterState::default(),
                SortMode::Relevance,
                ExportFormat::Csv,
                None,
            )
            .unwrap();
        assert!(result.payload.is_some());
    }

    #[test]
    fn recommend_covers_all_six_regions() {
        let api = api();
        let result = api.recommend(3).unwrap();
        assert_eq!(result.suggestions.len(), 6);
    }
}
