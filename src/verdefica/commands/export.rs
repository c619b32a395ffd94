use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::export::{self, ExportFormat};
use crate::filter::{self, FilterState, SortMode};
use std::path::Path;

/// Exports the filtered list. With `output` the payload goes to a file and
/// the result carries a confirmation; without it the payload is returned
/// for the CLI to print, so the command stays pipe-friendly.
pub fn run(
    catalog: &Catalog,
    filters: &FilterState,
    sort: SortMode,
    format: ExportFormat,
    output: Option<&Path>,
) -> Result<CmdResult> {
    let species = filter::apply(catalog.species(), filters, sort);

    let mut result = CmdResult::default();
    if species.is_empty() {
        result.add_message(CmdMessage::info(
            "Nenhuma espécie corresponde aos filtros; nada foi exportado.",
        ));
        return Ok(result);
    }

    let payload = match format {
        ExportFormat::Json => export::to_json(&species, filters, sort)?,
        ExportFormat::Csv => export::to_csv(&species),
    };

    match output {
        Some(path) => {
            std::fs::write(path, &payload)?;
            result.add_message(CmdMessage::success(format!(
                "{} espécies exportadas para {}",
                species.len(),
                path.display()
            )));
        }
        None => result = result.with_payload(payload),
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;

    fn catalog() -> Catalog {
        Catalog::bundled().unwrap()
    }

    #[test]
    fn json_payload_goes_to_the_result_without_output() {
        let catalog = catalog();
        let result = run(
            &catalog,
            &FilterState::default(),
            SortMode::Relevance,
            ExportFormat::Json,
            None,
        )
        .unwrap();

        let payload = result.payload.unwrap();
        let doc: serde_json::Value = serde_json::from_str(&payload).unwrap();
        assert_eq!(doc["count"], catalog.len());
    }

    #[test]
    fn file_output_writes_and_confirms() {
        let catalog = catalog();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("especies.csv");

        let mut filters = FilterState::default();
        filters.toggle_category(Category::Frutifera);

        let result = run(
            &catalog,
            &filters,
            SortMode::Stock,
            ExportFormat::Csv,
            Some(&path),
        )
        .unwrap();

        assert!(result.payload.is_none());
        assert_eq!(result.messages.len(), 1);

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("id,nome"));
        assert!(written.contains("mangueira"));
        assert!(!written.contains("oiti"));
    }

    #[test]
    fn empty_filter_result_exports_nothing() {
        let catalog = catalog();
        let mut filters = FilterState::default();
        filters.query = "sequoia".to_string();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vazio.json");
        let result = run(
            &catalog,
            &filters,
            SortMode::Relevance,
            ExportFormat::Json,
            Some(&path),
        )
        .unwrap();

        assert!(!path.exists());
        assert_eq!(result.messages.len(), 1);
    }
}
