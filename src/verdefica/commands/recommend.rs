use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::recommend;

pub fn run(catalog: &Catalog, per_region: usize) -> Result<CmdResult> {
    let suggestions = recommend::suggest(catalog.species(), per_region);

    let mut result = CmdResult::default();
    if suggestions.iter().all(|s| s.species.is_empty()) {
        result.add_message(CmdMessage::warning(
            "O catálogo atual não atende a nenhum perfil regional.",
        ));
    }
    Ok(result.with_suggestions(suggestions))
}
