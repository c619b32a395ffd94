//! # Species Catalog
//!
//! The catalog is the fixed list of species the nursery program works from.
//! A copy ships embedded in the binary so the tool works offline with no
//! setup; planners can point `--catalog` (or `VERDEFICA_CATALOG`) at a JSON
//! file to pick up nursery updates without a new release.
//!
//! Every load path runs the same validation: ids must be unique and
//! non-empty, names must be present, and ranges must be ordered. A catalog
//! that fails validation is rejected as a whole.

use crate::error::{Result, VerdeficaError};
use crate::model::Species;
use std::collections::BTreeSet;
use std::path::Path;

const BUNDLED: &str = include_str!("especies.json");

#[derive(Debug, Clone)]
pub struct Catalog {
    species: Vec<Species>,
}

impl Catalog {
    pub fn new(species: Vec<Species>) -> Result<Catalog> {
        validate(&species)?;
        Ok(Catalog { species })
    }

    /// The species list compiled into the binary.
    pub fn bundled() -> Result<Catalog> {
        Self::from_json(BUNDLED)
    }

    pub fn from_path(path: &Path) -> Result<Catalog> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// Loads from `path` when given, otherwise falls back to the bundled list.
    pub fn load(path: Option<&Path>) -> Result<Catalog> {
        match path {
            Some(path) => Self::from_path(path),
            None => Self::bundled(),
        }
    }

    fn from_json(raw: &str) -> Result<Catalog> {
        let species: Vec<Species> = serde_json::from_str(raw)?;
        Self::new(species)
    }

    /// Species in catalog order. This order is the tie-breaker for every
    /// sort mode, so it must stay stable across loads.
    pub fn species(&self) -> &[Species] {
        &self.species
    }

    pub fn len(&self) -> usize {
        self.species.len()
    }

    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Species> {
        self.species.iter().find(|s| s.id == id)
    }
}

fn validate(species: &[Species]) -> Result<()> {
    let mut seen = BTreeSet::new();
    for sp in species {
        if sp.id.trim().is_empty() {
            return Err(VerdeficaError::Catalog("espécie sem id".to_string()));
        }
        if sp.name.trim().is_empty() || sp.scientific_name.trim().is_empty() {
            return Err(VerdeficaError::Catalog(format!(
                "espécie \"{}\" sem nome",
                sp.id
            )));
        }
        if !seen.insert(sp.id.clone()) {
            return Err(VerdeficaError::Catalog(format!(
                "id duplicado: \"{}\"",
                sp.id
            )));
        }
        if sp.height.min > sp.height.max {
            return Err(VerdeficaError::Catalog(format!(
                "\"{}\": altura mínima maior que a máxima",
                sp.id
            )));
        }
        if sp.canopy.min > sp.canopy.max {
            return Err(VerdeficaError::Catalog(format!(
                "\"{}\": copa mínima maior que a máxima",
                sp.id
            )));
        }
    }
    Ok(())
}
