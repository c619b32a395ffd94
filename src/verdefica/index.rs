//! # Display Indexing
//!
//! Listed species get 1-based positions that only make sense for the list
//! the user is currently looking at. `ver 2` therefore resolves against
//! the filtered, sorted list, not against the raw catalog. Name selectors
//! resolve against the whole catalog so a species can be inspected even
//! while filters hide it.

use crate::error::{Result, VerdeficaError};
use crate::model::{fold_key, Species};
use std::fmt;

#[derive(Debug, Clone)]
pub struct DisplaySpecies {
    pub index: usize,
    pub species: Species,
}

/// Assigns positions 1..=n in list order.
pub fn index_species(list: Vec<Species>) -> Vec<DisplaySpecies> {
    list.into_iter()
        .enumerate()
        .map(|(i, species)| DisplaySpecies {
            index: i + 1,
            species,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeciesSelector {
    Index(usize),
    Name(String),
}

impl fmt::Display for SpeciesSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpeciesSelector::Index(n) => write!(f, "{}", n),
            SpeciesSelector::Name(s) => f.write_str(s),
        }
    }
}

/// Parses raw CLI arguments into selectors. If every argument is numeric
/// they are treated as positions; otherwise the arguments are joined into
/// a single name search, so `ver ipê roxo` works without quotes.
pub fn parse_selectors(inputs: &[String]) -> Vec<SpeciesSelector> {
    let mut selectors = Vec::with_capacity(inputs.len());
    for raw in inputs {
        match raw.trim().parse::<usize>() {
            Ok(n) => selectors.push(SpeciesSelector::Index(n)),
            Err(_) => return vec![SpeciesSelector::Name(inputs.join(" "))],
        }
    }
    selectors
}

/// Parses each argument as its own selector, for commands that address
/// several species at once. Multi-word names need quotes here.
pub fn parse_each(inputs: &[String]) -> Vec<SpeciesSelector> {
    inputs
        .iter()
        .map(|raw| match raw.trim().parse::<usize>() {
            Ok(n) => SpeciesSelector::Index(n),
            Err(_) => SpeciesSelector::Name(raw.trim().to_string()),
        })
        .collect()
}

pub fn resolve(
    visible: &[DisplaySpecies],
    catalog: &[Species],
    selectors: &[SpeciesSelector],
) -> Result<Vec<Species>> {
    let mut out = Vec::with_capacity(selectors.len());
    for selector in selectors {
        match selector {
            SpeciesSelector::Index(n) => {
                let found = visible
                    .iter()
                    .find(|d| d.index == *n)
                    .ok_or(VerdeficaError::IndexOutOfRange(*n))?;
                out.push(found.species.clone());
            }
            SpeciesSelector::Name(term) => out.push(find_by_name(catalog, term)?),
        }
    }
    Ok(out)
}

fn find_by_name(catalog: &[Species], term: &str) -> Result<Species> {
    let key = selector_key(term);
    if key.is_empty() {
        return Err(VerdeficaError::SpeciesNotFound(term.to_string()));
    }

    // An exact id or name match wins outright, so "ipê amarelo" is never
    // ambiguous with the other ipês.
    if let Some(sp) = catalog
        .iter()
        .find(|s| selector_key(&s.id) == key || selector_key(&s.name) == key)
    {
        return Ok(sp.clone());
    }

    let matches: Vec<&Species> = catalog
        .iter()
        .filter(|s| {
            selector_key(&s.name).contains(&key)
                || selector_key(&s.scientific_name).contains(&key)
        })
        .collect();

    match matches.as_slice() {
        [] => Err(VerdeficaError::SpeciesNotFound(term.to_string())),
        [one] => Ok((*one).clone()),
        many => {
            let names = many
                .iter()
                .map(|s| s.name.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            Err(VerdeficaError::AmbiguousSelector(term.to_string(), names))
        }
    }
}

/// Hyphens and spaces are interchangeable in selectors, so `ver pau brasil`
/// finds "Pau-Brasil".
fn selector_key(s: &str) -> String {
    fold_key(s.trim()).replace('-', " ")
}
