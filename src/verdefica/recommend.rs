//! # Regional Recommendations
//!
//! Recife is divided into six political-administrative regions (RPAs),
//! each with its own canopy deficit and planting profile. A profile is
//! just a canned filter: priority uses plus the conditions the terrain
//! imposes. Suggestions are whatever that filter yields under relevance
//! ordering, so they follow nursery stock automatically.

use crate::filter::{self, FilterState, SortMode};
use crate::model::{Condition, Species, UseTag};

#[derive(Debug, Clone)]
pub struct Region {
    pub rpa: u8,
    pub name: &'static str,
    pub deficit_pct: u8,
    pub uses: &'static [UseTag],
    pub conditions: &'static [Condition],
}

pub const REGIONS: [Region; 6] = [
    Region {
        rpa: 1,
        name: "Centro",
        deficit_pct: 62,
        uses: &[UseTag::RuasEstreitas],
        conditions: &[Condition::SolPleno],
    },
    Region {
        rpa: 2,
        name: "Norte",
        deficit_pct: 48,
        uses: &[UseTag::Pracas, UseTag::AreasEscolares],
        conditions: &[],
    },
    Region {
        rpa: 3,
        name: "Noroeste",
        deficit_pct: 27,
        uses: &[UseTag::Pracas],
        conditions: &[Condition::BaixaManutencao],
    },
    Region {
        rpa: 4,
        name: "Oeste",
        deficit_pct: 33,
        uses: &[UseTag::AreasEscolares],
        conditions: &[],
    },
    Region {
        rpa: 5,
        name: "Sudoeste",
        deficit_pct: 41,
        uses: &[UseTag::Avenidas, UseTag::Pracas],
        conditions: &[Condition::Alagamentos],
    },
    Region {
        rpa: 6,
        name: "Sul",
        deficit_pct: 55,
        uses: &[UseTag::Avenidas],
        conditions: &[Condition::SolPleno],
    },
];

#[derive(Debug, Clone)]
pub struct RegionSuggestion {
    pub rpa: u8,
    pub name: &'static str,
    pub deficit_pct: u8,
    pub species: Vec<Species>,
}

/// Builds up to `per_region` suggestions for every region, worst deficit
/// first.
pub fn suggest(catalog: &[Species], per_region: usize) -> Vec<RegionSuggestion> {
    let mut regions: Vec<&Region> = REGIONS.iter().collect();
    regions.sort_by(|a, b| b.deficit_pct.cmp(&a.deficit_pct));

    regions
        .into_iter()
        .map(|region| {
            let mut filters = FilterState::default();
            filters.uses.extend(region.uses.iter().copied());
            filters.conditions.extend(region.conditions.iter().copied());

            let mut picks = filter::apply(catalog, &filters, SortMode::Relevance);
            picks.truncate(per_region);

            RegionSuggestion {
                rpa: region.rpa,
                name: region.name,
                deficit_pct: region.deficit_pct,
                species: picks,
            }
        })
        .collect()
}
