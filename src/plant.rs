//! Grouping plants by life cycle
//!
//! Four ways to bucket the same garden, from indexing an array by
//! discriminant to letting an iterator adapter build the map.

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LifeCycle {
    Annual,
    Perennial,
    Biennial,
}

impl LifeCycle {
    pub const ALL: [LifeCycle; 3] = [LifeCycle::Annual, LifeCycle::Perennial, LifeCycle::Biennial];
}

impl fmt::Display for LifeCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LifeCycle::Annual => "ANNUAL",
            LifeCycle::Perennial => "PERENNIAL",
            LifeCycle::Biennial => "BIENNIAL",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Plant {
    pub name: String,
    pub life_cycle: LifeCycle,
}

impl Plant {
    pub fn new(name: impl Into<String>, life_cycle: LifeCycle) -> Self {
        Self {
            name: name.into(),
            life_cycle,
        }
    }
}

impl fmt::Display for Plant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

pub fn default_garden() -> Vec<Plant> {
    vec![
        Plant::new("basil", LifeCycle::Annual),
        Plant::new("caraway", LifeCycle::Biennial),
        Plant::new("dill", LifeCycle::Annual),
        Plant::new("parsley", LifeCycle::Biennial),
    ]
}

/// Indexed by `LifeCycle as usize`. Works, but nothing ties the array
/// length or the index to the enum except convention.
pub fn group_by_ordinal(garden: &[Plant]) -> [BTreeSet<Plant>; 3] {
    let mut by_ordinal: [BTreeSet<Plant>; 3] = Default::default();
    for plant in garden {
        by_ordinal[plant.life_cycle as usize].insert(plant.clone());
    }
    by_ordinal
}

/// Every life cycle is a key, even when no plant has it.
pub fn group_by_enum_map(garden: &[Plant]) -> BTreeMap<LifeCycle, BTreeSet<Plant>> {
    let mut by_life_cycle: BTreeMap<LifeCycle, BTreeSet<Plant>> = LifeCycle::ALL
        .into_iter()
        .map(|life_cycle| (life_cycle, BTreeSet::new()))
        .collect();

    for plant in garden {
        by_life_cycle
            .entry(plant.life_cycle)
            .or_default()
            .insert(plant.clone());
    }
    by_life_cycle
}

/// Only life cycles that occur in the garden become keys.
pub fn group_by_stream(garden: &[Plant]) -> HashMap<LifeCycle, Vec<Plant>> {
    garden
        .iter()
        .cloned()
        .into_group_map_by(|plant| plant.life_cycle)
}

pub fn group_into_sets(garden: &[Plant]) -> BTreeMap<LifeCycle, BTreeSet<Plant>> {
    garden.iter().fold(BTreeMap::new(), |mut acc, plant| {
        acc.entry(plant.life_cycle)
            .or_insert_with(BTreeSet::new)
            .insert(plant.clone());
        acc
    })
}
