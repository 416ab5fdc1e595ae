//! Demo configuration
//!
//! Read from the TOML file named by `IDIOM_DEMOS_CONFIG`; every field falls
//! back to the values the demos were written with.

use crate::error::{IdiomError, Result};
use crate::plant::{default_garden, LifeCycle, Plant};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;

pub const CONFIG_ENV_VAR: &str = "IDIOM_DEMOS_CONFIG";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub serial_workers: usize,
    pub garden: Vec<PlantEntry>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlantEntry {
    pub name: String,
    pub life_cycle: LifeCycle,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            serial_workers: 50,
            garden: default_garden()
                .into_iter()
                .map(|plant| PlantEntry {
                    name: plant.name,
                    life_cycle: plant.life_cycle,
                })
                .collect(),
        }
    }
}

impl DemoConfig {
    pub fn load() -> Result<Self> {
        match env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::from_path(Path::new(&path)),
            None => {
                log::debug!("{} not set, using default config", CONFIG_ENV_VAR);
                Ok(Self::default())
            }
        }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = toml::from_str(&content).map_err(|source| IdiomError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|source| IdiomError::Config {
            path: "<inline>".into(),
            source,
        })
    }

    pub fn plants(&self) -> Vec<Plant> {
        self.garden
            .iter()
            .map(|entry| Plant::new(entry.name.clone(), entry.life_cycle))
            .collect()
    }
}
