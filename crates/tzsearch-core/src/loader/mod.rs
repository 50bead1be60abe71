// crates/tzsearch-core/src/loader/mod.rs

//! # Data Loader
//!
//! Reads the city dataset (plain or gzipped JSON array) and feeds it into a
//! [`PrefixIndex`], one insert per record under the lower-cased city name.

pub mod common_io;

use crate::error::Result;
use crate::model::{City, CityRecord};
use crate::trie::PrefixIndex;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Default dataset bundled with the crate.
pub fn default_data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

pub fn default_dataset_filename() -> &'static str {
    "cities.json"
}

pub fn default_dataset_path() -> PathBuf {
    default_data_dir().join(default_dataset_filename())
}

/// Parses a JSON array of [`City`] records from any reader.
pub fn read_cities<R: Read>(reader: R) -> Result<Vec<City>> {
    let cities: Vec<City> = serde_json::from_reader(reader)?;
    Ok(cities)
}

/// Loads the dataset at `path`.
pub fn load_cities(path: impl AsRef<Path>) -> Result<Vec<City>> {
    let path = path.as_ref();
    let reader = common_io::open_stream(path)?;
    let cities = read_cities(reader)?;
    info!(path = %path.display(), count = cities.len(), "loaded city dataset");
    Ok(cities)
}

/// Inserts every city under its lower-cased name, in dataset order.
pub fn fill_index(cities: &[City], index: &mut PrefixIndex<CityRecord>) {
    for city in cities {
        index.insert(&city.index_key(), Some(CityRecord::from(city)));
    }
    debug!(inserted = cities.len(), stats = ?index.stats(), "index filled");
}

impl PrefixIndex<CityRecord> {
    pub fn from_cities(cities: &[City]) -> Self {
        let mut index = Self::new();
        fill_index(cities, &mut index);
        index
    }

    /// Loads the dataset at `path` and builds a fresh index from it.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let cities = load_cities(path)?;
        Ok(Self::from_cities(&cities))
    }
}
