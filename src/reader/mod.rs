// src/reader/mod.rs

//! One reader per configuration file kind. Each reader loads a file, maps
//! the raw model onto the public types and returns the complete result, or
//! fails with an identifiable cause. No partial results, no caching.

use crate::error::ConfigError;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

mod esm;
mod gds;
mod io;
mod meta;

pub(crate) use gds::ENDPOINT_SEPARATOR;

pub use esm::{load_esm_config, load_esm_forest, load_program_instances};
pub use gds::{connections_from_str, load_connections, load_gds_config};
pub use io::{io_modules_from_str, load_io_modules};
pub use meta::{
    load_compmeta, load_libmeta, load_programs, load_progmeta, load_typemeta, load_types,
};

/// Reads and deserializes one XML configuration file.
pub(crate) fn load_document<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("loaded {}", path.display());
    Ok(quick_xml::de::from_str(&content)?)
}
