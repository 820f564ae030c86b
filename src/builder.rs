// src/builder.rs

use crate::error::ConfigError;
use crate::model::gds::{ConnectorDecl, Connectors, GdsConfigurationDocument};
use crate::reader::ENDPOINT_SEPARATOR;
use crate::types::Connection;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Serializes connections into a GDS configuration XML `String`.
///
/// Each connection becomes one `<Connector>`, its endpoints rejoined as
/// `node:port` compound strings. Reading the result back reproduces the
/// input sequence in order.
///
/// # Errors
/// Returns a `ConfigError` if serialization fails.
pub fn connections_to_string(connections: &[Connection]) -> Result<String, ConfigError> {
    let document = GdsConfigurationDocument {
        connectors: vec![Connectors {
            connector: connections
                .iter()
                .map(|connection| ConnectorDecl {
                    start_port: format!(
                        "{}{}{}",
                        connection.from, ENDPOINT_SEPARATOR, connection.from_port
                    ),
                    end_port: format!(
                        "{}{}{}",
                        connection.to, ENDPOINT_SEPARATOR, connection.to_port
                    ),
                })
                .collect(),
        }],
        ..Default::default()
    };

    // The XML declaration is written manually; the serializer only emits
    // the document element.
    let mut buffer = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    let mut serializer = quick_xml::se::Serializer::new(&mut buffer);
    serializer.indent(' ', 2);
    document.serialize(serializer)?;

    Ok(buffer)
}

/// Writes connections to a GDS configuration file. The write either
/// completes or the call fails; there is no partial-result mode.
pub fn save_connections(
    connections: &[Connection],
    path: impl AsRef<Path>,
) -> Result<(), ConfigError> {
    let path = path.as_ref();
    let xml = connections_to_string(connections)?;
    fs::write(path, xml).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}
