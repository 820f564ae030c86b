// src/lib.rs

//! Reads and writes PLCnext Technology controller configuration files.
//!
//! The crate is a read/write adapter between the XML configuration formats
//! of the PLCnext platform and the flat, graph-like JSON shapes a graphical
//! editor consumes: nodes with named input/output ports, edges connecting
//! ports, and a flattened scheduling forest.
//!
//! Supported formats:
//! - TIC hardware descriptions ([`load_io_modules`])
//! - project metadata and its include chain ([`load_programs`],
//!   [`load_types`] and the per-file snapshot readers)
//! - ESM task scheduling configurations ([`load_esm_config`],
//!   [`load_esm_forest`])
//! - ACF component instance configurations ([`load_program_instances`])
//! - GDS signal wiring configurations ([`load_connections`],
//!   [`save_connections`])
//!
//! The built-in global objects of the platform are available as a fixed
//! catalog via [`global_objects`].

// --- Crate Modules ---

mod builder;
mod catalog;
mod error;
mod extractor;
mod model;
mod reader;
mod types;

// --- Public API Re-exports ---

pub use builder::{connections_to_string, save_connections};
pub use catalog::global_objects;
pub use error::ConfigError;
pub use extractor::{
    Attribute, AttributeList, Element, ElementList, TicAttribute, TicElement, extract_elements,
};
pub use reader::{
    connections_from_str, io_modules_from_str, load_compmeta, load_connections, load_esm_config,
    load_esm_forest, load_gds_config, load_io_modules, load_libmeta, load_program_instances,
    load_programs, load_progmeta, load_typemeta, load_types,
};
pub use types::{
    ComponentMeta, Connection, ConnectorEndpoints, CyclicTask, EsmConfiguration, EsmElement,
    EsmTaskRelation, GdsConfiguration, LibraryMeta, Node, Port, PortMeta, ProgramDeclaration,
    ProgramInstance, ProgramMeta, TaskProgramRelation, TypeDefinition, TypeField,
};
