// src/reader/meta.rs

//! Readers for the metadata file family (`.meta.config`, `.libmeta`,
//! `.compmeta`, `.progmeta`, `.typemeta`).
//!
//! The snapshot readers are one-pass structural copies of a single file.
//! [`load_programs`] and [`load_types`] perform the cross-file join: the
//! project meta configuration names include directories, those directories
//! are searched for `.libmeta` files, and each metadata file names the next
//! level by a path relative to its own directory.

use crate::error::ConfigError;
use crate::model::meta::{IncludeList, MetaConfigurationDocument, PortDecl, PortList, TypeDecl};
use crate::types::{ComponentMeta, LibraryMeta, Node, Port, PortMeta, ProgramMeta, TypeDefinition, TypeField};
use std::path::{Path, PathBuf};

const LIBMETA_EXTENSION: &str = "libmeta";

/// Reads a `.libmeta` file into its library entries.
pub fn load_libmeta(path: impl AsRef<Path>) -> Result<Vec<LibraryMeta>, ConfigError> {
    let document: MetaConfigurationDocument = super::load_document(path.as_ref())?;
    Ok(document
        .library
        .iter()
        .map(|library| LibraryMeta {
            name: library.name.clone(),
            files: library.file.iter().map(|f| f.path.clone()).collect(),
            component_includes: include_paths(&library.component_includes),
            type_includes: include_paths(&library.type_includes),
        })
        .collect())
}

/// Reads a `.compmeta` file into its component entries.
pub fn load_compmeta(path: impl AsRef<Path>) -> Result<Vec<ComponentMeta>, ConfigError> {
    let document: MetaConfigurationDocument = super::load_document(path.as_ref())?;
    Ok(document
        .component
        .iter()
        .map(|component| ComponentMeta {
            name: component.name.clone(),
            program_includes: include_paths(&component.program_includes),
            ports: port_metas(&component.ports),
        })
        .collect())
}

/// Reads a `.progmeta` file into its program entries.
pub fn load_progmeta(path: impl AsRef<Path>) -> Result<Vec<ProgramMeta>, ConfigError> {
    let document: MetaConfigurationDocument = super::load_document(path.as_ref())?;
    Ok(document
        .program
        .iter()
        .map(|program| ProgramMeta {
            name: program.name.clone(),
            ports: port_metas(&program.ports),
        })
        .collect())
}

/// Reads a `.typemeta` file into its data type declarations.
pub fn load_typemeta(path: impl AsRef<Path>) -> Result<Vec<TypeDefinition>, ConfigError> {
    let document: MetaConfigurationDocument = super::load_document(path.as_ref())?;
    Ok(document
        .types
        .iter()
        .flat_map(|types| types.type_decl.iter())
        .map(type_definition)
        .collect())
}

/// Lists the interface of every program reachable from a project meta
/// configuration.
///
/// Follows the full include chain meta config → library → component →
/// program. Each resulting [`Node`] is keyed `library.component.program`.
/// A missing file anywhere in the chain fails the whole read.
pub fn load_programs(path: impl AsRef<Path>) -> Result<Vec<Node>, ConfigError> {
    let path = path.as_ref();
    let document: MetaConfigurationDocument = super::load_document(path)?;
    let base = parent_dir(path);

    let mut programs = Vec::new();
    for includes in &document.meta_includes {
        for include in &includes.meta_include {
            for libmeta_path in libmeta_files(&base.join(&include.path))? {
                collect_library_programs(&libmeta_path, &mut programs)?;
            }
        }
    }
    Ok(programs)
}

/// Lists every data type reachable from a project meta configuration,
/// following the library-level `TypeIncludes`.
pub fn load_types(path: impl AsRef<Path>) -> Result<Vec<TypeDefinition>, ConfigError> {
    let path = path.as_ref();
    let document: MetaConfigurationDocument = super::load_document(path)?;
    let base = parent_dir(path);

    let mut types = Vec::new();
    for includes in &document.meta_includes {
        for include in &includes.meta_include {
            for libmeta_path in libmeta_files(&base.join(&include.path))? {
                collect_library_types(&libmeta_path, &mut types)?;
            }
        }
    }
    Ok(types)
}

fn collect_library_programs(
    libmeta_path: &Path,
    programs: &mut Vec<Node>,
) -> Result<(), ConfigError> {
    let document: MetaConfigurationDocument = super::load_document(libmeta_path)?;
    let base = parent_dir(libmeta_path);

    for library in &document.library {
        for includes in &library.component_includes {
            for include in &includes.include {
                collect_component_programs(&base.join(&include.path), &library.name, programs)?;
            }
        }
    }
    Ok(())
}

fn collect_component_programs(
    compmeta_path: &Path,
    library_name: &str,
    programs: &mut Vec<Node>,
) -> Result<(), ConfigError> {
    let document: MetaConfigurationDocument = super::load_document(compmeta_path)?;
    let base = parent_dir(compmeta_path);

    for component in &document.component {
        for includes in &component.program_includes {
            for include in &includes.include {
                collect_program_nodes(
                    &base.join(&include.path),
                    library_name,
                    &component.name,
                    programs,
                )?;
            }
        }
    }
    Ok(())
}

fn collect_program_nodes(
    progmeta_path: &Path,
    library_name: &str,
    component_name: &str,
    programs: &mut Vec<Node>,
) -> Result<(), ConfigError> {
    let document: MetaConfigurationDocument = super::load_document(progmeta_path)?;

    for program in &document.program {
        let mut node = Node::new(
            format!("{}.{}.{}", library_name, component_name, program.name),
            program.name.clone(),
        );

        for ports in &program.ports {
            for port in &ports.port {
                let entry = Port {
                    port_id: port.name.clone(),
                    text: port.name.clone(),
                    type_name: port_type(port),
                };
                match port.kind.as_str() {
                    "Input" => node.left.push(entry),
                    "Output" => node.right.push(entry),
                    _ => {}
                }
            }
        }
        programs.push(node);
    }
    Ok(())
}

fn collect_library_types(
    libmeta_path: &Path,
    types: &mut Vec<TypeDefinition>,
) -> Result<(), ConfigError> {
    let document: MetaConfigurationDocument = super::load_document(libmeta_path)?;
    let base = parent_dir(libmeta_path);

    for library in &document.library {
        for includes in &library.type_includes {
            for include in &includes.include {
                types.extend(load_typemeta(base.join(&include.path))?);
            }
        }
    }
    Ok(())
}

/// Finds the `.libmeta` files in an include directory. The meta
/// configuration only names the directory, not the file names.
fn libmeta_files(dir: &Path) -> Result<Vec<PathBuf>, ConfigError> {
    let pattern = dir.join(format!("*.{}", LIBMETA_EXTENSION));
    let mut files = Vec::new();
    for entry in glob::glob(&pattern.to_string_lossy())? {
        files.push(entry?);
    }
    // Deterministic join order regardless of directory iteration order.
    files.sort();
    Ok(files)
}

fn parent_dir(path: &Path) -> PathBuf {
    path.parent().unwrap_or_else(|| Path::new("")).to_path_buf()
}

fn include_paths(lists: &[IncludeList]) -> Vec<String> {
    lists
        .iter()
        .flat_map(|list| list.include.iter())
        .map(|include| include.path.clone())
        .collect()
}

fn port_metas(lists: &[PortList]) -> Vec<PortMeta> {
    lists
        .iter()
        .flat_map(|list| list.port.iter())
        .map(|port| PortMeta {
            name: port.name.clone(),
            type_name: port.type_name.clone(),
            kind: port.kind.clone(),
            dimensions: normalized_dimensions(port),
        })
        .collect()
}

fn type_definition(decl: &TypeDecl) -> TypeDefinition {
    TypeDefinition {
        name: decl.name.clone(),
        namespace: decl.namespace.clone(),
        fields: decl
            .fields
            .iter()
            .flat_map(|list| list.field.iter())
            .map(|field| TypeField {
                name: field.name.clone(),
                type_name: field.type_name.clone(),
                dimensions: match field.dimensions.as_deref() {
                    Some(d) if !d.is_empty() && d != "1" => Some(d.to_string()),
                    _ => None,
                },
            })
            .collect(),
    }
}

/// The display type of a port: the base type, suffixed `[N]` when the port
/// is an array. `dimensions` wins over the legacy `multiplicity` attribute;
/// an empty value and `1` both mean scalar.
fn port_type(port: &PortDecl) -> String {
    match normalized_dimensions(port) {
        Some(d) => format!("{}[{}]", port.type_name, d),
        None => port.type_name.clone(),
    }
}

fn normalized_dimensions(port: &PortDecl) -> Option<String> {
    match port
        .dimensions
        .as_deref()
        .or(port.multiplicity.as_deref())
    {
        Some(d) if !d.is_empty() && d != "1" => Some(d.to_string()),
        _ => None,
    }
}
