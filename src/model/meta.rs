// src/model/meta.rs

//! Model structs for `MetaConfigurationDocument` files.
//!
//! The same root element serves four file kinds: the project meta
//! configuration (`.meta.config`, carrying `<MetaIncludes>`), library
//! metadata (`.libmeta`, `<Library>`), component metadata (`.compmeta`,
//! `<Component>`), program metadata (`.progmeta`, `<Program>`) and type
//! metadata (`.typemeta`, `<Types>`). A single struct with defaulted
//! collections covers all of them.

use serde::Deserialize;

#[derive(Debug, Deserialize, Default)]
pub struct MetaConfigurationDocument {
    #[serde(rename = "MetaIncludes", default)]
    pub meta_includes: Vec<MetaIncludes>,

    #[serde(rename = "Library", default)]
    pub library: Vec<Library>,

    #[serde(rename = "Component", default)]
    pub component: Vec<Component>,

    #[serde(rename = "Program", default)]
    pub program: Vec<Program>,

    #[serde(rename = "Types", default)]
    pub types: Vec<Types>,
}

#[derive(Debug, Deserialize, Default)]
pub struct MetaIncludes {
    #[serde(rename = "MetaInclude", default)]
    pub meta_include: Vec<Include>,
}

/// A `<MetaInclude>` or `<Include>` path reference, always relative to the
/// directory of the referencing file.
#[derive(Debug, Deserialize)]
pub struct Include {
    #[serde(rename = "@path")]
    pub path: String,
}

#[derive(Debug, Deserialize)]
pub struct Library {
    #[serde(rename = "@name")]
    pub name: String,

    #[serde(rename = "File", default)]
    pub file: Vec<Include>,

    #[serde(rename = "ComponentIncludes", default)]
    pub component_includes: Vec<IncludeList>,

    #[serde(rename = "TypeIncludes", default)]
    pub type_includes: Vec<IncludeList>,
}

#[derive(Debug, Deserialize, Default)]
pub struct IncludeList {
    #[serde(rename = "Include", default)]
    pub include: Vec<Include>,
}

#[derive(Debug, Deserialize)]
pub struct Component {
    #[serde(rename = "@name")]
    pub name: String,

    #[serde(rename = "ProgramIncludes", default)]
    pub program_includes: Vec<IncludeList>,

    #[serde(rename = "Ports", default)]
    pub ports: Vec<PortList>,
}

#[derive(Debug, Deserialize)]
pub struct Program {
    #[serde(rename = "@name")]
    pub name: String,

    #[serde(rename = "Ports", default)]
    pub ports: Vec<PortList>,
}

#[derive(Debug, Deserialize, Default)]
pub struct PortList {
    #[serde(rename = "Port", default)]
    pub port: Vec<PortDecl>,
}

#[derive(Debug, Deserialize)]
pub struct PortDecl {
    #[serde(rename = "@name")]
    pub name: String,

    #[serde(rename = "@type")]
    pub type_name: String,

    /// `Input` or `Output`.
    #[serde(rename = "@kind", default)]
    pub kind: String,

    #[serde(rename = "@multiplicity", default)]
    pub multiplicity: Option<String>,

    #[serde(rename = "@dimensions", default)]
    pub dimensions: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct Types {
    #[serde(rename = "Type", default)]
    pub type_decl: Vec<TypeDecl>,
}

#[derive(Debug, Deserialize)]
pub struct TypeDecl {
    #[serde(rename = "@name")]
    pub name: String,

    #[serde(rename = "@namespace", default)]
    pub namespace: Option<String>,

    #[serde(rename = "Fields", default)]
    pub fields: Vec<FieldList>,
}

#[derive(Debug, Deserialize, Default)]
pub struct FieldList {
    #[serde(rename = "Field", default)]
    pub field: Vec<FieldDecl>,
}

#[derive(Debug, Deserialize)]
pub struct FieldDecl {
    #[serde(rename = "@name")]
    pub name: String,

    #[serde(rename = "@type")]
    pub type_name: String,

    #[serde(rename = "@dimensions", default)]
    pub dimensions: Option<String>,
}
