// src/types.rs

//! Public output types, shaped for the graphical editor.
//!
//! Serialization of these types produces the flat JSON structures the editor
//! consumes: nodes with `leftArray`/`rightArray` port lists, edges with
//! `from`/`to` endpoints, and tree elements with `key`/`name`/`parent`.

use serde::{Deserialize, Serialize};

// --- Graph shapes ---

/// A logical unit with named input and output ports: a hardware module,
/// a program type, or a built-in global object.
///
/// `key` is unique within one result list and used as a join key by the
/// editor. `left` holds the inputs, `right` the outputs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    pub key: String,
    pub name: String,

    #[serde(rename = "leftArray")]
    pub left: Vec<Port>,

    #[serde(rename = "rightArray")]
    pub right: Vec<Port>,
}

impl Node {
    pub fn new(key: impl Into<String>, name: impl Into<String>) -> Self {
        Node {
            key: key.into(),
            name: name.into(),
            left: Vec::new(),
            right: Vec::new(),
        }
    }
}

/// A single named, typed terminal on a [`Node`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Port {
    #[serde(rename = "portId")]
    pub port_id: String,

    pub text: String,

    #[serde(rename = "type")]
    pub type_name: String,
}

impl Port {
    /// A port whose display text equals its id.
    pub fn new(id: impl Into<String>, type_name: impl Into<String>) -> Self {
        let id = id.into();
        Port {
            text: id.clone(),
            port_id: id,
            type_name: type_name.into(),
        }
    }
}

/// A directed wire from one node's output port to another node's input port.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    pub from: String,
    pub to: String,

    #[serde(rename = "fromPort")]
    pub from_port: String,

    #[serde(rename = "toPort")]
    pub to_port: String,
}

// --- Scheduling forest ---

/// One element of the ESM configuration forest.
///
/// The forest is flattened into a list; `parent` names the key of the
/// logical parent and is absent on roots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EsmElement {
    pub key: String,
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
}

impl EsmElement {
    pub(crate) fn root(key: &str) -> Self {
        EsmElement {
            key: key.to_string(),
            name: key.to_string(),
            parent: None,
        }
    }

    pub(crate) fn child(key: &str, parent: &str) -> Self {
        EsmElement {
            parent: Some(parent.to_string()),
            ..EsmElement::root(key)
        }
    }
}

/// A program instance declared in an ESM configuration, with its component
/// type lineage resolved from the ACF configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgramInstance {
    /// `library.type.programType` of the owning component instance.
    pub category: String,

    /// `componentName/programName`.
    pub key: String,

    pub name: String,
}

// --- Raw configuration snapshots ---

/// Structural copy of one `<Library>` entry of a `.libmeta` file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryMeta {
    pub name: String,

    /// Paths of the `<File>` entries.
    pub files: Vec<String>,

    /// Include paths to `.compmeta` files, relative to the `.libmeta` file.
    pub component_includes: Vec<String>,

    /// Include paths to `.typemeta` files, relative to the `.libmeta` file.
    pub type_includes: Vec<String>,
}

/// Structural copy of one `<Component>` entry of a `.compmeta` file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentMeta {
    pub name: String,

    /// Include paths to `.progmeta` files, relative to the `.compmeta` file.
    pub program_includes: Vec<String>,

    /// Component ports; empty when the component declares none.
    pub ports: Vec<PortMeta>,
}

/// Structural copy of one `<Program>` entry of a `.progmeta` file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramMeta {
    pub name: String,
    pub ports: Vec<PortMeta>,
}

/// One declared port of a program or component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PortMeta {
    pub name: String,

    #[serde(rename = "type")]
    pub type_name: String,

    /// `Input` or `Output`.
    pub kind: String,

    /// Array length; `None` for scalar ports. An empty `dimensions`
    /// attribute and a multiplicity of `1` both normalize to `None`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<String>,
}

/// One data type declared in a `.typemeta` file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDefinition {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    pub fields: Vec<TypeField>,
}

/// One field of a declared data type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeField {
    pub name: String,

    #[serde(rename = "type")]
    pub type_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<String>,
}

/// Flat snapshot of an ESM configuration, with all scheduling attributes
/// preserved verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EsmConfiguration {
    pub tasks: Vec<CyclicTask>,
    pub esm_task_relations: Vec<EsmTaskRelation>,
    pub programs: Vec<ProgramDeclaration>,
    pub task_program_relations: Vec<TaskProgramRelation>,
}

/// A declared cyclic task. Scheduling attributes are carried as the source
/// strings; absent attributes stay absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CyclicTask {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cycle_time: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack_size: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub watchdog_time: Option<String>,
}

/// Assignment of a task to an execution and synchronization manager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EsmTaskRelation {
    pub esm_name: String,
    pub task_name: String,
}

/// A program instance declaration inside an ESM configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramDeclaration {
    pub name: String,
    pub component_name: String,
    pub program_type: String,
}

/// Assignment of a program instance to a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskProgramRelation {
    pub task_name: String,
    pub program_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
}

/// Structural copy of a GDS configuration: the raw connector endpoint
/// strings, unsplit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GdsConfiguration {
    pub connectors: Vec<ConnectorEndpoints>,
}

/// One connector's `startPort`/`endPort` strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectorEndpoints {
    pub start_port: String,
    pub end_port: String,
}
