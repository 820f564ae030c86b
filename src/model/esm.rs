// src/model/esm.rs

//! Model structs for `EsmConfigurationDocument` files.
//!
//! Only `<CyclicTask>` entries are recognized under `<Tasks>`; the schema
//! defines other task kinds, but those are out of scope for this reader.

use serde::Deserialize;

#[derive(Debug, Deserialize, Default)]
pub struct EsmConfigurationDocument {
    #[serde(rename = "Tasks", default)]
    pub tasks: Vec<Tasks>,

    #[serde(rename = "EsmTaskRelations", default)]
    pub esm_task_relations: Vec<EsmTaskRelations>,

    #[serde(rename = "Programs", default)]
    pub programs: Vec<Programs>,

    #[serde(rename = "TaskProgramRelations", default)]
    pub task_program_relations: Vec<TaskProgramRelations>,
}

#[derive(Debug, Deserialize, Default)]
pub struct Tasks {
    #[serde(rename = "CyclicTask", default)]
    pub cyclic_task: Vec<CyclicTaskDecl>,
}

#[derive(Debug, Deserialize)]
pub struct CyclicTaskDecl {
    #[serde(rename = "@name")]
    pub name: String,

    #[serde(rename = "@cycleTime", default)]
    pub cycle_time: Option<String>,

    #[serde(rename = "@priority", default)]
    pub priority: Option<String>,

    #[serde(rename = "@stackSize", default)]
    pub stack_size: Option<String>,

    #[serde(rename = "@watchdogTime", default)]
    pub watchdog_time: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct EsmTaskRelations {
    #[serde(rename = "EsmTaskRelation", default)]
    pub esm_task_relation: Vec<EsmTaskRelationDecl>,
}

#[derive(Debug, Deserialize)]
pub struct EsmTaskRelationDecl {
    #[serde(rename = "@esmName")]
    pub esm_name: String,

    #[serde(rename = "@taskName")]
    pub task_name: String,
}

#[derive(Debug, Deserialize, Default)]
pub struct Programs {
    #[serde(rename = "Program", default)]
    pub program: Vec<ProgramDecl>,
}

#[derive(Debug, Deserialize)]
pub struct ProgramDecl {
    #[serde(rename = "@name")]
    pub name: String,

    #[serde(rename = "@componentName")]
    pub component_name: String,

    #[serde(rename = "@programType", default)]
    pub program_type: String,
}

#[derive(Debug, Deserialize, Default)]
pub struct TaskProgramRelations {
    #[serde(rename = "TaskProgramRelation", default)]
    pub task_program_relation: Vec<TaskProgramRelationDecl>,
}

#[derive(Debug, Deserialize)]
pub struct TaskProgramRelationDecl {
    #[serde(rename = "@taskName")]
    pub task_name: String,

    #[serde(rename = "@programName")]
    pub program_name: String,

    #[serde(rename = "@order", default)]
    pub order: Option<String>,
}
