// src/reader/esm.rs

//! Readers for the task scheduling configuration (ESM) and the component
//! instance configuration (ACF).

use crate::error::ConfigError;
use crate::model::acf::AcfConfigurationDocument;
use crate::model::esm::EsmConfigurationDocument;
use crate::types::{
    CyclicTask, EsmConfiguration, EsmElement, EsmTaskRelation, ProgramDeclaration,
    ProgramInstance, TaskProgramRelation,
};
use log::{debug, warn};
use std::collections::HashMap;
use std::path::Path;

/// Reads an ESM configuration into a flat snapshot, scheduling attributes
/// preserved verbatim.
pub fn load_esm_config(path: impl AsRef<Path>) -> Result<EsmConfiguration, ConfigError> {
    let document: EsmConfigurationDocument = super::load_document(path.as_ref())?;

    Ok(EsmConfiguration {
        tasks: document
            .tasks
            .iter()
            .flat_map(|tasks| tasks.cyclic_task.iter())
            .map(|task| CyclicTask {
                name: task.name.clone(),
                cycle_time: task.cycle_time.clone(),
                priority: task.priority.clone(),
                stack_size: task.stack_size.clone(),
                watchdog_time: task.watchdog_time.clone(),
            })
            .collect(),
        esm_task_relations: document
            .esm_task_relations
            .iter()
            .flat_map(|relations| relations.esm_task_relation.iter())
            .map(|relation| EsmTaskRelation {
                esm_name: relation.esm_name.clone(),
                task_name: relation.task_name.clone(),
            })
            .collect(),
        programs: document
            .programs
            .iter()
            .flat_map(|programs| programs.program.iter())
            .map(|program| ProgramDeclaration {
                name: program.name.clone(),
                component_name: program.component_name.clone(),
                program_type: program.program_type.clone(),
            })
            .collect(),
        task_program_relations: document
            .task_program_relations
            .iter()
            .flat_map(|relations| relations.task_program_relation.iter())
            .map(|relation| TaskProgramRelation {
                task_name: relation.task_name.clone(),
                program_name: relation.program_name.clone(),
                order: relation.order.clone(),
            })
            .collect(),
    })
}

/// Builds the combined scheduling forest from an ESM configuration and the
/// matching ACF configuration.
///
/// The result is a flat element list forming the hierarchy
/// PLCnext → {ESM1, ESM2} → tasks → program instances. A relation naming an
/// undeclared task or program fails the read with
/// [`ConfigError::DanglingReference`].
pub fn load_esm_forest(
    esm_path: impl AsRef<Path>,
    acf_path: impl AsRef<Path>,
) -> Result<Vec<EsmElement>, ConfigError> {
    let acf: AcfConfigurationDocument = super::load_document(acf_path.as_ref())?;
    let lineages = component_types(&acf);

    let document: EsmConfigurationDocument = super::load_document(esm_path.as_ref())?;

    let mut elements = vec![
        EsmElement::root("PLCnext"),
        EsmElement::child("ESM1", "PLCnext"),
        EsmElement::child("ESM2", "PLCnext"),
    ];
    let mut index: HashMap<String, usize> = elements
        .iter()
        .enumerate()
        .map(|(position, element)| (element.key.clone(), position))
        .collect();

    for tasks in &document.tasks {
        for task in &tasks.cyclic_task {
            index.insert(task.name.clone(), elements.len());
            elements.push(EsmElement {
                key: task.name.clone(),
                name: task.name.clone(),
                parent: None,
            });
        }
    }

    for relations in &document.esm_task_relations {
        for relation in &relations.esm_task_relation {
            let position =
                *index
                    .get(&relation.task_name)
                    .ok_or_else(|| ConfigError::DanglingReference {
                        kind: "task",
                        key: relation.task_name.clone(),
                    })?;
            elements[position].parent = Some(relation.esm_name.clone());
        }
    }

    for programs in &document.programs {
        for program in &programs.program {
            match lineages.get(&program.component_name) {
                Some(lineage) => debug!(
                    "program instance {}/{} runs {}.{}",
                    program.component_name, program.name, lineage, program.program_type
                ),
                None => debug!(
                    "program instance {}/{} has no component declared in the ACF configuration",
                    program.component_name, program.name
                ),
            }

            let key = format!("{}/{}", program.component_name, program.name);
            index.insert(key.clone(), elements.len());
            elements.push(EsmElement {
                key,
                name: program.name.clone(),
                parent: None,
            });
        }
    }

    for relations in &document.task_program_relations {
        for relation in &relations.task_program_relation {
            let position =
                *index
                    .get(&relation.program_name)
                    .ok_or_else(|| ConfigError::DanglingReference {
                        kind: "program",
                        key: relation.program_name.clone(),
                    })?;
            elements[position].parent = Some(relation.task_name.clone());
        }
    }

    Ok(elements)
}

/// Lists the program instances of an ESM configuration, with the component
/// type lineage of each instance resolved from the ACF configuration.
///
/// An instance whose component is not declared in the ACF configuration is
/// skipped.
pub fn load_program_instances(
    acf_path: impl AsRef<Path>,
    esm_path: impl AsRef<Path>,
) -> Result<Vec<ProgramInstance>, ConfigError> {
    let acf: AcfConfigurationDocument = super::load_document(acf_path.as_ref())?;
    let lineages = component_types(&acf);

    let document: EsmConfigurationDocument = super::load_document(esm_path.as_ref())?;

    let mut instances = Vec::new();
    for programs in &document.programs {
        for program in &programs.program {
            let Some(lineage) = lineages.get(&program.component_name) else {
                warn!(
                    "skipping program instance {}/{}: component not in ACF configuration",
                    program.component_name, program.name
                );
                continue;
            };
            instances.push(ProgramInstance {
                category: format!("{}.{}", lineage, program.program_type),
                key: format!("{}/{}", program.component_name, program.name),
                name: program.name.clone(),
            });
        }
    }
    Ok(instances)
}

/// Maps each declared component instance name to its `library.type` lineage.
fn component_types(document: &AcfConfigurationDocument) -> HashMap<String, String> {
    let mut types = HashMap::new();
    for components in &document.components {
        for component in &components.component {
            types.insert(
                component.name.clone(),
                format!("{}.{}", component.library, component.type_name),
            );
        }
    }
    types
}
