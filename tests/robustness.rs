// tests/robustness.rs

//! Error handling and edge cases: missing files, malformed XML, dangling
//! relations, and documents with absent optional collections.

use plcnext_config::{
    ConfigError, connections_from_str, io_modules_from_str, load_connections, load_esm_config,
    load_esm_forest, load_io_modules, load_program_instances,
};
use std::fs;
use std::path::PathBuf;

const EMPTY_ESM: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<EsmConfigurationDocument schemaVersion="1.0" />"#;

const ONE_TASK_ESM: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<EsmConfigurationDocument schemaVersion="1.0">
  <Tasks>
    <CyclicTask name="MainTask" cycleTime="10000" />
  </Tasks>
  <EsmTaskRelations>
    <EsmTaskRelation esmName="ESM1" taskName="GhostTask" />
  </EsmTaskRelations>
</EsmConfigurationDocument>"#;

const GHOST_PROGRAM_ESM: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<EsmConfigurationDocument schemaVersion="1.0">
  <Tasks>
    <CyclicTask name="MainTask" />
  </Tasks>
  <Programs>
    <Program name="Instance" componentName="Unknown1" programType="P" />
  </Programs>
  <TaskProgramRelations>
    <TaskProgramRelation taskName="MainTask" programName="Other/Ghost" />
  </TaskProgramRelations>
</EsmConfigurationDocument>"#;

const EMPTY_ACF: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<AcfConfigurationDocument schemaVersion="1.0" />"#;

/// Writes fixture content into a temp directory and returns the paths.
fn write_files(files: &[(&str, &str)]) -> (tempfile::TempDir, Vec<PathBuf>) {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let paths = files
        .iter()
        .map(|(name, content)| {
            let path = dir.path().join(name);
            fs::write(&path, content).expect("failed to write fixture");
            path
        })
        .collect();
    (dir, paths)
}

#[test]
fn missing_file_fails_with_the_offending_path() {
    let result = load_io_modules("/nonexistent/project.tic");
    match result {
        Err(ConfigError::Io { path, .. }) => {
            assert_eq!(path, PathBuf::from("/nonexistent/project.tic"));
        }
        other => panic!("expected Io error, got {:?}", other),
    }

    assert!(matches!(
        load_connections("/nonexistent/project.gds.config"),
        Err(ConfigError::Io { .. })
    ));
}

#[test]
fn malformed_xml_fails_with_a_parsing_error() {
    let (_dir, paths) = write_files(&[("broken.esm.config", "<EsmConfigurationDocument><Tasks>")]);
    assert!(matches!(
        load_esm_config(&paths[0]),
        Err(ConfigError::XmlParsing(_))
    ));

    assert!(matches!(
        io_modules_from_str("not xml at all"),
        Err(ConfigError::XmlParsing(_))
    ));
}

#[test]
fn esm_document_without_collections_is_valid_empty() {
    let (_dir, paths) = write_files(&[
        ("empty.esm.config", EMPTY_ESM),
        ("empty.acf.config", EMPTY_ACF),
    ]);

    let config = load_esm_config(&paths[0]).unwrap();
    assert!(config.tasks.is_empty());
    assert!(config.esm_task_relations.is_empty());
    assert!(config.programs.is_empty());
    assert!(config.task_program_relations.is_empty());

    // The forest still contains its three fixed roots.
    let forest = load_esm_forest(&paths[0], &paths[1]).unwrap();
    assert_eq!(forest.len(), 3);
}

#[test]
fn dangling_task_relation_fails_loudly() {
    let (_dir, paths) = write_files(&[
        ("ghost.esm.config", ONE_TASK_ESM),
        ("empty.acf.config", EMPTY_ACF),
    ]);

    match load_esm_forest(&paths[0], &paths[1]) {
        Err(ConfigError::DanglingReference { kind, key }) => {
            assert_eq!(kind, "task");
            assert_eq!(key, "GhostTask");
        }
        other => panic!("expected DanglingReference, got {:?}", other),
    }
}

#[test]
fn dangling_program_relation_fails_loudly() {
    let (_dir, paths) = write_files(&[
        ("ghost.esm.config", GHOST_PROGRAM_ESM),
        ("empty.acf.config", EMPTY_ACF),
    ]);

    match load_esm_forest(&paths[0], &paths[1]) {
        Err(ConfigError::DanglingReference { kind, key }) => {
            assert_eq!(kind, "program");
            assert_eq!(key, "Other/Ghost");
        }
        other => panic!("expected DanglingReference, got {:?}", other),
    }
}

#[test]
fn instance_with_undeclared_component_is_skipped() {
    let (_dir, paths) = write_files(&[
        ("ghost.esm.config", GHOST_PROGRAM_ESM),
        ("empty.acf.config", EMPTY_ACF),
    ]);

    // The ACF declares no components, so the one instance is dropped.
    let instances = load_program_instances(&paths[1], &paths[0]).unwrap();
    assert!(instances.is_empty());
}

#[test]
fn tic_without_elements_yields_no_modules() {
    let modules = io_modules_from_str("<TIC></TIC>").unwrap();
    assert!(modules.is_empty());
}

#[test]
fn endpoint_without_separator_does_not_fail() {
    let xml = r#"
        <GdsConfigurationDocument schemaVersion="1.0">
          <Connectors>
            <Connector startPort="NoSeparator" endPort="Node:Port:Extra"/>
          </Connectors>
        </GdsConfigurationDocument>"#;
    let connections = connections_from_str(xml).unwrap();
    assert_eq!(connections.len(), 1);
    assert_eq!(connections[0].from, "NoSeparator");
    assert_eq!(connections[0].from_port, "");
    assert_eq!(connections[0].to, "Node");
    assert_eq!(connections[0].to_port, "Port:Extra");
}
