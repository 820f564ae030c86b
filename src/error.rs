// src/error.rs

use quick_xml::errors::serialize::DeError;
use quick_xml::errors::serialize::SeError;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors that can occur while reading or writing a configuration file.
#[derive(Debug)]
pub enum ConfigError {
    /// A configuration file could not be opened or read.
    Io {
        path: PathBuf,
        source: io::Error,
    },

    /// An error from the underlying `quick-xml` deserializer.
    XmlParsing(DeError),

    /// An error from the underlying `quick-xml` serializer.
    XmlSerializing(SeError),

    /// A glob pattern built from an include path was invalid.
    Pattern(glob::PatternError),

    /// A relation referenced a task or program that was never declared.
    DanglingReference {
        kind: &'static str,
        key: String,
    },
}

impl From<DeError> for ConfigError {
    fn from(e: DeError) -> Self {
        ConfigError::XmlParsing(e)
    }
}

impl From<SeError> for ConfigError {
    fn from(e: SeError) -> Self {
        ConfigError::XmlSerializing(e)
    }
}

impl From<glob::PatternError> for ConfigError {
    fn from(e: glob::PatternError) -> Self {
        ConfigError::Pattern(e)
    }
}

impl From<glob::GlobError> for ConfigError {
    fn from(e: glob::GlobError) -> Self {
        let path = e.path().to_path_buf();
        ConfigError::Io {
            path,
            source: e.into_error(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "cannot read {}: {}", path.display(), source)
            }
            ConfigError::XmlParsing(e) => write!(f, "XML parsing error: {}", e),
            ConfigError::XmlSerializing(e) => write!(f, "XML serializing error: {}", e),
            ConfigError::Pattern(e) => write!(f, "invalid glob pattern: {}", e),
            ConfigError::DanglingReference { kind, key } => {
                write!(f, "relation references undeclared {}: {}", kind, key)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::XmlParsing(e) => Some(e),
            ConfigError::XmlSerializing(e) => Some(e),
            ConfigError::Pattern(e) => Some(e),
            ConfigError::DanglingReference { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ConfigError;

    #[test]
    fn test_from_de_error() {
        let xml_err = quick_xml::de::from_str::<()>("<a>").unwrap_err();
        let err: ConfigError = xml_err.into();
        assert!(matches!(err, ConfigError::XmlParsing(_)));
    }

    #[test]
    fn test_from_se_error() {
        let xml_err = quick_xml::errors::serialize::SeError::Custom("test error".to_string());
        let err: ConfigError = xml_err.into();
        assert!(matches!(err, ConfigError::XmlSerializing(_)));
    }

    #[test]
    fn test_from_pattern_error() {
        let pattern_err = glob::Pattern::new("a[").unwrap_err();
        let err: ConfigError = pattern_err.into();
        assert!(matches!(err, ConfigError::Pattern(_)));
    }

    #[test]
    fn test_dangling_reference_display() {
        let err = ConfigError::DanglingReference {
            kind: "task",
            key: "MainTask".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "relation references undeclared task: MainTask"
        );
    }
}
