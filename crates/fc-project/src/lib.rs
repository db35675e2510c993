//! fc-project: declarative phase document format and validation.

pub mod schema;
pub mod validate;

pub use schema::*;
pub use validate::{ValidationError, validate_document};

use std::path::Path;

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// On-disk encoding of a phase document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Yaml,
    Json,
}

impl DocumentFormat {
    /// `.json` selects JSON; anything else is read as YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Yaml,
        }
    }
}

pub fn from_yaml_str(content: &str) -> ProjectResult<PhaseDocument> {
    let doc: PhaseDocument = serde_yaml::from_str(content)?;
    validate_document(&doc)?;
    Ok(doc)
}

pub fn from_json_str(content: &str) -> ProjectResult<PhaseDocument> {
    let doc: PhaseDocument = serde_json::from_str(content)?;
    validate_document(&doc)?;
    Ok(doc)
}

pub fn load_yaml(path: &Path) -> ProjectResult<PhaseDocument> {
    let content = std::fs::read_to_string(path)?;
    from_yaml_str(&content)
}

pub fn save_yaml(path: &Path, doc: &PhaseDocument) -> ProjectResult<()> {
    validate_document(doc)?;
    let content = serde_yaml::to_string(doc)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &Path) -> ProjectResult<PhaseDocument> {
    let content = std::fs::read_to_string(path)?;
    from_json_str(&content)
}

pub fn save_json(path: &Path, doc: &PhaseDocument) -> ProjectResult<()> {
    validate_document(doc)?;
    let content = serde_json::to_string_pretty(doc)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load a document, picking the format from the file extension.
pub fn load(path: &Path) -> ProjectResult<PhaseDocument> {
    match DocumentFormat::from_path(path) {
        DocumentFormat::Yaml => load_yaml(path),
        DocumentFormat::Json => load_json(path),
    }
}

/// Save a document, picking the format from the file extension.
pub fn save(path: &Path, doc: &PhaseDocument) -> ProjectResult<()> {
    match DocumentFormat::from_path(path) {
        DocumentFormat::Yaml => save_yaml(path, doc),
        DocumentFormat::Json => save_json(path, doc),
    }
}
