use crate::domain::{
    entities::{ProjectStructure, TemplateSet},
    error::DomainError,
    value_objects::UnitName,
};

/// Centralized domain validation.
///
/// Services call these before touching the filesystem.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_unit_name(raw: &str) -> Result<UnitName, DomainError> {
        UnitName::parse(raw)
    }

    pub fn validate_template_set(set: &TemplateSet) -> Result<(), DomainError> {
        set.validate()
    }

    pub fn validate_project_structure(structure: &ProjectStructure) -> Result<(), DomainError> {
        structure.validate()
    }
}
