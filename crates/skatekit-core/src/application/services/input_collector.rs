//! Input Collector - turns answers into validated values.
//!
//! Values passed on the command line win; anything missing is asked through
//! the [`Prompter`] port. The collector never touches the filesystem.

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::{
    application::ports::{Prompter, Question},
    domain::{DomainValidator as validator, ProjectConfig, UnitMetadata, UnitName},
    error::SkatekitResult,
};

/// Values already known before prompting (usually CLI flags).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectInputs {
    pub component: Option<String>,
    pub description: Option<String>,
    pub author_name: Option<String>,
    pub author_email: Option<String>,
}

pub struct InputCollector {
    prompter: Arc<dyn Prompter>,
    default_author_name: Option<String>,
    default_author_email: Option<String>,
}

impl InputCollector {
    pub fn new(prompter: Arc<dyn Prompter>) -> Self {
        Self {
            prompter,
            default_author_name: None,
            default_author_email: None,
        }
    }

    /// Pre-fill the author questions (from configuration).
    pub fn with_author_defaults(mut self, name: Option<String>, email: Option<String>) -> Self {
        self.default_author_name = name;
        self.default_author_email = email;
        self
    }

    /// Name for a single component: the argument if given, else asked.
    #[instrument(skip(self))]
    pub fn collect_unit_name(&self, arg: Option<&str>) -> SkatekitResult<UnitName> {
        let raw = match arg {
            Some(name) => name.to_string(),
            None => self
                .prompter
                .ask(&Question::new("name", "What should we call the component?"))?
                .unwrap_or_default(),
        };

        Ok(validator::validate_unit_name(&raw)?)
    }

    /// `x-<dir>` unless the directory name already contains a hyphen.
    pub fn default_unit_name(project_dir_name: &str) -> String {
        UnitName::default_for_project(project_dir_name)
    }

    /// Everything needed to initialize a project in `project_dir_name`.
    ///
    /// The main component name is validated before any other question is
    /// asked.
    #[instrument(skip(self, inputs))]
    pub fn collect_project(
        &self,
        project_dir_name: &str,
        inputs: ProjectInputs,
    ) -> SkatekitResult<ProjectConfig> {
        let raw_name = match inputs.component {
            Some(name) => name,
            None => self
                .prompter
                .ask(
                    &Question::new("name", "What should we call the main component?")
                        .with_default(Some(Self::default_unit_name(project_dir_name))),
                )?
                .unwrap_or_default(),
        };
        let unit = validator::validate_unit_name(&raw_name)?;
        debug!(component = %unit, "Main component chosen");

        let description = self.answer(
            inputs.description,
            Question::new("description", "How would you describe this project?")
                .with_default(Some(format!("`{unit}` custom element"))),
        )?;
        let author_name = self.answer(
            inputs.author_name,
            Question::new("author_name", "What should we call you?")
                .with_default(self.default_author_name.clone()),
        )?;
        let author_email = self.answer(
            inputs.author_email,
            Question::new("author_email", "What is your email address?")
                .with_default(self.default_author_email.clone()),
        )?;

        let metadata = UnitMetadata::new()
            .with_description(description)
            .with_author_name(author_name)
            .with_author_email(author_email);

        Ok(ProjectConfig::new(unit, metadata))
    }

    fn answer(&self, given: Option<String>, question: Question) -> SkatekitResult<Option<String>> {
        match given {
            Some(value) => Ok(Some(value)),
            None => self.prompter.ask(&question),
        }
    }
}
