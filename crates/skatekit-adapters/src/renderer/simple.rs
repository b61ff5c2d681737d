//! Simple variable substitution renderer.

use std::path::Path;

use skatekit_core::{
    application::ports::TemplateRenderer,
    domain::{
        DomainValidator as validator, ProjectStructure, RenderContext, ResolvedTemplate,
        TemplateContent,
    },
    error::SkatekitResult,
};
use tracing::{instrument, trace};

/// Simple renderer using basic `{{VARIABLE}}` substitution.
pub struct SimpleRenderer;

impl SimpleRenderer {
    /// Create a new simple renderer.
    pub fn new() -> Self {
        Self
    }
}

impl Default for SimpleRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for SimpleRenderer {
    #[instrument(skip_all, fields(templates = templates.len()))]
    fn render(
        &self,
        templates: &[ResolvedTemplate],
        context: &RenderContext,
        output_root: &Path,
    ) -> SkatekitResult<ProjectStructure> {
        let mut structure = ProjectStructure::new(output_root);

        for template in templates {
            let destination = template.spec.destination_for(context)?;
            let content = match template.spec.content {
                TemplateContent::Literal => template.source.clone(),
                TemplateContent::Parameterized => context.render(&template.source),
            };
            trace!(template = %template.spec.template, %destination, "Rendered");
            structure.add_file(destination.as_path(), content);
        }

        // Validate final structure
        validator::validate_project_structure(&structure)?;

        Ok(structure)
    }
}
