//! In-crate fakes for service tests.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::application::{
    ApplicationError,
    ports::{Filesystem, TemplateRenderer, TemplateStore},
};
use crate::domain::{
    Generator, ProjectStructure, RenderContext, ResolvedTemplate, TemplateContent, TemplateId,
};
use crate::error::SkatekitResult;

pub const ROOT: &str = "/work/project";

#[derive(Default)]
pub struct FakeFs {
    pub files: Mutex<BTreeMap<PathBuf, String>>,
    pub writes: Mutex<Vec<PathBuf>>,
}

impl FakeFs {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn seed(&self, relative: &str, content: &str) {
        self.files
            .lock()
            .unwrap()
            .insert(Path::new(ROOT).join(relative), content.to_string());
    }

    pub fn read(&self, relative: &str) -> Option<String> {
        self.files
            .lock()
            .unwrap()
            .get(&Path::new(ROOT).join(relative))
            .cloned()
    }

    pub fn write_count(&self) -> usize {
        self.writes.lock().unwrap().len()
    }
}

impl Filesystem for FakeFs {
    fn create_dir_all(&self, _path: &Path) -> SkatekitResult<()> {
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> SkatekitResult<()> {
        self.writes.lock().unwrap().push(path.to_path_buf());
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn read_file(&self, path: &Path) -> SkatekitResult<String> {
        self.files
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| {
                ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "not found".into(),
                }
                .into()
            })
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }
}

pub struct FakeStore(pub HashMap<TemplateId, String>);

impl FakeStore {
    /// Minimal sources for every required template.
    pub fn complete() -> Arc<Self> {
        Arc::new(Self(sources()))
    }

    pub fn without(path: &str) -> Arc<Self> {
        let mut map = sources();
        map.retain(|id, _| id.to_string() != path);
        Arc::new(Self(map))
    }
}

fn sources() -> HashMap<TemplateId, String> {
    let mut map = HashMap::new();
    let mut put = |generator, path: &str, source: &str| {
        map.insert(TemplateId::new(generator, path), source.to_string());
    };

    put(
        Generator::Component,
        "component.js",
        "export default class {{COMPONENT_CLASS}} extends Component {}\n",
    );
    put(Generator::Component, "styles.scss", ":host {}\n");
    put(
        Generator::Component,
        "test.js",
        "describe('{{COMPONENT_NAME}} component', function() {});\n",
    );
    put(
        Generator::Component,
        "index.js",
        "import * as skate from 'skatejs';\n\
         import {{COMPONENT_CLASS}} from './components/{{COMPONENT_NAME}}/component.js';\n\
         \n\
         const { define } = skate;\n\
         \n\
         define({{COMPONENT_CLASS}});\n",
    );
    put(
        Generator::App,
        "package.json",
        r#"{ "version": "0.0.0", "description": "default", "license": "MIT" }"#,
    );
    put(
        Generator::App,
        "README.md",
        "# {{PROJECT_NAME}}\n{{PROJECT_DESCRIPTION}}\n{{AUTHOR_LINE}}\n",
    );
    put(Generator::App, "gitignore", "node_modules\n");
    put(Generator::App, "src/util/style.js", "export default `{{raw}}`;\n");
    put(Generator::App, "webpack/development.js", "// dev\n");
    put(Generator::App, "webpack/production.js", "// prod\n");
    put(Generator::App, "demo/index.html", "<{{COMPONENT_NAME}}></{{COMPONENT_NAME}}>\n");

    map
}

impl TemplateStore for FakeStore {
    fn get(&self, id: &TemplateId) -> SkatekitResult<String> {
        self.0.get(id).cloned().ok_or_else(|| {
            ApplicationError::TemplateNotFound { id: id.to_string() }.into()
        })
    }

    fn list(&self) -> SkatekitResult<Vec<TemplateId>> {
        Ok(self.0.keys().cloned().collect())
    }
}

pub struct PlainRenderer;

impl TemplateRenderer for PlainRenderer {
    fn render(
        &self,
        templates: &[ResolvedTemplate],
        context: &RenderContext,
        output_root: &Path,
    ) -> SkatekitResult<ProjectStructure> {
        let mut structure = ProjectStructure::new(output_root);
        for t in templates {
            let content = match t.spec.content {
                TemplateContent::Literal => t.source.clone(),
                TemplateContent::Parameterized => context.render(&t.source),
            };
            structure.add_file(t.spec.destination_for(context)?.as_path(), content);
        }
        Ok(structure)
    }
}
