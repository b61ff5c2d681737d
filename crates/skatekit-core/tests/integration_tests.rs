//! Integration tests for skatekit-core's public domain API.

use skatekit_core::{
    domain::{AGGREGATOR_PATH, Registration},
    prelude::*,
};

fn unit(name: &str) -> UnitName {
    UnitName::parse(name).unwrap()
}

#[test]
fn seed_then_register_many() {
    // What a fresh project's seed renders to for its main component.
    let seed = "import * as skate from 'skatejs';\n\
                {{IMPORT}}\n\
                \n\
                const { define } = skate;\n\
                \n\
                define({{COMPONENT_CLASS}});\n";
    let main = unit("x-app");
    let rendered = RenderContext::for_unit(&main)
        .with_variable("IMPORT", UnitEntry::for_unit(&main).import_statement())
        .render(seed);

    let mut file = AggregatorFile::parse(&rendered);
    for name in ["x-header", "x-footer", "x-header"] {
        file.register(UnitEntry::for_unit(&unit(name))).unwrap();
    }

    assert_eq!(file.registrations(), vec!["XApp", "XHeader", "XFooter"]);
    let paths: Vec<_> = file.entries().iter().map(|e| e.import_path.clone()).collect();
    assert_eq!(
        paths,
        vec![
            "./components/x-app/component.js",
            "./components/x-header/component.js",
            "./components/x-footer/component.js",
        ]
    );
}

#[test]
fn rendering_registered_file_is_stable() {
    let mut file = AggregatorFile::parse("");
    file.register(UnitEntry::for_unit(&unit("x-foo"))).unwrap();
    let once = file.render();

    let mut again = AggregatorFile::parse(&once);
    assert_eq!(
        again.register(UnitEntry::for_unit(&unit("x-foo"))).unwrap(),
        Registration::AlreadyPresent
    );
    assert_eq!(again.render(), once);
}

#[test]
fn manifest_for_collected_project() {
    let config = ProjectConfig::new(
        unit("x-widget"),
        UnitMetadata::new()
            .with_author_name(Some("Ada".into()))
            .with_author_email(Some("ada@example.com".into())),
    );

    let mut manifest =
        ProjectManifest::from_template(r#"{"license":"MIT","description":"d","version":"1.0.0"}"#)
            .unwrap();
    manifest.merge_project(&config);
    let json = manifest.to_canonical_json().unwrap();

    assert_eq!(
        json,
        "{\n  \"name\": \"x-widget\",\n  \"version\": \"1.0.0\",\n  \"description\": \"d\",\n  \"license\": \"MIT\",\n  \"author\": {\n    \"name\": \"Ada\",\n    \"email\": \"ada@example.com\"\n  }\n}\n"
    );
}

#[test]
fn aggregator_lives_under_src() {
    assert_eq!(AGGREGATOR_PATH, "src/index.js");
    assert!(
        TemplateSet::component()
            .required_templates()
            .contains(&TemplateId::aggregator_seed())
    );
}
