mod common;

use common::TestContext;
use confsweep::error::Error;
use confsweep::template::{has_section_headers, Template};
use std::fs;

#[test]
fn test_has_section_headers() {
    assert!(has_section_headers("[run]\na = 1\n"));
    assert!(has_section_headers("a = 1\n[run]\n"));
    assert!(!has_section_headers("a = 1\n  [indented]\n"));
}

#[test]
fn test_load_rewrites_sectioned_booleans_in_place() {
    let ctx = TestContext::new();
    let path = ctx.write_template("[opts]\nflag = true\nname = \"x\"\n");

    let template = Template::load(&path).unwrap();
    let on_disk = fs::read_to_string(&path).unwrap();
    assert_eq!(on_disk, "[opts]\nflag = \"true\"\nname = \"\"x\"\"\n");

    let values: Vec<_> = template.records().map(|r| r.value.to_string()).collect();
    assert_eq!(values, vec!["\"true\"", "\"\"x\"\""]);
}

#[test]
fn test_load_is_idempotent() {
    let ctx = TestContext::new();
    let path = ctx.write_template("[opts]\nflag = false\nmode = a b\n");

    let first = Template::load(&path).unwrap();
    let after_first = fs::read_to_string(&path).unwrap();
    let second = Template::load(&path).unwrap();
    let after_second = fs::read_to_string(&path).unwrap();

    assert_eq!(after_first, after_second);
    assert_eq!(first, second);
}

#[test]
fn test_load_leaves_flat_templates_untouched() {
    let ctx = TestContext::new();
    let content = "flag = true\nname = \"x\"\n";
    let path = ctx.write_template(content);

    let template = Template::load(&path).unwrap();
    assert!(!template.is_sectioned());
    assert_eq!(fs::read_to_string(&path).unwrap(), content);
}

#[test]
fn test_load_missing_template() {
    let ctx = TestContext::new();
    match Template::load(ctx.root().join("nope.txt")) {
        Err(Error::TemplateNotFound { path }) => assert!(path.ends_with("nope.txt")),
        other => panic!("Expected TemplateNotFound, got {:?}", other),
    }
}

#[test]
fn test_load_directory_is_read_error() {
    let ctx = TestContext::new();
    match Template::load(ctx.root()) {
        Err(Error::ReadError { path, .. }) => assert_eq!(path, ctx.root()),
        other => panic!("Expected ReadError, got {:?}", other),
    }
}

#[cfg(unix)]
#[test]
fn test_load_read_only_sectioned_template_is_write_error() {
    use std::fs::OpenOptions;
    use std::os::unix::fs::PermissionsExt;

    let ctx = TestContext::new();
    let path = ctx.write_template("[opts]\nflag = true\n");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o444)).unwrap();

    // Privileged users can write read-only files.
    if OpenOptions::new().write(true).open(&path).is_ok() {
        return;
    }

    match Template::load(&path) {
        Err(Error::WriteError { path: failed, .. }) => assert_eq!(failed, path),
        other => panic!("Expected WriteError, got {:?}", other),
    }
    assert_eq!(fs::read_to_string(&path).unwrap(), "[opts]\nflag = true\n");
}
