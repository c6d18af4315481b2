use std::fs;
use std::path::Path;

use expected_templates::registry::{Entry, Registry};
use expected_templates::resource::ResourcePath;
use expected_templates::templates::{FileConfig, TemplateId, TemplateSource};
use expected_templates::verification::{CheckError, verify_all};
use tempfile::TempDir;

#[test]
fn ensure_templates_are_existing() {
    for template in TemplateId::all() {
        let path = template
            .path()
            .unwrap_or_else(|| panic!("{} has no resource path", template));
        // the string form must resolve to the same readable resource
        let fresh: ResourcePath = path
            .to_string()
            .parse()
            .unwrap_or_else(|e| panic!("{}: {}", template, e));
        fresh
            .read_to_string()
            .unwrap_or_else(|e| panic!("{}: {}", template, e));
    }
}

#[test]
fn predefined_registry_verifies() {
    let registry = Registry::predefined(&TemplateSource::Embedded);
    let verified = verify_all(&registry).unwrap();
    assert_eq!(verified.len(), TemplateId::all().len());
    assert!(verified.iter().all(|v| v.bytes > 0));
}

fn copy_packaged_templates(root: &Path) {
    for template in TemplateId::all() {
        let target = root.join(template.resource_name());
        fs::create_dir_all(target.parent().unwrap()).unwrap();
        let content = template.path().unwrap().read_to_string().unwrap();
        fs::write(target, content).unwrap();
    }
}

#[test]
fn directory_copy_of_templates_verifies() {
    let temp_dir = TempDir::new().unwrap();
    copy_packaged_templates(temp_dir.path());

    let registry = Registry::predefined(&TemplateSource::Directory(temp_dir.path().to_path_buf()));
    assert!(verify_all(&registry).is_ok());
}

#[test]
fn directory_with_removed_template_fails_at_that_template() {
    let temp_dir = TempDir::new().unwrap();
    copy_packaged_templates(temp_dir.path());

    let source = TemplateSource::Directory(temp_dir.path().to_path_buf());
    let registry = Registry::predefined(&source);
    let removed = TemplateId::XrayHttpExpectedTrace;
    fs::remove_file(temp_dir.path().join(removed.resource_name())).unwrap();

    let err = verify_all(&registry).unwrap_err();
    assert!(matches!(err, CheckError::Unreadable { .. }));
    assert_eq!(err.id(), removed.name());
}

#[test]
fn unresolved_identifier_fails_before_later_entries() {
    let registry = Registry::from_entries([
        Entry::new("a", TemplateId::DefaultExpectedMetric.path()),
        Entry::new("d", None),
        Entry::new(
            "never-reached",
            Some(ResourcePath::Embedded("missing.mustache".to_string())),
        ),
    ]);

    let err = verify_all(&registry).unwrap_err();
    assert!(matches!(err, CheckError::MissingResolution { .. }));
    assert_eq!(err.id(), "d");
}

#[cfg(target_os = "linux")]
#[test]
fn directory_with_non_utf8_name_verifies() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join(OsStr::from_bytes(b"tpl\xff"));
    copy_packaged_templates(&root);

    let registry = Registry::predefined(&TemplateSource::Directory(root));
    assert!(registry.entries().iter().all(|e| e.path.is_some()));
    let verified = verify_all(&registry).unwrap();
    assert_eq!(verified.len(), TemplateId::all().len());
    assert!(verified.iter().all(|v| v.locator.contains("tpl%FF")));
}
