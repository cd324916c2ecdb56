//! Fixture helpers shared by the CLI unit tests.

use camino::{Utf8Path, Utf8PathBuf};

pub(super) struct CatalogFixture {
    _guard: tempfile::TempDir,
    pub(super) dir: Utf8PathBuf,
}

pub(super) fn write_file(dir: &Utf8Path, name: &str, contents: &str) {
    std::fs::write(dir.join(name).as_std_path(), contents)
        .expect("test fixture file should write");
}

/// A small catalog with two items and one category.
pub(super) fn catalog_fixture() -> CatalogFixture {
    let guard = tempfile::tempdir().expect("temp dir should create");
    let dir = Utf8PathBuf::from_path_buf(guard.path().to_path_buf())
        .expect("temp dir path should be UTF-8");
    write_file(
        &dir,
        "index.json",
        r#"{"items": [
            {"slug": "tea-house", "title": "Tea house",
             "main_category": "relax", "tags": ["calm", "indoor"]},
            {"slug": "rope-park", "title": "Rope park",
             "main_category": "relax", "tags": ["action", "outdoor"]}
        ]}"#,
    );
    write_file(
        &dir,
        "categories.json",
        r#"{"categories": [{"slug": "relax", "title": "Relax", "order": 1}]}"#,
    );
    CatalogFixture { _guard: guard, dir }
}
