#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]

//! Behavioural coverage for the modification-time keyed catalog cache.

use std::cell::RefCell;
use std::fs::File;
use std::time::{Duration, SystemTime};

use camino::{Utf8Path, Utf8PathBuf};
use outing_catalog::CatalogCache;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

/// Aggregate fixtures shared across the BDD scenarios.
pub struct TestContext {
    _dir: tempfile::TempDir,
    index_path: Utf8PathBuf,
    cache: CatalogCache,
    item_count: RefCell<usize>,
}

#[fixture]
/// Build a fresh `TestContext` with an empty catalog directory.
pub fn context() -> TestContext {
    let dir = tempfile::tempdir().expect("temp dir should create");
    let index_path = Utf8PathBuf::from_path_buf(dir.path().join("index.json"))
        .expect("temp path should be UTF-8");
    TestContext {
        cache: CatalogCache::new(index_path.clone()),
        _dir: dir,
        index_path,
        item_count: RefCell::new(0),
    }
}

fn write_index(path: &Utf8Path, slugs: &[&str]) {
    let items: Vec<serde_json::Value> = slugs
        .iter()
        .map(|slug| serde_json::json!({ "slug": slug, "title": slug }))
        .collect();
    let body = serde_json::json!({ "items": items }).to_string();
    std::fs::write(path.as_std_path(), body).expect("index fixture should write");
}

fn bump_mtime(path: &Utf8Path) {
    let file = File::options()
        .write(true)
        .open(path.as_std_path())
        .expect("index file should open for touching");
    let later = SystemTime::now() + Duration::from_secs(5);
    file.set_modified(later).expect("mtime should update");
}

fn take_snapshot(context: &TestContext) {
    let catalog = context
        .cache
        .snapshot()
        .expect("snapshot should be served");
    *context.item_count.borrow_mut() = catalog.len();
}

#[given("a catalog directory with one item")]
fn catalog_with_one_item(context: &TestContext) {
    write_index(&context.index_path, &["museum-night"]);
    take_snapshot(context);
}

#[when("the index is republished with a second item")]
fn republish_with_second_item(context: &TestContext) {
    write_index(&context.index_path, &["museum-night", "river-swim"]);
    bump_mtime(&context.index_path);
    take_snapshot(context);
}

#[when("the index is republished with corrupt contents")]
fn republish_corrupt(context: &TestContext) {
    std::fs::write(context.index_path.as_std_path(), "{broken")
        .expect("corrupt write should succeed");
    bump_mtime(&context.index_path);
    take_snapshot(context);
}

#[then("the snapshot contains two items")]
fn assert_two_items(context: &TestContext) {
    assert_eq!(*context.item_count.borrow(), 2);
}

#[then("the snapshot still contains one item")]
fn assert_one_item(context: &TestContext) {
    assert_eq!(*context.item_count.borrow(), 1);
}

#[scenario(path = "tests/features/catalog_cache.feature", index = 0)]
fn republished_content_is_picked_up(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/catalog_cache.feature", index = 1)]
fn corrupt_republish_keeps_snapshot(context: TestContext) {
    let _ = context;
}
