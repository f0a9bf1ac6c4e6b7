use std::fs;

use reelkeep_core::{MediaItem, MediaKey, MediaKind};
use reelkeep_store::*;
use tempfile::TempDir;

fn open(tmp: &TempDir) -> KvStore {
    KvStore::open_dir(tmp.path(), Some(DEFAULT_QUOTA_BYTES)).unwrap()
}

#[test]
fn collections_survive_reopen() {
    let tmp = TempDir::new().unwrap();
    {
        let store = open(&tmp);
        let mut favorites = ItemSet::favorites(store.clone());
        favorites.add(MediaItem::new(MediaKind::Movie, 101, "Heat").with_genre_ids(vec![80]));
        favorites.add(MediaItem::new(MediaKind::Series, 202, "The Wire"));
        let mut ratings = Ratings::load(store.clone());
        ratings.set(MediaKey::movie(101), 4).unwrap();
        let mut reviews = Reviews::reviews(store);
        reviews.set(MediaKey::series(202), "All the pieces matter".to_string());
    }

    let store = open(&tmp);
    let favorites = ItemSet::favorites(store.clone());
    assert_eq!(favorites.len(), 2);
    assert_eq!(favorites.items()[0].title, "Heat");
    assert_eq!(favorites.items()[0].genre_ids, Some(vec![80]));
    assert_eq!(favorites.items()[1].kind, MediaKind::Series);

    let ratings = Ratings::load(store.clone());
    assert_eq!(ratings.get(MediaKey::movie(101)).unwrap().value(), 4);
    let reviews = Reviews::reviews(store);
    assert_eq!(
        reviews.get(MediaKey::series(202)).map(String::as_str),
        Some("All the pieces matter")
    );
}

#[test]
fn document_shapes_on_disk() {
    let tmp = TempDir::new().unwrap();
    let store = open(&tmp);
    let mut ratings = Ratings::load(store.clone());
    ratings.set(MediaKey::movie(101), 4).unwrap();
    ratings.set(MediaKey::series(202), 5).unwrap();
    let mut reviews = Reviews::reviews(store.clone());
    reviews.set(MediaKey::movie(101), "tense".to_string());
    let mut watchlist = ItemSet::watchlist(store);
    watchlist.add(MediaItem::new(MediaKind::Movie, 9, "Nine"));

    let raw = fs::read_to_string(tmp.path().join("movie_ratings.json")).unwrap();
    assert_eq!(raw, r#"{"movie:101":4,"series:202":5}"#);
    let raw = fs::read_to_string(tmp.path().join("movie_reviews.json")).unwrap();
    assert_eq!(raw, r#"{"movie:101":"tense"}"#);
    let raw: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(tmp.path().join("movie_watchlist.json")).unwrap())
            .unwrap();
    assert!(raw.is_array());
    assert_eq!(raw[0]["kind"], "movie");
    assert_eq!(raw[0]["id"], 9);
}

#[test]
fn corrupt_document_loads_as_empty() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("movie_favorites.json"), "[{oops").unwrap();
    let favorites = ItemSet::favorites(open(&tmp));
    assert!(favorites.is_empty());
}

#[test]
fn bad_entries_skipped_individually() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("movie_ratings.json"),
        r#"{"101": 4, "series:5": 9, "nonsense": 3, "series:6": 2}"#,
    )
    .unwrap();
    fs::write(
        tmp.path().join("movie_favorites.json"),
        r#"[{"kind":"movie","id":1,"title":"A"},{"id":2},{"kind":"movie","id":1,"title":"dup"}]"#,
    )
    .unwrap();

    let store = open(&tmp);
    let ratings = Ratings::load(store.clone());
    assert_eq!(ratings.len(), 2);
    // Legacy bare id reads as a movie
    assert_eq!(ratings.get(MediaKey::movie(101)).unwrap().value(), 4);
    assert_eq!(ratings.get(MediaKey::series(6)).unwrap().value(), 2);
    assert!(!ratings.contains(MediaKey::series(5)));

    let favorites = ItemSet::favorites(store);
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites.items()[0].title, "A");
}

#[test]
fn quota_fault_keeps_memory_state_but_not_disk() {
    let tmp = TempDir::new().unwrap();
    let store = KvStore::open_dir(tmp.path(), Some(128)).unwrap();
    let mut favorites = ItemSet::favorites(store);

    favorites.add(MediaItem::new(MediaKind::Movie, 1, "Short"));
    favorites.add(MediaItem::new(
        MediaKind::Movie,
        2,
        "A title long enough to push the document past the quota",
    ));
    // In-session state reflects both adds
    assert_eq!(favorites.len(), 2);

    // The second write was dropped; a reload only sees the first
    let reloaded = ItemSet::favorites(KvStore::open_dir(tmp.path(), None).unwrap());
    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded.items()[0].id, 1);
}

#[test]
fn entries_from_newer_schema_survive_writes() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("schema.json"), r#"{"version":2}"#).unwrap();
    fs::write(
        tmp.path().join("movie_favorites.json"),
        r#"[{"kind":"movie","id":1,"title":"A"},{"kind":"documentary","id":2,"title":"Newer"}]"#,
    )
    .unwrap();
    fs::write(
        tmp.path().join("movie_ratings.json"),
        r#"{"movie:1":4,"documentary:2":5,"series:3":9}"#,
    )
    .unwrap();

    let store = open(&tmp);
    assert_eq!(store.check_schema(), 2);

    let mut favorites = ItemSet::favorites(store.clone());
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites.unreadable_len(), 1);
    favorites.add(MediaItem::new(MediaKind::Movie, 3, "C"));

    let raw: serde_json::Value = serde_json::from_str(
        &fs::read_to_string(tmp.path().join("movie_favorites.json")).unwrap(),
    )
    .unwrap();
    let entries = raw.as_array().unwrap();
    assert_eq!(entries.len(), 3);
    assert!(entries.iter().any(|e| e["kind"] == "documentary" && e["title"] == "Newer"));

    let mut ratings = Ratings::load(store.clone());
    assert_eq!(ratings.len(), 1);
    assert_eq!(ratings.unreadable_len(), 2);
    ratings.set(MediaKey::movie(7), 3).unwrap();
    let raw = fs::read_to_string(tmp.path().join("movie_ratings.json")).unwrap();
    assert_eq!(
        raw,
        r#"{"documentary:2":5,"movie:1":4,"movie:7":3,"series:3":9}"#
    );

    // Overwriting an unreadable value with a valid one replaces it
    ratings.set(MediaKey::series(3), 2).unwrap();
    let reloaded = Ratings::load(store.clone());
    assert_eq!(reloaded.get(MediaKey::series(3)).unwrap().value(), 2);
    assert_eq!(reloaded.unreadable_len(), 1);

    // Clearing a set drops hidden entries too
    favorites.clear();
    let reloaded = ItemSet::favorites(store);
    assert!(reloaded.is_empty());
    assert_eq!(reloaded.unreadable_len(), 0);
}

#[test]
fn legacy_and_composite_keys_collapse_to_composite() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("movie_reviews.json"),
        r#"{"101":"old","movie:101":"new"}"#,
    )
    .unwrap();

    let mut reviews = Reviews::reviews(open(&tmp));
    assert_eq!(reviews.len(), 1);
    assert_eq!(
        reviews.get(MediaKey::movie(101)).map(String::as_str),
        Some("new")
    );

    reviews.set(MediaKey::series(5), "ok".to_string());
    let raw = fs::read_to_string(tmp.path().join("movie_reviews.json")).unwrap();
    assert_eq!(raw, r#"{"movie:101":"new","series:5":"ok"}"#);
}
