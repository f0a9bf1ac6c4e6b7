use super::*;

#[test]
fn kind_names_round_trip() {
    for &kind in MediaKind::all() {
        let parsed: MediaKind = kind.as_str().parse().unwrap();
        assert_eq!(parsed, kind);
    }
}

#[test]
fn kind_aliases_resolve() {
    let cases = [
        ("tv", MediaKind::Series),
        ("TV", MediaKind::Series),
        ("show", MediaKind::Series),
        ("film", MediaKind::Movie),
        ("Movie", MediaKind::Movie),
    ];
    for (input, expected) in cases {
        let parsed: MediaKind = input.parse().unwrap();
        assert_eq!(parsed, expected, "alias '{}' should parse to {:?}", input, expected);
    }
}

#[test]
fn unknown_kind_rejected() {
    assert!("podcast".parse::<MediaKind>().is_err());
}

#[test]
fn key_display_and_parse() {
    let key = MediaKey::series(1399);
    assert_eq!(key.to_string(), "series:1399");
    assert_eq!("series:1399".parse::<MediaKey>().unwrap(), key);
    assert_eq!("tv:1399".parse::<MediaKey>().unwrap(), key);
}

#[test]
fn bare_numeric_key_reads_as_movie() {
    assert_eq!("101".parse::<MediaKey>().unwrap(), MediaKey::movie(101));
}

#[test]
fn malformed_keys_rejected() {
    assert!("movie:".parse::<MediaKey>().is_err());
    assert!("movie:abc".parse::<MediaKey>().is_err());
    assert!("movie:0".parse::<MediaKey>().is_err());
    assert!("book:12".parse::<MediaKey>().is_err());
}

#[test]
fn same_id_different_kind_are_distinct_keys() {
    assert_ne!(MediaKey::movie(7), MediaKey::series(7));
}

#[test]
fn key_serializes_as_map_key() {
    let mut map = std::collections::BTreeMap::new();
    map.insert(MediaKey::movie(101), 4);
    map.insert(MediaKey::series(101), 2);
    let json = serde_json::to_string(&map).unwrap();
    assert_eq!(json, r#"{"movie:101":4,"series:101":2}"#);

    let back: std::collections::BTreeMap<MediaKey, i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, map);
}

#[test]
fn item_serialization_shape() {
    let item = MediaItem::new(MediaKind::Movie, 101, "Heat")
        .with_poster("/heat.jpg")
        .with_vote_average(7.5)
        .with_genre_ids(vec![80, 18]);

    let json = serde_json::to_value(&item).unwrap();
    assert_eq!(json["kind"], "movie");
    assert_eq!(json["id"], 101);
    assert_eq!(json["title"], "Heat");
    assert_eq!(json["posterPath"], "/heat.jpg");
    assert_eq!(json["voteAverage"], 7.5);
    assert_eq!(json["genreIds"], serde_json::json!([80, 18]));
    assert!(json.get("releaseDate").is_none());
}

#[test]
fn item_tolerates_missing_optional_fields() {
    let item: MediaItem =
        serde_json::from_str(r#"{"kind":"series","id":5,"title":"Show"}"#).unwrap();
    assert_eq!(item.key(), MediaKey::series(5));
    assert_eq!(item.poster_path, None);
    assert_eq!(item.genre_ids, None);
}

#[test]
fn year_from_release_date() {
    let item = MediaItem::new(MediaKind::Movie, 1, "X").with_release_date("1995-12-15");
    assert_eq!(item.year(), Some("1995"));
    let item = MediaItem::new(MediaKind::Movie, 1, "X").with_release_date("");
    assert_eq!(item.year(), None);
}

#[test]
fn details_genre_names() {
    let details = MediaDetails::new(
        MediaItem::new(MediaKind::Movie, 1, "X"),
        vec![Genre::new(18, "Drama"), Genre::new(28, "Action")],
    );
    assert_eq!(details.genre_names(), "Drama, Action");
    assert_eq!(details.key(), MediaKey::movie(1));
}
