use super::*;
use reelkeep_core::MediaKey;

const POPULAR_MOVIES: &str = r#"{
  "page": 1,
  "results": [
    {
      "adult": false,
      "backdrop_path": "/bd.jpg",
      "genre_ids": [28, 80],
      "id": 949,
      "original_language": "en",
      "overview": "Obsessive master thief...",
      "popularity": 61.3,
      "poster_path": "/heat.jpg",
      "release_date": "1995-12-15",
      "title": "Heat",
      "vote_average": 7.9,
      "vote_count": 7000
    },
    {
      "id": 12,
      "title": "Unreleased",
      "poster_path": null,
      "release_date": "",
      "vote_average": 0
    }
  ],
  "total_pages": 500,
  "total_results": 10000
}"#;

#[test]
fn movie_page_converts_to_items() {
    let resp: PageResponse<MovieSummary> = serde_json::from_str(POPULAR_MOVIES).unwrap();
    let page = resp.into_page(MediaItem::from);

    assert_eq!(page.page, 1);
    assert_eq!(page.total_pages, 500);
    assert_eq!(page.results.len(), 2);

    let heat = &page.results[0];
    assert_eq!(heat.key(), MediaKey::movie(949));
    assert_eq!(heat.title, "Heat");
    assert_eq!(heat.poster_path.as_deref(), Some("/heat.jpg"));
    assert_eq!(heat.genre_ids, Some(vec![28, 80]));
    assert_eq!(heat.year(), Some("1995"));

    let unreleased = &page.results[1];
    assert_eq!(unreleased.release_date, None);
    assert_eq!(unreleased.poster_path, None);
    assert_eq!(unreleased.genre_ids, None);
}

#[test]
fn tv_summary_takes_name_and_first_air_date() {
    let json = r#"{"id": 1399, "name": "Game of Thrones", "first_air_date": "2011-04-17",
                   "vote_average": 8.4, "genre_ids": [18, 10765], "poster_path": "/got.jpg"}"#;
    let item: MediaItem = serde_json::from_str::<TvSummary>(json).unwrap().into();
    assert_eq!(item.kind, MediaKind::Series);
    assert_eq!(item.title, "Game of Thrones");
    assert_eq!(item.release_date.as_deref(), Some("2011-04-17"));
}

#[test]
fn movie_details_convert_with_genres() {
    let json = r#"{
        "id": 550, "title": "Fight Club", "poster_path": "/fc.jpg", "vote_average": 8.4,
        "release_date": "1999-10-15", "runtime": 139, "status": "Released",
        "tagline": "Mischief. Mayhem. Soap.", "overview": "A ticking-time-bomb insomniac...",
        "genres": [{"id": 18, "name": "Drama"}, {"id": 53, "name": "Thriller"}],
        "budget": 63000000
    }"#;
    let details: MediaDetails = serde_json::from_str::<MovieDetailsResponse>(json)
        .unwrap()
        .into();
    assert_eq!(details.key(), MediaKey::movie(550));
    assert_eq!(details.genres.len(), 2);
    assert_eq!(details.genre_names(), "Drama, Thriller");
    assert_eq!(details.item.genre_ids, Some(vec![18, 53]));
    assert_eq!(details.runtime_minutes, Some(139));
    assert_eq!(details.season_count, None);
}

#[test]
fn tv_details_convert_with_counts() {
    let json = r#"{
        "id": 1396, "name": "Breaking Bad", "first_air_date": "2008-01-20",
        "number_of_seasons": 5, "number_of_episodes": 62, "tagline": "",
        "genres": [{"id": 18, "name": "Drama"}]
    }"#;
    let details: MediaDetails = serde_json::from_str::<TvDetailsResponse>(json)
        .unwrap()
        .into();
    assert_eq!(details.key(), MediaKey::series(1396));
    assert_eq!(details.season_count, Some(5));
    assert_eq!(details.episode_count, Some(62));
    assert_eq!(details.tagline, None);
    assert_eq!(details.runtime_minutes, None);
}

#[test]
fn empty_page() {
    let page: Page<MediaItem> = Page::empty();
    assert_eq!(page.page, 1);
    assert!(page.results.is_empty());
    assert_eq!(page.total_pages, 0);
    assert_eq!(page.total_results, 0);
}

#[test]
fn genre_list_parses() {
    let json = r#"{"genres":[{"id":28,"name":"Action"},{"id":12,"name":"Adventure"}]}"#;
    let list: GenreListResponse = serde_json::from_str(json).unwrap();
    assert_eq!(list.genres[1], Genre::new(12, "Adventure"));
}

#[test]
fn trailer_is_first_youtube_trailer() {
    let videos: Vec<Video> = serde_json::from_str(
        r#"[
            {"key":"t1","name":"Teaser","site":"YouTube","type":"Teaser"},
            {"key":"v1","name":"Trailer","site":"Vimeo","type":"Trailer"},
            {"key":"y1","name":"Official Trailer","site":"YouTube","type":"Trailer","official":true},
            {"key":"y2","name":"Trailer 2","site":"YouTube","type":"Trailer"}
        ]"#,
    )
    .unwrap();
    let trailer = find_trailer(&videos).unwrap();
    assert_eq!(trailer.key, "y1");
    assert!(trailer.official);
    assert_eq!(
        trailer.youtube_url().as_deref(),
        Some("https://www.youtube.com/watch?v=y1")
    );
    assert_eq!(videos[1].youtube_url(), None);
    assert_eq!(find_trailer(&videos[..2]), None);
}
