use super::*;

#[test]
fn movie_endpoints() {
    assert_eq!(ListCategory::Popular.endpoint(MediaKind::Movie), "/movie/popular");
    assert_eq!(ListCategory::TopRated.endpoint(MediaKind::Movie), "/movie/top_rated");
    assert_eq!(ListCategory::Trending.endpoint(MediaKind::Movie), "/trending/movie/week");
    assert_eq!(ListCategory::Current.endpoint(MediaKind::Movie), "/movie/now_playing");
}

#[test]
fn series_endpoints() {
    assert_eq!(ListCategory::Popular.endpoint(MediaKind::Series), "/tv/popular");
    assert_eq!(ListCategory::TopRated.endpoint(MediaKind::Series), "/tv/top_rated");
    assert_eq!(ListCategory::Trending.endpoint(MediaKind::Series), "/trending/tv/week");
    assert_eq!(ListCategory::Current.endpoint(MediaKind::Series), "/tv/on_the_air");
}

#[test]
fn category_names_round_trip() {
    for &category in ListCategory::all() {
        let parsed: ListCategory = category.short_name().parse().unwrap();
        assert_eq!(parsed, category);
    }
}

#[test]
fn category_aliases() {
    assert_eq!("top_rated".parse::<ListCategory>().unwrap(), ListCategory::TopRated);
    assert_eq!("Now-Playing".parse::<ListCategory>().unwrap(), ListCategory::Current);
    assert_eq!("on_the_air".parse::<ListCategory>().unwrap(), ListCategory::Current);
    assert!("upcoming".parse::<ListCategory>().is_err());
}

#[test]
fn per_key_paths() {
    assert_eq!(details_path(MediaKey::movie(550)), "/movie/550");
    assert_eq!(details_path(MediaKey::series(1399)), "/tv/1399");
    assert_eq!(similar_path(MediaKey::series(1399)), "/tv/1399/similar");
    assert_eq!(credits_path(MediaKey::movie(550)), "/movie/550/credits");
    assert_eq!(videos_path(MediaKey::series(1399)), "/tv/1399/videos");
    assert_eq!(search_path(MediaKind::Series), "/search/tv");
    assert_eq!(genres_path(MediaKind::Movie), "/genre/movie/list");
}
