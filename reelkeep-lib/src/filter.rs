//! Client-side narrowing of catalog listings.

use reelkeep_core::MediaItem;

/// Genre and minimum-score filter applied to listing results.
///
/// Items without genre data are never excluded by the genre filter. A
/// minimum score of zero is the same as no minimum.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MediaFilter {
    pub genre: Option<u32>,
    pub min_rating: Option<f32>,
}

impl MediaFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_genre(mut self, genre: Option<u32>) -> Self {
        self.genre = genre;
        self
    }

    pub fn with_min_rating(mut self, min_rating: Option<f32>) -> Self {
        self.min_rating = min_rating;
        self
    }

    pub fn is_active(&self) -> bool {
        self.genre.is_some() || self.min_rating.is_some_and(|r| r > 0.0)
    }

    pub fn matches(&self, item: &MediaItem) -> bool {
        let genre_ok = match (self.genre, item.genre_ids.as_deref()) {
            (None, _) | (_, None) => true,
            (Some(g), Some(ids)) => ids.contains(&g),
        };
        let rating_ok = match self.min_rating {
            None => true,
            Some(min) if min == 0.0 => true,
            Some(min) => item.vote_average >= min,
        };
        genre_ok && rating_ok
    }

    /// Keep matching items, in order.
    pub fn apply(&self, items: impl IntoIterator<Item = MediaItem>) -> Vec<MediaItem> {
        items.into_iter().filter(|i| self.matches(i)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reelkeep_core::MediaKind;

    fn item(id: u64, genres: Option<&[u32]>, vote: f32) -> MediaItem {
        let item = MediaItem::new(MediaKind::Movie, id, format!("#{id}")).with_vote_average(vote);
        match genres {
            Some(g) => item.with_genre_ids(g.to_vec()),
            None => item,
        }
    }

    #[test]
    fn no_filter_keeps_everything() {
        let items = vec![item(1, None, 0.0), item(2, Some(&[18]), 9.0)];
        assert!(!MediaFilter::new().is_active());
        assert_eq!(MediaFilter::new().apply(items.clone()), items);
    }

    #[test]
    fn genre_filter_passes_items_without_genres() {
        let filter = MediaFilter::new().with_genre(Some(18));
        assert!(filter.matches(&item(1, Some(&[28, 18]), 5.0)));
        assert!(!filter.matches(&item(2, Some(&[28]), 5.0)));
        assert!(filter.matches(&item(3, None, 5.0)));
        // Present but empty genre list is real data and does not match.
        assert!(!filter.matches(&item(4, Some(&[]), 5.0)));
    }

    #[test]
    fn min_rating_is_inclusive_and_zero_disables() {
        let filter = MediaFilter::new().with_min_rating(Some(7.0));
        assert!(filter.matches(&item(1, None, 7.0)));
        assert!(!filter.matches(&item(2, None, 6.9)));

        let zero = MediaFilter::new().with_min_rating(Some(0.0));
        assert!(!zero.is_active());
        assert!(zero.matches(&item(3, None, 0.0)));
    }

    #[test]
    fn both_filters_must_pass_and_order_is_kept() {
        let filter = MediaFilter::new().with_genre(Some(18)).with_min_rating(Some(6.0));
        let items = vec![
            item(1, Some(&[18]), 8.0),
            item(2, Some(&[18]), 5.0),
            item(3, Some(&[35]), 9.0),
            item(4, None, 6.5),
        ];
        let kept: Vec<u64> = filter.apply(items).iter().map(|i| i.id).collect();
        assert_eq!(kept, vec![1, 4]);
    }
}
