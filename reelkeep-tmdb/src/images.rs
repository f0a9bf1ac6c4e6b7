//! Image CDN URL construction.

/// Which kind of artwork a path refers to. Each has its own size ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Poster,
    Backdrop,
    Profile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageSize {
    Small,
    #[default]
    Medium,
    Large,
    Original,
}

impl ImageKind {
    /// CDN size segment for this kind at `size`.
    pub fn size_segment(self, size: ImageSize) -> &'static str {
        match (self, size) {
            (_, ImageSize::Original) => "original",
            (ImageKind::Poster, ImageSize::Small) => "w185",
            (ImageKind::Poster, ImageSize::Medium) => "w342",
            (ImageKind::Poster, ImageSize::Large) => "w500",
            (ImageKind::Backdrop, ImageSize::Small) => "w300",
            (ImageKind::Backdrop, ImageSize::Medium) => "w780",
            (ImageKind::Backdrop, ImageSize::Large) => "w1280",
            (ImageKind::Profile, ImageSize::Small) => "w45",
            (ImageKind::Profile, ImageSize::Medium) => "w185",
            (ImageKind::Profile, ImageSize::Large) => "h632",
        }
    }
}

/// Full URL for an image path, or `None` when the item has no artwork.
pub fn image_url(
    base_url: &str,
    path: Option<&str>,
    kind: ImageKind,
    size: ImageSize,
) -> Option<String> {
    let path = path.filter(|p| !p.is_empty())?;
    Some(format!("{}{}{}", base_url, kind.size_segment(size), path))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://image.tmdb.org/t/p/";

    #[test]
    fn poster_sizes() {
        assert_eq!(
            image_url(BASE, Some("/abc.jpg"), ImageKind::Poster, ImageSize::Medium).as_deref(),
            Some("https://image.tmdb.org/t/p/w342/abc.jpg")
        );
        assert_eq!(
            image_url(BASE, Some("/abc.jpg"), ImageKind::Poster, ImageSize::Small).as_deref(),
            Some("https://image.tmdb.org/t/p/w185/abc.jpg")
        );
    }

    #[test]
    fn backdrop_and_profile_sizes() {
        assert_eq!(ImageKind::Backdrop.size_segment(ImageSize::Large), "w1280");
        assert_eq!(ImageKind::Profile.size_segment(ImageSize::Large), "h632");
        assert_eq!(ImageKind::Profile.size_segment(ImageSize::Original), "original");
    }

    #[test]
    fn missing_path_has_no_url() {
        assert_eq!(image_url(BASE, None, ImageKind::Poster, ImageSize::Large), None);
        assert_eq!(image_url(BASE, Some(""), ImageKind::Poster, ImageSize::Large), None);
    }
}
