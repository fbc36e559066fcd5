use crate::url::Url;

/// Ordered list of image URLs with legacy compatibility.
///
/// Legacy records carry a single `image` scalar, current records an ordered
/// `images` list. The list is authoritative when present and non-empty,
/// otherwise the singleton is promoted. On write both representations stay
/// denormalized in sync: the scalar mirrors the first list entry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImageList(Vec<Url>);

impl ImageList {
    pub fn from_legacy_fields(images: Vec<Url>, image: Option<Url>) -> Self {
        if !images.is_empty() {
            Self(images)
        } else {
            Self(image.into_iter().collect())
        }
    }

    /// The denormalized scalar companion of the list (`images[0]`).
    pub fn primary(&self) -> Option<&Url> {
        self.0.first()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Url> {
        self.0.iter()
    }

    pub fn push(&mut self, url: Url) {
        self.0.push(url);
    }
}

impl From<Vec<Url>> for ImageList {
    fn from(from: Vec<Url>) -> Self {
        Self(from)
    }
}

impl From<ImageList> for Vec<Url> {
    fn from(from: ImageList) -> Self {
        from.0
    }
}

impl FromIterator<Url> for ImageList {
    fn from_iter<I: IntoIterator<Item = Url>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
