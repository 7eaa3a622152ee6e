//! Gallery discovery for the photo lightbox.
//!
//! The gallery is always rebuilt from the document on demand: the active
//! highlight panel can change between two lightbox openings, so nothing is
//! cached here.

use std::ops::Index;

/// One displayable photo.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImageRef {
    /// Image URL.
    pub src: String,
    /// Alternative text; may be empty.
    pub alt: String,
}

impl ImageRef {
    /// Image at `src` with alternative text `alt`.
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
        }
    }
}

/// Ordered photos of the active panel, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GallerySet {
    images: Vec<ImageRef>,
}

impl GallerySet {
    /// Gallery over `images` in order.
    pub fn new(images: Vec<ImageRef>) -> Self {
        Self { images }
    }

    /// Number of images.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Whether there are no images.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Image at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&ImageRef> {
        self.images.get(index)
    }

    /// Images in document order.
    pub fn iter(&self) -> impl Iterator<Item = &ImageRef> {
        self.images.iter()
    }

    /// Index after `index`, wrapping to the first image.
    pub fn next_index(&self, index: usize) -> Option<usize> {
        (!self.is_empty()).then(|| (index + 1) % self.len())
    }

    /// Index before `index`, wrapping to the last image.
    pub fn previous_index(&self, index: usize) -> Option<usize> {
        (!self.is_empty()).then(|| (index % self.len() + self.len() - 1) % self.len())
    }
}

impl Index<usize> for GallerySet {
    type Output = ImageRef;

    fn index(&self, index: usize) -> &ImageRef {
        &self.images[index]
    }
}

impl FromIterator<ImageRef> for GallerySet {
    fn from_iter<T: IntoIterator<Item = ImageRef>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Read access to the document's highlight panels.
///
/// `Image` is the platform handle for an image node; equality must be node
/// identity.
pub trait PanelQuery {
    /// Platform handle for one photo; compared by node identity.
    type Image: PartialEq;

    /// Images of the currently active panel in document order, or `None` if no
    /// panel is active.
    fn active_panel_images(&self) -> Option<Vec<Self::Image>>;

    /// Source and alternative text of `image`.
    fn describe(&self, image: &Self::Image) -> ImageRef;
}

/// A freshly discovered gallery together with the platform handles it came from.
#[derive(Debug, Clone)]
pub struct GalleryIndex<I> {
    handles: Vec<I>,
    set: GallerySet,
}

impl<I: PartialEq> GalleryIndex<I> {
    /// Query the active panel. An absent panel yields an empty gallery.
    pub fn discover<Q>(query: &Q) -> Self
    where
        Q: PanelQuery<Image = I> + ?Sized,
    {
        let handles = query.active_panel_images().unwrap_or_default();
        let set = handles.iter().map(|img| query.describe(img)).collect();
        Self { handles, set }
    }

    /// The discovered images.
    pub fn set(&self) -> &GallerySet {
        &self.set
    }

    /// Consume the index, keeping the images.
    pub fn into_set(self) -> GallerySet {
        self.set
    }

    /// Number of discovered images.
    pub fn len(&self) -> usize {
        self.set.len()
    }

    /// Whether nothing was discovered.
    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    /// Position of `image` in the gallery, by node identity.
    pub fn index_of(&self, image: &I) -> Option<usize> {
        self.handles.iter().position(|h| h == image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Panels {
        active: Option<Vec<&'static str>>,
    }

    impl PanelQuery for Panels {
        type Image = &'static str;

        fn active_panel_images(&self) -> Option<Vec<&'static str>> {
            self.active.clone()
        }

        fn describe(&self, image: &&'static str) -> ImageRef {
            ImageRef::new(format!("/img/{image}.jpg"), image.to_uppercase())
        }
    }

    #[test]
    fn discovers_in_document_order() {
        let panels = Panels {
            active: Some(vec!["a", "b", "c"]),
        };
        let gallery = GalleryIndex::discover(&panels);
        let srcs: Vec<_> = gallery.set().iter().map(|i| i.src.as_str()).collect();
        assert_eq!(srcs, vec!["/img/a.jpg", "/img/b.jpg", "/img/c.jpg"]);
        assert_eq!(gallery.set()[1].alt, "B");
        assert_eq!(gallery.index_of(&"c"), Some(2));
        assert_eq!(gallery.index_of(&"z"), None);
    }

    #[test]
    fn no_active_panel_is_empty() {
        let gallery = GalleryIndex::discover(&Panels { active: None });
        assert!(gallery.is_empty());
        assert_eq!(gallery.index_of(&"a"), None);
    }

    #[test]
    fn navigation_wraps_both_ways() {
        let set: GallerySet = ["a", "b", "c"].iter().map(|s| ImageRef::new(*s, "")).collect();
        assert_eq!(set.next_index(2), Some(0));
        assert_eq!(set.previous_index(0), Some(2));
        assert_eq!(set.previous_index(2), Some(1));

        let mut index = 0;
        for _ in 0..set.len() {
            index = set.next_index(index).unwrap();
        }
        assert_eq!(index, 0);
    }

    #[test]
    fn empty_set_has_no_neighbours() {
        let set = GallerySet::default();
        assert_eq!(set.next_index(0), None);
        assert_eq!(set.previous_index(0), None);
    }
}
