//! Story records and the catalogs that serve them.

mod static_catalog;

pub use static_catalog::{BUILTIN_STORIES, ELI_THE_ELEPHANT, StaticCatalog, builtin_catalog};

/// One narration/illustration pair within a story.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Page<'a> {
    pub text: &'a str,
    pub image: &'a str,
}

/// Immutable story record. Page order is reading order.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Story<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub cover: &'a str,
    pub theme: &'a str,
    pub moral: &'a str,
    pub pages: &'a [Page<'a>],
}

impl<'a> Story<'a> {
    /// Number of real pages. The same value is the index of the finished node.
    pub fn page_count(&self) -> u16 {
        self.pages.len().min(u16::MAX as usize) as u16
    }

    /// Page by zero-based index; `None` at or past the finished node.
    pub fn page_at(&self, index: u16) -> Option<&'a Page<'a>> {
        self.pages.get(index as usize)
    }
}

/// Read-only catalog of stories shown in the library.
pub trait StoryCatalog {
    fn story_count(&self) -> u16;

    fn story_at(&self, index: u16) -> Option<Story<'_>>;

    /// Catalog index of the story with the given id.
    fn find_story(&self, id: &str) -> Option<u16> {
        (0..self.story_count())
            .find(|&index| self.story_at(index).is_some_and(|story| story.id == id))
    }
}
