//! Written book metadata.
//!
//! Books carry their content in the stack's NBT: a `title` string, an
//! `author` string, and a `pages` list of strings. [`BookMeta`] is a typed
//! view over that layout so tests don't have to build compounds by hand.

use valence_nbt::{compound, Compound, List, Value};

use crate::item::{ItemKind, ItemStack};

pub const MAX_TITLE_CHARS: usize = 32;
pub const MAX_PAGE_CHARS: usize = 1024;
pub const MAX_PAGES: usize = 100;

/// The title, author, and pages of a written book.
#[derive(Clone, PartialEq, Eq, Default, Debug)]
pub struct BookMeta {
    pub title: String,
    pub author: String,
    pages: Vec<String>,
}

impl BookMeta {
    /// Creates metadata for an empty book.
    ///
    /// # Panics
    ///
    /// Panics if `title` is longer than [`MAX_TITLE_CHARS`] characters.
    #[track_caller]
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        let title = title.into();
        assert!(
            title.chars().count() <= MAX_TITLE_CHARS,
            "book title exceeds {MAX_TITLE_CHARS} characters"
        );

        Self {
            title,
            author: author.into(),
            pages: Vec::new(),
        }
    }

    /// Appends a page to the book.
    ///
    /// # Panics
    ///
    /// Panics if the book already has [`MAX_PAGES`] pages, or if `text` is
    /// longer than [`MAX_PAGE_CHARS`] characters.
    #[track_caller]
    pub fn add_page(&mut self, text: impl Into<String>) {
        let text = text.into();

        assert!(
            self.pages.len() < MAX_PAGES,
            "books cannot have more than {MAX_PAGES} pages"
        );
        assert!(
            text.chars().count() <= MAX_PAGE_CHARS,
            "page exceeds {MAX_PAGE_CHARS} characters"
        );

        self.pages.push(text);
    }

    pub fn pages(&self) -> &[String] {
        &self.pages
    }

    pub fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    /// Converts this metadata to the NBT layout written books use.
    pub fn to_compound(&self) -> Compound {
        compound! {
            "title" => self.title.clone(),
            "author" => self.author.clone(),
            "pages" => List::String(self.pages.clone()),
        }
    }

    /// Reads book metadata back out of a compound. Returns `None` if the
    /// compound carries no `pages` string list.
    pub fn from_compound(nbt: &Compound) -> Option<Self> {
        let pages = match nbt.get("pages") {
            Some(Value::List(List::String(pages))) => pages.clone(),
            Some(Value::List(List::End)) => Vec::new(),
            _ => return None,
        };

        let string_field = |key| match nbt.get(key) {
            Some(Value::String(s)) => s.clone(),
            _ => String::new(),
        };

        Some(Self {
            title: string_field("title"),
            author: string_field("author"),
            pages,
        })
    }

    /// Builds a single [`ItemKind::WrittenBook`] stack carrying this
    /// metadata.
    pub fn to_book(&self) -> ItemStack {
        ItemStack::new(ItemKind::WrittenBook, 1, Some(self.to_compound()))
    }
}

/// The number of pages in the given stack, or `None` if the stack is not a
/// book carrying page-structured NBT.
pub fn page_count(stack: &ItemStack) -> Option<u32> {
    if !stack.item.is_book() {
        return None;
    }

    match stack.nbt.as_ref()?.get("pages") {
        Some(Value::List(List::String(pages))) => Some(pages.len() as u32),
        Some(Value::List(List::End)) => Some(0),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn compound_round_trip() {
        let mut meta = BookMeta::new("Journal", "steve");
        meta.add_page("Hello World");
        meta.add_page("This is page number 2!");

        let nbt = meta.to_compound();

        assert_eq!(BookMeta::from_compound(&nbt), Some(meta));
    }

    #[test]
    fn written_book_has_page_count() {
        let mut meta = BookMeta::new("Journal", "steve");
        meta.add_page("Hello World");

        assert_eq!(page_count(&meta.to_book()), Some(1));
    }

    #[test]
    fn non_books_have_no_page_count() {
        let diamond = ItemStack::new(ItemKind::Diamond, 1, None);
        let bare_book = ItemStack::new(ItemKind::WrittenBook, 1, None);
        let mislabeled = ItemStack::new(
            ItemKind::Diamond,
            1,
            Some(BookMeta::new("Journal", "steve").to_compound()),
        );

        assert_eq!(page_count(&diamond), None);
        assert_eq!(page_count(&bare_book), None);
        assert_eq!(page_count(&mislabeled), None);
    }

    #[test]
    fn empty_book_has_zero_pages() {
        let meta = BookMeta::new("Journal", "steve");
        assert_eq!(page_count(&meta.to_book()), Some(0));
    }

    #[test]
    #[should_panic]
    fn oversized_page_is_rejected() {
        let mut meta = BookMeta::new("Journal", "steve");
        meta.add_page("x".repeat(MAX_PAGE_CHARS + 1));
    }
}
