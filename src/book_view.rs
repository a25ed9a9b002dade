//! A player's view into an open written book.

use thiserror::Error;
use uuid::Uuid;

use crate::book;
use crate::item::ItemStack;

/// Error returned when a [`BookView`] is given an argument it cannot accept.
///
/// Every variant is a caller error: validate input before the call or handle
/// the error at the call site. Nothing here is retried internally.
#[derive(Clone, PartialEq, Eq, Error, Debug)]
pub enum BookViewError {
    /// The given stack is not a book carrying page-structured NBT.
    #[error("the given item is not a valid book")]
    NotABook,
    /// The requested page is outside `1..=page_count`.
    #[error("page {page} does not exist (book has {page_count} pages)")]
    PageOutOfBounds { page: i32, page_count: u32 },
}

/// The view of a written book as seen by one player: which book they have
/// open, and which page they are currently looking at.
///
/// The view owns a private snapshot of the book taken when it was opened;
/// later changes to the stack the caller opened from do not affect it. The
/// page cursor is 1-based and always within `1..=page_count` — out-of-range
/// assignments are rejected, never clamped.
///
/// Not thread-safe; external synchronization is required if a view is shared
/// across threads.
#[derive(Clone, Debug)]
pub struct BookView {
    viewer: Uuid,
    book: ItemStack,
    page_count: u32,
    page: i32,
}

impl BookView {
    /// Creates a view of `book` for the player identified by `viewer`,
    /// starting at page 1.
    pub fn new(viewer: Uuid, book: &ItemStack) -> Result<Self, BookViewError> {
        Self::with_page(viewer, book, 1)
    }

    /// Creates a view of `book` starting at the given page.
    ///
    /// Fails with [`BookViewError::NotABook`] if the stack carries no pages,
    /// or [`BookViewError::PageOutOfBounds`] if `page` is outside the book's
    /// page range.
    pub fn with_page(viewer: Uuid, book: &ItemStack, page: i32) -> Result<Self, BookViewError> {
        let page_count = book::page_count(book).ok_or(BookViewError::NotABook)?;

        let mut view = Self {
            viewer,
            book: book.clone(),
            page_count,
            page: 1,
        };
        view.set_current_page(page)?;

        Ok(view)
    }

    /// The player viewing this book.
    pub fn viewer(&self) -> Uuid {
        self.viewer
    }

    /// The page currently visible to the viewer.
    pub fn current_page(&self) -> i32 {
        self.page
    }

    /// The total number of pages in the book, fixed when the view was
    /// created.
    pub fn page_count(&self) -> u32 {
        self.page_count
    }

    /// Turns to the given page. `page` must lie within `1..=page_count`;
    /// otherwise the cursor is left unchanged and an error is returned.
    pub fn set_current_page(&mut self, page: i32) -> Result<(), BookViewError> {
        if page < 1 || page as i64 > i64::from(self.page_count) {
            return Err(BookViewError::PageOutOfBounds {
                page,
                page_count: self.page_count,
            });
        }

        self.page = page;
        Ok(())
    }

    /// Returns a copy of the book snapshot this view was opened on. The
    /// caller may freely mutate the returned stack without affecting the
    /// view.
    pub fn book(&self) -> ItemStack {
        self.book.clone()
    }
}

/// Two views are equal when they have the same viewer and the same book
/// snapshot. The page cursor is deliberately excluded so callers can ask
/// "is this player looking at this book" regardless of which page they are
/// on.
impl PartialEq for BookView {
    fn eq(&self, other: &Self) -> bool {
        self.viewer == other.viewer && self.book == other.book
    }
}

impl Eq for BookView {}
