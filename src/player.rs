//! A simulated player.

use tracing::debug;
use uuid::Uuid;

use crate::book_view::{BookView, BookViewError};
use crate::item::ItemStack;

/// A player connected to a [`MockServer`](crate::server::MockServer).
///
/// Holds the state a plugin can observe through the player API. A player has
/// at most one book open at a time; opening another book replaces the
/// current view.
#[derive(Clone, PartialEq, Debug)]
pub struct PlayerMock {
    uuid: Uuid,
    username: String,
    open_book: Option<BookView>,
}

impl PlayerMock {
    /// Creates a player with the given username and a random UUID.
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            uuid: Uuid::from_bytes(rand::random()),
            username: username.into(),
            open_book: None,
        }
    }

    pub fn uuid(&self) -> Uuid {
        self.uuid
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Opens a written book for this player, starting at page 1, and returns
    /// the resulting view. The view snapshots the stack; later changes to
    /// `book` are not reflected.
    ///
    /// Fails with [`BookViewError::NotABook`] if the stack carries no pages.
    pub fn open_book(&mut self, book: &ItemStack) -> Result<&BookView, BookViewError> {
        let view = BookView::new(self.uuid, book)?;

        debug!(
            username = %self.username,
            pages = view.page_count(),
            "player opened a book"
        );

        Ok(self.open_book.insert(view))
    }

    /// The book view currently open for this player, if any.
    pub fn open_book_view(&self) -> Option<&BookView> {
        self.open_book.as_ref()
    }

    /// Mutable access to the open book view, for turning pages.
    pub fn open_book_view_mut(&mut self) -> Option<&mut BookView> {
        self.open_book.as_mut()
    }

    /// Closes the currently open book, returning the discarded view.
    pub fn close_book(&mut self) -> Option<BookView> {
        let view = self.open_book.take();

        if view.is_some() {
            debug!(username = %self.username, "player closed their book");
        }

        view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::BookMeta;
    use crate::item::ItemKind;

    fn one_page_book() -> ItemStack {
        let mut meta = BookMeta::new("Journal", "steve");
        meta.add_page("Hello World");
        meta.to_book()
    }

    #[test]
    fn open_book_is_retrievable() {
        let mut player = PlayerMock::new("steve");
        let book = one_page_book();

        player.open_book(&book).unwrap();

        let view = player.open_book_view().unwrap();
        assert_eq!(view.viewer(), player.uuid());
        assert_eq!(view.book(), book);
    }

    #[test]
    fn close_book_clears_the_view() {
        let mut player = PlayerMock::new("steve");

        player.open_book(&one_page_book()).unwrap();
        assert!(player.open_book_view().is_some());

        assert!(player.close_book().is_some());
        assert!(player.open_book_view().is_none());
        assert!(player.close_book().is_none());
    }

    #[test]
    fn opening_a_non_book_fails() {
        let mut player = PlayerMock::new("steve");
        let diamond = ItemStack::new(ItemKind::Diamond, 1, None);

        assert_eq!(player.open_book(&diamond), Err(BookViewError::NotABook));
        assert!(player.open_book_view().is_none());
    }

    #[test]
    fn reopening_replaces_the_view() {
        let mut player = PlayerMock::new("steve");

        let mut meta = BookMeta::new("Sequel", "steve");
        meta.add_page("a");
        meta.add_page("b");
        let second = meta.to_book();

        player.open_book(&one_page_book()).unwrap();
        player.open_book(&second).unwrap();

        let view = player.open_book_view().unwrap();
        assert_eq!(view.page_count(), 2);
        assert_eq!(view.book(), second);
    }
}
