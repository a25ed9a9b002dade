#![doc = include_str!("../README.md")]
#![deny(
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
    rustdoc::invalid_codeblock_attributes,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::bare_urls,
    rustdoc::invalid_html_tags
)]
#![warn(
    trivial_casts,
    trivial_numeric_casts,
    unused_lifetimes,
    unused_import_braces,
    unreachable_pub,
    clippy::dbg_macro
)]

pub mod book;
pub mod book_view;
pub mod item;
pub mod player;
pub mod server;


pub use book::BookMeta;
pub use book_view::{BookView, BookViewError};
pub use item::{ItemKind, ItemStack};
pub use player::PlayerMock;
pub use server::MockServer;
pub use uuid::Uuid;
pub use valence_nbt as nbt;
