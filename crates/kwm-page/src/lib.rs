//! Page loading for kwm.
//!
//! A page is fetched over HTTP ([`fetch_page`]) or read from disk
//! ([`read_page_file`]), parsed into a [`PageDocument`], and reduced to the
//! weighted text fields that keyword analysis consumes.

#![warn(missing_docs)]

mod document;
mod error;
mod fetch;

pub use document::{PageDocument, description, main_content, meta_keywords};
pub use error::PageError;
pub use fetch::{FetchedPage, fetch_page, read_page_file};
