//! # Storage Layer
//!
//! The [`DataStore`] trait hides where the product collection lives. The
//! inventory reads the whole collection once when it is opened and writes the
//! whole collection back once when the session ends; there is no per-record
//! persistence.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: a single pretty-printed JSON file (`products.json`)
//! - [`memory::InMemoryStore`]: keeps the collection in memory, for tests
//!
//! ## Storage Format
//!
//! ```text
//! [
//!     {
//!         "id": 101,
//!         "name": "Facewash",
//!         "price": 120.05,
//!         "quantity": 6
//!     },
//!     ...
//! ]
//! ```
//!
//! The format carries no schema version.

use crate::error::Result;
use crate::model::Product;

pub mod fs;
pub mod memory;

/// Abstract interface for product storage.
pub trait DataStore {
    /// Read the stored collection in stored order.
    ///
    /// Returns `Ok(None)` when nothing has been stored yet, which is how the
    /// inventory knows to seed defaults.
    fn load_products(&self) -> Result<Option<Vec<Product>>>;

    /// Replace the stored collection with `products`.
    fn save_products(&mut self, products: &[Product]) -> Result<()>;

    /// Where the data lives, for messages and logs.
    fn location(&self) -> String;
}
