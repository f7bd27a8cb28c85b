//! # Inventory
//!
//! [`Inventory`] owns the product collection for one session. Products are kept
//! in insertion order (not sorted by id) and every lookup is a linear scan where
//! the first matching id wins.
//!
//! Ids are expected to be unique because new ids come from [`Inventory::next_id`],
//! but nothing enforces it: a hand-edited data file can carry duplicates, and the
//! operations here simply act on the first match.
//!
//! ## Not found
//!
//! The operations report a missing match in different ways, and callers rely on
//! each shape:
//!
//! - [`Inventory::list_all`] returns an empty `Vec` for an empty inventory.
//! - [`Inventory::low_stock_alert`] and [`Inventory::view_product`] return `None`.
//! - [`Inventory::delete_product`] returns `false`.
//! - [`Inventory::update_product`] does nothing at all. Callers check
//!   [`Inventory::contains`] first.
//!
//! ## Persistence
//!
//! [`Inventory::load`] reads the collection once; [`Inventory::dump`] writes it
//! back once. Nothing in between touches the store.

use crate::error::{Result, StockError};
use crate::model::{Product, ProductRow, ProductUpdate};
use crate::store::DataStore;

/// First id handed out in an empty inventory.
pub const FIRST_ID: u32 = 101;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inventory {
    products: Vec<Product>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_products(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The default products written when no data exists yet.
    pub fn seed() -> Vec<Product> {
        vec![
            Product::new(101, "Facewash", 120.05, 6),
            Product::new(102, "Toothbrush", 10.79, 20),
            Product::new(103, "BodyWash", 50.25, 4),
            Product::new(104, "Toner", 60.25, 7),
            Product::new(105, "Lotion", 70.89, 2),
            Product::new(106, "Shampoo", 45.62, 11),
        ]
    }

    /// Load the collection from `store`.
    ///
    /// When the store has nothing yet, the seed products are written first and
    /// then read back, so memory and storage agree from the start.
    pub fn load<S: DataStore>(store: &mut S) -> Result<Self> {
        let products = match store.load_products()? {
            Some(products) => products,
            None => {
                log::info!("no inventory at {}, writing seed data", store.location());
                store.save_products(&Self::seed())?;
                store.load_products()?.ok_or_else(|| {
                    StockError::Store(format!("seed data missing at {}", store.location()))
                })?
            }
        };
        Ok(Self { products })
    }

    /// Write the whole collection to `store`, replacing what was there.
    pub fn dump<S: DataStore>(&self, store: &mut S) -> Result<()> {
        store.save_products(&self.products)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn add_product(&mut self, product: Product) {
        self.products.push(product);
    }

    /// `max(id) + 1`, or [`FIRST_ID`] when empty.
    /// `None` once the highest id is already `u32::MAX`.
    pub fn next_id(&self) -> Option<u32> {
        match self.products.iter().map(|p| p.id).max() {
            Some(max) => max.checked_add(1),
            None => Some(FIRST_ID),
        }
    }

    pub fn ids(&self) -> Vec<u32> {
        self.products.iter().map(|p| p.id).collect()
    }

    pub fn contains(&self, id: u32) -> bool {
        self.products.iter().any(|p| p.id == id)
    }

    /// Sum of `price * quantity`, recomputed on every call.
    pub fn total_value(&self) -> f64 {
        self.products.iter().map(Product::value).sum()
    }

    pub fn list_all(&self) -> Vec<ProductRow> {
        self.products.iter().map(Product::to_row).collect()
    }

    /// Products with `quantity < threshold`, or `None` when there are none.
    pub fn low_stock_alert(&self, threshold: u32) -> Option<Vec<ProductRow>> {
        let rows: Vec<_> = self
            .products
            .iter()
            .filter(|p| p.quantity < threshold)
            .map(Product::to_row)
            .collect();
        if rows.is_empty() {
            None
        } else {
            Some(rows)
        }
    }

    pub fn view_product(&self, id: u32) -> Option<ProductRow> {
        self.products.iter().find(|p| p.id == id).map(Product::to_row)
    }

    /// Overwrite the supplied fields of the first product with `id`.
    /// A missing id is silently ignored.
    pub fn update_product(&mut self, id: u32, update: ProductUpdate) {
        if let Some(product) = self.products.iter_mut().find(|p| p.id == id) {
            if let Some(price) = update.price {
                product.price = price;
            }
            if let Some(quantity) = update.quantity {
                product.quantity = quantity;
            }
        }
    }

    /// Remove the first product with `id`. Returns whether one was removed.
    pub fn delete_product(&mut self, id: u32) -> bool {
        match self.products.iter().position(|p| p.id == id) {
            Some(pos) => {
                self.products.remove(pos);
                true
            }
            None => false,
        }
    }
}
