use super::DataStore;
use crate::error::Result;
use crate::model::Product;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    products: Option<Vec<Product>>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `products`, as if a file existed.
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: Some(products),
            saves: 0,
        }
    }

    /// Number of times the collection was written.
    pub fn save_count(&self) -> usize {
        self.saves
    }

    pub fn stored(&self) -> Option<&[Product]> {
        self.products.as_deref()
    }
}

impl DataStore for InMemoryStore {
    fn load_products(&self) -> Result<Option<Vec<Product>>> {
        Ok(self.products.clone())
    }

    fn save_products(&mut self, products: &[Product]) -> Result<()> {
        self.products = Some(products.to_vec());
        self.saves += 1;
        Ok(())
    }

    fn location(&self) -> String {
        "<memory>".to_string()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        /// Starts from an existing but empty collection, so nothing is seeded.
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::with_products(Vec::new()),
            }
        }

        pub fn with_product(mut self, id: u32, name: &str, price: f64, quantity: u32) -> Self {
            let mut products = self.store.products.take().unwrap_or_default();
            products.push(Product::new(id, name, price, quantity));
            self.store.products = Some(products);
            self
        }

        pub fn with_products(mut self, count: u32) -> Self {
            for i in 0..count {
                let id = 101 + i;
                self = self.with_product(id, &format!("Product {}", i + 1), 1.5, 10 + i);
            }
            self
        }
    }
}
