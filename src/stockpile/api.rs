//! # API Facade
//!
//! [`StockApi`] is the single entry point UI clients use. It owns the store and
//! the session's [`Inventory`], dispatches each action to its command module
//! and hands back a structured [`CmdResult`].
//!
//! The session lifecycle is fixed:
//!
//! 1. [`StockApi::open`] loads the inventory once (seeding it when the store is empty)
//! 2. any number of commands mutate the in-memory inventory
//! 3. [`StockApi::save`] writes everything back, once, on the way out
//!
//! Nothing is written between steps 1 and 3, so a session that ends any other
//! way loses its changes.
//!
//! ## Generic Over DataStore
//!
//! - Production: `StockApi<FileStore>`
//! - Testing: `StockApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::inventory::Inventory;
use crate::model::ProductUpdate;
use crate::store::DataStore;

pub struct StockApi<S: DataStore> {
    store: S,
    inventory: Inventory,
}

impl<S: DataStore> StockApi<S> {
    pub fn open(mut store: S) -> Result<Self> {
        let inventory = Inventory::load(&mut store)?;
        log::info!(
            "loaded {} products from {}",
            inventory.len(),
            store.location()
        );
        Ok(Self { store, inventory })
    }

    pub fn add_product(
        &mut self,
        name: &str,
        price: f64,
        quantity: u32,
    ) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.inventory, name, price, quantity)
    }

    pub fn update_product(
        &mut self,
        id: u32,
        update: ProductUpdate,
    ) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.inventory, id, update)
    }

    pub fn delete_product(&mut self, id: u32) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.inventory, id)
    }

    pub fn view_product(&self, id: u32) -> Result<commands::CmdResult> {
        commands::view::run(&self.inventory, id)
    }

    pub fn list_products(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.inventory)
    }

    pub fn low_stock(&self, threshold: u32) -> Result<commands::CmdResult> {
        commands::low_stock::run(&self.inventory, threshold)
    }

    pub fn total_value(&self) -> Result<commands::CmdResult> {
        commands::value::run(&self.inventory)
    }

    pub fn init(&self) -> Result<commands::CmdResult> {
        commands::init::run(&self.inventory, &self.store.location())
    }

    /// Whether a product with `id` exists, for callers that check before updating.
    pub fn has_product(&self, id: u32) -> bool {
        self.inventory.contains(id)
    }

    /// Write the whole inventory back to the store.
    pub fn save(&mut self) -> Result<()> {
        self.inventory.dump(&mut self.store)?;
        log::info!(
            "saved {} products to {}",
            self.inventory.len(),
            self.store.location()
        );
        Ok(())
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};
