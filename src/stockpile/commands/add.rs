use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, StockError};
use crate::inventory::Inventory;
use crate::model::Product;

/// Append a new product under the next free id.
pub fn run(inventory: &mut Inventory, name: &str, price: f64, quantity: u32) -> Result<CmdResult> {
    let name = name.trim();
    if name.is_empty() {
        return Err(StockError::Input("Product name cannot be empty".into()));
    }
    if !(price.is_finite() && price > 0.0) {
        return Err(StockError::Input(format!(
            "Price must be a positive number, got {}",
            price
        )));
    }

    let Some(id) = inventory.next_id() else {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::error(format!(
            "Could not add product, no ids left after {}",
            u32::MAX
        )));
        return Ok(result);
    };

    let product = Product::new(id, name, price, quantity);
    inventory.add_product(product.clone());

    let mut result = CmdResult::default().mark_dirty();
    result.add_message(CmdMessage::success(format!(
        "Product added ({}): {}",
        product.id, product.name
    )));
    Ok(result.with_affected_products(vec![product]))
}
