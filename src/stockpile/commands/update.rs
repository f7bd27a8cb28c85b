use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;
use crate::model::ProductUpdate;

/// Update price and/or quantity of product `id`.
///
/// Existence is checked here, since [`Inventory::update_product`] ignores unknown ids.
pub fn run(inventory: &mut Inventory, id: u32, update: ProductUpdate) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if !inventory.contains(id) {
        result.add_message(CmdMessage::error(format!(
            "Product not found with id {}",
            id
        )));
        return Ok(result);
    }

    if update.is_empty() {
        result.add_message(CmdMessage::info("Nothing to update."));
        return Ok(result);
    }

    inventory.update_product(id, update);

    let mut result = result.mark_dirty();
    if let Some(row) = inventory.view_product(id) {
        result.add_message(CmdMessage::success(format!(
            "Product updated ({}): {}",
            row.id, row.name
        )));
        result.listed_products.push(row);
    }
    Ok(result)
}
