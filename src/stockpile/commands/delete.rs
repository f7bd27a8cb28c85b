use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;

pub fn run(inventory: &mut Inventory, id: u32) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let row = inventory.view_product(id);
    let deleted = inventory.delete_product(id);

    match row.filter(|_| deleted) {
        Some(row) => {
            result.add_message(CmdMessage::success(format!(
                "Product deleted ({}): {}",
                row.id, row.name
            )));
            Ok(result.mark_dirty())
        }
        _ => {
            result.add_message(CmdMessage::error(format!(
                "Could not delete product, no id {} found",
                id
            )));
            Ok(result)
        }
    }
}
