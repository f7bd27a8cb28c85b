use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;

pub fn run(inventory: &Inventory, id: u32) -> Result<CmdResult> {
    match inventory.view_product(id) {
        Some(row) => Ok(CmdResult::default().with_listed_products(vec![row])),
        None => {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::error(format!(
                "Product not found with id {}",
                id
            )));
            Ok(result)
        }
    }
}
