use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;

pub fn run(inventory: &Inventory) -> Result<CmdResult> {
    let total = inventory.total_value();
    let mut result = CmdResult::default().with_total_value(total);
    if inventory.is_empty() {
        result.add_message(CmdMessage::info("No products in the inventory right now."));
    }
    Ok(result)
}
