use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;

/// Report on an inventory that has just been opened (and seeded, if it was new).
pub fn run(inventory: &Inventory, location: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Inventory ready at {} ({} products)",
        location,
        inventory.len()
    )));
    Ok(result)
}
