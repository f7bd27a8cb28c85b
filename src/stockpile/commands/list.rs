use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;

pub fn run(inventory: &Inventory) -> Result<CmdResult> {
    let rows = inventory.list_all();
    let mut result = CmdResult::default();
    if rows.is_empty() {
        result.add_message(CmdMessage::info("No products in the inventory right now."));
    }
    Ok(result.with_listed_products(rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_in_collection_order() {
        let inventory = Inventory::from_products(Inventory::seed());
        let result = run(&inventory).unwrap();
        let ids: Vec<_> = result.listed_products.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![101, 102, 103, 104, 105, 106]);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn empty_inventory_gets_a_note() {
        let result = run(&Inventory::new()).unwrap();
        assert!(result.listed_products.is_empty());
        assert_eq!(result.messages.len(), 1);
    }
}
