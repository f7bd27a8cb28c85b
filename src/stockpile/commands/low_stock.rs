use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;

pub fn run(inventory: &Inventory, threshold: u32) -> Result<CmdResult> {
    match inventory.low_stock_alert(threshold) {
        Some(rows) => {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::warning(format!(
                "{} product(s) below {} units",
                rows.len(),
                threshold
            )));
            Ok(result.with_listed_products(rows))
        }
        None => {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::info(format!(
                "No products found below {} units",
                threshold
            )));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;

    #[test]
    fn lists_products_under_threshold() {
        let inventory = Inventory::from_products(Inventory::seed());
        let result = run(&inventory, 5).unwrap();

        let ids: Vec<_> = result.listed_products.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![103, 105]);
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
    }

    #[test]
    fn nothing_below_threshold() {
        let inventory = Inventory::from_products(Inventory::seed());
        let result = run(&inventory, 2).unwrap();

        assert!(result.listed_products.is_empty());
        assert_eq!(result.messages[0].level, MessageLevel::Info);
    }
}
