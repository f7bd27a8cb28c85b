//! Interactive menu.
//!
//! Each selection maps onto exactly one [`StockApi`] call. Exit is the only path
//! that saves; running out of input ends the session with an error and leaves
//! the data file as it was.

use std::io::{BufRead, Write};
use stockpile::api::StockApi;
use stockpile::config::StockConfig;
use stockpile::error::Result;
use stockpile::model::ProductUpdate;
use stockpile::store::DataStore;

use super::print::write_result;
use super::prompt::Prompter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Update,
    Delete,
    View,
    List,
    LowStock,
    TotalValue,
    Exit,
}

impl MenuChoice {
    pub fn all() -> &'static [MenuChoice] {
        &[
            MenuChoice::Add,
            MenuChoice::Update,
            MenuChoice::Delete,
            MenuChoice::View,
            MenuChoice::List,
            MenuChoice::LowStock,
            MenuChoice::TotalValue,
            MenuChoice::Exit,
        ]
    }

    pub fn parse(input: &str) -> Option<Self> {
        let n: usize = input.trim().parse().ok()?;
        Self::all().get(n.checked_sub(1)?).copied()
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::Add => "Add Product",
            MenuChoice::Update => "Update Product",
            MenuChoice::Delete => "Delete Product",
            MenuChoice::View => "View Product",
            MenuChoice::List => "List All Products",
            MenuChoice::LowStock => "Low-Stock Alert",
            MenuChoice::TotalValue => "Total Inventory Value",
            MenuChoice::Exit => "Exit",
        }
    }
}

pub fn run<S, R, W>(
    api: &mut StockApi<S>,
    prompter: &mut Prompter<R, W>,
    config: &StockConfig,
) -> Result<()>
where
    S: DataStore,
    R: BufRead,
    W: Write,
{
    loop {
        prompter.say("\n----------- Inventory Management System -------------")?;
        for (i, choice) in MenuChoice::all().iter().enumerate() {
            prompter.say(format!("{}.{}", i + 1, choice.label()))?;
        }

        let selection = prompter.line("\nEnter your choice(1-8): ")?;
        let Some(choice) = MenuChoice::parse(&selection) else {
            prompter.say("Please enter a valid choice(1-8)")?;
            continue;
        };
        log::debug!("menu selection: {:?}", choice);

        let result = match choice {
            MenuChoice::Add => {
                let name = prompter.text("Enter Product Name: ")?;
                let price = prompter.positive_float("Enter Product Price: ")?;
                let quantity = prompter.positive_int("Enter Product Quantity: ")?;
                api.add_product(&name, price, quantity)?
            }
            MenuChoice::Update => {
                let id = prompter.positive_int("Enter the id of the product to update: ")?;
                if !api.has_product(id) {
                    prompter.say("Product not found with the particular id")?;
                    continue;
                }
                let update = ask_update(prompter)?;
                api.update_product(id, update)?
            }
            MenuChoice::Delete => {
                let id = prompter.positive_int("Enter the id of the product to delete: ")?;
                api.delete_product(id)?
            }
            MenuChoice::View => {
                let id = prompter.positive_int("Enter the id of the product to display: ")?;
                api.view_product(id)?
            }
            MenuChoice::List => api.list_products()?,
            MenuChoice::LowStock => {
                let threshold =
                    prompter.positive_int("Enter the threshold for which you want to check: ")?;
                api.low_stock(threshold)?
            }
            MenuChoice::TotalValue => api.total_value()?,
            MenuChoice::Exit => {
                api.save()?;
                prompter.say(format!(
                    "Inventory saved to {}",
                    api.store().location()
                ))?;
                return Ok(());
            }
        };

        write_result(prompter.output(), &result, config)?;
    }
}

fn ask_update<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> Result<ProductUpdate> {
    prompter.say("Update Options:")?;
    prompter.say("1.Price")?;
    prompter.say("2.Quantity")?;
    prompter.say("3.Both")?;
    let choice = prompter.choice(
        "Enter your choice(1-3): ",
        "Please enter a valid choice(1-3): ",
        &["1", "2", "3"],
    )?;

    let mut update = ProductUpdate::default();
    if choice == "1" || choice == "3" {
        update.price = Some(prompter.positive_float("Enter the new price: ")?);
    }
    if choice == "2" || choice == "3" {
        update.quantity = Some(prompter.positive_int("Enter the new quantity: ")?);
    }
    Ok(update)
}
