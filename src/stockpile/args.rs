use clap::{ArgGroup, Parser, Subcommand};
use std::path::PathBuf;

use crate::cli::prompt::{parse_positive_float, parse_positive_int};

#[derive(Parser, Debug)]
#[command(name = "stockpile", version)]
#[command(about = "Track products, stock levels and inventory value", long_about = None)]
pub struct Cli {
    /// Runs the interactive menu when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Operate on the user-wide inventory
    #[arg(short, long, global = true)]
    pub global: bool,

    /// Use this data file instead of the scope's products.json
    #[arg(short, long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the interactive menu (default)
    Menu,

    /// Add a product under the next free id
    #[command(alias = "a")]
    Add {
        /// Product name
        name: String,

        /// Unit price
        #[arg(short, long, value_parser = parse_positive_float)]
        price: f64,

        /// Units in stock
        #[arg(short, long, value_parser = parse_positive_int)]
        quantity: u32,
    },

    /// Update price and/or quantity of a product
    #[command(alias = "u")]
    #[command(group(ArgGroup::new("fields").required(true).multiple(true).args(["price", "quantity"])))]
    Update {
        /// Product id
        #[arg(value_parser = parse_positive_int)]
        id: u32,

        /// New unit price
        #[arg(short, long, value_parser = parse_positive_float)]
        price: Option<f64>,

        /// New quantity
        #[arg(short, long, value_parser = parse_positive_int)]
        quantity: Option<u32>,
    },

    /// Delete a product
    #[command(alias = "rm")]
    Delete {
        /// Product id
        #[arg(value_parser = parse_positive_int)]
        id: u32,
    },

    /// Show a single product
    #[command(alias = "v")]
    View {
        /// Product id
        #[arg(value_parser = parse_positive_int)]
        id: u32,
    },

    /// List all products
    #[command(alias = "ls")]
    List,

    /// List products with fewer units than the threshold
    #[command(alias = "low")]
    LowStock {
        /// Threshold (defaults to the configured one)
        #[arg(value_parser = parse_positive_int)]
        threshold: Option<u32>,
    },

    /// Print the total inventory value
    Value,

    /// Get or set configuration
    Config {
        /// Configuration key (currency, data-file, threshold)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Create the data file, seeding default products if needed
    Init,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("stockpile").chain(args.iter().copied()))
    }

    #[test]
    fn no_subcommand_means_menu() {
        let cli = parse(&[]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn add_args() {
        let cli = parse(&["add", "Comb", "--price", "5.89", "-q", "10"]).unwrap();
        match cli.command {
            Some(Commands::Add {
                name,
                price,
                quantity,
            }) => {
                assert_eq!(name, "Comb");
                assert_eq!(price, 5.89);
                assert_eq!(quantity, 10);
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn rejects_non_positive_values() {
        assert!(parse(&["add", "Comb", "-p", "0", "-q", "1"]).is_err());
        assert!(parse(&["add", "Comb", "-p", "1", "-q", "-2"]).is_err());
        assert!(parse(&["view", "abc"]).is_err());
        assert!(parse(&["low-stock", "0"]).is_err());
    }

    #[test]
    fn update_needs_a_field() {
        assert!(parse(&["update", "101"]).is_err());
        let cli = parse(&["update", "101", "-q", "3"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Update {
                id: 101,
                price: None,
                quantity: Some(3)
            })
        ));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = parse(&["list", "--file", "/tmp/stock.json", "-g"]).unwrap();
        assert!(cli.global);
        assert_eq!(cli.file, Some(PathBuf::from("/tmp/stock.json")));
    }
}
