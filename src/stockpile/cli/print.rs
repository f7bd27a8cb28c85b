use colored::Colorize;
use std::io::Write;
use stockpile::api::{CmdMessage, CmdResult, MessageLevel};
use stockpile::config::StockConfig;
use stockpile::error::{Result, StockError};

use super::render::render_table;

const TABLE_TITLE: &str = "-----------Items in the Inventory---------";

pub(super) fn write_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> Result<()> {
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Error => message.content.red(),
        };
        writeln!(out, "{}", line).map_err(StockError::Io)?;
    }
    Ok(())
}

/// Table (when there are rows), total value (when computed), then messages.
pub(super) fn write_result<W: Write>(
    out: &mut W,
    result: &CmdResult,
    config: &StockConfig,
) -> Result<()> {
    if !result.listed_products.is_empty() {
        writeln!(out, "\n{}", TABLE_TITLE).map_err(StockError::Io)?;
        write!(out, "{}", render_table(&result.listed_products, config))
            .map_err(StockError::Io)?;
    }
    if let Some(total) = result.total_value {
        writeln!(
            out,
            "Total Inventory Value in System: {}",
            config.format_price(total).bold()
        )
        .map_err(StockError::Io)?;
    }
    write_messages(out, &result.messages)
}

pub(super) fn write_config<W: Write>(out: &mut W, config: &StockConfig) -> Result<()> {
    writeln!(out, "currency = {}", config.currency).map_err(StockError::Io)?;
    writeln!(out, "data-file = {}", config.data_file).map_err(StockError::Io)?;
    writeln!(out, "threshold = {}", config.low_stock_threshold).map_err(StockError::Io)?;
    Ok(())
}
