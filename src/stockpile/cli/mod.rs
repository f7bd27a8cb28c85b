//! Binary-side glue: resolves where the inventory lives, opens the API and
//! routes each subcommand (or the interactive menu) to it.

pub mod menu;
mod print;
pub mod prompt;
mod render;

use directories::ProjectDirs;
use std::io::{self, Write};
use std::path::PathBuf;
use stockpile::api::{CmdResult, StockApi};
use stockpile::commands::config::ConfigAction;
use stockpile::commands::{self, StockPaths};
use stockpile::config::StockConfig;
use stockpile::error::{Result, StockError};
use stockpile::model::{ProductUpdate, Scope};
use stockpile::store::fs::FileStore;

use crate::args::{Cli, Commands};
use print::{write_config, write_messages, write_result};
use prompt::Prompter;

const HOME_ENV: &str = "STOCKPILE_HOME";
const GLOBAL_DATA_ENV: &str = "STOCKPILE_GLOBAL_DATA";

pub struct AppContext {
    paths: StockPaths,
    scope: Scope,
    config: StockConfig,
}

impl AppContext {
    fn data_file(&self) -> PathBuf {
        self.paths.data_file(self.scope, &self.config)
    }

    fn open_api(&self) -> Result<StockApi<FileStore>> {
        let data_file = self.data_file();
        log::debug!("opening inventory at {}", data_file.display());
        StockApi::open(FileStore::new(data_file))
    }
}

pub fn init_context(cli: &Cli) -> Result<AppContext> {
    let project = match std::env::var_os(HOME_ENV) {
        Some(dir) => PathBuf::from(dir),
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    };

    let scope = if cli.global {
        Scope::Global
    } else {
        Scope::Project
    };

    let global = match std::env::var_os(GLOBAL_DATA_ENV) {
        Some(dir) => PathBuf::from(dir),
        None => match ProjectDirs::from("com", "stockpile", "stockpile") {
            Some(dirs) => dirs.data_dir().to_path_buf(),
            None if scope == Scope::Global => {
                return Err(StockError::Store(
                    "Could not determine the user data directory".to_string(),
                ));
            }
            None => project.clone(),
        },
    };

    let mut paths = StockPaths::new(project, global);
    if let Some(file) = &cli.file {
        paths = paths.with_data_file(file.clone());
    }

    let config = StockConfig::load(paths.scope_dir(scope))?;
    Ok(AppContext {
        paths,
        scope,
        config,
    })
}

pub fn dispatch(ctx: &AppContext, command: Option<Commands>) -> Result<()> {
    match command {
        None | Some(Commands::Menu) => handle_menu(ctx),
        Some(Commands::Add {
            name,
            price,
            quantity,
        }) => handle_mutation(ctx, |api| api.add_product(&name, price, quantity)),
        Some(Commands::Update {
            id,
            price,
            quantity,
        }) => handle_mutation(ctx, |api| {
            api.update_product(id, ProductUpdate { price, quantity })
        }),
        Some(Commands::Delete { id }) => handle_mutation(ctx, |api| api.delete_product(id)),
        Some(Commands::View { id }) => handle_query(ctx, |api| api.view_product(id)),
        Some(Commands::List) => handle_query(ctx, |api| api.list_products()),
        Some(Commands::LowStock { threshold }) => {
            let threshold = threshold.unwrap_or(ctx.config.low_stock_threshold);
            handle_query(ctx, |api| api.low_stock(threshold))
        }
        Some(Commands::Value) => handle_query(ctx, |api| api.total_value()),
        Some(Commands::Config { key, value }) => handle_config(ctx, key, value),
        Some(Commands::Init) => handle_query(ctx, |api| api.init()),
    }
}

fn handle_menu(ctx: &AppContext) -> Result<()> {
    let mut api = ctx.open_api()?;
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    menu::run(&mut api, &mut prompter, &ctx.config)
}

fn handle_query<F>(ctx: &AppContext, query: F) -> Result<()>
where
    F: FnOnce(&StockApi<FileStore>) -> Result<CmdResult>,
{
    let api = ctx.open_api()?;
    let result = query(&api)?;
    finish(ctx, &result)
}

/// A one-shot mutation is its own exit path: it saves once when it changed something.
fn handle_mutation<F>(ctx: &AppContext, mutation: F) -> Result<()>
where
    F: FnOnce(&mut StockApi<FileStore>) -> Result<CmdResult>,
{
    let mut api = ctx.open_api()?;
    let result = mutation(&mut api)?;
    if result.dirty {
        api.save()?;
    }
    finish(ctx, &result)
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let result = commands::config::run(&ctx.paths, ctx.scope, action)?;

    {
        let mut out = io::stdout().lock();
        if result.messages.is_empty() {
            if let Some(config) = &result.config {
                write_config(&mut out, config)?;
            }
        }
        write_messages(&mut out, &result.messages)?;
        out.flush().map_err(StockError::Io)?;
    }
    exit_status(&result)
}

fn finish(ctx: &AppContext, result: &CmdResult) -> Result<()> {
    {
        let mut out = io::stdout().lock();
        write_result(&mut out, result, &ctx.config)?;
        out.flush().map_err(StockError::Io)?;
    }
    exit_status(result)
}

// Error-level messages are already printed; only the exit code is left to set.
fn exit_status(result: &CmdResult) -> Result<()> {
    if result.has_errors() {
        std::process::exit(1);
    }
    Ok(())
}
