use crate::config::StockConfig;
use crate::model::{Product, ProductRow, Scope};
use std::path::PathBuf;

pub mod add;
pub mod config;
pub mod delete;
pub mod init;
pub mod list;
pub mod low_stock;
pub mod update;
pub mod value;
pub mod view;

/// Directories the inventory can live in.
#[derive(Debug, Clone)]
pub struct StockPaths {
    pub project: PathBuf,
    pub global: PathBuf,
    /// Explicit data file, overriding both scopes.
    pub data_file: Option<PathBuf>,
}

impl StockPaths {
    pub fn new(project: PathBuf, global: PathBuf) -> Self {
        Self {
            project,
            global,
            data_file: None,
        }
    }

    pub fn with_data_file(mut self, data_file: PathBuf) -> Self {
        self.data_file = Some(data_file);
        self
    }

    /// Directory holding `config.json` and, unless overridden, the data file.
    pub fn scope_dir(&self, scope: Scope) -> PathBuf {
        if let Some(file) = self.data_file.as_ref().filter(|f| has_dir(f)) {
            if let Some(parent) = file.parent() {
                return parent.to_path_buf();
            }
        }
        match scope {
            Scope::Project => self.project.clone(),
            Scope::Global => self.global.clone(),
        }
    }

    /// A bare file name given with `--file` lands next to `config.json` in the scope dir.
    pub fn data_file(&self, scope: Scope, config: &StockConfig) -> PathBuf {
        match &self.data_file {
            Some(file) if has_dir(file) => file.clone(),
            Some(file) => self.scope_dir(scope).join(file),
            None => self.scope_dir(scope).join(&config.data_file),
        }
    }
}

fn has_dir(file: &std::path::Path) -> bool {
    file.parent().is_some_and(|p| !p.as_os_str().is_empty())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_products: Vec<Product>,
    pub listed_products: Vec<ProductRow>,
    pub total_value: Option<f64>,
    pub config: Option<StockConfig>,
    /// The inventory changed and needs saving before exit.
    pub dirty: bool,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_products(mut self, products: Vec<Product>) -> Self {
        self.affected_products = products;
        self
    }

    pub fn with_listed_products(mut self, rows: Vec<ProductRow>) -> Self {
        self.listed_products = rows;
        self
    }

    pub fn with_total_value(mut self, total: f64) -> Self {
        self.total_value = Some(total);
        self
    }

    pub fn with_config(mut self, config: StockConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn mark_dirty(mut self) -> Self {
        self.dirty = true;
        self
    }

    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}
