use super::DataStore;
use crate::error::{Result, StockError};
use crate::model::Product;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::path::{Path, PathBuf};

const INDENT: &[u8] = b"    ";

/// File-backed store holding the whole collection in one JSON document.
pub struct FileStore {
    data_file: PathBuf,
}

impl FileStore {
    pub fn new(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.data_file
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.data_file.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(StockError::Io)?;
            }
        }
        Ok(())
    }

    fn tmp_file(&self) -> PathBuf {
        let name = self
            .data_file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "products.json".to_string());
        self.data_file.with_file_name(format!(".{}.tmp", name))
    }
}

/// Four-space indented JSON, the layout `products.json` files have always used.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser).map_err(StockError::Serialization)?;
    String::from_utf8(buf).map_err(|e| StockError::Store(e.to_string()))
}

impl DataStore for FileStore {
    fn load_products(&self) -> Result<Option<Vec<Product>>> {
        if !self.data_file.exists() {
            log::debug!("no data file at {}", self.data_file.display());
            return Ok(None);
        }
        let content = fs::read_to_string(&self.data_file).map_err(StockError::Io)?;
        let products: Vec<Product> =
            serde_json::from_str(&content).map_err(StockError::Serialization)?;
        log::debug!(
            "read {} products from {}",
            products.len(),
            self.data_file.display()
        );
        Ok(Some(products))
    }

    fn save_products(&mut self, products: &[Product]) -> Result<()> {
        self.ensure_parent()?;
        let content = to_pretty_json(products)?;

        let tmp_file = self.tmp_file();
        fs::write(&tmp_file, content).map_err(StockError::Io)?;
        fs::rename(&tmp_file, &self.data_file).map_err(StockError::Io)?;

        log::debug!(
            "wrote {} products to {}",
            products.len(),
            self.data_file.display()
        );
        Ok(())
    }

    fn location(&self) -> String {
        self.data_file.display().to_string()
    }
}
