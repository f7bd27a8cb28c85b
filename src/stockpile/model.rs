use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

/// Where an inventory lives: the current project directory or the user-wide data dir.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scope {
    Project,
    Global,
}

/// A single stocked product.
///
/// Field order here is the record order on disk: `id`, `name`, `price`, `quantity`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    #[serde(deserialize_with = "coerce_price")]
    pub price: f64,
    pub quantity: u32,
}

impl Product {
    pub fn new(id: u32, name: impl Into<String>, price: f64, quantity: u32) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            quantity,
        }
    }

    /// Stock value of this line: `price * quantity`.
    pub fn value(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }

    pub fn to_row(&self) -> ProductRow {
        ProductRow {
            id: self.id,
            name: self.name.clone(),
            price: self.price,
            quantity: self.quantity,
        }
    }
}

/// A detached `[id, name, price, quantity]` row handed to callers for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductRow {
    pub id: u32,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

impl ProductRow {
    pub fn new(id: u32, name: impl Into<String>, price: f64, quantity: u32) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            quantity,
        }
    }
}

/// Partial update applied by [`crate::inventory::Inventory::update_product`].
/// `None` leaves the field untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ProductUpdate {
    pub price: Option<f64>,
    pub quantity: Option<u32>,
}

impl ProductUpdate {
    pub fn price(price: f64) -> Self {
        Self {
            price: Some(price),
            quantity: None,
        }
    }

    pub fn quantity(quantity: u32) -> Self {
        Self {
            price: None,
            quantity: Some(quantity),
        }
    }

    pub fn both(price: f64, quantity: u32) -> Self {
        Self {
            price: Some(price),
            quantity: Some(quantity),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.price.is_none() && self.quantity.is_none()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PriceRepr {
    Number(f64),
    Text(String),
}

// Hand-edited files sometimes carry the price as a string or a bare integer.
fn coerce_price<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match PriceRepr::deserialize(deserializer)? {
        PriceRepr::Number(n) => Ok(n),
        PriceRepr::Text(s) => match s.trim().parse::<f64>() {
            Ok(n) if n.is_finite() => Ok(n),
            _ => Err(de::Error::custom(format!("invalid price: {:?}", s))),
        },
    }
}
