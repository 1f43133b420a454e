//! Item Model
//!
//! One grocery entry plus the lenient input parsers used by the add/edit forms.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::error::{ListError, ShareError};

/// Opaque, string-comparable item identifier
pub type ItemId = String;

/// A single grocery entry.
///
/// Fields are private so that `price >= 0` and `quantity >= 1` can only be
/// changed through setters that keep them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    id: ItemId,
    name: String,
    #[serde(deserialize_with = "lenient_price")]
    price: f64,
    #[serde(deserialize_with = "lenient_quantity")]
    quantity: u32,
    #[serde(default)]
    completed: bool,
    #[serde(default = "Utc::now")]
    created_at: DateTime<Utc>,
}

impl Item {
    /// Create a new, uncompleted item with a fresh id.
    pub fn new(name: &str, price: f64, quantity: u32) -> Result<Self, ListError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ListError::EmptyName);
        }
        Ok(Self {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            price: clamp_price(price),
            quantity: quantity.max(1),
            completed: false,
            created_at: Utc::now(),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn completed(&self) -> bool {
        self.completed
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// `price * quantity`
    pub fn subtotal(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }

    /// Returns false (and keeps the old name) when `name` is blank.
    pub(crate) fn set_name(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        self.name = name.to_string();
        true
    }

    pub(crate) fn set_price(&mut self, price: f64) {
        self.price = clamp_price(price);
    }

    pub(crate) fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity.max(1);
    }

    pub(crate) fn toggle(&mut self) {
        self.completed = !self.completed;
    }

    /// Bring an item read from storage or a shared link back within the
    /// model's invariants. Blank names cannot be repaired.
    pub(crate) fn normalize(&mut self) -> Result<(), ShareError> {
        let name = self.name.clone();
        if !self.set_name(&name) {
            return Err(ShareError::InvalidItem(format!("item {} has an empty name", self.id)));
        }
        self.price = clamp_price(self.price);
        self.quantity = self.quantity.max(1);
        Ok(())
    }
}

fn clamp_price(price: f64) -> f64 {
    // also folds -0.0 into 0.0 so it never formats as "-0.00"
    if price.is_finite() && price > 0.0 {
        price
    } else {
        0.0
    }
}

/// Parse a price field from its leading number, so `"2.5kg"` reads as 2.5.
/// `None` when there is no leading number or it is negative or non-finite.
pub fn parse_price(input: &str) -> Option<f64> {
    let value: f64 = float_prefix(input.trim()).parse().ok()?;
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    Some(clamp_price(value))
}

/// Parse a quantity field from its leading integer. `"3 bags"` reads as 3
/// and `"2.7"` as 2; `None` unless that yields a positive `u32`.
pub fn parse_quantity(input: &str) -> Option<u32> {
    let whole: i64 = int_prefix(input.trim()).parse().ok()?;
    if whole < 1 {
        return None;
    }
    u32::try_from(whole).ok()
}

/// Longest leading `[+-]digits[.digits][(e|E)[+-]digits]`, or `""`
fn float_prefix(input: &str) -> &str {
    let bytes = input.as_bytes();
    let mut end = sign_len(bytes);
    let int_digits = digits_len(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digits_len(&bytes[end + 1..]);
        if frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return "";
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let exp_start = end + 1;
        let exp_digits_start = exp_start + sign_len(&bytes[exp_start..]);
        let exp_digits = digits_len(&bytes[exp_digits_start..]);
        if exp_digits > 0 {
            end = exp_digits_start + exp_digits;
        }
    }
    &input[..end]
}

/// Longest leading `[+-]digits`, or `""`
fn int_prefix(input: &str) -> &str {
    let bytes = input.as_bytes();
    let sign = sign_len(bytes);
    let digits = digits_len(&bytes[sign..]);
    if digits == 0 {
        return "";
    }
    &input[..sign + digits]
}

fn sign_len(bytes: &[u8]) -> usize {
    usize::from(matches!(bytes.first(), Some(b'+' | b'-')))
}

fn digits_len(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Lists written by older versions carry `null` where a price overflowed.
/// Anything that is not a number reads as 0.
fn lenient_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = serde_json::Value::deserialize(deserializer)?;
    Ok(raw.as_f64().map_or(0.0, clamp_price))
}

/// Older lists may carry `0`, negative, fractional or `null` quantities.
fn lenient_quantity<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = serde_json::Value::deserialize(deserializer)?;
    match raw.as_f64() {
        Some(n) if n.is_finite() && n >= 1.0 => Ok(n.trunc().min(f64::from(u32::MAX)) as u32),
        _ => Ok(1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_and_clamps() {
        let item = Item::new("  Milk ", -3.0, 0).unwrap();
        assert_eq!(item.name(), "Milk");
        assert_eq!(item.price(), 0.0);
        assert_eq!(item.quantity(), 1);
        assert!(!item.completed());
    }

    #[test]
    fn test_new_rejects_blank_name() {
        assert_eq!(Item::new("   ", 1.0, 1), Err(ListError::EmptyName));
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Item::new("a", 0.0, 1).unwrap();
        let b = Item::new("b", 0.0, 1).unwrap();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("2.5"), Some(2.5));
        assert_eq!(parse_price(" 10 "), Some(10.0));
        assert_eq!(parse_price("-0"), Some(0.0));
        assert_eq!(parse_price("bad"), None);
        assert_eq!(parse_price(""), None);
        assert_eq!(parse_price("-1"), None);
        assert_eq!(parse_price("NaN"), None);
        assert_eq!(parse_price("inf"), None);
        assert_eq!(parse_price("1e999"), None);
    }

    #[test]
    fn test_parse_reads_leading_number() {
        assert_eq!(parse_price("2.5kg"), Some(2.5));
        assert_eq!(parse_price("12 baht"), Some(12.0));
        assert_eq!(parse_price(".5 each"), Some(0.5));
        assert_eq!(parse_price("3."), Some(3.0));
        assert_eq!(parse_price("1.5e2x"), Some(150.0));
        assert_eq!(parse_price("4e"), Some(4.0));
        assert_eq!(parse_price("-2kg"), None);
        assert_eq!(parse_price("kg 2"), None);

        assert_eq!(parse_quantity("3 bags"), Some(3));
        assert_eq!(parse_quantity("+4"), Some(4));
        assert_eq!(parse_quantity("0 left"), None);
        assert_eq!(parse_quantity("bags 3"), None);
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("3"), Some(3));
        assert_eq!(parse_quantity("2.7"), Some(2));
        assert_eq!(parse_quantity("0"), None);
        assert_eq!(parse_quantity("-5"), None);
        assert_eq!(parse_quantity("0.5"), None);
        assert_eq!(parse_quantity("abc"), None);
        assert_eq!(parse_quantity("99999999999"), None);
    }

    #[test]
    fn test_deserialize_legacy_item() {
        let json = r#"{"id":"1700000000000","name":"Eggs","price":4.25,"quantity":0,"createdAt":"2024-01-05T10:00:00.000Z"}"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.id(), "1700000000000");
        assert_eq!(item.quantity(), 1);
        assert!(!item.completed());
        assert_eq!(item.created_at().to_rfc3339(), "2024-01-05T10:00:00+00:00");
    }

    #[test]
    fn test_serializes_camel_case() {
        let item = Item::new("Bread", 1.5, 2).unwrap();
        let value = serde_json::to_value(&item).unwrap();
        assert!(value.get("createdAt").is_some());
        assert_eq!(value["quantity"], 2);
        assert_eq!(value["completed"], false);
    }

    #[test]
    fn test_normalize_repairs_numbers() {
        let json = r#"{"id":"x","name":" Tea ","price":-2,"quantity":-1,"completed":true}"#;
        let mut item: Item = serde_json::from_str(json).unwrap();
        item.normalize().unwrap();
        assert_eq!(item.name(), "Tea");
        assert_eq!(item.price(), 0.0);
        assert_eq!(item.quantity(), 1);
        assert!(item.completed());
    }

    #[test]
    fn test_null_numbers_read_as_defaults() {
        let json = r#"{"id":"x","name":"Caviar","price":null,"quantity":null}"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.price(), 0.0);
        assert_eq!(item.quantity(), 1);

        let json = r#"{"id":"y","name":"Salt","price":"cheap","quantity":2}"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.price(), 0.0);
        assert_eq!(item.quantity(), 2);
    }

    #[test]
    fn test_normalize_rejects_blank_name() {
        let json = r#"{"id":"x","name":"  ","price":1,"quantity":1}"#;
        let mut item: Item = serde_json::from_str(json).unwrap();
        assert!(matches!(item.normalize(), Err(ShareError::InvalidItem(_))));
    }
}
