//! Inventory record types
//!
//! Two layers of item data exist:
//! - [`ItemCandidate`]: raw caller input, every field optional, quantity as text or integer
//! - [`NewItem`]: the validated form; only obtainable through validation
//!
//! [`InventoryRecord`] is a `NewItem` plus the id assigned by the record store.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::limits::Limits;

/// Case-fold a name for indexing and duplicate detection.
pub fn fold_name(name: &str) -> String {
    name.to_lowercase()
}

// ============================================================================
// RecordId
// ============================================================================

/// Identifier assigned by the record store
///
/// Ids start at 1, increase monotonically and are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(u64);

impl RecordId {
    /// Wrap a raw id
    pub const fn new(id: u64) -> Self {
        RecordId(id)
    }

    /// The raw id
    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// ExpiryDate
// ============================================================================

/// Calendar date in canonical `YYYY-MM-DD` form
///
/// The canonical string is zero-padded with a four-digit year, so ordering
/// the strings lexicographically orders the dates chronologically. `Ord` is
/// derived from the string for that reason.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ExpiryDate(String);

impl ExpiryDate {
    const FORMAT: &'static str = "%Y-%m-%d";

    /// Parse a `YYYY-MM-DD` date. Surrounding whitespace is ignored.
    ///
    /// Forms chrono would accept but that do not round-trip to the canonical
    /// string (e.g. `2024-6-3`) are rejected.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        let date = NaiveDate::parse_from_str(trimmed, Self::FORMAT)
            .map_err(|_| ValidationError::InvalidExpiryDate(raw.to_string()))?;
        let canonical = date.format(Self::FORMAT).to_string();
        if canonical != trimmed {
            return Err(ValidationError::InvalidExpiryDate(raw.to_string()));
        }
        Ok(ExpiryDate(canonical))
    }

    /// The canonical string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExpiryDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ExpiryDate {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        ExpiryDate::parse(&value)
    }
}

impl From<ExpiryDate> for String {
    fn from(date: ExpiryDate) -> Self {
        date.0
    }
}

// ============================================================================
// Raw input
// ============================================================================

/// Quantity as received from a caller: a JSON number or a text cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawQuantity {
    /// Integer value
    Int(i64),
    /// Non-integer JSON number, or an integer outside `i64`
    Float(f64),
    /// Text value, e.g. a CSV cell
    Text(String),
}

impl RawQuantity {
    /// Parse into a non-negative quantity.
    ///
    /// Floats are accepted only when they hold a whole number (`5.0`).
    pub fn parse(&self) -> Result<u32, ValidationError> {
        let invalid = || ValidationError::InvalidQuantity(self.to_string());
        match self {
            RawQuantity::Int(n) => u32::try_from(*n).map_err(|_| invalid()),
            RawQuantity::Float(x) => {
                if x.fract() == 0.0 && *x >= 0.0 && *x <= f64::from(u32::MAX) {
                    Ok(*x as u32)
                } else {
                    Err(invalid())
                }
            }
            RawQuantity::Text(s) => s
                .trim()
                .parse::<i64>()
                .ok()
                .and_then(|n| u32::try_from(n).ok())
                .ok_or_else(invalid),
        }
    }
}

impl fmt::Display for RawQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawQuantity::Int(n) => write!(f, "{}", n),
            RawQuantity::Float(x) => write!(f, "{}", x),
            RawQuantity::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for RawQuantity {
    fn from(n: i64) -> Self {
        RawQuantity::Int(n)
    }
}

impl From<u32> for RawQuantity {
    fn from(n: u32) -> Self {
        RawQuantity::Int(i64::from(n))
    }
}

impl From<&str> for RawQuantity {
    fn from(s: &str) -> Self {
        RawQuantity::Text(s.to_string())
    }
}

impl From<String> for RawQuantity {
    fn from(s: String) -> Self {
        RawQuantity::Text(s)
    }
}

/// Unvalidated item fields
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemCandidate {
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
    /// Brand
    #[serde(default)]
    pub brand: Option<String>,
    /// Quantity, integer or text
    #[serde(default)]
    pub quantity: Option<RawQuantity>,
    /// Expiry date text
    #[serde(default, rename = "expiryDate")]
    pub expiry_date: Option<String>,
}

impl ItemCandidate {
    /// Candidate with every field present
    pub fn new(
        name: impl Into<String>,
        brand: impl Into<String>,
        quantity: impl Into<RawQuantity>,
        expiry_date: impl Into<String>,
    ) -> Self {
        ItemCandidate {
            name: Some(name.into()),
            brand: Some(brand.into()),
            quantity: Some(quantity.into()),
            expiry_date: Some(expiry_date.into()),
        }
    }

    /// Validate with default limits
    pub fn validate(&self) -> Result<NewItem, ValidationError> {
        self.validate_with(&Limits::default())
    }

    /// Validate fields in order: name, brand, quantity, expiryDate.
    ///
    /// The first failing field is reported.
    pub fn validate_with(&self, limits: &Limits) -> Result<NewItem, ValidationError> {
        let name = required_text("name", self.name.as_deref())?;
        limits.validate_name(&name)?;
        let brand = required_text("brand", self.brand.as_deref())?;
        limits.validate_brand(&brand)?;
        let quantity = self
            .quantity
            .as_ref()
            .ok_or(ValidationError::MissingField("quantity"))?
            .parse()?;
        let expiry_raw = self
            .expiry_date
            .as_deref()
            .ok_or(ValidationError::MissingField("expiryDate"))?;
        let expiry_date = ExpiryDate::parse(expiry_raw)?;
        Ok(NewItem {
            name,
            brand,
            quantity,
            expiry_date,
        })
    }
}

fn required_text(field: &'static str, value: Option<&str>) -> Result<String, ValidationError> {
    let value = value.ok_or(ValidationError::MissingField(field))?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    Ok(trimmed.to_string())
}

// ============================================================================
// NewItem
// ============================================================================

/// A validated item, ready to be committed
///
/// Name and brand are trimmed; the name keeps its case for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    name: String,
    brand: String,
    quantity: u32,
    expiry_date: ExpiryDate,
}

impl NewItem {
    /// Validate typed fields into a `NewItem`
    pub fn new(
        name: &str,
        brand: &str,
        quantity: u32,
        expiry_date: &str,
    ) -> Result<Self, ValidationError> {
        ItemCandidate::new(name, brand, quantity, expiry_date).validate()
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Case-folded name used as the index key
    pub fn folded_name(&self) -> String {
        fold_name(&self.name)
    }

    /// Brand
    pub fn brand(&self) -> &str {
        &self.brand
    }

    /// Quantity
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Expiry date
    pub fn expiry_date(&self) -> &ExpiryDate {
        &self.expiry_date
    }

    /// Attach an id, producing the stored record
    pub fn into_record(self, id: RecordId) -> InventoryRecord {
        InventoryRecord {
            id,
            name: self.name,
            brand: self.brand,
            quantity: self.quantity,
            expiry_date: self.expiry_date,
        }
    }
}

// ============================================================================
// InventoryRecord
// ============================================================================

/// A committed inventory row
///
/// Records are immutable once stored. Index structures hold the folded name
/// or a value copy, never a reference into the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryRecord {
    /// Store-assigned id
    pub id: RecordId,
    /// Display name
    pub name: String,
    /// Brand
    pub brand: String,
    /// Units in stock
    pub quantity: u32,
    /// Expiry date
    #[serde(rename = "expiryDate")]
    pub expiry_date: ExpiryDate,
}

impl InventoryRecord {
    /// Case-folded name used as the index key
    pub fn folded_name(&self) -> String {
        fold_name(&self.name)
    }
}
