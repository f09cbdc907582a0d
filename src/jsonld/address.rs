//! Postal address reduction.
//!
//! A page can describe its address in several records, each carrying only some
//! of the parts. The reducer walks the candidates in record order and fills each
//! field from the first candidate that offers a non-empty value for it.

use serde::Serialize;
use serde_json::Value;

use crate::parse::JsonLdRecord;
use crate::utils::{collapse_whitespace, non_empty_trimmed};

/// Postal address. Each part is present only when non-empty after trimming.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Address {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl Address {
    pub fn is_empty(&self) -> bool {
        self.street.is_none()
            && self.city.is_none()
            && self.state.is_none()
            && self.zip.is_none()
            && self.country.is_none()
    }

    /// Builds a partial address from a schema.org `PostalAddress` object.
    fn from_postal_object(object: &serde_json::Map<String, Value>) -> Self {
        let part = |key: &str| object.get(key).and_then(Value::as_str).and_then(non_empty_trimmed);
        Address {
            street: part("streetAddress"),
            city: part("addressLocality"),
            state: part("addressRegion"),
            zip: part("postalCode"),
            country: part("addressCountry"),
        }
    }

    /// Fills every field still empty from `other`.
    fn or_fill(self, other: Address) -> Address {
        Address {
            street: self.street.or(other.street),
            city: self.city.or(other.city),
            state: self.state.or(other.state),
            zip: self.zip.or(other.zip),
            country: self.country.or(other.country),
        }
    }
}

/// Extracts the page address from JSON-LD records.
///
/// - If any record's `address` is a plain string, the first such string wins
///   outright: its whitespace is collapsed and it becomes the street.
/// - Otherwise object-shaped addresses are reduced field by field, first
///   non-empty value per field wins.
///
/// Returns `None` when no field ends up non-empty.
pub fn extract_address(records: &[JsonLdRecord]) -> Option<Address> {
    let candidates: Vec<&Value> = records
        .iter()
        .filter_map(|record| record.get("address"))
        .collect();

    if let Some(line) = candidates.iter().find_map(|value| value.as_str()) {
        let street = collapse_whitespace(line);
        return (!street.is_empty()).then(|| Address {
            street: Some(street),
            ..Default::default()
        });
    }

    let address = candidates
        .iter()
        .filter_map(|value| value.as_object())
        .map(Address::from_postal_object)
        .fold(Address::default(), Address::or_fill);

    (!address.is_empty()).then_some(address)
}
