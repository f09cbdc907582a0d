//! JSON-LD interpretation.
//!
//! Turns loosely typed JSON-LD records into named facts:
//! - string projections (description, `@type`, names, telephone)
//! - a postal address, reduced field by field across records
//! - logo URLs (merged with `og:image` meta tags)
//! - `sameAs` cross references to social profiles
//!
//! A value is only interpreted when it has the expected JSON type; anything
//! else is ignored, never coerced.

mod address;
mod fields;
mod links;

// Re-export public API
pub use address::{extract_address, Address};
pub use fields::{
    alternate_names, descriptions, legal_names, names, string_field, telephones, types,
};
pub use links::{extract_logos, extract_same_as, ProfileNetwork, SameAsProfiles};

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
