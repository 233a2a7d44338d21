//! The six category calculators.
//!
//! Each module owns its fixed weight set (compile-time checked to sum
//! to 100), its tier tables, and its missing-data policy. The policies
//! deliberately differ: content relevance zeroes out on missing data,
//! content quality and monetisation give the benefit of the doubt.

pub mod audience;
pub mod engagement;
pub mod growth;
pub mod monetisation;
pub mod quality;
pub mod relevance;
