//! Domain list input.
//!
//! Loads the domain list from a CSV `domain` column or a plain-text file,
//! removes duplicates for the active policy, and converts raw text dumps into
//! the CSV form the loader expects.

mod dedup;
mod extract;
mod load;

// Re-export public API
pub use dedup::{dedup_case_insensitive, dedup_exact};
pub use extract::extract_domains_plaintext;
pub use load::load_domains;
