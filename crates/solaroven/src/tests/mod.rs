//! Integration tests for the analysis tool
//!
//! Tests are organized by topic:
//! - `analysis` - End-to-end runs from analysis files
//! - `export` - Files written to the output directory

mod analysis;
