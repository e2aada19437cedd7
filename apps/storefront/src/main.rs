//! # Storefront Listing Entry Point
//!
//! ```text
//! storefront [search] [category]
//!
//! $ SWEETSHOP_CATALOG_PATH=sweets.json storefront jamun milk
//! Gulab Jamun                   ₹320.00/kg  12 kg in stock
//! ```
//!
//! The actual setup is in lib.rs for better testability.

use std::process::ExitCode;

fn main() -> ExitCode {
    match sweetshop_storefront::run(std::env::args().skip(1)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e.message);
            ExitCode::FAILURE
        }
    }
}
