pub mod aggregate;

pub use aggregate::{filter_products, parse_catalog, FilterOutcome, Product};
