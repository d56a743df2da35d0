pub mod activity;
pub mod seed;

pub use activity::{Activity, Catalog};
pub use seed::seed_catalog;
