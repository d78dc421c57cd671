pub mod adapters;
pub mod datasets;
