pub mod client;
pub mod store;

pub use client::{CatalogClient, CatalogView, LOADING_CAPTION};
pub use store::MovieStore;
