//! Core modules for Yakuzadle

pub mod normalize;
pub mod categorical;
pub mod height;
pub mod birth;
pub mod fighting_style;
pub mod compare;
pub mod catalog;
pub mod daily;
pub mod api;

pub use compare::{compare, Comparator};
pub use catalog::{daily_index, Catalog, CatalogError, ListEntry};
pub use daily::{today_utc, DailyTarget};
pub use api::{create_router, run_server, ServerConfig};
