pub mod table;
pub mod datetime;

pub use table::Table;
