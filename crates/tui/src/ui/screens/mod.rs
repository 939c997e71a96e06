pub mod analysis;
pub mod expenses;
