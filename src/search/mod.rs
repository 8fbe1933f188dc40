pub mod expand;
pub mod rank;
