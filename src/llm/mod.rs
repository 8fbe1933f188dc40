pub mod client;
pub mod estimate;
pub mod summarize;
