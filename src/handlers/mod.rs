pub mod chapter;
pub mod progress;
pub mod quiz;
