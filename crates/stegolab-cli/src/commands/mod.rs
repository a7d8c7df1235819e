pub mod analyze;
pub mod capacity;
pub mod hide;
pub mod unveil;
