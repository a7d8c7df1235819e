pub mod analyze;
pub mod hide;
pub mod unveil;
