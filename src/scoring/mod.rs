pub mod edit_distance;
pub mod summary;
