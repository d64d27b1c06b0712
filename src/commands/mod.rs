pub mod delete;
pub mod extract;
pub mod merge;
pub mod rotate;
