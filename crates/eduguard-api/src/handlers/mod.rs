pub mod dashboard;
pub mod root;
pub mod upload;
