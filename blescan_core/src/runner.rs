pub mod context;
pub mod feed;
