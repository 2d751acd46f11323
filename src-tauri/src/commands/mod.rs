pub mod article;
pub mod indexer;
pub mod recent;
pub mod search;
