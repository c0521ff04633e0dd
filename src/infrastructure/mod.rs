pub mod audio;
pub mod catalog;
pub mod observability;
pub mod speech;
pub mod storage;
pub mod translation;
