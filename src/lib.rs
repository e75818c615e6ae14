pub mod book;
pub mod catalog;
pub mod error;
pub mod id;
pub mod report;
pub mod snapshot;
pub mod transaction;
pub mod user;
