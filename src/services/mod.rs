// Service exports
pub mod history;
pub mod profile_store;

pub use history::HistoryStore;
pub use profile_store::{ProfileStoreClient, ProfileStoreError};
