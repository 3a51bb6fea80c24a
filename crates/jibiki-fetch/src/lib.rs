//! Retrieval of Weblio content pages and extraction of their entries.

mod client;
mod error;

pub use client::WeblioClient;
pub use error::FetchError;
