//! # LearnPortal Client
//!
//! Client library for the LearnPortal education API - class rosters,
//! student summaries, and home-learning progress behind a token-based
//! login.
//!
//! ## Features
//!
//! - **Transport**: thin `reqwest` wrapper with bearer-token injection and
//!   centralized status handling
//! - **Envelope decoding**: every backend response shares a
//!   `{status, data, errors}` wrapper, decoded in one place
//! - **Session gate**: token + display name + 23-hour expiry persisted
//!   through a pluggable [`SessionStore`]
//! - **Paging core**: exhausts server-side pagination, applies the
//!   null-first ordering rule, and re-paginates locally
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use lp_client::{Client, ClientConfig, MemorySessionStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::new("https://localhost:5001");
//!     let store = Arc::new(MemorySessionStore::new());
//!     let client = Client::new(config, store)?;
//!
//!     let session = client.auth().login("staff@example.edu", "secret").await?;
//!     let classes = client.classes().list(&session.token, 1, 10).await?;
//!     println!("Found {} classes", classes.data.len());
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod dto;
pub mod envelope;
pub mod error;
pub mod paging;
pub mod services;
pub mod session;
pub mod transport;

// Re-export main types
pub use client::Client;
pub use config::ClientConfig;
pub use envelope::Envelope;
pub use error::{Error, Result};
pub use paging::{fetch_all_pages, paginate, stable_partition, Page, FETCH_ALL_PAGE_SIZE};
pub use session::{FileSessionStore, MemorySessionStore, Session, SessionStore};
pub use transport::Transport;
