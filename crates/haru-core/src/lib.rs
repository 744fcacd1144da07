//! haru-core - Core library for Haru
//!
//! This crate contains the shared models, the diary API client, and client
//! configuration used by the Haru web interface.

pub mod api;
pub mod config;
pub mod error;
pub mod models;

pub use api::DiaryApiClient;
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use models::{Diary, DiaryId, User};
