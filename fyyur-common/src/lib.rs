//! # Fyyur Common Library
//!
//! Shared code for the Fyyur booking service including:
//! - Database bootstrap, schema and row models
//! - Fixed choice lists (US states, genres)
//! - Form validation for venues, artists and shows
//! - Configuration loading
//! - Timestamp helpers

pub mod choices;
pub mod config;
pub mod db;
pub mod error;
pub mod forms;
pub mod time;

pub use error::{Error, Result};
pub use forms::{ArtistForm, FormData, ShowForm, ValidationErrors, VenueForm};
