//! Database models
//!
//! One struct per table row. Genres are stored as a JSON array.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Venue {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub genres: Json<Vec<String>>,
    pub facebook_link: Option<String>,
    pub image_link: String,
    pub website: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Artist {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub genres: Json<Vec<String>>,
    pub facebook_link: Option<String>,
    pub image_link: String,
    pub website: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Show {
    pub id: i64,
    pub artist_id: i64,
    pub venue_id: i64,
    pub start_time: NaiveDateTime,
}

/// Column list matching `Venue`
pub const VENUE_COLUMNS: &str = "id, name, city, state, address, phone, genres, facebook_link, \
     image_link, website, seeking_talent, seeking_description";

/// Column list matching `Artist`
pub const ARTIST_COLUMNS: &str = "id, name, city, state, phone, genres, facebook_link, \
     image_link, website, seeking_venue, seeking_description";
