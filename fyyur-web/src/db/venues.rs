//! Venue queries and writes

use chrono::NaiveDateTime;
use fyyur_common::db::{Venue, VENUE_COLUMNS};
use fyyur_common::{Error, Result, VenueForm};
use sqlx::types::Json;
use sqlx::SqlitePool;
use tracing::{debug, info};

use super::{filter_by_name, CounterpartShow, NamedRow};

/// Distinct `(state, city)` pairs, ordered by state then city
pub async fn list_localities(pool: &SqlitePool) -> Result<Vec<(String, String)>> {
    let localities = sqlx::query_as::<_, (String, String)>(
        "SELECT DISTINCT state, city FROM venues ORDER BY state, city",
    )
    .fetch_all(pool)
    .await?;

    Ok(localities)
}

/// Venues in one locality, ordered by name
pub async fn list_in_locality(pool: &SqlitePool, state: &str, city: &str) -> Result<Vec<NamedRow>> {
    let venues = sqlx::query_as::<_, NamedRow>(
        "SELECT id, name FROM venues WHERE state = ? AND city = ? ORDER BY name, id",
    )
    .bind(state)
    .bind(city)
    .fetch_all(pool)
    .await?;

    Ok(venues)
}

/// Venues whose name contains `term`, case-insensitively, ordered by id
pub async fn search(pool: &SqlitePool, term: &str) -> Result<Vec<NamedRow>> {
    let all = sqlx::query_as::<_, NamedRow>("SELECT id, name FROM venues ORDER BY id")
        .fetch_all(pool)
        .await?;
    let venues = filter_by_name(all, term);

    debug!("Venue search {:?} matched {}", term, venues.len());
    Ok(venues)
}

/// Shows at this venue starting at or after `now`
pub async fn count_upcoming_shows(pool: &SqlitePool, venue_id: i64, now: NaiveDateTime) -> Result<i64> {
    let count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM shows WHERE venue_id = ? AND start_time >= ?")
            .bind(venue_id)
            .bind(now)
            .fetch_one(pool)
            .await?;

    Ok(count)
}

pub async fn load(pool: &SqlitePool, venue_id: i64) -> Result<Option<Venue>> {
    let venue = sqlx::query_as::<_, Venue>(&format!(
        "SELECT {} FROM venues WHERE id = ?",
        VENUE_COLUMNS
    ))
    .bind(venue_id)
    .fetch_optional(pool)
    .await?;

    Ok(venue)
}

pub async fn exists(pool: &SqlitePool, venue_id: i64) -> Result<bool> {
    let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM venues WHERE id = ?)")
        .bind(venue_id)
        .fetch_one(pool)
        .await?;

    Ok(exists)
}

/// Shows at this venue with the performing artist, in start order
pub async fn load_shows(pool: &SqlitePool, venue_id: i64) -> Result<Vec<CounterpartShow>> {
    let shows = sqlx::query_as::<_, CounterpartShow>(
        r#"
        SELECT a.id AS counterpart_id,
               a.name AS counterpart_name,
               a.image_link AS counterpart_image_link,
               s.start_time AS start_time
        FROM shows s
        JOIN artists a ON a.id = s.artist_id
        WHERE s.venue_id = ?
        ORDER BY s.start_time, s.id
        "#,
    )
    .bind(venue_id)
    .fetch_all(pool)
    .await?;

    Ok(shows)
}

/// Insert a venue and return its generated id
pub async fn create(pool: &SqlitePool, form: &VenueForm) -> Result<i64> {
    let mut tx = pool.begin().await?;

    let venue_id = sqlx::query(
        r#"
        INSERT INTO venues (
            name, city, state, address, phone, genres, facebook_link,
            image_link, website, seeking_talent, seeking_description
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&form.name)
    .bind(&form.city)
    .bind(&form.state)
    .bind(&form.address)
    .bind(&form.phone)
    .bind(Json(&form.genres))
    .bind(&form.facebook_link)
    .bind(&form.image_link)
    .bind(&form.website_link)
    .bind(form.seeking_talent)
    .bind(&form.seeking_description)
    .execute(&mut *tx)
    .await?
    .last_insert_rowid();

    tx.commit().await?;

    info!("Venue {} created", venue_id);
    Ok(venue_id)
}

/// Replace every field of an existing venue
pub async fn update(pool: &SqlitePool, venue_id: i64, form: &VenueForm) -> Result<()> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query(
        r#"
        UPDATE venues SET
            name = ?, city = ?, state = ?, address = ?, phone = ?, genres = ?,
            facebook_link = ?, image_link = ?, website = ?, seeking_talent = ?,
            seeking_description = ?
        WHERE id = ?
        "#,
    )
    .bind(&form.name)
    .bind(&form.city)
    .bind(&form.state)
    .bind(&form.address)
    .bind(&form.phone)
    .bind(Json(&form.genres))
    .bind(&form.facebook_link)
    .bind(&form.image_link)
    .bind(&form.website_link)
    .bind(form.seeking_talent)
    .bind(&form.seeking_description)
    .bind(venue_id)
    .execute(&mut *tx)
    .await?;

    if result.rows_affected() == 0 {
        return Err(Error::NotFound(format!("Venue {}", venue_id)));
    }

    tx.commit().await?;

    info!("Venue {} updated", venue_id);
    Ok(())
}

/// Delete a venue; its shows go with it
pub async fn delete(pool: &SqlitePool, venue_id: i64) -> Result<()> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query("DELETE FROM venues WHERE id = ?")
        .bind(venue_id)
        .execute(&mut *tx)
        .await?;

    if result.rows_affected() == 0 {
        return Err(Error::NotFound(format!("Venue {}", venue_id)));
    }

    tx.commit().await?;

    info!("Venue {} deleted", venue_id);
    Ok(())
}
