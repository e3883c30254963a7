//! Show queries and writes

use chrono::NaiveDateTime;
use fyyur_common::db::Show;
use fyyur_common::{Error, Result, ShowForm};
use sqlx::{FromRow, SqlitePool};
use tracing::{info, warn};

use super::is_foreign_key_violation;

/// A show joined with its venue and artist
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct ShowRow {
    pub id: i64,
    pub venue_id: i64,
    pub venue_name: String,
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: String,
    pub start_time: NaiveDateTime,
}

/// Every show in start order
pub async fn list_all(pool: &SqlitePool) -> Result<Vec<ShowRow>> {
    let shows = sqlx::query_as::<_, ShowRow>(
        r#"
        SELECT s.id AS id,
               v.id AS venue_id,
               v.name AS venue_name,
               a.id AS artist_id,
               a.name AS artist_name,
               a.image_link AS artist_image_link,
               s.start_time AS start_time
        FROM shows s
        JOIN venues v ON v.id = s.venue_id
        JOIN artists a ON a.id = s.artist_id
        ORDER BY s.start_time, s.id
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(shows)
}

pub async fn load(pool: &SqlitePool, show_id: i64) -> Result<Option<Show>> {
    let show = sqlx::query_as::<_, Show>(
        "SELECT id, artist_id, venue_id, start_time FROM shows WHERE id = ?",
    )
    .bind(show_id)
    .fetch_optional(pool)
    .await?;

    Ok(show)
}

/// Insert a show and return its generated id
///
/// A show naming an artist or venue that does not exist is rejected as
/// invalid input and nothing is written.
pub async fn create(pool: &SqlitePool, form: &ShowForm) -> Result<i64> {
    let mut tx = pool.begin().await?;

    let artist_exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM artists WHERE id = ?)")
        .bind(form.artist_id)
        .fetch_one(&mut *tx)
        .await?;
    if !artist_exists {
        warn!("Show rejected: artist {} does not exist", form.artist_id);
        return Err(Error::InvalidInput(format!("Artist {} does not exist.", form.artist_id)));
    }

    let venue_exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM venues WHERE id = ?)")
        .bind(form.venue_id)
        .fetch_one(&mut *tx)
        .await?;
    if !venue_exists {
        warn!("Show rejected: venue {} does not exist", form.venue_id);
        return Err(Error::InvalidInput(format!("Venue {} does not exist.", form.venue_id)));
    }

    let inserted = sqlx::query("INSERT INTO shows (artist_id, venue_id, start_time) VALUES (?, ?, ?)")
        .bind(form.artist_id)
        .bind(form.venue_id)
        .bind(form.start_time)
        .execute(&mut *tx)
        .await;

    let show_id = match inserted {
        Ok(result) => result.last_insert_rowid(),
        // The row was deleted between the check and the insert
        Err(e) if is_foreign_key_violation(&e) => {
            return Err(Error::InvalidInput(
                "The artist or venue for this show no longer exists.".to_string(),
            ));
        }
        Err(e) => return Err(e.into()),
    };

    tx.commit().await?;

    info!(
        "Show {} created (artist {}, venue {}, {})",
        show_id, form.artist_id, form.venue_id, form.start_time
    );
    Ok(show_id)
}

pub async fn delete(pool: &SqlitePool, show_id: i64) -> Result<()> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query("DELETE FROM shows WHERE id = ?")
        .bind(show_id)
        .execute(&mut *tx)
        .await?;

    if result.rows_affected() == 0 {
        return Err(Error::NotFound(format!("Show {}", show_id)));
    }

    tx.commit().await?;

    info!("Show {} deleted", show_id);
    Ok(())
}
