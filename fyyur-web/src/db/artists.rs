//! Artist queries and writes

use chrono::NaiveDateTime;
use fyyur_common::db::{Artist, ARTIST_COLUMNS};
use fyyur_common::{ArtistForm, Error, Result};
use sqlx::types::Json;
use sqlx::SqlitePool;
use tracing::{debug, info};

use super::{filter_by_name, CounterpartShow, NamedRow};

/// Every artist, ordered by name
pub async fn list_all(pool: &SqlitePool) -> Result<Vec<NamedRow>> {
    let artists = sqlx::query_as::<_, NamedRow>("SELECT id, name FROM artists ORDER BY name, id")
        .fetch_all(pool)
        .await?;

    Ok(artists)
}

/// Artists whose name contains `term`, case-insensitively, ordered by id
pub async fn search(pool: &SqlitePool, term: &str) -> Result<Vec<NamedRow>> {
    let all = sqlx::query_as::<_, NamedRow>("SELECT id, name FROM artists ORDER BY id")
        .fetch_all(pool)
        .await?;
    let artists = filter_by_name(all, term);

    debug!("Artist search {:?} matched {}", term, artists.len());
    Ok(artists)
}

/// Shows by this artist starting at or after `now`
pub async fn count_upcoming_shows(pool: &SqlitePool, artist_id: i64, now: NaiveDateTime) -> Result<i64> {
    let count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM shows WHERE artist_id = ? AND start_time >= ?")
            .bind(artist_id)
            .bind(now)
            .fetch_one(pool)
            .await?;

    Ok(count)
}

pub async fn load(pool: &SqlitePool, artist_id: i64) -> Result<Option<Artist>> {
    let artist = sqlx::query_as::<_, Artist>(&format!(
        "SELECT {} FROM artists WHERE id = ?",
        ARTIST_COLUMNS
    ))
    .bind(artist_id)
    .fetch_optional(pool)
    .await?;

    Ok(artist)
}

pub async fn exists(pool: &SqlitePool, artist_id: i64) -> Result<bool> {
    let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM artists WHERE id = ?)")
        .bind(artist_id)
        .fetch_one(pool)
        .await?;

    Ok(exists)
}

/// Shows by this artist with the hosting venue, in start order
pub async fn load_shows(pool: &SqlitePool, artist_id: i64) -> Result<Vec<CounterpartShow>> {
    let shows = sqlx::query_as::<_, CounterpartShow>(
        r#"
        SELECT v.id AS counterpart_id,
               v.name AS counterpart_name,
               v.image_link AS counterpart_image_link,
               s.start_time AS start_time
        FROM shows s
        JOIN venues v ON v.id = s.venue_id
        WHERE s.artist_id = ?
        ORDER BY s.start_time, s.id
        "#,
    )
    .bind(artist_id)
    .fetch_all(pool)
    .await?;

    Ok(shows)
}

/// Insert an artist and return its generated id
pub async fn create(pool: &SqlitePool, form: &ArtistForm) -> Result<i64> {
    let mut tx = pool.begin().await?;

    let artist_id = sqlx::query(
        r#"
        INSERT INTO artists (
            name, city, state, phone, genres, facebook_link,
            image_link, website, seeking_venue, seeking_description
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&form.name)
    .bind(&form.city)
    .bind(&form.state)
    .bind(&form.phone)
    .bind(Json(&form.genres))
    .bind(&form.facebook_link)
    .bind(&form.image_link)
    .bind(&form.website_link)
    .bind(form.seeking_venue)
    .bind(&form.seeking_description)
    .execute(&mut *tx)
    .await?
    .last_insert_rowid();

    tx.commit().await?;

    info!("Artist {} created", artist_id);
    Ok(artist_id)
}

/// Replace every field of an existing artist
pub async fn update(pool: &SqlitePool, artist_id: i64, form: &ArtistForm) -> Result<()> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query(
        r#"
        UPDATE artists SET
            name = ?, city = ?, state = ?, phone = ?, genres = ?,
            facebook_link = ?, image_link = ?, website = ?, seeking_venue = ?,
            seeking_description = ?
        WHERE id = ?
        "#,
    )
    .bind(&form.name)
    .bind(&form.city)
    .bind(&form.state)
    .bind(&form.phone)
    .bind(Json(&form.genres))
    .bind(&form.facebook_link)
    .bind(&form.image_link)
    .bind(&form.website_link)
    .bind(form.seeking_venue)
    .bind(&form.seeking_description)
    .bind(artist_id)
    .execute(&mut *tx)
    .await?;

    if result.rows_affected() == 0 {
        return Err(Error::NotFound(format!("Artist {}", artist_id)));
    }

    tx.commit().await?;

    info!("Artist {} updated", artist_id);
    Ok(())
}

/// Delete an artist; their shows go with them
pub async fn delete(pool: &SqlitePool, artist_id: i64) -> Result<()> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query("DELETE FROM artists WHERE id = ?")
        .bind(artist_id)
        .execute(&mut *tx)
        .await?;

    if result.rows_affected() == 0 {
        return Err(Error::NotFound(format!("Artist {}", artist_id)));
    }

    tx.commit().await?;

    info!("Artist {} deleted", artist_id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fyyur_common::db::init_in_memory;
    use fyyur_common::FormData;

    fn form(name: &str) -> ArtistForm {
        let data: FormData = vec![
            ("name", name),
            ("city", "San Francisco"),
            ("state", "CA"),
            ("phone", "326-123-5000"),
            ("image_link", "https://x.test/a.png"),
            ("genres", "Rock n Roll"),
            ("facebook_link", "https://www.facebook.com/GunsNPetals"),
        ]
        .into_iter()
        .collect();
        ArtistForm::validate(&data).expect("valid artist form")
    }

    #[tokio::test]
    async fn test_list_all_orders_by_name() {
        let pool = init_in_memory().await.unwrap();
        create(&pool, &form("The Wild Sax Band")).await.unwrap();
        create(&pool, &form("Guns N Petals")).await.unwrap();
        create(&pool, &form("Matt Quevedo")).await.unwrap();

        let names: Vec<String> = list_all(&pool).await.unwrap().into_iter().map(|a| a.name).collect();
        assert_eq!(names, vec!["Guns N Petals", "Matt Quevedo", "The Wild Sax Band"]);
    }

    #[tokio::test]
    async fn test_search_orders_by_id_and_ignores_case() {
        let pool = init_in_memory().await.unwrap();
        let wild = create(&pool, &form("The Wild Sax Band")).await.unwrap();
        create(&pool, &form("Guns N Petals")).await.unwrap();
        let band = create(&pool, &form("A Band Apart")).await.unwrap();

        let hits = search(&pool, "BAND").await.unwrap();
        let ids: Vec<i64> = hits.iter().map(|h| h.id).collect();
        assert_eq!(ids, vec![wild, band]);
    }

    #[tokio::test]
    async fn test_create_update_delete() {
        let pool = init_in_memory().await.unwrap();
        let id = create(&pool, &form("Guns N Petals")).await.unwrap();
        assert!(exists(&pool, id).await.unwrap());

        let mut replacement = form("Guns N Roses");
        replacement.seeking_venue = true;
        update(&pool, id, &replacement).await.unwrap();
        let artist = load(&pool, id).await.unwrap().unwrap();
        assert_eq!(artist.name, "Guns N Roses");
        assert!(artist.seeking_venue);
        assert_eq!(artist.genres.0, vec!["Rock n Roll"]);

        delete(&pool, id).await.unwrap();
        assert!(!exists(&pool, id).await.unwrap());
        assert!(load(&pool, id).await.unwrap().is_none());
    }
}
