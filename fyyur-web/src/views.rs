//! Response models
//!
//! Turns store rows into the shapes the pages render: venues grouped by
//! locality, search results with upcoming-show counts, detail views with
//! shows split into past and upcoming, and the flat show listing.
//!
//! Every builder takes `now` explicitly; a show is past when it starts
//! strictly before `now`.

use chrono::NaiveDateTime;
use fyyur_common::db::{Artist, Venue};
use fyyur_common::time::{format_listing, is_past};
use fyyur_common::{Error, Result};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::db::{self, CounterpartShow};

/// One row of a listing or search result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntitySummary {
    pub id: i64,
    pub name: String,
    pub num_upcoming_shows: i64,
}

/// Venues sharing a city and state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Locality {
    pub city: String,
    pub state: String,
    pub venues: Vec<EntitySummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistSummary {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResults {
    pub count: usize,
    pub data: Vec<EntitySummary>,
}

/// A show on a venue page: who is playing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VenueShow {
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: String,
    pub start_time: NaiveDateTime,
}

/// A show on an artist page: where they are playing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtistShow {
    pub venue_id: i64,
    pub venue_name: String,
    pub venue_image_link: String,
    pub start_time: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VenueDetail {
    #[serde(flatten)]
    pub venue: Venue,
    pub past_shows: Vec<VenueShow>,
    pub upcoming_shows: Vec<VenueShow>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtistDetail {
    #[serde(flatten)]
    pub artist: Artist,
    pub past_shows: Vec<ArtistShow>,
    pub upcoming_shows: Vec<ArtistShow>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

/// One row of the show listing; `start_time` serializes as `YYYY-MM-DDTHH:MM`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowListing {
    pub id: i64,
    pub venue_id: i64,
    pub venue_name: String,
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: String,
    #[serde(serialize_with = "serialize_listing_time")]
    pub start_time: NaiveDateTime,
}

fn serialize_listing_time<S: serde::Serializer>(
    start_time: &NaiveDateTime,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_listing(*start_time))
}

/// Split shows (already in start order) into `(past, upcoming)`
fn partition_shows<T>(
    shows: Vec<CounterpartShow>,
    now: NaiveDateTime,
    shape: impl Fn(CounterpartShow) -> T,
) -> (Vec<T>, Vec<T>) {
    let mut past = Vec::new();
    let mut upcoming = Vec::new();
    for show in shows {
        if is_past(show.start_time, now) {
            past.push(shape(show));
        } else {
            upcoming.push(shape(show));
        }
    }
    (past, upcoming)
}

fn as_venue_show(show: CounterpartShow) -> VenueShow {
    VenueShow {
        artist_id: show.counterpart_id,
        artist_name: show.counterpart_name,
        artist_image_link: show.counterpart_image_link,
        start_time: show.start_time,
    }
}

fn as_artist_show(show: CounterpartShow) -> ArtistShow {
    ArtistShow {
        venue_id: show.counterpart_id,
        venue_name: show.counterpart_name,
        venue_image_link: show.counterpart_image_link,
        start_time: show.start_time,
    }
}

// ============================================================================
// Venues
// ============================================================================

/// Every venue grouped by `(state, city)`
pub async fn venue_localities(pool: &SqlitePool, now: NaiveDateTime) -> Result<Vec<Locality>> {
    let mut localities = Vec::new();

    for (state, city) in db::venues::list_localities(pool).await? {
        let mut venues = Vec::new();
        for row in db::venues::list_in_locality(pool, &state, &city).await? {
            let num_upcoming_shows = db::venues::count_upcoming_shows(pool, row.id, now).await?;
            venues.push(EntitySummary {
                id: row.id,
                name: row.name,
                num_upcoming_shows,
            });
        }
        localities.push(Locality { city, state, venues });
    }

    Ok(localities)
}

pub async fn search_venues(pool: &SqlitePool, term: &str, now: NaiveDateTime) -> Result<SearchResults> {
    let mut data = Vec::new();
    for row in db::venues::search(pool, term).await? {
        let num_upcoming_shows = db::venues::count_upcoming_shows(pool, row.id, now).await?;
        data.push(EntitySummary {
            id: row.id,
            name: row.name,
            num_upcoming_shows,
        });
    }

    Ok(SearchResults {
        count: data.len(),
        data,
    })
}

pub async fn venue_detail(pool: &SqlitePool, venue_id: i64, now: NaiveDateTime) -> Result<VenueDetail> {
    let venue = db::venues::load(pool, venue_id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("Venue {}", venue_id)))?;

    let shows = db::venues::load_shows(pool, venue_id).await?;
    let (past_shows, upcoming_shows) = partition_shows(shows, now, as_venue_show);

    Ok(VenueDetail {
        venue,
        past_shows_count: past_shows.len(),
        upcoming_shows_count: upcoming_shows.len(),
        past_shows,
        upcoming_shows,
    })
}

// ============================================================================
// Artists
// ============================================================================

pub async fn artist_list(pool: &SqlitePool) -> Result<Vec<ArtistSummary>> {
    let artists = db::artists::list_all(pool)
        .await?
        .into_iter()
        .map(|row| ArtistSummary {
            id: row.id,
            name: row.name,
        })
        .collect();

    Ok(artists)
}

pub async fn search_artists(pool: &SqlitePool, term: &str, now: NaiveDateTime) -> Result<SearchResults> {
    let mut data = Vec::new();
    for row in db::artists::search(pool, term).await? {
        let num_upcoming_shows = db::artists::count_upcoming_shows(pool, row.id, now).await?;
        data.push(EntitySummary {
            id: row.id,
            name: row.name,
            num_upcoming_shows,
        });
    }

    Ok(SearchResults {
        count: data.len(),
        data,
    })
}

pub async fn artist_detail(pool: &SqlitePool, artist_id: i64, now: NaiveDateTime) -> Result<ArtistDetail> {
    let artist = db::artists::load(pool, artist_id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("Artist {}", artist_id)))?;

    let shows = db::artists::load_shows(pool, artist_id).await?;
    let (past_shows, upcoming_shows) = partition_shows(shows, now, as_artist_show);

    Ok(ArtistDetail {
        artist,
        past_shows_count: past_shows.len(),
        upcoming_shows_count: upcoming_shows.len(),
        past_shows,
        upcoming_shows,
    })
}

// ============================================================================
// Shows
// ============================================================================

pub async fn show_listing(pool: &SqlitePool) -> Result<Vec<ShowListing>> {
    let shows = db::shows::list_all(pool)
        .await?
        .into_iter()
        .map(|row| ShowListing {
            id: row.id,
            venue_id: row.venue_id,
            venue_name: row.venue_name,
            artist_id: row.artist_id,
            artist_name: row.artist_name,
            artist_image_link: row.artist_image_link,
            start_time: row.start_time,
        })
        .collect();

    Ok(shows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};
    use fyyur_common::db::init_in_memory;
    use fyyur_common::FormData;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .and_then(|date| date.and_hms_opt(h, min, 0))
            .unwrap()
    }

    async fn add_venue(pool: &SqlitePool, name: &str, city: &str, state: &str) -> i64 {
        let data: FormData = vec![
            ("name", name),
            ("city", city),
            ("state", state),
            ("address", "1015 Folsom Street"),
            ("phone", "123-123-1234"),
            ("image_link", "https://x.test/v.png"),
            ("genres", "Jazz"),
        ]
        .into_iter()
        .collect();
        let form = fyyur_common::VenueForm::validate(&data).unwrap();
        db::venues::create(pool, &form).await.unwrap()
    }

    async fn add_artist(pool: &SqlitePool, name: &str) -> i64 {
        let data: FormData = vec![
            ("name", name),
            ("city", "Austin"),
            ("state", "TX"),
            ("phone", "512-555-0100"),
            ("image_link", "https://x.test/a.png"),
            ("genres", "Rock n Roll"),
        ]
        .into_iter()
        .collect();
        let form = fyyur_common::ArtistForm::validate(&data).unwrap();
        db::artists::create(pool, &form).await.unwrap()
    }

    async fn add_show(pool: &SqlitePool, artist_id: i64, venue_id: i64, start_time: NaiveDateTime) -> i64 {
        let form = fyyur_common::ShowForm {
            artist_id,
            venue_id,
            start_time,
        };
        db::shows::create(pool, &form).await.unwrap()
    }

    #[tokio::test]
    async fn test_localities_group_and_count_upcoming() {
        let pool = init_in_memory().await.unwrap();
        let now = at(2024, 6, 1, 12, 0);
        let hop = add_venue(&pool, "The Musical Hop", "San Francisco", "CA").await;
        let park = add_venue(&pool, "Park Square Live Music & Coffee", "San Francisco", "CA").await;
        add_venue(&pool, "The Dueling Pianos Bar", "New York", "NY").await;
        let artist = add_artist(&pool, "Guns N Petals").await;

        add_show(&pool, artist, hop, at(2019, 5, 21, 21, 30)).await;
        add_show(&pool, artist, hop, at(2035, 4, 1, 20, 0)).await;
        add_show(&pool, artist, park, at(2035, 4, 8, 20, 0)).await;

        let localities = venue_localities(&pool, now).await.unwrap();
        assert_eq!(localities.len(), 2);
        assert_eq!(localities[0].state, "CA");
        assert_eq!(localities[0].city, "San Francisco");
        assert_eq!(localities[1].state, "NY");

        let sf = &localities[0].venues;
        assert_eq!(sf[0].name, "Park Square Live Music & Coffee");
        assert_eq!(sf[0].num_upcoming_shows, 1);
        assert_eq!(sf[1].name, "The Musical Hop");
        assert_eq!(sf[1].num_upcoming_shows, 1);
    }

    #[tokio::test]
    async fn test_upcoming_count_never_grows_as_time_advances() {
        let pool = init_in_memory().await.unwrap();
        let venue = add_venue(&pool, "The Musical Hop", "San Francisco", "CA").await;
        let artist = add_artist(&pool, "Guns N Petals").await;
        let start = at(2030, 1, 1, 20, 0);
        for days in 0..4 {
            add_show(&pool, artist, venue, start + Duration::days(days)).await;
        }

        let mut previous = i64::MAX;
        for step in 0..6 {
            let now = start + Duration::days(step) - Duration::hours(1);
            let count = db::venues::count_upcoming_shows(&pool, venue, now).await.unwrap();
            assert!(count <= previous);
            previous = count;
        }
        assert_eq!(previous, 0);
    }

    #[tokio::test]
    async fn test_detail_partitions_every_show_once() {
        let pool = init_in_memory().await.unwrap();
        let now = at(2024, 6, 1, 12, 0);
        let venue = add_venue(&pool, "The Musical Hop", "San Francisco", "CA").await;
        let artist = add_artist(&pool, "Guns N Petals").await;
        add_show(&pool, artist, venue, at(2019, 5, 21, 21, 30)).await;
        add_show(&pool, artist, venue, now).await;
        add_show(&pool, artist, venue, at(2035, 4, 1, 20, 0)).await;

        let detail = venue_detail(&pool, venue, now).await.unwrap();
        assert_eq!(detail.past_shows_count, 1);
        assert_eq!(detail.upcoming_shows_count, 2);
        assert_eq!(detail.past_shows_count + detail.upcoming_shows_count, 3);
        assert_eq!(detail.upcoming_shows[0].start_time, now);
        assert_eq!(detail.past_shows[0].artist_name, "Guns N Petals");

        let artist_view = artist_detail(&pool, artist, now).await.unwrap();
        assert_eq!(artist_view.past_shows_count, 1);
        assert_eq!(artist_view.upcoming_shows_count, 2);
        assert_eq!(artist_view.upcoming_shows[1].venue_name, "The Musical Hop");
    }

    #[tokio::test]
    async fn test_detail_missing_entity_is_not_found() {
        let pool = init_in_memory().await.unwrap();
        let now = at(2024, 6, 1, 12, 0);
        assert!(matches!(venue_detail(&pool, 42, now).await, Err(Error::NotFound(_))));
        assert!(matches!(artist_detail(&pool, 42, now).await, Err(Error::NotFound(_))));
    }

    #[tokio::test]
    async fn test_search_empty_term_matches_all_case_insensitive() {
        let pool = init_in_memory().await.unwrap();
        let now = at(2024, 6, 1, 12, 0);
        add_venue(&pool, "Jazz Club", "Austin", "TX").await;
        add_venue(&pool, "The Musical Hop", "San Francisco", "CA").await;

        let all = search_venues(&pool, "", now).await.unwrap();
        assert_eq!(all.count, 2);

        let hits = search_venues(&pool, "jazz club", now).await.unwrap();
        assert_eq!(hits.count, 1);
        assert_eq!(hits.data[0].name, "Jazz Club");
        assert_eq!(hits.data[0].num_upcoming_shows, 0);
    }

    #[tokio::test]
    async fn test_search_folds_non_ascii_case() {
        let pool = init_in_memory().await.unwrap();
        let now = at(2024, 6, 1, 12, 0);
        add_venue(&pool, "Café Élysée", "Austin", "TX").await;
        add_artist(&pool, "Sigur Rós").await;

        let hits = search_venues(&pool, "CAFÉ ÉLYSÉE", now).await.unwrap();
        assert_eq!(hits.count, 1);
        assert_eq!(hits.data[0].name, "Café Élysée");

        let hits = search_artists(&pool, "RÓS", now).await.unwrap();
        assert_eq!(hits.count, 1);
        assert_eq!(hits.data[0].name, "Sigur Rós");
    }

    #[tokio::test]
    async fn test_new_artist_has_no_shows() {
        let pool = init_in_memory().await.unwrap();
        let id = add_artist(&pool, "Test Band").await;

        let detail = artist_detail(&pool, id, at(2024, 6, 1, 12, 0)).await.unwrap();
        assert_eq!(detail.artist.name, "Test Band");
        assert_eq!(detail.past_shows_count, 0);
        assert_eq!(detail.upcoming_shows_count, 0);

        let listed = artist_list(&pool).await.unwrap();
        assert_eq!(listed, vec![ArtistSummary { id, name: "Test Band".to_string() }]);
    }

    #[tokio::test]
    async fn test_show_listing_formats_start_time() {
        let pool = init_in_memory().await.unwrap();
        let venue = add_venue(&pool, "The Musical Hop", "San Francisco", "CA").await;
        let artist = add_artist(&pool, "Guns N Petals").await;
        add_show(&pool, artist, venue, at(2035, 4, 15, 20, 0)).await;
        add_show(&pool, artist, venue, at(2019, 5, 21, 21, 30)).await;

        let shows = show_listing(&pool).await.unwrap();
        assert_eq!(shows.len(), 2);
        assert_eq!(shows[0].start_time, at(2019, 5, 21, 21, 30));
        assert_eq!(shows[1].start_time, at(2035, 4, 15, 20, 0));
        let value = serde_json::to_value(&shows[0]).unwrap();
        assert_eq!(value["start_time"], "2019-05-21T21:30");
        assert_eq!(shows[0].venue_name, "The Musical Hop");
        assert_eq!(shows[0].artist_image_link, "https://x.test/a.png");
    }

    #[test]
    fn test_detail_serializes_flat() {
        let detail = ArtistDetail {
            artist: Artist {
                id: 4,
                name: "Guns N Petals".to_string(),
                city: "San Francisco".to_string(),
                state: "CA".to_string(),
                phone: "326-123-5000".to_string(),
                genres: sqlx::types::Json(vec!["Rock n Roll".to_string()]),
                facebook_link: None,
                image_link: "https://x.test/a.png".to_string(),
                website: None,
                seeking_venue: true,
                seeking_description: None,
            },
            past_shows: vec![],
            upcoming_shows: vec![],
            past_shows_count: 0,
            upcoming_shows_count: 0,
        };

        let value = serde_json::to_value(&detail).unwrap();
        assert_eq!(value["name"], "Guns N Petals");
        assert_eq!(value["genres"][0], "Rock n Roll");
        assert_eq!(value["upcoming_shows_count"], 0);
    }
}
