//! Store operations for venues, artists and shows
//!
//! Reads take the pool directly. Every write runs inside its own transaction;
//! returning early (including through `?`) drops the uncommitted transaction,
//! which rolls it back and hands the connection back to the pool.

pub mod artists;
pub mod shows;
pub mod venues;

use chrono::NaiveDateTime;
use sqlx::FromRow;

/// `(id, name)` pair used by listings and search
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct NamedRow {
    pub id: i64,
    pub name: String,
}

/// A show joined with the entity on the other side of it
///
/// On a venue's page the counterpart is the artist, on an artist's page it is
/// the venue.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct CounterpartShow {
    pub counterpart_id: i64,
    pub counterpart_name: String,
    pub counterpart_image_link: String,
    pub start_time: NaiveDateTime,
}

/// Keep the rows whose name contains `term`, ignoring case
///
/// Folding happens here rather than in SQL so non-ASCII names compare the
/// same way ASCII ones do.
pub(crate) fn filter_by_name(rows: Vec<NamedRow>, term: &str) -> Vec<NamedRow> {
    let needle = term.to_lowercase();
    rows.into_iter()
        .filter(|row| row.name.to_lowercase().contains(&needle))
        .collect()
}

pub(crate) fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.is_foreign_key_violation(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(names: &[&str]) -> Vec<NamedRow> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| NamedRow {
                id: i as i64 + 1,
                name: name.to_string(),
            })
            .collect()
    }

    #[test]
    fn test_filter_by_name_ignores_case() {
        let hits = filter_by_name(rows(&["The Musical Hop", "Park Square"]), "musical HOP");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 1);
    }

    #[test]
    fn test_filter_by_name_folds_non_ascii() {
        let hits = filter_by_name(rows(&["Sigur Rós", "Café Élysée", "Cafe Elysee"]), "CAFÉ ÉLYSÉE");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Café Élysée");
        assert_eq!(filter_by_name(rows(&["Sigur Rós"]), "RÓS").len(), 1);
    }

    #[test]
    fn test_filter_by_name_is_literal() {
        let hits = filter_by_name(rows(&["100% Jazz", "1000 Jazz", "a_b"]), "100%");
        assert_eq!(hits.len(), 1);
        assert_eq!(filter_by_name(rows(&["a_b", "axb"]), "a_b").len(), 1);
        assert_eq!(filter_by_name(rows(&["x", "y"]), "").len(), 2);
    }
}
