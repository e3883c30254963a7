//! Form validation for venue, artist and show submissions
//!
//! Every form is validated field by field before anything touches the store.
//! All failing fields are collected so the user sees every problem at once.
//!
//! Input arrives as the raw `application/x-www-form-urlencoded` pairs. Keys
//! that no form knows about (a CSRF token, a submit button) are ignored.

use std::fmt;

use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::Regex;
use url::{Host, Url};

use crate::choices;
use crate::time;

static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{3}-\d{3}-\d{4}$").expect("phone pattern is a valid regex")
});

/// Largest id accepted on the show form
pub const MAX_ID: i64 = 999_999_999_999;

const REQUIRED: &str = "This field is required.";

// ============================================================================
// Errors
// ============================================================================

/// One failing form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Every failing field of one submission
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// Whether `field` has at least one error
    pub fn has(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field == field)
    }

    fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

// ============================================================================
// Raw form input
// ============================================================================

/// Submitted form fields in arrival order
///
/// Multi-select fields (`genres`) arrive as repeated keys.
#[derive(Debug, Clone, Default)]
pub struct FormData {
    pairs: Vec<(String, String)>,
}

impl FormData {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        Self { pairs }
    }

    /// First value submitted for `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Every value submitted for `key`
    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormData {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_pairs(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

// ============================================================================
// Field rules
// ============================================================================

fn required_text(data: &FormData, field: &'static str, errors: &mut ValidationErrors) -> String {
    match data.get(field).map(str::trim) {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => {
            errors.push(field, REQUIRED);
            String::new()
        }
    }
}

fn optional_text(data: &FormData, field: &str) -> Option<String> {
    data.get(field)
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn state(data: &FormData, errors: &mut ValidationErrors) -> String {
    let value = required_text(data, "state", errors);
    if !value.is_empty() && !choices::is_state(&value) {
        errors.push("state", "Not a valid choice.");
    }
    value
}

fn phone(data: &FormData, errors: &mut ValidationErrors) -> String {
    let value = required_text(data, "phone", errors);
    if !value.is_empty() && !is_valid_phone(data.get("phone").unwrap_or_default()) {
        errors.push("phone", "Invalid input.");
    }
    value
}

fn required_url(data: &FormData, field: &'static str, errors: &mut ValidationErrors) -> String {
    let value = required_text(data, field, errors);
    if !value.is_empty() && !is_well_formed_url(data.get(field).unwrap_or_default()) {
        errors.push(field, "Invalid URL.");
    }
    value
}

fn optional_url(data: &FormData, field: &'static str, errors: &mut ValidationErrors) -> Option<String> {
    let value = optional_text(data, field)?;
    if !is_well_formed_url(data.get(field).unwrap_or_default()) {
        errors.push(field, "Invalid URL.");
    }
    Some(value)
}

fn genres(data: &FormData, errors: &mut ValidationErrors) -> Vec<String> {
    let selected: Vec<String> = data
        .get_all("genres")
        .into_iter()
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .map(str::to_string)
        .collect();

    if selected.is_empty() {
        errors.push("genres", REQUIRED);
    }
    for genre in selected.iter().filter(|g| !choices::is_genre(g)) {
        errors.push("genres", format!("'{}' is not a valid choice for this field.", genre));
    }

    // Duplicate selections collapse, first occurrence wins
    let mut unique: Vec<String> = Vec::with_capacity(selected.len());
    for genre in selected {
        if !unique.contains(&genre) {
            unique.push(genre);
        }
    }
    unique
}

/// Checkbox semantics: absent is false, any value except an explicit false
/// spelling is true.
fn checkbox(data: &FormData, field: &str) -> bool {
    match data.get(field) {
        None => false,
        Some(value) => !matches!(
            value.trim().to_ascii_lowercase().as_str(),
            "" | "false" | "off" | "0" | "n" | "no"
        ),
    }
}

fn id_field(data: &FormData, field: &'static str, errors: &mut ValidationErrors) -> i64 {
    let raw = required_text(data, field, errors);
    if raw.is_empty() {
        return 0;
    }
    match raw.parse::<i64>() {
        Ok(id) if (0..=MAX_ID).contains(&id) => id,
        Ok(_) => {
            errors.push(field, format!("Number must be between 0 and {}.", MAX_ID));
            0
        }
        Err(_) => {
            errors.push(field, "Not a valid integer value.");
            0
        }
    }
}

fn start_time(data: &FormData, now: NaiveDateTime, errors: &mut ValidationErrors) -> NaiveDateTime {
    let Some(raw) = data.get("start_time") else {
        return now;
    };
    if raw.trim().is_empty() {
        errors.push("start_time", REQUIRED);
        return now;
    }
    match time::parse_start_time(raw) {
        Some(parsed) => parsed,
        None => {
            errors.push("start_time", "Not a valid datetime value.");
            now
        }
    }
}

/// `NNN-NNN-NNNN`
pub fn is_valid_phone(value: &str) -> bool {
    PHONE_RE.is_match(value)
}

/// Absolute URL with a `scheme://host` authority
///
/// Domain hosts need a top-level label (`example.com`, not `example`) unless
/// they are `localhost`. IP literals are accepted.
pub fn is_well_formed_url(value: &str) -> bool {
    if value.trim() != value {
        return false;
    }
    let Some((scheme, _)) = value.split_once("://") else {
        return false;
    };
    if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
        return false;
    }
    let Ok(parsed) = Url::parse(value) else {
        return false;
    };
    match parsed.host() {
        Some(Host::Domain(domain)) => {
            if domain.eq_ignore_ascii_case("localhost") {
                return true;
            }
            let labels: Vec<&str> = domain.split('.').collect();
            labels.len() >= 2
                && labels.iter().all(|label| !label.is_empty())
                && labels
                    .last()
                    .is_some_and(|tld| tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphanumeric() || c == '-'))
        }
        Some(Host::Ipv4(_)) | Some(Host::Ipv6(_)) => true,
        None => false,
    }
}

// ============================================================================
// Forms
// ============================================================================

/// Validated venue submission
#[derive(Debug, Clone, PartialEq)]
pub struct VenueForm {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub image_link: String,
    pub genres: Vec<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

impl VenueForm {
    pub fn validate(data: &FormData) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let name = required_text(data, "name", &mut errors);
        let city = required_text(data, "city", &mut errors);
        let state = state(data, &mut errors);
        let address = required_text(data, "address", &mut errors);
        let phone = phone(data, &mut errors);
        let image_link = required_url(data, "image_link", &mut errors);
        let genres = genres(data, &mut errors);
        let facebook_link = optional_url(data, "facebook_link", &mut errors);
        let website_link = optional_url(data, "website_link", &mut errors);
        let seeking_talent = checkbox(data, "seeking_talent");
        let seeking_description = optional_text(data, "seeking_description");

        errors.into_result(|| Self {
            name,
            city,
            state,
            address,
            phone,
            image_link,
            genres,
            facebook_link,
            website_link,
            seeking_talent,
            seeking_description,
        })
    }
}

/// Validated artist submission
#[derive(Debug, Clone, PartialEq)]
pub struct ArtistForm {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub image_link: String,
    pub genres: Vec<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

impl ArtistForm {
    pub fn validate(data: &FormData) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let name = required_text(data, "name", &mut errors);
        let city = required_text(data, "city", &mut errors);
        let state = state(data, &mut errors);
        let phone = phone(data, &mut errors);
        let image_link = required_url(data, "image_link", &mut errors);
        let genres = genres(data, &mut errors);
        let facebook_link = optional_url(data, "facebook_link", &mut errors);
        let website_link = optional_url(data, "website_link", &mut errors);
        let seeking_venue = checkbox(data, "seeking_venue");
        let seeking_description = optional_text(data, "seeking_description");

        errors.into_result(|| Self {
            name,
            city,
            state,
            phone,
            image_link,
            genres,
            facebook_link,
            website_link,
            seeking_venue,
            seeking_description,
        })
    }
}

/// Validated show submission
#[derive(Debug, Clone, PartialEq)]
pub struct ShowForm {
    pub artist_id: i64,
    pub venue_id: i64,
    pub start_time: NaiveDateTime,
}

impl ShowForm {
    /// `now` is used when the submission leaves out `start_time` entirely
    pub fn validate(data: &FormData, now: NaiveDateTime) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let artist_id = id_field(data, "artist_id", &mut errors);
        let venue_id = id_field(data, "venue_id", &mut errors);
        let start_time = start_time(data, now, &mut errors);

        errors.into_result(|| Self {
            artist_id,
            venue_id,
            start_time,
        })
    }
}
