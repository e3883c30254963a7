//! Create and edit forms
//!
//! Forms render from a [`FormData`] so the same markup serves an empty
//! create form and an edit form pre-filled from a stored row.

use fyyur_common::choices::{GENRES, STATES};
use fyyur_common::db::{Artist, Venue};
use fyyur_common::FormData;

use super::{escape, layout};

/// Current values of a stored venue, keyed by form field
pub fn venue_values(venue: &Venue) -> FormData {
    let mut pairs = vec![
        ("name".to_string(), venue.name.clone()),
        ("city".to_string(), venue.city.clone()),
        ("state".to_string(), venue.state.clone()),
        ("address".to_string(), venue.address.clone()),
        ("phone".to_string(), venue.phone.clone()),
        ("image_link".to_string(), venue.image_link.clone()),
    ];
    common_values(
        &mut pairs,
        &venue.genres,
        venue.facebook_link.as_deref(),
        venue.website.as_deref(),
        ("seeking_talent", venue.seeking_talent),
        venue.seeking_description.as_deref(),
    );
    FormData::from_pairs(pairs)
}

/// Current values of a stored artist, keyed by form field
pub fn artist_values(artist: &Artist) -> FormData {
    let mut pairs = vec![
        ("name".to_string(), artist.name.clone()),
        ("city".to_string(), artist.city.clone()),
        ("state".to_string(), artist.state.clone()),
        ("phone".to_string(), artist.phone.clone()),
        ("image_link".to_string(), artist.image_link.clone()),
    ];
    common_values(
        &mut pairs,
        &artist.genres,
        artist.facebook_link.as_deref(),
        artist.website.as_deref(),
        ("seeking_venue", artist.seeking_venue),
        artist.seeking_description.as_deref(),
    );
    FormData::from_pairs(pairs)
}

fn common_values(
    pairs: &mut Vec<(String, String)>,
    genres: &[String],
    facebook_link: Option<&str>,
    website_link: Option<&str>,
    (seeking_field, seeking): (&str, bool),
    seeking_description: Option<&str>,
) {
    pairs.extend(genres.iter().map(|g| ("genres".to_string(), g.clone())));
    if let Some(link) = facebook_link {
        pairs.push(("facebook_link".to_string(), link.to_string()));
    }
    if let Some(link) = website_link {
        pairs.push(("website_link".to_string(), link.to_string()));
    }
    if seeking {
        pairs.push((seeking_field.to_string(), "y".to_string()));
    }
    if let Some(description) = seeking_description {
        pairs.push(("seeking_description".to_string(), description.to_string()));
    }
}

// ============================================================================
// Field widgets
// ============================================================================

fn text_field(values: &FormData, field: &str, label: &str, input_type: &str, placeholder: &str) -> String {
    format!(
        r#"<label for="{field}">{label}</label>
        <input type="{input_type}" id="{field}" name="{field}" value="{value}" placeholder="{placeholder}">"#,
        field = field,
        label = label,
        input_type = input_type,
        value = escape(values.get(field).unwrap_or_default()),
        placeholder = placeholder,
    )
}

fn state_field(values: &FormData) -> String {
    let selected = values.get("state").unwrap_or_default();
    let options: String = STATES
        .iter()
        .map(|(code, _)| {
            format!(
                r#"<option value="{code}"{sel}>{code}</option>"#,
                code = code,
                sel = if *code == selected { " selected" } else { "" },
            )
        })
        .collect();
    format!(
        r#"<label for="state">State</label><select id="state" name="state">{}</select>"#,
        options
    )
}

fn genres_field(values: &FormData) -> String {
    let selected = values.get_all("genres");
    let options: String = GENRES
        .iter()
        .map(|(code, label)| {
            format!(
                r#"<option value="{code}"{sel}>{label}</option>"#,
                code = escape(code),
                sel = if selected.contains(code) { " selected" } else { "" },
                label = escape(label),
            )
        })
        .collect();
    format!(
        r#"<label for="genres">Genres</label>
        <small>Ctrl+Click to select multiple</small>
        <select id="genres" name="genres" multiple>{}</select>"#,
        options
    )
}

fn checkbox_field(values: &FormData, field: &str, label: &str) -> String {
    let checked = values.get(field).is_some();
    format!(
        r#"<label class="checkbox"><input type="checkbox" name="{field}" value="y"{checked}> {label}</label>"#,
        field = field,
        checked = if checked { " checked" } else { "" },
        label = label,
    )
}

fn textarea_field(values: &FormData, field: &str, label: &str) -> String {
    format!(
        r#"<label for="{field}">{label}</label><textarea id="{field}" name="{field}">{value}</textarea>"#,
        field = field,
        label = label,
        value = escape(values.get(field).unwrap_or_default()),
    )
}

fn form_page(title: &str, action: &str, fields: &[String], submit: &str) -> String {
    let body = format!(
        r#"<form class="form" method="post" action="{action}">
            <h3>{title}</h3>
            {fields}
            <button type="submit">{submit}</button>
        </form>"#,
        action = action,
        title = escape(title),
        fields = fields.join("\n"),
        submit = submit,
    );
    layout(title, &[], &body)
}

// ============================================================================
// Pages
// ============================================================================

/// Venue form posting to `action`
pub fn venue_form(title: &str, action: &str, values: &FormData) -> String {
    let fields = [
        text_field(values, "name", "Name", "text", "Name"),
        text_field(values, "city", "City", "text", "City"),
        state_field(values),
        text_field(values, "address", "Address", "text", "Address"),
        text_field(values, "phone", "Phone", "tel", "xxx-xxx-xxxx"),
        text_field(values, "image_link", "Image link", "url", "https://"),
        genres_field(values),
        text_field(values, "facebook_link", "Facebook", "url", "https://www.facebook.com/"),
        text_field(values, "website_link", "Website", "url", "https://"),
        checkbox_field(values, "seeking_talent", "Looking for talent"),
        textarea_field(values, "seeking_description", "Seeking description"),
    ];
    form_page(title, action, &fields, "Save venue")
}

/// Artist form posting to `action`
pub fn artist_form(title: &str, action: &str, values: &FormData) -> String {
    let fields = [
        text_field(values, "name", "Name", "text", "Name"),
        text_field(values, "city", "City", "text", "City"),
        state_field(values),
        text_field(values, "phone", "Phone", "tel", "xxx-xxx-xxxx"),
        text_field(values, "image_link", "Image link", "url", "https://"),
        genres_field(values),
        text_field(values, "facebook_link", "Facebook", "url", "https://www.facebook.com/"),
        text_field(values, "website_link", "Website", "url", "https://"),
        checkbox_field(values, "seeking_venue", "Looking for venues"),
        textarea_field(values, "seeking_description", "Seeking description"),
    ];
    form_page(title, action, &fields, "Save artist")
}

/// New show form; `start_time` is pre-filled by the caller
pub fn show_form(values: &FormData) -> String {
    let fields = [
        text_field(values, "artist_id", "Artist ID", "text", "ID"),
        text_field(values, "venue_id", "Venue ID", "text", "ID"),
        text_field(values, "start_time", "Start time", "text", "YYYY-MM-DD HH:MM"),
    ];
    form_page("List a new show", "/shows/create", &fields, "Create show")
}
