//! Listing, search and detail pages

use chrono::NaiveDateTime;
use fyyur_common::time::{format_display, DisplayStyle};

use super::{escape, layout, optional_link};
use crate::views::{
    ArtistDetail, ArtistShow, ArtistSummary, EntitySummary, Locality, SearchResults, ShowListing,
    VenueDetail, VenueShow,
};

pub fn home(flashes: &[String]) -> String {
    let body = r#"
        <section class="hero">
            <h1>Fyyur</h1>
            <p>Book live music at venues near you.</p>
            <div class="actions">
                <a class="button" href="/venues/create">Post a venue</a>
                <a class="button" href="/artists/create">Post an artist</a>
                <a class="button" href="/shows/create">Post a show</a>
            </div>
        </section>
    "#;
    layout("Home", flashes, body)
}

fn search_form(action: &str, placeholder: &str) -> String {
    format!(
        r#"<form class="search" method="post" action="{action}">
            <input type="search" name="search_term" placeholder="{placeholder}">
            <button type="submit">Search</button>
        </form>"#,
        action = action,
        placeholder = escape(placeholder),
    )
}

fn upcoming_label(count: i64) -> String {
    match count {
        1 => "1 upcoming show".to_string(),
        n => format!("{} upcoming shows", n),
    }
}

fn summary_list(kind: &str, items: &[EntitySummary]) -> String {
    let rows: String = items
        .iter()
        .map(|item| {
            format!(
                r#"<li><a href="/{kind}/{id}">{name}</a> <span class="muted">{upcoming}</span></li>"#,
                kind = kind,
                id = item.id,
                name = escape(&item.name),
                upcoming = upcoming_label(item.num_upcoming_shows),
            )
        })
        .collect();
    format!(r#"<ul class="items">{}</ul>"#, rows)
}

pub fn venues(localities: &[Locality]) -> String {
    let mut body = search_form("/venues/search", "Find a venue");
    if localities.is_empty() {
        body.push_str(r#"<p class="muted">No venues listed yet.</p>"#);
    }
    for locality in localities {
        body.push_str(&format!(
            "<h3>{city}, {state}</h3>{list}",
            city = escape(&locality.city),
            state = escape(&locality.state),
            list = summary_list("venues", &locality.venues),
        ));
    }
    layout("Venues", &[], &body)
}

pub fn artists(artists: &[ArtistSummary]) -> String {
    let mut body = search_form("/artists/search", "Find an artist");
    let rows: String = artists
        .iter()
        .map(|artist| {
            format!(
                r#"<li><a href="/artists/{}">{}</a></li>"#,
                artist.id,
                escape(&artist.name)
            )
        })
        .collect();
    body.push_str(&format!(r#"<ul class="items">{}</ul>"#, rows));
    layout("Artists", &[], &body)
}

/// Results page for `/venues/search` and `/artists/search`
pub fn search_results(kind: &str, search_term: &str, results: &SearchResults) -> String {
    let noun = if results.count == 1 { "result" } else { "results" };
    let body = format!(
        r#"{form}<h3>Number of search results for "{term}": {count} {noun}</h3>{list}"#,
        form = search_form(&format!("/{}/search", kind), "Search again"),
        term = escape(search_term),
        count = results.count,
        noun = noun,
        list = summary_list(kind, &results.data),
    );
    layout("Search", &[], &body)
}

fn genre_tags(genres: &[String]) -> String {
    genres
        .iter()
        .map(|genre| format!(r#"<span class="genre">{}</span>"#, escape(genre)))
        .collect()
}

fn seeking_block(seeking: bool, what: &str, description: Option<&str>) -> String {
    if !seeking {
        return format!(r#"<p class="not-seeking">Not currently seeking {}</p>"#, what);
    }
    format!(
        r#"<div class="seeking"><p>Currently seeking {what}</p><p>{description}</p></div>"#,
        what = what,
        description = escape(description.unwrap_or_default()),
    )
}

struct ShowCard<'a> {
    href: String,
    name: &'a str,
    image_link: &'a str,
    start_time: NaiveDateTime,
}

fn show_section(heading: &str, cards: &[ShowCard<'_>]) -> String {
    let noun = if cards.len() == 1 { "Show" } else { "Shows" };
    let items: String = cards
        .iter()
        .map(|card| {
            format!(
                r#"<div class="show-card">
                    <img src="{image}" alt="">
                    <a href="{href}">{name}</a>
                    <p>{when}</p>
                </div>"#,
                image = escape(card.image_link),
                href = card.href,
                name = escape(card.name),
                when = escape(&format_display(card.start_time, DisplayStyle::Medium)),
            )
        })
        .collect();
    format!(
        r#"<section class="shows"><h3>{count} {heading} {noun}</h3><div class="show-grid">{items}</div></section>"#,
        count = cards.len(),
        heading = heading,
        noun = noun,
        items = items,
    )
}

fn venue_cards(shows: &[VenueShow]) -> Vec<ShowCard<'_>> {
    shows
        .iter()
        .map(|show| ShowCard {
            href: format!("/artists/{}", show.artist_id),
            name: &show.artist_name,
            image_link: &show.artist_image_link,
            start_time: show.start_time,
        })
        .collect()
}

fn artist_cards(shows: &[ArtistShow]) -> Vec<ShowCard<'_>> {
    shows
        .iter()
        .map(|show| ShowCard {
            href: format!("/venues/{}", show.venue_id),
            name: &show.venue_name,
            image_link: &show.venue_image_link,
            start_time: show.start_time,
        })
        .collect()
}

fn delete_button(url: &str, label: &str) -> String {
    format!(
        r#"<button type="button" class="delete-button" data-url="{url}">{label}</button>"#,
        url = url,
        label = escape(label),
    )
}

pub fn venue_detail(detail: &VenueDetail) -> String {
    let venue = &detail.venue;
    let body = format!(
        r#"<article class="profile">
            <div class="profile-info">
                <h1>{name}</h1>
                <p class="muted">ID: {id}</p>
                <div class="genres">{genres}</div>
                <p>{address}<br>{city}, {state}</p>
                <p>{phone}</p>
                <p>{website}</p>
                <p>{facebook}</p>
                {seeking}
                <p>
                    <a class="button" href="/venues/{id}/edit">Edit</a>
                    {delete}
                </p>
            </div>
            <img class="profile-image" src="{image}" alt="{name}">
        </article>
        {upcoming}
        {past}"#,
        id = venue.id,
        name = escape(&venue.name),
        genres = genre_tags(&venue.genres),
        address = escape(&venue.address),
        city = escape(&venue.city),
        state = escape(&venue.state),
        phone = escape(&venue.phone),
        website = optional_link("Website", venue.website.as_deref()),
        facebook = optional_link("Facebook Link", venue.facebook_link.as_deref()),
        seeking = seeking_block(venue.seeking_talent, "talent", venue.seeking_description.as_deref()),
        delete = delete_button(&format!("/venues/{}", venue.id), "Delete venue"),
        image = escape(&venue.image_link),
        upcoming = show_section("Upcoming", &venue_cards(&detail.upcoming_shows)),
        past = show_section("Past", &venue_cards(&detail.past_shows)),
    );
    layout(&venue.name, &[], &body)
}

pub fn artist_detail(detail: &ArtistDetail) -> String {
    let artist = &detail.artist;
    let body = format!(
        r#"<article class="profile">
            <div class="profile-info">
                <h1>{name}</h1>
                <p class="muted">ID: {id}</p>
                <div class="genres">{genres}</div>
                <p>{city}, {state}</p>
                <p>{phone}</p>
                <p>{website}</p>
                <p>{facebook}</p>
                {seeking}
                <p>
                    <a class="button" href="/artists/{id}/edit">Edit</a>
                    {delete}
                </p>
            </div>
            <img class="profile-image" src="{image}" alt="{name}">
        </article>
        {upcoming}
        {past}"#,
        id = artist.id,
        name = escape(&artist.name),
        genres = genre_tags(&artist.genres),
        city = escape(&artist.city),
        state = escape(&artist.state),
        phone = escape(&artist.phone),
        website = optional_link("Website", artist.website.as_deref()),
        facebook = optional_link("Facebook Link", artist.facebook_link.as_deref()),
        seeking = seeking_block(artist.seeking_venue, "performance venues", artist.seeking_description.as_deref()),
        delete = delete_button(&format!("/artists/{}", artist.id), "Delete artist"),
        image = escape(&artist.image_link),
        upcoming = show_section("Upcoming", &artist_cards(&detail.upcoming_shows)),
        past = show_section("Past", &artist_cards(&detail.past_shows)),
    );
    layout(&artist.name, &[], &body)
}

pub fn shows(shows: &[ShowListing]) -> String {
    let cards: String = shows
        .iter()
        .map(|show| {
            format!(
                r#"<div class="show-card">
                    <img src="{image}" alt="">
                    <p class="muted">{when}</p>
                    <a href="/artists/{artist_id}">{artist}</a>
                    <p>playing at <a href="/venues/{venue_id}">{venue}</a></p>
                    {delete}
                </div>"#,
                image = escape(&show.artist_image_link),
                when = escape(&format_display(show.start_time, DisplayStyle::Full)),
                artist_id = show.artist_id,
                artist = escape(&show.artist_name),
                venue_id = show.venue_id,
                venue = escape(&show.venue_name),
                delete = delete_button(&format!("/shows/{}", show.id), "Delete"),
            )
        })
        .collect();
    let body = format!(r#"<h1>Shows</h1><div class="show-grid">{}</div>"#, cards);
    layout("Shows", &[], &body)
}
