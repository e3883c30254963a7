//! HTML rendering
//!
//! Pages are assembled with `format!` around a shared layout. Every value
//! that came from a user or the database goes through [`escape`] first.

pub mod errors;
pub mod forms;
pub mod pages;

/// Shared stylesheet, served at `/static/fyyur.css`
pub const FYYUR_CSS: &str = include_str!("fyyur.css");

/// Delete buttons and small page behaviour, served at `/static/app.js`
pub const APP_JS: &str = include_str!("app.js");

/// Escape text for use in element content and quoted attribute values
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

fn flash_block(flashes: &[String]) -> String {
    if flashes.is_empty() {
        return String::new();
    }
    let items: String = flashes
        .iter()
        .map(|message| format!("<li>{}</li>", escape(message)))
        .collect();
    format!(r#"<ul class="flashes">{}</ul>"#, items)
}

/// Wrap `body` in the site layout
///
/// `body` must already be escaped; `title` and `flashes` are escaped here.
pub fn layout(title: &str, flashes: &[String], body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} | Fyyur</title>
    <link rel="stylesheet" href="/static/fyyur.css">
</head>
<body>
    <header>
        <nav>
            <a class="brand" href="/">Fyyur</a>
            <a href="/venues">Venues</a>
            <a href="/artists">Artists</a>
            <a href="/shows">Shows</a>
        </nav>
    </header>
    <main class="container">
        {flashes}
        {body}
    </main>
    <script src="/static/app.js"></script>
</body>
</html>
"#,
        title = escape(title),
        flashes = flash_block(flashes),
        body = body,
    )
}

/// Link to an external profile, or a placeholder when absent
pub(crate) fn optional_link(label: &str, href: Option<&str>) -> String {
    match href {
        Some(href) => format!(
            r#"<a href="{href}" target="_blank" rel="noopener">{label}</a>"#,
            href = escape(href),
            label = escape(label)
        ),
        None => format!(r#"<span class="muted">No {}</span>"#, escape(&label.to_lowercase())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_markup() {
        assert_eq!(
            escape(r#"<script>alert("x")</script>"#),
            "&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt;"
        );
        assert_eq!(escape("Rock & Roll's"), "Rock &amp; Roll&#x27;s");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_layout_escapes_flashes() {
        let html = layout("Home", &["<b>hi</b>".to_string()], "<p>body</p>");
        assert!(html.contains("&lt;b&gt;hi&lt;/b&gt;"));
        assert!(html.contains("<p>body</p>"));
        assert!(html.contains("<title>Home | Fyyur</title>"));
    }

    #[test]
    fn test_layout_without_flashes_has_no_list() {
        let html = layout("Home", &[], "");
        assert!(!html.contains("flashes"));
    }
}
