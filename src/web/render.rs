/// Server-side HTML rendering helpers
///
/// The site is rendered with a single shared layout; page bodies are built
/// with small format! fragments in their handlers. All user-supplied text
/// goes through [`escape`] before landing in markup.

use crate::web::flash::{Flash, Level};
use axum::response::Html;

/// Escape text for safe inclusion in HTML element content or attributes
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Wrap a page body in the shared site layout
///
/// Renders the navigation bar, the pending flash notice (if any), and the
/// body. The body string is trusted markup built by the caller; anything
/// user-supplied inside it must already be escaped.
pub fn page(title: &str, flash: Option<&Flash>, body: &str) -> Html<String> {
    let notice = match flash {
        Some(flash) => {
            let class = match flash.level {
                Level::Success => "notice notice-success",
                Level::Error => "notice notice-error",
            };
            format!(
                r#"<div class="{class}">{}</div>"#,
                escape(&flash.message)
            )
        }
        None => String::new(),
    };

    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} - NovaVerse</title>
<link rel="stylesheet" href="/static/style.css">
</head>
<body>
<nav>
<a href="/">Home</a>
<a href="/about">About</a>
<a href="/projects">Projects</a>
<a href="/resume">Resume</a>
<a href="/certificates">Certificates</a>
<a href="/contact">Contact</a>
</nav>
{notice}
<main>
{body}
</main>
</body>
</html>"#,
        title = escape(title),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_neutralizes_markup() {
        assert_eq!(
            escape(r#"<script>alert("x&y")</script>"#),
            "&lt;script&gt;alert(&quot;x&amp;y&quot;)&lt;/script&gt;"
        );
        assert_eq!(escape("plain text"), "plain text");
    }

    #[test]
    fn page_includes_notice_and_body() {
        let flash = Flash {
            level: Level::Success,
            message: "Saved!".into(),
        };
        let Html(html) = page("Projects", Some(&flash), "<p>hello</p>");
        assert!(html.contains("notice-success"));
        assert!(html.contains("Saved!"));
        assert!(html.contains("<p>hello</p>"));
        assert!(html.contains("<title>Projects - NovaVerse</title>"));
    }
}
