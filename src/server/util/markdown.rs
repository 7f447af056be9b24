use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag};
use url::Url;

const SAFE_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

/// Renders brief markdown to HTML.
///
/// Raw HTML is emitted as escaped text. Link and image destinations other than
/// http, https, mailto or relative URLs are replaced with `#`.
pub fn render(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(markdown, options).map(|event| match event {
        Event::Html(raw) => Event::Text(raw),
        Event::Start(Tag::Link(kind, dest, title)) => {
            Event::Start(Tag::Link(kind, safe_destination(dest), title))
        }
        Event::Start(Tag::Image(kind, dest, title)) => {
            Event::Start(Tag::Image(kind, safe_destination(dest), title))
        }
        other => other,
    });

    let mut output = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut output, parser);
    output
}

fn safe_destination(dest: CowStr<'_>) -> CowStr<'_> {
    match Url::parse(&dest) {
        Ok(url) if !SAFE_SCHEMES.contains(&url.scheme()) => CowStr::Borrowed("#"),
        Ok(_) | Err(url::ParseError::RelativeUrlWithoutBase) => dest,
        Err(_) => CowStr::Borrowed("#"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_headings_and_tables() {
        let html = render("# Plan\n\n| Unit | Role |\n|---|---|\n| Guardians | Screen |\n");
        assert!(html.contains("<h1>Plan</h1>"));
        assert!(html.contains("<table>"));
    }

    #[test]
    fn escapes_raw_html() {
        let html = render("<script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn neutralises_script_links() {
        let html = render("[click](javascript:alert(document.cookie))");
        assert!(!html.contains("javascript:"));
        assert!(html.contains("<a href=\"#\">click</a>"));

        let html = render("![x](JavaScript:alert(1))");
        assert!(!html.to_lowercase().contains("javascript:"));

        let html = render("[x](data:text/html;base64,PHNjcmlwdD4=)");
        assert!(!html.contains("data:"));
    }

    #[test]
    fn keeps_web_and_relative_links() {
        let html = render("[rules](https://example.com/rules) [mail](mailto:a@b.c) [brief](/briefs/3)");
        assert!(html.contains("href=\"https://example.com/rules\""));
        assert!(html.contains("href=\"mailto:a@b.c\""));
        assert!(html.contains("href=\"/briefs/3\""));
    }
}
