//! Shared page chrome

use crate::extractors::PageContext;

const NAV_LINKS: &[(&str, &str)] = &[
    ("/", "Home"),
    ("/about", "About"),
    ("/resume", "Resume"),
    ("/projects", "Projects"),
    ("/contact", "Contact"),
];

/// Wrap page content in the site layout.
pub(super) fn render(ctx: &PageContext, title: &str, content: &str) -> String {
    let nav: String = NAV_LINKS
        .iter()
        .map(|(href, label)| format!(r#"<li><a href="{href}">{label}</a></li>"#))
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{title} | Portfolio</title>
  <link rel="stylesheet" href="/static/css/style.css">
</head>
<body>
  <header class="site-header">
    <a class="brand" href="/">Portfolio</a>
    <nav id="primaryNav"><ul>{nav}</ul></nav>
  </header>
  <main>
{content}
  </main>
  <footer class="site-footer">
    <p>&copy; {year} Portfolio. All rights reserved.</p>
  </footer>
</body>
</html>
"#,
        title = escape(title),
        year = ctx.current_year,
    )
}

/// Escape text for use in HTML content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#x27;Jerry&#x27;&lt;/b&gt;"
        );
        assert_eq!(escape("plain text"), "plain text");
    }

    #[test]
    fn test_render_includes_year_and_nav() {
        let ctx = PageContext { current_year: 2031 };
        let html = render(&ctx, "About", "<p>hello</p>");

        assert!(html.contains("&copy; 2031"));
        assert!(html.contains(r#"<a href="/projects">Projects</a>"#));
        assert!(html.contains("<p>hello</p>"));
        assert!(html.contains("<title>About | Portfolio</title>"));
    }
}
