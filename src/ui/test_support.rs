//! Markup inspection helpers for component tests.

/// `href` values of every anchor, in document order.
pub fn hrefs(html: &str) -> Vec<&str> {
    html.split("<a ")
        .skip(1)
        .filter_map(|tag| {
            let start = tag.find("href=\"")? + "href=\"".len();
            let len = tag[start..].find('"')?;
            Some(&tag[start..start + len])
        })
        .collect()
}

/// Text content of every anchor, in document order.
pub fn link_texts(html: &str) -> Vec<&str> {
    html.split("<a ")
        .skip(1)
        .filter_map(|tag| {
            let start = tag.find('>')? + 1;
            let len = tag[start..].find("</a>")?;
            Some(tag[start..start + len].trim())
        })
        .collect()
}

/// Text content of every element opened with `open` (e.g. `"<h2"`).
pub fn element_texts<'a>(html: &'a str, open: &str, close: &str) -> Vec<&'a str> {
    html.split(open)
        .skip(1)
        .filter_map(|tag| {
            let start = tag.find('>')? + 1;
            let len = tag[start..].find(close)?;
            Some(tag[start..start + len].trim())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_anchor_parts() {
        let html = r#"<nav><a href="/" class="x">Home</a><a href="/b">B</a></nav>"#;
        assert_eq!(hrefs(html), ["/", "/b"]);
        assert_eq!(link_texts(html), ["Home", "B"]);
    }

    #[test]
    fn extracts_heading_texts() {
        let html = r#"<h2 class="a">One</h2><p>x</p><h2>Two</h2>"#;
        assert_eq!(element_texts(html, "<h2", "</h2>"), ["One", "Two"]);
    }
}
