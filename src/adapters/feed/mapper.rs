//! Map feed-rs types to domain entities.
//!
//! Parses Atom/RSS bytes and extracts RawFeed, RawFeedEntry and the plain-text snippet.

use crate::domain::{DomainError, RawFeed, RawFeedEntry};
use feed_rs::model::{Entry, Feed, Link};

/// Tags that start a new line in the plain-text snippet.
const BLOCK_TAGS: &[&str] = &[
    "blockquote",
    "br",
    "div",
    "li",
    "ol",
    "p",
    "pre",
    "section",
    "table",
    "tr",
    "ul",
];

/// Parse feed bytes (Atom or RSS) into the domain feed.
pub fn parse_feed(bytes: &[u8]) -> Result<RawFeed, DomainError> {
    let feed = feed_rs::parser::parse(bytes).map_err(|e| DomainError::Parse(e.to_string()))?;
    Ok(feed_to_domain(feed))
}

/// Map a parsed feed. Entry order is preserved.
pub fn feed_to_domain(feed: Feed) -> RawFeed {
    RawFeed {
        title: feed.title.map(|t| t.content),
        link: alternate_link(&feed.links),
        entries: feed.entries.into_iter().map(entry_to_domain).collect(),
    }
}

/// Map a single entry. Atom feeds from GitHub carry only `<updated>`, used as pub date.
pub fn entry_to_domain(entry: Entry) -> RawFeedEntry {
    let content = entry
        .content
        .and_then(|c| c.body)
        .or_else(|| entry.summary.map(|s| s.content));
    let content_snippet = content.as_deref().map(html_to_snippet);
    RawFeedEntry {
        id: entry.id,
        title: entry.title.map(|t| t.content),
        link: alternate_link(&entry.links),
        pub_date: entry.published.or(entry.updated),
        content,
        content_snippet,
    }
}

/// Prefer `rel="alternate"` (the release page); fall back to the first link.
fn alternate_link(links: &[Link]) -> Option<String> {
    links
        .iter()
        .find(|l| l.rel.as_deref() == Some("alternate"))
        .or_else(|| links.first())
        .map(|l| l.href.clone())
}

/// Plain text from an HTML fragment: tags dropped, entities decoded, trimmed.
///
/// Source newlines are kept. Block-level tags squeezed between two text runs become a newline.
/// Entities are decoded after tags are gone, so `&lt;b&gt;` survives as text.
pub fn html_to_snippet(html: &str) -> String {
    let mut out = SnippetWriter::default();
    let mut chars = html.chars();

    while let Some(ch) = chars.next() {
        if ch == '<' {
            let tag: String = chars.by_ref().take_while(|&c| c != '>').collect();
            if is_block_tag(&tag) {
                out.pending_break = true;
            }
        } else {
            out.push(ch);
        }
    }

    html_escape::decode_html_entities(&out.text)
        .trim()
        .to_string()
}

#[derive(Default)]
struct SnippetWriter {
    text: String,
    pending_break: bool,
}

impl SnippetWriter {
    fn push(&mut self, c: char) {
        if self.pending_break {
            if c != '\n' && !self.text.is_empty() && !self.text.ends_with('\n') {
                self.text.push('\n');
            }
            self.pending_break = false;
        }
        self.text.push(c);
    }
}

fn is_block_tag(tag: &str) -> bool {
    let name = tag
        .trim_start_matches('/')
        .split(|c: char| c.is_whitespace() || c == '/')
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();
    let heading = name.len() == 2
        && name.starts_with('h')
        && name[1..].chars().all(|c| ('1'..='6').contains(&c));
    heading || BLOCK_TAGS.contains(&name.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    const GITHUB_ATOM: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom" xmlns:media="http://search.yahoo.com/mrss/" xml:lang="en-US">
  <id>tag:github.com,2008:https://github.com/acme/cli/releases</id>
  <link type="text/html" rel="alternate" href="https://github.com/acme/cli/releases"/>
  <link type="application/atom+xml" rel="self" href="https://github.com/acme/cli/releases.atom"/>
  <title>Release notes from cli</title>
  <updated>2023-05-02T10:00:00Z</updated>
  <entry>
    <id>tag:github.com,2008:Repository/1/v7.2.0-beta.1</id>
    <updated>2023-05-02T10:00:00Z</updated>
    <link rel="alternate" type="text/html" href="https://github.com/acme/cli/releases/tag/v7.2.0-beta.1"/>
    <title>beta</title>
    <content type="html">&lt;p&gt;wip&lt;/p&gt;</content>
    <author><name>octocat</name></author>
  </entry>
  <entry>
    <id>tag:github.com,2008:Repository/1/v7.2.0</id>
    <updated>2023-05-01T09:30:00Z</updated>
    <link rel="alternate" type="text/html" href="https://github.com/acme/cli/releases/tag/v7.2.0"/>
    <title>7.2.0</title>
    <content type="html">&lt;p&gt;Fixed bug&lt;/p&gt;&lt;p&gt;Added feature &amp;amp; docs&lt;/p&gt;</content>
    <author><name>octocat</name></author>
  </entry>
</feed>"#;

    #[test]
    fn test_parse_github_atom_feed() {
        let feed = parse_feed(GITHUB_ATOM.as_bytes()).unwrap();

        assert_eq!(feed.title.as_deref(), Some("Release notes from cli"));
        assert_eq!(
            feed.link.as_deref(),
            Some("https://github.com/acme/cli/releases")
        );
        assert_eq!(feed.entries.len(), 2);

        let newest = &feed.entries[0];
        assert_eq!(
            newest.link.as_deref(),
            Some("https://github.com/acme/cli/releases/tag/v7.2.0-beta.1")
        );
        assert_eq!(newest.title.as_deref(), Some("beta"));

        let release = &feed.entries[1];
        assert_eq!(release.title.as_deref(), Some("7.2.0"));
        assert_eq!(
            release.pub_date.map(|d| d.to_rfc3339()).as_deref(),
            Some("2023-05-01T09:30:00+00:00")
        );
        assert_eq!(
            release.content_snippet.as_deref(),
            Some("Fixed bug\nAdded feature & docs")
        );
    }

    #[test]
    fn test_parse_feed_rejects_garbage() {
        let err = parse_feed(b"<html><body>not a feed</body></html>").unwrap_err();
        assert!(matches!(err, DomainError::Parse(_)));
    }

    #[test]
    fn test_snippet_keeps_source_newlines() {
        assert_eq!(
            html_to_snippet("<p>Fixed bug</p>\n<p>Added feature</p>"),
            "Fixed bug\nAdded feature"
        );
    }

    #[test]
    fn test_snippet_breaks_between_block_tags() {
        assert_eq!(
            html_to_snippet("<h2>Changes</h2><ul><li>one</li><li>two</li></ul>"),
            "Changes\none\ntwo"
        );
        assert_eq!(html_to_snippet("a<br/>b"), "a\nb");
    }

    #[test]
    fn test_snippet_inline_tags_do_not_break() {
        assert_eq!(
            html_to_snippet("Use <code>--force</code> <a href=\"x\">here</a>"),
            "Use --force here"
        );
    }

    #[test]
    fn test_snippet_decodes_entities() {
        assert_eq!(
            html_to_snippet("a &lt;b&gt; &amp; &quot;c&quot; &#39;d&#39; &#x41;"),
            "a <b> & \"c\" 'd' A"
        );
        // Unknown entities stay as written.
        assert_eq!(html_to_snippet("R&D &bogus;"), "R&D &bogus;");
    }

    #[test]
    fn test_snippet_decodes_typographic_entities() {
        assert_eq!(
            html_to_snippet("<p>Don&rsquo;t panic &mdash; wait&hellip; &copy;</p>"),
            "Don\u{2019}t panic \u{2014} wait\u{2026} \u{a9}"
        );
        assert_eq!(html_to_snippet("7.2.0&nbsp;stable"), "7.2.0\u{a0}stable");
    }
}
