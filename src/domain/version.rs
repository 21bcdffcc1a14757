//! Version tags carried in release links (`.../releases/tag/v7.2.0`).

use regex::Regex;
use std::sync::LazyLock;

/// `MAJOR.MINOR.0`, no leading zeros. Patch and pre-release builds never match.
static DOT_ZERO_VERSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(0|[1-9]\d*)\.(0|[1-9]\d*)\.0$").expect("dot-zero version pattern")
});

/// Extract the version from a release link: its last path segment, without a leading `v`.
///
/// Returns `None` when the link has no non-empty path segment.
pub fn version_from_link(link: &str) -> Option<String> {
    let segment = match url::Url::parse(link) {
        Ok(url) => url
            .path_segments()
            .and_then(|mut segments| segments.rfind(|s| !s.is_empty()))
            .map(str::to_string),
        // Relative or malformed links: fall back to plain splitting.
        Err(_) => link
            .split(['?', '#'])
            .next()
            .and_then(|path| path.split('/').rfind(|s| !s.is_empty()))
            .map(str::to_string),
    }?;
    let version = segment.strip_prefix('v').unwrap_or(&segment);
    if version.is_empty() {
        None
    } else {
        Some(version.to_string())
    }
}

/// True for minor/major releases (`7.2.0`), false for patches (`7.2.1`) and pre-releases.
pub fn is_dot_zero(version: &str) -> bool {
    DOT_ZERO_VERSION.is_match(version)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_from_github_tag_link() {
        assert_eq!(
            version_from_link("https://github.com/acme/cli/releases/tag/v7.2.0").as_deref(),
            Some("7.2.0")
        );
        assert_eq!(
            version_from_link("https://github.com/acme/cli/releases/tag/v7.2.0-beta.1").as_deref(),
            Some("7.2.0-beta.1")
        );
    }

    #[test]
    fn test_version_from_link_without_prefix_or_with_trailing_slash() {
        assert_eq!(
            version_from_link("https://example.com/releases/3.1.0/").as_deref(),
            Some("3.1.0")
        );
        assert_eq!(version_from_link("releases/tag/v1.0.0").as_deref(), Some("1.0.0"));
    }

    #[test]
    fn test_version_from_link_without_path() {
        assert_eq!(version_from_link("https://example.com/"), None);
        assert_eq!(version_from_link("https://example.com/tag/v"), None);
    }

    #[test]
    fn test_is_dot_zero() {
        assert!(is_dot_zero("7.2.0"));
        assert!(is_dot_zero("0.0.0"));
        assert!(is_dot_zero("10.20.0"));

        assert!(!is_dot_zero("7.2.1"));
        assert!(!is_dot_zero("7.2.0-beta.1"));
        assert!(!is_dot_zero("07.2.0"));
        assert!(!is_dot_zero("7.02.0"));
        assert!(!is_dot_zero("v7.2.0"));
        assert!(!is_dot_zero("7.2"));
    }
}
