//! Project modal data
//!
//! A clicked project card is flattened into a [`ProjectInfo`] record before
//! the modal is touched; the modal never reads the card again. Either link
//! section is shown only when its URL survived normalization.

use crate::consts::LIVE_LINK_LABEL;

/// Data read off a clicked project card at open time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectInfo {
    pub title: String,
    pub description: String,
    pub image: String,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
}

impl ProjectInfo {
    /// Missing and empty link attributes both normalize to `None`
    pub fn new(
        title: String,
        description: String,
        image: String,
        github_url: Option<String>,
        live_url: Option<String>,
    ) -> Self {
        Self {
            title,
            description,
            image,
            github_url: github_url.filter(|url| !url.is_empty()),
            live_url: live_url.filter(|url| !url.is_empty()),
        }
    }

    /// Visible label for the source-repo link: the URL minus its scheme
    pub fn github_label(&self) -> Option<&str> {
        self.github_url.as_deref().map(strip_scheme)
    }

    /// Visible label for the live-demo link (fixed)
    pub fn live_label(&self) -> &'static str {
        LIVE_LINK_LABEL
    }
}

/// Strip a leading `https://` or `http://` for display
pub fn strip_scheme(url: &str) -> &str {
    url.strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(github: Option<&str>, live: Option<&str>) -> ProjectInfo {
        ProjectInfo::new(
            "Compiler Playground".into(),
            "A toy compiler".into(),
            "img/compiler.png".into(),
            github.map(String::from),
            live.map(String::from),
        )
    }

    #[test]
    fn test_empty_urls_normalize_to_none() {
        let project = info(Some(""), None);
        assert_eq!(project.github_url, None);
        assert_eq!(project.live_url, None);

        let project = info(Some("https://github.com/x/y"), Some(""));
        assert!(project.github_url.is_some());
        assert_eq!(project.live_url, None);
    }

    #[test]
    fn test_github_label_strips_scheme() {
        assert_eq!(
            info(Some("https://github.com/x/y"), None).github_label(),
            Some("github.com/x/y")
        );
        assert_eq!(
            info(Some("http://github.com/x/y"), None).github_label(),
            Some("github.com/x/y")
        );
        assert_eq!(info(None, None).github_label(), None);
    }

    #[test]
    fn test_strip_scheme_passthrough() {
        assert_eq!(strip_scheme("github.com/x/y"), "github.com/x/y");
        assert_eq!(strip_scheme(""), "");
    }

    #[test]
    fn test_live_label_is_fixed() {
        assert_eq!(info(None, Some("https://x.dev")).live_label(), "Website Compiler");
    }
}
