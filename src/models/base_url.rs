use std::fmt;

/// URL prefix under which the blog is now served.
///
/// Always ends with `/`. Site-relative prefixes also always start with `/`;
/// absolute URLs (`https://example.com/blog`) keep their scheme untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrl(String);

impl BaseUrl {
    pub fn new(raw: &str) -> Self {
        let trimmed = raw.trim();
        let mut base = if trimmed.contains("://") || trimmed.starts_with('/') {
            trimmed.to_string()
        } else {
            format!("/{trimmed}")
        };
        if !base.ends_with('/') {
            base.push('/');
        }
        Self(base)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Appends a `/`-separated relative path to the prefix.
    pub fn join(&self, relative: &str) -> String {
        format!("{}{}", self.0, relative.trim_start_matches('/'))
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_keeps_normalized_prefix() {
        assert_eq!(BaseUrl::new("/blog/").as_str(), "/blog/");
    }

    #[test]
    fn test_base_url_adds_missing_slashes() {
        assert_eq!(BaseUrl::new("blog").as_str(), "/blog/");
        assert_eq!(BaseUrl::new("/blog").as_str(), "/blog/");
        assert_eq!(BaseUrl::new("blog/").as_str(), "/blog/");
    }

    #[test]
    fn test_base_url_empty_is_site_root() {
        assert_eq!(BaseUrl::new("").as_str(), "/");
    }

    #[test]
    fn test_base_url_absolute_url_keeps_scheme() {
        assert_eq!(
            BaseUrl::new("https://example.com/blog").as_str(),
            "https://example.com/blog/"
        );
    }

    #[test]
    fn test_base_url_join() {
        let base = BaseUrl::new("/blog/");
        assert_eq!(
            base.join("2021/05/my-post/index.html"),
            "/blog/2021/05/my-post/index.html"
        );
        assert_eq!(base.join("/about/"), "/blog/about/");
    }
}
