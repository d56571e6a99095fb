use url::Url;

/// Maximum length of an artifact file stem before truncation.
const MAX_STEM_LEN: usize = 100;

/// Width at which URLs are truncated for display in the table of contents
/// and in section separators.
const DISPLAY_WIDTH: usize = 80;

/// Derives a short site name from a URL's host
///
/// A literal leading `www.` is stripped; nothing else changes. The result
/// seeds the default output filename (`{domain}-documentation.md`).
///
/// # Examples
///
/// ```
/// use url::Url;
/// use docbinder::url::derive_domain_name;
///
/// let url = Url::parse("https://www.example.com/docs").unwrap();
/// assert_eq!(derive_domain_name(&url), Some("example.com".to_string()));
///
/// let url = Url::parse("https://docs.example.com/").unwrap();
/// assert_eq!(derive_domain_name(&url), Some("docs.example.com".to_string()));
/// ```
pub fn derive_domain_name(url: &Url) -> Option<String> {
    url.host_str()
        .map(|h| h.strip_prefix("www.").unwrap_or(h).to_string())
}

/// Converts a URL into a filesystem-safe artifact file stem
///
/// The scheme prefix is dropped, every run of characters outside
/// `[A-Za-z0-9-]` collapses to a single underscore, edge underscores are
/// trimmed, and the stem is truncated to 100 characters. Distinct URLs can
/// collide after truncation; the artifact store disambiguates those with a
/// numeric suffix.
///
/// # Examples
///
/// ```
/// use docbinder::url::artifact_file_stem;
///
/// assert_eq!(
///     artifact_file_stem("https://docs.example.com/guide/intro"),
///     "docs_example_com_guide_intro"
/// );
/// ```
pub fn artifact_file_stem(url: &str) -> String {
    let without_scheme = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);

    let mut stem = String::with_capacity(without_scheme.len());
    let mut last_was_separator = false;
    for ch in without_scheme.chars() {
        if ch.is_ascii_alphanumeric() || ch == '-' {
            stem.push(ch);
            last_was_separator = false;
        } else if !last_was_separator {
            stem.push('_');
            last_was_separator = true;
        }
    }

    let stem = stem.trim_matches('_');

    // The stem is pure ASCII by construction, so byte indexing is safe.
    if stem.len() > MAX_STEM_LEN {
        stem[..MAX_STEM_LEN].to_string()
    } else {
        stem.to_string()
    }
}

/// Truncates a URL for display in the table of contents and separators
///
/// URLs longer than 80 characters are cut and suffixed with `...`.
pub fn display_url(url: &str) -> String {
    match url.char_indices().nth(DISPLAY_WIDTH) {
        Some((idx, _)) => format!("{}...", &url[..idx]),
        None => url.to_string(),
    }
}
