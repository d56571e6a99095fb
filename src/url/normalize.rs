use crate::UrlError;
use url::Url;

/// Normalizes a URL string into the crawl's canonical identity form
///
/// Parsing already applies the WHATWG normalizations (lowercased host,
/// percent-encoded path). On top of that only the fragment is dropped, so
/// `/guide` and `/guide#anchor` share one identity while trailing-slash and
/// query variants remain distinct pages. Hosts are compared verbatim
/// elsewhere; in particular `www.` is not stripped here.
///
/// # Arguments
///
/// * `url_str` - The URL string to normalize
///
/// # Returns
///
/// * `Ok(Url)` - The canonical URL
/// * `Err(UrlError)` - Malformed input or a non-HTTP(S) scheme
///
/// # Examples
///
/// ```
/// use docbinder::url::normalize_candidate;
///
/// let url = normalize_candidate("https://docs.example.com/guide#setup").unwrap();
/// assert_eq!(url.as_str(), "https://docs.example.com/guide");
/// ```
pub fn normalize_candidate(url_str: &str) -> Result<Url, UrlError> {
    let mut url = Url::parse(url_str).map_err(|e| UrlError::Parse(e.to_string()))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(format!(
            "Only HTTP and HTTPS schemes are supported, got: {}",
            url.scheme()
        )));
    }

    if url.host_str().is_none() {
        return Err(UrlError::MissingHost);
    }

    url.set_fragment(None);

    Ok(url)
}
