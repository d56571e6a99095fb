use url::Url;

/// File extensions that mark a URL as a non-document resource.
///
/// Compared case-insensitively against the end of the URL path.
const SKIP_EXTENSIONS: &[&str] = &[
    ".jpg", ".jpeg", ".png", ".gif", ".pdf", ".zip", ".tar", ".gz",
];

/// Decides whether a discovered link is eligible for crawling
///
/// The rules apply in order and short-circuit on the first rejection:
///
/// 1. The candidate's host must equal the seed's host exactly. No subdomain
///    or `www.` equivalence is applied here.
/// 2. If `include` is non-empty, the raw URL string must contain at least
///    one of the patterns as a substring.
/// 3. If the raw URL string contains any `exclude` pattern, the candidate
///    is rejected. Exclusion always wins over inclusion.
/// 4. The URL path must not end with a known non-document extension
///    (images, archives, PDFs), compared case-insensitively.
///
/// Candidates that fail to parse are rejected rather than reported as errors.
///
/// # Arguments
///
/// * `candidate` - The absolute URL string to screen
/// * `seed` - The crawl's seed URL; its host defines the crawl scope
/// * `include` - Substrings a URL must contain (any one suffices)
/// * `exclude` - Substrings that disqualify a URL
///
/// # Examples
///
/// ```
/// use url::Url;
/// use docbinder::url::is_eligible;
///
/// let seed = Url::parse("https://docs.example.com/").unwrap();
///
/// assert!(is_eligible("https://docs.example.com/guide", &seed, &[], &[]));
/// assert!(!is_eligible("https://other.com/guide", &seed, &[], &[]));
/// assert!(!is_eligible("https://docs.example.com/logo.png", &seed, &[], &[]));
/// ```
pub fn is_eligible(candidate: &str, seed: &Url, include: &[String], exclude: &[String]) -> bool {
    let parsed = match Url::parse(candidate) {
        Ok(url) => url,
        Err(_) => return false,
    };

    // Rule 1: the crawl never leaves the seed's host
    if parsed.host_str() != seed.host_str() {
        return false;
    }

    // Rule 2: inclusion patterns, any one must match when present
    if !include.is_empty() && !include.iter().any(|p| candidate.contains(p.as_str())) {
        return false;
    }

    // Rule 3: exclusion patterns win over inclusion
    if exclude.iter().any(|p| candidate.contains(p.as_str())) {
        return false;
    }

    // Rule 4: non-document extensions, checked against the path only
    let path = parsed.path().to_lowercase();
    if SKIP_EXTENSIONS.iter().any(|ext| path.ends_with(ext)) {
        return false;
    }

    true
}
