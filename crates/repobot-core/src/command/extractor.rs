//! `/search` parameter extraction.
//!
//! The grammar is `/search <repo> [lang:<language>] [author:<author>]`.
//! The repository token is mandatory and positional; each qualifier is
//! matched by its own pattern anywhere after it, so users may write the
//! qualifiers in either order.

use once_cell::sync::Lazy;
use regex::Regex;

use repobot_types::error::ExtractError;
use repobot_types::repo::SearchQuery;

static REPO_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^/search\s([A-Za-z0-9_-]+)\s*.*").expect("repo pattern is valid")
});

static LANG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^/search\s.*\s+lang:([A-Za-z0-9_]*)").expect("lang pattern is valid"));

static AUTHOR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^/search\s.*\s+author:([A-Za-z0-9_-]+)").expect("author pattern is valid")
});

/// Parse a `/search` command into a [`SearchQuery`].
///
/// The text is trimmed first. Fails with [`ExtractError::MissingRepoName`]
/// when the text does not start with `/search` followed by whitespace and a
/// name token. Missing qualifiers are not an error.
pub fn extract(text: &str) -> Result<SearchQuery, ExtractError> {
    let text = text.trim();

    let repo = first_capture(&REPO_RE, text)
        .ok_or_else(|| ExtractError::MissingRepoName(text.to_string()))?;
    let language = first_capture(&LANG_RE, text);
    let author = first_capture(&AUTHOR_RE, text);

    SearchQuery::new(repo, language, author)
}

fn first_capture(re: &Regex, text: &str) -> Option<String> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
