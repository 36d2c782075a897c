//! Syntactic checks for Terabox share links

/// Scheme prefix every accepted link must start with (case-sensitive)
const SCHEME_PREFIX: &str = "http";

/// Domain that must appear somewhere in an accepted link
const TERABOX_DOMAIN: &str = "terabox.com";

/// Check whether a message looks like a Terabox share link
///
/// The trimmed text must start with `http` and contain `terabox.com`.
/// No URL parsing is done; query strings and fragments are irrelevant.
pub fn is_terabox_link(text: &str) -> bool {
    let text = text.trim();
    text.starts_with(SCHEME_PREFIX) && text.contains(TERABOX_DOMAIN)
}

/// Pick the link to resolve out of a chat message
///
/// A message that is itself a link is used as a whole. Otherwise the
/// first whitespace-separated word that passes [`is_terabox_link`] wins.
pub fn find_terabox_link(text: &str) -> Option<&str> {
    let text = text.trim();
    if is_terabox_link(text) {
        return Some(text);
    }

    text.split_whitespace().find(|word| is_terabox_link(word))
}
