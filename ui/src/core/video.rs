//! YouTube URL handling. The content payload carries videos either as bare
//! 11-character ids or as full watch/short/embed URLs.

/// Extract the video id from the common YouTube URL shapes, or accept a bare
/// id as-is.
pub fn youtube_id(url: &str) -> Option<String> {
    if url.is_empty() {
        return None;
    }

    // `v=` may be any query parameter, not just the first one.
    for marker in ["?v=", "&v=", "youtu.be/", "/embed/"] {
        if let Some(pos) = url.find(marker) {
            let tail = &url[pos + marker.len()..];
            let id: String = tail
                .chars()
                .take_while(|c| !matches!(c, '&' | '?' | '#' | '/' | '\n'))
                .collect();
            if !id.is_empty() {
                return Some(id);
            }
        }
    }

    // Bare video id: exactly 11 chars from the YouTube id alphabet.
    if url.len() == 11
        && url
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Some(url.to_string());
    }

    None
}

/// Privacy-friendly embed URL for an id.
pub fn embed_url(id: &str) -> String {
    format!("https://www.youtube-nocookie.com/embed/{id}")
}
