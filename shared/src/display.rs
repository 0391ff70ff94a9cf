//! Formatting helpers for the article listing.

use crate::Photo;

/// Resolves a photo path against the media host.
///
/// `"/uploads/a.jpg"` on `http://localhost:8081` becomes
/// `http://localhost:8081/uploads/a.jpg`. Absolute URLs pass through.
pub fn photo_src(media_host: &str, url: &str) -> String {
    let url = url.trim();
    if url.starts_with("http://") || url.starts_with("https://") {
        return url.to_string();
    }
    let host = media_host.trim_end_matches('/');
    if url.starts_with('/') {
        format!("{}{}", host, url)
    } else {
        format!("{}/{}", host, url)
    }
}

/// Thumbnails to render plus how many were cut.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoStrip<'a> {
    /// Photos to render, in order.
    pub shown: &'a [Photo],
    /// Photos hidden behind the `+N` badge.
    pub overflow: usize,
}

impl PhotoStrip<'_> {
    /// `+N` badge text, if anything was cut.
    pub fn overflow_label(&self) -> Option<String> {
        (self.overflow > 0).then(|| format!("+{}", self.overflow))
    }

    /// True when there is nothing to show; render a placeholder instead.
    pub fn is_empty(&self) -> bool {
        self.shown.is_empty()
    }
}

/// First `limit` photos (all when `None`) and the count of the rest.
pub fn photo_strip(photos: &[Photo], limit: Option<usize>) -> PhotoStrip<'_> {
    let shown = limit.map_or(photos.len(), |limit| limit.min(photos.len()));
    PhotoStrip {
        shown: &photos[..shown],
        overflow: photos.len() - shown,
    }
}

/// Cuts `text` to at most `max_chars` characters, adding an ellipsis when
/// something was dropped.
pub fn summary_excerpt(text: &str, max_chars: usize) -> String {
    let text = text.trim();
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}…", text[..cut].trim_end()),
        None => text.to_string(),
    }
}
