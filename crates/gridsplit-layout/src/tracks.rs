#![forbid(unsafe_code)]

//! `grid-template-columns` / `grid-template-rows` track lists.

/// Insert `size` between every pair of tracks in `template`.
///
/// `"1fr 1fr 1fr"` with `"4px"` becomes `"1fr 4px 1fr 4px 1fr"`. Tokens are
/// passed through verbatim; no CSS syntax is checked. If either argument is
/// empty, `template` is returned unchanged.
#[must_use]
pub fn insert_track_size(template: &str, size: &str) -> String {
    if template.is_empty() || size.is_empty() {
        return template.to_owned();
    }

    let mut out = String::with_capacity(template.len() * 2);
    for (i, track) in template.split_whitespace().enumerate() {
        if i > 0 {
            out.push(' ');
            out.push_str(size);
            out.push(' ');
        }
        out.push_str(track);
    }
    out
}

/// A track list of `count` copies of `track`, e.g. `"1fr 1fr 1fr"`.
#[must_use]
pub fn repeat_track(track: &str, count: usize) -> String {
    vec![track; count].join(" ")
}

/// Number of whitespace-separated tracks in a track list.
#[must_use]
pub fn track_count(template: &str) -> usize {
    template.split_whitespace().count()
}
