//! Route names for request spans.

use uuid::Uuid;

/// Collapse identifiers in `path` so requests for different resources share a
/// route name: `/api/v1/offer/101` becomes `/api/v1/offer/{id}`.
pub(super) fn normalise_path(path: &str) -> String {
    if path == "/" {
        return "/".to_owned();
    }

    path.trim_start_matches('/')
        .split('/')
        .fold(String::new(), |mut normalised, segment| {
            normalised.push('/');

            if !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit()) {
                normalised.push_str("{id}");
            } else if Uuid::parse_str(segment).is_ok() {
                normalised.push_str("{uuid}");
            } else {
                normalised.push_str(segment);
            }

            normalised
        })
}
