use url::form_urlencoded;

/// Characters that may not appear in a placemark file name.
pub const FORBIDDEN_FILENAME_CHARS: [char; 10] =
    ['\\', '/', ':', '*', '?', '"', '<', '>', '|', ' '];

/// A toponym encoded for use as a URL query value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeocodeQuery(String);

impl GeocodeQuery {
    pub fn new(toponym: &str) -> Self {
        Self(form_urlencoded::byte_serialize(toponym.as_bytes()).collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Replace each forbidden character with `_`, one for one.
pub fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if FORBIDDEN_FILENAME_CHARS.contains(&c) {
                '_'
            } else {
                c
            }
        })
        .collect()
}
