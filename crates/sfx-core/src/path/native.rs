use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Bytes escaped inside one path segment of a `file:` URI. Non-ASCII is
/// always escaped as UTF-8.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b']')
    .add(b'\\')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

fn encode_segments(path: &str) -> String {
    path.split('/')
        .map(|segment| utf8_percent_encode(segment, PATH_SEGMENT).to_string())
        .collect::<Vec<_>>()
        .join("/")
}

/// A stored path classified by form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NativePath {
    /// `\\server\share\...` or `//server/share/...`. Holds the part after the
    /// leading separators, with separators normalized to `/`.
    Unc(String),
    /// `/abs/path`. Holds the path as stored.
    UnixAbsolute(String),
    /// Empty, relative, drive-letter or otherwise unusable. Holds the input.
    Unresolvable(String),
}

fn is_separator(c: char) -> bool {
    c == '\\' || c == '/'
}

impl NativePath {
    pub fn classify(raw: &str) -> Self {
        let trimmed = raw.trim();
        let mut chars = trimmed.chars();

        match (chars.next(), chars.next()) {
            (Some(a), Some(b)) if is_separator(a) && is_separator(b) => {
                let rest = trimmed.trim_start_matches(is_separator);
                if rest.is_empty() {
                    NativePath::Unresolvable(raw.to_string())
                } else {
                    NativePath::Unc(rest.replace('\\', "/"))
                }
            }
            (Some('/'), _) => NativePath::UnixAbsolute(trimmed.to_string()),
            _ => NativePath::Unresolvable(raw.to_string()),
        }
    }

    /// `file:` URI for native forms, `None` when unresolvable.
    ///
    /// Path segments are percent-encoded; `/` separators and the UNC server
    /// name are kept as is.
    pub fn to_file_uri(&self) -> Option<String> {
        match self {
            // `file:` + `//server/share`: the authority is the UNC server, no third slash
            NativePath::Unc(rest) => {
                let (server, path) = rest.split_once('/').unwrap_or((rest.as_str(), ""));
                if path.is_empty() {
                    Some(format!("file://{server}"))
                } else {
                    Some(format!("file://{server}/{}", encode_segments(path)))
                }
            }
            NativePath::UnixAbsolute(path) => Some(format!("file://{}", encode_segments(path))),
            NativePath::Unresolvable(_) => None,
        }
    }

    pub fn is_resolvable(&self) -> bool {
        !matches!(self, NativePath::Unresolvable(_))
    }
}
