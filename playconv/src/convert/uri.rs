//! `file:` URI encoding and decoding for both native families.
//!
//! A POSIX URI carries an absolute POSIX path (`file:///mnt/c/a.mp3`); a
//! Windows URI carries a drive path (`file:///C:/a.mp3`) or a UNC path
//! (`file://nas/share/a.mp3`). Path segments are percent-encoded except for
//! unreserved characters.

use crate::convert::native::{
    normalize_posix, normalize_windows, split_windows_prefix, WindowsPrefix,
};
use crate::format::NativeKind;

const SCHEME: &str = "file:";

/// Render a native path as a `file:` URI.
///
/// Returns `None` for paths a URI cannot express: relative POSIX paths and
/// Windows paths without a rooted drive or UNC prefix.
///
/// # Examples
///
/// ```
/// use playconv::convert::uri::native_to_uri;
/// use playconv::format::NativeKind;
///
/// assert_eq!(
///     native_to_uri("/mnt/c/my music/a.mp3", NativeKind::Posix).as_deref(),
///     Some("file:///mnt/c/my%20music/a.mp3")
/// );
/// assert_eq!(
///     native_to_uri(r"C:\my music\a.mp3", NativeKind::Windows).as_deref(),
///     Some("file:///C:/my%20music/a.mp3")
/// );
/// ```
#[must_use]
pub fn native_to_uri(path: &str, kind: NativeKind) -> Option<String> {
    match kind {
        NativeKind::Posix => posix_to_uri(path),
        NativeKind::Windows => windows_to_uri(path),
    }
}

/// Decode a `file:` URI into a normalized native path of `kind`.
///
/// Returns `None` when the text is not a `file:` URI, does not decode to
/// UTF-8, or names something the native family cannot hold (a remote host
/// for POSIX, a driveless path for Windows).
///
/// # Examples
///
/// ```
/// use playconv::convert::uri::uri_to_native;
/// use playconv::format::NativeKind;
///
/// assert_eq!(
///     uri_to_native("file:///C:/my%20music/a.mp3", NativeKind::Windows).as_deref(),
///     Some(r"C:\my music\a.mp3")
/// );
/// assert_eq!(uri_to_native("/mnt/c/a.mp3", NativeKind::Posix), None);
/// ```
#[must_use]
pub fn uri_to_native(uri: &str, kind: NativeKind) -> Option<String> {
    let parsed = parse_file_uri(uri)?;
    match kind {
        NativeKind::Posix => {
            if !parsed.is_local() || !parsed.path.starts_with('/') {
                return None;
            }
            normalize_posix(&parsed.path)
        }
        NativeKind::Windows => {
            if !parsed.is_local() {
                let unc = format!("\\\\{}{}", parsed.host, parsed.path.replace('/', "\\"));
                return normalize_windows(&unc);
            }
            let without_root = parsed.path.strip_prefix('/').unwrap_or(&parsed.path);
            match split_windows_prefix(without_root) {
                (WindowsPrefix::Drive(_), _) => normalize_windows(without_root),
                _ => None,
            }
        }
    }
}

fn posix_to_uri(path: &str) -> Option<String> {
    if !path.starts_with('/') {
        return None;
    }
    Some(format!("file://{}", encode_segments(path.split('/'))))
}

fn windows_to_uri(path: &str) -> Option<String> {
    match split_windows_prefix(path) {
        (WindowsPrefix::Unc, rest) => {
            let (host, share_path) = rest.split_once('\\').unwrap_or((rest, ""));
            if host.is_empty() {
                return None;
            }
            let encoded = encode_segments(share_path.split('\\'));
            Some(format!("file://{}/{encoded}", urlencoding::encode(host)))
        }
        (WindowsPrefix::Drive(drive), rest) if rest.starts_with('\\') => {
            let encoded = encode_segments(rest.split('\\'));
            Some(format!("file:///{drive}{encoded}"))
        }
        _ => None,
    }
}

/// Percent-encode each segment and join them with `/`.
fn encode_segments<'a>(segments: impl Iterator<Item = &'a str>) -> String {
    segments
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

/// The parts of a `file:` URI the converter cares about.
#[derive(Debug, PartialEq, Eq)]
struct FileUri {
    host: String,
    path: String,
}

impl FileUri {
    fn is_local(&self) -> bool {
        self.host.is_empty() || self.host.eq_ignore_ascii_case("localhost")
    }
}

/// Split a `file:` URI into decoded host and path.
///
/// Query and fragment are dropped. `+` stays a literal plus: playlists
/// written with form-style encoding, where `+` stands for a space, decode
/// to a different file name (`a+b.mp3`, not `a b.mp3`).
fn parse_file_uri(text: &str) -> Option<FileUri> {
    let scheme = text.get(..SCHEME.len())?;
    if !scheme.eq_ignore_ascii_case(SCHEME) {
        return None;
    }
    let rest = &text[SCHEME.len()..];
    let rest = rest.split(['?', '#']).next().unwrap_or_default();

    let (host, raw_path) = match rest.strip_prefix("//") {
        Some(authority_and_path) => match authority_and_path.find('/') {
            Some(idx) => (&authority_and_path[..idx], &authority_and_path[idx..]),
            None => (authority_and_path, "/"),
        },
        None => ("", rest),
    };
    if raw_path.is_empty() {
        return None;
    }

    let path = urlencoding::decode(raw_path).ok()?.into_owned();
    let host = urlencoding::decode(host).ok()?.into_owned();
    if path.contains('\0') {
        return None;
    }
    Some(FileUri { host, path })
}
