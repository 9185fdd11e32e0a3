//! Lexical handling of native POSIX and Windows paths.
//!
//! Nothing here touches the filesystem. Paths are plain strings because a
//! Windows path has to be manipulated on a POSIX host and vice versa, which
//! `std::path` cannot do.

use crate::format::NativeKind;
use crate::mount::MountCorrelation;

/// Normalize a POSIX path.
///
/// Repeated separators collapse, `.` components disappear and a trailing
/// separator is dropped (root stays `/`). `..` is kept: resolving it
/// lexically would be wrong across symlinks.
///
/// Returns `None` for text that cannot be a POSIX path (empty, or holding
/// a NUL byte).
///
/// # Examples
///
/// ```
/// use playconv::convert::native::normalize_posix;
///
/// assert_eq!(normalize_posix("/mnt//c/./music/").as_deref(), Some("/mnt/c/music"));
/// assert_eq!(normalize_posix("").as_deref(), None);
/// ```
#[must_use]
pub fn normalize_posix(text: &str) -> Option<String> {
    if text.is_empty() || text.contains('\0') {
        return None;
    }

    let absolute = text.starts_with('/');
    let components: Vec<&str> = text
        .split('/')
        .filter(|c| !c.is_empty() && *c != ".")
        .collect();

    let joined = components.join("/");
    Some(match (absolute, joined.is_empty()) {
        (true, _) => format!("/{joined}"),
        (false, true) => ".".to_string(),
        (false, false) => joined,
    })
}

/// Normalize a Windows path.
///
/// `/` becomes `\`, repeated separators collapse (the `\\` of a UNC prefix
/// is kept) and `.` components disappear. A rooted drive path keeps its
/// root separator, so `C:\` stays `C:\`.
///
/// # Examples
///
/// ```
/// use playconv::convert::native::normalize_windows;
///
/// assert_eq!(normalize_windows("C:/music//a.mp3").as_deref(), Some(r"C:\music\a.mp3"));
/// assert_eq!(normalize_windows(r"\\nas\share\x").as_deref(), Some(r"\\nas\share\x"));
/// ```
#[must_use]
pub fn normalize_windows(text: &str) -> Option<String> {
    if text.is_empty() || text.contains('\0') {
        return None;
    }

    let unified = text.replace('/', "\\");
    let (prefix, rest) = split_windows_prefix(&unified);
    let rooted = rest.starts_with('\\');

    let components: Vec<&str> = rest
        .split('\\')
        .filter(|c| !c.is_empty() && *c != ".")
        .collect();
    let joined = components.join("\\");

    let normalized = match prefix {
        WindowsPrefix::Unc => format!("\\\\{joined}"),
        WindowsPrefix::Drive(drive) if rooted => format!("{drive}\\{joined}"),
        WindowsPrefix::Drive(drive) => format!("{drive}{joined}"),
        WindowsPrefix::None if rooted => format!("\\{joined}"),
        WindowsPrefix::None if joined.is_empty() => ".".to_string(),
        WindowsPrefix::None => joined,
    };
    Some(normalized)
}

/// Leading part of a Windows path that is not a plain component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WindowsPrefix<'a> {
    /// `\\server\share\...`
    Unc,
    /// `C:`
    Drive(&'a str),
    None,
}

/// Split a backslash-separated path into its prefix and the remainder.
pub(crate) fn split_windows_prefix(path: &str) -> (WindowsPrefix<'_>, &str) {
    if let Some(rest) = path.strip_prefix("\\\\") {
        return (WindowsPrefix::Unc, rest);
    }
    let bytes = path.as_bytes();
    if bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' {
        return (WindowsPrefix::Drive(&path[..2]), &path[2..]);
    }
    (WindowsPrefix::None, path)
}

/// Translate a normalized POSIX path to Windows through the mount table.
///
/// The first correlation whose mountpoint is a component-wise prefix of
/// `posix` wins; the table order is the resolver's order.
///
/// # Examples
///
/// ```
/// use playconv::convert::native::posix_to_windows;
/// use playconv::mount::MountCorrelation;
///
/// let mounts = vec![MountCorrelation::new("/mnt/c", "C:")];
/// assert_eq!(
///     posix_to_windows("/mnt/c/music/song.mp3", &mounts).as_deref(),
///     Some(r"C:\music\song.mp3")
/// );
/// assert_eq!(posix_to_windows("/mnt/cdrom/x", &mounts), None);
/// ```
#[must_use]
pub fn posix_to_windows(posix: &str, mounts: &[MountCorrelation]) -> Option<String> {
    mounts.iter().find_map(|mount| {
        let mountpoint = normalize_posix(&mount.posix_mountpoint)?;
        let rest = strip_posix_mountpoint(posix, &mountpoint)?;
        let source = mount.windows_source.trim_end_matches(['\\', '/']);
        if source.is_empty() {
            return None;
        }

        let suffix = rest.replace('/', "\\");
        let windows = if suffix.is_empty() {
            format!("{source}\\")
        } else {
            format!("{source}{suffix}")
        };
        normalize_windows(&windows)
    })
}

/// Translate a normalized Windows path to POSIX through the mount table.
///
/// The first correlation whose source is a case-insensitive prefix of
/// `windows`, ending on a separator or the end of the path, wins.
///
/// # Examples
///
/// ```
/// use playconv::convert::native::windows_to_posix;
/// use playconv::mount::MountCorrelation;
///
/// let mounts = vec![MountCorrelation::new("/mnt/c", "C:")];
/// assert_eq!(
///     windows_to_posix(r"c:\music\song.mp3", &mounts).as_deref(),
///     Some("/mnt/c/music/song.mp3")
/// );
/// assert_eq!(windows_to_posix(r"D:\music", &mounts), None);
/// ```
#[must_use]
pub fn windows_to_posix(windows: &str, mounts: &[MountCorrelation]) -> Option<String> {
    mounts.iter().find_map(|mount| {
        let source = mount.windows_source.trim_end_matches(['\\', '/']);
        let rest = strip_windows_source(windows, source)?;
        let mountpoint = normalize_posix(&mount.posix_mountpoint)?;

        let suffix = rest.replace('\\', "/");
        let posix = if suffix.is_empty() || suffix.starts_with('/') {
            format!("{mountpoint}{suffix}")
        } else {
            format!("{mountpoint}/{suffix}")
        };
        normalize_posix(&posix)
    })
}

/// Anchor a relative path of the given family at `base`.
///
/// Absolute paths come back unchanged. Windows paths that are rooted or
/// drive-relative (`\x`, `C:x`) are left alone.
///
/// # Examples
///
/// ```
/// use playconv::convert::native::anchor;
/// use playconv::format::NativeKind;
///
/// assert_eq!(anchor("music/a.mp3", "/home/u", NativeKind::Posix).as_deref(), Some("/home/u/music/a.mp3"));
/// assert_eq!(anchor("/a.mp3", "/home/u", NativeKind::Posix).as_deref(), Some("/a.mp3"));
/// assert_eq!(anchor(r"a.mp3", r"D:\lists", NativeKind::Windows).as_deref(), Some(r"D:\lists\a.mp3"));
/// ```
#[must_use]
pub fn anchor(path: &str, base: &str, kind: NativeKind) -> Option<String> {
    if !is_relative(path, kind) {
        return Some(path.to_string());
    }
    match kind {
        NativeKind::Posix => normalize_posix(&format!("{base}/{path}")),
        NativeKind::Windows => normalize_windows(&format!("{base}\\{path}")),
    }
}

/// Whether `path` is relative to the working directory.
#[must_use]
pub fn is_relative(path: &str, kind: NativeKind) -> bool {
    match kind {
        NativeKind::Posix => !path.starts_with('/'),
        NativeKind::Windows => {
            let unified = path.replace('/', "\\");
            let (prefix, rest) = split_windows_prefix(&unified);
            prefix == WindowsPrefix::None && !rest.starts_with('\\')
        }
    }
}

fn strip_posix_mountpoint<'a>(posix: &'a str, mountpoint: &str) -> Option<&'a str> {
    if mountpoint == "/" {
        return posix.strip_prefix('/').map(|_| posix);
    }
    let rest = posix.strip_prefix(mountpoint)?;
    (rest.is_empty() || rest.starts_with('/')).then_some(rest)
}

fn strip_windows_source<'a>(windows: &'a str, source: &str) -> Option<&'a str> {
    if source.is_empty() {
        return None;
    }
    let head = windows.get(..source.len())?;
    if !head.eq_ignore_ascii_case(source) {
        return None;
    }
    let rest = &windows[source.len()..];
    // a bare drive source also takes drive-relative remainders (`C:music`)
    (rest.is_empty() || rest.starts_with('\\') || source.ends_with(':')).then_some(rest)
}
