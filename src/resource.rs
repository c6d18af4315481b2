//! Resource locators and how they are dereferenced into text.

use std::borrow::Cow;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use thiserror::Error;

use crate::templates::embedded_content;

/// Scheme of resources packaged into the binary.
pub const EMBEDDED_SCHEME: &str = "embedded";
/// Scheme of resources on the local filesystem.
pub const FILE_SCHEME: &str = "file";

/// Errors raised while parsing or reading a resource locator.
#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("malformed resource locator '{0}'")]
    MalformedLocator(String),

    #[error("unsupported scheme '{scheme}' in resource locator '{locator}'")]
    UnsupportedScheme { scheme: String, locator: String },

    #[error("no packaged resource named '{0}'")]
    EmbeddedNotFound(String),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A locator for a template resource.
///
/// The canonical string form is `embedded:<name>` or `file://<path>`; it
/// parses back into an equal value. In the `file://` form, `%` and bytes that
/// are not valid UTF-8 are written as `%XX` escapes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResourcePath {
    /// A resource packaged into the binary, by relative name.
    Embedded(String),
    /// A file on disk.
    File(PathBuf),
}

impl ResourcePath {
    /// Reads the full content of the resource as UTF-8 text.
    pub fn read_to_string(&self) -> Result<String, ResourceError> {
        match self {
            ResourcePath::Embedded(name) => embedded_content(name)
                .map(str::to_string)
                .ok_or_else(|| ResourceError::EmbeddedNotFound(name.clone())),
            ResourcePath::File(path) => {
                std::fs::read_to_string(path).map_err(|source| ResourceError::Io {
                    path: path.clone(),
                    source,
                })
            }
        }
    }
}

impl fmt::Display for ResourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourcePath::Embedded(name) => write!(f, "{}:{}", EMBEDDED_SCHEME, name),
            ResourcePath::File(path) => {
                write!(f, "{}://", FILE_SCHEME)?;
                for chunk in path_bytes(path).utf8_chunks() {
                    for c in chunk.valid().chars() {
                        if c == '%' {
                            f.write_str("%25")?;
                        } else {
                            write!(f, "{}", c)?;
                        }
                    }
                    for byte in chunk.invalid() {
                        write!(f, "%{:02X}", byte)?;
                    }
                }
                Ok(())
            }
        }
    }
}

#[cfg(unix)]
fn path_bytes(path: &Path) -> Cow<'_, [u8]> {
    use std::os::unix::ffi::OsStrExt;
    Cow::Borrowed(path.as_os_str().as_bytes())
}

#[cfg(not(unix))]
fn path_bytes(path: &Path) -> Cow<'_, [u8]> {
    Cow::Owned(path.to_string_lossy().into_owned().into_bytes())
}

#[cfg(unix)]
fn path_from_bytes(bytes: Vec<u8>) -> Option<PathBuf> {
    use std::os::unix::ffi::OsStringExt;
    Some(PathBuf::from(std::ffi::OsString::from_vec(bytes)))
}

#[cfg(not(unix))]
fn path_from_bytes(bytes: Vec<u8>) -> Option<PathBuf> {
    String::from_utf8(bytes).ok().map(PathBuf::from)
}

/// Reverses the `%XX` escapes of the `file://` form.
fn decode_path(encoded: &str) -> Option<PathBuf> {
    let bytes = encoded.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hex = encoded.get(i + 1..i + 3)?;
            if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
                return None;
            }
            decoded.push(u8::from_str_radix(hex, 16).ok()?);
            i += 3;
        } else {
            decoded.push(bytes[i]);
            i += 1;
        }
    }
    path_from_bytes(decoded)
}

impl FromStr for ResourcePath {
    type Err = ResourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ResourceError::MalformedLocator(s.to_string());
        let (scheme, rest) = s.split_once(':').ok_or_else(malformed)?;

        match scheme {
            EMBEDDED_SCHEME => {
                if rest.is_empty() {
                    return Err(malformed());
                }
                Ok(ResourcePath::Embedded(rest.to_string()))
            }
            FILE_SCHEME => {
                let path = rest.strip_prefix("//").ok_or_else(malformed)?;
                if path.is_empty() {
                    return Err(malformed());
                }
                decode_path(path)
                    .map(ResourcePath::File)
                    .ok_or_else(malformed)
            }
            "" => Err(malformed()),
            other => Err(ResourceError::UnsupportedScheme {
                scheme: other.to_string(),
                locator: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn embedded_locator_has_canonical_form() {
        let path = ResourcePath::Embedded("expected-data-template/a.mustache".to_string());
        assert_eq!(path.to_string(), "embedded:expected-data-template/a.mustache");
        assert_eq!(path.to_string().parse::<ResourcePath>().unwrap(), path);
    }

    #[test]
    fn file_locator_survives_string_form() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("template.mustache");
        fs::write(&file, "{{testingId}}").unwrap();

        let path = ResourcePath::File(file.clone());
        assert!(path.to_string().starts_with("file://"));

        let reparsed: ResourcePath = path.to_string().parse().unwrap();
        assert_eq!(reparsed, path);
        assert_eq!(reparsed.read_to_string().unwrap(), "{{testingId}}");
    }

    #[test]
    fn parse_rejects_malformed_locators() {
        for locator in ["", "no-scheme", ":missing", "embedded:", "file:relative", "file://"] {
            let err = locator.parse::<ResourcePath>().unwrap_err();
            assert!(
                matches!(err, ResourceError::MalformedLocator(_)),
                "{} -> {:?}",
                locator,
                err
            );
        }
    }

    #[test]
    fn file_locator_escapes_percent_signs() {
        let path = ResourcePath::File(PathBuf::from("/tpl/100%/a.mustache"));
        assert_eq!(path.to_string(), "file:///tpl/100%25/a.mustache");
        assert_eq!(path.to_string().parse::<ResourcePath>().unwrap(), path);
    }

    #[cfg(unix)]
    #[test]
    fn file_locator_keeps_non_utf8_bytes() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let path = ResourcePath::File(
            Path::new(OsStr::from_bytes(b"/tmp/tpl\xff")).join("a.mustache"),
        );
        assert_eq!(path.to_string(), "file:///tmp/tpl%FF/a.mustache");
        assert_eq!(path.to_string().parse::<ResourcePath>().unwrap(), path);
    }

    #[test]
    fn parse_rejects_bad_escapes() {
        for locator in ["file:///a%G1", "file:///a%2", "file:///a%+1"] {
            assert!(
                matches!(
                    locator.parse::<ResourcePath>(),
                    Err(ResourceError::MalformedLocator(_))
                ),
                "{}",
                locator
            );
        }
    }

    #[test]
    fn parse_rejects_unknown_schemes() {
        let err = "https://example.com/t.mustache"
            .parse::<ResourcePath>()
            .unwrap_err();
        assert!(matches!(
            err,
            ResourceError::UnsupportedScheme { ref scheme, .. } if scheme == "https"
        ));
    }

    #[test]
    fn reading_unknown_embedded_name_fails() {
        let err = ResourcePath::Embedded("expected-data-template/missing.mustache".to_string())
            .read_to_string()
            .unwrap_err();
        assert!(matches!(err, ResourceError::EmbeddedNotFound(_)));
    }

    #[test]
    fn reading_missing_file_fails_with_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = ResourcePath::File(temp_dir.path().join("gone.mustache"))
            .read_to_string()
            .unwrap_err();
        match err {
            ResourceError::Io { source, .. } => assert_eq!(source.kind(), io::ErrorKind::NotFound),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn reading_non_utf8_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("binary.mustache");
        fs::write(&file, [0xff, 0xfe, 0xfd]).unwrap();

        let err = ResourcePath::File(file).read_to_string().unwrap_err();
        assert!(matches!(err, ResourceError::Io { .. }));
    }
}
