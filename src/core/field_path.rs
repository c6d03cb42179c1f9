use std::fmt;

use smallvec::SmallVec;

use crate::error::{SettingsError, SettingsResult};

/// Parsed field identifier.
///
/// Accepts the dotted form (`legend.labels.fontColor`) and the bracketed form
/// (`legend[labels][fontColor]`). The bracketed rendering is canonical: it is
/// the storage key and the submission key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath {
    segments: SmallVec<[String; 4]>,
}

impl FieldPath {
    pub fn parse(id: &str) -> SettingsResult<Self> {
        let invalid = |reason| SettingsError::InvalidFieldId {
            id: id.to_owned(),
            reason,
        };

        let (head, mut rest) = match id.find('[') {
            Some(open) => (&id[..open], &id[open..]),
            None => (id, ""),
        };

        let mut segments = SmallVec::new();
        for segment in head.split('.') {
            if segment.is_empty() {
                return Err(invalid("empty path segment"));
            }
            if segment.contains(']') {
                return Err(invalid("unbalanced brackets"));
            }
            segments.push(segment.to_owned());
        }

        while !rest.is_empty() {
            let Some(tail) = rest.strip_prefix('[') else {
                return Err(invalid("unexpected text after bracketed segment"));
            };
            let Some(close) = tail.find(']') else {
                return Err(invalid("unbalanced brackets"));
            };
            let segment = &tail[..close];
            if segment.is_empty() {
                return Err(invalid("empty path segment"));
            }
            if segment.contains('[') {
                return Err(invalid("unbalanced brackets"));
            }
            segments.push(segment.to_owned());
            rest = &tail[close + 1..];
        }

        Ok(Self { segments })
    }

    #[must_use]
    pub fn from_segments<I, S>(segments: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: SmallVec<[String; 4]> = segments.into_iter().map(Into::into).collect();
        if segments.is_empty() || segments.iter().any(String::is_empty) {
            return None;
        }
        Some(Self { segments })
    }

    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Top-level key, e.g. `legend` for `legend[position]`.
    #[must_use]
    pub fn root(&self) -> &str {
        &self.segments[0]
    }

    #[must_use]
    pub fn to_dotted(&self) -> String {
        self.segments.join(".")
    }

    /// Normalizes any accepted spelling to the canonical bracketed key.
    pub fn canonicalize(id: &str) -> SettingsResult<String> {
        Self::parse(id).map(|path| path.to_string())
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (head, tail) = self.segments.split_first().ok_or(fmt::Error)?;
        f.write_str(head)?;
        for segment in tail {
            write!(f, "[{segment}]")?;
        }
        Ok(())
    }
}
