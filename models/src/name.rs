use std::fmt::Display;

use serde::{Deserialize, Serialize};
use snafu::Snafu;

#[derive(Debug, Snafu, Clone, PartialEq, Eq)]
#[snafu(visibility(pub))]
pub enum NameError {
    #[snafu(display("Invalid identifier: {}", name))]
    InvalidIdentifier { name: String },
}

/// A dotted identifier referencing an object, before resolution.
///
/// The meaning of the segments depends on configuration: `x.y` may be
/// `project.object` or `schema.object`, which is decided later by the
/// resolver. Parsing only validates shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QualifiedName {
    /// `object`
    Bare { object: String },
    /// `x.object`, `x` still ambiguous
    Partial { first: String, object: String },
    /// `project.schema.object`
    Full {
        project: String,
        schema: String,
        object: String,
    },
}

impl QualifiedName {
    /// Splits `raw` on `.` into 1-3 non-empty segments.
    ///
    /// Empty segments or more than three segments fail with
    /// [`NameError::InvalidIdentifier`].
    pub fn parse(raw: &str) -> Result<Self, NameError> {
        let segments: Vec<&str> = raw.split('.').collect();
        if segments.iter().any(|s| s.is_empty()) {
            return Err(NameError::InvalidIdentifier {
                name: raw.to_string(),
            });
        }

        match segments[..] {
            [object] => Ok(Self::Bare {
                object: object.to_string(),
            }),
            [first, object] => Ok(Self::Partial {
                first: first.to_string(),
                object: object.to_string(),
            }),
            [project, schema, object] => Ok(Self::Full {
                project: project.to_string(),
                schema: schema.to_string(),
                object: object.to_string(),
            }),
            _ => Err(NameError::InvalidIdentifier {
                name: raw.to_string(),
            }),
        }
    }
}

/// A fully resolved `(project, schema, object)` triple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectRef {
    pub project: String,
    pub schema: String,
    pub object: String,
}

impl ObjectRef {
    pub fn new(
        project: impl Into<String>,
        schema: impl Into<String>,
        object: impl Into<String>,
    ) -> Self {
        Self {
            project: project.into(),
            schema: schema.into(),
            object: object.into(),
        }
    }
}

impl Display for ObjectRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.project, self.schema, self.object)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_segments() {
        assert_eq!(
            QualifiedName::parse("t").unwrap(),
            QualifiedName::Bare {
                object: "t".to_string()
            }
        );
        assert_eq!(
            QualifiedName::parse("x.t").unwrap(),
            QualifiedName::Partial {
                first: "x".to_string(),
                object: "t".to_string()
            }
        );
        assert_eq!(
            QualifiedName::parse("p.s.t").unwrap(),
            QualifiedName::Full {
                project: "p".to_string(),
                schema: "s".to_string(),
                object: "t".to_string()
            }
        );
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for raw in ["", ".", "a.", ".b", "a..b", "a.b.c.d"] {
            assert_eq!(
                QualifiedName::parse(raw),
                Err(NameError::InvalidIdentifier {
                    name: raw.to_string()
                }),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_object_ref_display() {
        let r = ObjectRef::new("p1", "s1", "t1");
        assert_eq!(r.to_string(), "p1.s1.t1");
    }
}
