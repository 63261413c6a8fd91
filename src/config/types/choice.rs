//! String-backed enum fields.
//!
//! Enum fields are read from TOML as plain strings and converted here, so an
//! unrecognized value surfaces as [`ConfigError::UnknownEnumValue`] naming
//! the field instead of a generic parse error.

use super::{ConfigError, FieldPath};

/// A config enum with a fixed, lowercase set of names.
pub trait Choice: Sized + Copy {
    /// Accepted names, in declaration order.
    const VARIANTS: &'static [&'static str];

    /// Look up a variant by its exact name.
    fn from_name(name: &str) -> Option<Self>;

    /// Name as written in `trellis.toml`.
    fn name(self) -> &'static str;

    /// Parse `raw` for `field`, or the default when the field is absent.
    fn resolve(field: FieldPath, raw: Option<&str>) -> Result<Self, ConfigError>
    where
        Self: Default,
    {
        match raw {
            None => Ok(Self::default()),
            Some(value) => Self::from_name(value).ok_or_else(|| ConfigError::UnknownEnumValue {
                field,
                value: value.to_string(),
                expected: Self::VARIANTS,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    enum Mode {
        #[default]
        Fast,
        Slow,
    }

    impl Choice for Mode {
        const VARIANTS: &'static [&'static str] = &["fast", "slow"];

        fn from_name(name: &str) -> Option<Self> {
            match name {
                "fast" => Some(Self::Fast),
                "slow" => Some(Self::Slow),
                _ => None,
            }
        }

        fn name(self) -> &'static str {
            match self {
                Self::Fast => "fast",
                Self::Slow => "slow",
            }
        }
    }

    const FIELD: FieldPath = FieldPath::new("mode");

    #[test]
    fn test_resolve_absent_uses_default() {
        assert_eq!(Mode::resolve(FIELD, None).unwrap(), Mode::Fast);
    }

    #[test]
    fn test_resolve_known_name() {
        assert_eq!(Mode::resolve(FIELD, Some("slow")).unwrap(), Mode::Slow);
        assert_eq!(Mode::Slow.name(), "slow");
    }

    #[test]
    fn test_resolve_is_case_sensitive() {
        let err = Mode::resolve(FIELD, Some("Slow")).unwrap_err();
        match err {
            ConfigError::UnknownEnumValue {
                field,
                value,
                expected,
            } => {
                assert_eq!(field, FIELD);
                assert_eq!(value, "Slow");
                assert_eq!(expected, &["fast", "slow"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
