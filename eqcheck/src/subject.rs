use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The subject area an exercise belongs to, used to pick which extra
/// equivalence rules apply when the structural comparison rejects an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Subject {
    /// The default: no rules beyond the structural comparison.
    #[default]
    Algebra,

    /// No extra rules exist yet; behaves like [`Subject::Algebra`].
    Calculus,

    /// No extra rules exist yet; behaves like [`Subject::Algebra`].
    Geometry,

    /// Adds the special-value table relating surds to their decimal and
    /// symbol spellings (`sqrt(2)/2` vs `√2/2`, `1/2` vs `0.5`).
    Trigonometry,
}

impl Display for Subject {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            Subject::Algebra => "algebra",
            Subject::Calculus => "calculus",
            Subject::Geometry => "geometry",
            Subject::Trigonometry => "trigonometry",
        };
        write!(f, "{name}")
    }
}

/// Error returned when a subject tag is not one of the four known subjects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSubject(pub String);

impl Display for UnknownSubject {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "unknown subject `{}`", self.0)
    }
}

impl std::error::Error for UnknownSubject {}

impl FromStr for Subject {
    type Err = UnknownSubject;

    /// Parses the lowercase subject tags the grading UI stores on each
    /// exercise.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "algebra" => Ok(Subject::Algebra),
            "calculus" => Ok(Subject::Calculus),
            "geometry" => Ok(Subject::Geometry),
            "trigonometry" => Ok(Subject::Trigonometry),
            _ => Err(UnknownSubject(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn round_trips_through_strings() {
        for subject in [
            Subject::Algebra,
            Subject::Calculus,
            Subject::Geometry,
            Subject::Trigonometry,
        ] {
            assert_eq!(subject.to_string().parse::<Subject>(), Ok(subject));
        }
    }

    #[test]
    fn rejects_unknown_tags() {
        assert_eq!(
            "statistics".parse::<Subject>(),
            Err(UnknownSubject("statistics".to_string())),
        );
    }

    #[test]
    fn defaults_to_algebra() {
        assert_eq!(Subject::default(), Subject::Algebra);
    }
}
