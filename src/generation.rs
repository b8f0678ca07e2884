use std::{fmt, str::FromStr};

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::{GEN_ALPHA_FIRST_YEAR, GEN_Z_FIRST_YEAR, GEN_Z_LAST_YEAR};

/// A generation the classifier knows how to name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
pub enum Generation {
    #[display(fmt = "Gen Z")]
    #[serde(rename = "Gen Z")]
    GenZ,
    #[display(fmt = "Gen Alpha")]
    #[serde(rename = "Gen Alpha")]
    GenAlpha,
}

/// Inclusive span of birth years.
/// `last` is `None` for a generation that is still being born.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GenerationSpan {
    first: u16,
    last:  Option<u16>,
}

/// Returned when a label does not name a known generation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown generation: {0:?}")]
pub struct UnknownGeneration(pub String);

/// Maps a birth year to its generation.
///
/// Total over all integers: years before 1997 have no generation here,
/// 1997 through 2012 are Gen Z and everything from 2013 on is Gen Alpha.
pub fn classify(year: i64) -> Option<Generation> {
    let found = Generation::ALL
        .into_iter()
        .find(|generation| generation.span().contains(year));
    tracing::debug!(year, generation = ?found, "classified birth year");
    found
}

impl Generation {
    /// Every generation, oldest first
    pub const ALL: [Self; 2] = [Self::GenZ, Self::GenAlpha];

    /// Birth years covered by this generation
    pub const fn span(self) -> GenerationSpan {
        match self {
            Self::GenZ => GenerationSpan {
                first: GEN_Z_FIRST_YEAR,
                last:  Some(GEN_Z_LAST_YEAR),
            },
            Self::GenAlpha => GenerationSpan {
                first: GEN_ALPHA_FIRST_YEAR,
                last:  None,
            },
        }
    }

    /// Blurb shown under the result headline
    pub const fn description(self) -> &'static str {
        match self {
            Self::GenZ => {
                "Born between 1997 and 2012, you're part of the digital native generation known \
                 for your tech-savvy nature and global mindset."
            },
            Self::GenAlpha => {
                "Born after 2012, you're part of the most technologically integrated \
                 generation, growing up with AI, smart devices, and immersive technology."
            },
        }
    }
}

impl FromStr for Generation {
    type Err = UnknownGeneration;

    /// Accepts the display label in any case, with or without a space,
    /// hyphen or underscore between the words.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match normalized.as_str() {
            "genz" => Ok(Self::GenZ),
            "genalpha" => Ok(Self::GenAlpha),
            _ => Err(UnknownGeneration(s.to_owned())),
        }
    }
}

impl GenerationSpan {
    /// First birth year in the span
    pub const fn first(&self) -> u16 {
        self.first
    }

    /// Last birth year in the span, if the span is closed
    pub const fn last(&self) -> Option<u16> {
        self.last
    }

    /// Checks whether a birth year falls inside the span
    pub fn contains(&self, year: i64) -> bool {
        i64::from(self.first) <= year && self.last.is_none_or(|last| year <= i64::from(last))
    }
}

impl fmt::Display for GenerationSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.last {
            Some(last) => write!(f, "{}-{last}", self.first),
            None => write!(f, "{}+", self.first),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gen_z_years() {
        for year in 1997..=2012 {
            assert_eq!(classify(year), Some(Generation::GenZ), "{year}");
        }
    }

    #[test]
    fn test_gen_alpha_years() {
        for year in 2013..=2200 {
            assert_eq!(classify(year), Some(Generation::GenAlpha), "{year}");
        }
        assert_eq!(classify(i64::MAX), Some(Generation::GenAlpha));
    }

    #[test]
    fn test_years_before_gen_z() {
        for year in 1800..1997 {
            assert_eq!(classify(year), None, "{year}");
        }
        assert_eq!(classify(0), None);
        assert_eq!(classify(-1), None);
        assert_eq!(classify(i64::MIN), None);
    }

    #[test]
    fn test_spans() {
        let z = Generation::GenZ.span();
        assert_eq!((z.first(), z.last()), (1997, Some(2012)));
        assert_eq!(z.to_string(), "1997-2012");

        let alpha = Generation::GenAlpha.span();
        assert_eq!((alpha.first(), alpha.last()), (2013, None));
        assert_eq!(alpha.to_string(), "2013+");
    }

    #[test]
    fn test_spans_do_not_overlap() {
        let z = Generation::GenZ.span();
        let alpha = Generation::GenAlpha.span();
        assert_eq!(z.last().map(|last| last + 1), Some(alpha.first()));
    }

    #[test]
    fn test_display() {
        assert_eq!(Generation::GenZ.to_string(), "Gen Z");
        assert_eq!(Generation::GenAlpha.to_string(), "Gen Alpha");
    }

    #[test]
    fn test_from_str() {
        for label in ["Gen Z", "gen z", "GenZ", "gen-z", "GEN_Z", " Gen Z "] {
            assert_eq!(label.parse::<Generation>(), Ok(Generation::GenZ), "{label}");
        }
        for label in ["Gen Alpha", "genalpha", "gen-alpha"] {
            assert_eq!(label.parse::<Generation>(), Ok(Generation::GenAlpha), "{label}");
        }
        assert_eq!(
            "Millennial".parse::<Generation>(),
            Err(UnknownGeneration("Millennial".to_owned()))
        );
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&Generation::GenZ).unwrap();
        assert_eq!(json, r#""Gen Z""#);
        let parsed: Generation = serde_json::from_str(r#""Gen Alpha""#).unwrap();
        assert_eq!(parsed, Generation::GenAlpha);
        assert!(serde_json::from_str::<Generation>(r#""Boomer""#).is_err());
    }

    #[test]
    fn test_descriptions() {
        assert!(Generation::GenZ.description().starts_with("Born between 1997 and 2012"));
        assert!(Generation::GenAlpha.description().starts_with("Born after 2012"));
        assert!(
            Generation::GenAlpha
                .description()
                .ends_with("immersive technology.")
        );
    }
}
