//! Fixed property classification filters understood by the search service.

use std::fmt;
use std::str::FromStr;

use crate::CoreError;

/// A named, compile-time set of classification tags.
///
/// The service filters results to properties whose classification matches
/// any of the tags. `ALL` sends the literal `"All"` tag, which the service
/// reads as "do not filter by classification".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClassificationFilter {
    name: &'static str,
    tags: &'static [&'static str],
}

impl ClassificationFilter {
    pub const RESIDENTIAL: Self = Self {
        name: "residential",
        tags: &["Residential"],
    };

    pub const COMMERCIAL: Self = Self {
        name: "commercial",
        tags: &["Commercial"],
    };

    pub const RESIDENTIAL_AND_COMMERCIAL: Self = Self {
        name: "residential-and-commercial",
        tags: &["Residential", "Commercial"],
    };

    pub const ALL: Self = Self {
        name: "all",
        tags: &["All"],
    };

    const KNOWN: [Self; 4] = [
        Self::RESIDENTIAL,
        Self::COMMERCIAL,
        Self::RESIDENTIAL_AND_COMMERCIAL,
        Self::ALL,
    ];

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn tags(&self) -> &'static [&'static str] {
        self.tags
    }
}

impl fmt::Display for ClassificationFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl FromStr for ClassificationFilter {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::KNOWN
            .into_iter()
            .find(|filter| filter.name == wanted)
            .ok_or_else(|| CoreError::InvalidClassificationFilter(s.to_string()))
    }
}
