//! Radar configuration
//!
//! Ring and quadrant vocabularies plus presentation metadata. A [`Meta`] is
//! built once per run and passed by reference to every stage.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Default radar title
pub const DEFAULT_TITLE: &str = "My Radar";

/// Default radar description
pub const DEFAULT_DESCRIPTION: &str = "Technology Radar";

/// Default snapshot file-name pattern (`YYYYMMDD.yaml`)
pub const DEFAULT_FILE_NAME_PATTERN: &str = r"^\d{8}\.yaml$";

/// A named category on one radar axis
///
/// Matching for coordinate resolution is case-insensitive on either form.
pub trait Category {
    /// Display name
    fn name(&self) -> &str;

    /// Short alias
    fn alias(&self) -> &str;

    /// Case-insensitive match against name or alias
    fn matches(&self, value: &str) -> bool {
        let value = value.to_lowercase();
        self.name().to_lowercase() == value || self.alias().to_lowercase() == value
    }
}

/// Ring of the radar (ordered, innermost first)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ring {
    /// Display name
    pub name: String,
    /// Short alias
    pub alias: String,
}

impl Ring {
    /// Create ring
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: alias.into(),
        }
    }
}

impl Category for Ring {
    fn name(&self) -> &str {
        &self.name
    }

    fn alias(&self) -> &str {
        &self.alias
    }
}

/// Quadrant of the radar (unordered topic)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Quadrant {
    /// Display name
    pub name: String,
    /// Short alias
    pub alias: String,
}

impl Quadrant {
    /// Create quadrant
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: alias.into(),
        }
    }
}

impl Category for Quadrant {
    fn name(&self) -> &str {
        &self.name
    }

    fn alias(&self) -> &str {
        &self.alias
    }
}

/// Default rings: Adopt, Trial, Assess, Hold
#[must_use]
pub fn default_rings() -> Vec<Ring> {
    vec![
        Ring::new("Adopt", "adopt"),
        Ring::new("Trial", "trial"),
        Ring::new("Assess", "assess"),
        Ring::new("Hold", "hold"),
    ]
}

/// Default quadrants: Languages, Frameworks, Platforms, Techniques
#[must_use]
pub fn default_quadrants() -> Vec<Quadrant> {
    vec![
        Quadrant::new("Languages", "languages"),
        Quadrant::new("Frameworks", "frameworks"),
        Quadrant::new("Platforms", "platforms"),
        Quadrant::new("Techniques", "techniques"),
    ]
}

fn membership<C: Category>(categories: &[C]) -> HashSet<String> {
    categories
        .iter()
        .flat_map(|c| [c.name().to_string(), c.alias().to_string()])
        .collect()
}

/// Validated radar configuration
///
/// # Invariants
/// - `rings` and `quadrants` are non-empty
/// - `file_name_pattern` compiles as a regular expression
/// - membership sets hold every name and alias (case-sensitive)
#[derive(Debug, Clone)]
pub struct Meta {
    title: String,
    description: String,
    quadrants: Vec<Quadrant>,
    rings: Vec<Ring>,
    file_name_pattern: String,
    ring_names: HashSet<String>,
    quadrant_names: HashSet<String>,
}

impl Meta {
    /// Build configuration with the default file-name pattern
    ///
    /// # Errors
    /// Returns error if either axis is empty
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        quadrants: Vec<Quadrant>,
        rings: Vec<Ring>,
    ) -> Result<Self, ConfigError> {
        if rings.is_empty() {
            return Err(ConfigError::EmptyRings);
        }
        if quadrants.is_empty() {
            return Err(ConfigError::EmptyQuadrants);
        }

        Ok(Self::assemble(title.into(), description.into(), quadrants, rings))
    }

    fn assemble(
        title: String,
        description: String,
        quadrants: Vec<Quadrant>,
        rings: Vec<Ring>,
    ) -> Self {
        let ring_names = membership(&rings);
        let quadrant_names = membership(&quadrants);
        Self {
            title,
            description,
            quadrants,
            rings,
            file_name_pattern: DEFAULT_FILE_NAME_PATTERN.to_string(),
            ring_names,
            quadrant_names,
        }
    }

    /// Replace the snapshot file-name pattern
    ///
    /// # Errors
    /// Returns error if the pattern is not a valid regular expression
    pub fn with_file_name_pattern(mut self, pattern: impl Into<String>) -> Result<Self, ConfigError> {
        let pattern = pattern.into();
        if let Err(e) = regex::Regex::new(&pattern) {
            return Err(ConfigError::InvalidFileNamePattern {
                pattern,
                message: e.to_string(),
            });
        }
        self.file_name_pattern = pattern;
        Ok(self)
    }

    /// Radar title
    #[inline]
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Radar description
    #[inline]
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Quadrants in configured order
    #[inline]
    #[must_use]
    pub fn quadrants(&self) -> &[Quadrant] {
        &self.quadrants
    }

    /// Rings, innermost first
    #[inline]
    #[must_use]
    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }

    /// Snapshot file-name pattern
    #[inline]
    #[must_use]
    pub fn file_name_pattern(&self) -> &str {
        &self.file_name_pattern
    }

    /// Whether `ring` is a ring name or alias (case-sensitive)
    #[inline]
    #[must_use]
    pub fn is_valid_ring(&self, ring: &str) -> bool {
        self.ring_names.contains(ring)
    }

    /// Whether `quadrant` is a quadrant name or alias (case-sensitive)
    #[inline]
    #[must_use]
    pub fn is_valid_quadrant(&self, quadrant: &str) -> bool {
        self.quadrant_names.contains(quadrant)
    }

    /// Display name for a quadrant given by name or alias
    ///
    /// Falls back to the input when nothing matches.
    #[must_use]
    pub fn quadrant_display_name<'a>(&'a self, quadrant: &'a str) -> &'a str {
        self.quadrants
            .iter()
            .find(|q| q.matches(quadrant))
            .map_or(quadrant, |q| q.name.as_str())
    }
}

impl Default for Meta {
    fn default() -> Self {
        Self::assemble(
            DEFAULT_TITLE.to_string(),
            DEFAULT_DESCRIPTION.to_string(),
            default_quadrants(),
            default_rings(),
        )
    }
}
