//! Field selection policy
//!
//! A [`FieldSelector`] decides, at every mapping level of a traversal,
//! whether a string leaf under a given key is eligible for transformation.
//! The filter matches key names at any depth independently; it is not
//! path-qualified. Keyless strings (top-level input, array elements) are
//! never filtered by name.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// How a field list is interpreted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectorOp {
    /// Only listed fields are eligible
    #[default]
    Include,
    /// Every field except the listed ones is eligible
    Exclude,
}

impl SelectorOp {
    /// Parse an operator token, degrading to the default on anything
    /// unrecognized
    ///
    /// This is the permissive path: an unknown token behaves exactly like an
    /// omitted operator. Use [`FromStr`] to reject bad tokens instead.
    pub fn from_token(token: &str) -> Self {
        token.parse().unwrap_or_default()
    }
}

impl FromStr for SelectorOp {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(SelectorOp::Include),
            "-" => Ok(SelectorOp::Exclude),
            other => Err(Error::InvalidOperator(other.to_string())),
        }
    }
}

impl fmt::Display for SelectorOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectorOp::Include => write!(f, "+"),
            SelectorOp::Exclude => write!(f, "-"),
        }
    }
}

/// Which fields of a mapping are eligible for transformation
///
/// The default selector has no field list and selects every field.
///
/// # Examples
///
/// ```
/// use entitext_core::FieldSelector;
///
/// let sel = FieldSelector::include(["title"]);
/// assert!(sel.selects("title"));
/// assert!(!sel.selects("body"));
///
/// let sel = FieldSelector::exclude(["raw"]);
/// assert!(!sel.selects("raw"));
/// assert!(sel.selects("anything_else"));
///
/// assert!(FieldSelector::all().selects("whatever"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSelector {
    fields: Option<HashSet<String>>,
    op: SelectorOp,
}

impl FieldSelector {
    /// Selector that makes every field eligible (same as `Default`)
    pub fn all() -> Self {
        Self::default()
    }

    /// Selector that makes only the listed fields eligible
    pub fn include<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FieldSelector {
            fields: Some(fields.into_iter().map(Into::into).collect()),
            op: SelectorOp::Include,
        }
    }

    /// Selector that makes every field except the listed ones eligible
    pub fn exclude<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FieldSelector {
            fields: Some(fields.into_iter().map(Into::into).collect()),
            op: SelectorOp::Exclude,
        }
    }

    /// Build a selector from optional raw parts
    ///
    /// Mirrors a call surface where both the field list and the operator
    /// token are optional trailing arguments. An unrecognized operator token
    /// degrades to the omitted-operator behavior rather than erroring.
    pub fn from_parts(fields: Option<Vec<String>>, op: Option<&str>) -> Self {
        FieldSelector {
            fields: fields.map(|f| f.into_iter().collect()),
            op: op.map(SelectorOp::from_token).unwrap_or_default(),
        }
    }

    /// Eligibility test for a field name
    ///
    /// No field list selects everything; `Include` selects listed fields;
    /// `Exclude` selects unlisted fields. Field names absent from the data
    /// are simply never matched, which is not an error.
    pub fn selects(&self, field: &str) -> bool {
        match &self.fields {
            None => true,
            Some(set) => match self.op {
                SelectorOp::Include => set.contains(field),
                SelectorOp::Exclude => !set.contains(field),
            },
        }
    }

    /// Check whether this selector has no field list
    pub fn is_select_all(&self) -> bool {
        self.fields.is_none()
    }

    /// The inclusion/exclusion operator
    pub fn op(&self) -> SelectorOp {
        self.op
    }
}

impl fmt::Display for FieldSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.fields {
            None => write!(f, "all"),
            Some(set) => {
                // Sorted for deterministic log output
                let mut names: Vec<&str> = set.iter().map(String::as_str).collect();
                names.sort_unstable();
                write!(f, "{}{{{}}}", self.op, names.join(","))
            }
        }
    }
}
