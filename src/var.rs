//! Named Boolean variables.
//!
//! A [`Variable`] is the immutable identity used as a key in restriction and
//! composition mappings and as an element of a function's support set. The
//! optional numeric index is convenient for bit vectors: the bits of an 8-bit
//! bus `v` are naturally named `v[0]` through `v[7]`.

use std::cmp::Ordering;
use std::fmt;

/// A Boolean variable: a named quantity that may assume any value in {0, 1}.
///
/// Identity and equality are determined by the `(name, index)` pair.
/// Variables are immutable once constructed.
///
/// # Ordering
///
/// Variables are totally ordered: first by `name` (lexicographically), then
/// by `index` (numerically), the index being consulted only when the names
/// are equal. A variable without an index orders before every indexed
/// variable of the same name.
///
/// # Examples
///
/// ```
/// use boolfunc_rs::var::Variable;
///
/// let a = Variable::new("a");
/// let v42 = Variable::indexed("v", 42);
///
/// assert_eq!(a.to_string(), "a");
/// assert_eq!(v42.to_string(), "v[42]");
/// assert!(a < v42);
/// ```
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Variable {
    name: String,
    index: Option<u32>,
}

impl Variable {
    /// Creates a variable with the given name and no index.
    pub fn new(name: impl Into<String>) -> Self {
        Variable {
            name: name.into(),
            index: None,
        }
    }

    /// Creates a variable with the given name and index.
    pub fn indexed(name: impl Into<String>, index: u32) -> Self {
        Variable {
            name: name.into(),
            index: Some(index),
        }
    }

    /// Returns the variable's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the variable's index, if it has one.
    pub fn index(&self) -> Option<u32> {
        self.index
    }
}

impl Ord for Variable {
    fn cmp(&self, other: &Self) -> Ordering {
        // Names compare lexicographically; indices break ties numerically,
        // with an absent index ordering before any present one.
        self.name
            .cmp(&other.name)
            .then_with(|| self.index.cmp(&other.index))
    }
}

impl PartialOrd for Variable {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.index {
            None => write!(f, "{}", self.name),
            Some(index) => write!(f, "{}[{}]", self.name, index),
        }
    }
}
