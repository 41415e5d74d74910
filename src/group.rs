use std::collections::BTreeSet;
use std::fmt;

/// One of the two parallel index spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Side {
    #[default]
    Source,
    Target,
}

impl Side {
    /// Returns the opposite side.
    pub fn other(self) -> Self {
        match self {
            Side::Source => Side::Target,
            Side::Target => Side::Source,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Source => "source",
            Side::Target => "target",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options for [`AlignmentIndex::groups_with`](crate::AlignmentIndex::groups_with).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GroupOptions {
    /// The side whose indices drive the partition scan.
    pub side: Side,
    /// Force each cluster's primary indices into one contiguous range.
    pub consecutive: bool,
}

impl GroupOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_side(mut self, side: Side) -> Self {
        self.side = side;
        self
    }

    pub fn consecutive(mut self, consecutive: bool) -> Self {
        self.consecutive = consecutive;
        self
    }
}

/// A cluster of mutually linked positions.
///
/// Always stored source-major, whichever side drove the scan.
#[derive(Debug, Clone, PartialEq, Eq, Default, Hash)]
pub struct Group {
    pub source: BTreeSet<usize>,
    pub target: BTreeSet<usize>,
}

impl Group {
    pub fn new(source: BTreeSet<usize>, target: BTreeSet<usize>) -> Self {
        Self { source, target }
    }

    /// Builds a group from a `(primary, other)` pair scanned from `side`.
    pub(crate) fn from_sides(side: Side, primary: BTreeSet<usize>, other: BTreeSet<usize>) -> Self {
        match side {
            Side::Source => Self::new(primary, other),
            Side::Target => Self::new(other, primary),
        }
    }

    /// Indices on `side`.
    pub fn primary(&self, side: Side) -> &BTreeSet<usize> {
        match side {
            Side::Source => &self.source,
            Side::Target => &self.target,
        }
    }

    /// Indices on the side opposite to `side`.
    pub fn other(&self, side: Side) -> &BTreeSet<usize> {
        self.primary(side.other())
    }

    /// True if one of the two sets is empty, i.e. the group is a leftover singleton.
    pub fn is_unaligned(&self) -> bool {
        self.source.is_empty() || self.target.is_empty()
    }

    /// Smallest and largest source index, if any.
    pub fn source_span(&self) -> Option<(usize, usize)> {
        Some((*self.source.first()?, *self.source.last()?))
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let join = |set: &BTreeSet<usize>| {
            set.iter()
                .map(|i| i.to_string())
                .collect::<Vec<_>>()
                .join(",")
        };
        write!(f, "{{{}}}-{{{}}}", join(&self.source), join(&self.target))
    }
}
