use crate::error::{AlignError, Result};
use crate::group::Side;
use crate::link::Link;
use std::collections::BTreeSet;
use tracing::debug;

/// Bidirectional index over the links between two parallel index spaces.
///
/// Immutable once built. `x2y[s]` holds the targets linked to source `s` and
/// `y2x[t]` the sources linked to target `t`; the two tables always describe
/// the same edge set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentIndex {
    len_x: usize,
    len_y: usize,

    /// Source to target adjacency
    pub(crate) x2y: Vec<BTreeSet<usize>>,

    /// Target to source adjacency
    pub(crate) y2x: Vec<BTreeSet<usize>>,

    /// Links in the order they were supplied, duplicates included
    links: Vec<Link>,
}

impl AlignmentIndex {
    /// Builds an index from `"<s>-<t>"` tokens.
    ///
    /// Fails on the first token that does not parse or that points outside
    /// `[0, len_x)` / `[0, len_y)`. No partial index is returned.
    pub fn new<I, S>(tokens: I, len_x: usize, len_y: usize) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = Self::empty(len_x, len_y);
        for token in tokens {
            let token = token.as_ref();
            let link = token.parse::<Link>()?;
            index.insert(link, token)?;
        }
        index.log_built();
        Ok(index)
    }

    /// Builds an index from a whitespace-separated line such as `"0-0 1-2 2-1"`.
    pub fn from_line(line: &str, len_x: usize, len_y: usize) -> Result<Self> {
        Self::new(line.split_whitespace(), len_x, len_y)
    }

    /// Builds an index from already parsed links.
    pub fn from_links<I>(links: I, len_x: usize, len_y: usize) -> Result<Self>
    where
        I: IntoIterator<Item = Link>,
    {
        let mut index = Self::empty(len_x, len_y);
        for link in links {
            index.insert(link, &link.to_string())?;
        }
        index.log_built();
        Ok(index)
    }

    fn empty(len_x: usize, len_y: usize) -> Self {
        Self {
            len_x,
            len_y,
            x2y: vec![BTreeSet::new(); len_x],
            y2x: vec![BTreeSet::new(); len_y],
            links: Vec::new(),
        }
    }

    fn insert(&mut self, link: Link, token: &str) -> Result<()> {
        let out_of_range = |side, index, len| AlignError::OutOfRange {
            side,
            index,
            len,
            token: token.to_string(),
        };
        if link.source >= self.len_x {
            return Err(out_of_range(Side::Source, link.source, self.len_x));
        }
        if link.target >= self.len_y {
            return Err(out_of_range(Side::Target, link.target, self.len_y));
        }

        self.x2y[link.source].insert(link.target);
        self.y2x[link.target].insert(link.source);
        self.links.push(link);
        Ok(())
    }

    fn log_built(&self) {
        debug!(
            len_x = self.len_x,
            len_y = self.len_y,
            links = self.links.len(),
            edges = self.edge_count(),
            "built alignment index"
        );
    }

    /// Number of source positions.
    pub fn len_x(&self) -> usize {
        self.len_x
    }

    /// Number of target positions.
    pub fn len_y(&self) -> usize {
        self.len_y
    }

    /// Size of the index space on `side`.
    pub fn len(&self, side: Side) -> usize {
        match side {
            Side::Source => self.len_x,
            Side::Target => self.len_y,
        }
    }

    /// Returns true if both index spaces are empty.
    pub fn is_empty(&self) -> bool {
        self.len_x == 0 && self.len_y == 0
    }

    /// Links as supplied, in input order and including duplicates.
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Number of distinct edges.
    pub fn edge_count(&self) -> usize {
        self.x2y.iter().map(BTreeSet::len).sum()
    }

    /// Targets linked to source `s`, or `None` if `s` is out of range.
    pub fn targets_of(&self, s: usize) -> Option<&BTreeSet<usize>> {
        self.x2y.get(s)
    }

    /// Sources linked to target `t`, or `None` if `t` is out of range.
    pub fn sources_of(&self, t: usize) -> Option<&BTreeSet<usize>> {
        self.y2x.get(t)
    }

    pub fn is_linked(&self, s: usize, t: usize) -> bool {
        self.x2y.get(s).is_some_and(|targets| targets.contains(&t))
    }

    /// Adjacency tables oriented so that `side` is the primary side.
    pub(crate) fn tables(&self, side: Side) -> (&[BTreeSet<usize>], &[BTreeSet<usize>]) {
        match side {
            Side::Source => (&self.x2y, &self.y2x),
            Side::Target => (&self.y2x, &self.x2y),
        }
    }
}
