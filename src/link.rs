use crate::error::AlignError;
use std::fmt;
use std::str::FromStr;

/// A single alignment edge between a source and a target position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Link {
    pub source: usize,
    pub target: usize,
}

impl Link {
    pub fn new(source: usize, target: usize) -> Self {
        Self { source, target }
    }
}

impl FromStr for Link {
    type Err = AlignError;

    /// Parses `"<s>-<t>"`, splitting at the first `-`.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let bad = |reason: &'static str| AlignError::Parse {
            token: token.to_string(),
            reason,
        };

        let (s, t) = token.split_once('-').ok_or_else(|| bad("missing '-' separator"))?;
        let source = s.parse().map_err(|_| bad("source is not an index"))?;
        let target = t.parse().map_err(|_| bad("target is not an index"))?;

        Ok(Self { source, target })
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.source, self.target)
    }
}
