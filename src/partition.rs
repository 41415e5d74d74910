use crate::closure;
use crate::error::{AlignError, Result};
use crate::group::{Group, GroupOptions, Side};
use crate::index::AlignmentIndex;
use ahash::AHashSet;
use std::collections::BTreeSet;
use tracing::debug;

impl AlignmentIndex {
    /// Partitions both index spaces into alignment groups.
    ///
    /// Clusters are seeded from each unprocessed index on `side` in ascending
    /// order and grown to a fixed point. Other-side indices no cluster reached
    /// are appended afterwards as singletons, also ascending. Every group is
    /// reported source-major.
    ///
    /// With `consecutive`, each cluster's `side` indices form one contiguous
    /// range, absorbing any unlinked indices in between.
    pub fn groups(&self, side: Side, consecutive: bool) -> Result<Vec<Group>> {
        let (forward, backward) = self.tables(side);
        let len_p = forward.len();
        let len_o = backward.len();

        let mut processed_p = AHashSet::with_capacity(len_p);
        let mut processed_o = AHashSet::with_capacity(len_o);
        let mut groups = Vec::new();

        for seed in 0..len_p {
            if processed_p.contains(&seed) {
                continue;
            }

            let cluster = closure::expand(
                BTreeSet::from([seed]),
                BTreeSet::new(),
                forward,
                backward,
                consecutive,
            );

            mark(&mut processed_p, &cluster.primary, side)?;
            mark(&mut processed_o, &cluster.other, side.other())?;

            groups.push(Group::from_sides(side, cluster.primary, cluster.other));
        }

        let clusters = groups.len();
        for o in (0..len_o).filter(|o| !processed_o.contains(o)) {
            groups.push(Group::from_sides(side, BTreeSet::new(), BTreeSet::from([o])));
        }

        debug!(
            %side,
            consecutive,
            clusters,
            leftovers = groups.len() - clusters,
            "partitioned alignment"
        );

        Ok(groups)
    }

    /// Same as [`groups`](Self::groups), driven by a [`GroupOptions`].
    pub fn groups_with(&self, options: &GroupOptions) -> Result<Vec<Group>> {
        self.groups(options.side, options.consecutive)
    }

    /// Boolean form of [`groups`](Self::groups): `side_is_src` selects the source side.
    pub fn groups_bool(&self, side_is_src: bool, consecutive: bool) -> Result<Vec<Group>> {
        let side = if side_is_src { Side::Source } else { Side::Target };
        self.groups(side, consecutive)
    }
}

/// Records `indices` as processed, failing if any was already claimed.
fn mark(processed: &mut AHashSet<usize>, indices: &BTreeSet<usize>, side: Side) -> Result<()> {
    for &index in indices {
        if !processed.insert(index) {
            return Err(AlignError::InternalInvariantViolation { side, index });
        }
    }
    Ok(())
}
