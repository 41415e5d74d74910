use std::collections::BTreeSet;
use tracing::trace;

/// Result of growing a seed to a fixed point under the link relation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Closure {
    pub(crate) primary: BTreeSet<usize>,
    pub(crate) other: BTreeSet<usize>,
}

/// Grows `primary` and `other` until neither changes in a full pass.
///
/// `forward` maps primary indices to their linked other-side indices and
/// `backward` the reverse. With `consecutive`, the primary set is filled to
/// `min..=max` after each backward step, which may pull in unlinked primary
/// indices and, through them, further links.
///
/// The combined size only grows and is bounded by the two index spaces, so the
/// loop terminates.
pub(crate) fn expand(
    mut primary: BTreeSet<usize>,
    mut other: BTreeSet<usize>,
    forward: &[BTreeSet<usize>],
    backward: &[BTreeSet<usize>],
    consecutive: bool,
) -> Closure {
    let mut total = 0;
    let mut pass = 0usize;

    loop {
        pass += 1;

        for &p in &primary {
            other.extend(forward[p].iter().copied());
        }
        if primary.len() + other.len() == total {
            break;
        }
        total = primary.len() + other.len();

        for &o in &other {
            primary.extend(backward[o].iter().copied());
        }
        if consecutive {
            let span = primary.first().copied().zip(primary.last().copied());
            if let Some((min, max)) = span {
                primary.extend(min..=max);
            }
        }
        if primary.len() + other.len() == total {
            break;
        }
        total = primary.len() + other.len();

        trace!(pass, primary = primary.len(), other = other.len(), "closure pass");
    }

    Closure { primary, other }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[usize]) -> BTreeSet<usize> {
        items.iter().copied().collect()
    }

    /// Builds forward/backward adjacency from `(s, t)` pairs.
    fn adjacency(
        len_x: usize,
        len_y: usize,
        links: &[(usize, usize)],
    ) -> (Vec<BTreeSet<usize>>, Vec<BTreeSet<usize>>) {
        let mut x2y = vec![BTreeSet::new(); len_x];
        let mut y2x = vec![BTreeSet::new(); len_y];
        for &(s, t) in links {
            x2y[s].insert(t);
            y2x[t].insert(s);
        }
        (x2y, y2x)
    }

    #[test]
    fn test_unlinked_seed_is_fixed_point() {
        let (x2y, y2x) = adjacency(3, 3, &[(0, 0)]);
        let c = expand(set(&[2]), BTreeSet::new(), &x2y, &y2x, false);
        assert_eq!(c.primary, set(&[2]));
        assert!(c.other.is_empty());
    }

    #[test]
    fn test_shared_target_absorbs_source() {
        let (x2y, y2x) = adjacency(3, 3, &[(0, 0), (1, 0), (2, 2)]);
        let c = expand(set(&[0]), BTreeSet::new(), &x2y, &y2x, false);
        assert_eq!(c.primary, set(&[0, 1]));
        assert_eq!(c.other, set(&[0]));
    }

    #[test]
    fn test_transitive_chain() {
        // 0-0, 1-0, 1-1, 2-1, 2-2: everything is connected
        let (x2y, y2x) = adjacency(3, 3, &[(0, 0), (1, 0), (1, 1), (2, 1), (2, 2)]);
        let c = expand(set(&[0]), BTreeSet::new(), &x2y, &y2x, false);
        assert_eq!(c.primary, set(&[0, 1, 2]));
        assert_eq!(c.other, set(&[0, 1, 2]));
    }

    #[test]
    fn test_gap_kept_without_consecutive() {
        let (x2y, y2x) = adjacency(3, 1, &[(0, 0), (2, 0)]);
        let c = expand(set(&[0]), BTreeSet::new(), &x2y, &y2x, false);
        assert_eq!(c.primary, set(&[0, 2]));
        assert_eq!(c.other, set(&[0]));
    }

    #[test]
    fn test_consecutive_fills_gap_and_follows_links() {
        // 0 and 2 share target 0; filling the gap pulls in 1, whose link
        // reaches target 1, which in turn reaches source 3.
        let (x2y, y2x) = adjacency(5, 2, &[(0, 0), (2, 0), (1, 1), (3, 1)]);
        let c = expand(set(&[0]), BTreeSet::new(), &x2y, &y2x, true);
        assert_eq!(c.primary, set(&[0, 1, 2, 3]));
        assert_eq!(c.other, set(&[0, 1]));
    }

    #[test]
    fn test_reverse_direction() {
        // Scanning from the target side swaps the adjacency tables
        let (x2y, y2x) = adjacency(2, 3, &[(0, 0), (0, 2)]);
        let c = expand(set(&[0]), BTreeSet::new(), &y2x, &x2y, false);
        assert_eq!(c.primary, set(&[0, 2]));
        assert_eq!(c.other, set(&[0]));

        let c = expand(set(&[0]), BTreeSet::new(), &y2x, &x2y, true);
        assert_eq!(c.primary, set(&[0, 1, 2]));
        assert_eq!(c.other, set(&[0]));
    }
}
