//! # Alignment Groups
//!
//! Partitions two parallel index spaces (source positions `0..len_x`, target
//! positions `0..len_y`) into clusters of mutually linked positions, given a sparse
//! set of word alignment links between them.
//!
//! A cluster is grown from a seed position to a fixed point: every link of a source
//! index pulls in its target, every link of a target index pulls in its source. In
//! **consecutive** mode the cluster's primary side is additionally forced to be one
//! contiguous range, so fragmented alignments coalesce into phrase-like chunks.
//!
//! ## Example
//!
//! ```
//! use alignment_groups::{AlignmentIndex, Side};
//!
//! let index = AlignmentIndex::new(["0-0", "1-0", "2-2"], 3, 3)?;
//! let groups = index.groups(Side::Source, false)?;
//!
//! // {0,1}-{0}, {2}-{2}, then the unlinked target 1
//! assert_eq!(groups.len(), 3);
//! assert!(groups[2].source.is_empty());
//! # Ok::<(), alignment_groups::AlignError>(())
//! ```
//!
//! ## Guarantees
//!
//! - Every call returns a complete partition of both sides, no index repeated
//! - Clusters appear in ascending order of their seed, leftover singletons last
//! - Groups are owned values; the index is never modified after construction

mod closure;
mod error;
mod group;
mod index;
mod link;
mod partition;


pub use error::{AlignError, Result};
pub use group::{Group, GroupOptions, Side};
pub use index::AlignmentIndex;
pub use link::Link;
