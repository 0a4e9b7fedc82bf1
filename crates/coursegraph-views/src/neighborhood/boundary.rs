//! Boundary classification by set arithmetic.
//!
//! A course that is both a source into the subset and a target out of it
//! belongs to `incoming_outgoing` only; the three buckets are disjoint and
//! together hold every boundary course.

use coursegraph_core::types::{FxHashSet, Relation};

/// Boundary course positions per relation, each list ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Boundary {
    pub incoming: Vec<usize>,
    pub outgoing: Vec<usize>,
    pub incoming_outgoing: Vec<usize>,
}

impl Boundary {
    /// `incoming`: sources of links entering the subset.
    /// `outgoing`: targets of links leaving it.
    pub fn classify(incoming: &FxHashSet<usize>, outgoing: &FxHashSet<usize>) -> Self {
        let both: FxHashSet<usize> = incoming.intersection(outgoing).copied().collect();

        let mut boundary = Self {
            incoming: incoming.difference(&both).copied().collect(),
            outgoing: outgoing.difference(&both).copied().collect(),
            incoming_outgoing: both.into_iter().collect(),
        };
        boundary.incoming.sort_unstable();
        boundary.outgoing.sort_unstable();
        boundary.incoming_outgoing.sort_unstable();
        boundary
    }

    /// All boundary positions with their relation, ascending by position.
    pub fn tagged(&self) -> Vec<(usize, Relation)> {
        let mut all: Vec<(usize, Relation)> = self
            .incoming
            .iter()
            .map(|&pos| (pos, Relation::Incoming))
            .chain(self.outgoing.iter().map(|&pos| (pos, Relation::Outgoing)))
            .chain(
                self.incoming_outgoing
                    .iter()
                    .map(|&pos| (pos, Relation::IncomingOutgoing)),
            )
            .collect();
        all.sort_unstable_by_key(|&(pos, _)| pos);
        all
    }

    pub fn len(&self) -> usize {
        self.incoming.len() + self.outgoing.len() + self.incoming_outgoing.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[usize]) -> FxHashSet<usize> {
        items.iter().copied().collect()
    }

    #[test]
    fn overlap_moves_to_both_bucket() {
        let boundary = Boundary::classify(&set(&[5, 1, 3]), &set(&[3, 7]));
        assert_eq!(boundary.incoming, vec![1, 5]);
        assert_eq!(boundary.outgoing, vec![7]);
        assert_eq!(boundary.incoming_outgoing, vec![3]);
        assert_eq!(boundary.len(), 4);
    }

    #[test]
    fn tagged_is_sorted_by_position() {
        let boundary = Boundary::classify(&set(&[4]), &set(&[2, 4, 0]));
        assert_eq!(
            boundary.tagged(),
            vec![
                (0, Relation::Outgoing),
                (2, Relation::Outgoing),
                (4, Relation::IncomingOutgoing),
            ]
        );
    }

    #[test]
    fn empty_sets_give_empty_boundary() {
        assert!(Boundary::classify(&set(&[]), &set(&[])).is_empty());
    }
}
