//! The set of courses belonging to one hierarchy node.

use coursegraph_core::types::FxHashSet;

use crate::index::CourseIndex;

/// Course positions in caller order, without repeats.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Subset {
    members: Vec<usize>,
    lookup: FxHashSet<usize>,
}

impl Subset {
    /// Keeps the first occurrence of every position.
    pub fn from_positions(positions: impl IntoIterator<Item = usize>) -> Self {
        let mut subset = Self::default();
        for pos in positions {
            subset.push(pos);
        }
        subset
    }

    /// Resolve identifiers against the index. Returns the first unknown
    /// identifier as the error.
    pub fn from_slugs<'a>(
        slugs: impl IntoIterator<Item = &'a str>,
        courses: &CourseIndex,
    ) -> Result<Self, String> {
        let mut subset = Self::default();
        for slug in slugs {
            let pos = courses.position(slug).ok_or_else(|| slug.to_string())?;
            subset.push(pos);
        }
        Ok(subset)
    }

    /// Every course of the catalog, in index order.
    pub fn all(courses: &CourseIndex) -> Self {
        Self::from_positions(0..courses.len())
    }

    /// Union in argument order.
    pub fn union<'a>(parts: impl IntoIterator<Item = &'a Subset>) -> Self {
        Self::from_positions(parts.into_iter().flat_map(|s| s.members.iter().copied()))
    }

    fn push(&mut self, pos: usize) {
        if self.lookup.insert(pos) {
            self.members.push(pos);
        }
    }

    pub fn contains(&self, pos: usize) -> bool {
        self.lookup.contains(&pos)
    }

    pub fn members(&self) -> &[usize] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedups_keeping_first_occurrence() {
        let subset = Subset::from_positions([3, 1, 3, 2, 1]);
        assert_eq!(subset.members(), &[3, 1, 2]);
        assert!(subset.contains(2));
        assert!(!subset.contains(0));
    }

    #[test]
    fn union_preserves_argument_order() {
        let a = Subset::from_positions([4, 2]);
        let b = Subset::from_positions([2, 0]);
        assert_eq!(Subset::union([&a, &b]).members(), &[4, 2, 0]);
        assert!(Subset::union(std::iter::empty()).is_empty());
    }
}
