#[cfg(feature = "bitvec")]
use bitvec::vec::BitVec;

/// A fixed-size set of node indices, sized once per traversal run.
#[derive(Debug, Clone)]
pub(crate) struct VisitedSet {
    #[cfg(feature = "bitvec")]
    bits: BitVec,
    #[cfg(not(feature = "bitvec"))]
    bits: Vec<bool>,
    len: usize,
}

impl VisitedSet {
    pub fn new(size: usize) -> Self {
        Self {
            #[cfg(feature = "bitvec")]
            bits: BitVec::repeat(false, size),
            #[cfg(not(feature = "bitvec"))]
            bits: vec![false; size],
            len: 0,
        }
    }

    pub fn contains(&self, index: usize) -> bool {
        self.bits.get(index).is_some_and(|bit| *bit)
    }

    /// Marks `index` as visited, returning true if it was not already.
    /// Panics if `index` is out of range.
    pub fn insert(&mut self, index: usize) -> bool {
        if self.contains(index) {
            return false;
        }
        #[cfg(feature = "bitvec")]
        self.bits.set(index, true);
        #[cfg(not(feature = "bitvec"))]
        {
            self.bits[index] = true;
        }
        self.len += 1;
        true
    }

    pub fn len(&self) -> usize {
        self.len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_contains() {
        let mut visited = VisitedSet::new(4);
        assert!(!visited.contains(2));
        assert!(visited.insert(2));
        assert!(!visited.insert(2));
        assert!(visited.contains(2));
        assert!(!visited.contains(3));
        assert_eq!(visited.len(), 1);
    }

    #[test]
    fn test_out_of_range_is_not_contained() {
        let visited = VisitedSet::new(1);
        assert!(!visited.contains(5));
    }
}
