use crate::station::StationId;

/// An undirected, weighted connection between two stations.  The `from` and
/// `to` ends are kept as given; the edge is usable in both directions with
/// the same distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    from: StationId,
    to: StationId,
    distance: u32,
}

impl Edge {
    pub(crate) fn new(from: StationId, to: StationId, distance: u32) -> Self {
        Edge { from, to, distance }
    }

    pub fn from(&self) -> StationId {
        self.from
    }

    pub fn to(&self) -> StationId {
        self.to
    }

    pub fn ends(&self) -> (StationId, StationId) {
        (self.from, self.to)
    }

    pub fn distance(&self) -> u32 {
        self.distance
    }

    /// Returns true if this edge joins `a` and `b`, in either orientation.
    pub fn connects(&self, a: StationId, b: StationId) -> bool {
        (self.from == a && self.to == b) || (self.from == b && self.to == a)
    }

    /// Given one end of the edge, returns the other.  Returns `None` if
    /// `station` is not an end of this edge.
    pub fn other_end(&self, station: StationId) -> Option<StationId> {
        if self.from == station {
            Some(self.to)
        } else if self.to == station {
            Some(self.from)
        } else {
            None
        }
    }
}
