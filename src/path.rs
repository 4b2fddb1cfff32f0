use std::fmt;

use crate::{MetroGraph, station::StationId};

/// Total length of a route: the sum of its edge distances, or `Infinite`
/// when the destination cannot be reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Distance {
    Finite(u64),
    Infinite,
}

impl Distance {
    pub fn is_finite(self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    /// Returns the distance as a number, or `None` if it is infinite.
    pub fn finite(self) -> Option<u64> {
        match self {
            Distance::Finite(d) => Some(d),
            Distance::Infinite => None,
        }
    }
}

impl From<Option<u64>> for Distance {
    fn from(value: Option<u64>) -> Self {
        value.map_or(Distance::Infinite, Distance::Finite)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(d) => write!(f, "{d}"),
            Distance::Infinite => f.write_str("∞"),
        }
    }
}

/// The outcome of a Dijkstra run: the stations from source to destination
/// and the total distance.
///
/// When the destination is unreachable the path holds only the destination
/// and the distance is [`Distance::Infinite`]; callers should check
/// [`Distance::is_finite`] before presenting it as a route.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShortestPath<N = StationId> {
    stations: Vec<N>,
    distance: Distance,
}

impl<N: Copy> ShortestPath<N> {
    pub(crate) fn new(stations: Vec<N>, distance: Distance) -> Self {
        debug_assert!(!stations.is_empty());
        Self { stations, distance }
    }

    /// Returns the stations along the path, source first.
    pub fn stations(&self) -> &[N] {
        &self.stations
    }

    pub fn distance(&self) -> Distance {
        self.distance
    }

    pub fn is_reachable(&self) -> bool {
        self.distance.is_finite()
    }

    /// Returns the number of edges along the path.
    pub fn hops(&self) -> usize {
        self.stations.len() - 1
    }

    pub fn first_station(&self) -> N {
        self.stations[0]
    }

    pub fn last_station(&self) -> N {
        self.stations[self.stations.len() - 1]
    }
}

impl ShortestPath<StationId> {
    /// Returns the station names along the path.
    pub fn names<'g>(&self, graph: &'g MetroGraph) -> Vec<&'g str> {
        self.stations
            .iter()
            .map(|&sid| graph.station(sid).name())
            .collect()
    }

    /// Renders the route as two lines of text:
    ///
    /// ```text
    /// Shortest Path: Rajiv Chowk → Barakhamba → Mandi House
    /// Total Distance: 2 km
    /// ```
    pub fn describe(&self, graph: &MetroGraph) -> String {
        format!(
            "Shortest Path: {}\nTotal Distance: {} km",
            self.names(graph).join(" → "),
            self.distance
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finite_orders_before_infinite() {
        assert!(Distance::Finite(u64::MAX) < Distance::Infinite);
        assert!(Distance::Finite(2) < Distance::Finite(3));
    }

    #[test]
    fn test_distance_display() {
        assert_eq!(Distance::Finite(12).to_string(), "12");
        assert_eq!(Distance::Infinite.to_string(), "∞");
    }

    #[test]
    fn test_distance_from_option() {
        assert_eq!(Distance::from(Some(4)), Distance::Finite(4));
        assert_eq!(Distance::from(None), Distance::Infinite);
        assert_eq!(Distance::Infinite.finite(), None);
    }

    #[test]
    fn test_single_station_path() {
        let path = ShortestPath::new(vec![StationId(7)], Distance::Finite(0));
        assert_eq!(path.hops(), 0);
        assert_eq!(path.first_station(), StationId(7));
        assert_eq!(path.last_station(), StationId(7));
        assert!(path.is_reachable());
    }
}
