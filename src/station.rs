use std::{collections::BTreeSet, fmt};

/// Dense identifier of a station within one [`MetroGraph`](crate::MetroGraph).
/// Identifiers are assigned in insertion order starting from zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationId(pub(crate) usize);

impl StationId {
    /// Returns the zero-based insertion index of the station.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Logical map coordinates of a station.  Coordinates are nominally in
/// `0..=100` and only matter to whoever draws the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Position { x, y }
    }
}

/// A stop in the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Station {
    name: String,
    lines: BTreeSet<String>,
    position: Position,
    neighbors: Vec<StationId>,
}

impl Station {
    pub(crate) fn new(name: String, position: Position) -> Self {
        Station {
            name,
            lines: BTreeSet::new(),
            position,
            neighbors: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the lines serving this station, sorted by name.
    pub fn lines(&self) -> impl Iterator<Item = &str> + '_ {
        self.lines.iter().map(String::as_str)
    }

    pub fn is_on_line(&self, line: &str) -> bool {
        self.lines.contains(line)
    }

    /// Returns true if more than one line serves this station.
    pub fn is_interchange(&self) -> bool {
        self.lines.len() > 1
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns the neighboring stations in the order their edges were
    /// added.  A neighbor appears once per parallel edge.
    pub fn neighbors(&self) -> &[StationId] {
        &self.neighbors
    }

    pub(crate) fn add_line(&mut self, line: &str) -> bool {
        if self.lines.contains(line) {
            false
        } else {
            self.lines.insert(line.to_string())
        }
    }

    pub(crate) fn push_neighbor(&mut self, neighbor: StationId) {
        self.neighbors.push(neighbor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_are_sorted_and_deduplicated() {
        let mut station = Station::new("Rajiv Chowk".to_string(), Position::new(30, 20));
        assert!(station.add_line("Yellow"));
        assert!(station.add_line("Blue"));
        assert!(!station.add_line("Blue"));
        assert_eq!(station.lines().collect::<Vec<_>>(), vec!["Blue", "Yellow"]);
        assert!(station.is_interchange());
        assert!(station.is_on_line("Yellow"));
        assert!(!station.is_on_line("Red"));
    }

    #[test]
    fn test_neighbors_keep_insertion_order() {
        let mut station = Station::new("A".to_string(), Position::default());
        station.push_neighbor(StationId(2));
        station.push_neighbor(StationId(1));
        station.push_neighbor(StationId(2));
        assert_eq!(
            station.neighbors(),
            &[StationId(2), StationId(1), StationId(2)]
        );
    }
}
