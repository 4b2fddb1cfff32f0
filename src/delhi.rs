//! The Delhi Metro network used by the route finder: part of the Blue,
//! Yellow and Red lines with logical map coordinates and inter-station
//! distances in kilometres.

use crate::{MetroGraph, error::Result};

/// Station table: name, logical x, logical y, line.  The first entry for a
/// name fixes its position.
pub const STATIONS: &[(&str, i32, i32, &str)] = &[
    ("Rajiv Chowk", 30, 20, "Blue"),
    ("Barakhamba", 34, 24, "Blue"),
    ("Mandi House", 38, 28, "Blue"),
    ("Pragati Maidan", 42, 32, "Blue"),
    ("Indraprastha", 46, 36, "Blue"),
    ("Yamuna Bank", 50, 40, "Blue"),
    ("Akshardham", 54, 38, "Blue"),
    ("Mayur Vihar", 58, 36, "Blue"),
    ("Mayur Vihar Ext", 62, 34, "Blue"),
    ("Noida Sector 15", 66, 32, "Blue"),
    ("RK Ashram Marg", 26, 18, "Blue"),
    ("Karol Bagh", 22, 16, "Blue"),
    ("Rajendra Place", 18, 14, "Blue"),
    ("Patel Nagar", 16, 12, "Blue"),
    ("Shadipur", 14, 10, "Blue"),
    ("Kirti Nagar", 12, 8, "Blue"),
    ("Moti Nagar", 10, 6, "Blue"),
    ("Ramesh Nagar", 8, 4, "Blue"),
    ("Patel Chowk", 26, 15, "Yellow"),
    ("Central Secretariat", 22, 20, "Yellow"),
    ("Udyog Bhawan", 20, 23, "Yellow"),
    ("Race Course", 18, 26, "Yellow"),
    ("Jor Bagh", 16, 29, "Yellow"),
    ("INA", 14, 32, "Yellow"),
    ("AIIMS", 12, 34, "Yellow"),
    ("Green Park", 10, 36, "Yellow"),
    ("Hauz Khas", 8, 38, "Yellow"),
    ("Malviya Nagar", 6, 40, "Yellow"),
    ("New Delhi", 34, 16, "Yellow"),
    ("Chawri Bazar", 37, 14, "Yellow"),
    ("Chandni Chowk", 40, 12, "Yellow"),
    ("Kashmere Gate", 44, 10, "Yellow"),
    ("Civil Lines", 46, 8, "Yellow"),
    ("Vidhan Sabha", 48, 6, "Yellow"),
    ("Vishwavidyalaya", 50, 4, "Yellow"),
    ("GTB Nagar", 52, 2, "Yellow"),
    ("Model Town", 54, 0, "Yellow"),
    ("Pulbangash", 40, 14, "Red"),
    ("Pratap Nagar", 38, 16, "Red"),
    ("Shastri Nagar", 36, 18, "Red"),
    ("Tis Hazari", 42, 12, "Red"),
    ("Shastri Park", 46, 14, "Red"),
    ("Seelampur", 50, 16, "Red"),
    ("Welcome", 54, 18, "Red"),
    ("Shahdara", 58, 20, "Red"),
    ("Mansarovar Park", 62, 22, "Red"),
    ("Jhilmil", 66, 24, "Red"),
    ("Dilshad Garden", 70, 26, "Red"),
];

/// Edge table: from, to, distance in kilometres.
pub const EDGES: &[(&str, &str, u32)] = &[
    ("Rajiv Chowk", "Barakhamba", 1),
    ("Barakhamba", "Mandi House", 1),
    ("Mandi House", "Pragati Maidan", 2),
    ("Pragati Maidan", "Indraprastha", 2),
    ("Indraprastha", "Yamuna Bank", 2),
    ("Yamuna Bank", "Akshardham", 2),
    ("Akshardham", "Mayur Vihar", 2),
    ("Mayur Vihar", "Mayur Vihar Ext", 2),
    ("Mayur Vihar Ext", "Noida Sector 15", 3),
    ("Rajiv Chowk", "RK Ashram Marg", 1),
    ("RK Ashram Marg", "Karol Bagh", 2),
    ("Karol Bagh", "Rajendra Place", 2),
    ("Rajendra Place", "Patel Nagar", 2),
    ("Patel Nagar", "Shadipur", 2),
    ("Shadipur", "Kirti Nagar", 2),
    ("Kirti Nagar", "Moti Nagar", 2),
    ("Moti Nagar", "Ramesh Nagar", 2),
    ("Rajiv Chowk", "Patel Chowk", 1),
    ("Patel Chowk", "Central Secretariat", 2),
    ("Central Secretariat", "Udyog Bhawan", 2),
    ("Udyog Bhawan", "Race Course", 2),
    ("Race Course", "Jor Bagh", 2),
    ("Jor Bagh", "INA", 2),
    ("INA", "AIIMS", 2),
    ("AIIMS", "Green Park", 2),
    ("Green Park", "Hauz Khas", 2),
    ("Hauz Khas", "Malviya Nagar", 2),
    ("Rajiv Chowk", "New Delhi", 5),
    ("New Delhi", "Chawri Bazar", 1),
    ("Chawri Bazar", "Chandni Chowk", 1),
    ("Chandni Chowk", "Kashmere Gate", 1),
    ("Kashmere Gate", "Civil Lines", 2),
    ("Civil Lines", "Vidhan Sabha", 2),
    ("Vidhan Sabha", "Vishwavidyalaya", 2),
    ("Vishwavidyalaya", "GTB Nagar", 2),
    ("GTB Nagar", "Model Town", 2),
    ("Kashmere Gate", "Pulbangash", 2),
    ("Pulbangash", "Pratap Nagar", 2),
    ("Pratap Nagar", "Shastri Nagar", 2),
    ("Kashmere Gate", "Tis Hazari", 2),
    ("Tis Hazari", "Shastri Park", 2),
    ("Shastri Park", "Seelampur", 2),
    ("Seelampur", "Welcome", 2),
    ("Welcome", "Shahdara", 2),
    ("Shahdara", "Mansarovar Park", 2),
    ("Mansarovar Park", "Jhilmil", 2),
    ("Jhilmil", "Dilshad Garden", 2),
];

/// Builds the network from [`STATIONS`] and [`EDGES`], in table order.
pub fn delhi_metro() -> Result<MetroGraph> {
    let mut graph = MetroGraph::new();
    for &(name, x, y, line) in STATIONS {
        graph.add_station(name, (x, y), line);
    }
    for &(from, to, distance) in EDGES {
        graph.add_edge(from, to, distance)?;
    }
    Ok(graph)
}
