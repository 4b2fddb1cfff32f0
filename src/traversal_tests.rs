#![cfg(test)]

use std::collections::HashSet;

use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

use crate::{
    Distance, Graph, StationId,
    test_support::{
        ArbNetwork, brute_force_distance, brute_force_hops, has_duplicates, path_weight,
    },
};

#[quickcheck]
fn prop_dijkstra_matches_brute_force(network: ArbNetwork) -> bool {
    let ArbNetwork {
        graph,
        source,
        destination,
    } = network;
    let path = graph.dijkstra_from(source, destination).finish();
    path.distance() == Distance::from(brute_force_distance(&graph, source, destination))
}

#[quickcheck]
fn prop_dijkstra_path_is_consistent(network: ArbNetwork) -> TestResult {
    let ArbNetwork {
        graph,
        source,
        destination,
    } = network;
    let path = graph.dijkstra_from(source, destination).finish();
    if !path.is_reachable() {
        return TestResult::from_bool(path.stations() == [destination]);
    }
    if path.first_station() != source || path.last_station() != destination {
        return TestResult::error(format!("path has wrong ends: {:?}", path.stations()));
    }
    TestResult::from_bool(path_weight(&graph, path.stations()) == path.distance().finite())
}

#[quickcheck]
fn prop_dijkstra_finalizes_in_distance_order(network: ArbNetwork) -> bool {
    let ArbNetwork {
        graph,
        source,
        destination,
    } = network;
    let distances: Vec<_> = graph
        .dijkstra_from(source, destination)
        .map(|v| v.distance.unwrap_or(u64::MAX))
        .collect();
    distances.first() == Some(&0) && distances.windows(2).all(|w| w[0] <= w[1])
}

#[quickcheck]
fn prop_dijkstra_visits_each_station_once(network: ArbNetwork) -> bool {
    let ArbNetwork {
        graph,
        source,
        destination,
    } = network;
    let visited: Vec<_> = graph
        .dijkstra_from(source, destination)
        .map(|v| v.station)
        .collect();
    let bfs: HashSet<_> = graph.bfs_from(source).map(|v| v.station).collect();
    !has_duplicates(visited.iter()) && visited.into_iter().collect::<HashSet<_>>() == bfs
}

#[quickcheck]
fn prop_bfs_visits_in_hop_order(network: ArbNetwork) -> bool {
    let ArbNetwork { graph, source, .. } = network;
    let visits: Vec<_> = graph.bfs_from(source).collect();
    let hops: Vec<_> = visits
        .iter()
        .map(|v| brute_force_hops(&graph, source, v.station))
        .collect();
    !has_duplicates(visits.iter().map(|v| v.station))
        && visits.iter().enumerate().all(|(i, v)| v.step == i)
        && hops.iter().all(Option::is_some)
        && hops.windows(2).all(|w| w[0] <= w[1])
}

#[quickcheck]
fn prop_dfs_visits_each_reachable_station_once(network: ArbNetwork) -> bool {
    let ArbNetwork { graph, source, .. } = network;
    let dfs: Vec<StationId> = graph.dfs_from(source).map(|v| v.station).collect();
    let bfs: HashSet<StationId> = graph.bfs_from(source).map(|v| v.station).collect();
    !has_duplicates(dfs.iter()) && dfs.into_iter().collect::<HashSet<_>>() == bfs
}

#[quickcheck]
fn prop_dfs_enters_only_neighbors_of_the_current_path(network: ArbNetwork) -> bool {
    // Each visited station after the first must be adjacent to some station
    // visited before it.
    let ArbNetwork { graph, source, .. } = network;
    let mut seen = HashSet::new();
    graph.dfs_from(source).all(|visit| {
        let ok = seen.is_empty() || graph.neighbors(visit.station).any(|n| seen.contains(&n));
        seen.insert(visit.station);
        ok
    })
}

#[quickcheck]
fn prop_runs_are_repeatable(network: ArbNetwork) -> bool {
    let ArbNetwork {
        graph,
        source,
        destination,
    } = network;
    let bfs = || graph.bfs_from(source).collect::<Vec<_>>();
    let dfs = || graph.dfs_from(source).collect::<Vec<_>>();
    let dijkstra = || {
        let mut run = graph.dijkstra_from(source, destination);
        let visits: Vec<_> = run.by_ref().collect();
        (visits, run.finish())
    };
    bfs() == bfs() && dfs() == dfs() && dijkstra() == dijkstra()
}

#[quickcheck]
fn prop_source_to_itself_is_zero(network: ArbNetwork) -> bool {
    let ArbNetwork { graph, source, .. } = network;
    let path = graph.dijkstra_from(source, source).finish();
    path.stations() == [source] && path.distance() == Distance::Finite(0)
}

#[cfg(feature = "pathfinding")]
#[quickcheck]
fn prop_dijkstra_agrees_with_pathfinding(network: ArbNetwork) -> bool {
    let ArbNetwork {
        graph,
        source,
        destination,
    } = network;
    let expected = pathfinding::prelude::dijkstra(
        &source,
        |n| {
            graph
                .neighbors(*n)
                .map(|m| (m, u64::from(graph.weight(*n, m))))
                .collect::<Vec<_>>()
        },
        |n| *n == destination,
    )
    .map(|(_, cost)| cost);
    graph.dijkstra_from(source, destination).finish().distance() == Distance::from(expected)
}

#[cfg(feature = "pathfinding")]
#[quickcheck]
fn prop_reachable_matches_bfs(network: ArbNetwork) -> bool {
    let ArbNetwork { graph, source, .. } = network;
    let reachable: HashSet<_> = graph.reachable_from(source).into_iter().collect();
    let bfs: HashSet<_> = graph.bfs_from(source).map(|v| v.station).collect();
    let component = graph
        .connected_components()
        .into_iter()
        .find(|c| c.contains(&source));
    reachable == bfs && component == Some(bfs)
}
