//! Cheapest-route search (Dijkstra towards a single target).

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};

use tracing::{debug, trace};

use crate::domain::GateCode;

use super::build::GateGraph;

/// Result of a cheapest-route search.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteResult {
    /// Gates from start to end inclusive. Empty when unreachable.
    pub path: Vec<GateCode>,

    /// Sum of traversed connection weights. Positive infinity when unreachable.
    pub cost: f64,

    /// Number of gates finalized during the search.
    pub gates_explored: usize,
}

impl RouteResult {
    /// The "no route" result.
    pub fn unreachable(gates_explored: usize) -> Self {
        Self {
            path: Vec::new(),
            cost: f64::INFINITY,
            gates_explored,
        }
    }

    /// Whether a route was found.
    pub fn is_reachable(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of gate-to-gate hops on the route.
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// A frontier entry.
#[derive(Debug)]
struct Candidate {
    cost: f64,
    gate: GateCode,
    path: Vec<GateCode>,
}

impl Ord for Candidate {
    /// Cheapest first, then lowest gate code, then lowest path.
    ///
    /// Reversed because `BinaryHeap` pops the greatest element.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.gate.cmp(&self.gate))
            .then_with(|| other.path.cmp(&self.path))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

/// Find the cheapest route from `start` to `end`.
///
/// Weights are non-negative (enforced by [`GateGraph::build`]), so the first
/// time `end` leaves the frontier its path is optimal. Gates without a record
/// in the graph are unreachable, including when `start == end`.
pub fn find_cheapest_route(graph: &GateGraph, start: &GateCode, end: &GateCode) -> RouteResult {
    if !graph.contains(start) || !graph.contains(end) {
        debug!(%start, %end, "start or end gate not in graph");
        return RouteResult::unreachable(0);
    }

    let mut frontier = BinaryHeap::new();
    let mut finalized: HashSet<GateCode> = HashSet::with_capacity(graph.len());

    frontier.push(Candidate {
        cost: 0.0,
        gate: start.clone(),
        path: vec![start.clone()],
    });

    while let Some(Candidate { cost, gate, path }) = frontier.pop() {
        if &gate == end {
            debug!(
                %start,
                %end,
                cost,
                hops = path.len() - 1,
                explored = finalized.len(),
                "route found"
            );
            return RouteResult {
                path,
                cost,
                gates_explored: finalized.len(),
            };
        }

        if !finalized.insert(gate.clone()) {
            continue;
        }
        trace!(%gate, cost, "finalized");

        for connection in graph.neighbors(&gate) {
            if finalized.contains(&connection.target) {
                continue;
            }
            let mut next_path = Vec::with_capacity(path.len() + 1);
            next_path.extend_from_slice(&path);
            next_path.push(connection.target.clone());
            frontier.push(Candidate {
                cost: cost + connection.weight,
                gate: connection.target.clone(),
                path: next_path,
            });
        }
    }

    debug!(%start, %end, explored = finalized.len(), "no route");
    RouteResult::unreachable(finalized.len())
}
