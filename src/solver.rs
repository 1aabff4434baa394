//! Single-source shortest path over the implicit break-point graph.
//!
//! Nodes are dense integers `start..=end` (positions between photos), so the
//! distance, visited, and predecessor maps are plain arena vectors indexed by
//! node id. Edges are produced on demand by a caller-supplied closure — the
//! graph is never materialized in full.
//!
//! The priority queue is a lazy-deletion min-heap: relaxing a node pushes a
//! fresh entry instead of decreasing a key, and stale entries are skipped on
//! pop once their node has been finalized.

use alloc::collections::BinaryHeap;
use alloc::vec;
use alloc::vec::Vec;

use crate::photo::LayoutError;

/// Heap entry ordered as a min-heap on tentative path cost.
#[derive(Copy, Clone, Debug)]
struct QueueEntry {
    cost: f64,
    node: usize,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost && self.node == other.node
    }
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        // Reversed for min-heap behavior: lower cost = higher priority.
        // Ties prefer the lower node id for deterministic pop order.
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

/// Find the minimum-cost node sequence from `start` to `end`.
///
/// `neighbors` receives a node id and appends `(target, edge_cost)` pairs to
/// the scratch buffer; every target must satisfy `node < target <= end`.
/// Returns the full path including both endpoints.
///
/// Fails with [`LayoutError::NoRoute`] if `end` was never reached. With
/// edges that always advance toward `end` this is impossible for `end >
/// start`; the check is defensive.
pub(crate) fn shortest_path<G>(
    mut neighbors: G,
    start: usize,
    end: usize,
) -> Result<Vec<usize>, LayoutError>
where
    G: FnMut(usize, &mut Vec<(usize, f64)>),
{
    debug_assert!(start <= end);

    let mut dist = vec![f64::INFINITY; end + 1];
    let mut visited = vec![false; end + 1];
    let mut prev = vec![usize::MAX; end + 1];
    let mut heap = BinaryHeap::new();
    let mut edges: Vec<(usize, f64)> = Vec::new();

    dist[start] = 0.0;
    heap.push(QueueEntry {
        cost: 0.0,
        node: start,
    });

    while let Some(QueueEntry { cost, node }) = heap.pop() {
        if visited[node] {
            // Stale duplicate from lazy deletion.
            continue;
        }
        visited[node] = true;
        if node == end {
            break;
        }

        edges.clear();
        neighbors(node, &mut edges);
        for &(next, weight) in &edges {
            debug_assert!(node < next && next <= end);
            if visited[next] {
                continue;
            }
            let total = cost + weight;
            if total < dist[next] {
                dist[next] = total;
                prev[next] = node;
                heap.push(QueueEntry {
                    cost: total,
                    node: next,
                });
            }
        }
    }

    if start != end && prev[end] == usize::MAX {
        return Err(LayoutError::NoRoute { start, end });
    }

    let mut path = Vec::new();
    let mut node = end;
    path.push(node);
    while node != start {
        node = prev[node];
        path.push(node);
    }
    path.reverse();
    Ok(path)
}
