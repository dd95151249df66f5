//! Cycle detection over an [`AdjacencyList`].
//!
//! Directed graphs are checked for a back-edge to a vertex on the active
//! depth-first path. Undirected graphs are checked for an edge to an
//! already-visited vertex other than the immediate parent.
//!
//! Both traversals use an explicit frame stack, so deep graphs cannot
//! exhaust the call stack. Visitation state is allocated per call.

use std::ops::Range;

use super::adjacency::{vertex_state, AdjacencyList, DfsFrame};
use super::error::GraphResult;

/// Selects which vertices the cycle detector uses as traversal roots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CycleScan {
    /// Every vertex not yet visited becomes a root, in ascending order.
    /// Finds a cycle anywhere in the graph, including components that
    /// are unreachable from vertex 0.
    #[default]
    AllRoots,
    /// Traversal starts at vertex 0 only. Cycles in components not
    /// reachable from vertex 0 go unreported.
    FromOrigin,
}

impl CycleScan {
    fn roots(self, node_count: usize) -> Range<usize> {
        match self {
            Self::AllRoots => 0..node_count,
            Self::FromOrigin => 0..node_count.min(1),
        }
    }
}

impl std::fmt::Display for CycleScan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AllRoots => write!(f, "all-roots"),
            Self::FromOrigin => write!(f, "from-origin"),
        }
    }
}

/// Returns true if the graph contains a cycle, dispatching on `directed`.
///
/// Fails only if visitation state for `node_count` vertices cannot be
/// allocated.
///
/// # Panics
///
/// Panics if `adj` mentions a vertex outside `0..node_count`.
///
/// # Example
///
/// ```rust
/// use graphcheck::graph::{cycle, AdjacencyList, CycleScan};
///
/// let adj = AdjacencyList::from_edges(&[(0, 1), (1, 2), (2, 0)], true);
/// assert!(cycle::has_cycle(&adj, 3, true, CycleScan::AllRoots).unwrap());
/// ```
pub fn has_cycle(
    adj: &AdjacencyList,
    node_count: usize,
    directed: bool,
    scan: CycleScan,
) -> GraphResult<bool> {
    if directed {
        has_directed_cycle(adj, node_count, scan)
    } else {
        has_undirected_cycle(adj, node_count, scan)
    }
}

/// Detects a back-edge to a vertex currently on the traversal path.
///
/// Returns as soon as the first back-edge is found.
pub fn has_directed_cycle(adj: &AdjacencyList, node_count: usize, scan: CycleScan) -> GraphResult<bool> {
    let mut visited = vertex_state(node_count, false)?;
    let mut in_path = vertex_state(node_count, false)?;
    let mut stack: Vec<DfsFrame> = Vec::new();

    for root in scan.roots(node_count) {
        if visited[root] {
            continue;
        }
        visited[root] = true;
        in_path[root] = true;
        stack.push(DfsFrame::new(root));

        while let Some(frame) = stack.last_mut() {
            let vertex = frame.vertex;
            match frame.advance(adj) {
                Some(next) if in_path[next] => return Ok(true),
                Some(next) => {
                    if !visited[next] {
                        visited[next] = true;
                        in_path[next] = true;
                        stack.push(DfsFrame::new(next));
                    }
                }
                None => {
                    in_path[vertex] = false;
                    stack.pop();
                }
            }
        }
    }

    Ok(false)
}

/// Detects an edge to an already-visited vertex that is not the parent
/// of the vertex being expanded.
///
/// Roots have no parent. Two parallel edges between the same pair of
/// vertices are not reported; a self-loop is.
pub fn has_undirected_cycle(adj: &AdjacencyList, node_count: usize, scan: CycleScan) -> GraphResult<bool> {
    let mut visited = vertex_state(node_count, false)?;
    let mut parent: Vec<Option<usize>> = vertex_state(node_count, None)?;
    let mut stack: Vec<DfsFrame> = Vec::new();

    for root in scan.roots(node_count) {
        if visited[root] {
            continue;
        }
        visited[root] = true;
        stack.push(DfsFrame::new(root));

        while let Some(frame) = stack.last_mut() {
            let vertex = frame.vertex;
            match frame.advance(adj) {
                Some(next) if visited[next] => {
                    if parent[vertex] != Some(next) {
                        return Ok(true);
                    }
                }
                Some(next) => {
                    visited[next] = true;
                    parent[next] = Some(vertex);
                    stack.push(DfsFrame::new(next));
                }
                None => {
                    stack.pop();
                }
            }
        }
    }

    Ok(false)
}
