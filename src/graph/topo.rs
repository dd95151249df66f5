//! Depth-first topological ordering.

use super::adjacency::{vertex_state, AdjacencyList, DfsFrame, Edge};
use super::error::{GraphError, GraphResult};

/// Returns a topological ordering of the vertices `0..node_count`.
///
/// Every vertex is tried as a root in ascending order. Each vertex is
/// emitted after all vertices reachable from it, and the emission order
/// is reversed at the end. Ties follow adjacency insertion order rather
/// than any canonical rule, so the result is one of possibly many valid
/// orderings.
///
/// The sorter does not detect cycles: on cyclic input it still returns a
/// permutation, which will not satisfy the ordering property. Check
/// acyclicity with [`super::cycle::has_directed_cycle`] first when that
/// matters.
///
/// Fails only if traversal state for `node_count` vertices cannot be
/// allocated.
///
/// # Panics
///
/// Panics if `adj` mentions a vertex outside `0..node_count`.
///
/// # Example
///
/// ```rust
/// use graphcheck::graph::{topo, AdjacencyList};
///
/// let adj = AdjacencyList::from_edges(&[(0, 1), (2, 0)], true);
/// assert_eq!(topo::topological_sort(&adj, 3).unwrap(), vec![2, 0, 1]);
/// ```
pub fn topological_sort(adj: &AdjacencyList, node_count: usize) -> GraphResult<Vec<usize>> {
    let mut visited = vertex_state(node_count, false)?;
    let mut finished: Vec<usize> = Vec::new();
    finished.try_reserve_exact(node_count).map_err(|e| {
        GraphError::invalid(format!("cannot allocate an ordering of {} vertices: {}", node_count, e))
    })?;
    let mut stack: Vec<DfsFrame> = Vec::new();

    for root in 0..node_count {
        if visited[root] {
            continue;
        }
        visited[root] = true;
        stack.push(DfsFrame::new(root));

        while let Some(frame) = stack.last_mut() {
            let vertex = frame.vertex;
            match frame.advance(adj) {
                Some(next) => {
                    if !visited[next] {
                        visited[next] = true;
                        stack.push(DfsFrame::new(next));
                    }
                }
                None => {
                    finished.push(vertex);
                    stack.pop();
                }
            }
        }
    }

    finished.reverse();
    Ok(finished)
}

/// Checks that `order` lists each vertex of `0..node_count` exactly once
/// and that every edge's source appears strictly before its destination.
///
/// # Example
///
/// ```rust
/// use graphcheck::graph::topo::is_topological_order;
///
/// let edges = [(0, 1), (2, 0)];
/// assert!(is_topological_order(&[2, 0, 1], 3, &edges));
/// assert!(!is_topological_order(&[0, 1, 2], 3, &edges));
/// ```
pub fn is_topological_order(order: &[usize], node_count: usize, edges: &[Edge]) -> bool {
    if order.len() != node_count {
        return false;
    }

    let mut position: Vec<Option<usize>> = vec![None; node_count];
    for (index, &vertex) in order.iter().enumerate() {
        match position.get_mut(vertex) {
            Some(slot) if slot.is_none() => *slot = Some(index),
            _ => return false,
        }
    }

    edges.iter().all(|&(src, dest)| {
        matches!(
            (position.get(src).copied().flatten(), position.get(dest).copied().flatten()),
            (Some(s), Some(d)) if s < d
        )
    })
}
