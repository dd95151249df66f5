//! Adjacency list construction from an edge list.

use std::collections::HashMap;

use super::error::{GraphError, GraphResult};

/// An edge from `source` to `destination`, both vertex indices.
pub type Edge = (usize, usize);

/// Maps each vertex to the ordered sequence of its adjacent vertices.
///
/// Neighbor order follows edge insertion order, which determines the
/// traversal order of the cycle detector and the topological sorter.
/// Looking up a vertex with no entries yields an empty slice.
///
/// # Example
///
/// ```rust
/// use graphcheck::graph::AdjacencyList;
///
/// let adj = AdjacencyList::from_edges(&[(0, 1), (0, 2), (2, 1)], true);
/// assert_eq!(adj.neighbors(0), &[1, 2]);
/// assert_eq!(adj.neighbors(2), &[1]);
/// assert!(adj.neighbors(1).is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyList {
    entries: HashMap<usize, Vec<usize>>,
}

impl AdjacencyList {
    /// Builds the adjacency list for `edges`.
    ///
    /// For each edge `(s, d)`, `d` is appended to `s`'s neighbors. When
    /// `directed` is false, `s` is also appended to `d`'s neighbors.
    ///
    /// # Example
    ///
    /// ```rust
    /// use graphcheck::graph::AdjacencyList;
    ///
    /// let adj = AdjacencyList::from_edges(&[(0, 1), (1, 2)], false);
    /// assert_eq!(adj.neighbors(1), &[0, 2]);
    /// ```
    pub fn from_edges(edges: &[Edge], directed: bool) -> Self {
        let mut entries: HashMap<usize, Vec<usize>> = HashMap::new();

        for &(src, dest) in edges {
            entries.entry(src).or_default().push(dest);
            if !directed {
                entries.entry(dest).or_default().push(src);
            }
        }

        Self { entries }
    }

    /// Returns the neighbors of `vertex` in insertion order.
    pub fn neighbors(&self, vertex: usize) -> &[usize] {
        self.entries.get(&vertex).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns the number of vertices with at least one adjacency entry.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no vertex has adjacency entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One level of an explicit depth-first traversal: the vertex being
/// expanded and the position of the next neighbor to examine.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DfsFrame {
    pub(crate) vertex: usize,
    next: usize,
}

impl DfsFrame {
    pub(crate) fn new(vertex: usize) -> Self {
        Self { vertex, next: 0 }
    }

    /// Returns the next unexamined neighbor and moves past it.
    pub(crate) fn advance(&mut self, adj: &AdjacencyList) -> Option<usize> {
        let next = adj.neighbors(self.vertex).get(self.next).copied();
        if next.is_some() {
            self.next += 1;
        }
        next
    }
}

/// Allocates per-vertex traversal state for `node_count` vertices.
///
/// Fails with an invalid configuration error instead of aborting when the
/// allocation cannot be satisfied.
pub(crate) fn vertex_state<T: Clone>(node_count: usize, initial: T) -> GraphResult<Vec<T>> {
    let mut state = Vec::new();
    state.try_reserve_exact(node_count).map_err(|e| {
        GraphError::invalid(format!(
            "cannot allocate traversal state for {} vertices: {}",
            node_count, e
        ))
    })?;
    state.resize(node_count, initial);
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directed_keeps_insertion_order() {
        let adj = AdjacencyList::from_edges(&[(5, 2), (5, 4), (0, 2), (0, 5)], true);
        assert_eq!(adj.neighbors(5), &[2, 4]);
        assert_eq!(adj.neighbors(0), &[2, 5]);
        assert_eq!(adj.len(), 2);
    }

    #[test]
    fn test_undirected_adds_reverse_edges() {
        let adj = AdjacencyList::from_edges(&[(0, 1), (0, 2), (1, 3), (2, 3)], false);
        assert_eq!(adj.neighbors(0), &[1, 2]);
        assert_eq!(adj.neighbors(1), &[0, 3]);
        assert_eq!(adj.neighbors(2), &[0, 3]);
        assert_eq!(adj.neighbors(3), &[1, 2]);
    }

    #[test]
    fn test_unmapped_vertex_is_empty() {
        let adj = AdjacencyList::from_edges(&[(0, 1)], true);
        assert!(adj.neighbors(1).is_empty());
        assert!(adj.neighbors(42).is_empty());
    }

    #[test]
    fn test_empty_edge_list() {
        let adj = AdjacencyList::from_edges(&[], false);
        assert!(adj.is_empty());
        assert_eq!(adj.len(), 0);
    }

    #[test]
    fn test_frame_walks_neighbors_in_order() {
        let adj = AdjacencyList::from_edges(&[(0, 3), (0, 1)], true);
        let mut frame = DfsFrame::new(0);
        assert_eq!(frame.advance(&adj), Some(3));
        assert_eq!(frame.advance(&adj), Some(1));
        assert_eq!(frame.advance(&adj), None);
        assert_eq!(frame.advance(&adj), None);
    }

    #[test]
    fn test_self_loop_undirected_appears_twice() {
        let adj = AdjacencyList::from_edges(&[(3, 3)], false);
        assert_eq!(adj.neighbors(3), &[3, 3]);
        assert_eq!(adj.len(), 1);
    }

    #[test]
    fn test_vertex_state_is_filled() {
        let state = vertex_state(3, Some(7usize)).unwrap();
        assert_eq!(state, vec![Some(7), Some(7), Some(7)]);
        assert!(vertex_state(0, false).unwrap().is_empty());
    }

    #[test]
    fn test_vertex_state_reports_oversized_request() {
        let err = vertex_state(usize::MAX / 2, None::<usize>).unwrap_err();
        assert!(err.is_invalid_configuration());
        assert!(err.to_string().contains("cannot allocate traversal state"));
    }
}
