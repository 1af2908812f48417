use std::collections::VecDeque;

use crate::graph::{Adjacency, CandidateEdge, PointSet};
use crate::math::azimuth::turning_angle;
use crate::math::Vector2;

/// An assembled path over the filtered edge set, before finalization.
///
/// `vertices` holds one more entry than `edges`; `edges[i]` joins
/// `vertices[i]` and `vertices[i + 1]`.
#[derive(Debug, Clone)]
pub struct AssembledPath {
    /// Ordered point indices along the path.
    pub vertices: Vec<usize>,
    /// Ordered indices into the filtered edge set.
    pub edges: Vec<usize>,
}

/// Greedily grows directed paths over the filtered edge set, visiting
/// each edge at most once.
///
/// Every unvisited edge in turn seeds a path, which grows from both ends
/// until no extension remains. Each growth step picks the incident
/// unvisited edge minimizing the tortuosity cost θ^(1 − α) · L, where θ
/// is the turning angle against the incoming direction and L the edge
/// length. A straight continuation (θ = 0) costs nothing and always wins
/// while α < 1. The seed edge is undirected, so the very first extension
/// at each end has no incoming direction and is chosen by length alone.
///
/// Determinism: seeds are taken in ascending edge-index order, and exact
/// cost ties break to the smallest far-endpoint index.
pub struct AssemblePaths<'a> {
    points: &'a PointSet,
    edges: &'a [CandidateEdge],
    damping: f64,
}

impl<'a> AssemblePaths<'a> {
    /// Creates a new `AssemblePaths` operation.
    ///
    /// `damping` is the validated α ∈ `[0, 1]`.
    #[must_use]
    pub fn new(points: &'a PointSet, edges: &'a [CandidateEdge], damping: f64) -> Self {
        Self {
            points,
            edges,
            damping,
        }
    }

    /// Executes path assembly over the whole edge set.
    #[must_use]
    pub fn execute(&self) -> Vec<AssembledPath> {
        let adjacency = Adjacency::build(self.points.len(), self.edges);
        let mut visited = vec![false; self.edges.len()];
        let mut on_path = vec![false; self.points.len()];
        let mut paths = Vec::new();

        for seed in 0..self.edges.len() {
            if visited[seed] {
                continue;
            }
            visited[seed] = true;

            let edge = &self.edges[seed];
            let mut vertices = VecDeque::from([edge.start, edge.end]);
            let mut edge_ids = VecDeque::from([seed]);
            on_path[edge.start] = true;
            on_path[edge.end] = true;

            self.grow(true, &mut vertices, &mut edge_ids, &adjacency, &mut visited, &mut on_path);
            self.grow(false, &mut vertices, &mut edge_ids, &adjacency, &mut visited, &mut on_path);

            for &vertex in &vertices {
                on_path[vertex] = false;
            }
            paths.push(AssembledPath {
                vertices: vertices.into(),
                edges: edge_ids.into(),
            });
        }

        paths
    }

    /// Grows one end of the current path until no valid extension exists.
    ///
    /// `forward` grows at the back of the deques, otherwise at the front.
    fn grow(
        &self,
        forward: bool,
        vertices: &mut VecDeque<usize>,
        edge_ids: &mut VecDeque<usize>,
        adjacency: &Adjacency,
        visited: &mut [bool],
        on_path: &mut [bool],
    ) {
        let mut incoming: Option<Vector2> = None;

        loop {
            let end = if forward {
                vertices.back()
            } else {
                vertices.front()
            };
            let Some(&endpoint) = end else { return };

            let Some((edge_id, next)) =
                self.best_extension(endpoint, incoming.as_ref(), adjacency, visited, on_path)
            else {
                return;
            };

            assert!(!visited[edge_id], "edge {edge_id} reused across paths");
            assert!(!on_path[next], "path revisits point {next}");
            visited[edge_id] = true;
            on_path[next] = true;
            incoming = Some(self.direction(endpoint, next));

            if forward {
                vertices.push_back(next);
                edge_ids.push_back(edge_id);
            } else {
                vertices.push_front(next);
                edge_ids.push_front(edge_id);
            }
        }
    }

    /// Selects the cheapest extension at `endpoint`, or `None` when no
    /// unvisited, non-cycle-forming incident edge remains.
    ///
    /// Ties must be detected on exact equality so the point-index
    /// tie-break stays reproducible.
    #[allow(clippy::float_cmp)]
    fn best_extension(
        &self,
        endpoint: usize,
        incoming: Option<&Vector2>,
        adjacency: &Adjacency,
        visited: &[bool],
        on_path: &[bool],
    ) -> Option<(usize, usize)> {
        let mut best: Option<(f64, usize, usize)> = None;

        for &edge_id in adjacency.incident(endpoint) {
            if visited[edge_id] {
                continue;
            }
            let edge = &self.edges[edge_id];
            let next = edge.other(endpoint);
            if on_path[next] {
                continue;
            }

            let cost = match incoming {
                None => edge.length,
                Some(in_dir) => {
                    let out_dir = self.direction(endpoint, next);
                    turning_angle(in_dir, &out_dir).powf(1.0 - self.damping) * edge.length
                }
            };

            let better = match best {
                None => true,
                Some((best_cost, best_next, _)) => {
                    cost < best_cost || (cost == best_cost && next < best_next)
                }
            };
            if better {
                best = Some((cost, next, edge_id));
            }
        }

        best.map(|(_, next, edge_id)| (edge_id, next))
    }

    /// 2D direction from point `from` to point `to`.
    fn direction(&self, from: usize, to: usize) -> Vector2 {
        let a = self.points.position(from);
        let b = self.points.position(to);
        Vector2::new(b.x - a.x, b.y - a.y)
    }
}
