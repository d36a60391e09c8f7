//! Simple-route enumeration.

use tracing::trace;

use crate::model::{NetworkNode, Route};
use super::Topology;

impl Topology {
    /// Every simple route from `start` to `end` along declared adjacencies.
    ///
    /// Depth-first with backtracking: the path built so far doubles as the
    /// visited set, so no label appears twice on any route. All routes are
    /// returned, not just the shortest, in the order given by each node's
    /// neighbor list. An unknown `start` yields no routes; `start == end`
    /// yields exactly `[start]`.
    pub fn find_paths(&self, start: &str, end: &str) -> Vec<Route> {
        let mut routes = Vec::new();
        let Some(origin) = self.nodes.get(start) else {
            trace!(start, "route enumeration from unknown node");
            return routes;
        };

        let mut path = vec![origin.label()];
        self.extend_paths(origin, end, &mut path, &mut routes);

        trace!(start, end, routes = routes.len(), "routes enumerated");
        routes
    }

    fn extend_paths<'a>(
        &'a self,
        node: &'a NetworkNode,
        end: &str,
        path: &mut Vec<&'a str>,
        routes: &mut Vec<Route>,
    ) {
        if node.label() == end {
            routes.push(Route::new(path.iter().copied()));
            return;
        }

        for neighbor in node.connected_nodes() {
            if path.contains(&neighbor.as_str()) {
                continue;
            }
            // Neighbors are validated at construction.
            let Some(next) = self.nodes.get(neighbor) else { continue };

            path.push(next.label());
            self.extend_paths(next, end, path, routes);
            path.pop();
        }
    }
}
