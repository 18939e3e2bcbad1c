/// Clearance assigned to edges with no obstacle edge nearby.
pub const DEFAULT_MAX_CLEARANCE: f32 = 100.0;

#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Number of graph edges the depth-first search may follow before it
    /// gives up and returns the partial path.
    pub exploration_limit: usize,
    /// Upper bound on edge clearance, both when the graph is built and when
    /// edges are filtered by entity diameter.
    pub max_clearance: f32,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        PlannerConfig {
            exploration_limit: 5000,
            max_clearance: DEFAULT_MAX_CLEARANCE,
        }
    }
}
