#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// How far each entity of a colliding pair is sent away from the other.
    pub nudge_distance: f32,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        ResolverConfig {
            nudge_distance: 10.0,
        }
    }
}
