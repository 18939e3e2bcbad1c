#[derive(Debug, Clone)]
pub struct Config {
    pub node_capacity: usize,
    // Root is level 0.
    pub max_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            node_capacity: 5,
            max_depth: 10,
        }
    }
}
