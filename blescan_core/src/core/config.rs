use super::consts::DEFAULT_EVENT_CAPACITY;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Bound of the channel between the platform callbacks and the dispatch task.
    pub event_capacity: usize,
    /// BlueZ adapter to scan on, the default adapter when unset.
    pub adapter: Option<String>,
}
impl Default for Config {
    fn default() -> Self {
        Config {
            event_capacity: DEFAULT_EVENT_CAPACITY,
            adapter: None,
        }
    }
}
impl Config {
    pub fn with_adapter(mut self, adapter: impl Into<String>) -> Self {
        self.adapter = Some(adapter.into());
        self
    }
    pub fn with_event_capacity(mut self, capacity: usize) -> Self {
        // flume treats a zero bound as a rendezvous channel, which would make try_send always fail
        self.event_capacity = capacity.max(1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_default_adapter() {
        let config = Config::default();
        assert_eq!(config.adapter, None);
        assert_eq!(config.event_capacity, DEFAULT_EVENT_CAPACITY);
    }

    #[test]
    fn zero_capacity_is_clamped() {
        let config = Config::default().with_event_capacity(0);
        assert_eq!(config.event_capacity, 1);
    }
}
