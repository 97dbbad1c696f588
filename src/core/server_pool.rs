use super::types::{ServerId, SimTime};

/// Fixed pool of identical servers, each tracked by the time it next becomes free.
///
/// Two selection policies are exposed and deliberately kept apart:
/// - [`first_free`](ServerPool::first_free): lowest index among servers already free at `now`
/// - [`soonest_free`](ServerPool::soonest_free): globally earliest free time, lowest index on ties
#[derive(Debug, Clone)]
pub struct ServerPool {
    next_free: Vec<SimTime>,
}

impl ServerPool {
    /// Create `count` servers, all free at time 0
    pub fn new(count: usize) -> Self {
        Self {
            next_free: vec![0.0; count],
        }
    }

    pub fn len(&self) -> usize {
        self.next_free.len()
    }

    pub fn is_empty(&self) -> bool {
        self.next_free.is_empty()
    }

    /// Time at which `server` next becomes free
    pub fn next_free_time(&self, server: ServerId) -> SimTime {
        self.next_free[server]
    }

    /// All next-free times, indexed by server
    pub fn next_free_times(&self) -> &[SimTime] {
        &self.next_free
    }

    /// First server (by index) whose next-free time is at or before `now`
    pub fn first_free(&self, now: SimTime) -> Option<ServerId> {
        self.next_free.iter().position(|&t| t <= now)
    }

    /// Server with the minimum next-free time; ties go to the lowest index
    pub fn soonest_free(&self) -> Option<ServerId> {
        let mut best: Option<(ServerId, SimTime)> = None;
        for (server, &t) in self.next_free.iter().enumerate() {
            match best {
                Some((_, best_t)) if t >= best_t => {}
                _ => best = Some((server, t)),
            }
        }
        best.map(|(server, _)| server)
    }

    /// Whether any server is free at `now`
    pub fn any_free(&self, now: SimTime) -> bool {
        self.first_free(now).is_some()
    }

    /// Mark `server` busy until `until`. Free times never move backwards.
    pub fn occupy(&mut self, server: ServerId, until: SimTime) {
        debug_assert!(
            until >= self.next_free[server],
            "server {} free time would move back from {} to {}",
            server,
            self.next_free[server],
            until
        );
        self.next_free[server] = until;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_pool_all_free_at_zero() {
        let pool = ServerPool::new(3);
        assert_eq!(pool.len(), 3);
        assert_eq!(pool.next_free_times(), &[0.0, 0.0, 0.0]);
        assert_eq!(pool.first_free(0.0), Some(0));
    }

    #[test]
    fn test_first_free_is_inclusive_and_lowest_index() {
        let mut pool = ServerPool::new(3);
        pool.occupy(0, 10.0);
        pool.occupy(1, 5.0);
        pool.occupy(2, 5.0);
        assert_eq!(pool.first_free(4.9), None);
        assert_eq!(pool.first_free(5.0), Some(1));
        assert_eq!(pool.first_free(10.0), Some(0));
        assert!(pool.any_free(5.0));
        assert!(!pool.any_free(4.0));
    }

    #[test]
    fn test_soonest_free_differs_from_first_free() {
        let mut pool = ServerPool::new(3);
        pool.occupy(0, 8.0);
        pool.occupy(1, 3.0);
        pool.occupy(2, 3.0);
        // at t=9 every server is free: first-free picks index 0,
        // soonest-free picks the earliest free time with lowest index
        assert_eq!(pool.first_free(9.0), Some(0));
        assert_eq!(pool.soonest_free(), Some(1));
    }

    #[test]
    fn test_soonest_free_on_empty_pool() {
        let pool = ServerPool::new(0);
        assert!(pool.is_empty());
        assert_eq!(pool.soonest_free(), None);
        assert_eq!(pool.first_free(100.0), None);
    }
}
