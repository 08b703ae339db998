use serde::Serialize;

/// Counters describing how much work the search engine did.
///
/// One `Stats` is threaded through a whole tour; nested detour sub-searches
/// record into the same object as the leg that spawned them.
#[derive(Default, Clone, PartialEq, Eq, Debug, Serialize)]
pub struct Stats {
    searches: usize,
    expansions: usize,
    relaxations: usize,
    cache_hits: usize,
    stall_cutoffs: usize,
    exhausted_frontiers: usize,
}

impl Stats {
    pub fn new() -> Self {
        Stats {
            searches: 0,
            expansions: 0,
            relaxations: 0,
            cache_hits: 0,
            stall_cutoffs: 0,
            exhausted_frontiers: 0,
        }
    }

    /// Record that a search (a tour leg or a detour sub-search) has started
    pub fn bump_searches(&mut self) {
        self.searches += 1
    }

    /// Record that a position was popped, finalized and expanded
    pub fn bump_expansions(&mut self) {
        self.expansions += 1
    }

    /// Record that a detour was detected and re-solved by a sub-search
    pub fn bump_relaxations(&mut self) {
        self.relaxations += 1
    }

    /// Record that a previously relaxed distance was reused
    pub fn bump_cache_hits(&mut self) {
        self.cache_hits += 1
    }

    pub fn bump_stall_cutoffs(&mut self) {
        self.stall_cutoffs += 1
    }

    pub fn bump_exhausted_frontiers(&mut self) {
        self.exhausted_frontiers += 1
    }

    pub fn get_searches(&self) -> usize {
        self.searches
    }

    pub fn get_expansions(&self) -> usize {
        self.expansions
    }

    pub fn get_relaxations(&self) -> usize {
        self.relaxations
    }

    pub fn get_cache_hits(&self) -> usize {
        self.cache_hits
    }

    pub fn get_stall_cutoffs(&self) -> usize {
        self.stall_cutoffs
    }

    pub fn get_exhausted_frontiers(&self) -> usize {
        self.exhausted_frontiers
    }
}

impl std::fmt::Display for Stats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "searches: {}, expansions: {}, relaxations: {}, cache hits: {}, stall cutoffs: {}, exhausted frontiers: {}",
            self.searches,
            self.expansions,
            self.relaxations,
            self.cache_hits,
            self.stall_cutoffs,
            self.exhausted_frontiers
        )
    }
}
