//! Navigation layer

use std::sync::RwLock;

use crate::url::RouteLocation;

/// Page router
pub trait Router: Send + Sync {
    fn current(&self) -> RouteLocation;

    /// Replace the current location in place, without adding a history entry
    fn replace_shallow(&self, location: RouteLocation);
}

/// Router that keeps its location in memory
#[derive(Debug, Default)]
pub struct MemoryRouter {
    location: RwLock<RouteLocation>,
    history: RwLock<Vec<RouteLocation>>,
}

impl MemoryRouter {
    pub fn new(location: RouteLocation) -> Self {
        Self {
            location: RwLock::new(location.clone()),
            history: RwLock::new(vec![location]),
        }
    }

    /// Navigate, adding a history entry
    pub fn push(&self, location: RouteLocation) {
        *self.location.write().unwrap_or_else(|e| e.into_inner()) = location.clone();
        self.history.write().unwrap_or_else(|e| e.into_inner()).push(location);
    }

    pub fn history_len(&self) -> usize {
        self.history.read().unwrap_or_else(|e| e.into_inner()).len()
    }
}

impl Router for MemoryRouter {
    fn current(&self) -> RouteLocation {
        self.location.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn replace_shallow(&self, location: RouteLocation) {
        *self.location.write().unwrap_or_else(|e| e.into_inner()) = location;
    }
}
