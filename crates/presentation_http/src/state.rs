//! Application state shared across handlers

use std::sync::Arc;

use application::ArrivalsService;
use infrastructure::FragmentRenderer;

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Bus and tram queries
    pub arrivals: Arc<ArrivalsService>,
    /// HTML fragment renderer
    pub renderer: FragmentRenderer,
}
