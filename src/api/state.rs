//! Shared application state for the HTTP layer

use std::sync::Arc;

use crate::auth::AdminAuth;
use crate::schedule_board::ScheduleBoard;

/// State handed to every handler
pub struct AppState {
    /// Lifecycle service
    pub board: Arc<ScheduleBoard>,
    /// Admin credential service
    pub auth: Arc<AdminAuth>,
}

impl AppState {
    pub fn new(board: Arc<ScheduleBoard>, auth: Arc<AdminAuth>) -> Self {
        Self { board, auth }
    }
}
