// src/application/views/dashboard.rs

use std::sync::Arc;

use crate::application::view_error::ErrorCopy;
use crate::application::view_state::{ViewSlot, ViewState};
use crate::application::views::load_into;
use crate::services::{Dashboard, DashboardService};

const DASHBOARD_COPY: ErrorCopy = ErrorCopy::new("Failed to load dashboard.")
    .forbidden("You do not have permission to perform this action.");

pub struct DashboardView {
    dashboard: Arc<DashboardService>,
    slot: ViewSlot<(), Dashboard>,
}

impl DashboardView {
    pub fn new(dashboard: Arc<DashboardService>) -> Self {
        Self {
            dashboard,
            slot: ViewSlot::new(),
        }
    }

    pub async fn load(&self) -> ViewState<Dashboard> {
        load_into(&self.slot, (), &DASHBOARD_COPY, self.dashboard.load()).await
    }

    pub fn unmount(&self) {
        self.slot.reset();
    }
}
