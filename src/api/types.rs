//! Shared state for the API router.

use std::sync::Arc;

use crate::alerting::AlertPolicy;
use crate::care::HealthIntake;
use crate::db::RecordStore;

/// Shared context for all API routes and middleware.
#[derive(Clone)]
pub struct ApiContext {
    pub store: Arc<dyn RecordStore>,
    pub alert_policy: AlertPolicy,
}

impl ApiContext {
    pub fn new(store: Arc<dyn RecordStore>, alert_policy: AlertPolicy) -> Self {
        Self {
            store,
            alert_policy,
        }
    }

    /// Health record intake bound to this context's store and policy.
    pub fn intake(&self) -> HealthIntake<'_, dyn RecordStore> {
        HealthIntake::new(self.store.as_ref(), self.alert_policy)
    }
}
