//! Alert port definition.

use crate::domain::entities::Alert;

/// Port for showing blocking modal alerts.
pub trait AlertPort: Send + Sync {
    /// Shows alert to the user.
    fn fire(&self, alert: Alert);
}
