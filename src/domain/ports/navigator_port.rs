//! Navigation port definition.

use crate::domain::errors::NavigationError;

/// Port for moving the application to another route.
pub trait NavigatorPort: Send + Sync {
    /// Navigates to an in-app URL. An empty URL means the root route.
    ///
    /// # Errors
    /// Returns error if the URL leaves the application or the router is gone.
    fn navigate_by_url(&self, url: &str) -> Result<(), NavigationError>;
}
