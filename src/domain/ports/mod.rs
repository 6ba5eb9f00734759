mod alert_port;
mod auth_port;
mod navigator_port;

pub use alert_port::AlertPort;
pub use auth_port::AuthPort;
pub use navigator_port::NavigatorPort;
