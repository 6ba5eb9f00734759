//! UI screens.

mod alert_modal;
mod app;
mod landing_screen;
mod login_screen;

pub use alert_modal::AlertModal;
pub use app::App;
pub use landing_screen::LandingScreen;
pub use login_screen::LoginScreen;
