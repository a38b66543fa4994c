//! Page Components

pub mod analyze;
pub mod chat;
pub mod dashboard;
pub mod evidence;
pub mod landing;
pub mod language_settings;
pub mod login;
pub mod results;

pub use analyze::Analyze;
pub use chat::Chat;
pub use dashboard::Dashboard;
pub use evidence::Evidence;
pub use landing::Landing;
pub use language_settings::LanguageSettings;
pub use login::Login;
pub use results::Results;
