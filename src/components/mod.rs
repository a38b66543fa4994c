//! UI Components
//!
//! Reusable Leptos components: layout chrome, loading states, toasts.

pub mod auth_layout;
pub mod layout;
pub mod loading;
pub mod toast;

pub use auth_layout::AuthLayout;
pub use layout::DashboardLayout;
pub use loading::{AnalysisProgressModal, CardSkeleton, ListSkeleton, Loading};
pub use toast::Toast;
