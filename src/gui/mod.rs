pub mod actions;
pub mod app;
pub mod error_modal;
pub mod menu;
pub mod message_overlay;
pub mod palette;
pub mod pill;
pub mod router;
pub mod settings;
pub mod theme;
pub mod views;

pub use app::KaramoveApp;
pub use router::Route;
