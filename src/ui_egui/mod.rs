mod app;
mod calendar_view;
mod palette;
pub mod panel;
pub mod theme;

pub use app::DemoApp;
pub use panel::{ConfigPanel, PanelEvent};
