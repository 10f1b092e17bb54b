//! UI Widgets

mod help;
mod map;
mod messages;
mod status;

pub use help::HelpWidget;
pub use map::{CONNECTOR_GLYPH, MapMode, MapWidget};
pub use messages::MessagesWidget;
pub use status::StatusWidget;
