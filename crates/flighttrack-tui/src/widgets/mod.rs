//! Custom widget components

mod alert_dialog;
mod demo_hint;
mod flight_card;
mod header;
mod key_hints;
pub mod modal_overlay;
mod search_panel;

pub use alert_dialog::AlertDialog;
pub use demo_hint::DemoHint;
pub use flight_card::FlightCard;
pub use header::MainHeader;
pub use key_hints::KeyHints;
pub use search_panel::SearchPanel;
