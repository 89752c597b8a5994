// App module for the dashboard
// Handles application state, the fetch lifecycle and key input

pub mod input;
pub mod search;
pub mod state;

pub use input::handle_input;
pub use state::{App, AppScreen, LoadState};
