// App module for funding_leaderboard
// Handles application state and input

pub mod debounce;
pub mod input;
pub mod search;
pub mod state;

pub use input::handle_input;
pub use state::App;
