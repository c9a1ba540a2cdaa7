mod app;
mod components;
mod screens;
mod state;

pub use app::launch_gui;
pub use state::AppState;
