//! Chat feature slice: transcript view, input line, typing indicator.

mod render;
mod state;
mod update;

pub use render::render;
pub use state::{ChatState, InputState};
pub use update::handle_key;
