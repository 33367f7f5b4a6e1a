//! Application state module

mod app_state;
mod forms;
mod notifications;
mod progress;
mod session;
mod submissions;

pub use app_state::*;
pub use notifications::*;
pub use progress::*;
pub use session::*;
pub use submissions::*;
