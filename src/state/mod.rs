//! Application state module

mod app_state;
mod forms;
mod message;
mod nav;
mod page;
mod reveal;
mod scroll;

pub use app_state::*;
pub use forms::*;
pub use message::*;
pub use page::*;
pub use reveal::*;
pub use scroll::*;
