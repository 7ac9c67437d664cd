//! Quiz generation, rendering and answer reveal.
//!
//! - `controller`: submission lifecycle and the owned session state
//! - `session`: the stored question set used by reveal
//! - `view`: rendered question blocks and option groups

mod controller;
mod session;
mod view;

pub use controller::{QuizController, Ticket};
pub use session::QuizSession;
pub use view::QuizView;
