//! Event wiring for the page: an event model, a dispatcher that routes
//! events through the pacing layer, and the feature handlers the page
//! derives its state from.

pub mod dispatcher;
pub mod event;
pub mod features;

pub use dispatcher::EventDispatcher;
pub use dispatcher::FieldInput;
pub use event::Key;
pub use event::PageEvent;
