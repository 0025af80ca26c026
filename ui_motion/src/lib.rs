pub mod counter;
pub mod typewriter;

pub use counter::CounterAnimation;
pub use counter::format_stat;
pub use typewriter::Typewriter;
