use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;
use tracing::debug;
use ui_pace::Debouncer;
use ui_pace::throttle;

use crate::event::Key;
use crate::event::PageEvent;

/// Input delivered to a debounced field callback
#[derive(Debug, Clone, PartialEq)]
pub struct FieldInput {
    pub field: String,
    pub value: String,
}

/// Routes `Input` events through one debouncer per field, so each field
/// coalesces its own burst of keystrokes
struct InputRoute {
    quiet: Duration,
    callback: Arc<dyn Fn(FieldInput) + Send + Sync>,
    debouncers: DashMap<String, Debouncer<FieldInput>>,
}

impl InputRoute {
    fn deliver(&self, field: &str, value: &str) {
        let debouncer = self.debouncers.entry(field.to_string()).or_insert_with(|| {
            let callback = Arc::clone(&self.callback);
            Debouncer::new(move |input| callback(input), self.quiet)
        });

        debouncer.call(FieldInput { field: field.to_string(), value: value.to_string() });
    }
}

/// Registry of per-feature handlers behind the pacing layer
///
/// Handlers run synchronously, in registration order, on the thread that
/// calls [`EventDispatcher::dispatch`]. Throttled scroll handlers drop
/// suppressed deliveries on the spot; debounced input callbacks run later on
/// a Tokio timer task.
#[derive(Default)]
pub struct EventDispatcher {
    scroll: Vec<Box<dyn FnMut(f64) + Send>>,
    click: Vec<Box<dyn FnMut(&str) + Send>>,
    key: Vec<Box<dyn FnMut(Key) + Send>>,
    loaded: Vec<Box<dyn FnMut() + Send>>,
    input: Vec<InputRoute>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a scroll handler invoked on every scroll event
    pub fn on_scroll<F>(&mut self, handler: F)
    where
        F: FnMut(f64) + Send + 'static,
    {
        self.scroll.push(Box::new(handler));
    }

    /// Register a scroll handler gated to at most one delivery per interval
    pub fn on_scroll_throttled<F>(&mut self, interval: Duration, handler: F)
    where
        F: FnMut(f64) + Send + 'static,
    {
        self.scroll.push(Box::new(throttle(handler, interval)));
    }

    /// Register a debounced input callback
    ///
    /// Each field gets its own debouncer; the callback fires once per burst
    /// of input on a field, one quiet period after the last keystroke, with
    /// the field's final value.
    pub fn on_input_debounced<F>(&mut self, quiet: Duration, callback: F)
    where
        F: Fn(FieldInput) + Send + Sync + 'static,
    {
        self.input.push(InputRoute { quiet, callback: Arc::new(callback), debouncers: DashMap::new() });
    }

    /// Register a click handler; the target name is the element clicked
    pub fn on_click<F>(&mut self, handler: F)
    where
        F: FnMut(&str) + Send + 'static,
    {
        self.click.push(Box::new(handler));
    }

    /// Register a key handler
    pub fn on_key<F>(&mut self, handler: F)
    where
        F: FnMut(Key) + Send + 'static,
    {
        self.key.push(Box::new(handler));
    }

    /// Register a handler for the page-loaded event
    pub fn on_loaded<F>(&mut self, handler: F)
    where
        F: FnMut() + Send + 'static,
    {
        self.loaded.push(Box::new(handler));
    }

    /// Deliver one event to every handler registered for its kind
    pub fn dispatch(&mut self, event: &PageEvent) {
        debug!("Dispatching {} event", event.kind());

        match event {
            PageEvent::Scroll { offset } => {
                for handler in &mut self.scroll {
                    handler(*offset);
                }
            }
            PageEvent::Input { field, value } => {
                for route in &self.input {
                    route.deliver(field, value);
                }
            }
            PageEvent::Click { target } => {
                for handler in &mut self.click {
                    handler(target);
                }
            }
            PageEvent::KeyDown { key } => {
                for handler in &mut self.key {
                    handler(*key);
                }
            }
            PageEvent::Loaded => {
                for handler in &mut self.loaded {
                    handler();
                }
            }
        }
    }
}
