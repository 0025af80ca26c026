use std::time::Duration;

use tracing::debug;
use ui_events::EventDispatcher;
use ui_events::Key;
use ui_events::PageEvent;

/// One event of a synthetic session, stamped with its offset from the start
#[derive(Debug, Clone)]
pub struct TimedEvent {
    pub at: Duration,
    pub event: PageEvent,
}

fn t(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// Append keystrokes revealing `text` into `field`; returns the time of the
/// last keystroke in milliseconds
fn type_into(events: &mut Vec<TimedEvent>, field: &str, text: &str, start_ms: u64, gap_ms: u64) -> u64 {
    let mut at = start_ms;
    let mut last = start_ms;

    for (index, character) in text.char_indices() {
        events.push(TimedEvent {
            at: t(at),
            event: PageEvent::Input { field: field.to_string(), value: text[..index + character.len_utf8()].to_string() },
        });
        last = at;
        at += gap_ms;
    }

    last
}

/// Resolve a scenario by name
pub fn scenario(name: &str) -> Option<Vec<TimedEvent>> {
    match name {
        "landing" => Some(landing()),
        "burst" => Some(scroll_burst()),
        _ => None,
    }
}

/// A full visit: load, browse, toggle the menu, fill in the contact form,
/// submit, and head back to the top
pub fn landing() -> Vec<TimedEvent> {
    let mut events = vec![TimedEvent { at: t(0), event: PageEvent::Loaded }];

    // Scroll into the page in a burst of small steps
    let mut offset = 0.0;
    let mut at = 500;
    while offset < 640.0 {
        offset += 40.0;
        events.push(TimedEvent { at: t(at), event: PageEvent::Scroll { offset } });
        at += 25;
    }

    // Open the mobile menu, close it with Escape, reopen, pick a nav link
    events.push(TimedEvent { at: t(1000), event: PageEvent::Click { target: "hamburger".to_string() } });
    events.push(TimedEvent { at: t(1150), event: PageEvent::KeyDown { key: Key::Escape } });
    events.push(TimedEvent { at: t(1300), event: PageEvent::Click { target: "hamburger".to_string() } });
    events.push(TimedEvent { at: t(1500), event: PageEvent::Click { target: "nav:contact".to_string() } });

    // Fill in the contact form
    let done = type_into(&mut events, "name", "Ada Lovelace", 2000, 80);
    let done = type_into(&mut events, "email", "ada@example.com", done + 400, 60);
    let done = type_into(&mut events, "message", "Interested in a consultation.", done + 400, 40);

    // Give the debounced validators a moment, then submit
    let submit_at = done + 600;
    events.push(TimedEvent { at: t(submit_at), event: PageEvent::Click { target: "submit".to_string() } });

    // Drift further down while the submission runs, then jump back up
    let mut at = submit_at + 200;
    let mut offset = 640.0;
    while offset < 1000.0 {
        offset += 60.0;
        events.push(TimedEvent { at: t(at), event: PageEvent::Scroll { offset } });
        at += 30;
    }
    events.push(TimedEvent { at: t(at + 300), event: PageEvent::Click { target: "scroll-top".to_string() } });
    events.push(TimedEvent { at: t(at + 600), event: PageEvent::Scroll { offset: 0.0 } });

    events
}

/// A hostile scroll burst: hundreds of events a few milliseconds apart,
/// sweeping down and back up repeatedly
pub fn scroll_burst() -> Vec<TimedEvent> {
    let mut events = vec![TimedEvent { at: t(0), event: PageEvent::Loaded }];

    for i in 0u64..400 {
        // Triangle wave between 0 and 800 pixels
        let phase = i % 200;
        let offset = if phase < 100 { phase * 8 } else { (200 - phase) * 8 };

        events.push(TimedEvent { at: t(100 + i * 5), event: PageEvent::Scroll { offset: offset as f64 } });
    }

    events
}

/// Replay a scenario through the dispatcher on the Tokio clock
pub async fn replay(events: &[TimedEvent], dispatcher: &mut EventDispatcher) {
    let started = tokio::time::Instant::now();

    for timed in events {
        tokio::time::sleep_until(started + timed.at).await;
        debug!("Replaying {} event at {:?}", timed.event.kind(), timed.at);
        dispatcher.dispatch(&timed.event);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::AtomicU32;
    use std::sync::atomic::Ordering;

    use super::*;

    fn assert_time_ordered(events: &[TimedEvent]) {
        assert!(events.windows(2).all(|pair| pair[0].at <= pair[1].at), "events out of order");
    }

    #[test]
    fn test_scenarios_resolve_by_name() {
        assert!(scenario("landing").is_some());
        assert!(scenario("burst").is_some());
        assert!(scenario("bogus").is_none());
    }

    #[test]
    fn test_landing_is_time_ordered_and_loads_first() {
        let events = landing();
        assert_time_ordered(&events);
        assert_eq!(events[0].event, PageEvent::Loaded);
    }

    #[test]
    fn test_burst_is_time_ordered() {
        assert_time_ordered(&scroll_burst());
    }

    #[test]
    fn test_typing_builds_cumulative_values() {
        let mut events = Vec::new();
        type_into(&mut events, "name", "Ada", 100, 50);

        let values: Vec<_> = events
            .iter()
            .map(|timed| match &timed.event {
                PageEvent::Input { value, .. } => value.clone(),
                other => panic!("unexpected event {other:?}"),
            })
            .collect();

        assert_eq!(values, vec!["A", "Ad", "Ada"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_replay_honours_timestamps() {
        let count = Arc::new(AtomicU32::new(0));
        let count_clone = Arc::clone(&count);

        let mut dispatcher = EventDispatcher::new();
        dispatcher.on_scroll(move |_| {
            count_clone.fetch_add(1, Ordering::Relaxed);
        });

        let events = vec![
            TimedEvent { at: t(0), event: PageEvent::Scroll { offset: 10.0 } },
            TimedEvent { at: t(250), event: PageEvent::Scroll { offset: 20.0 } },
        ];

        let started = tokio::time::Instant::now();
        replay(&events, &mut dispatcher).await;

        assert_eq!(count.load(Ordering::Relaxed), 2);
        assert_eq!(started.elapsed(), Duration::from_millis(250));
    }
}
