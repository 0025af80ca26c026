use std::time::Duration;

use tokio::time::MissedTickBehavior;

/// Character-by-character text reveal
///
/// After an initial delay, emits one growing prefix of the text per tick
/// until the whole string is out. Dropping the future stops the effect.
#[derive(Debug, Clone, Copy)]
pub struct Typewriter {
    /// Delay before the first character appears
    pub start_delay: Duration,

    /// Time between characters
    pub tick: Duration,
}

impl Default for Typewriter {
    fn default() -> Self {
        Self { start_delay: Duration::from_millis(1500), tick: Duration::from_millis(50) }
    }
}

impl Typewriter {
    pub fn new(start_delay: Duration, tick: Duration) -> Self {
        Self { start_delay, tick }
    }

    /// Reveal `text`, feeding each prefix to the sink
    ///
    /// Prefixes are always char-aligned, so multi-byte text stays intact.
    pub async fn run<F>(&self, text: &str, mut sink: F)
    where
        F: FnMut(&str),
    {
        tokio::time::sleep(self.start_delay).await;

        let mut ticker = tokio::time::interval(self.tick);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick of a fresh interval completes immediately
        ticker.tick().await;

        for (index, character) in text.char_indices() {
            ticker.tick().await;
            sink(&text[..index + character.len_utf8()]);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::Mutex;

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_reveals_one_char_per_tick() {
        let frames = Arc::new(Mutex::new(Vec::new()));
        let frames_clone = Arc::clone(&frames);

        let typewriter = Typewriter::new(Duration::from_millis(100), Duration::from_millis(10));
        typewriter.run("abc", move |prefix| frames_clone.lock().unwrap().push(prefix.to_string())).await;

        assert_eq!(*frames.lock().unwrap(), vec!["a", "ab", "abc"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_delay_before_first_char() {
        let first_at = Arc::new(Mutex::new(None));
        let first_at_clone = Arc::clone(&first_at);

        let started = tokio::time::Instant::now();
        let typewriter = Typewriter::new(Duration::from_millis(1500), Duration::from_millis(50));
        typewriter
            .run("hi", move |_| {
                first_at_clone.lock().unwrap().get_or_insert(started.elapsed());
            })
            .await;

        // First char lands one tick after the start delay
        assert_eq!(first_at.lock().unwrap().unwrap(), Duration::from_millis(1550));
    }

    #[tokio::test(start_paused = true)]
    async fn test_multibyte_text_stays_char_aligned() {
        let frames = Arc::new(Mutex::new(Vec::new()));
        let frames_clone = Arc::clone(&frames);

        let typewriter = Typewriter::new(Duration::from_millis(1), Duration::from_millis(1));
        typewriter.run("héllo", move |prefix| frames_clone.lock().unwrap().push(prefix.to_string())).await;

        let frames = frames.lock().unwrap();
        assert_eq!(frames.len(), 5);
        assert_eq!(frames[1], "hé");
        assert_eq!(frames[4], "héllo");
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_text_emits_nothing() {
        let typewriter = Typewriter::default();
        typewriter.run("", |_| panic!("no frames expected")).await;
    }
}
