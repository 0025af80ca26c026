use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tracing::debug;
use tracing::info;
use tracing::warn;
use ui_app::cli;
use ui_app::config_loader;
use ui_app::timeline;
use ui_events::EventDispatcher;
use ui_events::features::form::ContactForm;
use ui_events::features::form::FieldKind;
use ui_events::features::form::SubmitState;
use ui_events::features::form::SubmitTiming;
use ui_events::features::form::submit;
use ui_events::features::header::HeaderState;
use ui_events::features::loading::FadeTiming;
use ui_events::features::loading::run_fade;
use ui_events::features::menu::MenuState;
use ui_events::features::notice::NoticeBoard;
use ui_events::features::notice::NoticeLevel;
use ui_events::features::parallax::Parallax;
use ui_events::features::scroll_top::ScrollTopButton;
use ui_motion::CounterAnimation;
use ui_motion::Typewriter;
use ui_motion::format_stat;

/// Grace period after the scenario ends, so trailing debounces, notices and
/// animations can run out
const DRAIN_PERIOD: Duration = Duration::from_secs(8);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialise logging
    let _guard = ui_app::tracing_setup::init("ui_demo", "./logs", tracing::Level::INFO, true);

    // Load page configuration from file (with fallback to defaults)
    let config = config_loader::load_page_config_or_default("config/page.toml");
    let scenario_name = cli::get_scenario("landing");
    let events = timeline::scenario(&scenario_name).ok_or_else(|| anyhow::anyhow!("Unknown scenario '{scenario_name}'"))?;

    info!("Replaying scenario '{scenario_name}' with {} events", events.len());

    let mut dispatcher = EventDispatcher::new();

    // Header and back-to-top visibility, behind one scroll throttle
    let header = Arc::new(Mutex::new(HeaderState::with_thresholds(config.header.compact_px, config.header.hide_px)));
    let scroll_top = Arc::new(Mutex::new(ScrollTopButton::with_threshold(config.scroll_top.show_px)));

    let header_clone = Arc::clone(&header);
    let scroll_top_clone = Arc::clone(&scroll_top);
    dispatcher.on_scroll_throttled(Duration::from_millis(config.pacing.scroll_throttle_ms), move |offset| {
        if let Some(style) = header_clone.lock().on_scroll(offset) {
            info!("Header style changed: compact={}, hidden={}", style.compact, style.hidden);
        }
        if let Some(visible) = scroll_top_clone.lock().on_scroll(offset) {
            info!("Back-to-top button {}", if visible { "shown" } else { "hidden" });
        }
    });

    // Parallax runs on its own, tighter throttle (one frame)
    let parallax = Parallax::with_speed(config.parallax.speed);
    dispatcher.on_scroll_throttled(Duration::from_millis(config.pacing.parallax_throttle_ms), move |offset| {
        debug!("Hero parallax translation: {:.1}px", parallax.translation(offset));
    });

    // Debounced per-field validation
    let form = Arc::new(Mutex::new(ContactForm::new(SubmitTiming {
        send_delay: Duration::from_millis(config.form.send_delay_ms),
        reset_delay: Duration::from_millis(config.form.reset_delay_ms),
    })));

    let form_clone = Arc::clone(&form);
    dispatcher.on_input_debounced(Duration::from_millis(config.pacing.input_debounce_ms), move |input| {
        match FieldKind::from_name(&input.field) {
            Some(kind) => {
                let status = form_clone.lock().input(kind, &input.value);
                info!("Field '{}' settled at {:?}: {:?}", input.field, input.value, status);
            }
            None => warn!("Input on unknown field '{}'", input.field),
        }
    });

    // Clicks: menu, nav links, submit button, back-to-top, notice close
    let menu = Arc::new(Mutex::new(MenuState::new()));
    let notices = Arc::new(NoticeBoard::new(Duration::from_millis(config.notice.dismiss_ms)));

    let menu_clone = Arc::clone(&menu);
    let form_clone = Arc::clone(&form);
    let notices_clone = Arc::clone(&notices);
    let scroll_top_clone = Arc::clone(&scroll_top);
    dispatcher.on_click(move |target| match target {
        "hamburger" => {
            let open = menu_clone.lock().toggle();
            info!("Menu {}", if open { "opened" } else { "closed" });
        }
        "submit" => {
            let form = Arc::clone(&form_clone);
            let notices = Arc::clone(&notices_clone);
            tokio::spawn(async move {
                let result = submit(&form, |state| {
                    info!("Submission state: {state:?}");
                    if state == SubmitState::Sent {
                        notices.show(NoticeLevel::Success, "Thank you! Your message has been sent successfully.");
                    }
                })
                .await;

                if let Err(err) = result {
                    warn!("Submission rejected: {err}");
                }
            });
        }
        "scroll-top" => {
            let request = scroll_top_clone.lock().on_click();
            info!("Scrolling back to {:.0}px", request.target_offset);
        }
        target if target.starts_with("nav:") => {
            if menu_clone.lock().on_nav_link() {
                info!("Menu closed after choosing {target}");
            }
        }
        target if target.starts_with("notice-close:") => {
            if let Ok(id) = target["notice-close:".len()..].parse::<u64>() {
                notices_clone.dismiss(id);
            }
        }
        other => debug!("Unhandled click on '{other}'"),
    });

    let menu_clone = Arc::clone(&menu);
    dispatcher.on_key(move |key| {
        if menu_clone.lock().on_key(key) {
            info!("Menu closed via Escape");
        }
    });

    // Page load kicks off the fade, the typewriter and the stat counters
    let fade_timing =
        FadeTiming { hold: Duration::from_millis(config.loading.hold_ms), fade: Duration::from_millis(config.loading.fade_ms) };
    let typewriter =
        Typewriter::new(Duration::from_millis(config.typewriter.start_delay_ms), Duration::from_millis(config.typewriter.tick_ms));
    let typewriter_text = config.typewriter.text.clone();
    let counters = config.counters.clone();

    dispatcher.on_loaded(move || {
        tokio::spawn(run_fade(fade_timing, |phase| info!("Loading screen: {phase:?}")));

        let text = typewriter_text.clone();
        tokio::spawn(async move {
            typewriter.run(&text, |prefix| debug!("Typewriter: {prefix}")).await;
            info!("Typewriter finished: {text}");
        });

        for stat in counters.clone() {
            tokio::spawn(async move {
                CounterAnimation::default().run(stat.target, |value| debug!("{}: {value}", stat.label)).await;
                info!("{}: {}", stat.label, format_stat(stat.target, &stat.suffix));
            });
        }
    });

    // Drive the whole page
    timeline::replay(&events, &mut dispatcher).await;

    tokio::time::sleep(DRAIN_PERIOD).await;

    info!("Scenario '{scenario_name}' complete; form state {:?}, {} notices active", form.lock().state(), notices.active().len());

    Ok(())
}
