// Example: auto-hide timeline driven by simulated frame ticks.
use scrollbars::{ScrollMetrics, ScrollbarsOptions, TrackSizes};
use scrollbars_adapter::Controller;

fn metrics(scroll_top: f64) -> ScrollMetrics {
    ScrollMetrics {
        scroll_left: 0.0,
        scroll_top,
        scroll_width: 400.0,
        scroll_height: 2000.0,
        client_width: 400.0,
        client_height: 400.0,
    }
}

fn main() {
    let mut c = Controller::new(ScrollbarsOptions::new().with_auto_hide(true));
    c.on_mount(metrics(0.0), 17.0, 0);
    c.on_track_resize(TrackSizes {
        horizontal: 396.0,
        vertical: 396.0,
    });

    c.on_scroll(metrics(50.0), 100);
    c.on_pointer_leave(200);

    // ~60fps ticks; print every opacity change.
    for frame in 0u64..120 {
        let now_ms = frame * 16;
        let patches = c.tick(now_ms);
        if let Some(fade) = patches.track_fade {
            println!("t={now_ms}ms tracks fade to opacity {}", fade.opacity);
        }
    }
    println!("visible at the end: {}", c.auto_hide().visible());
}
