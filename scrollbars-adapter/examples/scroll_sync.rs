// Example: a scroll burst coalesced into one recomputation per frame.
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
    let options = ScrollbarsOptions::new()
        .with_on_scroll_start(Some(|| println!("scroll start")))
        .with_on_scroll_stop(Some(|| println!("scroll stop")))
        .with_on_scroll_frame(Some(|values: scrollbars::ScrollValues| {
            println!("frame: top={:.3}", values.top)
        }));

    let mut c = Controller::new(options);
    c.on_mount(metrics(0.0), 17.0, 0);
    c.on_track_resize(TrackSizes {
        horizontal: 396.0,
        vertical: 396.0,
    });

    // Three events land inside one frame; only the last one is rendered.
    c.on_scroll(metrics(100.0), 1);
    c.on_scroll(metrics(200.0), 6);
    c.on_scroll(metrics(300.0), 11);

    for frame in 1u64..=20 {
        let now_ms = frame * 16;
        if let Some(patch) = c.tick(now_ms).update {
            println!(
                "t={now_ms}ms thumb translate={:.1}",
                patch.thumb_vertical.map(|t| t.translate).unwrap_or(0.0)
            );
        }
    }
}
