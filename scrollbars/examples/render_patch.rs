// Example: one render pass plus the imperative style patch that follows it.
use scrollbars::{ScrollMetrics, Scrollbars, ScrollbarsOptions, TrackSizes};

fn main() {
    let mut sb = Scrollbars::new(
        ScrollbarsOptions::new()
            .with_auto_hide(true)
            .with_hide_tracks_when_not_needed(true),
    );
    sb.mount(
        ScrollMetrics {
            scroll_left: 0.0,
            scroll_top: 0.0,
            scroll_width: 400.0,
            scroll_height: 1600.0,
            client_width: 400.0,
            client_height: 400.0,
        },
        17.0,
    );
    sb.set_track_sizes(TrackSizes {
        horizontal: 396.0,
        vertical: 396.0,
    });

    let mut tree = sb.render();
    println!("view style={:?}", tree.view.style);
    println!("vertical track style={:?}", tree.track_vertical.style);

    sb.set_scroll_top(600.0);
    let patch = sb.update();
    tree.apply(&patch);
    println!("patched vertical thumb={:?}", tree.thumb_vertical.style);
    println!("horizontal track={:?}", patch.track_horizontal);
}
