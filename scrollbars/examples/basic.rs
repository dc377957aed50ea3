// Example: minimal usage against a simulated view element.
use scrollbars::{Axis, ScrollMetrics, Scrollbars, ScrollbarsOptions, TrackSizes};

fn main() {
    let mut sb = Scrollbars::new(ScrollbarsOptions::new());
    sb.mount(
        ScrollMetrics {
            scroll_left: 0.0,
            scroll_top: 120.0,
            scroll_width: 800.0,
            scroll_height: 2400.0,
            client_width: 400.0,
            client_height: 600.0,
        },
        17.0,
    );
    sb.set_track_sizes(TrackSizes {
        horizontal: 396.0,
        vertical: 596.0,
    });

    println!("values={:?}", sb.values());
    println!("vertical thumb={:?}", sb.thumb_geometry(Axis::Vertical));

    let applied = sb.scroll_to_bottom();
    println!("after scroll_to_bottom: offset={applied} top={}", sb.values().top);
}
