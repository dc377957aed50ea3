use crate::*;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_f64(&mut self, start: f64, end: f64) -> f64 {
        let t = (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64;
        start + (end - start) * t
    }
}

fn metrics(
    scroll_left: f64,
    scroll_top: f64,
    scroll_width: f64,
    scroll_height: f64,
    client_width: f64,
    client_height: f64,
) -> ScrollMetrics {
    ScrollMetrics {
        scroll_left,
        scroll_top,
        scroll_width,
        scroll_height,
        client_width,
        client_height,
    }
}

fn mounted(options: ScrollbarsOptions) -> Scrollbars {
    let mut sb = Scrollbars::new(options);
    sb.mount(metrics(0.0, 0.0, 400.0, 400.0, 100.0, 100.0), 17.0);
    sb.set_track_sizes(TrackSizes {
        horizontal: 96.0,
        vertical: 96.0,
    });
    sb
}

#[test]
fn fraction_is_zero_without_overflow() {
    assert_eq!(scroll_fraction(0.0, 100.0, 100.0), 0.0);
    assert_eq!(scroll_fraction(50.0, 100.0, 100.0), 0.0);
    assert_eq!(scroll_fraction(50.0, 100.0, 200.0), 0.0);
    assert_eq!(scroll_fraction(0.0, 0.0, 0.0), 0.0);
}

#[test]
fn fraction_tracks_offset() {
    assert_eq!(scroll_fraction(0.0, 300.0, 100.0), 0.0);
    assert_eq!(scroll_fraction(100.0, 300.0, 100.0), 0.5);
    assert_eq!(scroll_fraction(200.0, 300.0, 100.0), 1.0);
}

#[test]
fn fraction_clamps_overscroll() {
    // Elastic overscroll can report offsets past the range; the fraction
    // still stays in [0, 1].
    assert_eq!(scroll_fraction(250.0, 300.0, 100.0), 1.0);
    assert_eq!(scroll_fraction(-30.0, 300.0, 100.0), 0.0);
}

#[test]
fn thumb_length_hides_without_overflow() {
    assert_eq!(thumb_length(96.0, 100.0, 100.0, None, 30.0), 0.0);
    // Viewport larger than content behaves the same way.
    assert_eq!(thumb_length(96.0, 50.0, 100.0, None, 30.0), 0.0);
}

#[test]
fn thumb_length_is_proportional() {
    // ceil(100 / 400 * 96) = 24, raised to the 20 floor is still 24.
    assert_eq!(thumb_length(96.0, 400.0, 100.0, None, 20.0), 24.0);
}

#[test]
fn thumb_length_respects_minimum() {
    // ceil(100 / 1000 * 96) = 10 < 30.
    assert_eq!(thumb_length(96.0, 1000.0, 100.0, None, 30.0), 30.0);
}

#[test]
fn thumb_length_minimum_is_capped_by_track() {
    assert_eq!(thumb_length(20.0, 1000.0, 100.0, None, 30.0), 20.0);
}

#[test]
fn thumb_length_fixed_size_wins() {
    assert_eq!(thumb_length(96.0, 1000.0, 100.0, Some(42.0), 30.0), 42.0);
    assert_eq!(thumb_length(96.0, 1000.0, 100.0, Some(500.0), 30.0), 96.0);
}

#[test]
fn thumb_length_degenerate_inputs() {
    assert_eq!(thumb_length(0.0, 400.0, 100.0, None, 30.0), 0.0);
    assert_eq!(thumb_length(96.0, 0.0, 100.0, None, 30.0), 0.0);
    assert_eq!(thumb_length(-5.0, 400.0, 100.0, None, 30.0), 0.0);
}

#[test]
fn thumb_offset_spans_the_travel() {
    let thumb = thumb_length(96.0, 400.0, 100.0, None, 30.0);
    assert_eq!(thumb_offset(0.0, 400.0, 100.0, 96.0, thumb), 0.0);
    assert_eq!(thumb_offset(300.0, 400.0, 100.0, 96.0, thumb), 96.0 - thumb);
    // Overscroll clamps to the end of the travel.
    assert_eq!(thumb_offset(900.0, 400.0, 100.0, 96.0, thumb), 96.0 - thumb);
}

#[test]
fn geometry_invariants_hold_over_random_inputs() {
    let mut rng = Lcg::new(0x5eed);
    for _ in 0..10_000 {
        let track = rng.gen_range_f64(0.0, 500.0);
        let content = rng.gen_range_f64(0.0, 5000.0);
        let viewport = rng.gen_range_f64(0.0, 1000.0);
        let offset = rng.gen_range_f64(-100.0, 6000.0);
        let min = rng.gen_range_f64(1.0, 60.0);

        let fraction = scroll_fraction(offset, content, viewport);
        assert!(fraction.is_finite());
        assert!((0.0..=1.0).contains(&fraction));

        let length = thumb_length(track, content, viewport, None, min);
        assert!(length.is_finite());
        if length != 0.0 {
            assert!(length >= min.min(track) - 1e-9);
            assert!(length <= track + 1e-9);
        }

        let travel = thumb_offset(offset, content, viewport, track, length);
        assert!(travel.is_finite());
        assert!(travel >= 0.0);
        assert!(travel <= (track - length).max(0.0) + 1e-9);
    }
}

#[test]
fn values_are_zero_while_unmounted() {
    let sb = Scrollbars::new(ScrollbarsOptions::new());
    assert_eq!(sb.values(), ScrollValues::default());
    assert_eq!(sb.scroll_left(), 0.0);
    assert_eq!(sb.scroll_top(), 0.0);
    assert_eq!(sb.scroll_width(), 0.0);
    assert_eq!(sb.scroll_height(), 0.0);
    assert_eq!(sb.client_width(), 0.0);
    assert_eq!(sb.client_height(), 0.0);
}

#[test]
fn values_reflect_mounted_metrics() {
    let mut sb = mounted(ScrollbarsOptions::new());
    sb.set_metrics(metrics(150.0, 75.0, 400.0, 400.0, 100.0, 100.0));
    let values = sb.values();
    assert_eq!(values.scroll_left, 150.0);
    assert_eq!(values.scroll_top, 75.0);
    assert_eq!(values.left, 0.5);
    assert_eq!(values.top, 0.25);
}

#[test]
fn setters_are_noops_while_unmounted() {
    let mut sb = Scrollbars::new(ScrollbarsOptions::new());
    assert_eq!(sb.set_scroll_top(100.0), 0.0);
    assert_eq!(sb.scroll_to_bottom(), 0.0);
    assert_eq!(sb.values(), ScrollValues::default());
}

#[test]
fn setters_clamp_to_the_scrollable_range() {
    let mut sb = mounted(ScrollbarsOptions::new());
    assert_eq!(sb.set_scroll_top(150.0), 150.0);
    assert_eq!(sb.set_scroll_top(1e9), 300.0);
    assert_eq!(sb.set_scroll_top(-5.0), 0.0);
    assert_eq!(sb.set_scroll_left(f64::NAN), 0.0);
}

#[test]
fn scroll_to_bottom_reaches_the_end() {
    let mut sb = mounted(ScrollbarsOptions::new());
    let applied = sb.scroll_to_bottom();
    assert_eq!(applied, 300.0);
    assert_eq!(sb.scroll_top(), 300.0);
    assert_eq!(sb.values().top, 1.0);

    assert_eq!(sb.scroll_to_top(), 0.0);
    assert_eq!(sb.values().top, 0.0);

    assert_eq!(sb.scroll_to_right(), 300.0);
    assert_eq!(sb.values().left, 1.0);
    assert_eq!(sb.scroll_to_left(), 0.0);
}

#[test]
fn scroll_events_fire_exactly_one_start_and_stop() {
    let starts: Arc<AtomicUsize> = Arc::new(AtomicUsize::new(0));
    let stops: Arc<AtomicUsize> = Arc::new(AtomicUsize::new(0));
    let mut sb = mounted(
        ScrollbarsOptions::new()
            .with_on_scroll_start(Some({
                let starts = Arc::clone(&starts);
                move || {
                    starts.fetch_add(1, Ordering::Relaxed);
                }
            }))
            .with_on_scroll_stop(Some({
                let stops = Arc::clone(&stops);
                move || {
                    stops.fetch_add(1, Ordering::Relaxed);
                }
            })),
    );

    let m = metrics(0.0, 10.0, 400.0, 400.0, 100.0, 100.0);
    // Events spaced under the 150ms quiet period.
    sb.handle_scroll(m, 0);
    sb.handle_scroll(m, 50);
    sb.handle_scroll(m, 100);
    assert!(sb.is_scrolling());
    assert_eq!(starts.load(Ordering::Relaxed), 1);
    assert_eq!(stops.load(Ordering::Relaxed), 0);

    sb.update_scrolling(249);
    assert!(sb.is_scrolling());
    assert_eq!(stops.load(Ordering::Relaxed), 0);

    sb.update_scrolling(250);
    assert!(!sb.is_scrolling());
    assert_eq!(starts.load(Ordering::Relaxed), 1);
    assert_eq!(stops.load(Ordering::Relaxed), 1);

    // Ticks after the stop stay quiet.
    sb.update_scrolling(400);
    assert_eq!(stops.load(Ordering::Relaxed), 1);
}

#[test]
fn scrolling_reset_delay_is_configurable() {
    let mut sb = mounted(ScrollbarsOptions::new().with_scrolling_reset_delay_ms(500));
    sb.handle_scroll(metrics(0.0, 10.0, 400.0, 400.0, 100.0, 100.0), 0);
    sb.update_scrolling(499);
    assert!(sb.is_scrolling());
    sb.update_scrolling(500);
    assert!(!sb.is_scrolling());
}

#[test]
fn handle_scroll_fires_on_scroll_per_event() {
    let calls: Arc<AtomicUsize> = Arc::new(AtomicUsize::new(0));
    let mut sb = mounted(ScrollbarsOptions::new().with_on_scroll(Some({
        let calls = Arc::clone(&calls);
        move |_: ScrollValues| {
            calls.fetch_add(1, Ordering::Relaxed);
        }
    })));
    let m = metrics(0.0, 10.0, 400.0, 400.0, 100.0, 100.0);
    sb.handle_scroll(m, 0);
    sb.handle_scroll(m, 20);
    sb.handle_scroll(m, 40);
    assert_eq!(calls.load(Ordering::Relaxed), 3);
}

#[test]
fn unmount_drops_scrolling_without_firing_stop() {
    let stops: Arc<AtomicUsize> = Arc::new(AtomicUsize::new(0));
    let mut sb = mounted(ScrollbarsOptions::new().with_on_scroll_stop(Some({
        let stops = Arc::clone(&stops);
        move || {
            stops.fetch_add(1, Ordering::Relaxed);
        }
    })));
    sb.handle_scroll(metrics(0.0, 10.0, 400.0, 400.0, 100.0, 100.0), 0);
    assert!(sb.is_scrolling());

    sb.unmount();
    assert!(!sb.is_scrolling());
    sb.update_scrolling(1000);
    assert_eq!(stops.load(Ordering::Relaxed), 0);
    assert_eq!(sb.values(), ScrollValues::default());
}

#[test]
fn update_produces_thumb_patches() {
    let mut sb = mounted(ScrollbarsOptions::new());
    sb.set_scroll_top(300.0);
    let patch = sb.update();

    let vertical = patch.thumb_vertical.unwrap();
    // ceil(100 / 400 * 96) = 24, below the 30 floor.
    assert_eq!(vertical.length, 30.0);
    assert_eq!(vertical.translate, 96.0 - 30.0);

    let horizontal = patch.thumb_horizontal.unwrap();
    assert_eq!(horizontal.length, 30.0);
    assert_eq!(horizontal.translate, 0.0);

    assert_eq!(patch.track_horizontal, None);
    assert_eq!(patch.track_vertical, None);
}

#[test]
fn update_skips_thumbs_on_overlay_scrollbar_platforms() {
    let mut sb = Scrollbars::new(ScrollbarsOptions::new());
    sb.mount(metrics(0.0, 0.0, 400.0, 400.0, 100.0, 100.0), 0.0);
    let patch = sb.update();
    assert_eq!(patch.thumb_horizontal, None);
    assert_eq!(patch.thumb_vertical, None);
}

#[test]
fn update_toggles_track_visibility_when_requested() {
    let mut sb = mounted(ScrollbarsOptions::new().with_hide_tracks_when_not_needed(true));
    // Vertical overflow only.
    sb.set_metrics(metrics(0.0, 0.0, 100.0, 400.0, 100.0, 100.0));
    let patch = sb.update();
    assert_eq!(
        patch.track_horizontal.unwrap().visibility,
        Visibility::Hidden
    );
    assert_eq!(
        patch.track_vertical.unwrap().visibility,
        Visibility::Visible
    );
}

#[test]
fn update_fires_on_update_once_per_call() {
    let calls: Arc<AtomicUsize> = Arc::new(AtomicUsize::new(0));
    let sb = mounted(ScrollbarsOptions::new().with_on_update(Some({
        let calls = Arc::clone(&calls);
        move |_: ScrollValues| {
            calls.fetch_add(1, Ordering::Relaxed);
        }
    })));
    sb.update();
    assert_eq!(calls.load(Ordering::Relaxed), 1);
    sb.update();
    assert_eq!(calls.load(Ordering::Relaxed), 2);
}

#[test]
fn thumb_geometry_is_zero_without_track_measurements() {
    let mut sb = Scrollbars::new(ScrollbarsOptions::new());
    sb.mount(metrics(0.0, 0.0, 400.0, 400.0, 100.0, 100.0), 17.0);
    assert_eq!(sb.thumb_geometry(Axis::Vertical), ThumbGeometry::default());
}

#[test]
fn render_applies_default_track_decoration() {
    let sb = mounted(ScrollbarsOptions::new());
    let tree = sb.render();

    assert_eq!(tree.container.tag, "div");
    assert_eq!(tree.container.style.position, Some(Position::Relative));
    assert_eq!(tree.container.style.overflow, Some(Overflow::Hidden));

    let track = &tree.track_vertical.style;
    assert_eq!(track.right, Some(2.0));
    assert_eq!(track.top, Some(2.0));
    assert_eq!(track.bottom, Some(2.0));
    assert_eq!(track.border_radius, Some(3.0));
    assert_eq!(track.width, Some(Dimension::Px(6.0)));
    assert!(!track.display_none);

    let thumb = &tree.thumb_vertical.style;
    assert!(thumb.cursor_pointer);
    assert_eq!(thumb.background, Some(Rgba::new(0, 0, 0, 0.2)));
}

#[test]
fn render_hooks_substitute_independently() {
    let sb = mounted(ScrollbarsOptions::new().with_render_thumb_vertical(|style| {
        Element::new("span", style)
    }));
    let tree = sb.render();
    assert_eq!(tree.thumb_vertical.tag, "span");
    // The other elements keep their defaults.
    assert_eq!(tree.thumb_horizontal.tag, "div");
    assert_eq!(tree.track_vertical.tag, "div");
}

#[test]
fn container_tag_is_configurable() {
    let sb = mounted(ScrollbarsOptions::new().with_tag_name("section"));
    assert_eq!(sb.render().container.tag, "section");
}

#[test]
fn view_style_compensates_for_the_native_scrollbar() {
    let sb = mounted(ScrollbarsOptions::new());
    let style = sb.view_style();
    assert_eq!(style.position, Some(Position::Absolute));
    assert_eq!(style.overflow, Some(Overflow::Scroll));
    assert_eq!(style.margin_right, Some(-17.0));
    assert_eq!(style.margin_bottom, Some(-17.0));
}

#[test]
fn auto_height_bounds_the_view() {
    let sb = mounted(
        ScrollbarsOptions::new()
            .with_auto_height(true)
            .with_auto_height_bounds(50.0, 300.0),
    );

    let container = sb.container_style();
    assert_eq!(container.height, Some(Dimension::Auto));
    assert_eq!(container.min_height, Some(50.0));
    assert_eq!(container.max_height, Some(300.0));

    let view = sb.view_style();
    assert_eq!(view.position, Some(Position::Relative));
    assert_eq!(view.top, None);
    assert_eq!(view.min_height, Some(50.0 + 17.0));
    assert_eq!(view.max_height, Some(300.0 + 17.0));
}

#[test]
fn universal_mode_defers_scrollbar_width_layout() {
    let mut sb = Scrollbars::new(
        ScrollbarsOptions::new()
            .with_universal(true)
            .with_auto_height(true)
            .with_auto_height_bounds(50.0, 300.0),
    );

    // Pre-mount: server and client markup must agree, so nothing depends on
    // the measured scrollbar width.
    let view = sb.view_style();
    assert_eq!(view.overflow, Some(Overflow::Hidden));
    assert_eq!(view.margin_right, Some(0.0));
    assert_eq!(view.margin_bottom, Some(0.0));
    assert_eq!(view.min_height, Some(50.0));
    assert_eq!(view.max_height, Some(300.0));
    assert!(sb.track_vertical_style().display_none);
    assert!(sb.track_horizontal_style().display_none);

    sb.mount(metrics(0.0, 0.0, 400.0, 400.0, 100.0, 100.0), 17.0);
    let view = sb.view_style();
    assert_eq!(view.overflow, Some(Overflow::Scroll));
    assert_eq!(view.margin_right, Some(-17.0));
    assert_eq!(view.min_height, Some(67.0));
    assert!(!sb.track_vertical_style().display_none);
}

#[test]
fn tracks_hide_when_the_platform_draws_overlay_scrollbars() {
    let mut sb = Scrollbars::new(ScrollbarsOptions::new());
    sb.mount(metrics(0.0, 0.0, 400.0, 400.0, 100.0, 100.0), 0.0);
    assert!(sb.track_vertical_style().display_none);
    let view = sb.view_style();
    assert_eq!(view.margin_right, Some(0.0));
    assert_eq!(view.margin_bottom, Some(0.0));
}

#[test]
fn auto_hide_tracks_carry_the_fade_transition() {
    let sb = mounted(
        ScrollbarsOptions::new()
            .with_auto_hide(true)
            .with_auto_hide_duration_ms(350),
    );
    let style = sb.track_vertical_style();
    assert_eq!(style.transition_ms, Some(350));
    assert_eq!(style.opacity, Some(1.0));

    let plain = mounted(ScrollbarsOptions::new());
    assert_eq!(plain.track_vertical_style().transition_ms, None);
    assert_eq!(plain.track_vertical_style().opacity, None);
}

#[test]
fn element_tree_applies_update_patches() {
    let mut sb = mounted(ScrollbarsOptions::new());
    sb.set_scroll_top(300.0);
    let mut tree = sb.render();
    let patch = sb.update();
    tree.apply(&patch);

    assert_eq!(tree.thumb_vertical.style.height, Some(Dimension::Px(30.0)));
    assert_eq!(tree.thumb_vertical.style.translate_y, Some(66.0));
    assert_eq!(tree.thumb_horizontal.style.width, Some(Dimension::Px(30.0)));
    assert_eq!(tree.thumb_horizontal.style.translate_x, Some(0.0));
}

#[test]
fn update_options_keeps_unrelated_fields() {
    let mut sb = mounted(ScrollbarsOptions::new().with_thumb_min_size(20.0));
    sb.update_options(|o| o.auto_hide = true);
    assert!(sb.options().auto_hide);
    assert_eq!(sb.options().thumb_min_size, 20.0);
}

#[test]
fn options_debug_skips_closures() {
    let options = ScrollbarsOptions::new().with_on_update(Some(|_: ScrollValues| {}));
    let debug = format!("{options:?}");
    assert!(debug.contains("ScrollbarsOptions"));
    assert!(debug.contains(".."));
}
