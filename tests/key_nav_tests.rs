use approx::assert_abs_diff_eq;
use traceview_rs::api::{ViewportController, ViewportControllerConfig};
use traceview_rs::core::{CommittedRange, PreviewSelection};
use traceview_rs::interaction::NavigationKeys;
use traceview_rs::schedule::ManualFrames;

fn build_controller() -> ViewportController<ManualFrames> {
    let committed = CommittedRange::new(0.0, 1000.0).expect("valid range");
    let config = ViewportControllerConfig::new(1e-4);
    let mut controller =
        ViewportController::new(ManualFrames::new(), committed, config).expect("controller init");
    controller
        .set_container_size(800.0, 300.0)
        .expect("container size");
    controller
}

fn zoom_in_keys() -> NavigationKeys {
    NavigationKeys {
        zoom_in: true,
        ..NavigationKeys::none()
    }
}

#[test]
fn held_zoom_key_shrinks_viewport_over_frames() {
    let mut controller = build_controller();
    let _ = controller.on_animation_frame(0.0, zoom_in_keys());
    let _ = controller.on_animation_frame(16.0, zoom_in_keys());
    let _ = controller.on_animation_frame(32.0, zoom_in_keys());

    assert!(controller.horizontal_viewport().length() < 1.0);
    assert!(controller.preview_selection().is_modifying());
}

#[test]
fn frame_delta_is_capped_after_a_jank_pause() {
    let mut paused = build_controller();
    let _ = paused.on_animation_frame(0.0, zoom_in_keys());
    let _ = paused.on_animation_frame(10_000.0, zoom_in_keys());
    let _ = paused.on_animation_frame(10_000.0, NavigationKeys::none());

    // 300ms at the default speed reaches the same per-frame cap.
    let mut steady = build_controller();
    let _ = steady.on_animation_frame(0.0, zoom_in_keys());
    let _ = steady.on_animation_frame(300.0, zoom_in_keys());
    let _ = steady.on_animation_frame(300.0, NavigationKeys::none());

    assert_abs_diff_eq!(
        paused.horizontal_viewport().length(),
        steady.horizontal_viewport().length(),
        epsilon = 1e-12
    );
}

#[test]
fn releasing_keys_settles_and_stops_requesting_frames() {
    let mut controller = build_controller();
    let _ = controller.on_animation_frame(0.0, zoom_in_keys());
    let _ = controller.on_animation_frame(16.0, zoom_in_keys());
    let _ = controller.on_animation_frame(32.0, NavigationKeys::none());
    // One more flush applies the transform queued on the last held frame.
    let _ = controller.on_animation_frame(48.0, NavigationKeys::none());

    assert!(controller.preview_selection().has_selection());
    assert!(!controller.preview_selection().is_modifying());

    let requests_after_release = controller.frame_requester().request_count;
    let _ = controller.on_animation_frame(64.0, NavigationKeys::none());
    assert_eq!(
        controller.frame_requester().request_count,
        requests_after_release
    );
}

#[test]
fn left_key_moves_viewport_toward_range_start() {
    let mut controller = build_controller();
    controller.replace_preview_selection(PreviewSelection::range(400.0, 600.0, false));
    let before = controller.horizontal_viewport();

    let keys = NavigationKeys {
        left: true,
        ..NavigationKeys::none()
    };
    let _ = controller.on_animation_frame(0.0, keys);
    let _ = controller.on_animation_frame(16.0, keys);
    let _ = controller.on_animation_frame(32.0, NavigationKeys::none());

    let after = controller.horizontal_viewport();
    assert!(after.left() < before.left());
    assert_abs_diff_eq!(after.length(), before.length(), epsilon = 1e-12);
}

#[test]
fn vertical_keys_scroll_content() {
    let mut controller = build_controller();
    controller.set_content_height(900.0);

    let keys = NavigationKeys {
        down: true,
        ..NavigationKeys::none()
    };
    let _ = controller.on_animation_frame(0.0, keys);
    let _ = controller.on_animation_frame(16.0, keys);

    assert!(controller.vertical_viewport().top() > 0.0);
}
