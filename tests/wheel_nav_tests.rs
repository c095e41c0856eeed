use approx::assert_abs_diff_eq;
use traceview_rs::api::{ViewportController, ViewportControllerConfig, WheelAction};
use traceview_rs::core::{CommittedRange, PreviewSelection};
use traceview_rs::interaction::{NavigationKeys, WheelDeltaMode, WheelEvent};
use traceview_rs::schedule::ManualFrames;

fn build_controller() -> ViewportController<ManualFrames> {
    let committed = CommittedRange::new(0.0, 1000.0).expect("valid range");
    let config = ViewportControllerConfig::new(1e-4);
    let mut controller =
        ViewportController::new(ManualFrames::new(), committed, config).expect("controller init");
    controller
        .set_container_size(800.0, 300.0)
        .expect("container size");
    controller.set_content_height(900.0);
    controller
}

fn flush(controller: &mut ViewportController<ManualFrames>) {
    let _ = controller.on_animation_frame(0.0, NavigationKeys::none());
}

fn wheel(delta_x: f64, delta_y: f64, ctrl: bool) -> WheelEvent {
    WheelEvent {
        delta_x,
        delta_y,
        delta_mode: WheelDeltaMode::Pixel,
        ctrl_key: ctrl,
        shift_key: false,
        offset_x: 400.0,
        offset_y: 100.0,
    }
}

#[test]
fn ctrl_wheel_up_zooms_in_around_pointer() {
    let mut controller = build_controller();
    let outcome = controller.handle_wheel(wheel(0.0, -120.0, true));
    assert!(outcome.default_prevented);
    assert_eq!(outcome.action, WheelAction::Zoom);

    flush(&mut controller);
    let viewport = controller.horizontal_viewport();
    assert!(viewport.length() < 1.0);
    assert!(controller.preview_selection().is_modifying());

    // The pointer sat at the container midpoint, so the viewport center
    // held still.
    let center_unit = viewport.left() + 0.5 * viewport.length();
    assert_abs_diff_eq!(center_unit, 0.5, epsilon = 1e-9);
}

#[test]
fn ctrl_wheel_down_zooms_back_out() {
    let mut controller = build_controller();
    let _ = controller.handle_wheel(wheel(0.0, -240.0, true));
    flush(&mut controller);
    let zoomed_in = controller.horizontal_viewport().length();

    // Overshooting the zoom-out clamps the viewport back to full.
    let _ = controller.handle_wheel(wheel(0.0, 480.0, true));
    flush(&mut controller);
    let zoomed_out = controller.horizontal_viewport().length();
    assert!(zoomed_out > zoomed_in);
    assert_abs_diff_eq!(zoomed_out, 1.0, epsilon = 1e-12);
    assert_eq!(controller.preview_selection(), PreviewSelection::NoSelection);
}

#[test]
fn horizontal_delta_drives_zoom_when_vertical_is_zero() {
    let mut controller = build_controller();
    let outcome = controller.handle_wheel(wheel(-120.0, 0.0, true));
    assert_eq!(outcome.action, WheelAction::Zoom);
    flush(&mut controller);
    assert!(controller.horizontal_viewport().length() < 1.0);
}

#[test]
fn unmodified_wheel_pans_vertically() {
    let mut controller = build_controller();
    let outcome = controller.handle_wheel(wheel(0.0, 50.0, false));
    assert!(outcome.default_prevented);
    assert_eq!(outcome.action, WheelAction::Pan);

    let vertical = controller.vertical_viewport();
    assert_eq!(vertical.top(), 50.0);
    assert_eq!(vertical.height(), 300.0);
}

#[test]
fn noop_wheel_still_prevents_default() {
    let mut controller = build_controller();
    let outcome = controller.handle_wheel(wheel(0.0, 0.0, true));
    assert!(outcome.default_prevented);
    assert_eq!(outcome.action, WheelAction::None);

    let outcome = controller.handle_wheel(wheel(0.0, 0.0, false));
    assert!(outcome.default_prevented);
    assert_eq!(outcome.action, WheelAction::None);
}

#[test]
fn line_mode_deltas_are_normalized() {
    let mut controller = build_controller();
    let event = WheelEvent {
        delta_mode: WheelDeltaMode::Line,
        ..wheel(0.0, -3.0, true)
    };
    let _ = controller.handle_wheel(event);
    flush(&mut controller);

    let mut pixel_controller = build_controller();
    let _ = pixel_controller.handle_wheel(wheel(0.0, -48.0, true));
    flush(&mut pixel_controller);

    assert_abs_diff_eq!(
        controller.horizontal_viewport().length(),
        pixel_controller.horizontal_viewport().length(),
        epsilon = 1e-12
    );
}

#[test]
fn wheel_idle_settles_the_selection() {
    let mut controller = build_controller();
    let _ = controller.handle_wheel(wheel(0.0, -120.0, true));

    flush(&mut controller);
    assert!(controller.preview_selection().is_modifying());
    flush(&mut controller);
    assert!(controller.preview_selection().is_modifying());
    flush(&mut controller);
    assert!(!controller.preview_selection().is_modifying());
    assert!(controller.preview_selection().has_selection());
}

#[test]
fn new_wheel_event_supersedes_pending_settle() {
    let mut controller = build_controller();
    let _ = controller.handle_wheel(wheel(0.0, -120.0, true));
    flush(&mut controller);
    flush(&mut controller);

    // One frame before settling, another wheel event restarts the delay.
    let _ = controller.handle_wheel(wheel(0.0, -120.0, true));
    flush(&mut controller);
    flush(&mut controller);
    assert!(controller.preview_selection().is_modifying());
    flush(&mut controller);
    assert!(!controller.preview_selection().is_modifying());
}
