use traceview_rs::api::{CanvasSurface, CanvasSurfaceConfig, ChartAdapter};
use traceview_rs::core::{HitRegion, HitRegionList};
use traceview_rs::interaction::{HoverState, PointerButton};
use traceview_rs::render::{DrawScale, HoverDelta, NullCanvas};

/// One row of fixed boxes: item 1 at x 10..30, item 2 at x 40..60.
struct RowAdapter {
    regions: HitRegionList<u32>,
    sticky: bool,
    selections: Vec<Option<u32>>,
    right_clicks: Vec<Option<u32>>,
    double_clicks: Vec<u32>,
}

impl RowAdapter {
    fn new(sticky: bool) -> Self {
        let mut regions = HitRegionList::new();
        regions.push(HitRegion::new(10.0, 0.0, 20.0, 16.0, 1));
        regions.push(HitRegion::new(40.0, 0.0, 20.0, 16.0, 2));
        Self {
            regions,
            sticky,
            selections: Vec::new(),
            right_clicks: Vec::new(),
            double_clicks: Vec::new(),
        }
    }
}

impl ChartAdapter<NullCanvas> for RowAdapter {
    type Item = u32;

    fn draw(&mut self, _canvas: &mut NullCanvas, _scale: DrawScale, _hover: HoverDelta<u32>) {}

    fn hit_test(&self, x_css: f64, y_css: f64) -> Option<u32> {
        self.regions.hit_test(x_css, y_css)
    }

    fn supports_sticky_tooltips(&self) -> bool {
        self.sticky
    }

    fn hovered_item_info(&self, item: u32) -> Option<String> {
        Some(format!("box {item}"))
    }

    fn on_select_item(&mut self, item: Option<u32>) {
        self.selections.push(item);
    }

    fn on_right_click(&mut self, item: Option<u32>) {
        self.right_clicks.push(item);
    }

    fn on_double_click_item(&mut self, item: u32) {
        self.double_clicks.push(item);
    }
}

fn build_surface(sticky: bool) -> CanvasSurface<RowAdapter, NullCanvas> {
    let config = CanvasSurfaceConfig::new().with_draw_immediately(true);
    let mut surface = CanvasSurface::new(RowAdapter::new(sticky), NullCanvas::new(), config);
    surface
        .notify_resize(200.0, 100.0, 1.0)
        .expect("surface resize");
    surface
}

#[test]
fn pointer_over_box_hovers_and_shows_tooltip() {
    let mut surface = build_surface(false);
    surface.pointer_move(15.0, 8.0);

    assert_eq!(surface.hover_state(), HoverState::Hovering(1));
    assert_eq!(surface.hovered_item(), Some(1));
    let tooltip = surface.tooltip().expect("tooltip for hovered item");
    assert_eq!(tooltip.content, "box 1");
    assert!(!tooltip.pinned);
}

#[test]
fn pointer_between_boxes_returns_to_idle() {
    let mut surface = build_surface(false);
    surface.pointer_move(15.0, 8.0);
    surface.pointer_move(35.0, 8.0);

    assert_eq!(surface.hover_state(), HoverState::Idle);
    assert!(surface.tooltip().is_none());
}

#[test]
fn click_below_threshold_selects_hovered_item() {
    let mut surface = build_surface(false);
    surface.pointer_move(15.0, 8.0);
    surface.pointer_down(15.0, 8.0, PointerButton::Primary);
    surface.pointer_move(17.0, 9.0);
    surface.pointer_up(17.0, 9.0, PointerButton::Primary);

    assert_eq!(surface.adapter().selections, vec![Some(1)]);
}

#[test]
fn movement_beyond_threshold_suppresses_the_click() {
    let mut surface = build_surface(false);
    surface.pointer_move(15.0, 8.0);
    surface.pointer_down(15.0, 8.0, PointerButton::Primary);
    surface.pointer_move(25.0, 8.0);
    surface.pointer_up(25.0, 8.0, PointerButton::Primary);

    assert!(surface.adapter().selections.is_empty());
}

#[test]
fn sticky_click_pins_the_tooltip() {
    let mut surface = build_surface(true);
    surface.pointer_move(15.0, 8.0);
    surface.pointer_down(15.0, 8.0, PointerButton::Primary);
    surface.pointer_up(15.0, 8.0, PointerButton::Primary);

    assert_eq!(surface.hover_state(), HoverState::Selected(1));
    let tooltip = surface.tooltip().expect("pinned tooltip");
    assert!(tooltip.pinned);
    assert_eq!((tooltip.x, tooltip.y), (15.0, 8.0));

    // The live highlight keeps following the pointer, the tooltip does not.
    surface.pointer_move(45.0, 8.0);
    assert_eq!(surface.hover_state(), HoverState::Selected(1));
    assert_eq!(surface.hovered_item(), Some(2));
    let tooltip = surface.tooltip().expect("tooltip stays pinned");
    assert_eq!((tooltip.x, tooltip.y), (15.0, 8.0));
    assert_eq!(tooltip.content, "box 1");
}

#[test]
fn click_on_empty_space_clears_sticky_selection() {
    let mut surface = build_surface(true);
    surface.pointer_move(15.0, 8.0);
    surface.pointer_down(15.0, 8.0, PointerButton::Primary);
    surface.pointer_up(15.0, 8.0, PointerButton::Primary);
    assert_eq!(surface.hover_state(), HoverState::Selected(1));

    surface.pointer_move(35.0, 8.0);
    surface.pointer_down(35.0, 8.0, PointerButton::Primary);
    surface.pointer_up(35.0, 8.0, PointerButton::Primary);

    assert_eq!(surface.adapter().selections, vec![Some(1), None]);
    assert_eq!(surface.hover_state(), HoverState::Idle);
    assert!(surface.tooltip().is_none());
}

#[test]
fn right_click_fires_immediately_without_threshold() {
    let mut surface = build_surface(false);
    surface.pointer_move(45.0, 8.0);
    surface.pointer_down(45.0, 8.0, PointerButton::Secondary);

    assert_eq!(surface.adapter().right_clicks, vec![Some(2)]);
    assert!(surface.adapter().selections.is_empty());
}

#[test]
fn double_click_reports_hovered_item() {
    let mut surface = build_surface(false);
    surface.pointer_move(15.0, 8.0);
    surface.double_click();
    assert_eq!(surface.adapter().double_clicks, vec![1]);
}

#[test]
fn pointer_leave_clears_hover() {
    let mut surface = build_surface(false);
    surface.pointer_move(15.0, 8.0);
    surface.pointer_leave();

    assert_eq!(surface.hover_state(), HoverState::Idle);
    assert!(surface.tooltip().is_none());
}

#[test]
fn persist_tooltips_keeps_hover_alive() {
    let config = CanvasSurfaceConfig::new()
        .with_draw_immediately(true)
        .with_persist_tooltips(true);
    let mut surface = CanvasSurface::new(RowAdapter::new(false), NullCanvas::new(), config);
    surface
        .notify_resize(200.0, 100.0, 1.0)
        .expect("surface resize");

    surface.pointer_move(15.0, 8.0);
    surface.pointer_move(35.0, 8.0);
    assert_eq!(surface.hover_state(), HoverState::Hovering(1));
    assert!(surface.tooltip().is_some());
}

#[test]
fn drag_transitions_through_dragging_and_back() {
    let mut surface = build_surface(false);
    surface.pointer_move(15.0, 8.0);
    surface.pointer_down(15.0, 8.0, PointerButton::Primary);
    surface.pointer_move(30.0, 8.0);
    assert_eq!(surface.hover_state(), HoverState::Dragging);

    surface.pointer_up(45.0, 8.0, PointerButton::Primary);
    assert_eq!(surface.hover_state(), HoverState::Hovering(2));
}

#[test]
fn data_swap_clears_stale_hover_before_next_draw() {
    let mut surface = build_surface(false);
    surface.pointer_move(15.0, 8.0);
    assert_eq!(surface.hover_state(), HoverState::Hovering(1));

    // The table under the chart was replaced and the box under the pointer
    // disappeared.
    surface.adapter_mut().regions.clear();
    surface.notify_data_changed();

    assert_eq!(surface.hover_state(), HoverState::Idle);
    assert!(surface.tooltip().is_none());
}

#[test]
fn data_swap_keeps_hover_that_still_matches() {
    let mut surface = build_surface(false);
    surface.pointer_move(15.0, 8.0);
    surface.notify_data_changed();
    assert_eq!(surface.hover_state(), HoverState::Hovering(1));
}
