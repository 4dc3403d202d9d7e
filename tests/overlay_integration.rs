// SPDX-License-Identifier: MPL-2.0
//! End-to-end lifecycle tests driving the overlay registry the way a host
//! application would: commands in, ticks forward, callbacks out.

use iced_sheets::overlay::{
    AlertRequest, MenuItem, MenuRequest, OverlayPhase, OverlayRegistry, PanSample, Timings,
    ToastRequest,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Advances the registry in frame-sized steps, like a real subscription.
fn run_frames(registry: &mut OverlayRegistry, total_ms: f32) {
    let mut elapsed = 0.0;
    while elapsed < total_ms {
        let step = 16.0_f32.min(total_ms - elapsed);
        registry.tick(step);
        elapsed += step;
    }
}

#[test]
fn alert_confirm_scenario_fires_confirm_exactly_once() {
    let confirms = Rc::new(Cell::new(0));
    let cancels = Rc::new(Cell::new(0));
    let confirm_sink = Rc::clone(&confirms);
    let cancel_sink = Rc::clone(&cancels);

    let mut registry = OverlayRegistry::new(Timings::default());
    registry.alert_mut().show(
        AlertRequest::new("Delete?")
            .description("This cannot be undone")
            .on_confirm(move || confirm_sink.set(confirm_sink.get() + 1))
            .on_cancel(move || cancel_sink.set(cancel_sink.get() + 1)),
    );
    registry.alert_mut().set_sheet_height(300.0);
    assert_eq!(registry.alert().phase(), OverlayPhase::Presenting);

    run_frames(&mut registry, 300.0);
    assert_eq!(registry.alert().phase(), OverlayPhase::Visible);

    registry.alert_mut().confirm();
    assert_eq!(registry.alert().phase(), OverlayPhase::Dismissing);
    assert_eq!(confirms.get(), 0);

    run_frames(&mut registry, 400.0);
    assert_eq!(registry.alert().phase(), OverlayPhase::Hidden);
    assert_eq!(confirms.get(), 1);
    assert_eq!(cancels.get(), 0);
}

#[test]
fn menu_drag_dismiss_is_a_cancel_not_a_selection() {
    let selections = Rc::new(Cell::new(0));
    let sink = Rc::clone(&selections);

    let mut registry = OverlayRegistry::new(Timings::default());
    registry.menu_mut().open_menu(
        MenuRequest::new(vec![MenuItem::new("A"), MenuItem::new("B")])
            .on_select(move |_, _| sink.set(sink.get() + 1)),
    );
    run_frames(&mut registry, 300.0);

    // Two rows give a 132-unit sheet; a 120-unit drag is well past half.
    registry.menu_mut().pan(PanSample::active(120.0));
    registry.menu_mut().pan(PanSample::end(120.0, 50.0));
    assert_eq!(registry.menu().phase(), OverlayPhase::Dismissing);

    run_frames(&mut registry, 400.0);
    assert_eq!(registry.menu().phase(), OverlayPhase::Hidden);
    assert!(!registry.menu().is_visible());
    assert_eq!(selections.get(), 0);
}

#[test]
fn overlapping_shows_only_resolve_the_most_recent_callbacks() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let first = Rc::clone(&log);
    let second = Rc::clone(&log);
    let third = Rc::clone(&log);

    let mut registry = OverlayRegistry::new(Timings::default());
    registry
        .alert_mut()
        .show(AlertRequest::new("one").on_confirm(move || first.borrow_mut().push("one")));
    registry
        .alert_mut()
        .show(AlertRequest::new("two").on_confirm(move || second.borrow_mut().push("two")));
    registry
        .alert_mut()
        .show(AlertRequest::new("three").on_confirm(move || third.borrow_mut().push("three")));
    registry.alert_mut().set_sheet_height(300.0);

    run_frames(&mut registry, 300.0);
    registry.alert_mut().confirm();
    run_frames(&mut registry, 400.0);

    assert_eq!(*log.borrow(), vec!["three"]);
}

#[test]
fn toast_lifecycle_measures_duration_from_fully_visible() {
    let done = Rc::new(Cell::new(0));
    let sink = Rc::clone(&done);

    let mut registry = OverlayRegistry::new(Timings::default());
    registry
        .toast_mut()
        .show(ToastRequest::new("Saved").on_done(move || sink.set(sink.get() + 1)));

    // Enter animation: 300 ms. Display: 1000 ms. Exit: 400 ms.
    run_frames(&mut registry, 280.0);
    assert_eq!(registry.toast().phase(), OverlayPhase::Presenting);

    run_frames(&mut registry, 20.0);
    assert_eq!(registry.toast().phase(), OverlayPhase::Visible);

    run_frames(&mut registry, 992.0);
    assert_eq!(registry.toast().phase(), OverlayPhase::Visible);

    run_frames(&mut registry, 16.0);
    assert_eq!(registry.toast().phase(), OverlayPhase::Dismissing);

    run_frames(&mut registry, 400.0);
    assert_eq!(registry.toast().phase(), OverlayPhase::Hidden);
    assert_eq!(done.get(), 1);
}

#[test]
fn back_press_routes_to_one_overlay_and_only_while_visible() {
    let mut registry = OverlayRegistry::new(Timings::default());
    assert!(!registry.back_pressed());

    registry
        .menu_mut()
        .open_menu(MenuRequest::new(vec![MenuItem::new("A")]));
    registry.alert_mut().show(AlertRequest::new("hm"));
    registry.alert_mut().set_sheet_height(200.0);
    run_frames(&mut registry, 300.0);

    // First press goes to the menu.
    assert!(registry.back_pressed());
    assert_eq!(registry.menu().phase(), OverlayPhase::Dismissing);
    assert_eq!(registry.alert().phase(), OverlayPhase::Visible);

    // Second press falls through to the alert.
    assert!(registry.back_pressed());
    assert_eq!(registry.alert().phase(), OverlayPhase::Dismissing);

    run_frames(&mut registry, 400.0);
    assert!(!registry.back_pressed());
}

#[test]
fn registry_goes_idle_after_a_full_cycle() {
    let mut registry = OverlayRegistry::new(Timings::default());
    registry.toast_mut().show(ToastRequest::new("hi"));
    assert!(registry.is_active());

    run_frames(&mut registry, 300.0 + 1000.0 + 400.0 + 64.0);
    assert!(!registry.is_active());
    assert!(!registry.any_presented());
}
