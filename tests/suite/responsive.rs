//! Switching between snap navigation and native scrolling.

use folio_engine::{Direction, RawInput, ResponsiveMode, WHEEL_NOTCH_PX};

use crate::common::{DESKTOP, MOBILE, desktop_app, mobile_app, settle};

#[test]
fn breakpoint_picks_the_mode() {
    assert_eq!(desktop_app().responsive_mode(), ResponsiveMode::Desktop);
    assert_eq!(mobile_app().responsive_mode(), ResponsiveMode::Mobile);
}

#[test]
fn mobile_wheel_scrolls_rows_instead_of_sections() {
    let mut app = mobile_app();
    let cell = app.settings().cell_height_px as f32;

    for _ in 0..4 {
        assert_eq!(
            app.handle_input(RawInput::Wheel {
                delta_y: WHEEL_NOTCH_PX
            }),
            None
        );
    }
    assert_eq!(app.native_scroll().offset(), 4 * (WHEEL_NOTCH_PX / cell) as u32);
    assert_eq!(app.active_section(), 0);
    assert!(!app.is_transitioning());
    assert!(app.transition_effect().is_none());
}

#[test]
fn mobile_ignores_the_dot_rail_but_follows_links() {
    let mut app = mobile_app();
    app.handle_input(RawInput::DotClick { section: 3 });
    assert_eq!(app.native_scroll().offset(), 0);

    let last = app.deck().last_section();
    app.navigate_to_section(last);
    let rows = u32::from(app.native_scroll().page_rows());
    let anchor = app.deck().anchor_page(last) as u32;
    assert_eq!(app.native_scroll().offset(), anchor * rows);
    assert_eq!(app.visible_section(), last);
}

#[test]
fn mobile_page_keys_scroll_a_page() {
    let mut app = mobile_app();
    app.handle_input(RawInput::KeyPage(Direction::Forward));
    app.handle_input(RawInput::KeyPage(Direction::Forward));
    assert_eq!(app.native_scroll().current_page(), 2);

    app.handle_input(RawInput::KeyPage(Direction::Backward));
    assert_eq!(app.native_scroll().current_page(), 1);
}

#[test]
fn mobile_scroll_stops_at_the_end() {
    let mut app = mobile_app();
    for _ in 0..50 {
        app.handle_input(RawInput::KeyPage(Direction::Forward));
    }
    assert_eq!(app.native_scroll().offset(), app.native_scroll().max_offset());
    assert_eq!(app.visible_section(), app.deck().last_section());
}

#[test]
fn shrinking_mid_carousel_keeps_the_same_panel_in_view() {
    let mut app = desktop_app();
    let carousel = app.deck().first_horizontal().expect("deck has a carousel");
    app.navigate_to_section(carousel);
    settle(&mut app);
    app.handle_input(RawInput::KeyStep(Direction::Forward));
    settle(&mut app);
    app.handle_input(RawInput::KeyStep(Direction::Forward));
    assert!(app.is_transitioning());

    app.resize(MOBILE.0, MOBILE.1);
    assert!(app.responsive_mode().is_mobile());
    assert!(!app.is_transitioning());
    assert!(app.transition_effect().is_none());

    let page = app.deck().anchor_page(carousel) + 2;
    assert_eq!(app.native_scroll().current_page(), page);
    assert_eq!(app.visible_section(), carousel);
}

#[test]
fn growing_back_resumes_snap_navigation() {
    let mut app = desktop_app();
    app.navigate_to_section(2);
    settle(&mut app);

    app.resize(MOBILE.0, MOBILE.1);
    app.handle_input(RawInput::KeyPage(Direction::Forward));
    app.resize(DESKTOP.0, DESKTOP.1);

    assert_eq!(app.responsive_mode(), ResponsiveMode::Desktop);
    assert_eq!(app.active_section(), 2);
    assert!(!app.is_transitioning());

    app.handle_input(RawInput::KeyStep(Direction::Forward));
    assert_eq!(app.active_section(), 3);
}

#[test]
fn height_change_keeps_the_current_page() {
    let mut app = mobile_app();
    app.handle_input(RawInput::KeyPage(Direction::Forward));
    app.handle_input(RawInput::KeyPage(Direction::Forward));
    app.handle_input(RawInput::KeyPage(Direction::Forward));

    app.resize(MOBILE.0, 20);
    assert_eq!(app.native_scroll().page_rows(), 20);
    assert_eq!(app.native_scroll().current_page(), 3);
}
