//! Desktop snap navigation driven through raw input.

use folio_engine::{App, Direction, RawInput, SlideAxis, Transition, WHEEL_NOTCH_PX};

use crate::common::{desktop_app, reduced_motion_config, settle};

fn wheel_down(app: &mut App) -> Option<Transition> {
    app.handle_input(RawInput::Wheel {
        delta_y: WHEEL_NOTCH_PX,
    })
}

fn wheel_up(app: &mut App) -> Option<Transition> {
    app.handle_input(RawInput::Wheel {
        delta_y: -WHEEL_NOTCH_PX,
    })
}

/// Section plus carousel item, the latter only where it means something.
fn stop(app: &App) -> (usize, Option<usize>) {
    let section = app.active_section();
    let item = app
        .deck()
        .slide(section)
        .is_horizontal()
        .then(|| app.horizontal_index());
    (section, item)
}

#[test]
fn wheel_walks_every_stop_in_order() {
    let mut app = desktop_app();
    let carousel = app.deck().first_horizontal().expect("deck has a carousel");
    let items = app.deck().horizontal_len(carousel).expect("carousel length");

    let mut expected = Vec::new();
    for section in 1..app.deck().len() {
        if section == carousel {
            expected.extend((0..items).map(|item| (section, Some(item))));
        } else {
            expected.push((section, None));
        }
    }

    let mut visited = Vec::new();
    for _ in 0..expected.len() {
        let transition = wheel_down(&mut app).expect("desktop intercepts the wheel");
        assert!(transition.is_moved());
        visited.push(stop(&app));
        settle(&mut app);
    }
    assert_eq!(visited, expected);

    assert_eq!(wheel_down(&mut app), Some(Transition::Unchanged));
    assert!(!app.is_transitioning());
}

#[test]
fn walking_back_up_revisits_the_carousel_from_its_end() {
    let mut app = desktop_app();
    let last = app.deck().last_section();
    app.navigate_to_section(last);
    settle(&mut app);

    let carousel = app.deck().first_horizontal().expect("deck has a carousel");
    let items = app.deck().horizontal_len(carousel).expect("carousel length");
    while app.active_section() > carousel {
        wheel_up(&mut app);
        settle(&mut app);
    }
    assert_eq!(stop(&app), (carousel, Some(items - 1)));

    while app.active_section() > 0 {
        wheel_up(&mut app);
        settle(&mut app);
    }
    assert_eq!(wheel_up(&mut app), Some(Transition::Unchanged));
}

#[test]
fn wheel_is_ignored_until_the_slide_lands() {
    let mut app = desktop_app();
    wheel_down(&mut app);
    assert!(app.is_transitioning());

    for _ in 0..10 {
        assert_eq!(wheel_down(&mut app), Some(Transition::Debounced));
    }
    assert_eq!(app.active_section(), 1);

    settle(&mut app);
    assert!(wheel_down(&mut app).is_some_and(Transition::is_moved));
    assert_eq!(app.active_section(), 2);
}

#[test]
fn gentle_wheel_does_nothing() {
    let mut app = desktop_app();
    let threshold = app.settings().wheel_threshold;
    assert_eq!(
        app.handle_input(RawInput::Wheel {
            delta_y: threshold / 2.0
        }),
        None
    );
    assert_eq!(app.active_section(), 0);
    assert!(!app.is_transitioning());
}

#[test]
fn long_swipe_moves_one_section() {
    let mut app = desktop_app();
    app.handle_input(RawInput::TouchStart { y: 400.0 });
    for y in [380.0, 330.0, 280.0, 200.0, 100.0] {
        app.handle_input(RawInput::TouchMove { y });
    }
    app.handle_input(RawInput::TouchEnd);
    assert_eq!(app.active_section(), 1);
}

#[test]
fn dot_rail_is_gated_and_navbar_is_not() {
    let mut app = desktop_app();
    app.handle_input(RawInput::DotClick { section: 2 });
    assert_eq!(app.active_section(), 2);

    assert_eq!(
        app.handle_input(RawInput::DotClick { section: 4 }),
        Some(Transition::Debounced)
    );

    let last = app.deck().last_section();
    assert!(app.navigate_to_section(last).is_some_and(Transition::is_moved));
    assert_eq!(app.active_section(), last);
    assert!(app.is_transitioning());
}

#[test]
fn navbar_link_into_carousel_starts_at_first_item() {
    let mut app = desktop_app();
    let carousel = app.deck().first_horizontal().expect("deck has a carousel");
    app.navigate_to_section(carousel);
    settle(&mut app);
    app.handle_input(RawInput::KeyStep(Direction::Forward));
    settle(&mut app);
    assert_eq!(app.horizontal_index(), 1);

    app.navigate_to_section(0);
    settle(&mut app);
    app.navigate_to_section(carousel);
    assert_eq!(app.horizontal_index(), 0);
}

#[test]
fn stale_animation_does_not_unlock_a_newer_move() {
    let mut app = desktop_app();
    let transition = app.settings().transition;
    wheel_down(&mut app);
    app.advance(transition / 2);

    app.navigate_to_section(4);
    app.advance(transition / 2);
    assert!(app.is_transitioning());

    app.advance(transition / 2);
    assert!(!app.is_transitioning());
}

#[test]
fn carousel_moves_slide_sideways() {
    let mut app = desktop_app();
    let carousel = app.deck().first_horizontal().expect("deck has a carousel");
    app.navigate_to_section(carousel);
    assert_eq!(
        app.transition_effect().map(folio_engine::SlideEffect::axis),
        Some(SlideAxis::Vertical)
    );
    settle(&mut app);

    wheel_down(&mut app);
    assert_eq!(
        app.transition_effect().map(folio_engine::SlideEffect::axis),
        Some(SlideAxis::Horizontal)
    );
    assert!(!app.navbar_visible());
}

#[test]
fn reduced_motion_settles_on_the_next_frame() {
    let mut app = App::new(&reduced_motion_config(), 120, 30);
    wheel_down(&mut app);
    assert!(app.is_transitioning());
    app.advance(std::time::Duration::from_millis(1));
    assert!(!app.is_transitioning());
}
