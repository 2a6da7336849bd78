//! Behavioral properties of the carousel controller.
//!
//! Time is driven explicitly through `Instant` offsets, so every test is
//! deterministic and runs without sleeping.

mod common;

use std::time::Instant;

use common::{carousel, ms};
use listick::adapters::mock::FakePlatform;
use listick::carousel::{Carousel, CarouselConfig, CarouselError, Direction, Slide};

#[test]
fn test_index_stays_in_range_and_wraps() {
    let now = Instant::now();
    let platform = FakePlatform::new();

    for n in 1..=7 {
        let mut c = carousel(n, 1000, &platform, now);

        c.previous(now);
        assert_eq!(c.index(), n - 1, "backward from 0 wraps to n-1 (n={})", n);
        c.next(now);
        assert_eq!(c.index(), 0, "forward from n-1 wraps to 0 (n={})", n);

        // A fixed pseudo-random walk
        let mut seed = 0x2545_f491_u32;
        for _ in 0..200 {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            if seed % 2 == 0 {
                c.next(now);
            } else {
                c.previous(now);
            }
            assert!(c.index() < n);
        }
    }
}

#[test]
fn test_toggle_autoplay_twice_restores_setting() {
    let now = Instant::now();
    let platform = FakePlatform::new();
    let mut c = carousel(3, 1000, &platform, now);

    let original = c.autoplay_enabled();
    c.toggle_autoplay(now);
    assert_ne!(c.autoplay_enabled(), original);
    c.toggle_autoplay(now);
    assert_eq!(c.autoplay_enabled(), original);
    assert!(c.timer().is_armed());
}

#[test]
fn test_single_slide_never_moves_or_schedules() {
    let now = Instant::now();
    let platform = FakePlatform::new();
    let mut c = carousel(1, 1000, &platform, now);

    assert!(!c.next(now));
    assert!(!c.previous(now));
    assert_eq!(c.index(), 0);
    assert!(!c.timer().is_armed());

    c.toggle_autoplay(now);
    c.toggle_autoplay(now);
    assert!(!c.timer().is_armed());

    c.tick(now + ms(10_000));
    assert_eq!(c.index(), 0);
}

#[test]
fn test_autoplay_advances_once_per_interval() {
    let now = Instant::now();
    let platform = FakePlatform::new();
    let mut c = carousel(5, 1000, &platform, now);

    c.tick(now + ms(999));
    assert_eq!(c.index(), 0);
    c.tick(now + ms(1000));
    assert_eq!(c.index(), 1);

    // Ticking every frame for three more intervals
    let mut t = 1000;
    while t < 4000 {
        t += 16;
        c.tick(now + ms(t));
    }
    assert_eq!(c.index(), 4);
}

#[test]
fn test_late_tick_catches_up_without_drift() {
    let now = Instant::now();
    let platform = FakePlatform::new();
    let mut c = carousel(10, 1000, &platform, now);

    c.tick(now + ms(3500));
    assert_eq!(c.index(), 3);

    // The schedule is still anchored to the original start
    c.tick(now + ms(3999));
    assert_eq!(c.index(), 3);
    c.tick(now + ms(4000));
    assert_eq!(c.index(), 4);
}

#[test]
fn test_hover_pause_blocks_three_intervals_then_resumes_fresh() {
    let now = Instant::now();
    let platform = FakePlatform::new();
    let mut c = carousel(4, 1000, &platform, now);

    c.tick(now + ms(400));
    c.hover_enter(now + ms(400));
    assert!(!c.is_playing());

    c.tick(now + ms(400 + 3000));
    assert_eq!(c.index(), 0);

    let resumed = now + ms(3400);
    c.hover_leave(resumed);
    c.tick(resumed);
    assert_eq!(c.index(), 0, "resume does not fire immediately");
    c.tick(resumed + ms(999));
    assert_eq!(c.index(), 0);
    c.tick(resumed + ms(1000));
    assert_eq!(c.index(), 1);
}

#[test]
fn test_hidden_tab_pause_blocks_three_intervals_then_resumes_fresh() {
    let now = Instant::now();
    let platform = FakePlatform::new();
    let mut c = carousel(4, 1000, &platform, now);

    platform.set_hidden(true);
    c.tick(now + ms(100));
    assert!(c.is_paused());

    c.tick(now + ms(100 + 3000));
    assert_eq!(c.index(), 0);

    platform.set_hidden(false);
    let resumed = now + ms(3100);
    c.tick(resumed);
    assert_eq!(c.index(), 0);
    c.tick(resumed + ms(1000));
    assert_eq!(c.index(), 1);
}

#[test]
fn test_hover_and_hidden_both_must_clear() {
    let now = Instant::now();
    let platform = FakePlatform::new();
    let mut c = carousel(3, 1000, &platform, now);

    c.hover_enter(now);
    platform.set_hidden(true);
    c.tick(now);

    c.hover_leave(now);
    assert!(c.is_paused(), "still hidden");

    platform.set_hidden(false);
    c.tick(now);
    assert!(c.is_playing());
}

#[test]
fn test_swipe_threshold() {
    let now = Instant::now();
    let platform = FakePlatform::new();
    let mut c = carousel(5, 1000, &platform, now);
    c.go_to(2, now).unwrap();

    c.pointer_down(100.0);
    assert_eq!(c.pointer_up(150.0, now), Some(Direction::Backward));
    assert_eq!(c.index(), 1);

    c.pointer_down(100.0);
    assert_eq!(c.pointer_up(130.0, now), None);
    assert_eq!(c.index(), 1);

    c.pointer_down(100.0);
    assert_eq!(c.pointer_up(40.0, now), Some(Direction::Forward));
    assert_eq!(c.index(), 2);
}

#[test]
fn test_hover_pause_scenario() {
    let t0 = Instant::now();
    let platform = FakePlatform::new();
    let config = CarouselConfig::default()
        .with_interval_ms(1000)
        .with_autoplay(true)
        .with_pause_on_hover(true);
    let mut c = Carousel::new(common::slides(3), config, &platform.ports(), t0).unwrap();
    assert_eq!(c.index(), 0);

    c.hover_enter(t0);
    c.tick(t0 + ms(2500));
    assert_eq!(c.index(), 0);

    c.hover_leave(t0 + ms(2500));
    c.tick(t0 + ms(3500));
    assert_eq!(c.index(), 1);

    c.go_to(0, t0 + ms(3500)).unwrap();
    assert_eq!(c.index(), 0);
    assert_eq!(c.direction(), Direction::Backward);
}

#[test]
fn test_reduced_motion_starts_static_and_live_change_is_one_way() {
    let now = Instant::now();
    let platform = FakePlatform::new().with_reduced_motion(true);
    let mut c = carousel(3, 1000, &platform, now);
    assert!(!c.autoplay_enabled());
    c.tick(now + ms(5000));
    assert_eq!(c.index(), 0);

    let platform = FakePlatform::new();
    let mut c = carousel(3, 1000, &platform, now);
    assert!(c.autoplay_enabled());

    platform.set_reduced_motion(true);
    c.tick(now + ms(10));
    assert!(!c.autoplay_enabled());

    platform.set_reduced_motion(false);
    c.tick(now + ms(20));
    assert!(!c.autoplay_enabled(), "clearing the preference does not re-enable");
}

#[test]
fn test_unsupported_platform_degrades_to_defaults() {
    let now = Instant::now();
    let platform = FakePlatform::unsupported();
    let mut c = carousel(3, 1000, &platform, now);

    assert!(c.autoplay_enabled());
    assert!(!c.reduced_motion());
    c.tick(now + ms(1000));
    assert_eq!(c.index(), 1);
}

#[test]
fn test_invalid_construction_is_rejected() {
    let now = Instant::now();
    let platform = FakePlatform::new();

    let empty = Carousel::new(Vec::new(), CarouselConfig::default(), &platform.ports(), now);
    assert!(matches!(empty, Err(CarouselError::NoSlides)));

    let zero = Carousel::new(
        common::slides(2),
        CarouselConfig::default().with_interval_ms(0),
        &platform.ports(),
        now,
    );
    assert!(matches!(zero, Err(CarouselError::InvalidInterval)));

    // Slides without an image are dropped, not fatal
    let mixed = vec![Slide::new(""), Slide::new("a.png"), Slide::new("  ")];
    let c = Carousel::new(mixed, CarouselConfig::default(), &platform.ports(), now).unwrap();
    assert_eq!(c.len(), 1);
}

#[test]
fn test_unmount_releases_listeners() {
    let now = Instant::now();
    let platform = FakePlatform::new();
    let c = carousel(3, 1000, &platform, now);
    assert_eq!(platform.listener_count(), 2);
    drop(c);
    assert_eq!(platform.listener_count(), 0);
}

#[test]
fn test_mounting_while_hidden_starts_paused() {
    let now = Instant::now();
    let platform = FakePlatform::new().with_hidden(true);
    let mut c = carousel(3, 1000, &platform, now);

    assert!(c.autoplay_enabled());
    assert!(c.is_paused());
    assert!(!c.timer().is_armed());
    c.tick(now + ms(5000));
    assert_eq!(c.index(), 0);

    platform.set_hidden(false);
    c.tick(now + ms(5000));
    c.tick(now + ms(6000));
    assert_eq!(c.index(), 1);
}
