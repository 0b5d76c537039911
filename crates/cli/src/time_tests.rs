#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;

#[test]
fn test_system_clock() {
    let clock = SystemClock;
    assert!(clock.now_millis() > 0);
}

#[test]
fn test_fake_clock_starts_where_told() {
    let clock = FakeClock::new(1000);
    assert_eq!(clock.now_millis(), 1000);
    assert_eq!(FakeClock::at_epoch().now_millis(), 0);
}

#[test]
fn test_fake_clock_advance() {
    let clock = FakeClock::new(1000);
    clock.advance(Duration::from_millis(500));
    assert_eq!(clock.now_millis(), 1500);
    clock.advance_ms(250);
    assert_eq!(clock.now_millis(), 1750);
}

#[test]
fn test_fake_clock_set() {
    let clock = FakeClock::new(1000);
    clock.set(5000);
    assert_eq!(clock.now_millis(), 5000);
}

#[tokio::test]
async fn test_fake_clock_sleep_advances() {
    let clock = FakeClock::new(1000);
    clock.sleep(Duration::from_millis(500)).await;
    assert_eq!(clock.now_millis(), 1500);
}

#[test]
fn test_fake_clock_shared_state() {
    let clock1 = FakeClock::new(1000);
    let clock2 = clock1.clone();
    clock1.advance_ms(500);
    assert_eq!(clock2.now_millis(), 1500);
}

#[test]
fn test_now_utc() {
    let clock = FakeClock::new(1_700_000_000_000);
    assert_eq!(clock.now_utc().timestamp_millis(), 1_700_000_000_000);
}

#[test]
fn test_clock_handle_variants() {
    let system = ClockHandle::system();
    assert!(!system.is_fake());
    assert!(system.as_fake().is_none());

    let fake = ClockHandle::fake_at(42);
    assert!(fake.is_fake());
    assert_eq!(fake.as_fake().unwrap().now_millis(), 42);
    assert_eq!(ClockHandle::fake_at_epoch().now_millis(), 0);
}

#[tokio::test]
async fn test_clock_handle_sleep() {
    let handle = ClockHandle::fake_at(1000);
    handle.sleep(Duration::from_millis(100)).await;
    assert_eq!(handle.now_millis(), 1100);
}

#[test]
fn test_clock_handle_default_is_system() {
    assert!(!ClockHandle::default().is_fake());
}
