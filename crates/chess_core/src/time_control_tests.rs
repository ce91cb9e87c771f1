use super::*;
use std::thread;

#[test]
fn test_unlimited_clock_never_expires() {
    let clock = Clock::unlimited();
    thread::sleep(Duration::from_millis(5));
    assert!(clock.remaining().is_none());
    assert!(!clock.is_expired());
    assert!(clock.elapsed() >= Duration::from_millis(5));
}

#[test]
fn test_clock_with_budget() {
    let clock = Clock::new(Some(Duration::from_secs(60)));
    assert_eq!(clock.budget(), Some(Duration::from_secs(60)));
    let remaining = clock.remaining().unwrap();
    assert!(remaining <= Duration::from_secs(60));
    assert!(!clock.is_expired());
}

#[test]
fn test_clock_expiry() {
    let clock = Clock::new(Some(Duration::from_millis(10)));
    thread::sleep(Duration::from_millis(20));
    assert_eq!(clock.remaining(), Some(Duration::ZERO));
    assert!(clock.is_expired());
}
