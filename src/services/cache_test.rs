use time::Month;

use super::*;

fn day(d: u8) -> Date {
    Date::from_calendar_date(2026, Month::October, d).unwrap()
}

fn tip(title: &str) -> StructuredTip {
    let mut tip = StructuredTip::skeleton("Daily");
    tip.title = title.to_string();
    tip
}

#[test]
fn empty_cache_misses() {
    let cache = DailyTipCache::new();
    assert!(cache.get(day(16)).is_none());
    assert!(cache.cached_date().is_none());
}

#[test]
fn same_day_hits() {
    let cache = DailyTipCache::new();
    cache.put(day(16), tip("A"));
    assert_eq!(cache.get(day(16)).unwrap().title, "A");
    assert_eq!(cache.cached_date(), Some(day(16)));
}

#[test]
fn other_day_misses_without_evicting() {
    let cache = DailyTipCache::new();
    cache.put(day(16), tip("A"));
    assert!(cache.get(day(17)).is_none());
    assert!(cache.get(day(15)).is_none());
    assert_eq!(cache.cached_date(), Some(day(16)));
}

#[test]
fn put_overwrites_unconditionally() {
    let cache = DailyTipCache::new();
    cache.put(day(16), tip("A"));
    cache.put(day(17), tip("B"));
    assert!(cache.get(day(16)).is_none());
    assert_eq!(cache.get(day(17)).unwrap().title, "B");

    cache.put(day(17), tip("C"));
    assert_eq!(cache.get(day(17)).unwrap().title, "C");
}

#[test]
fn today_utc_is_stable_within_a_call_pair() {
    let a = today_utc();
    let b = today_utc();
    assert!(b >= a);
}
