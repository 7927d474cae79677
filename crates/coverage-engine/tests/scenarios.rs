//! End-to-end item sequences for representative schedules.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;
use coverage_engine::{
    build_items, BoundaryKind, DayCoverage, GapKind, OutputItem, Shift, Window,
};

fn utc(d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, d, h, 0, 0).single().unwrap()
}

fn date(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, d).unwrap()
}

/// A compact, comparable view of an item.
fn outline(item: &OutputItem) -> String {
    match item {
        OutputItem::DayHeader { date } => format!("day {date}"),
        OutputItem::BoundaryAlert { kind, time } => {
            format!("{kind:?} {}", time.format("%d %H:%M"))
        }
        OutputItem::GapAlert { kind, from, to } => format!(
            "gap {kind:?} {} - {}",
            from.format("%d %H:%M"),
            to.format("%d %H:%M")
        ),
        OutputItem::NoCoverage { .. } => "no coverage".to_string(),
        OutputItem::ShiftEntry {
            shift,
            day_label,
            removable,
            ..
        } => format!(
            "shift {} '{}' removable={} valid={}",
            shift.shift.id, day_label, removable, shift.valid
        ),
    }
}

#[test]
fn test_two_shifts_over_two_days() {
    let window = Window::new(utc(1, 9), utc(2, 17), Tz::UTC).unwrap();
    let shifts = vec![
        Shift::new("S1", "alice", utc(1, 9), utc(1, 12)).unwrap(),
        Shift::new("S2", "bob", utc(1, 14), utc(1, 18)).unwrap(),
    ];

    let items = build_items(&window, &shifts).unwrap();
    let lines: Vec<String> = items.iter().map(outline).collect();
    assert_eq!(
        lines,
        vec![
            "day 2026-01-01",
            "Start 01 09:00",
            "shift S1 '09:00 to 12:00' removable=true valid=true",
            "gap Between 01 12:00 - 01 14:00",
            "shift S2 '14:00 to 18:00' removable=true valid=true",
            "gap PostLast 01 18:00 - 02 00:00",
            "day 2026-01-02",
            "gap WholeDay 02 00:00 - 02 17:00",
            "End 02 17:00",
        ]
    );
}

#[test]
fn test_empty_single_day_window() {
    let window = Window::new(utc(1, 9), utc(1, 17), Tz::UTC).unwrap();

    let items = build_items(&window, &[]).unwrap();
    assert_eq!(
        items,
        vec![
            OutputItem::DayHeader { date: date(1) },
            OutputItem::BoundaryAlert {
                kind: BoundaryKind::Start,
                time: utc(1, 9),
            },
            OutputItem::NoCoverage {
                from: utc(1, 9),
                to: utc(1, 17),
            },
            OutputItem::BoundaryAlert {
                kind: BoundaryKind::End,
                time: utc(1, 17),
            },
        ]
    );
}

#[test]
fn test_shift_starting_before_window_is_flagged_but_shown() {
    let window = Window::new(utc(1, 9), utc(1, 17), Tz::UTC).unwrap();
    let shifts = vec![Shift::new("early", "alice", utc(1, 8), utc(1, 13)).unwrap()];

    let items = build_items(&window, &shifts).unwrap();
    let entry = items
        .iter()
        .find_map(|item| match item {
            OutputItem::ShiftEntry {
                shift,
                coverage,
                day_label,
                removable,
            } => Some((shift, coverage, day_label, removable)),
            _ => None,
        })
        .expect("shift entry is rendered");

    let (shift, coverage, day_label, removable) = entry;
    assert!(!shift.valid);
    assert_eq!(*coverage, DayCoverage::EndsInDay);
    assert_eq!(day_label, "Until 13:00");
    assert!(*removable);

    // No pre-first gap: the shift already covers the window start.
    assert!(!items.iter().any(|item| matches!(
        item,
        OutputItem::GapAlert {
            kind: GapKind::PreFirst,
            ..
        }
    )));
}

#[test]
fn test_shifts_outside_window_on_single_day_keep_gaps_inside() {
    let window = Window::new(utc(1, 9), utc(1, 17), Tz::UTC).unwrap();
    let shifts = vec![
        Shift::new("before", "alice", utc(1, 2), utc(1, 4)).unwrap(),
        Shift::new("s", "bob", utc(1, 10), utc(1, 12)).unwrap(),
        Shift::new("after", "carol", utc(1, 20), utc(1, 22)).unwrap(),
    ];

    let items = build_items(&window, &shifts).unwrap();
    let lines: Vec<String> = items.iter().map(outline).collect();
    assert_eq!(
        lines,
        vec![
            "day 2026-01-01",
            "Start 01 09:00",
            "shift before '02:00 to 04:00' removable=true valid=false",
            "gap Between 01 09:00 - 01 10:00",
            "shift s '10:00 to 12:00' removable=true valid=true",
            "gap Between 01 12:00 - 01 17:00",
            "shift after '20:00 to 22:00' removable=true valid=false",
            "End 01 17:00",
        ]
    );
}

#[test]
fn test_shift_after_window_end_on_last_day() {
    let window = Window::new(utc(1, 9), utc(2, 17), Tz::UTC).unwrap();
    let shifts = vec![Shift::new("late", "alice", utc(2, 20), utc(2, 22)).unwrap()];

    let items = build_items(&window, &shifts).unwrap();
    let lines: Vec<String> = items.iter().map(outline).collect();
    assert_eq!(
        lines,
        vec![
            "day 2026-01-01",
            "Start 01 09:00",
            "gap WholeDay 01 09:00 - 02 00:00",
            "day 2026-01-02",
            "gap PreFirst 02 00:00 - 02 17:00",
            "shift late '20:00 to 22:00' removable=true valid=false",
            "End 02 17:00",
        ]
    );
}

#[test]
fn test_overnight_shift_across_days() {
    let window = Window::new(utc(1, 0), utc(3, 0), Tz::UTC).unwrap();
    let shifts = vec![
        Shift::new("day", "alice", utc(1, 6), utc(1, 22)).unwrap(),
        Shift::new("night", "bob", utc(1, 22), utc(2, 6)).unwrap(),
    ];

    let items = build_items(&window, &shifts).unwrap();
    let lines: Vec<String> = items.iter().map(outline).collect();
    assert_eq!(
        lines,
        vec![
            "day 2026-01-01",
            "Start 01 00:00",
            "gap PreFirst 01 00:00 - 01 06:00",
            "shift day '06:00 to 22:00' removable=true valid=true",
            "shift night 'From 22:00' removable=true valid=true",
            "day 2026-01-02",
            "shift night 'Until 06:00' removable=false valid=true",
            "gap PostLast 02 06:00 - 03 00:00",
            "End 03 00:00",
        ]
    );
}

#[test]
fn test_shift_covering_entire_day() {
    let window = Window::new(utc(1, 0), utc(4, 0), Tz::UTC).unwrap();
    let shifts = vec![Shift::new("long", "alice", utc(1, 12), utc(3, 12)).unwrap()];

    let items = build_items(&window, &shifts).unwrap();
    let labels: Vec<&str> = items
        .iter()
        .filter_map(|item| match item {
            OutputItem::ShiftEntry { day_label, .. } => Some(day_label.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(labels, vec!["From 12:00", "All day", "Until 12:00"]);
}

#[test]
fn test_days_follow_window_timezone() {
    // 22:00 UTC is already the next day in Tokyo
    let tz: Tz = "Asia/Tokyo".parse().unwrap();
    let window = Window::new(utc(1, 0), utc(1, 22), tz).unwrap();
    let shifts = vec![Shift::new("s1", "alice", utc(1, 1), utc(1, 3)).unwrap()];

    let items = build_items(&window, &shifts).unwrap();
    let dates: Vec<NaiveDate> = items
        .iter()
        .filter_map(|item| match item {
            OutputItem::DayHeader { date } => Some(*date),
            _ => None,
        })
        .collect();
    assert_eq!(dates, vec![date(1), date(2)]);

    let label = items.iter().find_map(|item| match item {
        OutputItem::ShiftEntry { day_label, .. } => Some(day_label.clone()),
        _ => None,
    });
    assert_eq!(label.as_deref(), Some("10:00 to 12:00"));
}
