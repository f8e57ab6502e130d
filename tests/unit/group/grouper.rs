use chrono::TimeZone;

use super::*;

const DAY_MS: i64 = 86_400_000;
// 2024-01-01T00:00:00Z
const JAN_1: i64 = 1_704_067_200_000;

fn utc() -> DayBoundary {
    DayBoundary::Fixed(FixedOffset::east_opt(0).unwrap())
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn empty_input_yields_no_groups() {
    assert!(group_records(&[], utc()).unwrap().is_empty());
}

#[test]
fn same_day_records_share_a_group_in_input_order() {
    let records = vec![
        ObservationRecord::new(JAN_1 + 5_000, 2, Some("hand_wash")),
        ObservationRecord::new(JAN_1 + 1_000, 1, Some("hand_sanitizer")),
    ];
    let groups = group_records(&records, utc()).unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].session_number, 1);
    assert_eq!(groups[0].date, date(2024, 1, 1));
    assert_eq!(groups[0].records, vec![&records[0], &records[1]]);
}

#[test]
fn sessions_are_numbered_by_date_not_input_order() {
    let records = vec![
        ObservationRecord::new(JAN_1 + 2 * DAY_MS, 1, None),
        ObservationRecord::new(JAN_1, 1, None),
        ObservationRecord::new(JAN_1 + DAY_MS, 1, None),
    ];
    let groups = group_records(&records, utc()).unwrap();
    let dates: Vec<_> = groups.iter().map(|g| (g.session_number, g.date)).collect();
    assert_eq!(
        dates,
        vec![
            (1, date(2024, 1, 1)),
            (2, date(2024, 1, 2)),
            (3, date(2024, 1, 3)),
        ]
    );
}

#[test]
fn keeps_only_the_eight_earliest_dates() {
    // Input in reverse chronological order: the cap must follow sort order, not input order.
    let records: Vec<_> = (0..9)
        .rev()
        .map(|d| ObservationRecord::new(JAN_1 + d * DAY_MS, 1, None))
        .collect();
    let groups = group_records(&records, utc()).unwrap();
    assert_eq!(groups.len(), MAX_SESSIONS);
    assert_eq!(groups[0].date, date(2024, 1, 1));
    assert_eq!(groups[7].date, date(2024, 1, 8));
    assert!(groups.iter().all(|g| g.date != date(2024, 1, 9)));
}

#[test]
fn day_boundary_follows_offset() {
    // 2024-01-01T23:30:00Z is already Jan 2 at UTC+9.
    let ts = JAN_1 + DAY_MS - 30 * 60 * 1000;
    assert_eq!(utc().date_key(ts).unwrap(), date(2024, 1, 1));
    let jst = DayBoundary::Fixed(FixedOffset::east_opt(9 * 3600).unwrap());
    assert_eq!(jst.date_key(ts).unwrap(), date(2024, 1, 2));
}

fn local_midnight_ms(d: NaiveDate) -> i64 {
    chrono::Local
        .from_local_datetime(&d.and_hms_opt(0, 0, 0).unwrap())
        .earliest()
        .unwrap()
        .timestamp_millis()
}

#[test]
fn local_boundary_matches_system_zone() {
    let midnight = local_midnight_ms(date(2024, 6, 15));
    for ts in [midnight - 1, midnight, midnight + 1, JAN_1 - 1, JAN_1, 0] {
        let expected = DateTime::from_timestamp_millis(ts)
            .unwrap()
            .with_timezone(&chrono::Local)
            .date_naive();
        assert_eq!(DayBoundary::Local.date_key(ts).unwrap(), expected);
    }
    assert_eq!(DayBoundary::Local.date_key(midnight).unwrap(), date(2024, 6, 15));
    assert_eq!(
        DayBoundary::Local.date_key(midnight - 1).unwrap(),
        date(2024, 6, 14)
    );
}

#[test]
fn local_groups_split_at_local_midnight() {
    let midnight = local_midnight_ms(date(2024, 6, 15));
    let records = vec![
        ObservationRecord::new(midnight + 1, 1, None),
        ObservationRecord::new(midnight - 1, 1, None),
        ObservationRecord::new(midnight, 2, None),
    ];
    let groups = group_records(&records, DayBoundary::default()).unwrap();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].date, date(2024, 6, 14));
    assert_eq!(groups[0].records, vec![&records[1]]);
    assert_eq!(groups[1].date, date(2024, 6, 15));
    assert_eq!(groups[1].records, vec![&records[0], &records[2]]);
}

#[test]
fn negative_timestamps_are_valid_days() {
    assert_eq!(utc().date_key(-1).unwrap(), date(1969, 12, 31));
}

#[test]
fn unrepresentable_timestamp_is_render_error() {
    let err = utc().date_key(i64::MAX).unwrap_err();
    assert!(matches!(err, FormError::Render(_)));
}
