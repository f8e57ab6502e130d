use chrono::NaiveDate;

use super::*;
use crate::foundation::core::mm;
use crate::render::plan::DrawOp;
use crate::scene::model::ObservationRecord;

fn group(session_number: usize, records: &[ObservationRecord]) -> DateGroup<'_> {
    DateGroup {
        session_number,
        date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        records: records.iter().collect(),
    }
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn applicable_iff_some_record_has_the_timing() {
    let records = vec![
        ObservationRecord::new(0, 2, None),
        ObservationRecord::new(0, 7, Some("hand_wash")),
    ];
    let g = group(1, &records);
    let rows: Vec<_> = Timing::ALL.iter().map(|&t| TimingRow::derive(&g, t)).collect();
    let applicable: Vec<_> = rows.iter().map(|r| r.applicable).collect();
    assert_eq!(applicable, vec![false, true, false, false, false]);
}

#[test]
fn no_recognised_action_shows_three_unchecked() {
    let records = vec![
        ObservationRecord::new(0, 1, None),
        ObservationRecord::new(0, 1, Some("gloves")),
    ];
    let row = TimingRow::derive(&group(1, &records), Timing::BeforePatientContact);
    assert!(row.applicable);
    assert!(row.actions.is_empty());

    let marks = row.action_marks();
    assert_eq!(marks.len(), 3);
    assert!(marks.iter().all(|m| !m.checked));
    assert_eq!(
        marks.iter().map(|m| m.action).collect::<Vec<_>>(),
        Action::ALL.to_vec()
    );

    let empty = TimingRow::derive(&group(1, &records), Timing::AfterPatientContact);
    assert!(!empty.applicable);
    assert_eq!(empty.action_marks(), marks);
}

#[test]
fn actions_are_deduplicated_in_first_seen_order_and_capped() {
    let records = vec![
        ObservationRecord::new(0, 4, Some("no_action")),
        ObservationRecord::new(0, 4, Some("no_action")),
        ObservationRecord::new(0, 4, Some("hand_wash")),
        ObservationRecord::new(0, 4, Some("hand_sanitizer")),
    ];
    let row = TimingRow::derive(&group(3, &records), Timing::AfterPatientContact);
    assert_eq!(row.actions, vec![Action::NoAction, Action::HandWash]);
    assert!(row.action_marks().iter().all(|m| m.checked));
    assert_eq!(row.label(), "3. 患者接触後");
}

#[test]
fn five_rows_per_session_in_timing_order() {
    let a = vec![ObservationRecord::new(0, 5, None)];
    let b = vec![ObservationRecord::new(0, 1, None)];
    let groups = vec![group(1, &a), group(2, &b)];
    let rows = timing_rows(&groups);
    assert_eq!(rows.len(), 10);
    assert_eq!(rows[0].timing, Timing::BeforePatientContact);
    assert_eq!(rows[4].timing, Timing::AfterPatientSurroundings);
    assert!(rows[4].applicable);
    assert_eq!(rows[5].session_number, 2);
    assert!(rows[5].applicable);
}

#[test]
fn zero_sessions_draws_only_the_header_band() {
    let cfg = LayoutConfig::A4_FORM;
    let engine = TableLayoutEngine::new(&cfg);
    let mut plan = DrawPlan::new(cfg.page);
    let end = engine.layout(&mut plan, &[], 500.0);

    assert!(approx(end, 500.0 - mm(8.0)));
    let titles: Vec<_> = plan.texts().map(|(_, t)| t).collect();
    assert_eq!(titles, vec!["機会", "適応", "手指衛生", "機会"]);
    let band = plan.ops.iter().find_map(|op| match op {
        DrawOp::Rect { rect, fill, .. } => Some((*rect, *fill)),
        _ => None,
    });
    let (rect, fill) = band.unwrap();
    assert_eq!(fill, Some(cfg.header_band_tint));
    assert!(approx(rect.width(), cfg.table_width()));
    assert!(approx(rect.y1, 500.0));
}

#[test]
fn row_cells_are_placed_in_their_columns() {
    let cfg = LayoutConfig::A4_FORM;
    let engine = TableLayoutEngine::new(&cfg);
    let records = vec![
        ObservationRecord::new(0, 1, Some("hand_sanitizer")),
        ObservationRecord::new(0, 1, Some("hand_wash")),
    ];
    let groups = vec![group(1, &records)];
    let mut plan = DrawPlan::new(cfg.page);
    let end = engine.layout(&mut plan, &groups, 500.0);
    assert!(approx(end, 500.0 - 6.0 * mm(8.0)));

    let label = plan.find_text("1. 患者接触前").unwrap();
    assert!(approx(label.x, cfg.margin + mm(2.0)));
    assert!(approx(label.y, 500.0 - 2.0 * mm(8.0) + mm(2.0)));

    let marks = plan.find_text("☑手指消毒 ☑手洗い").unwrap();
    assert!(approx(marks.x, cfg.column_x(2) + mm(2.0)));
    assert!(approx(marks.y, label.y));

    let unchecked = plan
        .texts()
        .filter(|(_, t)| *t == "☐手指消毒 ☐手洗い ☐実施なし")
        .count();
    assert_eq!(unchecked, 4);

    let glyphs: Vec<_> = plan
        .texts()
        .filter(|(p, _)| approx(p.x, cfg.column_x(1) + mm(2.0)))
        .map(|(_, t)| t)
        .collect();
    assert_eq!(glyphs, vec!["適応", "☑", "☐", "☐", "☐", "☐"]);
}

#[test]
fn layout_rows_draws_exactly_the_given_rows() {
    let cfg = LayoutConfig::A4_FORM;
    let engine = TableLayoutEngine::new(&cfg);
    let records = vec![ObservationRecord::new(0, 3, Some("hand_wash"))];
    let groups = vec![group(1, &records)];
    let rows = timing_rows(&groups);

    let mut from_groups = DrawPlan::new(cfg.page);
    let a = engine.layout(&mut from_groups, &groups, 400.0);
    let mut from_rows = DrawPlan::new(cfg.page);
    let b = engine.layout_rows(&mut from_rows, &rows, 400.0);
    assert_eq!(a, b);
    assert_eq!(from_groups, from_rows);

    let mut partial = DrawPlan::new(cfg.page);
    let end = engine.layout_rows(&mut partial, &rows[2..3], 400.0);
    assert!(approx(end, 400.0 - 2.0 * mm(8.0)));
    assert!(partial.find_text("1. 体液曝露後").is_some());
    assert!(partial.find_text("1. 患者接触前").is_none());
}
