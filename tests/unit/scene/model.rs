use super::*;

#[test]
fn timing_codes_map_both_ways() {
    for t in Timing::ALL {
        assert_eq!(Timing::from_code(t.code()), Some(t));
    }
    assert_eq!(Timing::from_code(0), None);
    assert_eq!(Timing::from_code(6), None);
    assert_eq!(Timing::from_code(-1), None);
}

#[test]
fn action_codes_map_both_ways() {
    for a in Action::ALL {
        assert_eq!(Action::from_code(a.code()), Some(a));
    }
    assert_eq!(Action::from_code("gloves"), None);
    assert_eq!(Action::from_code("HAND_WASH"), None);
}

#[test]
fn facility_fields_keep_grid_order() {
    let info = FacilityInfo {
        facility_name: Some("General Hospital".to_string()),
        address: Some("1-2-3".to_string()),
        ward: Some(String::new()),
        ..FacilityInfo::default()
    };
    let fields = info.fields();
    assert_eq!(fields[0], ("施設名:", Some("General Hospital")));
    assert_eq!(fields[2], ("病棟:", None));
    assert_eq!(fields[9], ("住所:", Some("1-2-3")));
    assert_eq!(fields.iter().filter(|(_, v)| v.is_none()).count(), 8);
}

#[test]
fn record_ignores_unknown_codes() {
    let r = ObservationRecord::new(0, 9, Some("gloves"));
    assert_eq!(r.known_timing(), None);
    assert_eq!(r.known_action(), None);

    let r = ObservationRecord::new(0, 3, Some("hand_wash"));
    assert_eq!(r.known_timing(), Some(Timing::AfterBodyFluidExposure));
    assert_eq!(r.known_action(), Some(Action::HandWash));
}

#[test]
fn timing_descriptions_follow_form_order() {
    let descriptions: Vec<_> = Timing::ALL.iter().map(|t| t.description()).collect();
    assert_eq!(
        descriptions,
        vec![
            "患者に接触する前",
            "清潔/無菌操作の前",
            "体液曝露の可能性のある場合",
            "患者に接触した後",
            "患者周辺物品に接触した後",
        ]
    );
}
