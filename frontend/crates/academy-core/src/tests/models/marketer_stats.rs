use crate::MarketerStats;

#[test]
fn test_marketer_stats_decodes_backend_tuple() {
    let stats: MarketerStats = serde_json::from_str(r#"["Mia", 7]"#).unwrap();

    assert_eq!(stats.name, "Mia");
    assert_eq!(stats.referral_count, 7);
}

#[test]
fn test_marketer_stats_encodes_as_tuple() {
    let stats = MarketerStats {
        name: "Mia".into(),
        referral_count: 2,
    };

    assert_eq!(serde_json::to_string(&stats).unwrap(), r#"["Mia",2]"#);
}

#[test]
fn test_marketer_stats_unknown_placeholder() {
    let stats = MarketerStats::unknown();

    assert_eq!(stats.name, "Unknown");
    assert_eq!(stats.referral_count, 0);
}
