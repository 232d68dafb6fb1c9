use webcfg_domain::compilation::ProfileGuidedOptimizations;

#[test]
fn none_or_all_is_all() {
    let none = ProfileGuidedOptimizations::empty();
    let all = ProfileGuidedOptimizations::ALL;

    assert_eq!(none | all, all);
    assert_eq!(none.bits(), 0);
    assert_eq!(all.bits(), 1);
}

#[test]
fn tokens_map_to_flag_sets() {
    assert_eq!(ProfileGuidedOptimizations::from("all"), ProfileGuidedOptimizations::ALL);
    assert_eq!(ProfileGuidedOptimizations::from("All"), ProfileGuidedOptimizations::ALL);
    assert_eq!(ProfileGuidedOptimizations::from("none"), ProfileGuidedOptimizations::empty());
    // Unknown tokens degrade to no optimizations rather than failing.
    assert_eq!(ProfileGuidedOptimizations::from("turbo"), ProfileGuidedOptimizations::empty());

    assert_eq!(ProfileGuidedOptimizations::from(1u32), ProfileGuidedOptimizations::ALL);
    assert_eq!(ProfileGuidedOptimizations::from(0u32), ProfileGuidedOptimizations::empty());
}

#[test]
fn serde_round_trips_bits() {
    let all = ProfileGuidedOptimizations::ALL;
    let json = serde_json::to_string(&all).expect("serialize");
    assert_eq!(json, "1");

    let back: ProfileGuidedOptimizations = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, all);
}

#[test]
fn default_enables_everything() {
    assert_eq!(ProfileGuidedOptimizations::default(), ProfileGuidedOptimizations::ALL);
}
