//! Integration tests for module exports.
//!
//! Verify that all public modules and types are correctly exported
//! and accessible via absolute paths.

/// Test that each component is reachable through its defining module.
#[test]
fn test_component_module_exports() {
    use flight_schedule::consolidation::{
        consolidate_weeks, expand_runs, weekly_slots, Adjacency, ConfigError, ConsolidationConfig,
        ConsolidationRun, ScheduleConsolidator, WeekSlot,
    };
    use flight_schedule::daily_cap::daily_cap;
    use flight_schedule::day_pattern::{resolve_day_pattern, DayPattern, ResolvedDays};
    use flight_schedule::sunday::apply_sunday_rule;
    use flight_schedule::time_range::{parse_time_range, ParseConfidence, ParsedTimeRange, TimeRange};
    use flight_core::types::Date;

    let parsed: ParsedTimeRange = parse_time_range("7p-8p");
    assert_eq!(parsed.confidence, ParseConfidence::Parsed);
    let _: TimeRange = parsed.range;

    let resolved: ResolvedDays = resolve_day_pattern("M-F");
    assert_eq!(apply_sunday_rule(resolved.pattern, &parsed.range), DayPattern::MonFri);

    let start = Date::from_ymd(2025, 4, 28).unwrap();
    let slots: Vec<WeekSlot> = weekly_slots(start, &[2, 2]);
    let runs: Vec<ConsolidationRun> = consolidate_weeks(&slots, start.add_days(13));
    assert_eq!(expand_runs(&runs, &slots), vec![2, 2]);

    let consolidator = ScheduleConsolidator::new(ConsolidationConfig::default());
    assert_eq!(consolidator.config().adjacency, Adjacency::Index);
    let _: Option<ConfigError> = ConsolidationConfig::default().validate().err();

    assert_eq!(daily_cap(10, 5), 2);
}

/// Test that supplemented modules are reachable.
#[test]
fn test_supplemented_module_exports() {
    use flight_schedule::entry::{EntrySpec, ScheduleLine, SpotKind};
    use flight_schedule::planner::{LinePlan, LinePlanner, PlanWarning, RawLine};
    use flight_schedule::ros::{is_ros, ros_block, Language, RosBlock, UnknownLanguage};

    let block: RosBlock = ros_block(Language::Korean);
    assert!(is_ros(Language::Korean, block.pattern(), &block.range()));
    let _: Result<Language, UnknownLanguage> = "korean".parse();

    assert_eq!(EntrySpec::timecode(30), "00:00:30:00");
    assert_eq!(SpotKind::default(), SpotKind::Paid);

    let _: fn(&LinePlanner, &RawLine) -> LinePlan = LinePlanner::plan;
    let _ = PlanWarning::NothingScheduled;
    let _ = std::mem::size_of::<ScheduleLine>();
}

/// Test that the prelude brings the pipeline into scope.
#[test]
fn test_prelude_exports() {
    use flight_schedule::prelude::*;

    let time = parse_time_range("6a-7a");
    let days = resolve_day_pattern("Sa-Su");
    assert_eq!(
        apply_sunday_rule(days.pattern, &time.range).active_days(),
        1
    );
    assert_eq!(ros_block(Language::Punjabi).pattern(), DayPattern::MonFri);
}

/// Test that engine values can cross thread boundaries.
#[test]
fn test_types_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}

    use flight_schedule::prelude::*;
    assert_send_sync::<TimeRange>();
    assert_send_sync::<DayPattern>();
    assert_send_sync::<WeekSlot>();
    assert_send_sync::<ConsolidationRun>();
    assert_send_sync::<ScheduleLine>();
    assert_send_sync::<EntrySpec>();
    assert_send_sync::<RawLine>();
    assert_send_sync::<LinePlan>();
    assert_send_sync::<LinePlanner>();
}
