use crate::tests::fixed_now;
use crate::{DutyStatus, PersonnelRoster};

#[test]
fn test_fixture_roster_counts_by_status() {
    let roster = PersonnelRoster::with_fixtures(fixed_now());

    assert_eq!(roster.count(DutyStatus::OnDuty), 3);
    assert_eq!(roster.count(DutyStatus::Patrol), 2);
    assert_eq!(roster.count(DutyStatus::Break), 1);
    assert_eq!(roster.count(DutyStatus::OffDuty), 0);
    assert_eq!(roster.working_count(), 5);
}

#[test]
fn test_shift_and_check_in_strings() {
    let now = fixed_now();
    let roster = PersonnelRoster::with_fixtures(now);
    let emma = &roster.personnel()[5];

    assert_eq!(roster.shift_time(emma, now), "3h 30m");
    assert_eq!(roster.last_check_in(emma, now), "3m ago");
}

#[test]
fn test_initials() {
    let roster = PersonnelRoster::with_fixtures(fixed_now());
    assert_eq!(roster.personnel()[0].initials(), "JR");
}

#[test]
fn test_duty_status_serde_is_kebab_case() {
    let json = serde_json::to_string(&DutyStatus::OnDuty).unwrap();
    assert_eq!(json, "\"on-duty\"");
    assert_eq!(DutyStatus::OffDuty.label(), "OFF DUTY");
}
