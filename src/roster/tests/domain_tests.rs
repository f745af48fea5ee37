//! Domain-focused tests for identities, roles, and registration.

use crate::roster::domain::{
    AreaLabel, HomeId, Resident, ResidentId, RosterDomainError, Worker, WorkerId, WorkerRole,
};
use crate::test_support::FixedClock;
use eyre::ensure;
use rstest::{fixture, rstest};

#[fixture]
fn clock() -> FixedClock {
    FixedClock::at(2025, 6, 1, 8, 0, 0)
}

#[rstest]
#[case("42", "HOME42")]
#[case("HOME42", "HOME42")]
#[case("  7b  ", "HOME7b")]
#[case("HOMEstead", "HOMEstead")]
fn home_id_canonicalize_prefixes_once(
    #[case] raw: &str,
    #[case] expected: &str,
) -> eyre::Result<()> {
    let home = HomeId::canonicalize(raw)?;
    ensure!(home.as_str() == expected);

    let again = HomeId::canonicalize(home.as_str())?;
    ensure!(again == home);
    Ok(())
}

#[rstest]
#[case("")]
#[case("   ")]
fn home_id_canonicalize_rejects_empty_payload(#[case] raw: &str) {
    let result = HomeId::canonicalize(raw);
    assert_eq!(result, Err(RosterDomainError::EmptyHomeId));
}

#[rstest]
fn worker_id_rejects_empty_value() {
    assert_eq!(WorkerId::new("  "), Err(RosterDomainError::EmptyWorkerId));
}

#[rstest]
fn area_label_rejects_empty_value() {
    assert_eq!(AreaLabel::new(""), Err(RosterDomainError::EmptyAreaLabel));
}

#[rstest]
#[case(WorkerRole::GarbageCollector, "garbage_collector")]
#[case(WorkerRole::DustbinMonitor, "dustbin_monitor")]
#[case(WorkerRole::ComplaintManager, "complaint_manager")]
fn worker_role_round_trips(#[case] role: WorkerRole, #[case] text: &str) -> eyre::Result<()> {
    ensure!(role.as_str() == text);
    ensure!(WorkerRole::try_from(text)? == role);
    Ok(())
}

#[rstest]
fn worker_role_rejects_unknown_value() {
    let result = WorkerRole::try_from("supervisor");
    assert_eq!(
        result,
        Err(RosterDomainError::UnknownRole("supervisor".to_owned()))
    );
}

#[rstest]
fn registered_worker_starts_active_with_zero_balance(clock: FixedClock) -> eyre::Result<()> {
    let worker = Worker::register(
        WorkerId::new("W001")?,
        WorkerRole::GarbageCollector,
        AreaLabel::new("ward-3")?,
        &clock,
    );

    ensure!(worker.is_active());
    ensure!(worker.golden_points().value() == 0);
    ensure!(worker.registered_at() == clock.0);
    Ok(())
}

#[rstest]
fn deactivated_worker_keeps_its_record(clock: FixedClock) -> eyre::Result<()> {
    let mut worker = Worker::register(
        WorkerId::new("W002")?,
        WorkerRole::DustbinMonitor,
        AreaLabel::new("ward-5")?,
        &clock,
    );
    worker.deactivate();

    ensure!(!worker.is_active());
    ensure!(worker.id().as_str() == "W002");
    Ok(())
}

#[rstest]
fn registered_resident_starts_with_zero_green_points(clock: FixedClock) -> eyre::Result<()> {
    let resident = Resident::register(
        ResidentId::generate(),
        HomeId::canonicalize("42")?,
        AreaLabel::new("ward-3")?,
        &clock,
    );

    ensure!(resident.green_points().value() == 0);
    ensure!(resident.home().as_str() == "HOME42");
    ensure!(resident.id().as_str().starts_with("RES_"));
    Ok(())
}
