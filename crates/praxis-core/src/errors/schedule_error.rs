use crate::models::schedule::BalanceReport;

/// Scheduler invariant violations.
///
/// These indicate a defect in the scheduling pass itself and must reach the
/// caller — a schedule that breaks the balance contract is never returned
/// as an ordinary result.
#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    #[error(
        "weekly balance contract violated: spread {} exceeds tolerance {}",
        .report.spread,
        .report.tolerance
    )]
    BalanceViolated { report: BalanceReport },
}
