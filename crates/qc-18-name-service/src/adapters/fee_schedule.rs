//! Static Fee Schedule
//!
//! Implements `FeeScheduleProvider` with a schedule set by the embedding
//! runtime. Stands in for the configuration module.

use crate::domain::{FeeSchedule, NameServiceError};
use crate::ports::outbound::FeeScheduleProvider;
use parking_lot::RwLock;
use tracing::info;

/// Fee schedule held in memory and replaced wholesale on update.
pub struct StaticFeeSchedule {
    schedule: RwLock<FeeSchedule>,
}

impl StaticFeeSchedule {
    pub fn new(schedule: FeeSchedule) -> Self {
        Self {
            schedule: RwLock::new(schedule),
        }
    }

    /// Replace the schedule. Rejects invalid schedules and version rollbacks.
    pub fn update(&self, schedule: FeeSchedule) -> Result<(), NameServiceError> {
        schedule.validate()?;
        let mut current = self.schedule.write();
        if schedule.version < current.version {
            return Err(NameServiceError::InvalidFeeSchedule(format!(
                "version {} is older than current {}",
                schedule.version, current.version
            )));
        }
        info!(
            "[qc-18] Fee schedule updated: v{} -> v{}",
            current.version, schedule.version
        );
        *current = schedule;
        Ok(())
    }
}

impl Default for StaticFeeSchedule {
    fn default() -> Self {
        Self::new(FeeSchedule::default())
    }
}

impl FeeScheduleProvider for StaticFeeSchedule {
    fn get_fee_schedule(&self) -> Result<FeeSchedule, NameServiceError> {
        Ok(self.schedule.read().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_replaces_schedule() {
        let provider = StaticFeeSchedule::default();
        let next = FeeSchedule {
            version: 2,
            default_fee: 99,
            ..Default::default()
        };
        provider.update(next.clone()).unwrap();
        assert_eq!(provider.get_fee_schedule().unwrap(), next);
    }

    #[test]
    fn test_update_rejects_rollback() {
        let provider = StaticFeeSchedule::new(FeeSchedule {
            version: 5,
            ..Default::default()
        });
        let result = provider.update(FeeSchedule {
            version: 4,
            ..Default::default()
        });
        assert!(result.is_err());
        assert_eq!(provider.get_fee_schedule().unwrap().version, 5);
    }

    #[test]
    fn test_update_rejects_invalid() {
        let provider = StaticFeeSchedule::default();
        let result = provider.update(FeeSchedule {
            version: 2,
            fee_denom: String::new(),
            ..Default::default()
        });
        assert!(matches!(
            result,
            Err(NameServiceError::InvalidFeeSchedule(_))
        ));
    }
}
