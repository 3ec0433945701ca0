// payroll_client/schedule.rs
//
// Pay cycles are advisory. The program pays whichever workers a caller
// includes in a batch; these helpers decide who to include.

use std::{fmt, str::FromStr};

use crate::error::ClientError;

const DAY: u64 = 24 * 60 * 60;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PayCycle {
    Weekly,
    BiWeekly,
    // 30 days, not a calendar month
    #[default]
    Monthly,
}

impl PayCycle {
    pub const fn length_secs(self) -> u64 {
        match self {
            PayCycle::Weekly => 7 * DAY,
            PayCycle::BiWeekly => 14 * DAY,
            PayCycle::Monthly => 30 * DAY,
        }
    }

    /// `last_paid_cycle` and `now` are unix seconds. A worker that was never
    /// paid has `last_paid_cycle == 0` and is due straight away.
    pub fn is_due(self, last_paid_cycle: u64, now: u64) -> bool {
        now.saturating_sub(last_paid_cycle) >= self.length_secs()
    }

    pub fn next_payroll(self, last_paid_cycle: u64) -> u64 {
        last_paid_cycle.saturating_add(self.length_secs())
    }
}

impl FromStr for PayCycle {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "weekly" => Ok(PayCycle::Weekly),
            "bi-weekly" | "biweekly" => Ok(PayCycle::BiWeekly),
            "monthly" => Ok(PayCycle::Monthly),
            _ => Err(ClientError::UnknownPayCycle(s.to_string())),
        }
    }
}

impl fmt::Display for PayCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PayCycle::Weekly => "weekly",
            PayCycle::BiWeekly => "bi-weekly",
            PayCycle::Monthly => "monthly",
        };
        f.write_str(name)
    }
}
