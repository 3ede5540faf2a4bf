use serde::{Deserialize, Serialize};

use crate::time::Date;

/// Calendar days between notifying a resignation and the end of the
/// employment. Fixed by law, not by the contract.
pub const NOTICE_PERIOD_DAYS: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct ResignationNotice {
    notification_date: Date,
    effective_termination_date: Date,
    notice_honored: Option<bool>,
}

impl ResignationNotice {
    pub const fn notification_date(&self) -> Date {
        self.notification_date
    }

    pub const fn effective_termination_date(&self) -> Date {
        self.effective_termination_date
    }

    /// Whether the employee worked through the notice period.
    ///
    /// Entered by an operator, `None` until then.
    pub const fn notice_honored(&self) -> Option<bool> {
        self.notice_honored
    }

    #[must_use]
    pub fn with_notice_honored(mut self, honored: bool) -> Self {
        self.notice_honored = Some(honored);
        self
    }

    /// `date` falls between the notification and the termination (both inclusive).
    #[must_use]
    pub fn is_within_notice(&self, date: Date) -> bool {
        self.notification_date <= date && date <= self.effective_termination_date
    }
}

#[must_use]
pub const fn compute_notice(notification_date: Date) -> ResignationNotice {
    ResignationNotice {
        notification_date,
        effective_termination_date: notification_date.add_days(NOTICE_PERIOD_DAYS),
        notice_honored: None,
    }
}
