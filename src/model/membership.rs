use std::fmt;

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{RosterError, RosterResult};

use super::club::Club;
use super::ids::Id;
use super::person::Person;

/// Upper bound on an initial membership term, in months.
pub const MAX_JOIN_MONTHS: u32 = 60;

/// Upper bound on a single renewal or reactivation, in months.
pub const MAX_RENEW_MONTHS: u32 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MembershipStatus {
    Active,
    Expired,
    PendingCancellation,
    Cancelled,
}

impl fmt::Display for MembershipStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MembershipStatus::Active => "ACTIVE",
            MembershipStatus::Expired => "EXPIRED",
            MembershipStatus::PendingCancellation => "PENDING_CANCELLATION",
            MembershipStatus::Cancelled => "CANCELLED",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MembershipEventKind {
    Join,
    Renew,
    Cancel,
    Finalize,
}

/// One entry in a membership's audit trail. Appended on every transition,
/// never edited or removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembershipEvent {
    pub kind: MembershipEventKind,
    pub date: NaiveDate,
    pub months_added: u32,
    pub new_expiry: NaiveDate,
}

/// The relationship between one person and one club. At most one exists per
/// (person, club) pair; the roster's membership list enforces that.
///
/// The stored status is authoritative, but expiry is also derived: a
/// stored-Active membership whose expiry date has passed reads as Expired, so
/// status queries must go through `effective_status`/`is_active` with an
/// explicit "today" rather than trusting the field.
#[derive(Debug, Clone)]
pub struct Membership {
    pub id: Id<Membership>,
    pub person_id: Id<Person>,
    pub club_id: Id<Club>,
    pub join_date: NaiveDate,
    pub expiry_date: NaiveDate,
    pub status: MembershipStatus,
    pub history: Vec<MembershipEvent>,
}

impl Membership {
    /// Starts a new membership running from `today`.
    pub fn join(
        person_id: Id<Person>,
        club_id: Id<Club>,
        months: u32,
        today: NaiveDate,
    ) -> RosterResult<Self> {
        check_duration(months, MAX_JOIN_MONTHS)?;
        let expiry = add_months(today, months);
        Ok(Self {
            id: Id::generate(),
            person_id,
            club_id,
            join_date: today,
            expiry_date: expiry,
            status: MembershipStatus::Active,
            history: vec![MembershipEvent {
                kind: MembershipEventKind::Join,
                date: today,
                months_added: months,
                new_expiry: expiry,
            }],
        })
    }

    pub fn is_lapsed(&self, today: NaiveDate) -> bool {
        self.expiry_date < today
    }

    /// Stored status shadowed by the date check.
    pub fn effective_status(&self, today: NaiveDate) -> MembershipStatus {
        if self.status == MembershipStatus::Active && self.is_lapsed(today) {
            MembershipStatus::Expired
        } else {
            self.status
        }
    }

    pub fn is_active(&self, today: NaiveDate) -> bool {
        self.effective_status(today) == MembershipStatus::Active
    }

    /// Extends the term from the current expiry date, so back-to-back
    /// renewals compound instead of resetting to today.
    pub fn renew(&mut self, months: u32, today: NaiveDate) -> RosterResult<()> {
        check_duration(months, MAX_RENEW_MONTHS)?;
        match self.effective_status(today) {
            MembershipStatus::Active | MembershipStatus::Expired => {}
            status => {
                return Err(RosterError::InvalidTransition {
                    action: "renew",
                    status,
                })
            }
        }
        self.expiry_date = add_months(self.expiry_date, months);
        self.status = MembershipStatus::Active;
        self.push_event(MembershipEventKind::Renew, today, months);
        Ok(())
    }

    /// Soft cancellation: reversible until finalized, and the membership
    /// stays on the roster throughout.
    pub fn cancel(&mut self, today: NaiveDate) -> RosterResult<()> {
        match self.effective_status(today) {
            MembershipStatus::Active | MembershipStatus::Expired => {}
            status => {
                return Err(RosterError::InvalidTransition {
                    action: "cancel",
                    status,
                })
            }
        }
        self.status = MembershipStatus::PendingCancellation;
        self.push_event(MembershipEventKind::Cancel, today, 0);
        Ok(())
    }

    /// A lapsed membership restarts its clock from today; a pending
    /// cancellation that has not lapsed resumes from its current expiry.
    pub fn reactivate(&mut self, months: u32, today: NaiveDate) -> RosterResult<()> {
        check_duration(months, MAX_RENEW_MONTHS)?;
        match self.effective_status(today) {
            MembershipStatus::Expired | MembershipStatus::PendingCancellation => {}
            status => {
                return Err(RosterError::InvalidTransition {
                    action: "reactivate",
                    status,
                })
            }
        }
        self.expiry_date = if self.is_lapsed(today) {
            add_months(today, months)
        } else {
            add_months(self.expiry_date, months)
        };
        self.status = MembershipStatus::Active;
        self.push_event(MembershipEventKind::Renew, today, months);
        Ok(())
    }

    /// Terminal transition. Only an explicitly pending cancellation can be
    /// finalized; the record stays on the roster for audit.
    pub fn finalize_cancellation(&mut self, today: NaiveDate) -> RosterResult<()> {
        match self.status {
            MembershipStatus::PendingCancellation => {}
            status => {
                return Err(RosterError::InvalidTransition {
                    action: "finalize",
                    status,
                })
            }
        }
        self.status = MembershipStatus::Cancelled;
        self.push_event(MembershipEventKind::Finalize, today, 0);
        Ok(())
    }

    pub fn last_event(&self) -> Option<&MembershipEvent> {
        self.history.last()
    }

    /// Same relationship: same (person, club) pair.
    pub fn same_identity(&self, other: &Membership) -> bool {
        self.person_id == other.person_id && self.club_id == other.club_id
    }

    fn push_event(&mut self, kind: MembershipEventKind, date: NaiveDate, months_added: u32) {
        self.history.push(MembershipEvent {
            kind,
            date,
            months_added,
            new_expiry: self.expiry_date,
        });
    }
}

/// Full equality: endpoints plus the whole lifecycle state.
impl PartialEq for Membership {
    fn eq(&self, other: &Self) -> bool {
        self.person_id == other.person_id
            && self.club_id == other.club_id
            && self.join_date == other.join_date
            && self.expiry_date == other.expiry_date
            && self.status == other.status
            && self.history == other.history
    }
}

fn check_duration(months: u32, max: u32) -> RosterResult<()> {
    if months == 0 || months > max {
        Err(RosterError::InvalidDuration { months, max })
    } else {
        Ok(())
    }
}

/// Saturates at the calendar bound instead of panicking; bounded durations
/// keep real dates far away from it.
fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_add_months(Months::new(months))
        .unwrap_or(NaiveDate::MAX)
}
