use thiserror::Error;

use crate::model::MembershipStatus;

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("{field}: {rule}")]
    InvalidField { field: &'static str, rule: String },

    #[error("{entity} already exists: {identity}")]
    Duplicate {
        entity: &'static str,
        identity: String,
    },

    #[error("{entity} not found: {identity}")]
    NotFound {
        entity: &'static str,
        identity: String,
    },

    #[error("duration must be between 1 and {max} months, got {months}")]
    InvalidDuration { months: u32, max: u32 },

    #[error("cannot {action} a membership that is {status}")]
    InvalidTransition {
        action: &'static str,
        status: MembershipStatus,
    },

    #[error("membership references unknown {entity}: {key}")]
    InvalidMembershipLink { entity: &'static str, key: String },

    #[error("{entity} {identity} still has {count} membership(s); unlink them first")]
    StillLinked {
        entity: &'static str,
        identity: String,
        count: usize,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type RosterResult<T> = Result<T, RosterError>;
