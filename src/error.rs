use thiserror::Error;

use crate::catalog::TemplateId;

/// Why an intent left the snapshot unchanged, or a store could not start.
///
/// Intent rejections are recovered inside the reducer and logged; observers
/// see only whether a new snapshot arrived. Only store construction returns
/// one to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("Unknown stat '{key}'")]
    InvalidStatKey { key: String },

    #[error("Raising '{key}' by {delta} would leave {remaining} points")]
    BudgetExceeded {
        key: String,
        delta: i32,
        remaining: i32,
    },

    #[error("Template '{id}' would leave {remaining} points")]
    TemplateOverBudget { id: TemplateId, remaining: i32 },

    #[error("Starting character would leave {remaining} points")]
    StartOverBudget { remaining: i32 },
}
