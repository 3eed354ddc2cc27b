use thiserror::Error;
use tracing::info;

use crate::domain::process::ProcessArea;
use crate::domain::session::{AppSession, SessionError, Tab};
use crate::domain::targets::{TargetBoard, TargetField};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TargetInputError {
    #[error("expected <area>.<field>=<value>, got '{0}'")]
    Syntax(String),
    #[error("unknown process area '{0}'")]
    UnknownArea(String),
    #[error("unknown target field '{0}'")]
    UnknownField(String),
    #[error("configuration access denied: {0}")]
    AccessDenied(#[from] SessionError),
}

/// One `area.field=value` edit. The value is kept as typed and coerced on apply.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetAssignment {
    pub area: ProcessArea,
    pub field: TargetField,
    pub raw_value: String,
}

pub fn parse_assignment(input: &str) -> Result<TargetAssignment, TargetInputError> {
    let (key, raw_value) = input
        .split_once('=')
        .ok_or_else(|| TargetInputError::Syntax(input.to_string()))?;
    let (area, field) = key
        .split_once('.')
        .ok_or_else(|| TargetInputError::Syntax(input.to_string()))?;

    let area = area
        .parse::<ProcessArea>()
        .map_err(|_| TargetInputError::UnknownArea(area.trim().to_string()))?;
    let field = field.parse::<TargetField>().map_err(TargetInputError::UnknownField)?;
    Ok(TargetAssignment {
        area,
        field,
        raw_value: raw_value.to_string(),
    })
}

/// Edits the board on behalf of the session's role. Resets run before edits.
pub fn apply_target_changes(
    session: &AppSession,
    board: &mut TargetBoard,
    resets: &[ProcessArea],
    assignments: &[TargetAssignment],
) -> Result<(), TargetInputError> {
    let role = session.require_tab(Tab::Configuration)?;

    for area in resets {
        board.reset(*area);
        info!(%role, area = area.key(), "targets reset to defaults");
    }
    for assignment in assignments {
        let stored = board.set_from_input(assignment.area, assignment.field, &assignment.raw_value);
        info!(
            %role,
            area = assignment.area.key(),
            field = assignment.field.key(),
            stored,
            "target updated"
        );
    }
    Ok(())
}
