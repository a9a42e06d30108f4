// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::payload::{TicketDraft, UserDraft};

/// Parses a required numeric id submitted through a form field.
///
/// Surrounding whitespace is ignored.
///
/// # Arguments
///
/// * `field` - The form field name, used in the error
/// * `raw` - The submitted value
///
/// # Errors
///
/// Returns an error if:
/// - The value is empty (`DomainError::MissingField`)
/// - The value is not an integer (`DomainError::InvalidId`)
pub fn parse_record_id(field: &'static str, raw: &str) -> Result<i64, DomainError> {
    let trimmed: &str = raw.trim();
    if trimmed.is_empty() {
        return Err(DomainError::MissingField { field });
    }
    trimmed.parse::<i64>().map_err(|_| DomainError::InvalidId {
        field,
        value: raw.to_string(),
    })
}

/// Parses an optional numeric id submitted through a form field.
///
/// An empty value means "not set" (for example "Not assigned").
///
/// # Errors
///
/// Returns `DomainError::InvalidId` if a non-empty value is not an integer.
pub fn parse_optional_record_id(
    field: &'static str,
    raw: &str,
) -> Result<Option<i64>, DomainError> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    parse_record_id(field, raw).map(Some)
}

/// Validates a user draft before it is sent to the user service.
///
/// # Errors
///
/// Returns an error if:
/// - The name is empty
/// - The email is empty or has no `@`
/// - The role is empty
pub fn validate_user_draft(draft: &UserDraft) -> Result<(), DomainError> {
    if draft.name.trim().is_empty() {
        return Err(DomainError::MissingField { field: "name" });
    }

    if draft.email.trim().is_empty() {
        return Err(DomainError::MissingField { field: "email" });
    }
    if !draft.email.contains('@') {
        return Err(DomainError::InvalidEmail(draft.email.clone()));
    }

    if draft.role.as_str().trim().is_empty() {
        return Err(DomainError::MissingField { field: "role" });
    }

    Ok(())
}

/// Validates a ticket draft before it is sent to the ticket service.
///
/// # Errors
///
/// Returns `DomainError::MissingField` if the issue text is empty.
pub fn validate_ticket_draft(draft: &TicketDraft) -> Result<(), DomainError> {
    if draft.issue.trim().is_empty() {
        return Err(DomainError::MissingField { field: "issue" });
    }
    Ok(())
}
