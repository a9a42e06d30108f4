// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors raised while validating console input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required text field was empty.
    MissingField {
        /// The form field name.
        field: &'static str,
    },
    /// An id field did not contain an integer.
    InvalidId {
        /// The form field name.
        field: &'static str,
        /// The value that failed to parse.
        value: String,
    },
    /// An email address had no `@`.
    InvalidEmail(String),
    /// The referenced user is not in the cache.
    UserNotFound(i64),
    /// The referenced ticket is not in the cache.
    TicketNotFound(i64),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField { field } => write!(f, "Field '{field}' is required"),
            Self::InvalidId { field, value } => {
                write!(f, "Field '{field}' must be a numeric id, got '{value}'")
            }
            Self::InvalidEmail(value) => write!(f, "Invalid email address: '{value}'"),
            Self::UserNotFound(id) => write!(f, "User #{id} not found"),
            Self::TicketNotFound(id) => write!(f, "Ticket #{id} not found"),
        }
    }
}

impl std::error::Error for DomainError {}
