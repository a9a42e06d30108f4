// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    DomainError, TicketDraft, UserDraft, UserRole, parse_optional_record_id, parse_record_id,
    validate_ticket_draft, validate_user_draft,
};

fn create_test_user_draft() -> UserDraft {
    UserDraft {
        name: String::from("Ann"),
        email: String::from("ann@example.com"),
        phone: String::from("555-0100"),
        role: UserRole::Customer,
    }
}

#[test]
fn test_parse_record_id_accepts_padded_integer() {
    assert_eq!(parse_record_id("raisedBy", " 42 "), Ok(42));
}

#[test]
fn test_parse_record_id_rejects_text() {
    let err: DomainError = parse_record_id("raisedBy", "abc").unwrap_err();
    assert_eq!(
        err,
        DomainError::InvalidId {
            field: "raisedBy",
            value: String::from("abc"),
        }
    );
    assert!(err.to_string().contains("raisedBy"));
}

#[test]
fn test_parse_record_id_blank_is_missing() {
    assert_eq!(
        parse_record_id("raisedBy", " "),
        Err(DomainError::MissingField { field: "raisedBy" })
    );
}

#[test]
fn test_parse_optional_record_id_empty_is_none() {
    assert_eq!(parse_optional_record_id("assignedTo", ""), Ok(None));
    assert_eq!(parse_optional_record_id("assignedTo", "  "), Ok(None));
    assert_eq!(parse_optional_record_id("assignedTo", "3"), Ok(Some(3)));
    assert!(parse_optional_record_id("assignedTo", "x").is_err());
}

#[test]
fn test_valid_user_draft_passes() {
    assert!(validate_user_draft(&create_test_user_draft()).is_ok());
}

#[test]
fn test_user_draft_requires_name() {
    let mut draft: UserDraft = create_test_user_draft();
    draft.name = String::from("   ");
    assert_eq!(
        validate_user_draft(&draft),
        Err(DomainError::MissingField { field: "name" })
    );
}

#[test]
fn test_user_draft_rejects_email_without_at() {
    let mut draft: UserDraft = create_test_user_draft();
    draft.email = String::from("ann.example.com");
    assert!(matches!(
        validate_user_draft(&draft),
        Err(DomainError::InvalidEmail(_))
    ));
}

#[test]
fn test_ticket_draft_requires_issue() {
    let draft: TicketDraft = TicketDraft::open("", 1);
    assert_eq!(
        validate_ticket_draft(&draft),
        Err(DomainError::MissingField { field: "issue" })
    );
    assert!(validate_ticket_draft(&TicketDraft::open("Broken", 1)).is_ok());
}
