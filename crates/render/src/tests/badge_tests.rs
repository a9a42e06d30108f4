// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use conquest_domain::{TicketStatus, UserRole};

use crate::{Badge, Component, console_role_badge, directory_role_badge, status_badge};

#[test]
fn test_status_badge_classes() {
    assert_eq!(status_badge(Some(&TicketStatus::Closed)).class, "badge-closed");
    assert_eq!(status_badge(Some(&TicketStatus::Assigned)).class, "badge-urgent");
    assert_eq!(status_badge(Some(&TicketStatus::Open)).class, "badge-open");
}

#[test]
fn test_missing_status_reads_open() {
    let badge: Badge = status_badge(None);

    assert_eq!(badge.class, "badge-open");
    assert_eq!(badge.label, "OPEN");
}

#[test]
fn test_unknown_status_keeps_label_with_open_style() {
    let status: TicketStatus = TicketStatus::from("ESCALATED");
    let badge: Badge = status_badge(Some(&status));

    assert_eq!(badge.class, "badge-open");
    assert_eq!(badge.label, "ESCALATED");
}

#[test]
fn test_role_badges() {
    assert_eq!(directory_role_badge(&UserRole::Customer).class, "badge-open");
    assert_eq!(directory_role_badge(&UserRole::Agent).class, "badge-closed");
    assert_eq!(console_role_badge(&UserRole::Agent).class, "badge-agent");
    assert_eq!(
        console_role_badge(&UserRole::from("ADMIN")).class,
        "badge-admin"
    );
}

#[test]
fn test_badge_render_escapes_label() {
    let status: TicketStatus = TicketStatus::from("<b>");

    assert_eq!(
        status_badge(Some(&status)).render(),
        r#"<span class="badge badge-open">&lt;b&gt;</span>"#
    );
}
