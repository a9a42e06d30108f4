// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

//! HTML views over the cached users and tickets.
//!
//! Everything here is pure: views borrow a [`ClientState`], build typed view
//! models, and render them to strings. Nothing performs I/O.
//!
//! Two page families exist:
//!
//! - **Cards**: dashboard, ticket card list, expandable user directory.
//! - **Console**: stat tiles plus searchable user and ticket tables with
//!   create, edit, delete, close and assign controls.
//!
//! [`ClientState`]: conquest::ClientState

mod badge;
mod cards;
mod console;
mod format;
mod html;
mod layout;
mod view_model;

#[cfg(test)]
mod tests;

pub use badge::{Badge, console_role_badge, directory_role_badge, status_badge};
pub use cards::{Dashboard, NewTicketForm, TicketCards, UserDirectory};
pub use console::{
    ConsolePage, ConsoleTab, DeleteConfirmation, TicketForm, TicketFormValues, UserForm,
    UserFormValues,
};
pub use format::format_timestamp;
pub use html::{Component, escape_html};
pub use layout::{Banner, NavItem, Page};
pub use view_model::{TicketView, UserOption, UserSummary};
