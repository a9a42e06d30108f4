// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::html::{Component, escape_html};

/// Top-level navigation entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    /// Card dashboard.
    Dashboard,
    /// Card ticket list.
    Tickets,
    /// User directory.
    Users,
    /// Tabular console.
    Console,
}

impl NavItem {
    const ALL: [Self; 4] = [Self::Dashboard, Self::Tickets, Self::Users, Self::Console];

    /// Returns the form value identifying this entry.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Tickets => "tickets",
            Self::Users => "users",
            Self::Console => "console",
        }
    }

    /// Parses a form value. Anything unrecognized selects the dashboard.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|item| item.as_str() == raw.trim())
            .unwrap_or(Self::Dashboard)
    }

    /// Returns the path that serves this entry.
    #[must_use]
    pub const fn href(self) -> &'static str {
        match self {
            Self::Dashboard => "/",
            Self::Tickets => "/tickets",
            Self::Users => "/users",
            Self::Console => "/console",
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Tickets => "Tickets",
            Self::Users => "Users",
            Self::Console => "Console",
        }
    }
}

/// A one-shot message shown above the page body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Banner<'a> {
    /// `success` or `error`.
    pub level: &'a str,
    /// Message text.
    pub message: &'a str,
}

impl Component for Banner<'_> {
    fn render(&self) -> String {
        format!(
            r#"<div class="toast {} show" role="status">{}</div>"#,
            escape_html(self.level),
            escape_html(self.message)
        )
    }
}

/// Reloads the page when the server reports a collection change.
const LIVE_RELOAD_SCRIPT: &str = r"<script>
(() => {
    const scheme = location.protocol === 'https:' ? 'wss' : 'ws';
    const socket = new WebSocket(`${scheme}://${location.host}/live`);
    socket.addEventListener('message', (message) => {
        const event = JSON.parse(message.data);
        if (event.type === 'users_loaded' || event.type === 'tickets_loaded') {
            location.reload();
        }
    });
})();
</script>";

/// The document shell around every page.
#[derive(Debug, Clone)]
pub struct Page<'a> {
    /// Document title.
    pub title: &'a str,
    /// Highlighted navigation entry.
    pub active: NavItem,
    /// Optional notice banner.
    pub banner: Option<Banner<'a>>,
    /// Whether to subscribe to live sync events and reload on change.
    pub live_reload: bool,
    /// Pre-rendered page body.
    pub body: String,
}

impl Component for Page<'_> {
    fn render(&self) -> String {
        let nav: String = NavItem::ALL
            .iter()
            .map(|item| {
                let class: &str = if *item == self.active { " class=\"active\"" } else { "" };
                format!(r#"<a href="{}"{class}>{}</a>"#, item.href(), item.label())
            })
            .collect();
        let banner: String = self.banner.as_ref().map(Component::render).unwrap_or_default();
        let script: &str = if self.live_reload { LIVE_RELOAD_SCRIPT } else { "" };

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title} | Conquest</title>
</head>
<body>
<nav>{nav}<form method="post" action="/refresh" class="inline"><input type="hidden" name="view" value="{view}"><button class="btn btn-secondary" type="submit">Refresh</button></form></nav>
{banner}
<main id="main-content">
{body}
</main>
{script}
</body>
</html>"#,
            title = escape_html(self.title),
            view = self.active.as_str(),
            body = self.body,
        )
    }
}
