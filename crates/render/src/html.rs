// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Escapes text for use in HTML element content and quoted attributes.
#[must_use]
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}

/// A piece of markup built from a view model.
///
/// Implementors are responsible for escaping every piece of interpolated
/// text they did not produce themselves.
pub trait Component {
    /// Renders the component to an HTML fragment.
    fn render(&self) -> String;
}

/// Renders each item and concatenates the fragments.
pub(crate) fn render_all<C: Component>(items: &[C]) -> String {
    items.iter().map(Component::render).collect()
}
