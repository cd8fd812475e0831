//! Placeholder table for carrying colors through a markdown renderer
//!
//!     Terminal markdown renderers know nothing about Jira color tags and will strip or mangle
//!     escape codes handed to them. Instead, each colored region is bracketed by two inert tokens:
//!
//!         {color:red}hello{color}   ->   CLRM<16 hex>helloCLRM<16 hex, reset>
//!
//!     The tokens are plain alphanumerics, so a CommonMark renderer passes them through as text.
//!     Once rendering is done, [`PlaceholderTable::expand`] swaps them for real escape codes.
//!
//!     Each token carries 64 bits from the thread-local CSPRNG. A table is created per
//!     conversion and is never reused; the mutex only makes sharing one across threads safe.
//!
//!     Expanding text that never came out of the matching conversion leaves any foreign tokens
//!     untouched. That is a caller error and is not detected.

use super::tags::replace_color_tags;
use super::{ColorSpec, ANSI_RESET};
use parking_lot::Mutex;
use rand::Rng;
use regex::Regex;
use std::collections::HashMap;
use std::fmt::Write as _;
use std::sync::LazyLock;

const MARKER_PREFIX: &str = "CLRM";
const MARKER_BYTES: usize = 8;

/// Matches any marker produced by [`generate_marker`].
pub(crate) static MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("{MARKER_PREFIX}[0-9a-f]{{{}}}", MARKER_BYTES * 2))
        .expect("marker regex is valid")
});

/// Draw a fresh marker: the fixed prefix followed by 8 random bytes in lowercase hex.
pub fn generate_marker() -> String {
    let mut bytes = [0u8; MARKER_BYTES];
    rand::rng().fill(&mut bytes);

    let mut marker = String::with_capacity(MARKER_PREFIX.len() + MARKER_BYTES * 2);
    marker.push_str(MARKER_PREFIX);
    for byte in bytes {
        let _ = write!(marker, "{byte:02x}");
    }
    marker
}

/// Mapping from placeholder tokens to escape codes for one conversion.
#[derive(Debug)]
pub struct PlaceholderTable {
    placeholders: Mutex<HashMap<String, String>>,
    reset_marker: String,
}

impl PlaceholderTable {
    /// Create an empty table with a fresh reset marker.
    pub fn new() -> Self {
        PlaceholderTable {
            placeholders: Mutex::new(HashMap::new()),
            reset_marker: generate_marker(),
        }
    }

    /// The token that marks the end of every colored region in this table.
    pub fn reset_marker(&self) -> &str {
        &self.reset_marker
    }

    pub fn len(&self) -> usize {
        self.placeholders.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.placeholders.lock().is_empty()
    }

    /// The escape code recorded for `placeholder`, if any.
    pub fn escape_code(&self, placeholder: &str) -> Option<String> {
        self.placeholders.lock().get(placeholder).cloned()
    }

    /// Record `escape_code` under a new placeholder and return the placeholder.
    ///
    /// A freshly drawn token that collides with an existing entry or the reset marker is
    /// discarded and redrawn.
    pub fn register(&self, escape_code: impl Into<String>) -> String {
        let escape_code = escape_code.into();
        let mut placeholders = self.placeholders.lock();
        loop {
            let placeholder = generate_marker();
            if placeholder == self.reset_marker || placeholders.contains_key(&placeholder) {
                log::trace!("placeholder collision on {placeholder}, redrawing");
                continue;
            }
            placeholders.insert(placeholder.clone(), escape_code);
            return placeholder;
        }
    }

    /// Turn every color region of `input` into `placeholder + content + reset_marker`.
    ///
    /// Regions whose spec does not resolve to a color are replaced by their bare content and
    /// add nothing to the table.
    pub fn process_color_tags(&self, input: &str) -> String {
        replace_color_tags(input, |tag| match ColorSpec::parse(tag.spec).escape_code() {
            Some(code) => {
                let placeholder = self.register(code);
                format!("{placeholder}{}{}", tag.content, self.reset_marker)
            }
            None => {
                log::trace!("dropping color tag with unresolvable spec {:?}", tag.spec);
                tag.content.to_string()
            }
        })
    }

    /// Replace placeholders in already rendered text with their escape codes.
    ///
    /// Tokens the renderer dropped are simply not found; the text then loses its color but is
    /// otherwise intact.
    pub fn expand(&self, rendered: &str) -> String {
        let placeholders = self.placeholders.lock();

        let mut result = rendered.to_string();
        for (placeholder, code) in placeholders.iter() {
            if result.contains(placeholder.as_str()) {
                result = result.replace(placeholder.as_str(), code);
            }
        }
        if result.contains(self.reset_marker.as_str()) {
            result = result.replace(self.reset_marker.as_str(), ANSI_RESET);
        }
        result
    }
}

impl Default for PlaceholderTable {
    fn default() -> Self {
        Self::new()
    }
}
