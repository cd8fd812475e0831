//! Conversion between CommonMark and Jira flavored markdown
//!
//!     This crate translates between CommonMark and Jira wiki markup ("Jira flavored markdown")
//!     in both directions, and lets Jira color annotations survive a trip through a third-party
//!     markdown renderer so they can be shown as terminal colors afterwards.
//!
//!     This is a pure lib: no printing, no environment, no file access. Configuration lives in
//!     the jfm-config crate.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Dialect enum, name and extension lookup
//!     ├── transforms.rs           # The public conversion pipelines
//!     ├── formats
//!     │   ├── markdown            # comrak parsing options
//!     │   └── jira
//!     │       ├── parser.rs       # Jira → CommonMark
//!     │       ├── serializer.rs   # CommonMark AST → Jira
//!     │       └── mod.rs
//!     ├── color
//!     │   ├── mod.rs              # Color specs and escape codes
//!     │   ├── tags.rs             # {color} tag grammar
//!     │   └── placeholders.rs     # Placeholder table
//!     └── lib.rs
//!
//! Testing
//!     tests
//!     ├── lib.rs
//!     ├── colors.rs
//!     └── jira
//!         ├── export.rs
//!         └── import.rs
//!
//! Color Tunnelling
//!
//!     A terminal markdown renderer understands CommonMark but not `{color:red}...{color}`, and it
//!     strips raw escape codes. So the color-preserving path replaces each colored region with
//!     `placeholder + content + reset marker`, where both tokens are random alphanumerics that
//!     any renderer treats as ordinary words. After rendering, the caller expands the tokens with
//!     the table returned alongside the markdown:
//!
//!         (markdown, table) = from_jira_md_with_colors(jira)
//!         rendered          = <external renderer>(markdown)
//!         terminal_text     = table.expand(rendered)
//!
//!     A table belongs to the one conversion that created it. Expanding unrelated text with it
//!     leaves foreign tokens visible; this is a caller error and is not detected.
//!
//! Errors
//!
//!     Conversions are total. Malformed color tags lose their color and keep their content,
//!     unknown color specs mean "no color", and both translators accept any input.
//!
//! Lossy Conversions
//!
//!     Full round tripping between the dialects is not a goal. See formats/jira/mod.rs for the
//!     element mapping and what each direction drops.

pub mod color;
pub mod error;
pub mod format;
pub mod formats;
pub mod transforms;

pub use color::placeholders::PlaceholderTable;
pub use color::{color_to_ansi, ColorSpec, NamedColor, Rgb, ANSI_RESET};
pub use error::FormatError;
pub use format::{convert, Dialect};
pub use formats::{JiraOptions, MarkdownExtensions};
pub use transforms::{
    from_jira_md, from_jira_md_with_colors, from_jira_md_with_options, to_jira_md,
    to_jira_md_with_options, ReverseOptions,
};
