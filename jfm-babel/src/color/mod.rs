//! Color specifications and their terminal escape codes
//!
//!     Jira color tags carry either a name from a small fixed palette or a hex triplet
//!     (`{color:red}`, `{color:#de350b}`, `{color:#f00}`). This module classifies such a spec
//!     and resolves it to an SGR foreground directive. Anything that is neither a known name
//!     nor valid hex resolves to "no color"; resolution never fails.
//!
//!     The submodules build on this:
//!     - tags.rs: the `{color[:spec]}...{color}` grammar, stripping and extraction
//!     - placeholders.rs: the per-conversion placeholder table used to tunnel codes through a renderer

pub mod placeholders;
pub mod tags;

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Resets all SGR attributes.
pub const ANSI_RESET: &str = "\x1b[0m";

static HEX_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#?([0-9a-fA-F]{6}|[0-9a-fA-F]{3})$").expect("hex color regex is valid")
});

/// Colors that may be referenced by name in a color tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Orange,
    Pink,
    Brown,
    Gray,
}

impl NamedColor {
    /// Look up a lowercase color name. `purple` and `grey` are aliases.
    pub fn from_name(name: &str) -> Option<Self> {
        let color = match name {
            "black" => NamedColor::Black,
            "red" => NamedColor::Red,
            "green" => NamedColor::Green,
            "yellow" => NamedColor::Yellow,
            "blue" => NamedColor::Blue,
            "magenta" | "purple" => NamedColor::Magenta,
            "cyan" => NamedColor::Cyan,
            "white" => NamedColor::White,
            "orange" => NamedColor::Orange,
            "pink" => NamedColor::Pink,
            "brown" => NamedColor::Brown,
            "gray" | "grey" => NamedColor::Gray,
            _ => return None,
        };
        Some(color)
    }

    /// The fixed palette escape code for this color.
    ///
    /// The eight base colors use the standard 30-37 range, the extras come from the 256-color
    /// cube and gray is bright black.
    pub fn escape_code(self) -> &'static str {
        match self {
            NamedColor::Black => "\x1b[30m",
            NamedColor::Red => "\x1b[31m",
            NamedColor::Green => "\x1b[32m",
            NamedColor::Yellow => "\x1b[33m",
            NamedColor::Blue => "\x1b[34m",
            NamedColor::Magenta => "\x1b[35m",
            NamedColor::Cyan => "\x1b[36m",
            NamedColor::White => "\x1b[37m",
            NamedColor::Orange => "\x1b[38;5;208m",
            NamedColor::Pink => "\x1b[38;5;213m",
            NamedColor::Brown => "\x1b[38;5;130m",
            NamedColor::Gray => "\x1b[90m",
        }
    }
}

/// A 24-bit color parsed from hex notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb`, `rrggbb`, `#rgb` or `rgb`.
    ///
    /// Three digit forms are widened by doubling each digit, so `f00` is `ff0000`.
    pub fn from_hex(spec: &str) -> Option<Self> {
        if !HEX_COLOR.is_match(spec) {
            return None;
        }
        let digits = spec.trim_start_matches('#');
        let expanded: String = if digits.len() == 3 {
            digits.chars().flat_map(|c| [c, c]).collect()
        } else {
            digits.to_string()
        };

        let channel = |range: std::ops::Range<usize>| {
            expanded
                .get(range)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
        };
        Some(Rgb::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Truecolor foreground directive (`ESC[38;2;r;g;bm`).
    pub fn escape_code(&self) -> String {
        format!("\x1b[38;2;{};{};{}m", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Classification of the `spec` part of a `{color:spec}` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSpec {
    Named(NamedColor),
    Hex(Rgb),
    /// Empty or unrecognized; rendered without color.
    Invalid,
}

impl ColorSpec {
    /// Classify a raw spec. Surrounding whitespace and case are ignored.
    ///
    /// Names win over hex: a spec is only parsed as hex when it is not a known name.
    pub fn parse(raw: &str) -> Self {
        let spec = normalize_spec(raw);
        if let Some(named) = NamedColor::from_name(&spec) {
            return ColorSpec::Named(named);
        }
        match Rgb::from_hex(&spec) {
            Some(rgb) => ColorSpec::Hex(rgb),
            None => ColorSpec::Invalid,
        }
    }

    pub fn is_valid(&self) -> bool {
        !matches!(self, ColorSpec::Invalid)
    }

    /// The escape code selecting this color, `None` for invalid specs.
    pub fn escape_code(&self) -> Option<String> {
        match self {
            ColorSpec::Named(named) => Some(named.escape_code().to_string()),
            ColorSpec::Hex(rgb) => Some(rgb.escape_code()),
            ColorSpec::Invalid => None,
        }
    }
}

/// Trim and lowercase a color spec.
pub fn normalize_spec(raw: &str) -> String {
    raw.trim().to_ascii_lowercase()
}

/// Convert a color spec into an ANSI escape code.
///
/// Returns an empty string when the spec is neither a named color nor valid hex.
pub fn color_to_ansi(spec: &str) -> String {
    ColorSpec::parse(spec).escape_code().unwrap_or_default()
}
