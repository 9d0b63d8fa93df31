// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Background colours — the named palette, `#RRGGBB[AA]` hex, and `r,g,b[,a]`
// tuples, all resolving to a single 8-bit RGBA value.

use std::fmt;
use std::str::FromStr;

use crate::error::{PngExpandError, Result};

/// An 8-bit RGBA colour. Equality is exact, component-wise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);
    pub const WHITE: Color = Color::rgba(255, 255, 255, 255);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Whether the alpha channel is fully opaque.
    pub fn is_opaque(&self) -> bool {
        self.a == u8::MAX
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Short filename-safe label: `clear`, `white`, or `r-g-b[-a]`.
    ///
    /// Only the exact `(0,0,0,0)` value counts as `clear`; other fully
    /// transparent colours keep their numeric label.
    pub fn descriptor(&self) -> String {
        if *self == Color::TRANSPARENT {
            return "clear".to_string();
        }
        if *self == Color::WHITE {
            return "white".to_string();
        }
        let mut desc = format!("{}-{}-{}", self.r, self.g, self.b);
        if !self.is_opaque() {
            desc.push_str(&format!("-{}", self.a));
        }
        desc
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

impl FromStr for Color {
    type Err = PngExpandError;

    fn from_str(s: &str) -> Result<Self> {
        parse_color(s)
    }
}

/// Named colours accepted by [`parse_color`], matched case-insensitively.
static NAMED_COLORS: &[(&str, Color)] = &[
    ("black", Color::rgb(0, 0, 0)),
    ("white", Color::WHITE),
    ("red", Color::rgb(255, 0, 0)),
    ("green", Color::rgb(0, 255, 0)),
    ("blue", Color::rgb(0, 0, 255)),
    ("yellow", Color::rgb(255, 255, 0)),
    ("cyan", Color::rgb(0, 255, 255)),
    ("magenta", Color::rgb(255, 0, 255)),
    ("gray", Color::rgb(128, 128, 128)),
    ("lightgray", Color::rgb(211, 211, 211)),
    ("darkgray", Color::rgb(64, 64, 64)),
    ("transparent", Color::TRANSPARENT),
    ("clear", Color::TRANSPARENT),
];

/// Look up a palette entry by name, ignoring ASCII case.
pub fn named_color(name: &str) -> Option<Color> {
    NAMED_COLORS
        .iter()
        .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
        .map(|(_, color)| *color)
}

/// Parse a background colour specification.
///
/// Accepted forms, tried in order:
/// - a palette name (`red`, `LightGray`, `clear`, ...)
/// - `#RRGGBB` or `#RRGGBBAA`
/// - `r,g,b` or `r,g,b,a` with decimal components in `0..=255`
pub fn parse_color(spec: &str) -> Result<Color> {
    if let Some(color) = named_color(spec) {
        return Ok(color);
    }

    let invalid = || PngExpandError::InvalidColorFormat(spec.to_string());

    if let Some(hex) = spec.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(invalid);
    }

    if spec.contains(',') {
        return parse_tuple(spec).ok_or_else(invalid);
    }

    Err(invalid())
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !(hex.len() == 6 || hex.len() == 8) || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

    let (r, g, b) = (channel(0)?, channel(2)?, channel(4)?);
    let a = if hex.len() == 8 { channel(6)? } else { u8::MAX };
    Some(Color::rgba(r, g, b, a))
}

fn parse_tuple(spec: &str) -> Option<Color> {
    let parts = spec
        .split(',')
        .map(|part| part.trim().parse::<u8>().ok())
        .collect::<Option<Vec<u8>>>()?;

    match parts.as_slice() {
        [r, g, b] => Some(Color::rgb(*r, *g, *b)),
        [r, g, b, a] => Some(Color::rgba(*r, *g, *b, *a)),
        _ => None,
    }
}
