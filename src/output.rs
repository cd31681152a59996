use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CreditsError;

pub const DEFAULT_TITLE_FONT_SIZE: u32 = 16;
pub const DEFAULT_FONT_SIZE: u32 = 12;

/// One repository's section of the credits document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditsEntry {
    pub title: String,
    pub body: String,
}

/// Font sizes in points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentStyle {
    pub title_font_size: u32,
    pub font_size: u32,
}

impl Default for DocumentStyle {
    fn default() -> Self {
        Self {
            title_font_size: DEFAULT_TITLE_FONT_SIZE,
            font_size: DEFAULT_FONT_SIZE,
        }
    }
}

/// Render the entries as an RTF document: a bold title followed by the
/// license body and a blank line, per entry, in order.
pub fn assemble(entries: &[CreditsEntry], style: DocumentStyle) -> Vec<u8> {
    let mut output = String::new();

    output.push_str("{\\rtf1\\ansi\\ansicpg1252\\deff0\n");
    output.push_str("{\\fonttbl{\\f0\\fswiss\\fcharset0 Helvetica;}{\\f1\\fswiss\\fcharset0 Helvetica-Bold;}}\n");
    output.push_str("\\pard\\f0\n");

    for entry in entries {
        output.push_str(&format!(
            "{{\\f1\\b\\fs{} {}\\par}}\n",
            half_points(style.title_font_size),
            escape_rtf(&entry.title)
        ));
        output.push_str(&format!(
            "{{\\f0\\fs{} {}\\par\\par}}\n",
            half_points(style.font_size),
            escape_rtf(&entry.body)
        ));
    }

    output.push('}');
    output.into_bytes()
}

/// Write the document in one go; failures are reported, not retried.
pub fn persist(document: &[u8], path: &Path) -> Result<(), CreditsError> {
    fs::write(path, document).map_err(|source| CreditsError::OutputWriteFailure {
        path: path.to_path_buf(),
        source,
    })
}

fn half_points(points: u32) -> u32 {
    points.saturating_mul(2)
}

/// Escape control characters and encode non-ASCII text as `\uN?`.
fn escape_rtf(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '{' => escaped.push_str("\\{"),
            '}' => escaped.push_str("\\}"),
            '\t' => escaped.push_str("\\tab "),
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                escaped.push_str("\\line\n");
            }
            '\n' => escaped.push_str("\\line\n"),
            c if c.is_ascii() && !c.is_ascii_control() => escaped.push(c),
            c if c.is_ascii() => {}
            c => {
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    // RTF takes signed 16-bit code units.
                    escaped.push_str(&format!("\\u{}?", *unit as i16));
                }
            }
        }
    }

    escaped
}
