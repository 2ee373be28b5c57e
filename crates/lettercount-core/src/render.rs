//! The measured text form.

use serde::ser::{Error as _, Serialize};
use serde_json::ser::Formatter;
use serde_json::Serializer;
use std::io;

/// Formatter defining the measured text form.
///
/// Separators carry a space (`", "` between elements and members, `": "`
/// after a key) and every character from U+007F upward is written as a
/// `\uXXXX` escape, as a surrogate pair beyond the BMP. The output is
/// therefore always ASCII.
#[derive(Clone, Copy, Debug, Default)]
pub struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    // Fragments only carry characters the serializer does not escape on
    // its own. Quotes, backslashes, and controls arrive through
    // `write_char_escape`, whose defaults already produce the short
    // escapes and lowercase `\u00xx` forms.
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        for ch in fragment.chars() {
            if ch < '\u{7f}' {
                writer.write_all(&[ch as u8])?;
            } else {
                let mut utf16 = [0u16; 2];
                for unit in ch.encode_utf16(&mut utf16) {
                    write!(writer, "\\u{:04x}", unit)?;
                }
            }
        }
        Ok(())
    }
}

/// Serialize a value to the measured text form.
pub fn render<T>(value: &T) -> serde_json::Result<String>
where
    T: ?Sized + Serialize,
{
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, SpacedFormatter);
    value.serialize(&mut ser)?;
    String::from_utf8(buf).map_err(serde_json::Error::custom)
}
