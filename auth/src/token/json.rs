use std::io;
use std::io::Write;

use serde::Serialize;
use serde_json::ser::Formatter;
use serde_json::Serializer;

/// JSON layout of token segments.
///
/// Members are separated by `", "` and keys by `": "`. Every character outside
/// printable ASCII is written as a lowercase `\uXXXX` escape, with surrogate
/// pairs above U+FFFF. Token strings are compared byte for byte, so this
/// layout is part of the token format.
#[derive(Debug, Clone, Copy, Default)]
pub struct SegmentFormatter;

impl Formatter for SegmentFormatter {
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

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut start = 0;

        for (index, ch) in fragment.char_indices() {
            if (' '..='~').contains(&ch) {
                continue;
            }

            writer.write_all(fragment[start..index].as_bytes())?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{unit:04x}")?;
            }
            start = index + ch.len_utf8();
        }

        writer.write_all(fragment[start..].as_bytes())
    }
}

/// Serialize a value with [`SegmentFormatter`].
pub fn to_vec<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, serde_json::Error> {
    let mut json = Vec::with_capacity(128);
    let mut serializer = Serializer::with_formatter(&mut json, SegmentFormatter);
    value.serialize(&mut serializer)?;
    Ok(json)
}

/// Serialize a value with [`SegmentFormatter`] into a string.
pub fn to_string<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    let json = to_vec(value)?;
    // Only ASCII is ever written
    Ok(String::from_utf8_lossy(&json).into_owned())
}
