//! # filecrud Content Segments
//!
//! File: cli/src/core/segment.rs
//!
//! ## Overview
//!
//! A `Segment` is one block of content to be written into a file: an array, an
//! ordered sequence, or a key/value mapping. All three are serialized by a single
//! function, `Segment::write_to`, which branches on the variant.
//!
//! ## Serialization Rules
//!
//! - **Array / Sequence**: elements joined by the delimiter, with no delimiter after
//!   the last element. "Last" is decided by position, so a segment ending in two
//!   equal values still gets a delimiter between them.
//! - **Mapping**: each entry becomes `key<delimiter>value`, and entries are separated
//!   by a line terminator, so every entry occupies its own line.
//!
//! Elements, keys and values are stored as their `Display` rendering at
//! construction time, which keeps the segment independent of the caller's types.
//!
//! ## Examples
//!
//! ```rust
//! use filecrud::core::segment::Segment;
//!
//! let seg = Segment::array(&["update", "update2"]);
//! assert_eq!(seg.render(" "), "update update2");
//!
//! let map = Segment::mapping([(3, "update3"), (4, "update4")]);
//! assert_eq!(map.render(""), "3update3\n4update4");
//! ```
//!
use std::fmt::Display;
use std::io::{self, Write};

/// Line terminator written between map entries and between merged segments.
pub const LINE_TERMINATOR: &str = "\n";

/// One block of content to serialize into a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// A fixed array of elements.
    Array(Vec<String>),
    /// An ordered collection of elements.
    Sequence(Vec<String>),
    /// Key/value entries in insertion order.
    Mapping(Vec<(String, String)>),
}

impl Segment {
    /// Builds an `Array` segment from a slice of displayable values.
    pub fn array<T: Display>(items: &[T]) -> Self {
        Segment::Array(items.iter().map(ToString::to_string).collect())
    }

    /// Builds a `Sequence` segment from any iterable of displayable values.
    pub fn sequence<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Display,
    {
        Segment::Sequence(items.into_iter().map(|item| item.to_string()).collect())
    }

    /// Builds a `Mapping` segment from `(key, value)` pairs, keeping their order.
    ///
    /// Passing a `BTreeMap` gives sorted output; a `Vec` of pairs keeps the order given.
    pub fn mapping<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Display,
        V: Display,
    {
        Segment::Mapping(
            entries
                .into_iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
        )
    }

    /// Number of elements (or entries) in the segment.
    pub fn len(&self) -> usize {
        match self {
            Segment::Array(items) | Segment::Sequence(items) => items.len(),
            Segment::Mapping(entries) => entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Short name of the variant, used in log messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Segment::Array(_) => "array",
            Segment::Sequence(_) => "sequence",
            Segment::Mapping(_) => "mapping",
        }
    }

    /// Serializes the segment into `writer` using `delimiter`.
    ///
    /// Nothing is written before the first element or after the last one, so two
    /// segments can be concatenated with exactly one separator between them.
    pub fn write_to<W: Write>(&self, writer: &mut W, delimiter: &str) -> io::Result<()> {
        match self {
            Segment::Array(items) | Segment::Sequence(items) => {
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        writer.write_all(delimiter.as_bytes())?;
                    }
                    writer.write_all(item.as_bytes())?;
                }
            }
            Segment::Mapping(entries) => {
                for (index, (key, value)) in entries.iter().enumerate() {
                    if index > 0 {
                        writer.write_all(LINE_TERMINATOR.as_bytes())?;
                    }
                    writer.write_all(key.as_bytes())?;
                    writer.write_all(delimiter.as_bytes())?;
                    writer.write_all(value.as_bytes())?;
                }
            }
        }
        Ok(())
    }

    /// Serializes the segment into a `String`.
    ///
    /// Produces the same text `write_to` writes.
    pub fn render(&self, delimiter: &str) -> String {
        match self {
            Segment::Array(items) | Segment::Sequence(items) => items.join(delimiter),
            Segment::Mapping(entries) => entries
                .iter()
                .map(|(key, value)| format!("{key}{delimiter}{value}"))
                .collect::<Vec<_>>()
                .join(LINE_TERMINATOR),
        }
    }
}
