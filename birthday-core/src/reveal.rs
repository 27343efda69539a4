//! Character-by-character reveal of the generated poem.

use std::str::CharIndices;
use std::time::Duration;

/// Delay between revealed characters.
pub const DEFAULT_CADENCE: Duration = Duration::from_millis(30);

/// Lazy sequence of ever-longer prefixes of a string.
///
/// Yields `s[..1]`, `s[..2]`, ... `s` measured in characters, so multi-byte
/// characters are never split. The last item is the input unchanged. The
/// iterator only restarts by building a new one.
#[derive(Debug, Clone)]
pub struct Reveal<'a> {
    text: &'a str,
    chars: CharIndices<'a>,
    cadence: Duration,
}

impl<'a> Reveal<'a> {
    pub fn new(text: &'a str, cadence: Duration) -> Self {
        Self {
            text,
            chars: text.char_indices(),
            cadence,
        }
    }

    /// How long to hold each prefix on screen.
    pub fn cadence(&self) -> Duration {
        self.cadence
    }

    /// Wall-clock time the whole reveal takes.
    pub fn total_duration(&self) -> Duration {
        let count = u32::try_from(self.text.chars().count()).unwrap_or(u32::MAX);
        self.cadence.saturating_mul(count)
    }
}

impl<'a> Iterator for Reveal<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let (start, ch) = self.chars.next()?;
        Some(&self.text[..start + ch.len_utf8()])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chars.size_hint()
    }
}
