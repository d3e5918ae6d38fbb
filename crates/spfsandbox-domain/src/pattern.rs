use std::fmt;

/// One component of a derived range pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment {
    /// Matched byte-for-byte.
    Literal(String),
    /// One or more ASCII digits (a `0` IPv4 octet).
    Digits,
    /// One or more arbitrary characters (an elided `::` at either end of an IPv6 range).
    Any,
    /// Zero or more arbitrary characters. Always the last segment.
    Rest,
}

/// Match pattern derived from an address-range string.
///
/// Matching is a search, not an anchored comparison: the pattern matches when
/// it matches a contiguous run of the candidate starting at any offset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RangePattern {
    segments: Vec<Segment>,
}

impl RangePattern {
    /// Derive a pattern from a range such as `192.168.0.0/16` or `2001:db8::`.
    ///
    /// Never fails: unexpected input yields a pattern that simply does not
    /// match ordinary addresses.
    pub fn derive(range: &str) -> Self {
        let range = strip_prefix_len(range);
        let mut builder = Builder::default();
        if range.contains('.') {
            derive_v4(range, &mut builder);
        } else {
            derive_v6(range, &mut builder);
        }
        builder.finish()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_match(&self, candidate: &str) -> bool {
        let input = candidate.as_bytes();
        (0..=input.len()).any(|start| match_from(&self.segments, &input[start..]))
    }
}

fn strip_prefix_len(range: &str) -> &str {
    range.split_once('/').map_or(range, |(head, _)| head)
}

fn derive_v4(range: &str, builder: &mut Builder) {
    for (i, part) in range.split('.').enumerate() {
        if i > 0 {
            builder.literal(".");
        }
        if part == "0" {
            builder.push(Segment::Digits);
        } else {
            builder.literal(part);
        }
    }
}

fn derive_v6(range: &str, builder: &mut Builder) {
    let mut middle = range;
    let leading = match middle.strip_prefix("::") {
        Some(rest) => {
            middle = rest;
            true
        }
        None => false,
    };
    let trailing = match middle.strip_suffix("::") {
        Some(rest) => {
            middle = rest;
            true
        }
        None => false,
    };

    if leading {
        builder.push(Segment::Any);
        builder.literal(":");
    }
    for (i, part) in middle.split(':').enumerate() {
        if i > 0 {
            builder.literal(":");
        }
        builder.literal(part);
    }
    if trailing {
        builder.literal(":");
        builder.push(Segment::Any);
    }
}

#[derive(Default)]
struct Builder {
    segments: Vec<Segment>,
}

impl Builder {
    /// Adjacent literals are merged so separators and components form one run.
    fn literal(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if let Some(Segment::Literal(prev)) = self.segments.last_mut() {
            prev.push_str(text);
        } else {
            self.segments.push(Segment::Literal(text.to_string()));
        }
    }

    fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    fn finish(mut self) -> RangePattern {
        self.segments.push(Segment::Rest);
        RangePattern {
            segments: self.segments,
        }
    }
}

fn match_from(segments: &[Segment], input: &[u8]) -> bool {
    let Some((first, rest)) = segments.split_first() else {
        return true;
    };

    match first {
        Segment::Literal(lit) => {
            input.starts_with(lit.as_bytes()) && match_from(rest, &input[lit.len()..])
        }
        Segment::Digits => {
            let run = input.iter().take_while(|b| b.is_ascii_digit()).count();
            (1..=run).rev().any(|n| match_from(rest, &input[n..]))
        }
        Segment::Any => (1..=input.len()).rev().any(|n| match_from(rest, &input[n..])),
        Segment::Rest => true,
    }
}

/// Renders the equivalent regular-expression source, e.g. `10\.[0-9]+.*`.
impl fmt::Display for RangePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            match segment {
                Segment::Literal(lit) => {
                    for c in lit.chars() {
                        if "\\.+*?()|[]{}^$".contains(c) {
                            f.write_str("\\")?;
                        }
                        write!(f, "{c}")?;
                    }
                }
                Segment::Digits => f.write_str("[0-9]+")?,
                Segment::Any => f.write_str(".+")?,
                Segment::Rest => f.write_str(".*")?,
            }
        }
        Ok(())
    }
}
