//! The name lexer.
//!
//! A raw name is cut into segments at whitespace and hyphens; a dot closes the
//! segment it follows ("J." "Ing." "IV."), and touching dotted segments that
//! spell a known title are joined again ("Ph.D."). Every segment is then read
//! against the lexicon. A segment with several readings multiplies the number
//! of token sequences; the sequences are ordered by the readings of the first
//! segment, then the second, and so on. All of them are returned, or none if
//! there are more than the configured limit.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use namegen_foundation::{CategoryAssignment, Error, PartOfSpeech, Result};
use tracing::{debug, trace};

use crate::config::LexerConfig;
use crate::lexicon::Lexicon;
use crate::roman::roman_value;
use crate::span::Span;
use crate::token::{MorphToken, TokenKind, TokenSequence};

/// One way of reading a segment.
#[derive(Clone, Debug)]
struct Reading {
    kind: TokenKind,
    assignments: Arc<[CategoryAssignment]>,
}

impl Reading {
    fn bare(kind: TokenKind) -> Self {
        Self {
            kind,
            assignments: Arc::from([CategoryAssignment::new()]),
        }
    }
}

/// A piece of the raw name that becomes exactly one token.
#[derive(Clone, Copy, Debug)]
struct Segment<'a> {
    text: &'a str,
    span: Span,
}

/// Converts raw names into candidate token sequences.
///
/// The lexer is `Sync`: the readings cache sits behind a lock and lexing never
/// changes what a later call returns.
#[derive(Debug)]
pub struct Lexer {
    lexicon: Lexicon,
    config: LexerConfig,
    cache: RwLock<HashMap<String, Arc<[Reading]>>>,
}

impl Lexer {
    /// Creates a lexer with the default configuration.
    #[must_use]
    pub fn new(lexicon: Lexicon) -> Self {
        Self::with_config(lexicon, LexerConfig::default())
    }

    /// Creates a lexer with the given configuration.
    #[must_use]
    pub fn with_config(lexicon: Lexicon, config: LexerConfig) -> Self {
        Self {
            lexicon,
            config,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// The lexicon this lexer reads against.
    #[must_use]
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// The lexer configuration.
    #[must_use]
    pub fn config(&self) -> &LexerConfig {
        &self.config
    }

    /// Tokenizes a raw name into alternative token sequences.
    ///
    /// Every returned sequence covers the whole name. The output depends only
    /// on the input and the lexicon, never on earlier calls.
    ///
    /// # Errors
    /// Returns `UnlexableInput` for empty input, for characters outside the
    /// alphabet, and for a dot that does not follow a letter. Returns
    /// `TooAmbiguous` when the name has more alternatives than
    /// `max_alternatives`.
    pub fn tokens(&self, input: &str) -> Result<Vec<TokenSequence>> {
        let segments = self.join_titles(input, self.segments(input)?);
        let readings: Vec<Arc<[Reading]>> = segments
            .iter()
            .map(|segment| self.readings(segment.text))
            .collect();

        let count = readings
            .iter()
            .try_fold(1usize, |count, readings| count.checked_mul(readings.len()))
            .unwrap_or(usize::MAX);
        if count > self.config.max_alternatives {
            debug!(input, count, limit = self.config.max_alternatives, "too many alternatives");
            return Err(Error::too_ambiguous(input, count, self.config.max_alternatives));
        }

        let mut sequences: Vec<Vec<MorphToken>> = vec![Vec::with_capacity(segments.len())];
        for (segment, readings) in segments.iter().zip(&readings) {
            let mut next = Vec::with_capacity(sequences.len() * readings.len());
            for sequence in &sequences {
                for reading in readings.iter() {
                    let mut extended = sequence.clone();
                    extended.push(MorphToken::new(
                        reading.kind,
                        segment.text,
                        segment.span,
                        Arc::clone(&reading.assignments),
                    ));
                    next.push(extended);
                }
            }
            sequences = next;
        }

        trace!(input, alternatives = sequences.len(), "lexed name");
        Ok(sequences.into_iter().map(TokenSequence::new).collect())
    }

    /// Number of segments currently cached.
    #[must_use]
    pub fn cached_segments(&self) -> usize {
        self.cache.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Drops every cached reading.
    pub fn clear_cache(&self) {
        self.cache
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    fn segments<'a>(&self, input: &'a str) -> Result<Vec<Segment<'a>>> {
        let mut segments = Vec::new();
        let mut start: Option<usize> = None;

        let flush = |segments: &mut Vec<Segment<'a>>, start: &mut Option<usize>, end: usize| {
            if let Some(s) = start.take() {
                segments.push(Segment {
                    text: &input[s..end],
                    span: Span::new(s, end),
                });
            }
        };

        for (pos, c) in input.char_indices() {
            if c.is_whitespace() {
                flush(&mut segments, &mut start, pos);
            } else if c == '-' {
                flush(&mut segments, &mut start, pos);
                segments.push(Segment {
                    text: &input[pos..=pos],
                    span: Span::new(pos, pos + 1),
                });
            } else if c == '.' {
                if start.is_none() {
                    return Err(Error::unlexable_input(input, pos, Some(c)));
                }
                flush(&mut segments, &mut start, pos + 1);
            } else if self.config.is_letter(c) {
                start.get_or_insert(pos);
            } else {
                return Err(Error::unlexable_input(input, pos, Some(c)));
            }
        }
        flush(&mut segments, &mut start, input.len());

        if segments.is_empty() {
            return Err(Error::unlexable_input(input, 0, None));
        }
        Ok(segments)
    }

    /// Joins touching dotted segments that spell a known title ("Ph.D.").
    /// The longest title wins.
    fn join_titles<'a>(&self, input: &'a str, segments: Vec<Segment<'a>>) -> Vec<Segment<'a>> {
        let mut joined = Vec::with_capacity(segments.len());
        let mut rest = segments.as_slice();
        while let Some((first, _)) = rest.split_first() {
            let touching = rest
                .windows(2)
                .take_while(|pair| {
                    pair[0].text.ends_with('.')
                        && pair[1].text.ends_with('.')
                        && pair[0].span.end == pair[1].span.start
                })
                .count();

            let title = (1..=touching).rev().find_map(|last| {
                let span = Span::new(first.span.start, rest[last].span.end);
                let text = span.text(input);
                self.lexicon.is_title(text).then_some((last, Segment { text, span }))
            });
            match title {
                Some((last, segment)) => {
                    joined.push(segment);
                    rest = &rest[last + 1..];
                }
                None => {
                    joined.push(*first);
                    rest = &rest[1..];
                }
            }
        }
        joined
    }

    fn readings(&self, surface: &str) -> Arc<[Reading]> {
        if !self.config.cache {
            return Arc::from(self.read_segment(surface));
        }

        let cache = self.cache.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(readings) = cache.get(surface) {
            trace!(surface, "segment cache hit");
            return Arc::clone(readings);
        }
        drop(cache);

        let readings: Arc<[Reading]> = Arc::from(self.read_segment(surface));
        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        if cache.len() >= self.config.cache_capacity {
            debug!(segments = cache.len(), "segment cache full, clearing");
            cache.clear();
        }
        cache
            .entry(surface.to_string())
            .or_insert_with(|| Arc::clone(&readings));
        readings
    }

    fn read_segment(&self, surface: &str) -> Vec<Reading> {
        let mut readings: Vec<Reading> = Vec::new();
        let numeral = || Reading {
            kind: TokenKind::RomanNumeral,
            assignments: Arc::from([CategoryAssignment::new().with(PartOfSpeech::Numeral)]),
        };

        if surface == "-" {
            return vec![Reading::bare(TokenKind::Dash)];
        }

        if let Some(stem) = surface.strip_suffix('.') {
            if self.lexicon.is_title(surface) {
                readings.push(Reading::bare(TokenKind::Title));
            }
            if roman_value(stem).is_some() {
                readings.push(numeral());
            }
            let mut chars = stem.chars();
            if let (Some(letter), None) = (chars.next(), chars.next()) {
                if letter.is_uppercase() {
                    readings.push(Reading::bare(TokenKind::Initial));
                }
            }
            if readings.is_empty() {
                readings.push(Reading::bare(TokenKind::Abbreviation));
            }
        } else {
            for entry in self.lexicon.lookup(surface) {
                readings.push(Reading {
                    kind: entry.kind,
                    assignments: Arc::from(entry.assignments.as_slice()),
                });
            }
            let has = |readings: &[Reading], kind: TokenKind| readings.iter().any(|r| r.kind == kind);
            if roman_value(surface).is_some() && !has(&readings, TokenKind::RomanNumeral) {
                readings.push(numeral());
            }
            let len = surface.chars().count();
            if (2..=self.config.abbreviation_max_len).contains(&len)
                && surface.chars().all(char::is_uppercase)
                && !has(&readings, TokenKind::Abbreviation)
            {
                readings.push(Reading::bare(TokenKind::Abbreviation));
            }
            if readings.is_empty() {
                readings.push(Reading {
                    kind: TokenKind::Word,
                    assignments: Arc::from(self.lexicon.suffix_assignments(surface)),
                });
            }
        }

        readings.sort_by_key(|reading| reading.kind);
        readings
    }
}
