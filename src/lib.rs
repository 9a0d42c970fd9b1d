//! Online-Judge Batch Solutions
//! =========================================
//!
//! Problems
//! --------
//! Two independent batch problems, each with its own driver binary:
//!
//! 1) Rotating elimination (BOJ 2346): N balloons stand in a circle, each
//!    holding a nonzero skip count. Pop the front balloon, record its
//!    original 1-based position, then rotate the survivors by the popped
//!    count (direction depends on sign). Repeat until none remain; the
//!    recorded positions are the answer.
//!
//! 2) Pascal's triangle (SWEA 2005): for each of T test cases, build the
//!    first N rows of Pascal's triangle and print them under a `#i` case
//!    label.
//!
//! Approach
//! --------
//! 1) Elimination ([`elimination`]):
//!    - The circle is a `VecDeque<(i64, usize)>` of (count, original index).
//!    - Pop front, record, then rotate: left by `k - 1` for positive `k`
//!      (the pop itself consumed one step of the walk), right by `|k|` for
//!      negative `k`. Rotation amounts are reduced modulo the surviving
//!      queue length so oversized counts wrap instead of panicking.
//!    - `simulate_pop_push` is the obviously-correct reference: rotation as
//!      repeated move-one-end-to-the-other, no modulo anywhere. The two are
//!      benchmarked against each other in `benches/rotation.rs`.
//!
//! 2) Pascal ([`pascal`]):
//!    - Row r is built from row r-1: edges pinned at 1, interior cell c is
//!      the sum of cells c-1 and c above. `generate` grows each row
//!      left-to-right; `generate_prefilled` allocates the whole triangle
//!      filled with 1s and overwrites interiors in place. Benchmarked
//!      against each other in `benches/pascal.rs`.
//!
//! 3) I/O (this module):
//!    - [`Tokens`] slurps the whole input once and hands out
//!      whitespace-separated integers with checked byte-level parsing.
//!    - [`append_u64`] formats decimals into a byte buffer without going
//!      through `format!`; drivers assemble one output buffer and write it
//!      in a single call.
//!
//! Correctness notes
//! -----------------
//! - The removal order is always a permutation of 1..=N (property-tested).
//! - Negative counts rotate right. The judge's sample `3 2 1 -3 -1`
//!   producing `1 4 5 3 2` pins the direction; see the fixtures in
//!   `elimination::tests`.
//! - Triangle cells are `u64`, exact through row 67; judge inputs stay far
//!   below that.
//!
//! Performance notes
//! -----------------
//! - Both problems are tiny; the drivers still read and write through single
//!   buffers because token-at-a-time stdio is the usual judge-submission
//!   time sink.
//! - Build with release settings (opt-level=3, lto=thin, codegen-units=1)
//!   for benchmarking.

use std::io::Read;

use thiserror::Error;

pub mod elimination;
pub mod pascal;

pub use elimination::{simulate, simulate_pop_push};
pub use pascal::{generate, generate_prefilled, Triangle};

/// Errors from the input scanning layer.
///
/// Well-formed judge input never produces one of these; drivers surface them
/// through `anyhow` rather than panicking on malformed input.
#[derive(Debug, Error)]
pub enum ScanError {
    /// Input ended while another token was expected.
    #[error("unexpected end of input")]
    UnexpectedEof,

    /// A token was not a (possibly negative) decimal integer, or was out of
    /// range for the requested type.
    #[error("invalid integer token `{0}`")]
    InvalidToken(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Whitespace-separated integer tokens over a fully-buffered input.
///
/// Judge inputs are small and closed, so the scanner reads everything up
/// front and then walks the byte buffer; newlines and spaces are
/// interchangeable separators, matching the loose line structure of the
/// problem statements.
pub struct Tokens {
    buf: Vec<u8>,
    pos: usize,
}

impl Tokens {
    /// Slurp `reader` to EOF and scan tokens from the buffered bytes.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, ScanError> {
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf)?;
        Ok(Self { buf, pos: 0 })
    }

    fn next_field(&mut self) -> Result<&[u8], ScanError> {
        while self.pos < self.buf.len() && self.buf[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
        if self.pos >= self.buf.len() {
            return Err(ScanError::UnexpectedEof);
        }
        let start = self.pos;
        while self.pos < self.buf.len() && !self.buf[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
        Ok(&self.buf[start..self.pos])
    }

    /// Next token as a signed integer.
    pub fn next_i64(&mut self) -> Result<i64, ScanError> {
        let field = self.next_field()?;
        parse_i64(field)
    }

    /// Next token as a nonnegative count.
    pub fn next_usize(&mut self) -> Result<usize, ScanError> {
        let v = self.next_i64()?;
        usize::try_from(v).map_err(|_| ScanError::InvalidToken(v.to_string()))
    }
}

#[inline]
fn parse_i64(bytes: &[u8]) -> Result<i64, ScanError> {
    let (neg, digits) = match bytes.split_first() {
        Some((b'-', rest)) => (true, rest),
        _ => (false, bytes),
    };
    if digits.is_empty() {
        return Err(invalid(bytes));
    }
    let mut v: i64 = 0;
    for &c in digits {
        if !c.is_ascii_digit() {
            return Err(invalid(bytes));
        }
        v = v
            .checked_mul(10)
            .and_then(|v| v.checked_add((c - b'0') as i64))
            .ok_or_else(|| invalid(bytes))?;
    }
    Ok(if neg { -v } else { v })
}

fn invalid(bytes: &[u8]) -> ScanError {
    ScanError::InvalidToken(String::from_utf8_lossy(bytes).into_owned())
}

/// Append the decimal form of `v` to `dst` without allocating a string.
#[inline]
pub fn append_u64(dst: &mut Vec<u8>, mut v: u64) {
    if v == 0 {
        dst.push(b'0');
        return;
    }
    let mut tmp = [0u8; 20];
    let mut i = 0;
    while v > 0 {
        tmp[i] = b'0' + (v % 10) as u8;
        v /= 10;
        i += 1;
    }
    while i > 0 {
        i -= 1;
        dst.push(tmp[i]);
    }
}
