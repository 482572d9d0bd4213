//! Precomputed ASCII character classification tables for the lexer.
//!
//! The lexer's dispatch loop classifies one character per token start, so
//! classification must be O(1). Each table is a 128-entry `bool` array built
//! at compile time; non-ASCII characters fall outside every class and are
//! reported as unexpected characters by the lexer.

const TABLE_LEN: usize = 128;

const fn build_name_start() -> [bool; TABLE_LEN] {
    let mut table = [false; TABLE_LEN];
    let mut i = 0;
    while i < TABLE_LEN {
        let c = i as u8;
        table[i] = c == b'_' || c.is_ascii_alphabetic();
        i += 1;
    }
    table
}

const fn build_name_continue() -> [bool; TABLE_LEN] {
    let mut table = [false; TABLE_LEN];
    let mut i = 0;
    while i < TABLE_LEN {
        let c = i as u8;
        table[i] = c == b'_' || c.is_ascii_alphanumeric();
        i += 1;
    }
    table
}

const fn build_digit() -> [bool; TABLE_LEN] {
    let mut table = [false; TABLE_LEN];
    let mut i = 0;
    while i < TABLE_LEN {
        table[i] = (i as u8).is_ascii_digit();
        i += 1;
    }
    table
}

const fn build_digit_or_minus() -> [bool; TABLE_LEN] {
    let mut table = build_digit();
    table[b'-' as usize] = true;
    table
}

const fn build_punctuator() -> [bool; TABLE_LEN] {
    let mut table = [false; TABLE_LEN];
    let punctuators = b"!$&():=@[]{|}";
    let mut i = 0;
    while i < punctuators.len() {
        table[punctuators[i] as usize] = true;
        i += 1;
    }
    table
}

const fn build_escape() -> [bool; TABLE_LEN] {
    let mut table = [false; TABLE_LEN];
    let escapes = b"\"\\/bfnrtu";
    let mut i = 0;
    while i < escapes.len() {
        table[escapes[i] as usize] = true;
        i += 1;
    }
    table
}

static NAME_START: [bool; TABLE_LEN] = build_name_start();
static NAME_CONTINUE: [bool; TABLE_LEN] = build_name_continue();
static DIGIT: [bool; TABLE_LEN] = build_digit();
static DIGIT_OR_MINUS: [bool; TABLE_LEN] = build_digit_or_minus();
static PUNCTUATOR: [bool; TABLE_LEN] = build_punctuator();
static ESCAPE: [bool; TABLE_LEN] = build_escape();

#[inline]
fn lookup(table: &'static [bool; TABLE_LEN], ch: char) -> bool {
    (ch as usize) < TABLE_LEN && table[ch as usize]
}

/// Returns `true` if `ch` can start a GraphQL name (`/[_A-Za-z]/`).
#[inline]
pub(crate) fn is_name_start(ch: char) -> bool {
    lookup(&NAME_START, ch)
}

/// Returns `true` if `ch` can continue a GraphQL name (`/[_0-9A-Za-z]/`).
#[inline]
pub(crate) fn is_name_continue(ch: char) -> bool {
    lookup(&NAME_CONTINUE, ch)
}

/// Returns `true` if `ch` is an ASCII digit.
#[inline]
pub(crate) fn is_digit(ch: char) -> bool {
    lookup(&DIGIT, ch)
}

/// Returns `true` if `ch` can start a numeric literal (digit or `-`).
#[inline]
pub(crate) fn is_digit_or_minus(ch: char) -> bool {
    lookup(&DIGIT_OR_MINUS, ch)
}

/// Returns `true` if `ch` is a single-character GraphQL punctuator.
///
/// `.` is not in this class: the spread operator `...` is handled by a
/// dedicated lexer rule.
#[inline]
pub(crate) fn is_punctuator(ch: char) -> bool {
    lookup(&PUNCTUATOR, ch)
}

/// Returns `true` if `ch` is a valid character after `\` in a single-line
/// string literal (`" \ / b f n r t u`).
#[inline]
pub(crate) fn is_escape_char(ch: char) -> bool {
    lookup(&ESCAPE, ch)
}
