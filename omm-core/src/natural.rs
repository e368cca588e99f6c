//! Natural (alphanumeric) string ordering
//!
//! Strings are walked as alternating runs of ASCII digits and non-digits. Runs that differ are
//! compared as numbers when both are digits, otherwise byte-wise, so `item2` sorts before `item10`.
//! Case and punctuation are compared exactly as written.

use std::cmp::Ordering;

/// Compare two strings in natural order
pub fn natural_cmp(l: &str, r: &str) -> Ordering {
    if l.is_empty() || r.is_empty() {
        return l.cmp(r);
    }

    let (l, r) = (l.as_bytes(), r.as_bytes());
    let (mut li, mut ri) = (0, 0);

    loop {
        let lt = &l[li..run_end(l, li)];
        let rt = &r[ri..run_end(r, ri)];
        let lexical = lt.cmp(rt);

        // One side ran out; the empty token decides.
        if li == l.len() || ri == r.len() {
            return lexical;
        }

        if lexical != Ordering::Equal {
            if is_digit_run(lt) && is_digit_run(rt) {
                let numeric = cmp_digit_runs(lt, rt);
                if numeric != Ordering::Equal {
                    return numeric;
                }
            }
            return lexical;
        }

        li += lt.len();
        ri += rt.len();
    }
}

/// Whether `l` comes before `r` in natural order
pub fn natural_less(l: &str, r: &str) -> bool {
    natural_cmp(l, r) == Ordering::Less
}

/// End of the digit or non-digit run starting at `start`
fn run_end(s: &[u8], start: usize) -> usize {
    let Some(first) = s.get(start) else {
        return start;
    };
    let digit = first.is_ascii_digit();

    s[start..]
        .iter()
        .position(|b| b.is_ascii_digit() != digit)
        .map_or(s.len(), |offset| start + offset)
}

fn is_digit_run(run: &[u8]) -> bool {
    run.first().is_some_and(u8::is_ascii_digit)
}

/// Compare two digit runs by value, without limiting their length
fn cmp_digit_runs(l: &[u8], r: &[u8]) -> Ordering {
    let l = strip_leading_zeros(l);
    let r = strip_leading_zeros(r);
    l.len().cmp(&r.len()).then_with(|| l.cmp(r))
}

fn strip_leading_zeros(run: &[u8]) -> &[u8] {
    let zeros = run.iter().take_while(|&&b| b == b'0').count();
    &run[zeros..]
}
