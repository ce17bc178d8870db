#![deny(warnings)]

use crate::scanner::Scanner;

static WHITE: &[char] = &[' ', '\n', '\r', '\t'];
static DIGITS: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];
static ALPHA: &[char] = &[
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o',
    'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O',
    'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z'];
static MATH_OPS: &[char] = &['+', '-', '*', '/', '(', ')', ','];

/*
 * The scan_* helpers expect the scanner to be at a clean start, ie: after
 * a call to ignore() or extract(). On a match they return the lexeme and
 * leave the scanner clean again, otherwise they restore the position.
 */
impl<I: Iterator<Item=char>> Scanner<I> {
    pub fn extract_string(&mut self) -> String {
        self.extract().into_iter().collect()
    }

    /// Discard leading whitespace, returns if anything was skipped.
    pub fn ignore_ws(&mut self) -> bool {
        let skipped = self.skip_all(WHITE);
        self.ignore();
        skipped
    }

    // scan numbers like [0-9]*(\.[0-9]*)?([eE][+-]?[0-9]+)? with at least
    // one digit in the mantissa, signs are left to the operators
    pub fn scan_number(&mut self) -> Option<String> {
        let backtrack = self.pos();
        let int_part = self.skip_all(DIGITS);
        let frac_part = self.accept(&'.').is_some() && self.skip_all(DIGITS);
        if !int_part && !frac_part {
            self.set_pos(backtrack);
            return None;
        }
        // check for exponent part
        let backtrack = self.pos();
        if self.accept_any(&['e', 'E']).is_some() {
            self.accept_any(&['+', '-']); // exponent sign is optional
            if !self.skip_all(DIGITS) {
                self.set_pos(backtrack);
            }
        }
        Some(self.extract_string())
    }

    pub fn scan_math_op(&mut self) -> Option<char> {
        let op = self.accept_any(MATH_OPS)?;
        self.ignore();
        Some(op)
    }

    // scan [a-zA-Z]+
    pub fn scan_identifier(&mut self) -> Option<String> {
        self.accept_any(ALPHA)?;
        self.skip_all(ALPHA);
        Some(self.extract_string())
    }
}

///////////////////////////////////////////////////////////////////////////////
