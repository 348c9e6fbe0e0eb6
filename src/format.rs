//
// Copyright 2022-Present (c) Raja Lehtihet & Wael El Oraiby
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions are met:
//
// 1. Redistributions of source code must retain the above copyright notice,
// this list of conditions and the following disclaimer.
//
// 2. Redistributions in binary form must reproduce the above copyright notice,
// this list of conditions and the following disclaimer in the documentation
// and/or other materials provided with the distribution.
//
// 3. Neither the name of the copyright holder nor the names of its contributors
// may be used to endorse or promote products derived from this software without
// specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE
// ARE DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE
// LIABLE FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR
// CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF
// SUBSTITUTE GOODS OR SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS
// INTERRUPTION) HOWEVER CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN
// CONTRACT, STRICT LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE)
// ARISING IN ANY WAY OUT OF THE USE OF THIS SOFTWARE, EVEN IF ADVISED OF THE
// POSSIBILITY OF SUCH DAMAGE.
//
use std::fmt::Write;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Conversion {
    Int,
    Hex { upper: bool },
    Fixed,
    Exp { upper: bool },
    General,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Spec {
    left: bool,
    plus: bool,
    space: bool,
    zero: bool,
    width: usize,
    precision: Option<usize>,
    conv: Conversion,
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Piece {
    Literal(String),
    Value(Spec),
}

/// printf-style format for a single number, e.g. `"%d"`, `"%.1Lf"` or `"x = %05.2f"`.
///
/// Supports the flags `- + space 0`, width, precision, the length modifiers
/// `h l ll L` (ignored) and the conversions `d i u x X f F e E g G`. Anything
/// that does not parse as a conversion is printed literally.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NumberFormat {
    pieces: Vec<Piece>,
}

impl NumberFormat {
    /// Parses a format string. Never fails.
    pub fn parse(fmt: &str) -> Self {
        let mut pieces = Vec::new();
        let mut literal = String::new();
        let mut rest = fmt;
        while let Some(pos) = rest.find('%') {
            literal.push_str(&rest[..pos]);
            let tail = &rest[pos + 1..];
            if let Some(after) = tail.strip_prefix('%') {
                literal.push('%');
                rest = after;
                continue;
            }
            match parse_spec(tail) {
                Some((spec, used)) => {
                    if !literal.is_empty() {
                        pieces.push(Piece::Literal(std::mem::take(&mut literal)));
                    }
                    pieces.push(Piece::Value(spec));
                    rest = &tail[used..];
                }
                None => {
                    literal.push('%');
                    rest = tail;
                }
            }
        }
        literal.push_str(rest);
        if !literal.is_empty() {
            pieces.push(Piece::Literal(literal));
        }
        Self { pieces }
    }

    /// Renders `value` through every conversion of the format.
    pub fn format(&self, value: f64) -> String {
        let mut out = String::new();
        for piece in &self.pieces {
            match piece {
                Piece::Literal(s) => out.push_str(s),
                Piece::Value(spec) => spec.write(&mut out, value),
            }
        }
        out
    }
}

fn parse_spec(s: &str) -> Option<(Spec, usize)> {
    let bytes = s.as_bytes();
    let mut i = 0;
    let mut spec = Spec {
        left: false,
        plus: false,
        space: false,
        zero: false,
        width: 0,
        precision: None,
        conv: Conversion::General,
    };
    while i < bytes.len() {
        match bytes[i] {
            b'-' => spec.left = true,
            b'+' => spec.plus = true,
            b' ' => spec.space = true,
            b'0' => spec.zero = true,
            b'#' => (),
            _ => break,
        }
        i += 1;
    }
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        spec.width = spec.width * 10 + (bytes[i] - b'0') as usize;
        i += 1;
    }
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        let mut precision = 0;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            precision = precision * 10 + (bytes[i] - b'0') as usize;
            i += 1;
        }
        spec.precision = Some(precision);
    }
    while i < bytes.len() && matches!(bytes[i], b'h' | b'l' | b'L' | b'q' | b'j' | b'z' | b't') {
        i += 1;
    }
    spec.conv = match *bytes.get(i)? {
        b'd' | b'i' | b'u' => Conversion::Int,
        b'x' => Conversion::Hex { upper: false },
        b'X' => Conversion::Hex { upper: true },
        b'f' | b'F' => Conversion::Fixed,
        b'e' => Conversion::Exp { upper: false },
        b'E' => Conversion::Exp { upper: true },
        b'g' | b'G' => Conversion::General,
        _ => return None,
    };
    Some((spec, i + 1))
}

/// `d.ddde+XX`: signed exponent with at least two digits.
fn exponent(magnitude: f64, precision: usize, upper: bool) -> String {
    let s = format!("{:.*e}", precision, magnitude);
    let (mantissa, exp) = s.split_once('e').unwrap_or((s.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);
    let sign = if exp < 0 { '-' } else { '+' };
    let out = format!("{}e{}{:02}", mantissa, sign, exp.abs());
    if upper { out.to_uppercase() } else { out }
}

fn strip_zeros(s: &str) -> &str { if s.contains('.') { s.trim_end_matches('0').trim_end_matches('.') } else { s } }

/// `precision` significant digits, fixed or exponent form, trailing zeros removed.
fn general(magnitude: f64, precision: usize) -> String {
    if magnitude == 0.0 {
        return "0".into();
    }
    let p = precision.max(1);
    let rounded = format!("{:.*e}", p - 1, magnitude);
    let exp: i32 = rounded.split_once('e').and_then(|(_, e)| e.parse().ok()).unwrap_or(0);
    if exp < -4 || exp >= p as i32 {
        let s = exponent(magnitude, p - 1, false);
        match s.split_once('e') {
            Some((mantissa, rest)) => format!("{}e{}", strip_zeros(mantissa), rest),
            None => s,
        }
    } else {
        strip_zeros(&format!("{:.*}", (p as i32 - 1 - exp) as usize, magnitude)).to_string()
    }
}

impl Spec {
    fn write(&self, out: &mut String, value: f64) {
        let negative = value.is_sign_negative() && value != 0.0;
        let magnitude = value.abs();
        let mut digits = String::new();
        let _ = match self.conv {
            Conversion::Int => write!(digits, "{}", magnitude.trunc() as u64),
            Conversion::Hex { upper: false } => write!(digits, "{:x}", magnitude.trunc() as u64),
            Conversion::Hex { upper: true } => write!(digits, "{:X}", magnitude.trunc() as u64),
            Conversion::Fixed => write!(digits, "{:.*}", self.precision.unwrap_or(6), magnitude),
            Conversion::Exp { upper } => {
                digits.push_str(&exponent(magnitude, self.precision.unwrap_or(6), upper));
                Ok(())
            }
            Conversion::General => {
                digits.push_str(&general(magnitude, self.precision.unwrap_or(6)));
                Ok(())
            }
        };
        if !magnitude.is_finite() {
            digits = if magnitude.is_nan() { "nan".into() } else { "inf".into() };
        }
        let truncated_to_zero = matches!(self.conv, Conversion::Int | Conversion::Hex { .. }) && digits == "0";
        let sign = if negative && !truncated_to_zero {
            "-"
        } else if self.plus {
            "+"
        } else if self.space {
            " "
        } else {
            ""
        };

        let len = sign.len() + digits.len();
        let pad = self.width.saturating_sub(len);
        if self.left {
            out.push_str(sign);
            out.push_str(&digits);
            out.extend(std::iter::repeat_n(' ', pad));
        } else if self.zero {
            out.push_str(sign);
            out.extend(std::iter::repeat_n('0', pad));
            out.push_str(&digits);
        } else {
            out.extend(std::iter::repeat_n(' ', pad));
            out.push_str(sign);
            out.push_str(&digits);
        }
    }
}
