// ─────────────────────────────────────────────────────────────────────
// SCPN Wakefield Core — Unit
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Unit registry and unit-expression parser.
//!
//! Grammar (whitespace ignored):
//!
//! ```text
//! expr    := term (('*' | '·' | '/') term)*
//! term    := primary (('**' | '^') exponent)?
//! primary := name | '1' | '(' expr ')'
//! ```
//!
//! Names are SI prefixes (short or long form) over the base units below,
//! e.g. `µm`, `micrometer`, `fs`, `MeV`, `cm**-3`, `W/cm^2`.

use std::fmt;
use std::str::FromStr;

use lwfa_types::constants::ELECTRONVOLT;
use lwfa_types::error::{LwfaError, LwfaResult};

use crate::dimension::Dimension;

/// (short, long, latex prefix, factor)
const PREFIXES: [(&str, &str, &str, f64); 13] = [
    ("P", "peta", "P", 1e15),
    ("T", "tera", "T", 1e12),
    ("G", "giga", "G", 1e9),
    ("M", "mega", "M", 1e6),
    ("k", "kilo", "k", 1e3),
    ("c", "centi", "c", 1e-2),
    ("m", "milli", "m", 1e-3),
    ("µ", "micro", "\\mu", 1e-6),
    ("μ", "micro", "\\mu", 1e-6),
    ("u", "micro", "\\mu", 1e-6),
    ("n", "nano", "n", 1e-9),
    ("p", "pico", "p", 1e-12),
    ("f", "femto", "f", 1e-15),
];

/// (short, long, factor to SI, dimension)
const BASE_UNITS: [(&str, &str, f64, Dimension); 11] = [
    ("m", "meter", 1.0, Dimension::LENGTH),
    ("m", "metre", 1.0, Dimension::LENGTH),
    ("s", "second", 1.0, Dimension::TIME),
    ("g", "gram", 1e-3, Dimension::MASS),
    ("J", "joule", 1.0, Dimension::ENERGY),
    ("eV", "electronvolt", ELECTRONVOLT, Dimension::ENERGY),
    ("W", "watt", 1.0, Dimension::POWER),
    ("C", "coulomb", 1.0, Dimension::CHARGE),
    ("A", "ampere", 1.0, Dimension::CURRENT),
    ("Hz", "hertz", 1.0, Dimension::FREQUENCY),
    ("V", "volt", 1.0, Dimension::VOLTAGE),
];

/// A physical unit: scale factor to coherent SI plus display labels.
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    symbol: String,
    latex: String,
    scale: f64,
    dimension: Dimension,
    composite: bool,
}

impl Unit {
    /// Parse a unit expression such as `"cm**-3"` or `"W/cm^2"`.
    pub fn parse(expr: &str) -> LwfaResult<Unit> {
        let tokens = tokenize(expr)?;
        if tokens.is_empty() {
            return Err(LwfaError::UnitSyntax("empty unit expression".to_string()));
        }
        let mut parser = Parser {
            tokens: &tokens,
            pos: 0,
            source: expr,
        };
        let unit = parser.expr()?;
        if parser.pos != tokens.len() {
            return Err(LwfaError::UnitSyntax(format!(
                "unexpected trailing input in '{expr}'"
            )));
        }
        Ok(unit)
    }

    pub fn dimensionless() -> Unit {
        Unit {
            symbol: "dimensionless".to_string(),
            latex: "\\mathrm{dimensionless}".to_string(),
            scale: 1.0,
            dimension: Dimension::DIMENSIONLESS,
            composite: false,
        }
    }

    /// Coherent SI unit for a dimension, e.g. `kg*m**2*s**-2` for energy.
    pub fn si(dimension: Dimension) -> Unit {
        if dimension.is_dimensionless() {
            return Unit::dimensionless();
        }
        let mut symbols = Vec::new();
        let mut latex = Vec::new();
        for (sym, exp) in dimension.si_components() {
            match exp {
                0 => {}
                1 => {
                    symbols.push(sym.to_string());
                    latex.push(format!("\\mathrm{{{sym}}}"));
                }
                e => {
                    symbols.push(format!("{sym}**{e}"));
                    latex.push(format!("\\mathrm{{{sym}}}^{{{e}}}"));
                }
            }
        }
        Unit {
            composite: symbols.len() > 1,
            symbol: symbols.join("*"),
            latex: latex.join("\\cdot "),
            scale: 1.0,
            dimension,
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// LaTeX label for axis annotation, e.g. `\mathrm{cm}^{-3}`.
    pub fn latex(&self) -> &str {
        &self.latex
    }

    /// Multiplicative factor from this unit to coherent SI.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    pub fn is_compatible(&self, other: &Unit) -> bool {
        self.dimension == other.dimension
    }

    /// Factor `f` such that `x [self] == x·f [target]`.
    pub fn conversion_factor(&self, target: &Unit) -> LwfaResult<f64> {
        if !self.is_compatible(target) {
            return Err(LwfaError::DimensionMismatch {
                operation: "convert",
                left: self.symbol.clone(),
                right: target.symbol.clone(),
            });
        }
        Ok(self.scale / target.scale)
    }

    fn is_unity(&self) -> bool {
        self.dimension.is_dimensionless() && self.scale == 1.0
    }

    pub fn multiply(&self, rhs: &Unit) -> LwfaResult<Unit> {
        if self.is_unity() {
            return Ok(rhs.clone());
        }
        if rhs.is_unity() {
            return Ok(self.clone());
        }
        let symbol = format!("{}*{}", self.symbol, rhs.symbol);
        let dimension = self
            .dimension
            .checked_mul(rhs.dimension)
            .ok_or_else(|| exponent_overflow(&symbol))?;
        Unit {
            latex: format!("{}\\cdot {}", self.latex, rhs.latex),
            symbol,
            scale: self.scale * rhs.scale,
            dimension,
            composite: true,
        }
        .checked_scale()
    }

    pub fn divide(&self, rhs: &Unit) -> LwfaResult<Unit> {
        if rhs.is_unity() {
            return Ok(self.clone());
        }
        let numerator = if self.is_unity() {
            "1".to_string()
        } else {
            self.symbol.clone()
        };
        let latex_numerator = if self.is_unity() {
            "1".to_string()
        } else {
            self.latex.clone()
        };
        let symbol = format!("{}/{}", numerator, rhs.grouped_symbol());
        let dimension = self
            .dimension
            .checked_div(rhs.dimension)
            .ok_or_else(|| exponent_overflow(&symbol))?;
        Unit {
            latex: format!("\\frac{{{}}}{{{}}}", latex_numerator, rhs.latex),
            symbol,
            scale: self.scale / rhs.scale,
            dimension,
            composite: true,
        }
        .checked_scale()
    }

    /// Fails when an exponent of the result does not fit the dimension range.
    pub fn powi(&self, n: i32) -> LwfaResult<Unit> {
        match n {
            0 => Ok(Unit::dimensionless()),
            1 => Ok(self.clone()),
            _ => {
                let latex = if self.composite {
                    format!("\\left({}\\right)^{{{n}}}", self.latex)
                } else {
                    format!("{}^{{{n}}}", self.latex)
                };
                let symbol = format!("{}**{n}", self.grouped_symbol());
                let dimension = self
                    .dimension
                    .checked_powi(n)
                    .ok_or_else(|| exponent_overflow(&symbol))?;
                Unit {
                    symbol,
                    latex,
                    scale: self.scale.powi(n),
                    dimension,
                    composite: self.composite,
                }
                .checked_scale()
            }
        }
    }

    fn checked_scale(self) -> LwfaResult<Unit> {
        if self.scale.is_finite() && self.scale > 0.0 {
            Ok(self)
        } else {
            Err(LwfaError::UnitSyntax(format!(
                "scale factor out of range in '{}'",
                self.symbol
            )))
        }
    }

    fn grouped_symbol(&self) -> String {
        if self.composite {
            format!("({})", self.symbol)
        } else {
            self.symbol.clone()
        }
    }

    fn named(symbol: String, latex: String, scale: f64, dimension: Dimension) -> Unit {
        Unit {
            symbol,
            latex,
            scale,
            dimension,
            composite: false,
        }
    }
}

impl FromStr for Unit {
    type Err = LwfaError;

    fn from_str(s: &str) -> LwfaResult<Self> {
        Unit::parse(s)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

/// Resolve a single unit name, trying base units first and then
/// prefix + base combinations.
fn lookup(name: &str) -> LwfaResult<Unit> {
    if name == "dimensionless" {
        return Ok(Unit::dimensionless());
    }
    for &(short, long, scale, dim) in BASE_UNITS.iter() {
        if name == short || name == long {
            return Ok(Unit::named(
                short.to_string(),
                format!("\\mathrm{{{short}}}"),
                scale,
                dim,
            ));
        }
    }
    for &(p_short, p_long, p_latex, factor) in PREFIXES.iter() {
        for &(short, long, scale, dim) in BASE_UNITS.iter() {
            let short_match = name.strip_prefix(p_short) == Some(short);
            let long_match = name.strip_prefix(p_long) == Some(long);
            if short_match || long_match {
                let canonical = if p_latex == "\\mu" { "µ" } else { p_short };
                let latex = if p_latex == "\\mu" {
                    format!("\\mu\\mathrm{{{short}}}")
                } else {
                    format!("\\mathrm{{{p_latex}{short}}}")
                };
                return Ok(Unit::named(
                    format!("{canonical}{short}"),
                    latex,
                    factor * scale,
                    dim,
                ));
            }
        }
    }
    Err(LwfaError::UnknownUnit(name.to_string()))
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Name(String),
    Int(i32),
    Mul,
    Div,
    Pow,
    Minus,
    LParen,
    RParen,
}

fn tokenize(expr: &str) -> LwfaResult<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = expr.chars().peekable();
    while let Some(&ch) = chars.peek() {
        match ch {
            c if c.is_whitespace() => {
                chars.next();
            }
            '*' => {
                chars.next();
                if chars.peek() == Some(&'*') {
                    chars.next();
                    tokens.push(Token::Pow);
                } else {
                    tokens.push(Token::Mul);
                }
            }
            '·' => {
                chars.next();
                tokens.push(Token::Mul);
            }
            '^' => {
                chars.next();
                tokens.push(Token::Pow);
            }
            '/' => {
                chars.next();
                tokens.push(Token::Div);
            }
            '-' => {
                chars.next();
                tokens.push(Token::Minus);
            }
            '(' => {
                chars.next();
                tokens.push(Token::LParen);
            }
            ')' => {
                chars.next();
                tokens.push(Token::RParen);
            }
            c if c.is_ascii_digit() => {
                let mut digits = String::new();
                while let Some(&d) = chars.peek() {
                    if !d.is_ascii_digit() {
                        break;
                    }
                    digits.push(d);
                    chars.next();
                }
                let n = digits.parse::<i32>().map_err(|_| {
                    LwfaError::UnitSyntax(format!("integer out of range in '{expr}'"))
                })?;
                tokens.push(Token::Int(n));
            }
            c if c.is_alphabetic() => {
                let mut name = String::new();
                while let Some(&a) = chars.peek() {
                    if !a.is_alphabetic() {
                        break;
                    }
                    name.push(a);
                    chars.next();
                }
                tokens.push(Token::Name(name));
            }
            other => {
                return Err(LwfaError::UnitSyntax(format!(
                    "unexpected character '{other}' in '{expr}'"
                )));
            }
        }
    }
    Ok(tokens)
}

fn exponent_overflow(symbol: &str) -> LwfaError {
    LwfaError::UnitSyntax(format!("dimension exponent out of range in '{symbol}'"))
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    source: &'a str,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<&'a Token> {
        let tok = self.tokens.get(self.pos);
        self.pos += 1;
        tok
    }

    fn syntax(&self, what: &str) -> LwfaError {
        LwfaError::UnitSyntax(format!("{what} in '{}'", self.source))
    }

    fn expr(&mut self) -> LwfaResult<Unit> {
        let mut unit = self.term()?;
        loop {
            match self.peek() {
                Some(Token::Mul) => {
                    self.pos += 1;
                    let rhs = self.term()?;
                    unit = unit.multiply(&rhs)?;
                }
                Some(Token::Div) => {
                    self.pos += 1;
                    let rhs = self.term()?;
                    unit = unit.divide(&rhs)?;
                }
                _ => return Ok(unit),
            }
        }
    }

    fn term(&mut self) -> LwfaResult<Unit> {
        let base = self.primary()?;
        if self.peek() == Some(&Token::Pow) {
            self.pos += 1;
            let exp = self.exponent()?;
            return base.powi(exp);
        }
        Ok(base)
    }

    fn exponent(&mut self) -> LwfaResult<i32> {
        let parenthesized = self.peek() == Some(&Token::LParen);
        if parenthesized {
            self.pos += 1;
        }
        let negative = self.peek() == Some(&Token::Minus);
        if negative {
            self.pos += 1;
        }
        let n = match self.next() {
            Some(Token::Int(n)) => *n,
            _ => return Err(self.syntax("expected integer exponent")),
        };
        if parenthesized && self.next() != Some(&Token::RParen) {
            return Err(self.syntax("unbalanced parenthesis in exponent"));
        }
        Ok(if negative { -n } else { n })
    }

    fn primary(&mut self) -> LwfaResult<Unit> {
        match self.next().cloned() {
            Some(Token::Name(name)) => lookup(&name),
            Some(Token::Int(1)) => Ok(Unit::dimensionless()),
            Some(Token::LParen) => {
                let inner = self.expr()?;
                if self.next() != Some(&Token::RParen) {
                    return Err(self.syntax("unbalanced parenthesis"));
                }
                Ok(inner)
            }
            Some(tok) => Err(self.syntax(&format!("unexpected token {tok:?}"))),
            None => Err(self.syntax("unexpected end of expression")),
        }
    }
}
