//! Module: filter::token
//! Responsibility: classify one value token against the field it targets.
//! Does not own: coercion of the extracted literals.
//! Boundary: structural errors (range arity) are fatal; everything else parses.
//!
//! Grammar, tried in order on the trimmed token:
//!
//! ```text
//! token    := negation | range | function | literal
//! negation := "not" "(" token ")"            name case-insensitive
//! range    := bound "&" bound                ranged kinds only; bound may be empty
//! function := func "(" arg ")"               text kinds only; func case-insensitive
//! func     := "startsWith" | "endsWith" | "contains" | "equals"
//! literal  := "equals" "(" raw ")" | '"' raw '"' | raw
//! ```
//!
//! A call is recognised only when a run of ASCII letters is followed
//! directly by `(` and the token ends with `)`.

use crate::{error::FilterError, model::field::FieldKind, predicate::TextFunc};

///
/// Token
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum Token {
    Not(Box<Self>),
    Range {
        lower: Option<String>,
        upper: Option<String>,
    },
    Function {
        func: TextFunc,
        arg: String,
    },
    Literal(String),
}

///
/// TokenContext
///
/// The parts of the target field's kind that change how a token parses.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct TokenContext {
    ranged: bool,
    textual: bool,
}

impl TokenContext {
    pub(crate) const fn for_kind(kind: &FieldKind) -> Self {
        Self {
            ranged: kind.supports_range(),
            textual: kind.is_text(),
        }
    }
}

/// Deepest `not(...)` nesting accepted in one token.
pub(crate) const MAX_NEGATION_DEPTH: usize = 32;

/// Parse one token for a field described by `cx`.
pub(crate) fn parse_token(input: &str, cx: TokenContext) -> Result<Token, FilterError> {
    Parser { cx }.token(input, 0)
}

///
/// Call
/// Lexed `name(arg)` form.
///

struct Call<'a> {
    name: &'a str,
    arg: &'a str,
}

impl<'a> Call<'a> {
    fn lex(src: &'a str) -> Option<Self> {
        let name_len = src
            .bytes()
            .take_while(u8::is_ascii_alphabetic)
            .count();
        if name_len == 0 {
            return None;
        }

        let rest = src[name_len..].strip_prefix('(')?;
        let arg = rest.strip_suffix(')')?;

        Some(Self {
            name: &src[..name_len],
            arg,
        })
    }

    fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

///
/// Parser
///

struct Parser {
    cx: TokenContext,
}

impl Parser {
    fn token(&self, input: &str, depth: usize) -> Result<Token, FilterError> {
        let src = input.trim();
        let call = Call::lex(src);

        if let Some(call) = call.as_ref().filter(|call| call.is_named("not")) {
            if depth >= MAX_NEGATION_DEPTH {
                return Err(FilterError::NegationDepth {
                    limit: MAX_NEGATION_DEPTH,
                });
            }

            return Ok(Token::Not(Box::new(self.token(call.arg, depth + 1)?)));
        }

        if self.cx.ranged && src.contains('&') {
            return Self::range(src);
        }

        if self.cx.textual {
            if let Some((func, call)) = call
                .as_ref()
                .and_then(|call| TextFunc::from_name(call.name).map(|func| (func, call)))
            {
                return Ok(Token::Function {
                    func,
                    arg: call.arg.to_string(),
                });
            }
        }

        Ok(Token::Literal(Self::literal(src, call.as_ref())))
    }

    fn range(src: &str) -> Result<Token, FilterError> {
        let parts = src.split('&').collect::<Vec<_>>();
        let [lower, upper] = parts.as_slice() else {
            return Err(FilterError::RangeArity {
                token: src.to_string(),
                segments: parts.len(),
            });
        };

        Ok(Token::Range {
            lower: bound(lower),
            upper: bound(upper),
        })
    }

    fn literal(src: &str, call: Option<&Call<'_>>) -> String {
        let raw = match call {
            Some(call) if call.is_named("equals") => call.arg.trim(),
            _ => src,
        };

        strip_quotes(raw).to_string()
    }
}

fn bound(part: &str) -> Option<String> {
    let part = part.trim();

    (!part.is_empty()).then(|| part.to_string())
}

/// Remove one pair of matching outer double quotes.
pub(crate) fn strip_quotes(raw: &str) -> &str {
    raw.strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(raw)
}
