//! Type notation: the display form of a type, read back into an `ExprType`.
//!
//! Lets rule tables and tests write `"{string => array<number>}"` instead of
//! nesting constructors.
//!
//! # Syntax
//!
//! - `any`, `null`, `number`, `bool`, `string`: scalars
//! - `object`: open object with no known props
//! - `{}`: strict object with no known props
//! - `{a: number; b: string}`: strict object with props
//! - `{string => T}`: mapped object
//! - `array<T>`: array
//!
//! Keywords are valid prop names, so `{string: number}` is a keyed object.
//! Open objects with props and deref arrays have no notation.

use std::ops::Range;
use std::str::FromStr;

use logos::Logos;

use crate::expr_type::ExprType;
use crate::object::ObjectType;

/// Deepest nesting of objects and arrays the parser accepts.
pub const MAX_DEPTH: usize = 64;

#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\n\r]+")]
enum Token<'src> {
    #[token("any")]
    Any,

    #[token("null")]
    Null,

    #[token("number")]
    Number,

    #[token("bool")]
    Bool,

    #[token("string")]
    String,

    #[token("object")]
    Object,

    #[token("array")]
    Array,

    #[token("{")]
    LBrace,

    #[token("}")]
    RBrace,

    #[token("<")]
    LAngle,

    #[token(">")]
    RAngle,

    #[token(":")]
    Colon,

    #[token(";")]
    Semi,

    #[token("=>")]
    FatArrow,

    #[regex(r"[A-Za-z_][A-Za-z0-9_-]*", |lex| lex.slice())]
    Ident(&'src str),
}

impl Token<'_> {
    fn describe(&self) -> String {
        match self {
            Self::Any => "'any'".to_string(),
            Self::Null => "'null'".to_string(),
            Self::Number => "'number'".to_string(),
            Self::Bool => "'bool'".to_string(),
            Self::String => "'string'".to_string(),
            Self::Object => "'object'".to_string(),
            Self::Array => "'array'".to_string(),
            Self::LBrace => "'{'".to_string(),
            Self::RBrace => "'}'".to_string(),
            Self::LAngle => "'<'".to_string(),
            Self::RAngle => "'>'".to_string(),
            Self::Colon => "':'".to_string(),
            Self::Semi => "';'".to_string(),
            Self::FatArrow => "'=>'".to_string(),
            Self::Ident(name) => format!("identifier '{name}'"),
        }
    }
}

/// Error while reading type notation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotationError {
    #[error("unexpected character {text:?} at {span:?}")]
    UnexpectedChar { text: String, span: Range<usize> },

    #[error("expected {expected}, found {found} at {span:?}")]
    UnexpectedToken {
        expected: &'static str,
        found: String,
        span: Range<usize>,
    },

    #[error("expected {expected}, found end of input")]
    UnexpectedEof { expected: &'static str },

    #[error("duplicate prop '{name}' at {span:?}")]
    DuplicateProp { name: String, span: Range<usize> },

    #[error("type nested deeper than {limit} levels at {span:?}")]
    TooDeep { limit: usize, span: Range<usize> },
}

impl NotationError {
    /// Byte range of the offending input, if any.
    pub fn span(&self) -> Option<Range<usize>> {
        match self {
            Self::UnexpectedChar { span, .. }
            | Self::UnexpectedToken { span, .. }
            | Self::DuplicateProp { span, .. }
            | Self::TooDeep { span, .. } => Some(span.clone()),
            Self::UnexpectedEof { .. } => None,
        }
    }
}

struct Parser<'src> {
    tokens: Vec<(Token<'src>, Range<usize>)>,
    pos: usize,
    input: &'src str,
    depth: usize,
}

impl<'src> Parser<'src> {
    fn new(input: &'src str) -> Result<Self, NotationError> {
        let mut tokens = Vec::new();
        for (result, span) in Token::lexer(input).spanned() {
            match result {
                Ok(token) => tokens.push((token, span)),
                Err(_) => {
                    return Err(NotationError::UnexpectedChar {
                        text: input[span.clone()].to_string(),
                        span,
                    });
                }
            }
        }

        Ok(Self {
            tokens,
            pos: 0,
            input,
            depth: 0,
        })
    }

    fn peek(&self) -> Option<Token<'src>> {
        self.tokens.get(self.pos).map(|(t, _)| *t)
    }

    fn peek_nth(&self, n: usize) -> Option<Token<'src>> {
        self.tokens.get(self.pos + n).map(|(t, _)| *t)
    }

    fn current_span(&self) -> Range<usize> {
        self.tokens
            .get(self.pos)
            .map(|(_, s)| s.clone())
            .unwrap_or(self.input.len()..self.input.len())
    }

    fn bump(
        &mut self,
        expected: &'static str,
    ) -> Result<(Token<'src>, Range<usize>), NotationError> {
        let Some((token, span)) = self.tokens.get(self.pos).cloned() else {
            return Err(NotationError::UnexpectedEof { expected });
        };
        self.pos += 1;
        Ok((token, span))
    }

    fn expect(&mut self, expected: Token<'src>, what: &'static str) -> Result<(), NotationError> {
        let (token, span) = self.bump(what)?;
        if token == expected {
            Ok(())
        } else {
            Err(NotationError::UnexpectedToken {
                expected: what,
                found: token.describe(),
                span,
            })
        }
    }

    fn parse_type(&mut self) -> Result<ExprType, NotationError> {
        let (token, span) = self.bump("type")?;
        match token {
            Token::Any => Ok(ExprType::Any),
            Token::Null => Ok(ExprType::Null),
            Token::Number => Ok(ExprType::Number),
            Token::Bool => Ok(ExprType::Bool),
            Token::String => Ok(ExprType::String),
            Token::Object => Ok(ExprType::open_object()),
            Token::Array => self.nested(span, Self::parse_array),
            Token::LBrace => self.nested(span, Self::parse_braced),
            other => Err(NotationError::UnexpectedToken {
                expected: "type",
                found: other.describe(),
                span,
            }),
        }
    }

    fn nested(
        &mut self,
        span: Range<usize>,
        parse: fn(&mut Self) -> Result<ExprType, NotationError>,
    ) -> Result<ExprType, NotationError> {
        if self.depth >= MAX_DEPTH {
            return Err(NotationError::TooDeep {
                limit: MAX_DEPTH,
                span,
            });
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    /// After `array`.
    fn parse_array(&mut self) -> Result<ExprType, NotationError> {
        self.expect(Token::LAngle, "'<'")?;
        let elem = self.parse_type()?;
        self.expect(Token::RAngle, "'>'")?;
        Ok(ExprType::array(elem))
    }

    /// After `{`.
    fn parse_braced(&mut self) -> Result<ExprType, NotationError> {
        if self.peek() == Some(Token::RBrace) {
            self.pos += 1;
            return Ok(ExprType::strict_object());
        }

        if self.peek() == Some(Token::String) && self.peek_nth(1) == Some(Token::FatArrow) {
            self.pos += 2;
            let value = self.parse_type()?;
            self.expect(Token::RBrace, "'}'")?;
            return Ok(ExprType::mapped_object(value));
        }

        let mut obj = ObjectType::strict();
        loop {
            let (name, span) = self.parse_prop_name()?;
            if obj.field(name).is_some() {
                return Err(NotationError::DuplicateProp {
                    name: name.to_string(),
                    span,
                });
            }
            self.expect(Token::Colon, "':'")?;
            let ty = self.parse_type()?;
            obj.insert(name, ty);

            let (token, span) = self.bump("';' or '}'")?;
            match token {
                Token::Semi => continue,
                Token::RBrace => break,
                other => {
                    return Err(NotationError::UnexpectedToken {
                        expected: "';' or '}'",
                        found: other.describe(),
                        span,
                    });
                }
            }
        }

        Ok(ExprType::Object(obj))
    }

    fn parse_prop_name(&mut self) -> Result<(&'src str, Range<usize>), NotationError> {
        let (token, span) = self.bump("prop name")?;
        match token {
            Token::Ident(name) => Ok((name, span)),
            Token::Any
            | Token::Null
            | Token::Number
            | Token::Bool
            | Token::String
            | Token::Object
            | Token::Array => {
                let input = self.input;
                Ok((&input[span.clone()], span))
            }
            other => Err(NotationError::UnexpectedToken {
                expected: "prop name",
                found: other.describe(),
                span,
            }),
        }
    }

    fn parse_all(&mut self) -> Result<ExprType, NotationError> {
        let ty = self.parse_type()?;
        if let Some(token) = self.peek() {
            return Err(NotationError::UnexpectedToken {
                expected: "end of input",
                found: token.describe(),
                span: self.current_span(),
            });
        }
        Ok(ty)
    }
}

/// Parse type notation into an `ExprType`.
pub fn parse(input: &str) -> Result<ExprType, NotationError> {
    let result = Parser::new(input).and_then(|mut parser| parser.parse_all());
    if let Err(err) = &result {
        tracing::debug!(input, %err, "invalid type notation");
    }
    result
}

impl FromStr for ExprType {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}
