//! Parser for the design file language.

use std::collections::HashMap;
use std::hash::Hash;

use super::ast::*;
use super::lexer::{parse_value, Lexer, Token, TokenKind};
use crate::error::{BoostError, Result};

/// Parser for design files.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
}

impl<'a> Parser<'a> {
    /// Create a new parser with the given lexer.
    pub fn new(mut lexer: Lexer<'a>) -> Result<Self> {
        let current = lexer.next_token()?;
        Ok(Self { lexer, current })
    }

    /// Parse the entire design description.
    pub fn parse(&mut self) -> Result<DesignAst> {
        let mut ast = DesignAst::new();

        while self.current.kind != TokenKind::Eof {
            match self.current.kind {
                // Skip empty lines
                TokenKind::Newline => {
                    self.advance()?;
                    continue;
                }
                TokenKind::Directive => self.parse_directive(&mut ast)?,
                _ => {
                    return Err(BoostError::parse(
                        self.current.line,
                        format!("expected a directive, got {:?}", self.current.text),
                    ));
                }
            }

            // Consume newline or EOF
            if self.current.kind == TokenKind::Newline {
                self.advance()?;
            }
        }

        Ok(ast)
    }

    fn advance(&mut self) -> Result<()> {
        self.current = self.lexer.next_token()?;
        Ok(())
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token> {
        if self.current.kind == kind {
            let tok = self.current.clone();
            self.advance()?;
            Ok(tok)
        } else {
            Err(BoostError::parse(
                self.current.line,
                format!("expected {:?}, got {:?}", kind, self.current.kind),
            ))
        }
    }

    fn parse_directive(&mut self, ast: &mut DesignAst) -> Result<()> {
        let directive = self.current.text.to_lowercase();
        let line = self.current.line;
        self.advance()?;

        match directive.as_str() {
            ".spec" => self.parse_params(&directive, &mut ast.spec, SpecKey::from_name),
            ".tran" => self.parse_params(&directive, &mut ast.tran, TranKey::from_name),
            _ => Err(BoostError::parse(
                line,
                format!("unknown directive: {}", directive),
            )),
        }
    }

    /// Parse `key=value` pairs until end of line.
    fn parse_params<K: Copy + Eq + Hash>(
        &mut self,
        directive: &str,
        params: &mut HashMap<K, ParamValue>,
        lookup: impl Fn(&str) -> Option<K>,
    ) -> Result<()> {
        let mut seen_any = false;

        while self.current.kind != TokenKind::Newline && self.current.kind != TokenKind::Eof {
            let name = self.expect(TokenKind::Identifier)?;
            let line = name.line;
            let key = lookup(&name.text).ok_or_else(|| BoostError::UnknownParameter {
                directive: directive.to_string(),
                param: name.text.clone(),
                line,
            })?;

            self.expect(TokenKind::Equals)?;

            let text = self.expect(TokenKind::Number)?.text;
            let value = parse_value(&text)
                .ok_or_else(|| BoostError::parse(line, format!("invalid number: {}", text)))?;

            if params.insert(key, ParamValue { value, line }).is_some() {
                return Err(BoostError::DuplicateParameter {
                    param: name.text.to_lowercase(),
                    line,
                });
            }
            seen_any = true;
        }

        if !seen_any {
            return Err(BoostError::parse(
                self.current.line,
                format!("{} requires at least one key=value pair", directive),
            ));
        }

        Ok(())
    }
}
