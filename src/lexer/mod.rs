use crate::lexer::tokens::{identifier_type, Token, TokenType};

// Submodules
pub mod tokens;

/// Struct that represents the lexer.
///
/// The lexer is lazy: it holds a cursor into the source text and
/// produces exactly one token per `next_token` call. Nothing is
/// buffered, and lexemes are slices of the source rather than copies.
pub struct Lexer<'a> {
    /// The source text being tokenized.
    source: &'a str,
    /// The position of the first character of the current token.
    token_start: usize,
    /// The position of the next character to consume.
    current: usize,
    /// The current line number.
    line_num: usize,
}

impl<'a> Lexer<'a> {
    /// An initialized instance of the lexer.
    ///
    /// # Parameters
    /// - `src` - the source text
    pub fn new(src: &'a str) -> Lexer<'a> {
        Self {
            source: src,
            token_start: 0,
            current: 0,
            line_num: 1,
        }
    }

    /// Scans and returns the next token in the source.
    ///
    /// # Returns
    /// - `Token`: The next token.
    pub fn next_token(&mut self) -> Token<'a> {
        self.skip_whitespace();

        self.token_start = self.current;

        if self.is_at_end() {
            return self.make_token(TokenType::EOF);
        }

        let c = self.advance();

        if is_alpha(c) {
            return self.make_identifier_token();
        }

        if is_digit(c) {
            return self.make_numeric_token();
        }

        return match c {
            b'(' => self.make_token(TokenType::L_PAREN),
            b')' => self.make_token(TokenType::R_PAREN),
            b'{' => self.make_token(TokenType::L_CURLY),
            b'}' => self.make_token(TokenType::R_CURLY),
            b';' => self.make_token(TokenType::SEMICOLON),
            b',' => self.make_token(TokenType::COMMA),
            b'.' => self.make_token(TokenType::DOT),
            b'-' => self.make_token(TokenType::MINUS),
            b'+' => self.make_token(TokenType::PLUS),
            b'/' => self.make_token(TokenType::SLASH),
            b'*' => self.make_token(TokenType::STAR),

            // Potential two-character tokens
            b'!' => {
                if self.matches(b'=') {
                    self.make_token(TokenType::LOGIC_NOT_EQ)
                } else {
                    self.make_token(TokenType::LOGIC_NOT)
                }
            }
            b'=' => {
                if self.matches(b'=') {
                    self.make_token(TokenType::LOGIC_EQ)
                } else {
                    self.make_token(TokenType::EQUALS)
                }
            }
            b'<' => {
                if self.matches(b'=') {
                    self.make_token(TokenType::LESS_THAN_EQ)
                } else {
                    self.make_token(TokenType::LESS_THAN)
                }
            }
            b'>' => {
                if self.matches(b'=') {
                    self.make_token(TokenType::GREATER_THAN_EQ)
                } else {
                    self.make_token(TokenType::GREATER_THAN)
                }
            }

            b'"' => self.make_string_token(),

            _ => self.make_error_token("Unexpected character."),
        };
    }

    /// Checks if the lexer is at the end of the source.
    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    /// Gets the current character without consuming it.
    fn get_current(&self) -> u8 {
        if self.is_at_end() {
            return b'\0';
        }

        self.source.as_bytes()[self.current]
    }

    /// Returns the character after the current one without consuming it.
    fn get_next(&self) -> u8 {
        if self.current + 1 >= self.source.len() {
            return b'\0';
        }

        self.source.as_bytes()[self.current + 1]
    }

    /// Advances to the next character and returns the consumed character.
    fn advance(&mut self) -> u8 {
        let current = self.source.as_bytes()[self.current];
        self.current += 1;
        current
    }

    /// Matches the current character against a provided character,
    /// consuming it on a match.
    ///
    /// # Returns
    /// - `bool`: True if the current character matched the provided
    /// character, false otherwise.
    fn matches(&mut self, expected: u8) -> bool {
        if self.is_at_end() || self.get_current() != expected {
            return false;
        }

        self.current += 1;
        true
    }

    /// Skips whitespace-like characters and line comments from the
    /// source code, counting newlines along the way.
    fn skip_whitespace(&mut self) {
        loop {
            if self.is_at_end() {
                break;
            }

            let c = self.get_current();

            if c == b' ' || c == b'\r' || c == b'\t' {
                self.advance();
            } else if c == b'\n' {
                self.line_num += 1;
                self.advance();
            } else if c == b'/' && self.get_next() == b'/' {
                // Comments go to the end of the line
                while !self.is_at_end() && self.get_current() != b'\n' {
                    self.advance();
                }
            } else {
                break;
            }
        }
    }

    /// Generates an identifier or keyword token with the current state
    /// of the lexer.
    fn make_identifier_token(&mut self) -> Token<'a> {
        while !self.is_at_end() {
            let c = self.get_current();

            if is_alpha(c) || is_digit(c) {
                self.advance();
            } else {
                break;
            }
        }

        let token_type = identifier_type(&self.source[self.token_start..self.current]);
        self.make_token(token_type)
    }

    /// Generates a numeric literal token with the current state of
    /// the lexer.
    fn make_numeric_token(&mut self) -> Token<'a> {
        while is_digit(self.get_current()) {
            self.advance();
        }

        // Only consume the dot if a fractional part follows it.
        if self.get_current() == b'.' && is_digit(self.get_next()) {
            self.advance();

            while is_digit(self.get_current()) {
                self.advance();
            }
        }

        self.make_token(TokenType::NUMBER)
    }

    /// Generates a string literal token with the current state of the
    /// lexer. The lexeme keeps the surrounding quotes.
    fn make_string_token(&mut self) -> Token<'a> {
        // The token reports the line the literal starts on, even when
        // the string spans multiple lines.
        let token_line = self.line_num;

        while !self.is_at_end() && self.get_current() != b'"' {
            if self.get_current() == b'\n' {
                self.line_num += 1;
            }

            self.advance();
        }

        if self.is_at_end() {
            return self.make_error_token("Unterminated string.");
        }

        // The closing quote.
        self.advance();

        Token {
            line_num: token_line,
            token_type: TokenType::STRING,
            lexeme: &self.source[self.token_start..self.current],
        }
    }

    /// Generates a token with the current state of the lexer.
    fn make_token(&self, token_type: TokenType) -> Token<'a> {
        Token {
            line_num: self.line_num,
            token_type,
            lexeme: &self.source[self.token_start..self.current],
        }
    }

    /// Generates an error token with the provided message as its
    /// lexeme.
    ///
    /// # Parameters
    /// - `message`: A message for the error token. This will be used
    /// as the token's lexeme.
    fn make_error_token(&self, message: &'static str) -> Token<'a> {
        Token {
            line_num: self.line_num,
            token_type: TokenType::ERROR,
            lexeme: message,
        }
    }
}

/// Checks whether a byte can start or continue an identifier.
fn is_alpha(c: u8) -> bool {
    c.is_ascii_alphabetic() || c == b'_'
}

/// Checks whether a byte is a decimal digit.
fn is_digit(c: u8) -> bool {
    c.is_ascii_digit()
}
