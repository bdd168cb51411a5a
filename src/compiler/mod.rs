mod expressions;
mod precedence;

use crate::{
    bytecode::{Chunk, OpCode},
    lexer::tokens::{Token, TokenType},
    lexer::Lexer,
    virtual_machine::InterpretResult,
};

/// Represents the compiler and its internal state.
///
/// The compiler is single-pass: it pulls tokens from the lexer one at
/// a time and emits bytecode directly into the chunk, without building
/// a syntax tree in between.
pub struct Compiler<'a> {
    lexer: Lexer<'a>,
    previous: Token<'a>,
    current: Token<'a>,
    had_error: bool,
    is_in_panic: bool,
    chunk: Chunk,
}

impl<'a> Compiler<'a> {
    /// Compiles a given source string into a chunk of ByteCode
    /// instructions.
    ///
    /// ## Arguments
    /// * `src` – The source string to be compiled.
    ///
    /// ## Returns
    /// `Result<Chunk, InterpretResult>` – The compiled chunk if no
    /// compile errors were generated. An
    /// `InterpretResult::CompileError` otherwise.
    pub fn compile(src: &'a str) -> Result<Chunk, InterpretResult> {
        let init_token = Token {
            line_num: 0,
            token_type: TokenType::__INIT_COMPILER__,
            lexeme: "",
        };

        // Initialize the compiler
        let mut s = Self {
            lexer: Lexer::new(src),
            previous: init_token,
            current: init_token,
            had_error: false,
            is_in_panic: false,
            chunk: Chunk::new(),
        };

        // Start compiling the chunk
        s.advance();
        s.expression();
        s.consume(TokenType::EOF, "Expect end of expression.");

        // Adds a return instruction to end the compiled chunk.
        s.emit_op_code(OpCode::Return);

        #[cfg(feature = "show_bytecode")]
        s.chunk.disassemble("<script>");

        return if !s.had_error {
            Ok(s.chunk)
        } else {
            Err(InterpretResult::CompileError)
        };
    }

    /// Checks that the current token matches the token type provided.
    ///
    /// ## Arguments
    /// * `token_type` – The token type we expect to match with the
    /// current token.
    pub(super) fn check(&self, token_type: TokenType) -> bool {
        self.current.token_type == token_type
    }

    /// Advances the compiler to the next token.
    ///
    /// Error tokens are never handed to the parse rules: each one is
    /// reported here, using the message the lexer attached as its
    /// lexeme, and scanning continues until a real token shows up.
    pub(super) fn advance(&mut self) {
        self.previous = self.current;

        loop {
            self.current = self.lexer.next_token();

            match self.current.token_type {
                TokenType::ERROR => {
                    let message = self.current.lexeme;
                    self.error_at_current(message);
                }
                _ => break,
            }
        }
    }

    /// Consumes the current token only if it is of a given type.
    /// If the token does not match the type, emits a compiler error.
    ///
    /// ## Arguments
    /// * `token_type` – the expected type of the token to consume.
    /// * `message` – the error message to be displayed if the current
    /// token does not match the provided type.
    pub(super) fn consume(&mut self, token_type: TokenType, message: &str) {
        if self.check(token_type) {
            self.advance();
            return ();
        }

        self.error_at_current(message);
    }

    /// Emits a byte instruction from an OpCode into the chunk's
    /// instruction list, tagged with the line of the previous token.
    ///
    /// ## Arguments
    /// * `instr` – The OpCode instruction to be added to the chunk.
    pub(super) fn emit_op_code(&mut self, instr: OpCode) {
        self.chunk.push_op_code(instr, self.previous.line_num);
    }

    /// Emits an OpCode instruction followed by its single operand
    /// byte, both tagged with the line of the previous token.
    ///
    /// ## Arguments
    /// * `instr` – The OpCode instruction to be added to the chunk.
    /// * `byte` – The operand byte for the instruction.
    pub(super) fn emit_op_code_with_byte(&mut self, instr: OpCode, byte: u8) {
        self.emit_op_code(instr);
        self.chunk.write(byte, self.previous.line_num);
    }

    /// Emits a compiler error from the current token.
    ///
    /// ## Arguments
    /// * `message` – The error message to display.
    pub(super) fn error_at_current(&mut self, message: &str) {
        let token = self.current;
        self.error_at_token(token, message);
    }

    /// Emits a compiler error from the previous token.
    ///
    /// ## Arguments
    /// * `message` – The error message to display.
    pub(super) fn error_at_previous(&mut self, message: &str) {
        let token = self.previous;
        self.error_at_token(token, message);
    }

    /// Emits a compiler error from the given token.
    ///
    /// While the compiler is in panic mode, further errors are
    /// swallowed so that one syntactic fault does not cascade into a
    /// wall of messages.
    ///
    /// ## Arguments
    /// * `token` – The token that caused the error.
    /// * `message` – The error message to display.
    pub(super) fn error_at_token(&mut self, token: Token<'a>, message: &str) {
        if self.is_in_panic {
            return ();
        }
        self.is_in_panic = true;

        eprint!("[line {}] Error", token.line_num);

        if let TokenType::EOF = token.token_type {
            eprint!(" at end");
        } else if let TokenType::ERROR = token.token_type {
            // Nothing – the message already came from the lexer.
        } else {
            eprint!(" at '{}'", token.lexeme);
        }

        eprintln!(": {}", message);
        self.had_error = true;
    }
}
