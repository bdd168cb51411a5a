use crate::bytecode::OpCode;
use crate::compiler::precedence::{get_rule, ParseFn, Precedence};
use crate::compiler::Compiler;
use crate::lexer::tokens::TokenType;
use crate::values::Value;

impl<'a> Compiler<'a> {
    /// Compiles a single expression.
    pub(super) fn expression(&mut self) {
        self.parse_by_precedence(Precedence::PREC_ASSIGNMENT);
    }

    /// The core of the Pratt parser.
    ///
    /// Consumes one token and compiles it as a prefix expression, then
    /// keeps consuming infix operators for as long as their precedence
    /// is at least `prec`. The emission order guarantees the operand
    /// values are already on the stack when the operator instruction
    /// executes.
    ///
    /// ## Arguments
    /// * `prec` – The lowest precedence this call is allowed to compile.
    pub(super) fn parse_by_precedence(&mut self, prec: Precedence) {
        self.advance();

        let prefix_rule = get_rule(self.previous.token_type).prefix;

        if let ParseFn::None = prefix_rule {
            self.error_at_previous("Expect expression.");
            return ();
        }

        self.exec_parse_fn(prefix_rule);

        while (prec as u8) <= (get_rule(self.current.token_type).precedence as u8) {
            self.advance();
            let infix_rule = get_rule(self.previous.token_type).infix;
            self.exec_parse_fn(infix_rule);
        }
    }

    /// Executes the compiling function associated with a parse rule.
    fn exec_parse_fn(&mut self, func: ParseFn) {
        match func {
            ParseFn::CompileBinaryExpr => self.compile_binary_expr(),
            ParseFn::CompileGrouping => self.compile_grouping_expr(),
            ParseFn::CompileNumeric => self.compile_numeric_expr(),
            ParseFn::CompileUnary => self.compile_unary_expr(),
            ParseFn::None => self.error_at_previous("Expect expression."),
        }
    }

    /// Compiles a parenthesized expression.
    fn compile_grouping_expr(&mut self) {
        self.expression();
        self.consume(TokenType::R_PAREN, "Expect ')' after expression.");
    }

    /// Compiles a numeric literal expression.
    fn compile_numeric_expr(&mut self) {
        let value = match self.previous.lexeme.parse::<f64>() {
            Ok(x) => x,
            Err(_) => {
                // The lexer only produces digit runs with an optional
                // fractional part, all of which parse as f64.
                self.error_at_previous("Invalid numeric literal.");
                return ();
            }
        };

        self.emit_constant_instruction(Value::Float(value));
    }

    /// Compiles a unary expression.
    ///
    /// The operand is compiled first so that its value is on the stack
    /// by the time the operator instruction executes.
    fn compile_unary_expr(&mut self) {
        let opr_type = self.previous.token_type;

        self.parse_by_precedence(Precedence::PREC_UNARY);

        match opr_type {
            TokenType::MINUS => self.emit_op_code(OpCode::Negate),
            _ => unreachable!("Only '-' has a unary parse rule."),
        }
    }

    /// Compiles a binary expression.
    ///
    /// The right operand is parsed one precedence level above the
    /// operator's own, which is what makes operators of equal
    /// precedence left-associative.
    fn compile_binary_expr(&mut self) {
        let opr_type = self.previous.token_type;
        let rule_precedence = get_rule(opr_type).precedence;

        self.parse_by_precedence(Precedence::get_by_val(rule_precedence as u8 + 1));

        let expr_op_code = match opr_type {
            TokenType::MINUS => OpCode::Subtract,
            TokenType::PLUS => OpCode::Add,
            TokenType::SLASH => OpCode::Divide,
            TokenType::STAR => OpCode::Multiply,
            _ => unreachable!("Token has no binary parse rule."),
        };

        self.emit_op_code(expr_op_code);
    }

    /// Adds a literal value to the constant pool and emits the
    /// instruction to load it.
    ///
    /// If the pool is already full, the error is reported and the
    /// instruction is emitted with index 0, keeping the byte stream
    /// well-formed so compilation can continue looking for further
    /// errors.
    fn emit_constant_instruction(&mut self, value: Value) {
        let pos = match self.chunk.add_constant(value) {
            Ok(idx) => idx,
            Err(()) => {
                self.error_at_previous("Too many constants in one chunk.");
                0
            }
        };

        self.emit_op_code_with_byte(OpCode::LoadConstant, pos);
    }
}
