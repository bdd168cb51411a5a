use crate::lexer::tokens::TokenType;

/// Represents the precedence of different expressions in ascending order.
/// For example, `PREC_TERM` has lower precedence than `PREC_FACTOR`
/// because `PREC_TERM` appears earlier in the enum, and `PREC_FACTOR`
/// appears after.
#[allow(non_camel_case_types)]
#[derive(Debug, PartialEq, Clone, Copy)]
#[repr(u8)]
pub enum Precedence {
    PREC_NONE,
    PREC_ASSIGNMENT, // =
    PREC_OR,         // or
    PREC_AND,        // and
    PREC_EQUALITY,   // == !=
    PREC_COMPARISON, // < > <= >=
    PREC_TERM,       // + -
    PREC_FACTOR,     // * /
    PREC_UNARY,      // -
    PREC_CALL,       // . ()
    PREC_PRIMARY,
}

impl Precedence {
    /// Gets the Precedence variant associated with a given numeric value.
    ///
    /// ## Arguments
    /// * `val` – The numeric value of the expected variant.
    ///
    /// ## Returns
    /// `Precedence` – the Precedence variant associated with the
    /// provided numeric value.
    pub fn get_by_val(val: u8) -> Precedence {
        match val {
            0 => Precedence::PREC_NONE,
            1 => Precedence::PREC_ASSIGNMENT,
            2 => Precedence::PREC_OR,
            3 => Precedence::PREC_AND,
            4 => Precedence::PREC_EQUALITY,
            5 => Precedence::PREC_COMPARISON,
            6 => Precedence::PREC_TERM,
            7 => Precedence::PREC_FACTOR,
            8 => Precedence::PREC_UNARY,
            9 => Precedence::PREC_CALL,
            10 => Precedence::PREC_PRIMARY,
            _ => Precedence::PREC_PRIMARY, // Cannot climb past primary expressions
        }
    }
}

/// The set of compiling functions that can be associated
/// with a given token.
pub enum ParseFn {
    CompileBinaryExpr,
    CompileGrouping,
    CompileNumeric,
    CompileUnary,
    None, // Do not call a parsing function
}

/// Wraps the parsing properties of a token so that they
/// can be easily accessed throughout the compiler.
pub struct ParserRule {
    pub prefix: ParseFn,
    pub infix: ParseFn,
    pub precedence: Precedence,
}

/// Gets the parsing rule associated with a token type.
///
/// Only the tokens that can appear in an arithmetic expression have
/// handlers; using any other token in prefix position is the
/// "Expect expression." error.
pub fn get_rule(token_type: TokenType) -> ParserRule {
    match token_type {
        TokenType::L_PAREN => ParserRule {
            prefix: ParseFn::CompileGrouping,
            infix: ParseFn::None,
            precedence: Precedence::PREC_NONE,
        },

        TokenType::MINUS => ParserRule {
            prefix: ParseFn::CompileUnary,
            infix: ParseFn::CompileBinaryExpr,
            precedence: Precedence::PREC_TERM,
        },

        TokenType::PLUS => ParserRule {
            prefix: ParseFn::None,
            infix: ParseFn::CompileBinaryExpr,
            precedence: Precedence::PREC_TERM,
        },

        TokenType::SLASH => ParserRule {
            prefix: ParseFn::None,
            infix: ParseFn::CompileBinaryExpr,
            precedence: Precedence::PREC_FACTOR,
        },

        TokenType::STAR => ParserRule {
            prefix: ParseFn::None,
            infix: ParseFn::CompileBinaryExpr,
            precedence: Precedence::PREC_FACTOR,
        },

        TokenType::NUMBER => ParserRule {
            prefix: ParseFn::CompileNumeric,
            infix: ParseFn::None,
            precedence: Precedence::PREC_NONE,
        },

        // The rest of the tokens do not have a parse rule
        _ => ParserRule {
            prefix: ParseFn::None,
            infix: ParseFn::None,
            precedence: Precedence::PREC_NONE,
        },
    }
}
