/// A token that represents a single unit of source code.
///
/// The lexeme is a slice of the source buffer, so tokens are only
/// valid while the source string is alive. Error tokens are the one
/// exception: their lexeme is a static message describing the error.
#[derive(Clone, Copy)]
pub struct Token<'a> {
    /// The token's line number
    pub line_num: usize,
    /// The token's type
    pub token_type: TokenType,
    /// The token's lexeme
    pub lexeme: &'a str,
}

/// The types of tokens in a program.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(u8)]
pub enum TokenType {
    CLASS_KW,
    COMMA,
    DOT,
    ELSE_KW,
    EOF,
    EQUALS,
    ERROR,
    FALSE,
    FN_KW,
    FOR_KW,
    GREATER_THAN,
    GREATER_THAN_EQ,
    IDENTIFIER,
    IF_KW,
    LESS_THAN,
    LESS_THAN_EQ,
    LET_KW,
    LOGIC_AND,
    LOGIC_EQ,
    LOGIC_NOT,
    LOGIC_NOT_EQ,
    LOGIC_OR,
    L_CURLY,
    L_PAREN,
    MINUS,
    NIL,
    NUMBER,
    PLUS,
    PRINT_KW,
    RETURN_KW,
    R_CURLY,
    R_PAREN,
    SEMICOLON,
    SLASH,
    STAR,
    STRING,
    SUPER_KW,
    THIS_KW,
    TRUE,
    WHILE_KW,

    // This one is only used to initialize the compiler
    __INIT_COMPILER__,
}

/// Classifies an identifier lexeme as either a keyword or a plain
/// identifier.
///
/// Keywords are recognized with a character trie instead of a string
/// hash: branch on the first byte, then on the second where two
/// keywords share a prefix, and compare the remaining tail in one
/// shot.
///
/// # Parameters
/// - `lexeme`: The identifier's lexeme.
///
/// # Returns
/// `TokenType`: The type of token matched for the given lexeme.
pub fn identifier_type(lexeme: &str) -> TokenType {
    let bytes = lexeme.as_bytes();

    return match bytes[0] {
        b'a' => check_keyword(lexeme, 1, "nd", TokenType::LOGIC_AND),
        b'c' => check_keyword(lexeme, 1, "lass", TokenType::CLASS_KW),
        b'e' => check_keyword(lexeme, 1, "lse", TokenType::ELSE_KW),
        b'f' if bytes.len() > 1 => match bytes[1] {
            b'a' => check_keyword(lexeme, 2, "lse", TokenType::FALSE),
            b'n' => check_keyword(lexeme, 2, "", TokenType::FN_KW),
            b'o' => check_keyword(lexeme, 2, "r", TokenType::FOR_KW),
            _ => TokenType::IDENTIFIER,
        },
        b'i' => check_keyword(lexeme, 1, "f", TokenType::IF_KW),
        b'l' => check_keyword(lexeme, 1, "et", TokenType::LET_KW),
        b'n' => check_keyword(lexeme, 1, "il", TokenType::NIL),
        b'o' => check_keyword(lexeme, 1, "r", TokenType::LOGIC_OR),
        b'p' => check_keyword(lexeme, 1, "rint", TokenType::PRINT_KW),
        b'r' => check_keyword(lexeme, 1, "eturn", TokenType::RETURN_KW),
        b's' => check_keyword(lexeme, 1, "uper", TokenType::SUPER_KW),
        b't' if bytes.len() > 1 => match bytes[1] {
            b'h' => check_keyword(lexeme, 2, "is", TokenType::THIS_KW),
            b'r' => check_keyword(lexeme, 2, "ue", TokenType::TRUE),
            _ => TokenType::IDENTIFIER,
        },
        b'w' => check_keyword(lexeme, 1, "hile", TokenType::WHILE_KW),
        _ => TokenType::IDENTIFIER,
    };
}

/// Compares the tail of an identifier lexeme against the tail of a
/// keyword, after the trie has already matched the first `start`
/// bytes.
fn check_keyword(lexeme: &str, start: usize, rest: &str, token_type: TokenType) -> TokenType {
    if &lexeme[start..] == rest {
        token_type
    } else {
        TokenType::IDENTIFIER
    }
}
