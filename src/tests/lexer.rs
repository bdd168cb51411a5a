use crate::lexer::tokens::TokenType;
use crate::lexer::Lexer;

/// Collects the token types for a source string, including the
/// closing EOF token.
fn token_types(src: &str) -> Vec<TokenType> {
    let mut lexer = Lexer::new(src);
    let mut types: Vec<TokenType> = Vec::new();

    loop {
        let token = lexer.next_token();
        types.push(token.token_type);

        if let TokenType::EOF = token.token_type {
            break;
        }
    }

    return types;
}

#[test]
fn tokenizes_arithmetic_expressions() {
    assert_eq!(
        token_types("1 + 2 * 3"),
        vec![
            TokenType::NUMBER,
            TokenType::PLUS,
            TokenType::NUMBER,
            TokenType::STAR,
            TokenType::NUMBER,
            TokenType::EOF,
        ]
    );

    assert_eq!(
        token_types("(-4 / 2)"),
        vec![
            TokenType::L_PAREN,
            TokenType::MINUS,
            TokenType::NUMBER,
            TokenType::SLASH,
            TokenType::NUMBER,
            TokenType::R_PAREN,
            TokenType::EOF,
        ]
    );
}

#[test]
fn tokenizes_two_character_operators() {
    assert_eq!(
        token_types("! != = == < <= > >="),
        vec![
            TokenType::LOGIC_NOT,
            TokenType::LOGIC_NOT_EQ,
            TokenType::EQUALS,
            TokenType::LOGIC_EQ,
            TokenType::LESS_THAN,
            TokenType::LESS_THAN_EQ,
            TokenType::GREATER_THAN,
            TokenType::GREATER_THAN_EQ,
            TokenType::EOF,
        ]
    );
}

#[test]
fn keywords_are_not_identifiers() {
    assert_eq!(token_types("and")[0], TokenType::LOGIC_AND);
    assert_eq!(token_types("android")[0], TokenType::IDENTIFIER);

    assert_eq!(token_types("fn")[0], TokenType::FN_KW);
    assert_eq!(token_types("fnord")[0], TokenType::IDENTIFIER);

    assert_eq!(token_types("this")[0], TokenType::THIS_KW);
    assert_eq!(token_types("true")[0], TokenType::TRUE);
    assert_eq!(token_types("truthy")[0], TokenType::IDENTIFIER);

    assert_eq!(token_types("let")[0], TokenType::LET_KW);
    assert_eq!(token_types("nil")[0], TokenType::NIL);
    assert_eq!(token_types("_while")[0], TokenType::IDENTIFIER);
}

#[test]
fn numeric_literals_keep_their_lexeme() {
    let mut lexer = Lexer::new("3.14");
    let token = lexer.next_token();

    assert_eq!(token.token_type, TokenType::NUMBER);
    assert_eq!(token.lexeme, "3.14");
}

#[test]
fn dot_without_fraction_is_not_consumed() {
    // "1." is a number followed by a dot, since no digit follows.
    assert_eq!(
        token_types("1."),
        vec![TokenType::NUMBER, TokenType::DOT, TokenType::EOF]
    );

    let mut lexer = Lexer::new("1.");
    assert_eq!(lexer.next_token().lexeme, "1");
}

#[test]
fn line_comments_are_skipped() {
    let mut lexer = Lexer::new("// comment\n1");
    let token = lexer.next_token();

    assert_eq!(token.token_type, TokenType::NUMBER);
    assert_eq!(token.line_num, 2);
}

#[test]
fn newlines_advance_the_line_counter() {
    let mut lexer = Lexer::new("1\n2\n\n3");

    assert_eq!(lexer.next_token().line_num, 1);
    assert_eq!(lexer.next_token().line_num, 2);
    assert_eq!(lexer.next_token().line_num, 4);
}

#[test]
fn string_literals_keep_their_quotes() {
    let mut lexer = Lexer::new("\"hello\"");
    let token = lexer.next_token();

    assert_eq!(token.token_type, TokenType::STRING);
    assert_eq!(token.lexeme, "\"hello\"");
}

#[test]
fn strings_spanning_lines_report_their_starting_line() {
    let mut lexer = Lexer::new("\"hello\nworld\"");

    let string = lexer.next_token();
    assert_eq!(string.token_type, TokenType::STRING);
    assert_eq!(string.line_num, 1);
    assert_eq!(string.lexeme, "\"hello\nworld\"");

    // The newline inside the literal still advanced the lexer's
    // own line counter.
    let eof = lexer.next_token();
    assert_eq!(eof.token_type, TokenType::EOF);
    assert_eq!(eof.line_num, 2);
}

#[test]
fn unterminated_strings_are_error_tokens() {
    let mut lexer = Lexer::new("\"abc");
    let token = lexer.next_token();

    assert_eq!(token.token_type, TokenType::ERROR);
    assert_eq!(token.lexeme, "Unterminated string.");
}

#[test]
fn unexpected_characters_are_error_tokens() {
    let mut lexer = Lexer::new("@");
    let token = lexer.next_token();

    assert_eq!(token.token_type, TokenType::ERROR);
    assert_eq!(token.lexeme, "Unexpected character.");
}

#[test]
fn empty_source_yields_eof() {
    assert_eq!(token_types(""), vec![TokenType::EOF]);
    assert_eq!(token_types("   \t\r\n"), vec![TokenType::EOF]);
}
