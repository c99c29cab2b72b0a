use super::*;
use golex_ir::TokenCategory;
use golex_lexer::tokenize_str;
use proptest::prelude::*;

fn tok(category: TokenCategory, lexeme: &str) -> Token {
    Token::synthetic(category, lexeme)
}

/// Lexemes of everything the lexer read from input, in order.
fn read_lexemes(tokens: &[Token]) -> Vec<String> {
    tokens
        .iter()
        .filter(|t| !t.category().is_synthesized())
        .map(|t| t.lexeme().to_string())
        .collect()
}

mod pair_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn import_paren() {
        let tokens = [
            tok(TokenCategory::Identifier, "import"),
            tok(TokenCategory::Bracket, "("),
        ];
        assert_eq!(format(&tokens), "import (");
    }

    #[test]
    fn member_access() {
        let tokens = [
            tok(TokenCategory::Identifier, "foo"),
            tok(TokenCategory::Operator, "."),
            tok(TokenCategory::Identifier, "bar"),
        ];
        assert_eq!(format(&tokens), "foo.bar");
    }

    #[test]
    fn empty_and_single() {
        assert_eq!(format(&[]), "");
        assert_eq!(format(&[tok(TokenCategory::Number, "1")]), "1");
        assert!(with_whitespace(&[]).is_empty());
    }

    #[test]
    fn whitespace_tokens_are_interleaved() {
        let tokens = [
            tok(TokenCategory::Identifier, "x"),
            tok(TokenCategory::Operator, ":="),
            tok(TokenCategory::Number, "1"),
        ];
        let spaced = with_whitespace(&tokens);
        let categories: Vec<_> = spaced.iter().map(Token::category).collect();
        assert_eq!(
            categories,
            [
                TokenCategory::Identifier,
                TokenCategory::Whitespace,
                TokenCategory::Operator,
                TokenCategory::Whitespace,
                TokenCategory::Number,
            ]
        );
        assert_eq!(spaced[0], tokens[0]);
        assert_eq!(spaced[2], tokens[1]);
        assert_eq!(spaced[4], tokens[2]);
    }

    #[test]
    fn counts_inserted_spaces() {
        let mut formatter = Formatter::new(StringEmitter::new());
        formatter.format_tokens(&[
            tok(TokenCategory::Keyword, "var"),
            tok(TokenCategory::Identifier, "n"),
            tok(TokenCategory::DataType, "int"),
        ]);
        assert_eq!(formatter.inserted(), 2);
        assert_eq!(formatter.finish().output(), "var n int");
    }
}

mod source_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn reformat(text: &str) -> String {
        format(&tokenize_str(text))
    }

    #[test]
    fn spaces_are_canonicalised() {
        assert_eq!(reformat("x:=1"), "x := 1");
        assert_eq!(reformat("x   :=    1"), "x := 1");
    }

    #[test]
    fn bitwise_operands_are_glued() {
        assert_eq!(reformat("a & b | c"), "a&b|c");
        assert_eq!(reformat("a && b"), "a && b");
    }

    #[test]
    fn logical_assign_keeps_its_equals() {
        assert_eq!(reformat("a&&=b"), "a &&= b");
        assert_eq!(reformat("a &&= b"), "a &&= b");
    }

    #[test]
    fn block_opening() {
        assert_eq!(reformat("if x<=y{"), "if x <= y {");
        assert_eq!(reformat("func main(){"), "func main () {");
    }

    #[test]
    fn method_call() {
        assert_eq!(reformat("fmt . Println ( \"hi\" )"), "fmt.Println (\"hi\")");
    }

    #[test]
    fn indentation_comes_from_brackets() {
        assert_eq!(
            reformat("for {\n\tx = 1\n}\n"),
            "for {\n        x = 1\n}\n"
        );
    }

    #[test]
    fn trailing_comment_is_spaced() {
        assert_eq!(reformat("x := 1   // one"), "x := 1 // one");
    }
}

mod property_tests {
    use super::*;

    /// Fragments that never fuse into a different token when glued.
    fn fragment() -> impl Strategy<Value = &'static str> {
        prop::sample::select(vec![
            "x", "y1", "func", "int", "42", "(", ")", "{", "}", "[", "]", ":=", "+", ",",
            "\"s\"", "\n",
        ])
    }

    fn source() -> impl Strategy<Value = String> {
        prop::collection::vec(fragment(), 0..32).prop_map(|parts| parts.join(" "))
    }

    proptest! {
        #[test]
        fn formatting_keeps_every_lexeme(text in source()) {
            let tokens = tokenize_str(&text);
            let spaced = with_whitespace(&tokens);
            prop_assert_eq!(read_lexemes(&spaced), read_lexemes(&tokens));
        }

        #[test]
        fn formatted_text_relexes_to_the_same_tokens(text in source()) {
            let tokens = tokenize_str(&text);
            let relexed = tokenize_str(&format(&tokens));
            prop_assert_eq!(read_lexemes(&relexed), read_lexemes(&tokens));
        }

        #[test]
        fn formatting_is_idempotent(text in source()) {
            let once = format(&tokenize_str(&text));
            let twice = format(&tokenize_str(&once));
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn format_matches_spaced_lexemes(text in source()) {
            let tokens = tokenize_str(&text);
            let joined: String = with_whitespace(&tokens).iter().map(Token::lexeme).collect();
            prop_assert_eq!(format(&tokens), joined);
        }
    }
}
