use super::*;
use crate::{LexErrorKind, Reader, StopSet};
use pretty_assertions::assert_eq;

/// A comma-separated list grammar: numbers, words and `,`.
///
/// `;` terminates lexemes but is not a token of its own, so it reaches the
/// end of the classifier chain unclassified.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Tag {
    Integer,
    Decimal,
    Word,
    Comma,
    Eof,
}

const STOPS: StopSet = StopSet::new(b",;").union(StopSet::WHITESPACE);

#[derive(Default)]
struct ListGrammar {
    emitted: usize,
}

impl Grammar for ListGrammar {
    type Tag = Tag;

    fn emit_token<'src>(
        &mut self,
        cursor: &mut Cursor<'src>,
    ) -> Result<Token<'src, Tag>, LexError> {
        cursor.skip_whitespace();
        if cursor.eof() {
            return Ok(cursor.eof_token(Tag::Eof));
        }
        self.emitted += 1;
        let start = cursor.position();
        if cursor.next_char() == b',' {
            return Ok(cursor.token(Tag::Comma, start, start.offset + 1));
        }
        let chain: [(Tag, Reader<'src>); 3] = [
            (Tag::Integer, Cursor::read_integer),
            (Tag::Decimal, Cursor::read_decimal),
            (Tag::Word, Cursor::read_string),
        ];
        match cursor.classify(start.offset, &STOPS, &chain) {
            Some((tag, end)) => Ok(cursor.token(tag, start, end)),
            None => Err(cursor.unrecognized(start)),
        }
    }
}

fn tokenizer(source: &str) -> Tokenizer<'_, ListGrammar> {
    Tokenizer::new(source, ListGrammar::default())
}

fn tags(source: &str) -> Vec<Tag> {
    tokenizer(source)
        .map(|tok| tok.map(|t| t.tag()))
        .collect::<Result<_, _>>()
        .unwrap_or_default()
}

// === End of Input ===

#[test]
fn empty_and_blank_sources_yield_eof_forever() {
    for source in ["", "\n  \t ", " ", "\r\n"] {
        let mut tok = tokenizer(source);
        for _ in 0..3 {
            let eof = tok.next_token().expect("eof is not an error");
            assert_eq!(eof.tag(), Tag::Eof, "source {source:?}");
            assert!(eof.is_eof());
        }
        assert_eq!(tok.position().offset, source.len());
    }
}

#[test]
fn eof_sentinel_sits_at_end_of_source() {
    let mut tok = tokenizer("a,\nb ");
    let all = tok.tokenize_all().expect("valid input");
    let eof = all.last().copied().expect("at least the sentinel");
    assert!(eof.is_eof());
    assert_eq!(eof.position(), Position::new(5, 2, 3));
    assert!(tok.eof());
}

// === Classification ===

#[test]
fn classifies_in_chain_order() {
    assert_eq!(
        tags("12, 1.5, .5, -3, x1, 1x, -"),
        vec![
            Tag::Integer,
            Tag::Comma,
            Tag::Decimal,
            Tag::Comma,
            Tag::Decimal,
            Tag::Comma,
            Tag::Integer,
            Tag::Comma,
            Tag::Word,
            Tag::Comma,
            Tag::Word,
            Tag::Comma,
            Tag::Word,
        ]
    );
}

#[test]
fn token_positions() {
    let mut tok = tokenizer("alpha,\n  beta");
    let alpha = tok.next_token().expect("alpha");
    assert_eq!((alpha.data(), alpha.line(), alpha.column(), alpha.offset()), ("alpha", 1, 1, 0));
    let comma = tok.next_token().expect("comma");
    assert_eq!((comma.line(), comma.column(), comma.offset()), (1, 6, 5));
    let beta = tok.next_token().expect("beta");
    assert_eq!((beta.data(), beta.line(), beta.column(), beta.offset()), ("beta", 2, 3, 9));
}

#[test]
fn unclassifiable_byte_is_an_error() {
    let mut tok = tokenizer("a ; b");
    assert_eq!(tok.next_token().map(|t| t.data()), Ok("a"));
    let err = tok.next_token().expect_err("`;` is not a token");
    assert_eq!(err.kind, LexErrorKind::UnrecognizedCharacter { byte: b';' });
    assert_eq!(err.position, Position::new(2, 1, 3));
    // The grammar consumed the `;`, so scanning resumes after it.
    assert_eq!(tok.next_token().map(|t| t.data()), Ok("b"));
}

#[test]
fn iterator_stops_before_eof_and_yields_errors() {
    let items: Vec<_> = tokenizer("a;b").collect();
    assert_eq!(items.len(), 3);
    assert!(items[0].is_ok());
    assert!(items[1].is_err());
    assert_eq!(items[2].as_ref().map(|t| t.data()), Ok("b"));
}

// === Peek and Push ===

#[test]
fn peek_then_next_yield_the_same_token() {
    let mut tok = tokenizer("one, two");
    let peeked = tok.peek_token().expect("peek");
    let position = tok.position();
    let next = tok.next_token().expect("next");
    assert_eq!(peeked, next);
    assert_eq!(tok.position(), position);
    assert_eq!(next.data(), "one");
}

#[test]
fn repeated_peek_does_not_advance() {
    let mut tok = tokenizer("one two");
    let first = tok.peek_token().expect("peek");
    let second = tok.peek_token().expect("peek again");
    assert_eq!(first, second);
    assert_eq!(tok.next_token().expect("next"), first);
    assert_eq!(tok.next_token().expect("next").data(), "two");
}

#[test]
fn push_replays_token_without_moving_cursor() {
    let mut tok = tokenizer("one, two");
    let one = tok.next_token().expect("one");
    let before = tok.position();
    tok.push_token(one);
    assert_eq!(tok.peek_token().expect("peek"), one);
    assert_eq!(tok.next_token().expect("next"), one);
    assert_eq!(tok.position(), before);
    assert_eq!(tok.next_token().expect("comma").tag(), Tag::Comma);
}

#[test]
fn grammar_runs_once_per_scanned_token() {
    let mut tok = tokenizer("a b");
    tok.peek_token().expect("peek");
    tok.next_token().expect("next");
    tok.next_token().expect("next");
    assert_eq!(tok.grammar().emitted, 2);
}

#[test]
fn eof_can_be_pushed_back() {
    let mut tok = tokenizer("");
    let eof = tok.next_token().expect("eof");
    tok.push_token(eof);
    assert!(tok.next_token().expect("eof again").is_eof());
}

#[test]
#[should_panic(expected = "a token is already pushed back")]
fn double_push_panics() {
    let mut tok = tokenizer("a b");
    let a = tok.next_token().expect("a");
    let b = tok.next_token().expect("b");
    tok.push_token(b);
    tok.push_token(a);
}

#[test]
#[should_panic(expected = "a token is already pushed back")]
fn push_after_peek_panics() {
    let mut tok = tokenizer("a b");
    let a = tok.peek_token().expect("a");
    tok.push_token(a);
}

// === Reset and Accessors ===

#[test]
fn reset_rewinds_and_drops_pushed_token() {
    let mut tok = tokenizer("x, y");
    tok.next_token().expect("x");
    tok.peek_token().expect("comma");
    tok.reset();
    assert_eq!(tok.position(), Position::START);
    assert_eq!(tok.remainder(), "x, y");
    assert_eq!(tok.next_token().expect("x").data(), "x");
}

#[test]
fn length_and_remainder() {
    let mut tok = tokenizer("ab, cd");
    assert_eq!(tok.length(), 6);
    tok.next_token().expect("ab");
    assert_eq!(tok.remainder(), ", cd");
}

#[test]
fn borrowed_grammar() {
    let mut grammar = ListGrammar::default();
    {
        let mut tok = Tokenizer::new("a b c", &mut grammar);
        assert_eq!(tok.tokenize_all().map(|t| t.len()), Ok(4));
    }
    assert_eq!(grammar.emitted, 3);
}

// === Property Tests ===

mod proptest_tokenizer {
    use super::{tokenizer, Tag};
    use proptest::prelude::*;

    fn source_strategy() -> impl Strategy<Value = String> {
        proptest::collection::vec(
            prop_oneof![
                Just("12"),
                Just("-4.5"),
                Just(".5"),
                Just("word"),
                Just(","),
                Just(" "),
                Just("\n"),
                Just("\t"),
            ],
            0..32,
        )
        .prop_map(|parts| parts.concat())
    }

    proptest! {
        #[test]
        fn whitespace_only_is_eof(source in "[ \t\r\n]{0,32}") {
            let mut tok = tokenizer(&source);
            for _ in 0..3 {
                let token = tok.next_token();
                prop_assert!(matches!(token, Ok(t) if t.tag() == Tag::Eof));
            }
        }

        #[test]
        fn peek_never_changes_the_stream(source in source_strategy(), peek_every in 1usize..4) {
            let plain = tokenizer(&source).tokenize_all();
            prop_assert!(plain.is_ok());

            let mut tok = tokenizer(&source);
            let mut recorded = Vec::new();
            for i in 0usize.. {
                let peeked = (i % peek_every == 0).then(|| tok.peek_token());
                let next = tok.next_token();
                if let Some(peeked) = peeked {
                    prop_assert_eq!(peeked, next.clone());
                }
                let Ok(token) = next else {
                    break;
                };
                recorded.push(token);
                if token.is_eof() {
                    break;
                }
            }
            prop_assert_eq!(Ok(recorded), plain);
        }

        #[test]
        fn offsets_increase_and_slice_the_source(source in source_strategy()) {
            let tokens = tokenizer(&source).tokenize_all().unwrap_or_default();
            let mut last_end = 0;
            for token in &tokens {
                prop_assert!(token.offset() >= last_end);
                prop_assert_eq!(&source[token.range()], token.data());
                last_end = token.end();
            }
        }
    }
}
