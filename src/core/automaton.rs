use crate::domain::model::{is_keyword, Diagnostic, LexReport, Strategy, Token, TokenKind};
use crate::domain::ports::Lexer;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum State {
    Start,
    Word,
    Number,
    Operator,
    Slash,
    LineComment,
    InString,
    StringEnd,
    Punctuation,
}

impl State {
    fn is_accepting(&self) -> bool {
        !matches!(self, Self::Start | Self::InString)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Symbol {
    Letter,
    Digit,
    Whitespace,
    Newline,
    Slash,
    Quote,
    OperatorSym,
    PunctuationSym,
    Other,
}

impl Symbol {
    const ALL: [Symbol; 9] = [
        Symbol::Letter,
        Symbol::Digit,
        Symbol::Whitespace,
        Symbol::Newline,
        Symbol::Slash,
        Symbol::Quote,
        Symbol::OperatorSym,
        Symbol::PunctuationSym,
        Symbol::Other,
    ];

    fn of(ch: char) -> Self {
        match ch {
            '\n' => Self::Newline,
            '/' => Self::Slash,
            '"' => Self::Quote,
            c if c.is_ascii_alphabetic() || c == '_' || c == '$' => Self::Letter,
            c if c.is_ascii_digit() => Self::Digit,
            c if c.is_whitespace() => Self::Whitespace,
            '+' | '-' | '*' | '=' | '<' | '>' | '!' | '&' | '|' | '%' | '^' | '~' => {
                Self::OperatorSym
            }
            '(' | ')' | '{' | '}' | '[' | ']' | ';' | ',' | '.' => Self::PunctuationSym,
            _ => Self::Other,
        }
    }
}

/// Finite-state lexer driven by a `(state, symbol) -> state` table.
///
/// A missing entry out of an accepting state ends the current lexeme and the
/// character is fed again from `Start`. A missing entry from `Start` is an
/// unrecognised character: it is reported, skipped, and scanning continues.
pub struct AutomatonLexer {
    transitions: HashMap<(State, Symbol), State>,
}

impl AutomatonLexer {
    pub fn new() -> Self {
        use State::*;
        use Symbol as S;

        let mut transitions = HashMap::from([
            ((Start, S::Whitespace), Start),
            ((Start, S::Newline), Start),
            ((Start, S::Letter), Word),
            ((Start, S::Digit), Number),
            ((Start, S::OperatorSym), Operator),
            ((Start, S::Slash), Slash),
            ((Start, S::Quote), InString),
            ((Start, S::PunctuationSym), Punctuation),
            ((Word, S::Letter), Word),
            ((Word, S::Digit), Word),
            ((Number, S::Digit), Number),
            ((Operator, S::OperatorSym), Operator),
            ((Slash, S::Slash), LineComment),
            ((Slash, S::OperatorSym), Operator),
            ((InString, S::Quote), StringEnd),
        ]);

        for symbol in Symbol::ALL {
            if symbol != S::Newline {
                transitions.insert((LineComment, symbol), LineComment);
            }
            if symbol != S::Newline && symbol != S::Quote {
                transitions.insert((InString, symbol), InString);
            }
        }

        Self { transitions }
    }
}

impl Default for AutomatonLexer {
    fn default() -> Self {
        Self::new()
    }
}

struct Scan<'a> {
    transitions: &'a HashMap<(State, Symbol), State>,
    state: State,
    lexeme: String,
    start: usize,
    report: LexReport,
}

impl Scan<'_> {
    fn feed(&mut self, offset: usize, ch: char) {
        let symbol = Symbol::of(ch);

        match self.transitions.get(&(self.state, symbol)).copied() {
            Some(State::Start) => {}
            Some(next) => self.advance(offset, ch, next),
            None if self.state == State::Start => self.reject(offset, ch.to_string()),
            None if self.state == State::InString => {
                // 字串中遇到換行：丟棄未完成的字串
                let fragment = std::mem::take(&mut self.lexeme);
                self.reject(self.start, fragment);
                self.state = State::Start;
            }
            None => {
                self.emit();
                self.feed(offset, ch);
            }
        }
    }

    fn advance(&mut self, offset: usize, ch: char, next: State) {
        if self.state == State::Start {
            self.start = offset;
        }
        self.lexeme.push(ch);
        self.state = next;
    }

    fn reject(&mut self, offset: usize, fragment: String) {
        tracing::warn!("Unrecognized sequence at byte {}: {:?}", offset, fragment);
        self.report.diagnostics.push(Diagnostic { offset, fragment });
    }

    fn emit(&mut self) {
        let lexeme = std::mem::take(&mut self.lexeme);
        let kind = match self.state {
            State::Word if is_keyword(&lexeme) => TokenKind::Keyword,
            State::Word => TokenKind::Identifier,
            State::Number => TokenKind::NumericLiteral,
            State::Operator | State::Slash => TokenKind::Operator,
            State::LineComment => TokenKind::Comment,
            State::StringEnd => TokenKind::StringLiteral,
            State::Punctuation if lexeme == "." => TokenKind::DotOperator,
            State::Punctuation => TokenKind::Punctuation,
            State::Start | State::InString => unreachable!("non-accepting state has no token"),
        };
        self.report.tokens.push(Token::new(kind, lexeme, self.start));
        self.state = State::Start;
    }

    fn finish(mut self) -> LexReport {
        if self.state.is_accepting() {
            self.emit();
        } else if self.state == State::InString {
            let fragment = std::mem::take(&mut self.lexeme);
            self.reject(self.start, fragment);
        }
        self.report
    }
}

impl Lexer for AutomatonLexer {
    fn strategy(&self) -> Strategy {
        Strategy::Automaton
    }

    fn analyze(&self, source: &str) -> LexReport {
        let mut scan = Scan {
            transitions: &self.transitions,
            state: State::Start,
            lexeme: String::new(),
            start: 0,
            report: LexReport::new(Strategy::Automaton),
        };

        for (offset, ch) in source.char_indices() {
            scan.feed(offset, ch);
        }

        scan.finish()
    }
}
