use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Literal {
    Int(i64),
    Float(f64),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{}", v),
            // shortest round-trip form
            Self::Float(v) => write!(f, "{}", v),
        }
    }
}

pub fn demo_literals() -> [Literal; 3] {
    [Literal::Int(0xb1), Literal::Int(123), Literal::Float(123.123)]
}
