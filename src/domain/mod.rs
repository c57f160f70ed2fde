// Domain layer: tokens, reports and the lexer port. No I/O here.

pub mod model;
pub mod ports;
