/// The lexical form of a float literal.
///
/// GraphQL float literals can carry a fractional part, an exponent part, or
/// both. Tooling (formatters, classifiers) sometimes needs to know which
/// form was written, so the lexer records it on the token.
///
/// A literal with an exponent part is `Exponential` even when it also has a
/// fractional part (`1.5e10` is exponential); a literal with only a
/// fractional part is `FixedPoint` (`1.5`).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FloatFormat {
    /// `1.5` — fractional part only.
    FixedPoint,
    /// `1e10`, `1.5e10`, `2E-3` — exponent part present.
    Exponential,
}
