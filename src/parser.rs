//! This module provides the parser for textual move notation, utilizing the `pest` crate.
//! It turns single commands such as `1 -> 3` and multi-line move scripts into `Move` values.

use crate::types::{HanoiError, Move, TowerId};
use pest::{
    error::{Error, ErrorVariant},
    iterators::Pair,
    Parser as PestParser, Position, Span,
};
use pest_derive::Parser as PestParser;

/// Derives a `PestParser` for the move notation defined in `notation.pest`.
#[derive(PestParser)]
#[grammar = "notation.pest"]
pub struct MoveParser;

/// Parses a single move command.
///
/// Accepted forms are `1 3`, `1->3`, `1 > 3`, `1,3` and `1 to 3`. Surrounding whitespace
/// is ignored.
///
/// # Returns
///
/// * `Ok(Move)` if the input names two valid towers.
/// * `Err(HanoiError::ParseError)` on a syntax error or a tower other than 1, 2 or 3.
pub fn parse_move(input: &str) -> Result<Move, HanoiError> {
    let input = input.trim();
    let mut moves = parse_rule(Rule::command, input)?;

    // The grammar admits exactly one move per command.
    moves.pop().ok_or_else(|| {
        HanoiError::ParseError(Box::new(Error::new_from_pos(
            ErrorVariant::CustomError {
                message: "expected a move such as '1 3'".to_string(),
            },
            Position::from_start(input),
        )))
    })
}

/// Parses a move script: one move per line, with blank lines and `#` comments ignored.
///
/// # Returns
///
/// * `Ok(Vec<Move>)` with the moves in file order.
/// * `Err(HanoiError::ParseError)` pointing at the first malformed line.
pub fn parse_script(input: &str) -> Result<Vec<Move>, HanoiError> {
    parse_rule(Rule::script, input)
}

fn parse_rule(rule: Rule, input: &str) -> Result<Vec<Move>, HanoiError> {
    MoveParser::parse(rule, input)
        .map_err(|e| HanoiError::ParseError(e.into()))?
        .flat_map(Pair::into_inner)
        .filter(|pair| pair.as_rule() == Rule::tower_move)
        .map(parse_tower_move)
        .collect()
}

/// Parses a `Pair<Rule::tower_move>` into a `Move`.
fn parse_tower_move(pair: Pair<Rule>) -> Result<Move, HanoiError> {
    let span = pair.as_span();
    let mut towers = pair.into_inner().map(parse_tower);

    match (towers.next(), towers.next()) {
        (Some(from), Some(to)) => Ok(Move::new(from?, to?)),
        _ => Err(parse_error("a move needs a source and a destination tower", span)),
    }
}

/// Parses a `Pair<Rule::tower>`, rejecting numbers other than 1, 2 and 3.
fn parse_tower(pair: Pair<Rule>) -> Result<TowerId, HanoiError> {
    pair.as_str().parse::<TowerId>().map_err(|_| {
        parse_error(
            &format!("unknown tower '{}' (must be 1, 2, or 3)", pair.as_str()),
            pair.as_span(),
        )
    })
}

/// Creates a `HanoiError::ParseError` from a message and a `Span`.
fn parse_error(msg: &str, span: Span) -> HanoiError {
    HanoiError::ParseError(Box::new(Error::new_from_span(
        ErrorVariant::CustomError {
            message: msg.to_string(),
        },
        span,
    )))
}
