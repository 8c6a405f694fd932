//! External (de)serialization of a [`Sequence`] into the "duck-typed"
//! container/item shapes described in spec section 6: a sequence is really
//! just tokens laid out in one of a handful of primitive container types.
//!
//! A token is flattened to one integer "code" (`2*id + is_close as u32`)
//! so the open/close distinction survives the round trip without relying on
//! callers knowing the id-range convention `mcose_seq::codec` happens to use.

use mcose_core::{Error, Result, Sequence, Token, TokenKind};

/// Codepoint offset used when rendering codes into `char`s, so that small
/// ids land in the Unicode private-use area rather than on control
/// characters.
const STR_BASE: u32 = 0xE000;

/// The element type stored by a container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemType {
    /// Plain integer codes.
    Number,
    /// Codes rendered as characters.
    Chr,
}

/// The container shape wrapping the elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContainerType {
    /// A `Vec` of numbers.
    List,
    /// A `String` of characters.
    Str,
    /// A `Vec` of numbers, semantically fixed-length (no distinct
    /// in-memory representation from `List` in this workspace).
    Tuple,
}

/// A sequence rendered into one of the external container shapes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExternalSequence {
    /// `(item_type: Number, container_type: List | Tuple)`.
    Numbers(Vec<u32>),
    /// `(item_type: Chr, container_type: Str | Tuple)`.
    Chars(Vec<char>),
}

fn token_to_code(t: Token) -> u32 {
    2 * t.id + u32::from(matches!(t.kind, TokenKind::Close))
}

fn code_to_token(code: u32) -> Token {
    let id = code / 2;
    if code % 2 == 0 {
        Token::open(id)
    } else {
        Token::close(id)
    }
}

/// Render `seq` as one of the four `(item_type, container_type)` shapes
/// from spec section 6. `container_type` only affects the item type chosen
/// for `Chr` items when ambiguous; `ItemType` is the authority on whether
/// numbers or characters come out.
#[must_use]
pub fn encode(seq: &Sequence, item_type: ItemType, container_type: ContainerType) -> ExternalSequence {
    let _ = container_type;
    match item_type {
        ItemType::Number => ExternalSequence::Numbers(seq.iter().map(token_to_code).collect()),
        ItemType::Chr => ExternalSequence::Chars(
            seq.iter()
                .map(|t| {
                    char::from_u32(STR_BASE + token_to_code(t))
                        .unwrap_or(char::REPLACEMENT_CHARACTER)
                })
                .collect(),
        ),
    }
}

/// Recover a [`Sequence`] from its external representation.
///
/// # Errors
/// Returns [`Error::InvalidSequence`] if a character lies outside the
/// private-use range this module encodes into.
pub fn decode(ext: &ExternalSequence) -> Result<Sequence> {
    let codes: Vec<u32> = match ext {
        ExternalSequence::Numbers(v) => v.clone(),
        ExternalSequence::Chars(v) => v
            .iter()
            .map(|&c| {
                (c as u32).checked_sub(STR_BASE).ok_or_else(|| {
                    Error::InvalidSequence(format!(
                        "char {c:?} falls outside the encoded private-use range"
                    ))
                })
            })
            .collect::<Result<_>>()?,
    };
    Ok(Sequence::from_tokens(codes.into_iter().map(code_to_token).collect()))
}
