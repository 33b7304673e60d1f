//! PATCH attribute handling.
//!
//! Request attributes arrive as a JSON object keyed by camel-case names.
//! Each resource declares which names it accepts and the column each one
//! lands in; anything else is rejected. A supplied value only counts when it
//! is truthy or exactly zero, so `null`, `false` and `""` leave the stored
//! value alone while `0` overwrites it.

use sea_orm::IdenStatic;
use serde_json::{Map, Value};

use crate::domain::{Card, PlayerStatus, Round};
use crate::entities::{games, members, players};
use crate::errors::domain::{DomainError, ValidationKind};

/// Whether a supplied JSON value should be applied.
pub fn is_truthy_or_zero(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().map_or(true, |f| !f.is_nan()),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// An attribute that was either not supplied (or falsy) or carries a value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Patch<T> {
    #[default]
    Absent,
    Present(T),
}

impl<'a> Patch<&'a Value> {
    pub fn from_value(value: Option<&'a Value>) -> Self {
        match value {
            Some(v) if is_truthy_or_zero(v) => Patch::Present(v),
            _ => Patch::Absent,
        }
    }
}

impl<T> Patch<T> {
    pub fn is_present(&self) -> bool {
        matches!(self, Patch::Present(_))
    }

    pub fn map<U, E>(self, f: impl FnOnce(T) -> Result<U, E>) -> Result<Patch<U>, E> {
        match self {
            Patch::Absent => Ok(Patch::Absent),
            Patch::Present(v) => f(v).map(Patch::Present),
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Patch::Absent => None,
            Patch::Present(v) => Some(v),
        }
    }
}

/// Storage name for a camel-case attribute: `abcDef -> ABC_DEF`.
///
/// An underscore goes before every upper-case letter that follows a
/// lower-case one; runs of capitals stay together. Columns are not derived
/// from this at runtime: the allow-lists name their columns explicitly and
/// a unit test holds them to this rule.
pub fn database_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev_lower = false;
    for ch in name.chars() {
        if ch.is_uppercase() && prev_lower {
            out.push('_');
        }
        prev_lower = ch.is_lowercase();
        out.extend(ch.to_uppercase());
    }
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrKind {
    Text,
    /// Integer stored as text
    Integer,
    /// Round name, stored as a `rounds` id
    Round,
    /// Player status name, stored as a `statuses` id
    Status,
}

/// One patchable attribute: its external name, the internal name it is
/// stored under, and the column that internal name resolves to.
#[derive(Debug, Clone, Copy)]
pub struct AttributeSpec<C> {
    pub name: &'static str,
    pub stored_as: &'static str,
    pub column: C,
    pub kind: AttrKind,
}

const fn attr<C>(name: &'static str, column: C, kind: AttrKind) -> AttributeSpec<C> {
    AttributeSpec {
        name,
        stored_as: name,
        column,
        kind,
    }
}

const fn translated<C>(
    name: &'static str,
    stored_as: &'static str,
    column: C,
    kind: AttrKind,
) -> AttributeSpec<C> {
    AttributeSpec {
        name,
        stored_as,
        column,
        kind,
    }
}

pub const MEMBER_ATTRIBUTES: [AttributeSpec<members::Column>; 4] = [
    attr("memberNickname", members::Column::MemberNickname, AttrKind::Text),
    attr("memberEmail", members::Column::MemberEmail, AttrKind::Text),
    attr("memberLevel", members::Column::MemberLevel, AttrKind::Integer),
    attr(
        "memberExpOverLevel",
        members::Column::MemberExpOverLevel,
        AttrKind::Integer,
    ),
];

pub const PLAYER_ATTRIBUTES: [AttributeSpec<players::Column>; 2] = [
    attr("playerBet", players::Column::PlayerBet, AttrKind::Integer),
    translated(
        "playerStatus",
        "statusId",
        players::Column::StatusId,
        AttrKind::Status,
    ),
];
pub const PLAYER_CARDS: &str = "playerCards";

pub const GAME_ATTRIBUTES: [AttributeSpec<games::Column>; 4] = [
    translated("round", "roundId", games::Column::RoundId, AttrKind::Round),
    attr("minimumBet", games::Column::MinimumBet, AttrKind::Integer),
    attr("maximumBet", games::Column::MaximumBet, AttrKind::Integer),
    attr("betPool", games::Column::BetPool, AttrKind::Integer),
];
pub const TABLE_CARDS: &str = "tableCards";

/// A parsed value ready for the adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Round(Round),
    Status(PlayerStatus),
}

/// Everything a PATCH asks to change.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeSet<C> {
    pub fields: Vec<(C, FieldValue)>,
    /// Full replacement of the card list; `Present(vec![])` clears it
    pub cards: Patch<Vec<Card>>,
}

impl<C> ChangeSet<C> {
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && !self.cards.is_present()
    }
}

/// Validate `attributes` against `allowed` and keep only the ones that apply.
pub fn parse_attributes<C: Copy>(
    attributes: &Map<String, Value>,
    allowed: &[AttributeSpec<C>],
    cards_attribute: Option<&str>,
) -> Result<ChangeSet<C>, DomainError> {
    let mut fields = Vec::new();
    let mut cards = Patch::Absent;

    for (name, value) in attributes {
        if cards_attribute == Some(name.as_str()) {
            cards = Patch::from_value(Some(value)).map(parse_cards)?;
            continue;
        }

        let spec = allowed.iter().find(|s| s.name == name.as_str()).ok_or_else(|| {
            DomainError::validation(
                ValidationKind::UnknownAttribute,
                format!("Unknown attribute: {name}"),
            )
        })?;

        if let Patch::Present(v) = Patch::from_value(Some(value)) {
            fields.push((spec.column, parse_field(spec, v)?));
        }
    }

    Ok(ChangeSet { fields, cards })
}

pub fn parse_cards(value: &Value) -> Result<Vec<Card>, DomainError> {
    serde_json::from_value(value.clone()).map_err(|e| {
        DomainError::validation(ValidationKind::UnknownCard, format!("Invalid card list: {e}"))
    })
}

/// Integer attribute as its stored text. Accepts JSON integers and integer strings.
pub fn integer_text(name: &str, value: &Value) -> Result<String, DomainError> {
    let parsed = match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    parsed
        .map(|n| n.to_string())
        .ok_or_else(|| DomainError::validation_other(format!("{name} must be an integer")))
}

fn parse_field<C>(spec: &AttributeSpec<C>, value: &Value) -> Result<FieldValue, DomainError> {
    let text = || {
        value
            .as_str()
            .ok_or_else(|| DomainError::validation_other(format!("{} must be a string", spec.name)))
    };

    match spec.kind {
        AttrKind::Text => Ok(FieldValue::Text(text()?.to_string())),
        AttrKind::Integer => integer_text(spec.name, value).map(FieldValue::Text),
        AttrKind::Round => text()?.parse().map(FieldValue::Round),
        AttrKind::Status => text()?.parse().map(FieldValue::Status),
    }
}
