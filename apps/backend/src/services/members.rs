//! Member domain service.

use sea_orm::{ConnectionTrait, DatabaseTransaction};
use serde_json::{Map, Value};
use tracing::{debug, info};

use super::{optional_integer, reject_unknown, required_text};
use crate::adapters::members_sea::MemberFilter;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::logging::pii::Redacted;
use crate::protocol::members::MemberQuery;
use crate::repos::attributes::{parse_attributes, MEMBER_ATTRIBUTES};
use crate::repos::members::{self, Member, NewMember};

/// Accepted on input for compatibility with existing clients; never stored.
const IGNORED_ATTRIBUTES: [&str; 1] = ["memberPassword"];

const CREATE_ATTRIBUTES: [&str; 4] = [
    "memberNickname",
    "memberEmail",
    "memberLevel",
    "memberExpOverLevel",
];

fn member_not_found(member_id: i64) -> DomainError {
    DomainError::not_found(
        NotFoundKind::Member,
        format!("A member with ID {member_id} was not found"),
    )
}

fn strip_ignored(attributes: &mut Map<String, Value>) {
    for name in IGNORED_ATTRIBUTES {
        if attributes.remove(name).is_some() {
            debug!(attribute = name, "discarding unsupported member attribute");
        }
    }
}

/// Member domain service.
pub struct MemberService;

impl MemberService {
    pub fn new() -> Self {
        Self
    }

    pub async fn list<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        query: &MemberQuery,
    ) -> Result<Vec<Member>, DomainError> {
        let filter = MemberFilter {
            nickname: query.nickname().map(str::to_string),
            email: query.email().map(str::to_string),
        };
        members::list(conn, &filter).await
    }

    pub async fn get<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        member_id: i64,
    ) -> Result<Member, DomainError> {
        members::find_by_id(conn, member_id)
            .await?
            .ok_or_else(|| member_not_found(member_id))
    }

    /// Create a member; level and experience default to 1 and 0.
    pub async fn create(
        &self,
        txn: &DatabaseTransaction,
        mut attributes: Map<String, Value>,
    ) -> Result<Member, DomainError> {
        strip_ignored(&mut attributes);
        reject_unknown(&attributes, &CREATE_ATTRIBUTES)?;

        let new = NewMember {
            nickname: required_text(&attributes, "memberNickname")?,
            email: required_text(&attributes, "memberEmail")?,
            level: optional_integer(&attributes, "memberLevel")?,
            exp_over_level: optional_integer(&attributes, "memberExpOverLevel")?,
        };
        let member = members::create(txn, new).await?;
        info!(member_id = member.id, email = %Redacted(&member.email), "member created");
        Ok(member)
    }

    pub async fn patch(
        &self,
        txn: &DatabaseTransaction,
        member_id: i64,
        mut attributes: Map<String, Value>,
    ) -> Result<Member, DomainError> {
        strip_ignored(&mut attributes);
        let changes = parse_attributes(&attributes, &MEMBER_ATTRIBUTES, None)?;

        self.get(txn, member_id).await?;
        if !members::patch(txn, member_id, changes).await? {
            return Err(member_not_found(member_id));
        }
        self.get(txn, member_id).await
    }

    /// Delete a member with all of its seats.
    pub async fn delete(&self, txn: &DatabaseTransaction, member_id: i64) -> Result<(), DomainError> {
        if !members::delete(txn, member_id).await? {
            return Err(member_not_found(member_id));
        }
        info!(member_id, "member deleted");
        Ok(())
    }
}

impl Default for MemberService {
    fn default() -> Self {
        Self::new()
    }
}
