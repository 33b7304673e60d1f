use serde::{Deserialize, Serialize};

use super::jsonapi::{parse_number, Document, Links, Resource};
use crate::errors::domain::DomainError;
use crate::repos::members::Member;

pub const MEMBER_TYPE: &str = "member";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberAttributes {
    pub member_nickname: String,
    pub member_email: String,
    pub member_level: i64,
    pub member_exp_over_level: i64,
}

/// `GET /v1/members` query string.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberQuery {
    pub member_nickname: Option<String>,
    pub member_email: Option<String>,
}

// An empty parameter (`?memberNickname=`) is the same as leaving it out.
impl MemberQuery {
    pub fn nickname(&self) -> Option<&str> {
        self.member_nickname.as_deref().filter(|n| !n.is_empty())
    }

    pub fn email(&self) -> Option<&str> {
        self.member_email.as_deref().filter(|e| !e.is_empty())
    }

    fn matches(&self, member: &Member) -> bool {
        self.nickname().map_or(true, |n| member.nickname == n)
            && self.email().map_or(true, |e| member.email == e)
    }
}

pub type MemberResource = Resource<MemberAttributes>;

pub fn member_path(member_id: i64) -> String {
    format!("/members/{member_id}")
}

fn member_resource(member: &Member) -> Result<MemberResource, DomainError> {
    Ok(Resource {
        kind: MEMBER_TYPE.to_string(),
        id: member.id.to_string(),
        links: Links::to(member_path(member.id)),
        attributes: MemberAttributes {
            member_nickname: member.nickname.clone(),
            member_email: member.email.clone(),
            member_level: parse_number("memberLevel", &member.level)?,
            member_exp_over_level: parse_number("memberExpOverLevel", &member.exp_over_level)?,
        },
    })
}

pub fn serialize_member(member: &Member) -> Result<Document<MemberResource>, DomainError> {
    Ok(Document {
        links: Links::to(member_path(member.id)),
        data: member_resource(member)?,
    })
}

pub fn serialize_members(
    members: &[Member],
    query: &MemberQuery,
) -> Result<Document<Vec<MemberResource>>, DomainError> {
    let data = members
        .iter()
        .filter(|m| query.matches(m))
        .map(member_resource)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Document {
        links: Links::to("/members"),
        data,
    })
}
