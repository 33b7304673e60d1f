//! DTOs for the members adapter.

#[derive(Debug, Clone)]
pub struct MemberCreate {
    pub nickname: String,
    pub email: String,
    pub level: String,
    pub exp_over_level: String,
}

/// Equality predicates for listing; `None` omits the predicate.
#[derive(Debug, Clone, Default)]
pub struct MemberFilter {
    pub nickname: Option<String>,
    pub email: Option<String>,
}
