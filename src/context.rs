//! Request-scoped principal context.
//!
//! The transport layer resolves credentials once per request and hands
//! the core a `RequestContext`; operations never read ambient session
//! state.

use crate::error::ServiceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Faculty,
    Student,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::Faculty => write!(f, "faculty"),
            Role::Student => write!(f, "student"),
        }
    }
}

/// An authenticated principal: role plus the id of the matching
/// admin/faculty/student row.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestContext {
    pub role: Role,
    pub principal_id: Uuid,
}

impl RequestContext {
    pub fn new(role: Role, principal_id: Uuid) -> Self {
        Self { role, principal_id }
    }

    fn require(&self, required: Role) -> Result<(), ServiceError> {
        if self.role == required {
            Ok(())
        } else {
            Err(ServiceError::Unauthorized { required })
        }
    }

    pub fn require_admin(&self) -> Result<(), ServiceError> {
        self.require(Role::Admin)
    }

    pub fn require_faculty(&self) -> Result<(), ServiceError> {
        self.require(Role::Faculty)
    }

    pub fn require_student(&self) -> Result<(), ServiceError> {
        self.require(Role::Student)
    }
}
