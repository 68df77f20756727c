//! Credential verification and principal resolution.
//!
//! The stored credential is always a bcrypt hash; verification is
//! behind a trait so the hashing scheme stays decoupled from the
//! entity lookup.

use crate::context::{RequestContext, Role};
use crate::entities::{admin, faculty, student};
use crate::error::{Result, ServiceError};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, candidate: &str, stored_hash: &str) -> bool;
}

pub struct BcryptVerifier;

impl CredentialVerifier for BcryptVerifier {
    fn verify(&self, candidate: &str, stored_hash: &str) -> bool {
        bcrypt::verify(candidate, stored_hash).unwrap_or(false)
    }
}

pub fn hash_password(password: &str) -> std::result::Result<String, bcrypt::BcryptError> {
    bcrypt::hash(password, bcrypt::DEFAULT_COST)
}

/// Resolve an active principal for the requested role and verify the
/// supplied credential. Unknown usernames and bad passwords both map
/// to `InvalidCredentials`.
pub async fn login(
    db: &DatabaseConnection,
    verifier: &dyn CredentialVerifier,
    role: Role,
    username: &str,
    password: &str,
) -> Result<RequestContext> {
    let (principal_id, stored_hash) = match role {
        Role::Admin => admin::Entity::find()
            .filter(admin::Column::Username.eq(username))
            .filter(admin::Column::IsActive.eq(true))
            .one(db)
            .await?
            .map(|m| (m.admin_id, m.password))
            .ok_or(ServiceError::InvalidCredentials)?,
        Role::Faculty => faculty::Entity::find()
            .filter(faculty::Column::Username.eq(username))
            .filter(faculty::Column::IsActive.eq(true))
            .one(db)
            .await?
            .map(|m| (m.faculty_id, m.password))
            .ok_or(ServiceError::InvalidCredentials)?,
        Role::Student => student::Entity::find()
            .filter(student::Column::Username.eq(username))
            .filter(student::Column::IsActive.eq(true))
            .one(db)
            .await?
            .map(|m| (m.student_id, m.password))
            .ok_or(ServiceError::InvalidCredentials)?,
    };

    if !verifier.verify(password, &stored_hash) {
        return Err(ServiceError::InvalidCredentials);
    }

    Ok(RequestContext::new(role, principal_id))
}
