use actix_web::{HttpMessage, HttpRequest};

use super::database::schemas::user::Role;

/// Acting identity resolved by the auth middleware and stored as a request
/// extension.
#[derive(Debug, Clone)]
pub struct Identity {
    pub user_id: bson::oid::ObjectId,
    pub role: Role,
}

pub fn get_identity(req: &HttpRequest) -> Option<Identity> {
    let extensions = req.extensions();
    extensions.get::<Identity>().cloned()
}

pub fn has_role(identity: &Identity, allowed: &[Role]) -> bool {
    allowed.contains(&identity.role)
}

/// Mutation rule shared by every owned resource: the acting user must be the
/// owner or hold the admin role.
pub fn owns_or_admin(identity: &Identity, owner: &bson::oid::ObjectId) -> bool {
    identity.role == Role::Admin || identity.user_id == *owner
}
