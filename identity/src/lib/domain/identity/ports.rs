use chrono::Utc;

use crate::domain::identity::errors::AuthError;
use crate::domain::identity::models::Role;
use crate::domain::identity::models::RoleName;
use crate::domain::identity::models::User;
use crate::domain::identity::models::UserId;

/// Port for identity service operations.
///
/// Every username and role name argument is trimmed and lower-cased before
/// use. Where both a username and a role name could be unknown, the username
/// is checked first.
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new account.
    ///
    /// # Arguments
    /// * `username` - Raw username
    /// * `password` - Plaintext password (only its salted hash is stored)
    ///
    /// # Returns
    /// Created user entity
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Normalized username is taken
    /// * `IdSpaceExhausted` - Every identifier of the configured width is in use
    /// * `Password` - Hashing failed
    fn create_user(&self, username: &str, password: &str) -> Result<User, AuthError>;

    /// Delete an account, its role memberships and its live token.
    ///
    /// # Errors
    /// * `UsernameNotFound` - No such user
    fn delete_user(&self, username: &str) -> Result<(), AuthError>;

    /// Register a new role with no members.
    ///
    /// # Errors
    /// * `RoleAlreadyExists` - Normalized role name is taken
    fn create_role(&self, role_name: &str) -> Result<Role, AuthError>;

    /// Delete a role and strip it from every user holding it.
    ///
    /// # Errors
    /// * `RoleNotFound` - No such role
    fn delete_role(&self, role_name: &str) -> Result<(), AuthError>;

    /// Grant a role to a user. Granting an already held role has no effect.
    ///
    /// # Errors
    /// * `UsernameNotFound` - No such user
    /// * `RoleNotFound` - No such role
    fn add_role_to_user(&self, username: &str, role_name: &str) -> Result<(), AuthError>;

    /// Revoke a role from a user. Revoking a role the user lacks has no effect.
    ///
    /// # Errors
    /// * `UsernameNotFound` - No such user
    /// * `RoleNotFound` - No such role
    fn remove_role_from_user(&self, username: &str, role_name: &str) -> Result<(), AuthError>;

    /// # Errors
    /// * `UsernameNotFound` - No such user
    fn check_if_username_exists(&self, username: &str) -> Result<(), AuthError>;

    /// # Errors
    /// * `RoleNotFound` - No such role
    fn check_if_role_exists(&self, role_name: &str) -> Result<(), AuthError>;

    /// Identifiers of the users holding a role, sorted.
    ///
    /// # Errors
    /// * `RoleNotFound` - No such role
    fn role_members(&self, role_name: &str) -> Result<Vec<UserId>, AuthError>;

    /// Verify a password and issue a session token.
    ///
    /// Any token previously issued to the user stops being valid.
    ///
    /// # Returns
    /// Encoded token string
    ///
    /// # Errors
    /// * `UsernameNotFound` - No such user
    /// * `InvalidPassword` - Password does not match
    fn authenticate(&self, username: &str, password: &str) -> Result<String, AuthError>;

    /// Check that a token is live. Expired tokens are purged on the way.
    ///
    /// # Errors
    /// * `InvalidToken` - Unknown, invalidated or expired token
    fn validate_token(&self, token: &str) -> Result<(), AuthError>;

    /// Revoke a live token.
    ///
    /// # Errors
    /// * `InvalidToken` - Unknown, invalidated or expired token
    fn invalidate_token(&self, token: &str) -> Result<(), AuthError>;

    /// Whether the token's owner currently holds a role.
    ///
    /// # Errors
    /// * `InvalidToken` - Unknown, invalidated or expired token
    /// * `RoleNotFound` - No such role
    fn check_role(&self, token: &str, role_name: &str) -> Result<bool, AuthError>;

    /// Snapshot of the roles held by the token's owner, sorted.
    ///
    /// # Errors
    /// * `InvalidToken` - Unknown, invalidated or expired token
    fn get_roles(&self, token: &str) -> Result<Vec<RoleName>, AuthError>;

    /// Snapshot of the token's owner.
    ///
    /// Changes to the returned value are not written back; go through the
    /// service to modify an account.
    ///
    /// # Errors
    /// * `InvalidToken` - Unknown, invalidated or expired token
    fn get_user_from_token(&self, token: &str) -> Result<User, AuthError>;
}

/// Source of the current time as a Unix timestamp in seconds.
pub trait Clock: Send + Sync {
    fn now(&self) -> i64;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> i64 {
        Utc::now().timestamp()
    }
}
