use std::collections::BTreeSet;
use std::fmt;

use auth::token::expiry;
use auth::Claims;
use auth::Header;
use auth::SaltedHash;

/// User unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(pub u64);

impl UserId {
    /// Get the raw numeric identifier.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Username value type
///
/// Case-insensitive: surrounding whitespace is trimmed and the rest is
/// lower-cased on construction, so equal values are equal usernames.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Username(String);

impl Username {
    /// Create a normalized username.
    ///
    /// # Arguments
    /// * `username` - Raw username as supplied by the caller
    pub fn new(username: impl AsRef<str>) -> Self {
        Self(normalize(username.as_ref()))
    }

    /// Get username as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Role name value type
///
/// Normalized like [`Username`]. The name is also the role's identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoleName(String);

impl RoleName {
    /// Create a normalized role name.
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(normalize(name.as_ref()))
    }

    /// Get role name as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// User aggregate entity.
///
/// Instances handed out by the service are snapshots; changing one does not
/// change the stored account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub roles: BTreeSet<RoleName>,
    pub password_salt: String,
    pub password_hash: String,
}

impl User {
    /// Create a user without roles from a stored salt and hash.
    pub fn new(id: UserId, username: Username, password: SaltedHash) -> Self {
        Self {
            id,
            username,
            roles: BTreeSet::new(),
            password_salt: password.salt,
            password_hash: password.hash,
        }
    }

    /// Grant a role. No-op if already granted.
    pub fn add_role(&mut self, role_name: RoleName) {
        self.roles.insert(role_name);
    }

    /// Revoke a role. No-op if not granted.
    pub fn remove_role(&mut self, role_name: &RoleName) {
        self.roles.remove(role_name);
    }

    pub fn has_role(&self, role_name: &RoleName) -> bool {
        self.roles.contains(role_name)
    }

    /// Snapshot of the granted roles, sorted by name.
    pub fn get_roles(&self) -> Vec<RoleName> {
        self.roles.iter().cloned().collect()
    }
}

/// Named authorization label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role {
    pub name: RoleName,
}

impl Role {
    pub fn new(name: RoleName) -> Self {
        Self { name }
    }
}

/// Bearer session credential.
///
/// The signature segment is always empty, so it is not stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub header: Header,
    pub claims: Claims,
}

impl Token {
    /// Create a token for `user` expiring at `exp` (Unix timestamp).
    pub fn issue(user: &User, exp: i64) -> Self {
        Self {
            header: Header::unsigned(),
            claims: Claims::for_user(user.id.as_u64(), user.username.as_str(), exp),
        }
    }

    /// Whether the token is still honored according to the system clock.
    pub fn is_valid(&self) -> bool {
        !expiry::is_expired(self.claims.exp)
    }

    /// Whether the token is still honored at `now`.
    pub fn is_valid_at(&self, now: i64) -> bool {
        !self.claims.is_expired(now)
    }

    pub fn get_user_id(&self) -> UserId {
        UserId(self.claims.sub)
    }

    pub fn expires_at(&self) -> i64 {
        self.claims.exp
    }
}
