use std::collections::HashMap;
use std::collections::HashSet;

use auth::ids;
use auth::password::argon2::MIN_SALT_LENGTH;
use auth::token::expiry;
use auth::Argon2Encryptor;
use auth::Authenticator;
use auth::PasswordEncryptor;
use auth::PasswordError;
use auth::SaltedHash;
use parking_lot::Mutex;

use crate::config::Config;
use crate::domain::identity::errors::AuthError;
use crate::domain::identity::models::Role;
use crate::domain::identity::models::RoleName;
use crate::domain::identity::models::Token;
use crate::domain::identity::models::User;
use crate::domain::identity::models::UserId;
use crate::domain::identity::models::Username;
use crate::domain::identity::ports::AuthServicePort;
use crate::domain::identity::ports::Clock;
use crate::domain::identity::ports::SystemClock;

/// Random draws tried before id generation gives up.
const MAX_ID_ATTEMPTS: usize = 1_000;

/// Domain service implementation for identity operations.
///
/// Owns every account, role and session index behind a single lock, so
/// multi-index updates are never observed half-done. Share it behind an `Arc`.
pub struct AuthService<PE = Argon2Encryptor, C = SystemClock>
where
    PE: PasswordEncryptor,
    C: Clock,
{
    state: Mutex<AuthState>,
    authenticator: Authenticator<PE>,
    clock: C,
    token_lifetime: i64,
    id_digits: u32,
}

/// Identity indices. Must only change as a unit.
///
/// - `role_users[r]` is exactly the set of users whose `roles` contain `r`
/// - `user_tokens` and `tokens` mirror each other, one live token per user
#[derive(Debug, Default)]
struct AuthState {
    users: HashMap<UserId, User>,
    roles: HashMap<RoleName, Role>,
    tokens: HashMap<String, Token>,
    username_ids: HashMap<Username, UserId>,
    role_users: HashMap<RoleName, HashSet<UserId>>,
    user_tokens: HashMap<UserId, String>,
    // Latest expiry issued per user; keeps every issued token string distinct
    last_expiry: HashMap<UserId, i64>,
}

impl AuthService<Argon2Encryptor, SystemClock> {
    /// Create a service using Argon2id and the system clock.
    ///
    /// # Arguments
    /// * `config` - Token lifetime, password costs and id width
    ///
    /// # Errors
    /// * `Password` - Configured Argon2 costs or salt length are invalid
    pub fn new(config: &Config) -> Result<Self, AuthError> {
        if config.password.salt_length < MIN_SALT_LENGTH {
            return Err(PasswordError::InvalidParameters(format!(
                "salt length {} is below the minimum of {MIN_SALT_LENGTH}",
                config.password.salt_length
            ))
            .into());
        }

        let encryptor = Argon2Encryptor::with_params(
            config.password.memory_kib,
            config.password.iterations,
            config.password.parallelism,
        )?;

        Ok(Self::with_components(config, encryptor, SystemClock))
    }
}

impl<PE, C> AuthService<PE, C>
where
    PE: PasswordEncryptor,
    C: Clock,
{
    /// Create a service with injected dependencies.
    ///
    /// # Arguments
    /// * `config` - Token lifetime, salt length and id width
    /// * `encryptor` - Password encryption implementation
    /// * `clock` - Time source for token expiry
    pub fn with_components(config: &Config, encryptor: PE, clock: C) -> Self {
        Self {
            state: Mutex::new(AuthState::default()),
            authenticator: Authenticator::new(encryptor, config.password.salt_length),
            clock,
            token_lifetime: config.token.lifetime_seconds,
            id_digits: config.identity.id_digits,
        }
    }
}

impl AuthState {
    fn user_id(&self, username: &Username) -> Result<UserId, AuthError> {
        self.username_ids
            .get(username)
            .copied()
            .ok_or_else(|| AuthError::UsernameNotFound(username.clone()))
    }

    fn ensure_username_free(&self, username: &Username) -> Result<(), AuthError> {
        if self.username_ids.contains_key(username) {
            return Err(AuthError::UsernameAlreadyExists(username.clone()));
        }
        Ok(())
    }

    fn ensure_role(&self, role_name: &RoleName) -> Result<(), AuthError> {
        if !self.roles.contains_key(role_name) {
            return Err(AuthError::RoleNotFound(role_name.clone()));
        }
        Ok(())
    }

    /// Random identifier not held by any live user.
    fn next_user_id(&self, digits: u32) -> Result<UserId, AuthError> {
        self.next_user_id_from(digits, || ids::gen_id(digits))
    }

    fn next_user_id_from(
        &self,
        digits: u32,
        mut draw: impl FnMut() -> u64,
    ) -> Result<UserId, AuthError> {
        if self.users.len() as u64 >= ids::id_space(digits) {
            return Err(AuthError::IdSpaceExhausted { digits });
        }

        (0..MAX_ID_ATTEMPTS)
            .map(|_| UserId(draw()))
            .find(|id| !self.users.contains_key(id))
            .ok_or(AuthError::IdSpaceExhausted { digits })
    }

    /// Drop the user's live token from both token indices.
    fn purge_user_token(&mut self, user_id: UserId) -> bool {
        match self.user_tokens.remove(&user_id) {
            Some(token) => {
                self.tokens.remove(&token);
                true
            }
            None => false,
        }
    }

    /// Resolve a live token to its owner. Expired tokens are purged.
    fn live_token_owner(&mut self, token: &str, now: i64) -> Result<UserId, AuthError> {
        let (user_id, valid) = match self.tokens.get(token) {
            Some(stored) => (stored.get_user_id(), stored.is_valid_at(now)),
            None => return Err(AuthError::InvalidToken),
        };

        if !valid {
            self.purge_user_token(user_id);
            tracing::debug!(user_id = %user_id, "Expired token purged");
            return Err(AuthError::InvalidToken);
        }

        Ok(user_id)
    }

    fn user(&self, user_id: UserId) -> Result<&User, AuthError> {
        self.users.get(&user_id).ok_or(AuthError::InvalidToken)
    }
}

impl<PE, C> AuthServicePort for AuthService<PE, C>
where
    PE: PasswordEncryptor + 'static,
    C: Clock + 'static,
{
    fn create_user(&self, username: &str, password: &str) -> Result<User, AuthError> {
        let username = Username::new(username);

        self.state.lock().ensure_username_free(&username)?;

        // Argon2 is slow; hash without holding the lock
        let password = self.authenticator.hash_password(password)?;

        let mut guard = self.state.lock();
        let state = &mut *guard;

        state.ensure_username_free(&username)?;
        let id = state.next_user_id(self.id_digits)?;

        let user = User::new(id, username.clone(), password);
        state.users.insert(id, user.clone());
        state.username_ids.insert(username, id);

        tracing::info!(user_id = %id, username = %user.username, "User created");

        Ok(user)
    }

    fn delete_user(&self, username: &str) -> Result<(), AuthError> {
        let username = Username::new(username);

        let mut guard = self.state.lock();
        let state = &mut *guard;

        let user_id = state.user_id(&username)?;

        if let Some(user) = state.users.remove(&user_id) {
            for role_name in &user.roles {
                if let Some(members) = state.role_users.get_mut(role_name) {
                    members.remove(&user_id);
                }
            }
        }
        state.username_ids.remove(&username);
        let had_token = state.purge_user_token(user_id);
        state.last_expiry.remove(&user_id);

        tracing::info!(
            user_id = %user_id,
            username = %username,
            token_revoked = had_token,
            "User deleted"
        );

        Ok(())
    }

    fn create_role(&self, role_name: &str) -> Result<Role, AuthError> {
        let role_name = RoleName::new(role_name);

        let mut guard = self.state.lock();
        let state = &mut *guard;

        if state.roles.contains_key(&role_name) {
            return Err(AuthError::RoleAlreadyExists(role_name));
        }

        let role = Role::new(role_name.clone());
        state.roles.insert(role_name.clone(), role.clone());
        state.role_users.insert(role_name, HashSet::new());

        tracing::info!(role = %role.name, "Role created");

        Ok(role)
    }

    fn delete_role(&self, role_name: &str) -> Result<(), AuthError> {
        let role_name = RoleName::new(role_name);

        let mut guard = self.state.lock();
        let state = &mut *guard;

        state.ensure_role(&role_name)?;

        let members = state.role_users.remove(&role_name).unwrap_or_default();
        for user_id in &members {
            if let Some(user) = state.users.get_mut(user_id) {
                user.remove_role(&role_name);
            }
        }
        state.roles.remove(&role_name);

        tracing::info!(role = %role_name, revoked_from = members.len(), "Role deleted");

        Ok(())
    }

    fn add_role_to_user(&self, username: &str, role_name: &str) -> Result<(), AuthError> {
        let username = Username::new(username);
        let role_name = RoleName::new(role_name);

        let mut guard = self.state.lock();
        let state = &mut *guard;

        let user_id = state.user_id(&username)?;
        state.ensure_role(&role_name)?;

        if let Some(user) = state.users.get_mut(&user_id) {
            user.add_role(role_name.clone());
        }
        state
            .role_users
            .entry(role_name.clone())
            .or_default()
            .insert(user_id);

        tracing::info!(user_id = %user_id, role = %role_name, "Role granted");

        Ok(())
    }

    fn remove_role_from_user(&self, username: &str, role_name: &str) -> Result<(), AuthError> {
        let username = Username::new(username);
        let role_name = RoleName::new(role_name);

        let mut guard = self.state.lock();
        let state = &mut *guard;

        let user_id = state.user_id(&username)?;
        state.ensure_role(&role_name)?;

        if let Some(user) = state.users.get_mut(&user_id) {
            user.remove_role(&role_name);
        }
        if let Some(members) = state.role_users.get_mut(&role_name) {
            members.remove(&user_id);
        }

        tracing::info!(user_id = %user_id, role = %role_name, "Role revoked");

        Ok(())
    }

    fn check_if_username_exists(&self, username: &str) -> Result<(), AuthError> {
        let username = Username::new(username);
        self.state.lock().user_id(&username).map(|_| ())
    }

    fn check_if_role_exists(&self, role_name: &str) -> Result<(), AuthError> {
        let role_name = RoleName::new(role_name);
        self.state.lock().ensure_role(&role_name)
    }

    fn role_members(&self, role_name: &str) -> Result<Vec<UserId>, AuthError> {
        let role_name = RoleName::new(role_name);

        let state = self.state.lock();
        state.ensure_role(&role_name)?;

        let mut members: Vec<UserId> = state
            .role_users
            .get(&role_name)
            .map(|members| members.iter().copied().collect())
            .unwrap_or_default();
        members.sort();

        Ok(members)
    }

    fn authenticate(&self, username: &str, password: &str) -> Result<String, AuthError> {
        let username = Username::new(username);

        let (user_id, stored) = {
            let state = self.state.lock();
            let user_id = state.user_id(&username)?;
            let user = state
                .users
                .get(&user_id)
                .ok_or_else(|| AuthError::UsernameNotFound(username.clone()))?;
            let stored = SaltedHash {
                salt: user.password_salt.clone(),
                hash: user.password_hash.clone(),
            };
            (user_id, stored)
        };

        // Verification is as slow as hashing; the account is re-checked below
        if let Err(e) = self
            .authenticator
            .verify_credentials(password, &stored.salt, &stored.hash)
        {
            tracing::warn!(user_id = %user_id, error = %e, "Authentication failed");
            return Err(e.into());
        }

        let now = self.clock.now();

        let mut guard = self.state.lock();
        let state = &mut *guard;

        // The account may have been deleted or recreated meanwhile
        let user = state
            .users
            .get(&user_id)
            .filter(|user| user.username == username && user.password_salt == stored.salt)
            .ok_or_else(|| AuthError::UsernameNotFound(username.clone()))?;

        let mut exp = expiry::gen_expiry_at(now, self.token_lifetime);
        if let Some(&last) = state.last_expiry.get(&user_id) {
            exp = exp.max(last.saturating_add(1));
        }

        let token = Token::issue(user, exp);
        let token_string = self.authenticator.generate_token(&token.claims)?;

        let replaced = state.purge_user_token(user_id);
        state.tokens.insert(token_string.clone(), token);
        state.user_tokens.insert(user_id, token_string.clone());
        state.last_expiry.insert(user_id, exp);

        tracing::info!(
            user_id = %user_id,
            expires_at = exp,
            replaced_previous = replaced,
            "Token issued"
        );

        Ok(token_string)
    }

    fn validate_token(&self, token: &str) -> Result<(), AuthError> {
        let now = self.clock.now();
        self.state.lock().live_token_owner(token, now).map(|_| ())
    }

    fn invalidate_token(&self, token: &str) -> Result<(), AuthError> {
        let now = self.clock.now();

        let mut state = self.state.lock();
        let user_id = state.live_token_owner(token, now)?;
        state.purge_user_token(user_id);

        tracing::info!(user_id = %user_id, "Token invalidated");

        Ok(())
    }

    fn check_role(&self, token: &str, role_name: &str) -> Result<bool, AuthError> {
        let role_name = RoleName::new(role_name);
        let now = self.clock.now();

        let mut state = self.state.lock();
        let user_id = state.live_token_owner(token, now)?;
        state.ensure_role(&role_name)?;

        Ok(state.user(user_id)?.has_role(&role_name))
    }

    fn get_roles(&self, token: &str) -> Result<Vec<RoleName>, AuthError> {
        let now = self.clock.now();

        let mut state = self.state.lock();
        let user_id = state.live_token_owner(token, now)?;

        Ok(state.user(user_id)?.get_roles())
    }

    fn get_user_from_token(&self, token: &str) -> Result<User, AuthError> {
        let now = self.clock.now();

        let mut state = self.state.lock();
        let user_id = state.live_token_owner(token, now)?;

        state.user(user_id).cloned()
    }
}
