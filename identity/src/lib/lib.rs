//! In-process identity and session authorization core
//!
//! Manages user accounts, roles, role grants and bearer session tokens in
//! memory. Callers create one [`AuthService`], share it behind an `Arc`, and
//! drive it through the [`AuthServicePort`] operations: provision accounts
//! and roles, authenticate to obtain a token, then present the token on each
//! request to validate it and query roles.
//!
//! ```
//! use identity::{AuthService, AuthServicePort, Config};
//!
//! let service = AuthService::new(&Config::default()).unwrap();
//! service.create_user("JackT", "123456").unwrap();
//! service.create_role("Admin").unwrap();
//! service.add_role_to_user("jackt", "admin").unwrap();
//!
//! let token = service.authenticate("jackt", "123456").unwrap();
//! assert!(service.check_role(&token, "admin").unwrap());
//!
//! service.invalidate_token(&token).unwrap();
//! assert!(service.validate_token(&token).is_err());
//! ```

pub mod config;
pub mod domain;

pub use config::Config;
pub use domain::identity;
pub use domain::identity::errors::AuthError;
pub use domain::identity::models::Role;
pub use domain::identity::models::RoleName;
pub use domain::identity::models::Token;
pub use domain::identity::models::User;
pub use domain::identity::models::UserId;
pub use domain::identity::models::Username;
pub use domain::identity::ports::AuthServicePort;
pub use domain::identity::ports::Clock;
pub use domain::identity::ports::SystemClock;
pub use domain::identity::service::AuthService;
