use std::sync::Arc;

use auth::Claims;
use auth::DecodedToken;
use auth::TokenCodec;
use identity::AuthService;
use identity::AuthServicePort;
use identity::Config;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "identity=debug,identity_demo=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "identity-demo",
        version = env!("CARGO_PKG_VERSION"),
        "Demo starting"
    );

    let config = Config::load()?;

    tracing::info!(
        token_lifetime_seconds = config.token.lifetime_seconds,
        salt_length = config.password.salt_length,
        id_digits = config.identity.id_digits,
        "Configuration loaded"
    );

    let service = Arc::new(AuthService::new(&config)?);

    let user = service.create_user("JackT", "123456")?;
    let role = service.create_role("Admin")?;
    service.add_role_to_user(user.username.as_str(), role.name.as_str())?;

    let token = service.authenticate("jackt", "123456")?;
    tracing::info!(token = %token, "Authenticated");

    // Introspection only: the decoded claims are not a trust decision
    let decoded: DecodedToken<Claims> = TokenCodec::new().decode(&token)?;
    tracing::info!(
        sub = decoded.claims.sub,
        name = %decoded.claims.name,
        exp = decoded.claims.exp,
        "Token claims"
    );

    let is_admin = service.check_role(&token, "admin")?;
    let roles = service.get_roles(&token)?;
    tracing::info!(is_admin, roles = ?roles, "Authorization checked");

    service.invalidate_token(&token)?;
    match service.validate_token(&token) {
        Ok(()) => anyhow::bail!("token still valid after invalidation"),
        Err(e) => tracing::info!(error = %e, "Token rejected after invalidation"),
    }

    Ok(())
}
