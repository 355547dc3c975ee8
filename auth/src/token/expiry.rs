use chrono::Utc;

/// Expiry timestamp `duration_secs` from now.
pub fn gen_expiry(duration_secs: i64) -> i64 {
    gen_expiry_at(Utc::now().timestamp(), duration_secs)
}

/// Expiry timestamp `duration_secs` after `now`.
pub fn gen_expiry_at(now: i64, duration_secs: i64) -> i64 {
    now.saturating_add(duration_secs)
}

/// Whether `exp` has passed according to the system clock.
pub fn is_expired(exp: i64) -> bool {
    is_expired_at(exp, Utc::now().timestamp())
}

/// Whether `exp` has passed at `now`. A timestamp is still honored during its own second.
pub fn is_expired_at(exp: i64, now: i64) -> bool {
    now > exp
}
