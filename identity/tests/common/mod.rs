use std::sync::atomic::AtomicI64;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use auth::Argon2Encryptor;
use identity::config::PasswordConfig;
use identity::AuthService;
use identity::Clock;
use identity::Config;

/// Unix time the manual clock starts at (2022-06-01T00:00:00Z).
pub const START: i64 = 1_654_041_600;

/// Clock that only moves when told to
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Arc<AtomicI64>,
}

impl ManualClock {
    pub fn new(now: i64) -> Self {
        Self {
            now: Arc::new(AtomicI64::new(now)),
        }
    }

    pub fn advance(&self, seconds: i64) {
        self.now.fetch_add(seconds, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> i64 {
        self.now.load(Ordering::SeqCst)
    }
}

/// Service wired with real Argon2id at minimal cost and a manual clock
pub struct TestApp {
    pub service: Arc<AuthService<Argon2Encryptor, ManualClock>>,
    pub clock: ManualClock,
}

impl TestApp {
    pub fn spawn() -> Self {
        let config = Config {
            password: PasswordConfig {
                memory_kib: 8,
                iterations: 1,
                parallelism: 1,
                ..PasswordConfig::default()
            },
            ..Config::default()
        };

        let encryptor = Argon2Encryptor::with_params(
            config.password.memory_kib,
            config.password.iterations,
            config.password.parallelism,
        )
        .expect("Failed to build encryptor");
        let clock = ManualClock::new(START);

        let service = Arc::new(AuthService::with_components(
            &config,
            encryptor,
            clock.clone(),
        ));

        Self { service, clock }
    }
}
