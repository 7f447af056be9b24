//! One-time admin bootstrap codes.
//!
//! When the database holds no admin at startup, a random code is generated and the login
//! URL carrying it is logged. The first login presenting the code before it expires is
//! granted admin. Codes live in memory only and are consumed on first successful use.

use rand::Rng;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// Lifetime of a bootstrap code.
pub const ADMIN_CODE_TTL: Duration = Duration::from_secs(10 * 60);

const CODE_LENGTH: usize = 32;
const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

#[derive(Clone)]
struct AdminCode {
    code: String,
    expires_at: Instant,
}

impl AdminCode {
    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// In-memory holder of the current bootstrap code.
///
/// Cloning shares the same code, so the copy in `AppState` and the one used at startup
/// see each other's changes.
#[derive(Clone)]
pub struct AdminCodeService {
    code: Arc<RwLock<Option<AdminCode>>>,
    ttl: Duration,
}

impl AdminCodeService {
    pub fn new() -> Self {
        Self::with_ttl(ADMIN_CODE_TTL)
    }

    /// Creates a service whose codes live for `ttl`.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            code: Arc::new(RwLock::new(None)),
            ttl,
        }
    }

    /// Lifetime applied to generated codes.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Generates a new random code, replacing any previous one.
    ///
    /// # Returns
    /// - `String` - 32 alphanumeric characters
    pub async fn generate(&self) -> String {
        let mut rng = rand::rng();
        let code: String = (0..CODE_LENGTH)
            .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
            .collect();

        *self.code.write().await = Some(AdminCode {
            code: code.clone(),
            expires_at: Instant::now() + self.ttl,
        });

        code
    }

    /// Checks `input` against the stored code and consumes it on a match.
    ///
    /// An expired code is dropped and never matches. A wrong guess leaves a live code in
    /// place.
    ///
    /// # Returns
    /// - `true` - Code matched and has been consumed
    /// - `false` - No code, expired code or mismatch
    pub async fn validate_and_consume(&self, input: &str) -> bool {
        let mut code = self.code.write().await;

        match code.as_ref() {
            Some(stored) if stored.is_expired() => {
                *code = None;
                false
            }
            Some(stored) if stored.code == input => {
                *code = None;
                true
            }
            _ => false,
        }
    }

    #[cfg(test)]
    pub async fn has_valid_code(&self) -> bool {
        let mut code = self.code.write().await;

        match code.as_ref() {
            Some(stored) if stored.is_expired() => {
                *code = None;
                false
            }
            Some(_) => true,
            None => false,
        }
    }
}

impl Default for AdminCodeService {
    fn default() -> Self {
        Self::new()
    }
}
