use std::env;
use std::path::PathBuf;

/// Service configuration derived from environment variables.
#[derive(Debug, Clone)]
pub struct HotelConfig {
    pub bind: String,
    pub port: u16,

    // ── Persistence ────────────────────────────────────────────────
    pub db_path: PathBuf,
    pub db_pool_size: u32,

    // ── Credentials ────────────────────────────────────────────────
    /// HS256 signing secret for access tokens.
    pub jwt_secret: String,
    pub token_ttl_minutes: i64,
    pub bcrypt_cost: u32,
}

const DEFAULT_TOKEN_TTL_MINUTES: i64 = 45;

fn lookup_str<F>(lookup: &F, name: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn lookup_parsed<F, T>(lookup: &F, name: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    lookup(name)
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}

fn random_secret() -> String {
    let bytes: [u8; 32] = rand::random();
    hex::encode(bytes)
}

impl HotelConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let jwt_secret = {
            let s = lookup_str(&lookup, "HOTEL_JWT_SECRET", "");
            if s.is_empty() {
                tracing::warn!("HOTEL_JWT_SECRET not set; issuing tokens with a per-process random secret");
                random_secret()
            } else {
                s
            }
        };

        Self {
            bind: lookup_str(&lookup, "HOTEL_BIND", "127.0.0.1"),
            port: lookup_parsed(&lookup, "HOTEL_PORT", 8000),
            db_path: PathBuf::from(lookup_str(&lookup, "HOTEL_DB", "./hotel_management.db")),
            db_pool_size: lookup_parsed(&lookup, "HOTEL_DB_POOL_SIZE", 8_u32).max(1),
            jwt_secret,
            token_ttl_minutes: Some(lookup_parsed(
                &lookup,
                "HOTEL_TOKEN_TTL_MINUTES",
                DEFAULT_TOKEN_TTL_MINUTES,
            ))
            .filter(|&minutes| minutes > 0)
            .unwrap_or(DEFAULT_TOKEN_TTL_MINUTES),
            bcrypt_cost: lookup_parsed(&lookup, "HOTEL_BCRYPT_COST", bcrypt::DEFAULT_COST),
        }
    }
}
