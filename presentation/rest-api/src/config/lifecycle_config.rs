use std::env;

use business::domain::product::ownership::MutationPolicy;

/// Authorization rules for product mutations that may be relaxed.
#[derive(Debug, Clone)]
pub struct LifecycleConfig {
    pub dispatch_requires_ownership: bool,
}

impl LifecycleConfig {
    /// Environment variables:
    /// - DISPATCH_REQUIRES_OWNERSHIP: "true" to let only the vendor dispatch
    ///   their products (default: "false", any signed-in user may dispatch)
    pub fn from_env() -> Self {
        let dispatch_requires_ownership = env::var("DISPATCH_REQUIRES_OWNERSHIP")
            .map(|v| parse_flag(&v))
            .unwrap_or(false);

        Self {
            dispatch_requires_ownership,
        }
    }

    pub fn dispatch_policy(&self) -> MutationPolicy {
        if self.dispatch_requires_ownership {
            MutationPolicy::OWNER_ONLY
        } else {
            MutationPolicy::ANY_AUTHENTICATED
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
