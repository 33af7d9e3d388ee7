use super::request::Language;
use clap::Args;

pub const DEFAULT_USER_AGENT: &str = concat!("converter-skill/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct SkillConfig {
    /// Used for messages and the conversion table when the request locale is
    /// missing or not one we ship.
    pub fallback_language: Language,
    /// Echoed back in the response envelope.
    pub user_agent: Option<String>,
}

impl Default for SkillConfig {
    fn default() -> Self {
        Self {
            fallback_language: Language::English,
            user_agent: Some(DEFAULT_USER_AGENT.to_string()),
        }
    }
}

/// Skill settings shared by every binary's command line.
#[derive(Debug, Clone, Args)]
pub struct ConfigArgs {
    /// Locale used when a request carries none or an unsupported one
    #[clap(long, env = "SKILL_FALLBACK_LOCALE", default_value = "en")]
    pub fallback_locale: Language,
    /// User agent reported in response envelopes
    #[clap(long, env = "SKILL_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,
}

impl From<ConfigArgs> for SkillConfig {
    fn from(args: ConfigArgs) -> Self {
        Self {
            fallback_language: args.fallback_locale,
            user_agent: Some(args.user_agent).filter(|ua| !ua.is_empty()),
        }
    }
}
