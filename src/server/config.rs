use std::{path::PathBuf, time::Duration};

use crate::{
    foundation::error::BlueboardResult,
    generate::{
        client::{Generator, HttpTextGenerator},
        rules::RuleBasedGenerator,
    },
};

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_AI_SERVICE_PORT: u16 = 5001;
pub const DEFAULT_MAX_PORT_ATTEMPTS: u16 = 5;

#[derive(clap::Args, Clone, Debug)]
pub struct ServeArgs {
    /// Interface to bind.
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// First port to try.
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Ports tried in total while the address is in use.
    #[arg(long, env = "BLUEBOARD_MAX_PORT_ATTEMPTS", default_value_t = DEFAULT_MAX_PORT_ATTEMPTS)]
    pub max_port_attempts: u16,

    /// Text-generation endpoint. Without it prompts go to the built-in rule-based generator.
    #[arg(long, env = "BLUEBOARD_AI_URL")]
    pub ai_url: Option<String>,

    /// Timeout for a single text-generation call.
    #[arg(long, env = "BLUEBOARD_AI_TIMEOUT_SECS", default_value_t = 10)]
    pub ai_timeout_secs: u64,

    /// JSON file mirroring the store. In-memory only when absent.
    #[arg(long, env = "BLUEBOARD_DATA_FILE")]
    pub data_file: Option<PathBuf>,
}

impl ServeArgs {
    pub fn ai_timeout(&self) -> Duration {
        Duration::from_secs(self.ai_timeout_secs.max(1))
    }

    pub fn generator(&self) -> BlueboardResult<Generator> {
        match self.ai_url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => Ok(Generator::Remote(HttpTextGenerator::new(
                url,
                self.ai_timeout(),
            )?)),
            _ => Ok(Generator::Rules(RuleBasedGenerator)),
        }
    }
}

#[derive(clap::Args, Clone, Debug)]
pub struct AiServiceArgs {
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "AI_SERVICE_PORT", default_value_t = DEFAULT_AI_SERVICE_PORT)]
    pub port: u16,

    #[arg(long, default_value_t = DEFAULT_MAX_PORT_ATTEMPTS)]
    pub max_port_attempts: u16,
}

#[cfg(test)]
#[path = "../../tests/unit/server/config.rs"]
mod tests;
