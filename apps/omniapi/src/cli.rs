use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use omniapi_common::{ClientConfigPatch, sanitize_optional_value};

#[derive(Parser)]
#[command(name = "omniapi", version, about = "Command-line client for the omniapi services")]
pub(crate) struct Cli {
    #[command(flatten)]
    pub(crate) connection: ConnectionArgs,

    /// Validate params before sending and the response after decoding.
    #[arg(long)]
    pub(crate) validate: bool,

    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Args)]
pub(crate) struct ConnectionArgs {
    /// JSON file with base config; flags and env override its fields.
    #[arg(long, env = "OMNIAPI_CONFIG")]
    pub(crate) config: Option<String>,

    /// API base URL.
    #[arg(long, env = "OMNIAPI_BASE_URL")]
    pub(crate) base_url: Option<String>,

    /// Sent as a bearer token.
    #[arg(long, env = "OMNIAPI_API_KEY", hide_env_values = true)]
    pub(crate) api_key: Option<String>,

    /// Optional outbound proxy.
    #[arg(long, env = "OMNIAPI_PROXY")]
    pub(crate) proxy: Option<String>,

    /// Request timeout in seconds.
    #[arg(long, env = "OMNIAPI_TIMEOUT")]
    pub(crate) timeout: Option<String>,
}

impl ConnectionArgs {
    /// Config file layer, then flags/env on top (clap already orders flags
    /// over env per field).
    pub(crate) fn to_patch(&self) -> anyhow::Result<ClientConfigPatch> {
        let mut merged = match sanitize_optional_value(self.config.clone()) {
            Some(path) => load_config_file(Path::new(&path))?,
            None => ClientConfigPatch::default(),
        };
        merged.overlay(ClientConfigPatch {
            base_url: sanitize_optional_value(self.base_url.clone()),
            api_key: sanitize_optional_value(self.api_key.clone()),
            proxy: sanitize_optional_value(self.proxy.clone()),
            request_timeout_secs: parse_u64_value(self.timeout.clone(), "OMNIAPI_TIMEOUT")?,
            ..Default::default()
        });
        Ok(merged)
    }
}

fn load_config_file(path: &Path) -> anyhow::Result<ClientConfigPatch> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("invalid config file {}", path.display()))
}

fn parse_u64_value(value: Option<String>, name: &str) -> anyhow::Result<Option<u64>> {
    let Some(raw) = sanitize_optional_value(value) else {
        return Ok(None);
    };
    let parsed = raw
        .parse::<u64>()
        .with_context(|| format!("invalid {name} value: {raw}"))?;
    Ok(Some(parsed))
}

#[derive(Subcommand)]
pub(crate) enum Command {
    #[command(subcommand)]
    Documents(DocumentsCommand),
    #[command(subcommand)]
    Ocr(OcrCommand),
    /// Format source code.
    Format {
        /// File to format.
        file: PathBuf,
        #[arg(long)]
        language: String,
        /// Number of spaces, or `tab`.
        #[arg(long)]
        indent: Option<String>,
        #[arg(long)]
        line_width: Option<i64>,
    },
    #[command(subcommand)]
    Payments(PaymentsCommand),
    #[command(subcommand)]
    Voice(VoiceCommand),
    #[command(subcommand)]
    Agents(AgentsCommand),
    #[command(subcommand)]
    Vault(VaultCommand),
    #[command(subcommand)]
    Llm(LlmCommand),
}

#[derive(Subcommand)]
pub(crate) enum DocumentsCommand {
    /// Start a conversion of the document at URL.
    Convert {
        url: String,
        #[arg(long)]
        to: String,
        #[arg(long)]
        from: Option<String>,
        /// e.g. `1-3,7`.
        #[arg(long)]
        pages: Option<String>,
        #[arg(long)]
        idempotency_key: Option<String>,
    },
    /// Fetch a conversion by id.
    Get { conversion_id: String },
}

#[derive(Subcommand)]
pub(crate) enum OcrCommand {
    Extract {
        url: String,
        /// Language hint; repeatable.
        #[arg(long = "language")]
        languages: Vec<String>,
        #[arg(long)]
        text_only: bool,
        #[arg(long)]
        layout: bool,
    },
}

#[derive(Subcommand)]
pub(crate) enum PaymentsCommand {
    Create {
        /// Minor units.
        #[arg(long)]
        amount: i64,
        #[arg(long)]
        currency: String,
        /// Saved payment-method token.
        #[arg(long)]
        token: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        idempotency_key: Option<String>,
    },
    Get {
        payment_id: String,
        #[arg(long)]
        expand: Vec<String>,
    },
}

#[derive(Subcommand)]
pub(crate) enum VoiceCommand {
    Synthesize {
        #[arg(long)]
        voice: String,
        text: String,
        #[arg(long)]
        format: Option<String>,
        #[arg(long)]
        speed: Option<f64>,
    },
    List {
        #[arg(long)]
        language: Option<String>,
        #[arg(long)]
        gender: Option<String>,
    },
}

#[derive(Subcommand)]
pub(crate) enum AgentsCommand {
    /// Run an agent. INPUT is sent as JSON when it parses as an object or
    /// array, otherwise as text.
    Run {
        agent_id: String,
        input: String,
        #[arg(long = "tool")]
        tools: Vec<String>,
        #[arg(long)]
        max_steps: Option<i64>,
        /// Return the queued run without waiting.
        #[arg(long)]
        no_wait: bool,
    },
}

#[derive(Subcommand)]
pub(crate) enum VaultCommand {
    Put {
        name: String,
        value: String,
        /// Store VALUE as a JSON document.
        #[arg(long)]
        json: bool,
        #[arg(long)]
        ttl: Option<i64>,
    },
    Get {
        name: String,
        #[arg(long)]
        version: Option<i64>,
    },
    Delete { name: String },
}

#[derive(Subcommand)]
pub(crate) enum LlmCommand {
    Complete {
        #[arg(long)]
        model: String,
        prompt: String,
        #[arg(long)]
        system: Option<String>,
        #[arg(long)]
        max_tokens: Option<i64>,
        #[arg(long)]
        temperature: Option<f64>,
        /// Pin the upstream provider.
        #[arg(long)]
        provider: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_become_patch() {
        let cli = Cli::try_parse_from([
            "omniapi",
            "--base-url",
            "http://localhost:9000/",
            "--timeout",
            "15",
            "vault",
            "get",
            "token",
        ])
        .expect("parse args");

        let patch = cli.connection.to_patch().expect("patch");
        assert_eq!(patch.base_url.as_deref(), Some("http://localhost:9000/"));
        assert_eq!(patch.request_timeout_secs, Some(15));
        assert!(matches!(
            cli.command,
            Command::Vault(VaultCommand::Get { ref name, version: None }) if name == "token"
        ));
    }

    #[test]
    fn bad_timeout_is_rejected() {
        let args = ConnectionArgs {
            config: None,
            base_url: None,
            api_key: None,
            proxy: None,
            timeout: Some("soon".to_string()),
        };
        let err = args.to_patch().unwrap_err();
        assert!(err.to_string().contains("OMNIAPI_TIMEOUT"));
    }

    #[test]
    fn placeholder_key_is_unset() {
        let args = ConnectionArgs {
            config: None,
            base_url: None,
            api_key: Some("${OMNIAPI_API_KEY}".to_string()),
            proxy: Some(" ".to_string()),
            timeout: None,
        };
        let patch = args.to_patch().expect("patch");
        assert!(patch.api_key.is_none());
        assert!(patch.proxy.is_none());
    }

    #[test]
    fn repeatable_flags_collect() {
        let cli = Cli::try_parse_from([
            "omniapi",
            "agents",
            "run",
            "helper",
            "hi",
            "--tool",
            "search",
            "--tool",
            "calc",
        ])
        .expect("parse args");
        match cli.command {
            Command::Agents(AgentsCommand::Run { tools, .. }) => {
                assert_eq!(tools, vec!["search", "calc"]);
            }
            _ => panic!("expected agents run"),
        }
    }

    #[test]
    fn config_file_is_the_bottom_layer() {
        let path = std::env::temp_dir().join(format!("omniapi-cli-{}.json", std::process::id()));
        std::fs::write(
            &path,
            r#"{"base_url":"https://file.example","api_key":"file-key","connect_timeout_secs":3}"#,
        )
        .expect("write config file");

        let args = ConnectionArgs {
            config: Some(path.display().to_string()),
            base_url: None,
            api_key: Some("flag-key".to_string()),
            proxy: None,
            timeout: Some("20".to_string()),
        };
        let patch = args.to_patch();
        std::fs::remove_file(&path).ok();
        let patch = patch.expect("patch");

        assert_eq!(patch.base_url.as_deref(), Some("https://file.example"));
        assert_eq!(patch.api_key.as_deref(), Some("flag-key"));
        assert_eq!(patch.connect_timeout_secs, Some(3));
        assert_eq!(patch.request_timeout_secs, Some(20));
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let args = ConnectionArgs {
            config: Some("/nonexistent/omniapi.json".to_string()),
            base_url: None,
            api_key: None,
            proxy: None,
            timeout: None,
        };
        let err = args.to_patch().unwrap_err();
        assert!(err.to_string().contains("failed to read config file"));
    }
}
