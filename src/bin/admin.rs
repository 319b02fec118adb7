//! CLI administration tool for token-verify.
//!
//! Provides commands for producing and checking activation tokens and for
//! validating the service configuration without starting the HTTP server.
//!
//! # Usage
//!
//! ```bash
//! # Generate a well-formed token and its verification link
//! cargo run --bin admin -- token generate
//!
//! # Check a token or a full verification URL
//! cargo run --bin admin -- token check "https://app.example.com/?token=abc123"
//!
//! # Validate environment configuration
//! cargo run --bin admin -- config check
//! ```
//!
//! # Features
//!
//! - **Token Tools**: Generate demo tokens, verify tokens or URLs
//! - **Configuration**: Load, validate and summarize environment settings
//! - **Interactive Prompts**: Asks for the token when none is given
//! - **Colored Output**: Terminal-friendly formatting using `colored` crate

use token_verify::application::services::TokenService;
use token_verify::config::{self, Config};
use token_verify::domain::entities::VerificationResult;
use token_verify::infrastructure::backend::FormatCheckBackend;
use token_verify::utils::token_format::{DEFAULT_TOKEN_BYTES, MIN_TOKEN_BYTES, generate_token};
use token_verify::web::handlers::verification_link;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Input;
use std::sync::Arc;

/// CLI tool for managing token-verify.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Generate and check activation tokens
    Token {
        #[command(subcommand)]
        action: TokenAction,
    },

    /// Configuration operations
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Token subcommands.
#[derive(Subcommand)]
enum TokenAction {
    /// Generate a well-formed token
    Generate {
        /// Number of random bytes (minimum 15)
        #[arg(short, long, default_value_t = DEFAULT_TOKEN_BYTES)]
        bytes: usize,

        /// Public base URL used to print the verification link
        #[arg(long, default_value = "http://localhost:3000")]
        base_url: String,
    },

    /// Verify a token or a URL carrying `?token=`
    Check {
        /// Token or URL (prompted for when omitted)
        input: Option<String>,
    },
}

/// Configuration subcommands.
#[derive(Subcommand)]
enum ConfigAction {
    /// Load and validate configuration from the environment
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Token { action } => handle_token_action(action).await?,
        Commands::Config { action } => handle_config_action(action)?,
    }

    Ok(())
}

/// Dispatches token commands.
async fn handle_token_action(action: TokenAction) -> Result<()> {
    match action {
        TokenAction::Generate { bytes, base_url } => generate(bytes, &base_url),
        TokenAction::Check { input } => check(input).await,
    }
}

/// Generates a token and prints it with a ready-to-open link.
fn generate(bytes: usize, base_url: &str) -> Result<()> {
    println!("{}", "🔑 Generate Token".bright_blue().bold());
    println!();

    if bytes < MIN_TOKEN_BYTES {
        println!(
            "{}",
            format!("⚠️  Raising {bytes} bytes to the minimum of {MIN_TOKEN_BYTES}").yellow()
        );
    }

    let token = generate_token(bytes);
    let link = format!(
        "{}{}",
        base_url.trim_end_matches('/'),
        verification_link(&token)
    );

    println!("  Token: {}", token.bright_yellow().bold());
    println!("  Link:  {}", link.cyan());
    println!();

    Ok(())
}

/// Verifies a token or URL with the format-check backend.
///
/// See [`is_url_input`] for how URLs are told apart from raw tokens.
async fn check(input: Option<String>) -> Result<()> {
    println!("{}", "🔍 Check Token".bright_blue().bold());
    println!();

    let input = match input {
        Some(i) => i,
        None => Input::new()
            .with_prompt("Token or URL")
            .allow_empty(true)
            .interact_text()?,
    };

    let service = TokenService::new(Arc::new(FormatCheckBackend::new()));

    let result = if is_url_input(&input) {
        service.verify_url(&input).await
    } else {
        service.verify_result(Some(&input)).await
    };

    print_result(&result);

    Ok(())
}

/// Returns `true` when `input` carries a query string.
///
/// `?` is outside the token alphabet, so raw tokens such as
/// `mytoken=ABCDEFGHIJKLMNOP` are never mistaken for a query.
fn is_url_input(input: &str) -> bool {
    input.contains('?')
}

fn print_result(result: &VerificationResult) {
    match result {
        VerificationResult::Success {
            user_id,
            email,
            message,
        } => {
            println!("{}", "✅ Token verified".green().bold());
            println!("  User:    {}", user_id.cyan());
            println!("  Email:   {}", email.cyan());
            println!("  Message: {}", message.bright_black());
        }
        VerificationResult::Failure { kind, message } => {
            println!("{}", "❌ Verification failed".red().bold());
            println!("  Kind:    {}", kind.as_str().yellow());
            println!("  Message: {}", message.bright_black());
        }
    }
    println!();
}

/// Dispatches configuration commands.
fn handle_config_action(action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Check => check_config(),
    }
}

/// Loads, validates and prints the configuration.
fn check_config() -> Result<()> {
    println!("{}", "⚙️  Configuration".bright_blue().bold());
    println!();

    let config: Config = match config::load_from_env() {
        Ok(config) => config,
        Err(e) => {
            println!("{}", "❌ Invalid configuration".red().bold());
            println!("  {}", format!("{e:#}").red());
            return Err(e);
        }
    };

    println!("  Listen:      {}", config.listen_addr.cyan());
    println!("  Account API: {}", config.api_base_url.cyan());
    println!("  Delay:       {}ms", config.verify_delay_ms);
    println!(
        "  Rate limit:  1 / {}s, burst {}",
        config.rate_limit_period_seconds, config.rate_limit_burst
    );
    println!("  Log:         {} ({})", config.log_level, config.log_format);
    println!();
    println!("{}", "✅ Configuration is valid".green().bold());
    println!();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_inputs_are_detected() {
        assert!(is_url_input("https://app.example.com/?token=abc123"));
        assert!(is_url_input("/verify?token=abc123"));
        assert!(is_url_input("?token=abc123"));
    }

    #[test]
    fn test_raw_tokens_are_not_urls() {
        assert!(!is_url_input("ABCDEFGHIJ0123456789+/="));
        assert!(!is_url_input("mytoken=ABCDEFGHIJKLMNOP"));
        assert!(!is_url_input("token=ABCDEFGHIJKLMNOPQRST"));
    }

    #[tokio::test]
    async fn test_raw_token_with_equals_sign_is_checked_as_is() {
        let service = TokenService::new(Arc::new(FormatCheckBackend::new()));
        let input = "mytoken=ABCDEFGHIJKLMNOP";

        assert!(!is_url_input(input));
        assert!(service.verify_result(Some(input)).await.is_success());
    }
}
