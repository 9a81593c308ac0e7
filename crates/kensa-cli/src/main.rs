//! Kensa CLI - Prompt validation from the terminal
//!
//! Runs the engine in-process, or against a kensa-server with `--remote`.

mod api;
mod config;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::Input;
use std::fs;

use api::{KensaClient, ValidateConfig, ValidateRequest};
use config::Config;
use kensa::{report, EngineeringResult, RuleSet, ToolCall, ToolError};

#[derive(Parser)]
#[command(name = "kensa")]
#[command(about = "Kensa CLI - Prompt validation and optimization", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Engineer a prompt and show the report
    Validate {
        /// Prompt text (or use -f for file)
        prompt: Option<String>,
        /// Read prompt from file
        #[arg(short, long)]
        file: Option<String>,
        /// Rules to apply (comma-separated, e.g., "expert_system,few_shot")
        #[arg(short, long, value_delimiter = ',')]
        rules: Option<Vec<String>>,
        /// Target model (e.g., gpt-4, claude, gemini)
        #[arg(short, long)]
        model: Option<String>,
        /// Print the raw result as JSON
        #[arg(long)]
        json: bool,
        /// Send to the configured kensa-server
        #[arg(long)]
        remote: bool,
    },

    /// Analyze prompt quality without rewriting
    Analyze {
        /// Prompt text (or use -f for file)
        prompt: Option<String>,
        /// Read prompt from file
        #[arg(short, long)]
        file: Option<String>,
        /// Print the analysis as JSON
        #[arg(long)]
        json: bool,
    },

    /// Suggest improvements for a prompt
    Suggest {
        /// Prompt text (or use -f for file)
        prompt: Option<String>,
        /// Read prompt from file
        #[arg(short, long)]
        file: Option<String>,
        /// Focus area: clarity, structure, examples, reasoning, expertise, all
        #[arg(long)]
        focus: Option<String>,
    },

    /// Check that the configured server is reachable
    Health,

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration
    Show,
    /// Set a value (server_url, default_model, default_rules, remote)
    Set {
        key: String,
        value: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Validate {
            prompt,
            file,
            rules,
            model,
            json,
            remote,
        } => cmd_validate(prompt, file, rules, model, json, remote).await,
        Commands::Analyze { prompt, file, json } => cmd_analyze(prompt, file, json),
        Commands::Suggest {
            prompt,
            file,
            focus,
        } => cmd_suggest(prompt, file, focus),
        Commands::Health => cmd_health().await,
        Commands::Config { action } => cmd_config(action.unwrap_or(ConfigAction::Show)),
    }
}

// ============================================
// Command Implementations
// ============================================

/// Prompt from argument, file or interactive input
fn read_prompt(prompt: Option<String>, file: Option<String>) -> Result<String> {
    match (prompt, file) {
        (Some(p), None) => Ok(p),
        (None, Some(f)) => {
            fs::read_to_string(&f).with_context(|| format!("Failed to read file: {}", f))
        }
        (Some(_), Some(_)) => bail!("Cannot specify both a prompt and --file"),
        (None, None) => Input::new()
            .with_prompt("Prompt")
            .interact_text()
            .context("Failed to read input"),
    }
}

/// Reject an empty prompt before it reaches the engine or the server
fn require_prompt(prompt: String) -> Result<String> {
    if prompt.is_empty() {
        bail!("{}", ToolError::MissingPrompt);
    }
    Ok(prompt)
}

async fn cmd_validate(
    prompt: Option<String>,
    file: Option<String>,
    rules: Option<Vec<String>>,
    model: Option<String>,
    json: bool,
    remote: bool,
) -> Result<()> {
    let prompt = require_prompt(read_prompt(prompt, file)?)?;
    let config = Config::load()?;
    let rules = rules.unwrap_or_else(|| config.default_rules.clone());
    let model = model.unwrap_or_else(|| config.default_model.clone());

    let result: EngineeringResult = if remote || config.remote {
        let client = KensaClient::new(&config.server_url);
        let resp = client
            .validate(&ValidateRequest {
                request_id: "kensa-cli".to_string(),
                raw_prompt: prompt,
                config: ValidateConfig {
                    model,
                    apply_rules: rules,
                },
            })
            .await?;

        if json {
            println!("{}", serde_json::to_string_pretty(&resp)?);
            return Ok(());
        }
        for note in &resp.model_compatibility.notes {
            eprintln!("{} {}", "note:".yellow(), note);
        }
        resp.result
    } else {
        kensa::engineer(&prompt, &RuleSet::parse(&rules), &model)
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", report::render_validation_report(&result));
    }

    Ok(())
}

fn cmd_analyze(prompt: Option<String>, file: Option<String>, json: bool) -> Result<()> {
    let prompt = read_prompt(prompt, file)?;

    if json {
        let prompt = require_prompt(prompt)?;
        let analysis = kensa::analyze(&prompt);
        println!("{}", serde_json::to_string_pretty(&analysis)?);
        return Ok(());
    }

    let call = ToolCall::analyze(Some(prompt))?;
    println!("{}", call.execute());
    Ok(())
}

fn cmd_suggest(prompt: Option<String>, file: Option<String>, focus: Option<String>) -> Result<()> {
    let prompt = read_prompt(prompt, file)?;
    let call = ToolCall::suggest(Some(prompt), focus)?;
    println!("{}", call.execute());
    Ok(())
}

async fn cmd_health() -> Result<()> {
    let config = Config::load()?;
    let client = KensaClient::new(&config.server_url);

    print!("Checking {}... ", config.server_url);

    match client.health().await {
        Ok(true) => {
            println!("{}", "OK".green());
            Ok(())
        }
        _ => {
            println!("{}", "Failed".red());
            bail!("Could not reach Kensa API at {}", config.server_url);
        }
    }
}

fn cmd_config(action: ConfigAction) -> Result<()> {
    let mut config = Config::load()?;

    match action {
        ConfigAction::Show => {
            println!("{}", "Configuration:".bold());
            println!("  Path: {:?}", Config::config_path()?);
            println!("  Server URL: {}", config.server_url);
            println!("  Default Model: {}", config.default_model.cyan());
            println!("  Default Rules: {}", config.default_rules.join(", "));
            println!(
                "  Remote: {}",
                if config.remote {
                    "On".green()
                } else {
                    "Off".dimmed()
                }
            );
        }
        ConfigAction::Set { key, value } => {
            config.set(&key, &value)?;
            config.save()?;
            println!("{} {} updated", "✓".green(), key);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_validate() {
        let cli = Cli::try_parse_from([
            "kensa",
            "validate",
            "Explain closures",
            "--rules",
            "expert_system,few_shot",
            "-m",
            "claude",
            "--json",
        ])
        .unwrap();

        match cli.command {
            Commands::Validate {
                prompt,
                rules,
                model,
                json,
                remote,
                ..
            } => {
                assert_eq!(prompt.as_deref(), Some("Explain closures"));
                assert_eq!(
                    rules,
                    Some(vec!["expert_system".to_string(), "few_shot".to_string()])
                );
                assert_eq!(model.as_deref(), Some("claude"));
                assert!(json);
                assert!(!remote);
            }
            _ => panic!("expected validate"),
        }
    }

    #[test]
    fn test_parse_config_set() {
        let cli = Cli::try_parse_from(["kensa", "config", "set", "remote", "true"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Config {
                action: Some(ConfigAction::Set { .. })
            }
        ));
    }

    #[test]
    fn test_read_prompt_sources() {
        assert_eq!(read_prompt(Some("Hi".into()), None).unwrap(), "Hi");
        assert!(read_prompt(Some("Hi".into()), Some("p.txt".into())).is_err());
        assert!(read_prompt(None, Some("/definitely/not/here.txt".into())).is_err());
    }

    #[test]
    fn test_require_prompt_rejects_empty() {
        let err = require_prompt(String::new()).unwrap_err();
        assert_eq!(err.to_string(), "Error: No prompt provided");
        assert_eq!(require_prompt("Hi".into()).unwrap(), "Hi");
    }

    #[tokio::test]
    async fn test_remote_validate_rejects_empty_prompt_before_sending() {
        let err = cmd_validate(Some(String::new()), None, None, None, false, true)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Error: No prompt provided");
    }
}
