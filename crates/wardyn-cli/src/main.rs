//! Wardyn CLI
//!
//! Operator entry point for the sign-in domain gate.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::Value;

use wardyn_core::{AllowedDomains, EmailPolicy};
use wardyn_gate::SignInGate;

/// Wardyn - sign-in domain gate for the JHMH platform
#[derive(Parser, Debug)]
#[command(name = "wardyn")]
#[command(about = "Sign-in domain gate for the JHMH platform", long_about = None)]
struct Args {
    /// Approved sign-in domain (repeatable; or comma-separated via env)
    #[arg(
        long = "domain",
        env = "WARDYN_ALLOWED_DOMAINS",
        value_delimiter = ',',
        global = true
    )]
    domains: Vec<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the platform blocking hook
    Serve {
        /// Address to bind
        #[arg(long, env = "WARDYN_BIND", default_value = "127.0.0.1:8787")]
        bind: SocketAddr,

        /// Session claim attached to every allowance (name=value, repeatable)
        #[arg(long = "claim", value_parser = parse_claim)]
        claims: Vec<(String, Value)>,
    },
    /// Evaluate one email address against the policy
    Check {
        /// The email address to evaluate
        email: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let domains = AllowedDomains::new(&args.domains)
        .context("invalid --domain / WARDYN_ALLOWED_DOMAINS configuration")?;
    let policy = EmailPolicy::new(domains)?;

    match args.command {
        Command::Serve { bind, claims } => {
            let mut gate = SignInGate::new(policy);
            for (name, value) in claims {
                gate = gate.with_claim(name, value);
            }
            wardyn_http::serve(bind, Arc::new(gate)).await?;
        }
        Command::Check { email } => {
            let gate = SignInGate::new(policy);
            let allowed = gate.policy().is_allowed(Some(&email));
            println!("email:   {email}");
            println!("allowed: {allowed}");
            if !allowed {
                println!("message: {}", gate.denial_message());
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

/// Parse a `name=value` claim. The value may be any JSON literal; anything
/// that does not parse as JSON is taken as a plain string.
fn parse_claim(raw: &str) -> std::result::Result<(String, Value), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected name=value, got '{raw}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("claim name must not be empty in '{raw}'"));
    }
    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
    Ok((name.to_string(), value))
}
