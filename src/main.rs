// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Set up logging and parse command-line arguments
// 2. Register the installed linkcheckers and load settings
// 3. Resolve the requested linkchecker (or the default one)
// 4. Check the resources and print the results
// 5. Exit with proper code (0 = all available, 1 = some unavailable, 2 = error)
// =============================================================================

mod backends;
mod checker;
mod cli;
mod config;

use anyhow::Result;
use backends::{LinkcheckerRegistry, LinkcheckerResolver};
use checker::{Resource, ResourceCheck};
use clap::Parser;
use cli::{Cli, Commands};
use config::Settings;

#[tokio::main]
async fn main() {
    // RUST_LOG=debug shows registration and HTTP fallback details
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();

    let settings = Settings::load(cli.config.as_deref())?.with_cli_override(cli.default_linkchecker);

    let registry = LinkcheckerRegistry::builtin()?;

    match cli.command {
        Commands::List => {
            print_registry(&registry, &settings);
            Ok(0)
        }
        Commands::Check { urls, linkchecker, json } => {
            handle_check(&registry, &settings, &linkchecker, urls, json).await
        }
    }
}

fn print_registry(registry: &LinkcheckerRegistry, settings: &Settings) {
    println!("Linkcheckers in {}:", backends::ENTRYPOINT);
    for name in registry.get_all().keys() {
        let marker = if settings.default_linkchecker.as_deref() == Some(name.as_str()) {
            " (default)"
        } else {
            ""
        };
        println!("   {}{}", name, marker);
    }
}

async fn handle_check(
    registry: &LinkcheckerRegistry,
    settings: &Settings,
    name: &str,
    urls: Vec<String>,
    json: bool,
) -> Result<i32> {
    let checks = match run_checks(registry, settings, name, urls).await {
        Some(checks) => checks,
        // The resolver already logged why; we just stop here
        None => return Ok(2),
    };

    print_results(&checks, json)?;

    Ok(exit_code(&checks))
}

// Resolves the linkchecker and checks every URL with it
//
// Returns None when no linkchecker could be resolved.
async fn run_checks(
    registry: &LinkcheckerRegistry,
    settings: &Settings,
    name: &str,
    urls: Vec<String>,
) -> Option<Vec<ResourceCheck>> {
    let linkchecker = LinkcheckerResolver::new(registry, settings).resolve(name)?;

    let resources = urls.into_iter().map(Resource::new).collect();
    Some(checker::check_resources(linkchecker.as_ref(), resources).await)
}

// 0 = every link available, 1 = at least one unavailable
fn exit_code(checks: &[ResourceCheck]) -> i32 {
    if checks.iter().any(|c| !c.result.available) {
        1
    } else {
        0
    }
}

// Prints the results either as a table or JSON
fn print_results(checks: &[ResourceCheck], json: bool) -> Result<()> {
    if json {
        let json_output = serde_json::to_string_pretty(checks)?;
        println!("{}", json_output);
    } else {
        print_table(checks);
    }
    Ok(())
}

fn print_table(checks: &[ResourceCheck]) {
    println!("{:<60} {:<8} {:<12} {:<30}", "URL", "STATUS", "AVAILABLE", "CHECKED AT");
    println!("{}", "=".repeat(112));

    for check in checks {
        // Truncate URL if too long for display
        let url_display = if check.url.chars().count() > 57 {
            format!("{}...", check.url.chars().take(57).collect::<String>())
        } else {
            check.url.clone()
        };

        let available = if check.result.available { "✅ yes" } else { "❌ no" };

        println!(
            "{:<60} {:<8} {:<12} {:<30}",
            url_display,
            check.result.status,
            available,
            check.result.date.to_rfc3339()
        );

        if let Some(error) = &check.result.error {
            println!("   ⚠️  {}", error);
        }
    }

    println!();

    let available_count = checks.iter().filter(|c| c.result.available).count();

    println!("📊 Summary:");
    println!("   ✅ Available: {}", available_count);
    println!("   ❌ Unavailable: {}", checks.len() - available_count);
    println!("   📋 Total: {}", checks.len());
}

#[cfg(test)]
mod tests {
    use super::*;
    use checker::{LinkcheckResult, NoCheckLinkchecker};

    fn no_check_registry() -> LinkcheckerRegistry {
        let mut registry = LinkcheckerRegistry::new();
        registry.register("no_check", NoCheckLinkchecker);
        registry
    }

    fn check_with(available: bool) -> ResourceCheck {
        ResourceCheck {
            url: "https://example.com".to_string(),
            result: LinkcheckResult {
                status: if available { 200 } else { 404 },
                available,
                date: chrono::Utc::now(),
                error: None,
            },
        }
    }

    #[tokio::test]
    async fn test_unresolvable_linkchecker_exits_with_2() {
        let registry = LinkcheckerRegistry::new();
        let settings = Settings::default();

        let code = handle_check(&registry, &settings, "http", vec!["https://example.com".to_string()], false)
            .await
            .unwrap();

        assert_eq!(code, 2);
    }

    #[tokio::test]
    async fn test_missing_default_resolves_nothing() {
        let registry = no_check_registry();
        let settings = Settings::default().with_cli_override(Some("gone".to_string()));

        let checks = run_checks(&registry, &settings, "http", vec!["https://example.com".to_string()]).await;
        assert!(checks.is_none());
    }

    #[tokio::test]
    async fn test_falls_back_on_cli_default() {
        let registry = no_check_registry();
        let settings = Settings::default().with_cli_override(Some("no_check".to_string()));

        let checks = run_checks(&registry, &settings, "http", vec!["https://example.com".to_string()])
            .await
            .unwrap();

        assert_eq!(checks.len(), 1);
        assert_eq!(checks[0].result.status, 204);
    }

    #[tokio::test]
    async fn test_available_links_exit_with_0() {
        let registry = no_check_registry();
        let settings = Settings::default();

        let code = handle_check(&registry, &settings, "no_check", vec!["https://example.com".to_string()], true)
            .await
            .unwrap();

        assert_eq!(code, 0);
    }

    #[test]
    fn test_exit_code() {
        assert_eq!(exit_code(&[]), 0);
        assert_eq!(exit_code(&[check_with(true), check_with(true)]), 0);
        assert_eq!(exit_code(&[check_with(true), check_with(false)]), 1);
    }
}
