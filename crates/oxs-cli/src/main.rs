use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clap_complete::Shell;

use oxs_core::check;
use oxs_core::config::{self, CONFIG_FILE_NAME, OxsConfig};
use oxs_core::document::{self, spec::OpenApiSpec};
use oxs_core::synth;

#[derive(Parser)]
#[command(name = "oxs", about = "OpenAPI x-codeSamples synthesizer and checker", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add boilerplate code samples to operations missing them, in place
    Annotate {
        /// Path to the OpenAPI spec file (YAML or JSON)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Run consistency checks and report findings
    Check {
        /// Path to the OpenAPI spec file
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Initialize a new oxs configuration
    Init {
        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Annotate { input } => cmd_annotate(input),

        Commands::Check { input } => cmd_check(input),

        Commands::Init { force } => cmd_init(force),

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            clap_complete::generate(shell, &mut cmd, "oxs", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Try to load the project config file from the current directory.
fn try_load_config() -> Result<Option<OxsConfig>> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    config::load_config(&config_path).map_err(|e| anyhow::anyhow!(e))
}

fn resolve_input(input: Option<PathBuf>, cfg: &OxsConfig) -> PathBuf {
    input.unwrap_or_else(|| PathBuf::from(&cfg.input))
}

fn load_spec(path: &Path) -> Result<OpenApiSpec> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("yaml");

    let spec = match ext {
        "json" => document::from_json(&content)?,
        _ => document::from_yaml(&content)?,
    };
    log::debug!("loaded specification from {}", path.display());
    Ok(spec)
}

fn write_spec(path: &Path, spec: &OpenApiSpec) -> Result<()> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("yaml");

    let content = match ext {
        "json" => document::to_json_pretty(spec)?,
        _ => document::to_yaml(spec)?,
    };
    fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))
}

fn cmd_annotate(input: Option<PathBuf>) -> Result<()> {
    let cfg = try_load_config()?.unwrap_or_default();
    let input = resolve_input(input, &cfg);

    let mut spec = load_spec(&input)?;
    let annotated = synth::annotate(&mut spec, &cfg.synth_options());

    if annotated == 0 {
        eprintln!("No operations were missing code samples.");
        return Ok(());
    }

    write_spec(&input, &spec)?;
    eprintln!(
        "Added code samples to {} operations in {}.",
        annotated,
        input.display()
    );
    Ok(())
}

fn cmd_check(input: Option<PathBuf>) -> Result<()> {
    let cfg = try_load_config()?.unwrap_or_default();
    let input = resolve_input(input, &cfg);

    let spec = load_spec(&input)?;
    let findings = check::check(&spec);

    for finding in &findings {
        println!("{finding}");
    }

    let errors = findings
        .iter()
        .filter(|f| f.severity == check::Severity::Error)
        .count();
    let warnings = findings.len() - errors;
    eprintln!(
        "{}: {} errors, {} warnings",
        input.display(),
        errors,
        warnings
    );

    if errors > 0 {
        anyhow::bail!("{} consistency errors found", errors);
    }
    Ok(())
}

fn cmd_init(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, config::default_config_content())?;
    eprintln!("Created {}", config_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPEC: &str = r#"
openapi: 3.0.0
info:
  title: Test API
  version: "1.0"
paths:
  /models:
    get:
      summary: List models
      responses:
        '200':
          description: OK
"#;

    #[test]
    fn annotate_rewrites_file_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spec.yaml");
        fs::write(&path, SPEC).unwrap();

        cmd_annotate(Some(path.clone())).unwrap();

        let spec = load_spec(&path).unwrap();
        let (_, _, operation) = spec.operations().next().unwrap();
        assert_eq!(operation.code_samples.len(), 3);

        // Second run leaves the file untouched.
        let before = fs::read_to_string(&path).unwrap();
        cmd_annotate(Some(path.clone())).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), before);
    }

    #[test]
    fn annotate_fails_on_unparseable_input() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spec.yaml");
        fs::write(&path, "openapi: [broken").unwrap();

        assert!(cmd_annotate(Some(path)).is_err());
    }

    #[test]
    fn check_fails_on_undeclared_tag() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spec.yaml");
        fs::write(
            &path,
            r#"
openapi: 3.0.0
info:
  title: Test API
  version: "1.0"
  description: Test
security:
  - ApiKeyAuth: []
components:
  securitySchemes:
    ApiKeyAuth:
      type: http
      scheme: bearer
paths:
  /characters:
    get:
      tags: [Preview]
      responses:
        '200':
          description: OK
"#,
        )
        .unwrap();

        assert!(cmd_check(Some(path)).is_err());
    }
}
