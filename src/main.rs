mod model;
mod outline;
mod persona;
mod source;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::warn;

const PERSONA_CONFIG_NAME: &str = "persona_config.json";
const ANALYSIS_FILE_NAME: &str = "persona_analysis.json";

#[derive(Parser)]
#[command(
    name = "doc_triage",
    about = "Document outline extraction and persona-driven section ranking"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract a heading outline from each extraction dump
    Outline {
        /// Directory of extraction dumps (*.json)
        #[arg(short, long, default_value = "input")]
        input: PathBuf,
        /// Output directory for per-document outlines
        #[arg(short, long, default_value = "output")]
        output: PathBuf,
    },
    /// Rank sections across a document collection for a persona + job
    Analyze {
        /// Directory of extraction dumps (*.json)
        #[arg(short, long, default_value = "input")]
        input: PathBuf,
        /// Persona configuration JSON ({persona, job_to_be_done})
        #[arg(short, long)]
        config: PathBuf,
        /// Output file for the analysis artifact
        #[arg(short, long, default_value = "output/persona_analysis.json")]
        output: PathBuf,
    },
    /// Outline or analyze, depending on whether input/persona_config.json exists
    Run {
        #[arg(short, long, default_value = "input")]
        input: PathBuf,
        #[arg(short, long, default_value = "output")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Outline { input, output } => run_outline(&input, &output),
        Commands::Analyze {
            input,
            config,
            output,
        } => run_analyze(&input, &config, &output),
        Commands::Run { input, output } => {
            let config = input.join(PERSONA_CONFIG_NAME);
            if config.exists() {
                println!("Persona config detected, running collection analysis...");
                run_analyze(&input, &config, &output.join(ANALYSIS_FILE_NAME))
            } else {
                println!("No persona config, running outline extraction...");
                run_outline(&input, &output)
            }
        }
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {}", format_duration(elapsed));
    }

    result
}

fn run_outline(input: &Path, output: &Path) -> Result<()> {
    let dumps = list_dumps(input)?;
    if dumps.is_empty() {
        println!("No extraction dumps found in {:?}.", input);
        return Ok(());
    }
    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory {:?}", output))?;

    println!("Extracting outlines from {} documents...", dumps.len());
    let mut ok = 0usize;
    let mut errors = 0usize;

    for path in &dumps {
        let result = match source::DumpFile::load(path) {
            Ok(doc) => {
                ok += 1;
                outline::extract_structure(&doc)
            }
            Err(e) => {
                warn!("Failed to load {:?}: {:#}", path, e);
                errors += 1;
                model::DocumentResult::load_error(format!("{:#}", e))
            }
        };

        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "document".to_string());
        let out_path = output.join(format!("{}.json", stem));
        fs::write(&out_path, serde_json::to_string_pretty(&result)?)
            .with_context(|| format!("Failed to write {:?}", out_path))?;
    }

    println!("Done: {} documents ({} ok, {} errors).", dumps.len(), ok, errors);
    Ok(())
}

fn run_analyze(input: &Path, config_path: &Path, output: &Path) -> Result<()> {
    let raw = fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read persona config {:?}", config_path))?;
    let config: model::PersonaConfig = serde_json::from_str(&raw)
        .with_context(|| format!("Malformed persona config {:?}", config_path))?;

    let dumps = list_dumps(input)?;
    if dumps.is_empty() {
        println!("No extraction dumps found in {:?}.", input);
        return Ok(());
    }

    println!(
        "Analyzing {} documents for persona '{}'...",
        dumps.len(),
        config.persona
    );
    let result = persona::analyze_documents(&dumps, &config);

    if let Some(dir) = output.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create output directory {:?}", dir))?;
        }
    }
    fs::write(output, serde_json::to_string_pretty(&result)?)
        .with_context(|| format!("Failed to write {:?}", output))?;

    println!(
        "Ranked {} sections, refined top {}. Saved {:?}.",
        result.extracted_sections.len(),
        result.subsection_analysis.len(),
        output
    );
    Ok(())
}

/// Extraction dumps in a directory, sorted by name for deterministic order.
/// The persona config file is not a document.
fn list_dumps(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths: Vec<PathBuf> = fs::read_dir(dir)
        .with_context(|| format!("Failed to read input directory {:?}", dir))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
        .filter(|p| p.file_name().map_or(true, |name| name != PERSONA_CONFIG_NAME))
        .collect();
    paths.sort();
    Ok(paths)
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_dumps_sorted_and_filtered() {
        let dir = std::env::temp_dir().join("doc_triage_list_dumps");
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("b.json"), "{}").unwrap();
        fs::write(dir.join("a.json"), "{}").unwrap();
        fs::write(dir.join(PERSONA_CONFIG_NAME), "{}").unwrap();
        fs::write(dir.join("notes.txt"), "skip").unwrap();

        let dumps = list_dumps(&dir).unwrap();
        let names: Vec<String> = dumps
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.json", "b.json"]);
    }

    #[test]
    fn format_duration_units() {
        use std::time::Duration;
        assert_eq!(format_duration(Duration::from_millis(1500)), "1.5s");
        assert_eq!(format_duration(Duration::from_secs(75)), "1m 15s");
        assert_eq!(format_duration(Duration::from_secs(3700)), "1h 1m 40s");
    }
}
