//! Resume insight: resume analysis, ATS scoring and job-match CLI

use clap::Parser;
use log::{error, info};
use resume_insight::cli::{self, Cli, Commands, ConfigAction};
use resume_insight::config::Config;
use resume_insight::error::{Result, ResumeInsightError};
use resume_insight::matching::compute_match;
use resume_insight::output::formatter_for;
use resume_insight::{JobParser, ResumeAnalyzer};
use std::path::{Path, PathBuf};
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Analyze {
            file,
            output,
            save,
            detailed,
        } => {
            cli::validate_file_extension(&file, &["pdf", "docx", "doc", "txt", "md"])
                .map_err(|e| ResumeInsightError::InvalidInput(format!("Resume file: {}", e)))?;
            let output_format =
                cli::parse_output_format(&output).map_err(ResumeInsightError::InvalidInput)?;

            info!("Analyzing resume: {}", file.display());
            let bytes = read_file(&file, &config).await?;
            let filename = file_name(&file);

            let analyzer = ResumeAnalyzer::new();
            let analysis = analyzer.analyze(&bytes, &filename);

            let formatter = formatter_for(output_format, detailed, config.output.color_output);
            let report = formatter.format_resume(&analysis)?;
            emit(&report, save).await
        }

        Commands::ParseJob { file, output, save } => {
            cli::validate_file_extension(&file, &["txt", "md"]).map_err(|e| {
                ResumeInsightError::InvalidInput(format!("Job description file: {}", e))
            })?;
            let output_format =
                cli::parse_output_format(&output).map_err(ResumeInsightError::InvalidInput)?;

            info!("Parsing job description: {}", file.display());
            let text = read_text(&file, &config).await?;

            let parser = JobParser::new();
            let analysis = parser.parse(&text);

            let formatter = formatter_for(output_format, false, config.output.color_output);
            let report = formatter.format_job(&analysis)?;
            emit(&report, save).await
        }

        Commands::Match {
            resume,
            job,
            output,
            save,
        } => {
            cli::validate_file_extension(&resume, &["pdf", "docx", "doc", "txt", "md"])
                .map_err(|e| ResumeInsightError::InvalidInput(format!("Resume file: {}", e)))?;
            cli::validate_file_extension(&job, &["txt", "md"]).map_err(|e| {
                ResumeInsightError::InvalidInput(format!("Job description file: {}", e))
            })?;
            let output_format =
                cli::parse_output_format(&output).map_err(ResumeInsightError::InvalidInput)?;

            info!(
                "Scoring {} against {}",
                resume.display(),
                job.display()
            );
            let resume_bytes = read_file(&resume, &config).await?;
            let job_text = read_text(&job, &config).await?;

            let analyzer = ResumeAnalyzer::new();
            let resume_analysis = analyzer.analyze(&resume_bytes, &file_name(&resume));
            let job_analysis = JobParser::new().parse(&job_text);
            let result = compute_match(&resume_analysis, &job_analysis);

            let formatter = formatter_for(output_format, false, config.output.color_output);
            let report = formatter.format_match(&result)?;
            emit(&report, save).await
        }

        Commands::Config { action } => {
            match action {
                Some(ConfigAction::Show) | None => {
                    println!("⚙️  Current Configuration\n");
                    println!("Max file size: {} MB", config.extraction.max_file_size_mb);
                    println!("Output format: {:?}", config.output.format);
                    println!("Detailed output: {}", config.output.detailed);
                    println!("Color output: {}", config.output.color_output);
                }

                Some(ConfigAction::Reset) => {
                    let default_config = Config::default();
                    default_config.save()?;
                    println!("✅ Configuration reset to defaults");
                }
            }
            Ok(())
        }
    }
}

async fn read_file(path: &Path, config: &Config) -> Result<Vec<u8>> {
    check_file_size(path, config).await?;
    Ok(tokio::fs::read(path).await?)
}

async fn read_text(path: &Path, config: &Config) -> Result<String> {
    check_file_size(path, config).await?;
    Ok(tokio::fs::read_to_string(path).await?)
}

async fn check_file_size(path: &Path, config: &Config) -> Result<()> {
    let metadata = tokio::fs::metadata(path).await?;
    if metadata.len() > config.max_file_size_bytes() {
        return Err(ResumeInsightError::InvalidInput(format!(
            "File {} exceeds the {} MB size limit",
            path.display(),
            config.extraction.max_file_size_mb
        )));
    }
    Ok(())
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_default()
}

async fn emit(report: &str, save: Option<PathBuf>) -> Result<()> {
    println!("{}", report);
    if let Some(save_path) = save {
        tokio::fs::write(&save_path, report).await?;
        println!("💾 Saved report to {}", save_path.display());
    }
    Ok(())
}
