//! CLI entry point for srcguard.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and
//! exit codes. All business logic lives in the `srcguard-app` crate.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use srcguard_app::{parse_report_json, run_scan, serialize_report, to_renderable, ScanInput};
use srcguard_render::{render_github_annotations, render_text};
use srcguard_settings::Overrides;
use srcguard_types::RepoPath;

#[derive(Parser, Debug)]
#[command(
    name = "srcguard",
    version,
    about = "Source-tree compliance guard: size limits, secrets, filenames, charsets"
)]
struct Cli {
    /// Repository root the scan is anchored at.
    #[arg(long, default_value = ".")]
    repo_root: Utf8PathBuf,

    /// Path to srcguard config TOML, relative to the repo root.
    #[arg(long, default_value = "srcguard.toml")]
    config: Utf8PathBuf,

    /// Override the maximum allowed lines per file.
    #[arg(long)]
    max_lines: Option<usize>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Scan the full tree under the repo root.
    Scan {
        /// Where to write the JSON report (omit to skip the artifact).
        #[arg(long)]
        report_out: Option<Utf8PathBuf>,
    },

    /// Scan an explicit list of repo-relative paths (changed-file checks).
    Files {
        /// Where to write the JSON report (omit to skip the artifact).
        #[arg(long)]
        report_out: Option<Utf8PathBuf>,

        /// Repo-relative paths to check.
        #[arg(required = true)]
        paths: Vec<String>,
    },

    /// Render GitHub Actions annotations from an existing JSON report.
    Annotations {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/srcguard/report.json")]
        report: Utf8PathBuf,

        /// Maximum number of annotations to emit.
        #[arg(long, default_value = "10")]
        max: usize,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.cmd {
        Commands::Scan { ref report_out } => cmd_scan(&cli, None, report_out.clone()),
        Commands::Files {
            ref report_out,
            ref paths,
        } => {
            let targets = paths.iter().map(RepoPath::new).collect();
            cmd_scan(&cli, Some(targets), report_out.clone())
        }
        Commands::Annotations { report, max } => cmd_annotations(report, max),
    };

    match result {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(err) => {
            eprintln!("srcguard error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn cmd_scan(
    cli: &Cli,
    targets: Option<Vec<RepoPath>>,
    report_out: Option<Utf8PathBuf>,
) -> anyhow::Result<i32> {
    let repo_root = cli
        .repo_root
        .canonicalize_utf8()
        .unwrap_or_else(|_| cli.repo_root.clone());

    // Missing config file is allowed; defaults apply.
    let cfg_path = repo_root.join(&cli.config);
    let cfg_text = std::fs::read_to_string(&cfg_path).unwrap_or_default();

    let overrides = Overrides {
        max_lines: cli.max_lines,
    };

    let output = run_scan(ScanInput {
        repo_root: &repo_root,
        config_text: &cfg_text,
        overrides,
        targets,
    })?;

    for warning in &output.warnings {
        eprintln!("srcguard warning: {warning}");
    }

    if let Some(out_path) = report_out {
        write_report_file(&out_path, &output.report).context("write report json")?;
    }

    print!("{}", render_text(&to_renderable(&output.report)));

    Ok(srcguard_app::verdict_exit_code(output.report.verdict))
}

fn cmd_annotations(report_path: Utf8PathBuf, max: usize) -> anyhow::Result<i32> {
    let report_text = std::fs::read_to_string(&report_path)
        .with_context(|| format!("read report: {report_path}"))?;
    let report = parse_report_json(&report_text)?;
    let renderable = to_renderable(&report);

    for annotation in render_github_annotations(&renderable).into_iter().take(max) {
        println!("{annotation}");
    }

    Ok(0)
}

fn write_report_file(
    path: &camino::Utf8Path,
    report: &srcguard_types::SrcguardReport,
) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {parent}"))?;
    }
    let data = serialize_report(report)?;
    std::fs::write(path, data).with_context(|| format!("write report: {path}"))?;
    Ok(())
}
