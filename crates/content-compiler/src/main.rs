use clap::{Arg, ArgAction, Command};
use content_compiler::{pipeline, CompilerConfig};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Command::new("content-compiler")
        .version("0.1.0")
        .about("Compiles a markdown content tree into a validated build tree")
        .arg(
            Arg::new("src")
                .long("src")
                .default_value(content_compiler::config::DEFAULT_SRC_DIR)
                .help("Source content directory"),
        )
        .arg(
            Arg::new("dest")
                .long("dest")
                .default_value(content_compiler::config::DEFAULT_DEST_DIR)
                .help("Build output directory (recreated empty each run)"),
        )
        .arg(
            Arg::new("dataset")
                .long("dataset")
                .default_value(content_compiler::config::DEFAULT_DATASET)
                .help("Taxonomy dataset file"),
        )
        .arg(
            Arg::new("taxco-report")
                .long("taxco-report")
                .default_value(content_compiler::config::DEFAULT_TAXCO_REPORT)
                .help("Taxonomy report output path"),
        )
        .arg(
            Arg::new("content-report")
                .long("content-report")
                .default_value(content_compiler::config::DEFAULT_CONTENT_REPORT)
                .help("Content report output path"),
        )
        .arg(
            Arg::new("skip-link-check")
                .long("skip-link-check")
                .action(ArgAction::SetTrue)
                .help("Skip link check in markdown files"),
        );

    let matches = cli.get_matches();
    let config = CompilerConfig {
        src_dir: arg_path(&matches, "src"),
        dest_dir: arg_path(&matches, "dest"),
        dataset: arg_path(&matches, "dataset"),
        taxco_report_path: arg_path(&matches, "taxco-report"),
        content_report_path: arg_path(&matches, "content-report"),
        skip_link_check: matches.get_flag("skip-link-check"),
        ..CompilerConfig::default()
    };

    match pipeline::run(&config) {
        Ok(report) => {
            println!(
                "Compiled {} file(s), {} failed, {} work in progress, {} image finding(s)",
                report.processed_files.len(),
                report.failed_files.len(),
                report.wip_files.len(),
                report.failed_images.len()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}

fn arg_path(matches: &clap::ArgMatches, id: &str) -> PathBuf {
    matches
        .get_one::<String>(id)
        .map(PathBuf::from)
        .unwrap_or_default()
}
