use clap::Parser;
use env_logger::Env;
use nacosleak::{
    cli::Cli,
    config::Config,
    display::DisplayManager,
    scanner::{load_targets, NacosScanner, ScanOutcome},
    types::Finding,
};
use std::time::SystemTime;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.quiet {
        "error"
    } else {
        match cli.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    env_logger::Builder::from_env(Env::default().default_filter_or(log_level))
        .format_timestamp_secs()
        .init();

    let display = DisplayManager::with_quiet(cli.quiet);

    if !cli.quiet {
        display.print_banner(
            "🔓 NACOSLEAK - Nacos Configuration Exposure Scanner",
            Some("Authorized Testing Only"),
        );
        display.print_warning("Ensure you have proper permission before scanning any servers.");
        println!();
    }

    let mut config = if let Some(config_path) = &cli.config {
        match Config::load_from_file(&config_path.to_string_lossy()) {
            Ok(config) => {
                if !cli.quiet {
                    display.print_success(&format!(
                        "Loaded configuration from {}",
                        config_path.display()
                    ));
                }
                config
            }
            Err(e) => {
                display.print_warning(&format!(
                    "Failed to load configuration: {}, using defaults",
                    e
                ));
                Config::default()
            }
        }
    } else {
        Config::default()
    };

    // Apply CLI overrides to config
    config.scan.timeout = cli.timeout;
    config.export.output_dir = cli.output.clone();
    if cli.proxy.is_some() {
        config.scan.proxy = cli.proxy.clone();
    }

    let targets = if let Some(file) = &cli.file {
        match load_targets(file).await {
            Ok(targets) => targets,
            Err(e) => {
                display.print_error(&format!(
                    "Failed to read target list {}: {}",
                    file.display(),
                    e
                ));
                return;
            }
        }
    } else if let Some(target) = &cli.target {
        vec![target.clone()]
    } else {
        display.print_warning(
            "No target specified. Use --target <URL> or --file <FILE>, or 'nacosleak --help' for usage.",
        );
        return;
    };

    if targets.is_empty() {
        display.print_warning("Target list is empty, nothing to scan.");
        return;
    }

    let start_time = SystemTime::now();

    execute_scan(&config, &display, &targets).await;

    let elapsed = start_time.elapsed().unwrap_or_default();
    if !cli.quiet {
        display.print_success(&format!(
            "Scan completed in {}",
            nacosleak::utils::time::format_duration(elapsed)
        ));
    }
}

async fn execute_scan(config: &Config, display: &DisplayManager, targets: &[String]) {
    display.print_section_header("🔍 NACOS AUTH BYPASS SCAN");

    let scanner = NacosScanner::new(config.clone());
    let mut vulnerable = 0usize;
    let mut exported = 0usize;

    for raw in targets {
        display.print_info(&format!("Scanning {}", raw));

        match scanner.scan_target(raw).await {
            Ok(ScanOutcome::Unreachable) => {
                display.print_warning(&format!("{} does not answer like a Nacos console", raw));
            }
            Ok(ScanOutcome::NotVulnerable) => {
                display.print_info(&format!("{}: no authentication bypass found", raw));
            }
            Ok(ScanOutcome::Exported {
                technique,
                output_dir,
            }) => {
                vulnerable += 1;
                exported += 1;
                display.print_finding(&Finding::new(raw.as_str(), technique));
                display.print_success(&format!(
                    "Configurations saved to {}",
                    output_dir.display()
                ));
            }
            Ok(ScanOutcome::ExportAborted { technique }) => {
                vulnerable += 1;
                display.print_finding(&Finding::new(raw.as_str(), technique));
                display.print_warning(&format!(
                    "Export aborted for {}, nothing was written",
                    raw
                ));
            }
            // One bad target must not stop the rest of a batch run.
            Err(e) => {
                display.print_error(&format!("Error processing {}: {}", raw, e));
            }
        }

        if !display.is_quiet() {
            println!();
        }
    }

    display.print_scan_summary(targets.len(), vulnerable, exported);
}
