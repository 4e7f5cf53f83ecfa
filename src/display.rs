use crate::types::Finding;
use colored::*;

/// Display utilities for clean, colored console output.
///
/// All user-facing lines pass through here; quiet mode silences them.
pub struct DisplayManager {
    use_colors: bool,
    quiet_mode: bool,
}

impl DisplayManager {
    pub fn new() -> Self {
        Self::with_quiet(false)
    }

    pub fn with_quiet(quiet: bool) -> Self {
        // Simple check for color support - assume true for most terminals
        let use_colors = std::env::var("NO_COLOR").is_err()
            && std::env::var("TERM").map_or(true, |term| term != "dumb");

        Self {
            use_colors,
            quiet_mode: quiet,
        }
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet_mode
    }

    /// Print a confirmed authentication bypass finding
    pub fn print_finding(&self, finding: &Finding) {
        if self.quiet_mode {
            return;
        }

        if self.use_colors {
            println!(
                "  {} {} {}",
                "🔥".color(Color::BrightRed),
                "Nacos authentication bypass".bright_white().bold(),
                format!("({})", finding.target).bright_black()
            );
            println!(
                "    └─ {}",
                format!("technique: {}", finding.technique).white()
            );
            println!(
                "    └─ {}",
                format!(
                    "discovered at {}",
                    finding.discovered_at.format("%Y-%m-%d %H:%M:%S UTC")
                )
                .bright_black()
            );
        } else {
            println!(
                "  [VULNERABLE] {} ({})",
                finding.target, finding.technique
            );
        }
    }

    /// Print end-of-run statistics
    pub fn print_scan_summary(&self, total_targets: usize, vulnerable: usize, exported: usize) {
        if self.quiet_mode {
            return;
        }

        if self.use_colors {
            println!();
            self.print_section_header("📊 SCAN RESULTS SUMMARY");

            println!(
                "  📡 {}: {}",
                "Targets Scanned".bright_white().bold(),
                total_targets.to_string().cyan().bold()
            );

            if vulnerable == 0 {
                println!("  ✨ {}", "No vulnerable servers found!".bright_green().bold());
                return;
            }

            println!(
                "  🔥 {}: {}",
                "Vulnerable Servers".bright_white().bold(),
                vulnerable.to_string().red().bold()
            );
            println!(
                "  💾 {}: {}",
                "Configurations Exported".bright_white().bold(),
                exported.to_string().yellow().bold()
            );
        } else {
            println!("\n=== SCAN RESULTS SUMMARY ===");
            println!("Targets Scanned: {}", total_targets);
            if vulnerable == 0 {
                println!("No vulnerable servers found!");
                return;
            }
            println!("Vulnerable Servers: {}", vulnerable);
            println!("Configurations Exported: {}", exported);
        }
        println!();
    }

    /// Print a clean section header
    pub fn print_section_header(&self, title: &str) {
        if self.quiet_mode {
            return;
        }

        if self.use_colors {
            println!("{}", title.bright_cyan().bold());
            println!("{}", "─".repeat(title.chars().count()).bright_cyan());
        } else {
            println!("{}", title);
            println!("{}", "=".repeat(title.len()));
        }
    }

    /// Print a clean success message
    pub fn print_success(&self, message: &str) {
        if self.quiet_mode {
            return;
        }

        if self.use_colors {
            println!("  {} {}", "✓".bright_green().bold(), message.green());
        } else {
            println!("[✓] {}", message);
        }
    }

    /// Print a clean warning message
    pub fn print_warning(&self, message: &str) {
        if self.quiet_mode {
            return;
        }

        if self.use_colors {
            println!("  {} {}", "!".bright_yellow().bold(), message.yellow());
        } else {
            println!("[!] {}", message);
        }
    }

    /// Print a clean error message
    pub fn print_error(&self, message: &str) {
        if self.use_colors {
            eprintln!("  {} {}", "✗".bright_red().bold(), message.red().bold());
        } else {
            eprintln!("[✗] {}", message);
        }
    }

    /// Print a clean info message
    pub fn print_info(&self, message: &str) {
        if self.quiet_mode {
            return;
        }

        if self.use_colors {
            println!("  {} {}", "i".bright_blue().bold(), message.blue());
        } else {
            println!("[i] {}", message);
        }
    }

    /// Print a clean banner with enhanced styling
    pub fn print_banner(&self, title: &str, subtitle: Option<&str>) {
        if self.quiet_mode {
            return;
        }

        if self.use_colors {
            println!();
            println!(
                "  {}",
                "┌─".bright_cyan().to_string() + &"─".repeat(title.len() + 2) + "─┐"
            );
            println!(
                "  {} {} {}",
                "│".bright_cyan(),
                title.bright_white().bold(),
                "│".bright_cyan()
            );
            if let Some(sub) = subtitle {
                println!(
                    "  {} {} {}",
                    "│".bright_cyan(),
                    format!("{:^width$}", sub, width = title.len()).bright_black(),
                    "│".bright_cyan()
                );
            }
            println!(
                "  {}",
                "└─".bright_cyan().to_string() + &"─".repeat(title.len() + 2) + "─┘"
            );
            println!();
        } else {
            let border = "=".repeat(title.len() + 4);
            println!("\n{}", border);
            println!("  {}  ", title);
            if let Some(sub) = subtitle {
                println!("  {}  ", sub);
            }
            println!("{}\n", border);
        }
    }
}

impl Default for DisplayManager {
    fn default() -> Self {
        Self::new()
    }
}
