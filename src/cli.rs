use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "nacosleak")]
#[command(about = "Nacos authentication bypass scanner and configuration exporter")]
#[command(long_about = r#"
Nacosleak checks Nacos configuration-management servers for three known
authentication-bypass weaknesses (unauthenticated console access, the
publicly known default JWT token, and the serverIdentity header spoof)
and downloads every exposed configuration item on a hit.

WARNING: This tool should only be used against servers you own or have
explicit permission to test. Unauthorized scanning may be illegal.

Usage Examples:
  nacosleak -t http://192.168.1.100:8848          # Scan a single server
  nacosleak -f targets.txt                        # Scan a list of servers
  nacosleak -t http://10.0.0.5:8848 --timeout 5   # Slower network
  nacosleak -f targets.txt --proxy http://127.0.0.1:8080
  nacosleak -t http://10.0.0.5:8848 -o ./loot     # Custom export directory
"#)]
#[command(version)]
pub struct Cli {
    /// Base URL of a single Nacos server (e.g., http://192.168.1.100:8848)
    #[arg(short, long, value_name = "URL")]
    pub target: Option<String>,

    /// File containing a newline-delimited list of base URLs
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Proxy server applied to all requests (e.g., http://127.0.0.1:8080)
    #[arg(long, value_name = "URL")]
    pub proxy: Option<String>,

    /// Request timeout in seconds
    #[arg(long, default_value = "3", value_name = "SECS")]
    pub timeout: u64,

    /// Directory where exported configurations are written
    #[arg(short, long, default_value = "./results", value_name = "DIR")]
    pub output: PathBuf,

    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Verbose output (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress output)
    #[arg(short, long)]
    pub quiet: bool,
}
