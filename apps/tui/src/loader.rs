use leaderboard_core::{CompanyRecord, Dashboard, LoadError, RawDataset};
use std::path::Path;
use tracing::{debug, info};

/// Reads and parses the dataset, then builds every derived panel.
pub async fn load_dashboard(path: &Path) -> Result<Dashboard, LoadError> {
    let json = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    let dataset = RawDataset::from_json_str(&json)?;
    info!(
        path = %path.display(),
        rows = dataset.company_data.len(),
        "dataset loaded"
    );
    Ok(Dashboard::from_dataset(&dataset))
}

/// Whether each record's logo asset exists under `logo_root`.
pub async fn logo_presence(records: &[CompanyRecord], logo_root: &Path) -> Vec<bool> {
    let mut present = Vec::with_capacity(records.len());
    for record in records {
        let logo = record.logo();
        let exists = !logo.is_empty()
            && tokio::fs::try_exists(logo_root.join(logo))
                .await
                .unwrap_or(false);
        present.push(exists);
    }
    debug!(
        found = present.iter().filter(|exists| **exists).count(),
        total = present.len(),
        "logo assets checked"
    );
    present
}
