use crate::csv_processor::converter::convert_csv_to_json;
use crate::utils::{ConverterConfig, PathsConfig, Result};
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchReport {
    pub succeeded: usize,
    pub failed: usize,
    pub missing: usize,
    pub total: usize,
}

/// Known inputs in configured order, then every `*<split_suffix>` file in the
/// split directory, sorted by name. A missing split directory adds nothing.
pub fn collect_csv_inputs(paths: &PathsConfig, converter: &ConverterConfig) -> Result<Vec<PathBuf>> {
    let mut inputs: Vec<PathBuf> = converter
        .known_files
        .iter()
        .map(|name| paths.raw_dir.join(name))
        .collect();

    let split_dir = paths.raw_dir.join(&converter.split_dir);
    if split_dir.is_dir() {
        let mut discovered = Vec::new();
        for entry in std::fs::read_dir(&split_dir)? {
            let entry = entry?;
            let path = entry.path();
            let matches = path
                .file_name()
                .and_then(|n| n.to_str())
                .map(|n| n.ends_with(&converter.split_suffix) && !n.starts_with('.'))
                .unwrap_or(false);
            if matches && path.is_file() {
                discovered.push(path);
            }
        }
        discovered.sort();
        inputs.extend(discovered);
    }

    Ok(inputs)
}

/// `data/raw/x/foo.csv` becomes `<raw_json_dir>/foo.json`.
pub fn output_path_for(csv_path: &Path, output_dir: &Path) -> PathBuf {
    let stem = csv_path
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_default();
    let mut file_name = stem;
    file_name.push(".json");
    output_dir.join(file_name)
}

/// Converts every input independently. A failing file is logged and counted;
/// it never stops the batch.
pub fn convert_all(inputs: &[PathBuf], output_dir: &Path) -> BatchReport {
    let mut report = BatchReport {
        total: inputs.len(),
        ..BatchReport::default()
    };

    for csv_path in inputs {
        if !csv_path.exists() {
            warn!("Warning: File not found - {}", csv_path.display());
            report.missing += 1;
            continue;
        }

        let json_path = output_path_for(csv_path, output_dir);
        info!("Converting {} to JSON...", csv_path.display());
        match convert_csv_to_json(csv_path, &json_path) {
            Ok(_) => report.succeeded += 1,
            Err(e) => {
                error!("Error converting {}: {}", csv_path.display(), e);
                report.failed += 1;
            }
        }
    }

    report
}

/// Runs the whole converter batch from configuration.
pub fn run_conversion(paths: &PathsConfig, converter: &ConverterConfig) -> Result<BatchReport> {
    std::fs::create_dir_all(&paths.raw_json_dir)?;

    let inputs = collect_csv_inputs(paths, converter)?;
    let report = convert_all(&inputs, &paths.raw_json_dir);

    info!(
        "Conversion completed. {} of {} files were successfully converted.",
        report.succeeded, report.total
    );
    Ok(report)
}
