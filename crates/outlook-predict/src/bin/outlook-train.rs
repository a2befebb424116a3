//! Fit the classifier on the reference dataset and write the artifact.
//!
//! Reads `outlook.toml` from the working directory, or the file named by
//! `OUTLOOK_CONFIG`. The artifact lands at `classifier.artifact_path`.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use outlook_core::constants::DEFAULT_CONFIG_FILE;
use outlook_core::tracing::init_tracing;
use outlook_core::{OutlookConfig, OutlookErrorCode, OutlookResult};
use outlook_predict::training::{train_and_save, Dataset};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(code = e.error_code(), error = %e, "training failed");
            eprintln!("outlook-train: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> OutlookResult<()> {
    let config_path = std::env::var_os("OUTLOOK_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    let config = OutlookConfig::load(&config_path)?;
    init_tracing(&config.observability);

    let artifact_path = Path::new(&config.classifier.artifact_path);
    let report = train_and_save(&Dataset::reference(), &config.training, artifact_path)?;
    println!(
        "trained on {} rows, held out {}; test accuracy {:.2}; wrote {}",
        report.train_size,
        report.test_size,
        report.test_accuracy,
        artifact_path.display()
    );
    Ok(())
}
