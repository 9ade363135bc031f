use crate::verify::verify_dir;
use std::path::PathBuf;

pub fn run(dir: PathBuf, json: bool) -> anyhow::Result<()> {
    if !dir.exists() {
        anyhow::bail!("dataset directory does not exist: {}", dir.display());
    }

    let summary = verify_dir(&dir)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        for issue in &summary.issues {
            eprintln!("{}", issue);
        }
        eprintln!(
            "Checked {} rows: {} error(s), {} warning(s)",
            summary.rows_checked, summary.errors, summary.warnings
        );
        if summary.passed() {
            eprintln!("OK: all integrity checks passed");
        }
    }

    if !summary.passed() {
        std::process::exit(1);
    }
    Ok(())
}
