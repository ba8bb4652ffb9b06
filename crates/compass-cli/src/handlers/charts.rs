//! Charts command handler.

use anyhow::{Context, Result};
use compass_core::RecipeStore;
use compass_ui::{ChartKind, render_chart};
use std::fs;
use std::path::{Path, PathBuf};
use strum::IntoEnumIterator;

/// Write every chart as `<slug>.svg` under `out_dir`, returning the paths.
pub fn write_all(store: &RecipeStore, out_dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    ChartKind::iter()
        .map(|kind| {
            let path = out_dir.join(format!("{}.svg", kind.slug()));
            fs::write(&path, render_chart(kind, store))
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::debug!(chart = kind.slug(), path = %path.display(), "chart written");
            Ok(path)
        })
        .collect()
}

pub fn execute(out_dir: &Path) -> Result<()> {
    for path in write_all(&RecipeStore::seeded(), out_dir)? {
        println!("Wrote {}", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_one_file_per_chart() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("nested").join("charts");
        let paths = write_all(&RecipeStore::seeded(), &out).unwrap();

        assert_eq!(paths.len(), 3);
        for name in ["ingredients.svg", "prep-times.svg", "cuisines.svg"] {
            let svg = fs::read_to_string(out.join(name)).unwrap();
            assert!(svg.starts_with("<svg"), "{name}");
        }
    }

    #[test]
    fn test_empty_store_writes_placeholders() {
        let dir = tempfile::tempdir().unwrap();
        write_all(&RecipeStore::new(), dir.path()).unwrap();
        let svg = fs::read_to_string(dir.path().join("cuisines.svg")).unwrap();
        assert!(svg.contains("placeholder"));
    }
}
