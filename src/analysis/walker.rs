//! Repository walker: traverse a directory tree, filter files, read
//! bytes, and delegate each supported file to its language profile.

use std::fs;
use std::path::Path;

use tracing::warn;
use uuid::Uuid;
use walkdir::{DirEntry, WalkDir};

use crate::core::cancel::CancellationToken;
use crate::core::errors::{DebtdroneError, Result};
use crate::core::metrics::{ComplexityMetric, RunContext};
use crate::lang::engine::analyze_file;
use crate::lang::registry::{extension_of, profile_for_path};

/// Directory names pruned at any depth.
pub const PRUNED_DIRECTORIES: &[&str] = &[
    ".git",
    "node_modules",
    "vendor",
    "venv",
    ".venv",
    "__pycache__",
];

/// Whether a walk entry survives pruning.
fn keep_entry(entry: &DirEntry) -> bool {
    if !entry.file_type().is_dir() {
        return true;
    }
    let name = entry.file_name().to_string_lossy();
    !PRUNED_DIRECTORIES.contains(&name.as_ref())
}

/// Walk the repository rooted at `root` and produce one flat metric list.
///
/// Unsupported extensions are skipped silently; unreadable files and
/// per-file analysis failures are logged and skipped. The cancellation
/// token is honored between files.
pub fn collect_metrics(
    root: &Path,
    ctx: &RunContext,
    cancel: &CancellationToken,
) -> Result<Vec<ComplexityMetric>> {
    if !root.exists() {
        return Err(DebtdroneError::resolution(
            root.display().to_string(),
            "no such file or directory",
        ));
    }

    let mut all_metrics = Vec::new();

    for entry in WalkDir::new(root).into_iter().filter_entry(keep_entry) {
        if cancel.is_cancelled() {
            return Err(DebtdroneError::pipeline(
                "complexity",
                "analysis cancelled",
            ));
        }

        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!("Failed to walk directory entry: {err}");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let Some(profile) = profile_for_path(path) else {
            continue;
        };

        let source = match fs::read(path) {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(err) => {
                warn!("Failed to read file {}: {err}", path.display());
                continue;
            }
        };

        let relative = path
            .strip_prefix(root)
            .unwrap_or(path)
            .to_string_lossy()
            .into_owned();
        let ext = extension_of(path);

        let mut metrics = analyze_file(profile, &relative, &ext, &source);
        for metric in &mut metrics {
            metric.id = Uuid::new_v4();
            metric.user_id = ctx.user_id;
            metric.repository_id = ctx.repository_id;
            metric.analysis_run_id = ctx.analysis_run_id;
        }
        all_metrics.extend(metrics);
    }

    Ok(all_metrics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use std::fs;
    use tempfile::tempdir;

    const DIRTY_JS: &str = r#"
function tangled(a, b, c) {
  if (a) {
    if (b) {
      for (let i = 0; i < 10; i++) {
        if (c) {
          while (a--) {
            if (b > c && a > 0) {
              return i;
            }
          }
        }
      }
    }
  }
  return 0;
}
"#;

    #[test]
    fn walker_finds_metrics_across_languages() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("calc.py"), "def add(a, b):\n    return a + b\n").unwrap();
        fs::write(
            dir.path().join("id.rs"),
            "fn id(x: u8) -> u8 {\n    x\n}\n",
        )
        .unwrap();
        fs::write(dir.path().join("notes.txt"), "not code\n").unwrap();

        let ctx = RunContext::new();
        let metrics = collect_metrics(dir.path(), &ctx, &CancellationToken::new()).unwrap();

        let languages: BTreeSet<_> = metrics.iter().map(|m| m.language).collect();
        assert_eq!(metrics.len(), 2);
        assert!(languages.contains("Python"));
        assert!(languages.contains("Rust"));
    }

    #[test]
    fn walker_prunes_dependency_directories() {
        let dir = tempdir().unwrap();
        for pruned in PRUNED_DIRECTORIES {
            let nested = dir.path().join(pruned).join("deep");
            fs::create_dir_all(&nested).unwrap();
            fs::write(nested.join("index.js"), DIRTY_JS).unwrap();
        }

        let ctx = RunContext::new();
        let metrics = collect_metrics(dir.path(), &ctx, &CancellationToken::new()).unwrap();
        assert!(metrics.is_empty(), "pruned directories leaked metrics");
    }

    #[test]
    fn relocating_out_of_pruned_directory_surfaces_the_metric() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("src");
        fs::create_dir_all(&src).unwrap();
        fs::write(src.join("index.js"), DIRTY_JS).unwrap();

        let ctx = RunContext::new();
        let metrics = collect_metrics(dir.path(), &ctx, &CancellationToken::new()).unwrap();
        assert_eq!(metrics.len(), 1);
        assert!(metrics[0].nesting_depth >= 5);
        assert_eq!(metrics[0].file_path, "src/index.js");
    }

    #[test]
    fn walker_stamps_context_identifiers() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.py"), "def f():\n    return 1\n").unwrap();

        let ctx = RunContext::new();
        let metrics = collect_metrics(dir.path(), &ctx, &CancellationToken::new()).unwrap();
        assert_eq!(metrics.len(), 1);
        assert_eq!(metrics[0].analysis_run_id, ctx.analysis_run_id);
        assert_eq!(metrics[0].repository_id, ctx.repository_id);
        assert_eq!(metrics[0].user_id, ctx.user_id);
        assert_ne!(metrics[0].id, Uuid::nil());
    }

    #[test]
    fn unparseable_file_does_not_block_others() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("bad.rs"), "fn ((((( {{{").unwrap();
        fs::write(dir.path().join("good.py"), "def ok():\n    return 1\n").unwrap();

        let ctx = RunContext::new();
        let metrics = collect_metrics(dir.path(), &ctx, &CancellationToken::new()).unwrap();
        assert!(metrics.iter().any(|m| m.function_name == "ok"));
    }

    #[test]
    fn missing_root_is_a_fatal_resolution_error() {
        let result = collect_metrics(
            Path::new("/definitely/not/a/real/path"),
            &RunContext::new(),
            &CancellationToken::new(),
        );
        match result {
            Err(err) => assert!(err.is_fatal()),
            Ok(_) => panic!("expected a resolution error"),
        }
    }

    #[test]
    fn cancellation_aborts_the_walk() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.py"), "def f():\n    return 1\n").unwrap();

        let token = CancellationToken::new();
        token.cancel();
        let result = collect_metrics(dir.path(), &RunContext::new(), &token);
        assert!(result.is_err());
    }

    #[test]
    fn identical_trees_produce_identical_metric_sets() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("one.py"), "def f(a):\n    return a\n").unwrap();
        fs::write(dir.path().join("two.go"), "package main\n\nfunc g() int {\n\treturn 2\n}\n")
            .unwrap();

        let first: BTreeSet<_> =
            collect_metrics(dir.path(), &RunContext::new(), &CancellationToken::new())
                .unwrap()
                .into_iter()
                .map(|m| m.fingerprint())
                .collect();
        let second: BTreeSet<_> =
            collect_metrics(dir.path(), &RunContext::new(), &CancellationToken::new())
                .unwrap()
                .into_iter()
                .map(|m| m.fingerprint())
                .collect();
        assert_eq!(first, second);
    }
}
