//! Per-file dispatch and the batch extractor.
//!
//! `extract_file` routes a file's content to the right locator(s) based on
//! its dialect. `Extractor` runs the dispatch over many files in parallel,
//! sorts each file's fragments into replacement order and aggregates the
//! non-empty results.

use std::fs;
use std::path::Path;

use rayon::prelude::*;

use crate::config::Config;
use crate::core::error::ExtractError;
use crate::core::file_scanner::scan_files;
use crate::core::fragment::{FileReport, TextFragment};
use crate::core::{script, sfc, template};

/// The three source dialects the engine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// Composite `.vue` single-file component.
    Vue,
    /// Plain script (`.js` / `.jsx`).
    JavaScript,
    /// Typed script (`.ts` / `.tsx`).
    TypeScript,
}

impl Dialect {
    pub fn from_path(path: &str) -> Option<Self> {
        match Path::new(path).extension().and_then(|e| e.to_str()) {
            Some("vue") => Some(Self::Vue),
            Some("js" | "jsx") => Some(Self::JavaScript),
            Some("ts" | "tsx") => Some(Self::TypeScript),
            _ => None,
        }
    }
}

/// Extract every double-byte fragment from one file's content.
///
/// Vue files are split into their template and script blocks; the template
/// fragments come first, then the script fragments. Files with an unknown
/// extension are not candidates and yield nothing.
pub fn extract_file(path: &str, content: &str) -> Result<Vec<TextFragment>, ExtractError> {
    match Dialect::from_path(path) {
        Some(Dialect::Vue) => {
            let blocks = sfc::split(content);
            let mut fragments = Vec::new();
            if let Some(range) = blocks.template {
                let located = template::locate(&content[range.clone()], range.start).map_err(
                    |e| ExtractError::TemplateParse {
                        file: path.to_string(),
                        offset: range.start + e.offset,
                        detail: e.message,
                    },
                )?;
                fragments.extend(located);
            }
            if let Some(range) = blocks.script {
                let located = script::locate(&content[range.clone()], range.start, path)
                    .map_err(|e| ExtractError::ScriptParse {
                        file: path.to_string(),
                        detail: e.to_string(),
                    })?;
                fragments.extend(located);
            }
            Ok(fragments)
        }
        Some(Dialect::JavaScript | Dialect::TypeScript) => script::locate(content, 0, path)
            .map_err(|e| ExtractError::ScriptParse {
                file: path.to_string(),
                detail: e.to_string(),
            }),
        None => Ok(Vec::new()),
    }
}

/// Outcome of a batch run. `errors` holds per-file failures; the batch
/// itself always completes.
#[derive(Debug)]
pub struct Extraction {
    pub reports: Vec<FileReport>,
    pub errors: Vec<ExtractError>,
    pub scanned: usize,
    /// Paths the directory scan could not access. Always zero for
    /// `extract_all`, which takes an explicit file list.
    pub skipped: usize,
}

/// Batch extractor, configured once and reusable across runs.
pub struct Extractor {
    config: Config,
}

impl Extractor {
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Extract from an explicit file list.
    ///
    /// Files are processed in parallel; per-file work shares no state.
    /// Results come back in file-path order so output is deterministic.
    /// A file that cannot be read yields nothing, a file that fails to
    /// parse is recorded as an error, and files without findings are
    /// omitted entirely.
    pub fn extract_all(&self, files: &[String]) -> Extraction {
        let mut results: Vec<(String, Result<Vec<TextFragment>, ExtractError>)> = files
            .par_iter()
            .map(|path| {
                let result = match fs::read_to_string(path) {
                    Ok(content) => extract_file(path, &content),
                    // a missing or unreadable file is not an extraction failure
                    Err(_) => Ok(Vec::new()),
                };
                (path.clone(), result)
            })
            .collect();
        results.sort_by(|(a, _), (b, _)| a.cmp(b));

        let scanned = results.len();
        let mut reports = Vec::new();
        let mut errors = Vec::new();
        for (path, result) in results {
            match result {
                Ok(fragments) if fragments.is_empty() => {}
                Ok(mut fragments) => {
                    // replacement order: descending start, so rewriting from
                    // the front of the list never shifts a later fragment.
                    // sort_by is stable, equal starts keep discovery order.
                    fragments.sort_by(|a, b| b.range.start.cmp(&a.range.start));
                    reports.push(FileReport {
                        file_path: path,
                        fragments,
                    });
                }
                Err(err) => errors.push(err),
            }
        }

        Extraction {
            reports,
            errors,
            scanned,
            skipped: 0,
        }
    }

    /// Scan a directory tree for candidate files and extract from all of
    /// them, honoring the configured ignore rules.
    pub fn extract_dir(&self, root: &Path, verbose: bool) -> Extraction {
        let scan = scan_files(
            root,
            &self.config.ignore_dirs,
            &self.config.ignore_files,
            verbose,
        );
        let mut files: Vec<String> = scan.files.into_iter().collect();
        files.sort();
        Extraction {
            skipped: scan.skipped_count,
            ..self.extract_all(&files)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use super::*;

    const VUE_SOURCE: &str = "<template>\n  <div title=\"标题\">正文{{ n }}条</div>\n</template>\n<script>\nexport default { data: () => ({ msg: \"消息\" }) };\n</script>\n";

    #[test]
    fn test_dialect_from_path() {
        assert_eq!(Dialect::from_path("a/b.vue"), Some(Dialect::Vue));
        assert_eq!(Dialect::from_path("a.js"), Some(Dialect::JavaScript));
        assert_eq!(Dialect::from_path("a.jsx"), Some(Dialect::JavaScript));
        assert_eq!(Dialect::from_path("a.ts"), Some(Dialect::TypeScript));
        assert_eq!(Dialect::from_path("a.tsx"), Some(Dialect::TypeScript));
        assert_eq!(Dialect::from_path("a.css"), None);
        assert_eq!(Dialect::from_path("Makefile"), None);
    }

    #[test]
    fn test_extract_vue_file_is_file_global() {
        let fragments = extract_file("app.vue", VUE_SOURCE).expect("extract failed");
        let mut found: Vec<&str> = fragments.iter().map(|f| f.text.as_str()).collect();
        found.sort();
        assert_eq!(found, vec!["条", "标题", "正文", "消息"]);

        // every segmented fragment addresses the original file exactly
        for fragment in &fragments {
            if !fragment.is_attribute && fragment.text.len() == fragment.range.len() {
                assert_eq!(&VUE_SOURCE[fragment.range.clone()], fragment.text);
            }
        }

        // template fragments precede script fragments, no cross-region sort
        let first_script = fragments.iter().position(|f| !f.is_template).unwrap();
        assert!(fragments[..first_script].iter().all(|f| f.is_template));
        assert!(fragments[first_script..].iter().all(|f| !f.is_template));
    }

    #[test]
    fn test_extract_unknown_extension_yields_nothing() {
        assert!(extract_file("style.css", ".a { content: \"中文\"; }")
            .expect("extract failed")
            .is_empty());
    }

    #[test]
    fn test_broken_template_is_fatal_for_the_file() {
        let source = "<template><div>文</template>\n";
        let err = extract_file("broken.vue", source).unwrap_err();
        assert!(matches!(err, ExtractError::TemplateParse { .. }));
        assert!(err.to_string().contains("broken.vue"));
    }

    #[test]
    fn test_batch_skips_clean_and_broken_files() {
        let dir = tempdir().unwrap();
        let good = dir.path().join("good.vue");
        let clean = dir.path().join("clean.ts");
        let broken = dir.path().join("broken.vue");
        fs::write(&good, VUE_SOURCE).unwrap();
        fs::write(&clean, "const a = \"ascii only\";\n").unwrap();
        fs::write(&broken, "<template><div>文</template>\n").unwrap();

        let files: Vec<String> = [&good, &clean, &broken]
            .iter()
            .map(|p| p.to_string_lossy().to_string())
            .collect();
        let extraction = Extractor::new(&Config::default()).extract_all(&files);

        // the broken file is reported but does not stop the batch
        assert_eq!(extraction.errors.len(), 1);
        assert_eq!(extraction.reports.len(), 1);
        assert!(extraction.reports[0].file_path.ends_with("good.vue"));
        assert_eq!(extraction.scanned, 3);
    }

    #[test]
    fn test_batch_fragments_sorted_descending() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("app.vue");
        fs::write(&file, VUE_SOURCE).unwrap();

        let files = vec![file.to_string_lossy().to_string()];
        let extraction = Extractor::new(&Config::default()).extract_all(&files);
        assert_eq!(extraction.reports.len(), 1);

        let starts: Vec<usize> = extraction.reports[0]
            .fragments
            .iter()
            .map(|f| f.range.start)
            .collect();
        for pair in starts.windows(2) {
            assert!(pair[0] >= pair[1], "fragments not in descending order");
        }
    }

    #[test]
    fn test_missing_file_yields_no_report_and_no_error() {
        let extraction =
            Extractor::new(&Config::default()).extract_all(&["/no/such/file.vue".to_string()]);
        assert!(extraction.reports.is_empty());
        assert!(extraction.errors.is_empty());
        assert_eq!(extraction.scanned, 1);
    }
}
