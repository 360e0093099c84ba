//! Moves enum imports from the ORM client package to the constants module.
//!
//! Frontend and shared code used to import enumerations such as `Role` from the generated
//! ORM client. Those names now live in a standalone constants module, so every
//! `import { ... } from '<client module>'` statement is split: enumeration names move to
//! an import from the constants module and everything else stays where it was.
//!
//! Rewriting is idempotent. A rewritten client import no longer names any enumeration, so
//! a second pass leaves the file untouched.

use std::{
    fs, io,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use regex::{Captures, Regex};
use thiserror::Error;
use walkdir::{DirEntry, WalkDir};

use crate::model::constants::ENUM_NAMES;

pub const DEFAULT_CLIENT_MODULE: &str = "@prisma/client";
pub const DEFAULT_CONSTANTS_MODULE: &str = "@shared/constants";

/// Directories never descended into: dependency caches, VCS metadata and build output.
pub const SKIPPED_DIRS: &[&str] = &["node_modules", ".git", "dist", "build", "target"];

/// Extensions of the files that are rewritten.
pub const SOURCE_EXTENSIONS: &[&str] = &["ts", "tsx", "js", "jsx", "mts", "cts"];

// A named import list, optionally `import type` or preceded by a default binding,
// spanning any number of lines. The statement starts a line or follows a `;`. A trailing
// semicolon is left out of the match so consecutive statements on one line all match.
static IMPORT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?m)(?P<lead>^[ \t]*|;[ \t]*)import[ \t]+(?P<kind>type[ \t]+)?(?:(?P<default>[A-Za-z_$][\w$]*)[ \t]*,[ \t]*)?\{(?P<names>[^}]*)\}[ \t]*from[ \t]*(?P<quote>['"])(?P<module>[^'"\r\n]+)['"]"#,
    )
    .expect("import pattern is valid")
});

#[derive(Error, Debug)]
pub enum ImportFixError {
    #[error("Failed to walk directory tree: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Clone, Debug)]
pub struct RewriteOptions {
    /// Package the enumerations are moved away from
    pub client_module: String,
    /// Module the enumerations are imported from afterwards
    pub constants_module: String,
    /// Names treated as enumerations
    pub enum_names: Vec<String>,
    /// Report changes without writing files
    pub dry_run: bool,
}

impl Default for RewriteOptions {
    fn default() -> Self {
        Self {
            client_module: DEFAULT_CLIENT_MODULE.to_string(),
            constants_module: DEFAULT_CONSTANTS_MODULE.to_string(),
            enum_names: ENUM_NAMES.iter().map(|name| name.to_string()).collect(),
            dry_run: false,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RewriteReport {
    /// Source files read
    pub scanned: usize,
    /// Files whose imports changed, in walk order
    pub rewritten: Vec<PathBuf>,
}

/// Rewrites every client import in `source` that names an enumeration.
///
/// Returns `None` when the source has nothing to rewrite.
pub fn rewrite_source(source: &str, options: &RewriteOptions) -> Option<String> {
    let mut changed = false;

    let rewritten = IMPORT_RE.replace_all(source, |caps: &Captures| {
        if &caps["module"] != options.client_module {
            return caps[0].to_string();
        }

        let (enums, others) = partition_specifiers(&caps["names"], options);
        if enums.is_empty() {
            return caps[0].to_string();
        }
        changed = true;

        let lead = &caps["lead"];
        let kind = if caps.name("kind").is_some() { "type " } else { "" };
        let quote = &caps["quote"];
        let terminated = caps.get(0).is_some_and(|whole| {
            source[whole.end()..]
                .trim_start_matches([' ', '\t'])
                .starts_with(';')
        });

        let mut statements = Vec::with_capacity(2);
        match (caps.name("default"), others.is_empty()) {
            (Some(default), true) => statements.push(format!(
                "import {kind}{} from {quote}{}{quote}",
                default.as_str(),
                options.client_module,
            )),
            (Some(default), false) => statements.push(format!(
                "import {kind}{}, {{ {} }} from {quote}{}{quote}",
                default.as_str(),
                others.join(", "),
                options.client_module,
            )),
            (None, false) => statements.push(format!(
                "import {kind}{{ {} }} from {quote}{}{quote}",
                others.join(", "),
                options.client_module,
            )),
            (None, true) => {}
        }
        statements.push(format!(
            "import {kind}{{ {} }} from {quote}{}{quote}",
            enums.join(", "),
            options.constants_module,
        ));

        // The original statement's semicolon still follows the last statement.
        let separator = match (lead.starts_with(';'), terminated) {
            (false, true) => format!(";\n{lead}"),
            (false, false) => format!("\n{lead}"),
            (true, true) => "; ".to_string(),
            (true, false) => "\n".to_string(),
        };

        format!("{lead}{}", statements.join(&separator))
    });

    changed.then(|| rewritten.into_owned())
}

/// Splits an import list into (enumeration specifiers, other specifiers).
///
/// Membership is decided on the imported name, so `Role as UserRole` counts as `Role`.
fn partition_specifiers<'s>(
    names: &'s str,
    options: &RewriteOptions,
) -> (Vec<&'s str>, Vec<&'s str>) {
    names
        .split(',')
        .map(str::trim)
        .filter(|specifier| !specifier.is_empty())
        .partition(|specifier| {
            let imported = specifier
                .strip_prefix("type ")
                .unwrap_or(*specifier)
                .split_whitespace()
                .next()
                .unwrap_or_default();

            options.enum_names.iter().any(|name| name == imported)
        })
}

/// Rewrites every source file under `root`.
///
/// Files that are not valid UTF-8 are skipped with a warning. With
/// [`RewriteOptions::dry_run`] set nothing is written but the report is the same.
pub fn rewrite_tree(root: &Path, options: &RewriteOptions) -> Result<RewriteReport, ImportFixError> {
    let mut report = RewriteReport::default();

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_skipped_dir(entry));

    for entry in walker {
        let entry = entry?;
        let path = entry.path();
        if !entry.file_type().is_file() || !is_source_file(path) {
            continue;
        }

        let source = match fs::read_to_string(path) {
            Ok(source) => source,
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                tracing::warn!(path = %path.display(), "skipping file that is not valid UTF-8");
                continue;
            }
            Err(source) => {
                return Err(ImportFixError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        report.scanned += 1;

        let Some(rewritten) = rewrite_source(&source, options) else {
            continue;
        };

        if !options.dry_run {
            fs::write(path, rewritten).map_err(|source| ImportFixError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        }

        tracing::info!(path = %path.display(), dry_run = options.dry_run, "rewrote enum imports");
        report.rewritten.push(path.to_path_buf());
    }

    Ok(report)
}

fn is_skipped_dir(entry: &DirEntry) -> bool {
    // The root itself is always walked, whatever its name.
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| SKIPPED_DIRS.contains(&name))
}

fn is_source_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext))
}
