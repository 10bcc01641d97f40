use std::fs;
use std::path::Path;
use std::process;

use log::{error, info, warn};

use crate::config::SiteConfig;
use crate::loaders::Section;

/// Run all boot checks before anything loads. Verifies the content tree
/// when serving from disk, makes sure the output directory exists, and
/// aborts when the setup cannot possibly produce a page.
pub fn run(config: &SiteConfig) {
    info!("folio boot check starting...");

    let mut warnings = 0u32;
    let mut errors = 0u32;

    // ── 1. Content tree (disk sources only) ─────────────
    if config.base_url.is_none() {
        let root = Path::new(&config.content_dir);
        if !root.is_dir() {
            error!("  MISSING content directory: {}", config.content_dir);
            errors += 1;
        } else {
            for section in Section::all() {
                if !root.join(section.config_path()).exists() {
                    warn!(
                        "  Missing config for {} section: {} (section will show its fallback)",
                        section.name(),
                        section.config_path()
                    );
                    warnings += 1;
                }
            }
        }
    }

    // ── 2. Output directory ─────────────────────────────
    if let Some(parent) = Path::new(&config.output).parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            match fs::create_dir_all(parent) {
                Ok(_) => info!("  Created output directory: {}", parent.display()),
                Err(e) => {
                    error!("  FAILED to create output directory {}: {}", parent.display(), e);
                    errors += 1;
                }
            }
        }
    }

    // ── 3. Preferences file writable ────────────────────
    let prefs_path = Path::new(&config.prefs_file);
    if let Some(parent) = prefs_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            warn!(
                "  Preferences directory missing: {} (theme will not persist)",
                parent.display()
            );
            warnings += 1;
        }
    }

    // ── Summary ─────────────────────────────────────────
    if errors > 0 {
        error!(
            "Boot check FAILED: {} error(s), {} warning(s). Aborting.",
            errors, warnings
        );
        process::exit(1);
    }

    if warnings > 0 {
        warn!(
            "Boot check passed with {} warning(s). Some sections may show fallbacks.",
            warnings
        );
    } else {
        info!("Boot check passed. All systems go.");
    }
}
