use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use site::Page;
use site::render::{self, PageShell};

use crate::config::SiteConfig;
use crate::error::CliError;

/// Render one page as a full HTML document using the site settings.
pub fn page_html(page: &dyn Page, config: &SiteConfig) -> String {
    let shell = PageShell::new(config.page_title(page.title())).with_lang(config.lang.as_str());
    render::html_page(&page.render(), &shell)
}

/// Write `<out_dir>/<route>/index.html` for every page. Returns the written paths.
pub fn write_pages(
    pages: &[&dyn Page],
    out_dir: &Path,
    config: &SiteConfig,
) -> Result<Vec<PathBuf>, CliError> {
    let mut written = Vec::with_capacity(pages.len());

    for page in pages {
        let dir = out_dir.join(page.route());
        fs::create_dir_all(&dir).map_err(|source| CliError::Write {
            path: dir.clone(),
            source,
        })?;

        let path = dir.join("index.html");
        fs::write(&path, page_html(*page, config)).map_err(|source| CliError::Write {
            path: path.clone(),
            source,
        })?;
        info!("wrote /{} to {}", page.route(), path.display());
        written.push(path);
    }

    Ok(written)
}
