mod config;
mod error;
mod export;
mod logging;

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term;
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream};
use log::info;

use site::parser::ParseError;
use site::render::{self, PageShell};
use site::{Document, pages};

use crate::config::SiteConfig;
use crate::error::CliError;

#[derive(Parser)]
#[command(name = "site", version, about = "Personal site page renderer")]
struct Cli {
    /// Disable colored diagnostic output
    #[arg(long, global = true)]
    no_color: bool,

    /// Raise log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print a page to stdout
    Render(RenderArgs),

    /// Write every page to the output directory
    Build(BuildArgs),

    /// Parse and validate Markdown page sources
    Check(CheckArgs),

    /// List mounted pages
    Routes,
}

#[derive(clap::Args)]
struct RenderArgs {
    /// Route of the page to render
    #[arg(default_value = "about")]
    route: String,

    #[arg(short, long, value_enum, default_value_t = Format::Html)]
    format: Format,

    /// Render this Markdown file instead of a mounted page
    #[arg(long)]
    source: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// HTML fragment
    Html,
    /// Standalone HTML document
    Page,
    Markdown,
}

#[derive(clap::Args)]
struct BuildArgs {
    /// Path to site.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output directory, overriding `out_dir` from the config
    #[arg(short, long)]
    out: Option<PathBuf>,
}

#[derive(clap::Args)]
struct CheckArgs {
    /// Markdown page sources
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let _logger = match logging::init(cli.verbose) {
        Ok(handle) => handle,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };

    let color_choice = if cli.no_color {
        ColorChoice::Never
    } else {
        ColorChoice::Auto
    };

    let result = match cli.command {
        Command::Render(args) => do_render(args, color_choice),
        Command::Build(args) => do_build(args),
        Command::Check(args) => do_check(args, color_choice),
        Command::Routes => {
            for page in pages::all() {
                println!("{}\t{}", page.route(), page.title());
            }
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn do_render(args: RenderArgs, color_choice: ColorChoice) -> Result<(), CliError> {
    let (document, title) = match &args.source {
        Some(path) => {
            let mut files = SimpleFiles::new();
            let document = load_source(path, &mut files, color_choice)?
                .ok_or_else(|| CliError::InvalidSource { path: path.clone() })?;
            let title = document.headings().next().unwrap_or_default().to_string();
            (document, title)
        }
        None => {
            let page = pages::find(&args.route)
                .ok_or_else(|| CliError::UnknownRoute(args.route.clone()))?;
            (page.render(), page.title().to_string())
        }
    };

    match args.format {
        Format::Html => print!("{}", render::html(&document)),
        Format::Page => {
            let config = SiteConfig::load(None)?;
            let shell = PageShell::new(config.page_title(&title)).with_lang(config.lang.as_str());
            print!("{}", render::html_page(&document, &shell));
        }
        Format::Markdown => print!("{}", document),
    }
    Ok(())
}

fn do_build(args: BuildArgs) -> Result<(), CliError> {
    let config = SiteConfig::load(args.config.as_deref())?;
    let out_dir = args.out.unwrap_or_else(|| config.out_dir.clone());

    let written = export::write_pages(pages::all(), &out_dir, &config)?;
    for path in &written {
        println!("{}", path.display());
    }
    info!("built {} pages into {}", written.len(), out_dir.display());
    Ok(())
}

fn do_check(args: CheckArgs, color_choice: ColorChoice) -> Result<(), CliError> {
    let mut files = SimpleFiles::new();
    let mut failed = 0;

    for path in &args.files {
        match load_source(path, &mut files, color_choice)? {
            Some(document) => eprintln!(
                "ok: {} ({} blocks, {} links)",
                path.display(),
                document.blocks().len(),
                document.links().count()
            ),
            None => failed += 1,
        }
    }

    if failed > 0 {
        return Err(CliError::CheckFailed {
            failed,
            total: args.files.len(),
        });
    }
    Ok(())
}

/// Read, parse and validate a Markdown page, printing diagnostics to stderr.
/// Returns `None` when the source has errors.
fn load_source(
    path: &Path,
    files: &mut SimpleFiles<String, String>,
    color_choice: ColorChoice,
) -> Result<Option<Document>, CliError> {
    let source = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let file_id = files.add(path.display().to_string(), source.clone());

    let writer = StandardStream::stderr(color_choice);
    let config = term::Config::default();

    let parsed = match site::parser::Parser::new(source, file_id).parse() {
        Ok(parsed) => parsed,
        Err(errors) => {
            emit_diagnostics(&writer, &config, files, &errors);
            return Ok(None);
        }
    };
    emit_diagnostics(&writer, &config, files, &parsed.warnings);

    if let Err(errors) = parsed.document.validate() {
        for error in errors {
            eprintln!("error: {}: {}", path.display(), error);
        }
        return Ok(None);
    }

    Ok(Some(parsed.document))
}

fn emit_diagnostics(
    writer: &StandardStream,
    config: &term::Config,
    files: &SimpleFiles<String, String>,
    diagnostics: &[ParseError],
) {
    for diag in diagnostics {
        let _ = term::emit_to_write_style(&mut writer.lock(), config, files, &diag.to_diagnostic());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn render_defaults_to_about_html() {
        let cli = Cli::parse_from(["site", "render"]);
        let Command::Render(args) = cli.command else {
            panic!("expected render");
        };
        assert_eq!(args.route, "about");
        assert!(matches!(args.format, Format::Html));
        assert!(args.source.is_none());
    }

    #[test]
    fn load_source_accepts_valid_page() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("about.md");
        std::fs::write(&path, site::pages::about::about().to_string()).unwrap();

        let mut files = SimpleFiles::new();
        let document = load_source(&path, &mut files, ColorChoice::Never).unwrap();
        assert_eq!(document, Some(site::pages::about::about()));
    }

    #[test]
    fn load_source_rejects_lists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.md");
        std::fs::write(&path, "# Bad\n\n- one\n- two\n").unwrap();

        let mut files = SimpleFiles::new();
        let document = load_source(&path, &mut files, ColorChoice::Never).unwrap();
        assert!(document.is_none());
    }

    #[test]
    fn check_counts_failures() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.md");
        let bad = dir.path().join("bad.md");
        std::fs::write(&good, "# Hi\n\nHello [there](https://example.org).\n").unwrap();
        std::fs::write(&bad, "```\ncode\n```\n").unwrap();

        let err = do_check(
            CheckArgs {
                files: vec![good, bad],
            },
            ColorChoice::Never,
        )
        .unwrap_err();
        assert!(matches!(err, CliError::CheckFailed { failed: 1, total: 2 }));
    }

    #[test]
    fn unknown_route_is_reported() {
        let args = RenderArgs {
            route: "blog".to_string(),
            format: Format::Html,
            source: None,
        };
        let err = do_render(args, ColorChoice::Never).unwrap_err();
        assert_eq!(err.to_string(), "no page is mounted at 'blog'");
    }
}
