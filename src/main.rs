use clap::{Parser, Subcommand, ValueEnum};
use readydeck::render::deck::DeckRenderer;
use readydeck::render::document::DocumentRenderer;
use readydeck::theme::{self, Theme};
use readydeck::types::ReportContent;
use readydeck::{domain, generate, html, output};
use std::path::{Path, PathBuf};

/// Which report the pipeline produces. The kind picks both the generator
/// and the renderer: the long-form report flows, the briefing is a deck.
#[derive(ValueEnum, Clone, Copy, Debug)]
enum Kind {
    /// Long-form readiness assessment document
    Report,
    /// Five-slide executive briefing
    Briefing,
}

impl Kind {
    fn label(self) -> &'static str {
        match self {
            Kind::Report => "Readiness report",
            Kind::Briefing => "Executive briefing",
        }
    }

    fn content_file(self) -> &'static str {
        match self {
            Kind::Report => "report-content.json",
            Kind::Briefing => "briefing-content.json",
        }
    }

    fn pages_file(self) -> &'static str {
        match self {
            Kind::Report => "report-pages.json",
            Kind::Briefing => "briefing-pages.json",
        }
    }

    fn preview_file(self) -> &'static str {
        match self {
            Kind::Report => "report-preview.html",
            Kind::Briefing => "briefing-preview.html",
        }
    }
}

/// Shared flags for commands that render pages.
#[derive(clap::Args, Clone)]
struct RenderArgs {
    /// Which report kind to produce
    #[arg(long, value_enum, default_value = "report")]
    kind: Kind,

    /// Also write an HTML preview next to the pages manifest
    #[arg(long)]
    preview: bool,
}

#[derive(Parser)]
#[command(name = "readydeck")]
#[command(about = "Readiness reports and executive briefings from assessment data")]
#[command(long_about = "\
Readiness reports and executive briefings from assessment data

Assessment JSON is the data source: an overall feasibility score with
per-domain sub-scores, classified risks, ROI figures, and a phase
timeline. The pipeline turns it into paginated output in two stages:

  1. content   assessment.json  →  content manifest (sections + blocks)
  2. render    content manifest →  pages manifest (+ optional HTML preview)

Two report kinds exist:

  report       Long-form assessment document (flowing pages)
  briefing     Five-slide executive briefing (fixed deck)

Presentation is themed via theme.toml; run 'readydeck gen-theme' to print
a documented stock theme.")]
#[command(version)]
struct Cli {
    /// Assessment data file
    #[arg(long, default_value = "assessment.json", global = true)]
    input: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Directory for intermediate manifests
    #[arg(long, default_value = ".readydeck-temp", global = true)]
    temp_dir: PathBuf,

    /// Theme file (stock theme when omitted)
    #[arg(long, global = true)]
    theme: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate the content manifest from assessment data
    Content {
        /// Which report kind to produce
        #[arg(long, value_enum, default_value = "report")]
        kind: Kind,
    },
    /// Render pages from an existing content manifest
    Render(RenderArgs),
    /// Run the full pipeline: content → render
    Build(RenderArgs),
    /// Validate assessment data and theme without writing output
    Check,
    /// Print a stock theme.toml with all options documented
    GenTheme,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    match &cli.command {
        Command::Content { kind } => {
            let tree = generate_content(&cli, *kind)?;
            output::print_content_output(&tree);
        }
        Command::Render(args) => {
            let content_path = cli.temp_dir.join(args.kind.content_file());
            let raw = std::fs::read_to_string(&content_path)?;
            let tree: ReportContent = serde_json::from_str(&raw)?;
            let pages = render_pages(&cli, args, &tree)?;
            output::print_render_output(args.kind.label(), &pages);
        }
        Command::Build(args) => {
            println!("==> Stage 1: Generating content from {}", cli.input.display());
            let tree = generate_content(&cli, args.kind)?;
            output::print_content_output(&tree);

            println!("==> Stage 2: Rendering pages → {}", cli.output.display());
            let pages = render_pages(&cli, args, &tree)?;
            output::print_render_output(args.kind.label(), &pages);

            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.input.display());
            let data = domain::load_assessment(&cli.input)?;
            load_theme(&cli)?;
            let tree = generate::readiness_report(&data);
            output::print_content_output(&tree);
            println!("==> Assessment is valid");
        }
        Command::GenTheme => {
            print!("{}", theme::stock_theme_toml());
        }
    }

    Ok(())
}

/// Stage 1: load assessment data, generate the tree, persist the manifest.
fn generate_content(cli: &Cli, kind: Kind) -> Result<ReportContent, Box<dyn std::error::Error>> {
    let data = domain::load_assessment(&cli.input)?;
    let tree = match kind {
        Kind::Report => generate::readiness_report(&data),
        Kind::Briefing => generate::executive_briefing(&data),
    };
    std::fs::create_dir_all(&cli.temp_dir)?;
    let manifest_path = cli.temp_dir.join(kind.content_file());
    let json = serde_json::to_string_pretty(&tree)?;
    std::fs::write(&manifest_path, json)?;
    Ok(tree)
}

/// Stage 2: render the tree and persist pages (plus optional preview).
fn render_pages(
    cli: &Cli,
    args: &RenderArgs,
    tree: &ReportContent,
) -> Result<Vec<readydeck::render::Page>, Box<dyn std::error::Error>> {
    let theme = load_theme(cli)?;
    let pages = match args.kind {
        Kind::Report => DocumentRenderer::new(theme).render(tree),
        Kind::Briefing => DeckRenderer::new(theme).render(tree),
    };

    std::fs::create_dir_all(&cli.output)?;
    let pages_path = cli.output.join(args.kind.pages_file());
    let json = serde_json::to_string_pretty(&pages)?;
    std::fs::write(&pages_path, json)?;

    if args.preview {
        let preview_path = cli.output.join(args.kind.preview_file());
        let preview = html::render_preview(&pages, &tree.title);
        std::fs::write(&preview_path, preview)?;
        println!("Preview written to {}", preview_path.display());
    }
    Ok(pages)
}

/// Resolve the theme: an explicit file must load and validate; otherwise a
/// theme.toml next to the input is picked up, falling back to stock.
fn load_theme(cli: &Cli) -> Result<Theme, theme::ThemeError> {
    if let Some(path) = &cli.theme {
        return Theme::load(path);
    }
    let sibling = cli
        .input
        .parent()
        .unwrap_or(Path::new("."))
        .join("theme.toml");
    if sibling.is_file() {
        return Theme::load(&sibling);
    }
    Ok(Theme::default())
}
