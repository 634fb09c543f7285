use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use goldframe::catalog::{catalog, CatalogListing, MockupSet};
use goldframe::error_codes::{find_coded_error, USAGE_EXIT_CODE};
use goldframe::fonts::{FontSearch, FontSet};
use goldframe::logging::{init_logging, LoggingConfig};
use goldframe::palette::Palette;
use goldframe::render::{prepare_out_dir, write_mockup};
use goldframe::text::TextPainter;

#[derive(Debug, Parser)]
#[command(name = "goldframe")]
#[command(about = "Render dark/gold code editor mockups with seeded procedural textures")]
#[command(version = env!("GOLDFRAME_LONG_VERSION"))]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Render mockup sets to PNG (every set when none is named).
    Render {
        sets: Vec<String>,
        #[arg(short = 'o', long = "out-dir", default_value = ".")]
        out_dir: PathBuf,
        /// Skip system font discovery and use the built-in bitmap font.
        #[arg(long)]
        builtin_font: bool,
    },
    /// List the mockup catalogue.
    List {
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    init_logging(LoggingConfig::default());
    let cli = Cli::parse();

    let outcome = match cli.command {
        None => run_render(&[], Path::new("."), false),
        Some(Commands::Render {
            sets,
            out_dir,
            builtin_font,
        }) => run_render(&sets, &out_dir, builtin_font),
        Some(Commands::List { json }) => run_list(json),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => report(&error),
    }
}

fn report(error: &anyhow::Error) -> ExitCode {
    if let Some(coded) = find_coded_error(error) {
        match serde_json::to_string_pretty(&coded.envelope()) {
            Ok(json) => eprintln!("{json}"),
            Err(_) => eprintln!("{coded}"),
        }
        return ExitCode::from(USAGE_EXIT_CODE as u8);
    }
    eprintln!("error: {error:#}");
    ExitCode::FAILURE
}

fn run_render(names: &[String], out_dir: &Path, builtin_font: bool) -> Result<()> {
    let sets = if names.is_empty() {
        MockupSet::all().to_vec()
    } else {
        names
            .iter()
            .map(|name| MockupSet::from_keyword(name))
            .collect::<Result<Vec<_>>>()?
    };

    let fonts = if builtin_font {
        FontSet::builtin()
    } else {
        FontSet::load(&FontSearch::system())
    };
    log::info!("using {:?} fonts", fonts.origin());
    let mut painter = TextPainter::new(fonts);

    prepare_out_dir(out_dir)?;
    for set in sets {
        let specs = set.mockups();
        log::info!("rendering {} mockup(s) for set '{}'", specs.len(), set.keyword());
        for spec in &specs {
            let rendered = write_mockup(spec, &mut painter, out_dir)
                .with_context(|| format!("failed to render set '{}'", set.keyword()))?;
            println!("{}", rendered.confirmation());
        }
    }
    Ok(())
}

fn run_list(json: bool) -> Result<()> {
    if json {
        let listing = CatalogListing::new(&Palette::dark_gold());
        let text = serde_json::to_string_pretty(&listing).context("failed to encode catalogue")?;
        println!("{text}");
        return Ok(());
    }
    for entry in catalog() {
        println!("{}:", entry.set.keyword());
        for spec in entry.mockups {
            println!(
                "  {}  seed={}  texture={}",
                spec.file_name,
                spec.seed,
                spec.texture.keyword()
            );
        }
    }
    Ok(())
}
