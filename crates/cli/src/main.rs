#![deny(unsafe_code)]
//! CLI binary for the ChromaVault color tool.
//!
//! Subcommands:
//! - `convert <color>`: print a color in every notation, or one of them
//! - `name <hex>`: look up a color's table name
//! - `gradient`: render the saturation/value plane or hue strip to PNG
//! - `library add|list|merge`: manage exported library files

mod error;

use chromavault_core::{color_name, format_color, formats, normalize_hex, parse_color, Format, Library};
use chromavault_render::{hue_strip, saturation_plane, snapshot::write_png};
use clap::{Parser, Subcommand, ValueEnum};
use error::CliError;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "chromavault", about = "Color conversion and library tool")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Log debug events to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show a color (hex, rgb(), hsl() or hsv()) in every notation.
    Convert {
        color: String,

        /// Print only this notation (hex, rgb, hsl, lab, lch).
        #[arg(short, long)]
        format: Option<String>,
    },
    /// Print the table name of a hex color, or "Custom".
    Name { hex: String },
    /// Render a picker surface to a PNG file.
    Gradient {
        #[arg(long, value_enum, default_value_t = GradientKind::Sv)]
        kind: GradientKind,

        /// Hue of the saturation/value plane, in degrees.
        #[arg(long, default_value_t = 0.0)]
        hue: f64,

        /// Image width in pixels.
        #[arg(short = 'W', long, default_value_t = 256)]
        width: usize,

        /// Image height in pixels.
        #[arg(short = 'H', long, default_value_t = 256)]
        height: usize,

        /// Output file path.
        #[arg(short, long, default_value = "gradient.png")]
        output: PathBuf,
    },
    /// Work with library export files.
    #[command(subcommand)]
    Library(LibraryCommand),
}

#[derive(Subcommand)]
enum LibraryCommand {
    /// Save a color into a library file, creating it if needed.
    Add {
        file: PathBuf,
        color: String,

        /// Display name; defaults to the color's table name.
        #[arg(short, long)]
        name: Option<String>,
    },
    /// List the colors in a library file.
    List {
        file: PathBuf,

        /// Case-insensitive substring of the hex or name.
        #[arg(short, long)]
        filter: Option<String>,
    },
    /// Combine library files into one, dropping repeated hex values.
    Merge {
        output: PathBuf,

        #[arg(required = true)]
        inputs: Vec<PathBuf>,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, ValueEnum)]
enum GradientKind {
    /// Saturation/value plane for one hue.
    Sv,
    /// Full hue circle.
    Hue,
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Loads a library file into `library`. A missing file is an empty library.
fn load_library(library: &mut Library, path: &Path) -> Result<usize, CliError> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "library file not found, starting empty");
        return Ok(0);
    }
    let json = fs::read_to_string(path)?;
    Ok(library.import_json(&json)?)
}

fn store_library(library: &Library, path: &Path) -> Result<(), CliError> {
    fs::write(path, library.export_json()?)?;
    Ok(())
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Convert { color, format } => {
            let rgb = parse_color(&color)?;
            match format {
                Some(f) => {
                    let format: Format = f.parse()?;
                    let value = format_color(rgb, format);
                    if cli.json {
                        let info = serde_json::json!({ "format": format, "value": value });
                        println!("{}", serde_json::to_string_pretty(&info)?);
                    } else {
                        println!("{value}");
                    }
                }
                None => {
                    let all = formats(rgb);
                    if cli.json {
                        println!("{}", serde_json::to_string_pretty(&all)?);
                    } else {
                        println!("name: {}", all.name);
                        for format in Format::ALL {
                            println!("{format}: {}", all.get(format));
                        }
                    }
                }
            }
        }
        Command::Name { hex } => {
            let canonical =
                normalize_hex(&hex).ok_or_else(|| CliError::Input(format!("invalid hex color: '{hex}'")))?;
            let name = color_name(&canonical);
            if cli.json {
                let info = serde_json::json!({ "hex": canonical, "name": name });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("{name}");
            }
        }
        Command::Gradient {
            kind,
            hue,
            width,
            height,
            output,
        } => {
            let rgba = match kind {
                GradientKind::Sv => saturation_plane(hue, width, height)?,
                GradientKind::Hue => hue_strip(width, height)?,
            };
            write_png(rgba, width, height, &output)?;

            if cli.json {
                let info = serde_json::json!({
                    "kind": format!("{kind:?}").to_lowercase(),
                    "hue": hue,
                    "width": width,
                    "height": height,
                    "output": output.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!("rendered {kind:?} gradient ({width}x{height}) -> {}", output.display());
            }
        }
        Command::Library(cmd) => run_library(cmd, cli.json)?,
    }

    Ok(())
}

fn run_library(cmd: LibraryCommand, json: bool) -> Result<(), CliError> {
    let now = now_ms();
    let mut library = Library::new(now);

    match cmd {
        LibraryCommand::Add { file, color, name } => {
            let rgb = parse_color(&color)?;
            load_library(&mut library, &file)?;
            let saved = library.save(rgb, name.as_deref(), now)?.clone();
            store_library(&library, &file)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&saved)?);
            } else {
                eprintln!("saved {} ({}) -> {}", saved.hex, saved.name, file.display());
            }
        }
        LibraryCommand::List { file, filter } => {
            if !file.exists() {
                return Err(CliError::Io(format!("no such library file: {}", file.display())));
            }
            load_library(&mut library, &file)?;
            let colors = library.filter(filter.as_deref().unwrap_or(""));

            if json {
                println!("{}", serde_json::to_string_pretty(&colors)?);
            } else {
                for c in colors {
                    println!("{}  {}", c.hex, c.name);
                }
            }
        }
        LibraryCommand::Merge { output, inputs } => {
            for input in &inputs {
                if !input.exists() {
                    return Err(CliError::Io(format!("no such library file: {}", input.display())));
                }
                let added = load_library(&mut library, input)?;
                tracing::debug!(input = %input.display(), added, "merged library file");
            }
            store_library(&library, &output)?;

            if json {
                let info = serde_json::json!({
                    "output": output.display().to_string(),
                    "inputs": inputs.len(),
                    "colors": library.len(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "merged {} files ({} colors) -> {}",
                    inputs.len(),
                    library.len(),
                    output.display()
                );
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
