use crate::color::Rgba;
use crate::config::load_config;
use crate::render::{render_svg, write_output_svg};
use crate::scene::Scene;
use anyhow::{Context, Result};
use clap::Parser;
use log::{LevelFilter, Log, Metadata, Record};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "zsvg", version, about = "Serialize a barcode vector scene to SVG 1.1")]
pub struct Args {
    /// Scene file (.json / .json5) or '-' for stdin
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output SVG file. Defaults to stdout if omitted.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Config JSON file (font assets, default colors)
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Foreground color (RRGGBB, RRGGBBAA or C,M,Y,K)
    #[arg(long = "fg")]
    pub foreground: Option<Rgba>,

    /// Background color (RRGGBB, RRGGBBAA or C,M,Y,K)
    #[arg(long = "bg")]
    pub background: Option<Rgba>,

    /// Embed the text font in the SVG
    #[arg(long = "embed-font")]
    pub embed_font: bool,

    /// Bold text (ignored for EAN/UPC)
    #[arg(long = "bold")]
    pub bold: bool,

    /// Log debug details to stderr
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level().as_str().to_lowercase(), record.args());
        }
    }

    fn flush(&self) {}
}

fn init_logging(verbose: bool) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(if verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        });
    }
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = load_config(args.config.as_deref())?;
    let fonts = config.load_fonts(args.config.as_deref().and_then(Path::parent))?;

    let input = read_input(args.input.as_deref())?;
    let mut scene = parse_scene(&input)?;

    if let Some(fg) = args.foreground.or(config.foreground) {
        scene.foreground = fg;
    }
    if let Some(bg) = args.background.or(config.background) {
        scene.background = bg;
    }
    scene.embed_font |= args.embed_font || config.embed_font;
    scene.bold |= args.bold || config.bold;

    let svg = render_svg(&scene, &fonts)
        .map_err(|err| anyhow::anyhow!("{err} (code {})", err.code()))?;
    write_output_svg(&svg, args.output.as_deref())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    if let Some(path) = path {
        if path != Path::new("-") {
            return std::fs::read_to_string(path)
                .with_context(|| format!("failed to read scene {}", path.display()));
        }
    }
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

fn parse_scene(input: &str) -> Result<Scene> {
    match serde_json::from_str::<Scene>(input) {
        Ok(scene) => Ok(scene),
        Err(json_err) => json5::from_str::<Scene>(input)
            .map_err(|_| anyhow::Error::new(json_err).context("invalid scene")),
    }
}
