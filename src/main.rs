mod canvas;
mod colors;
mod config;
mod geometry;
mod help;
mod settings;
mod studio;
mod terminal;

use clap::{Parser, Subcommand};
use config::{
    FractalKind, PaintConfig, PrintConfig, DEFAULT_DEPTH, DEFAULT_SIZE, DEPTH_MAX, DEPTH_MIN,
    SIZE_MAX, SIZE_MIN,
};
use settings::Settings;
use std::io;

#[derive(Parser)]
#[command(name = "fractalpaint")]
#[command(version = "0.1.0")]
#[command(about = "Terminal fractal studio: click the canvas to paint recursive fractals", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive studio (click the canvas to paint)
    Paint {
        /// Fractal painted on click: tree, spiral, koch, fern
        #[arg(short, long)]
        fractal: Option<String>,

        /// Recursion depth (1-9)
        #[arg(short, long)]
        depth: Option<u32>,

        /// Base size in canvas dots (40-220)
        #[arg(short, long)]
        size: Option<f64>,

        /// Animate each fractal segment by segment
        #[arg(short, long)]
        live: bool,

        /// Delay between animated segments in seconds
        #[arg(short, long, default_value = "0.01")]
        time: f32,

        /// Paint unattended at random positions
        #[arg(long)]
        demo: bool,

        /// Wait between demo paints in seconds
        #[arg(short, long, default_value = "1.5")]
        wait: f64,

        /// Random seed for demo mode
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Render one fractal to stdout and exit
    Print {
        /// Fractal to render: tree, spiral, koch, fern
        #[arg(short, long, default_value = "tree")]
        fractal: String,

        /// Recursion depth (1-9)
        #[arg(short, long, default_value = "6")]
        depth: u32,

        /// Base size in canvas dots (40-220)
        #[arg(short, long, default_value = "120")]
        size: f64,

        /// Canvas width in columns (defaults to the terminal width)
        #[arg(long)]
        width: Option<u16>,

        /// Canvas height in rows (defaults to the terminal height)
        #[arg(long)]
        height: Option<u16>,

        /// Palette slot (1-6)
        #[arg(short, long, default_value = "1")]
        color: usize,
    },
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    let settings = Settings::load();

    match cli.command {
        Commands::Paint {
            fractal,
            depth,
            size,
            live,
            time,
            demo,
            wait,
            seed,
        } => {
            let config = PaintConfig {
                kind: resolve_kind(fractal.as_deref(), settings.paint.fractal.as_deref()),
                depth: depth
                    .or(settings.paint.depth)
                    .unwrap_or(DEFAULT_DEPTH)
                    .clamp(DEPTH_MIN, DEPTH_MAX),
                size: size
                    .or(settings.paint.size)
                    .unwrap_or(DEFAULT_SIZE)
                    .clamp(SIZE_MIN, SIZE_MAX),
                live,
                time_step: time,
                demo,
                time_wait: wait,
                seed,
                palette: settings.paint.palette,
            };
            studio::run(config)?;
        }

        Commands::Print {
            fractal,
            depth,
            size,
            width,
            height,
            color,
        } => {
            let (term_w, term_h) = terminal::detect_size();
            let config = PrintConfig {
                kind: resolve_kind(Some(&fractal), None),
                depth: depth.clamp(DEPTH_MIN, DEPTH_MAX),
                size: size.clamp(SIZE_MIN, SIZE_MAX),
                width: width.unwrap_or(term_w),
                height: height.unwrap_or(term_h),
                color,
                palette: settings.paint.palette,
            };
            studio::print(config)?;
        }
    }

    Ok(())
}

fn resolve_kind(cli: Option<&str>, settings: Option<&str>) -> FractalKind {
    let name = cli.or(settings).unwrap_or("tree");
    FractalKind::parse(name).unwrap_or_else(|| {
        eprintln!("Unknown fractal: {}. Using tree.", name);
        eprintln!("Available: tree, spiral, koch, fern");
        FractalKind::Tree
    })
}
