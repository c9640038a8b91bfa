//! millipede CLI entry point.

use std::io::{self, Write};
use std::process;

use clap::Parser;
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

use millipede::{Millipede, Palette, Renderer};

/// Draw a curvy millipede in the terminal.
#[derive(Parser, Debug)]
#[command(
    name = "millipede",
    version = env!("MILLIPEDE_VERSION"),
    about = "Draw a curvy millipede in the terminal"
)]
struct Cli {
    /// Text shown next to the head
    #[arg(short = 'c', long = "comment", default_value = "")]
    comment: String,

    /// Number of body segments (values below 1 reset to 20)
    #[arg(short = 's', long = "size", default_value_t = 20, allow_negative_numbers = true)]
    size: i64,

    /// Width of each segment (values below 3 clamp to 3)
    #[arg(short = 'w', long = "width", default_value_t = 3, allow_negative_numbers = true)]
    width: i64,

    /// Curve amplitude, 0 for a straight millipede (negative resets to 4)
    #[arg(long = "curve", default_value_t = 4, allow_negative_numbers = true)]
    curve: i64,

    /// Crawl upwards: tail first, head last
    #[arg(short = 'r', long = "reverse")]
    reverse: bool,

    /// Shift the curve phase
    #[arg(short = 'o', long = "opposite")]
    opposite: bool,

    /// Glyph filling the head (a character or a \uXXXX escape)
    #[arg(long = "head")]
    head: Option<String>,

    /// Glyph filling the body (a character or a \uXXXX escape)
    #[arg(long = "skin")]
    skin: Option<String>,

    /// Colour lines with these colours in turn (white, red, yellow, green, cyan, blue, magenta)
    #[arg(long = "color", conflicts_with_all = ["rainbow", "random"])]
    color: Vec<String>,

    /// Colour lines with every colour in turn
    #[arg(long = "rainbow", conflicts_with = "random")]
    rainbow: bool,

    /// Colour the whole millipede with one random colour
    #[arg(long = "random")]
    random: bool,

    /// Strip colours even when a colour option is given
    #[arg(long = "no-color")]
    no_color: bool,

    /// Enable debug logging on stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

impl Cli {
    fn millipede(&self) -> millipede::Result<Millipede> {
        let mut millipede = Millipede::new()
            .with_comment(self.comment.as_str())
            .with_size(self.size)
            .with_width(self.width)
            .with_curve(self.curve)
            .with_reverse(self.reverse)
            .with_opposite(self.opposite);
        if let Some(ref head) = self.head {
            millipede = millipede.with_head(head)?;
        }
        if let Some(ref skin) = self.skin {
            millipede = millipede.with_skin(skin)?;
        }
        Ok(millipede)
    }

    fn palette(&self) -> Option<Palette> {
        let palette = if self.rainbow {
            Palette::rainbow()
        } else if self.random {
            Palette::random(&mut rand::thread_rng())
        } else if !self.color.is_empty() {
            Palette::new(&self.color)
        } else {
            return None;
        };
        Some(palette.with_ansi(!self.no_color && !cfg!(windows)))
    }
}

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_ansi(!cli.no_color)
        .with_writer(io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("error: cannot install logger: {}", e);
        process::exit(1);
    }

    let millipede = match cli.millipede() {
        Ok(m) => m,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };
    debug!(?millipede, "configured");

    let renderer = Renderer::new(millipede);
    let rendered: String = match cli.palette() {
        Some(palette) => palette.paint(&renderer).collect(),
        None => renderer.to_string(),
    };

    print!("{}", rendered);
    if let Err(e) = io::stdout().flush() {
        eprintln!("error: cannot flush stdout: {}", e);
        process::exit(1);
    }
}
