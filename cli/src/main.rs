mod replay;

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use airdraw::config::{ConfigError, PipelineConfig};
use airdraw::scaling::Size;
use clap::{Parser, ValueEnum};
use replay::{EventLine, Replay, parse_record};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("line {line}: invalid frame record: {source}")]
    Record { line: usize, source: serde_json::Error },
    #[error("invalid config file {path}: {source}")]
    ConfigFile { path: PathBuf, source: serde_json::Error },
    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),
    #[error("output encode failed: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// One JSON line per surface command.
    Events,
    /// A single JSON summary at the end.
    Summary,
}

#[derive(Parser, Debug)]
#[command(name = "airdraw-replay", about = "Replay recorded hand landmarks through the gesture pipeline")]
struct Cli {
    #[arg(long, default_value = "-", help = "JSON Lines frame records, or - for stdin")]
    input: String,

    #[arg(long, value_enum, default_value_t = Format::Events)]
    format: Format,

    #[arg(long, env = "AIRDRAW_CONFIG", help = "JSON pipeline config; flags override its fields")]
    config: Option<PathBuf>,

    #[arg(long, env = "AIRDRAW_PINCH_THRESHOLD")]
    pinch_threshold: Option<f64>,

    #[arg(long, env = "AIRDRAW_MIN_STROKE_DISTANCE")]
    min_stroke_distance: Option<f64>,

    #[arg(long, env = "AIRDRAW_TOOLS", value_delimiter = ',')]
    tools: Option<Vec<String>>,

    #[arg(long, env = "AIRDRAW_INITIAL_TOOL")]
    initial_tool: Option<String>,

    #[arg(long, env = "AIRDRAW_RING_PINCH_STOPS", default_value_t = false)]
    ring_pinch_stops: bool,

    #[arg(long, env = "AIRDRAW_WINDOW_WIDTH", default_value_t = 1280.0)]
    window_width: f64,

    #[arg(long, env = "AIRDRAW_WINDOW_HEIGHT", default_value_t = 720.0)]
    window_height: f64,
}

impl Cli {
    fn pipeline_config(&self) -> Result<PipelineConfig, CliError> {
        let mut config = match &self.config {
            Some(path) => {
                let raw = fs::read_to_string(path)?;
                serde_json::from_str(&raw)
                    .map_err(|source| CliError::ConfigFile { path: path.clone(), source })?
            }
            None => PipelineConfig::default(),
        };
        if let Some(threshold) = self.pinch_threshold {
            config.pinch_threshold = threshold;
        }
        if let Some(distance) = self.min_stroke_distance {
            config.min_stroke_distance = distance;
        }
        if let Some(tools) = &self.tools {
            config.tools.clone_from(tools);
        }
        if let Some(initial) = &self.initial_tool {
            config.initial_tool = Some(initial.clone());
        }
        if self.ring_pinch_stops {
            config.ring_pinch_stops_capture = true;
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    if let Err(error) = run(&Cli::parse()) {
        tracing::error!(%error, "replay failed");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let config = cli.pipeline_config()?;
    let mut replay = Replay::new(config, Size::new(cli.window_width, cli.window_height))?;

    let mut reader: Box<dyn BufRead> = if cli.input == "-" {
        Box::new(BufReader::new(io::stdin()))
    } else {
        Box::new(BufReader::new(File::open(&cli.input)?))
    };
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let pending = replay.take_pending();
    if cli.format == Format::Events {
        emit(&mut out, 0, 0.0, pending)?;
    }

    let mut line = String::new();
    let mut line_no = 0_usize;
    let mut last_ts = 0.0;
    loop {
        line.clear();
        let bytes = reader.read_line(&mut line)?;
        if bytes == 0 {
            break;
        }
        line_no = line_no.saturating_add(1);

        let Some(record) = parse_record(&line).map_err(|source| CliError::Record { line: line_no, source })? else {
            continue;
        };
        let frame = replay.frames_seen();
        last_ts = record.ts;
        let commands = replay.step(&record);
        if cli.format == Format::Events {
            emit(&mut out, frame, record.ts, commands)?;
        }
    }

    let frames = replay.frames_seen();
    let (summary, closing) = replay.finish();
    match cli.format {
        Format::Events => emit(&mut out, frames, last_ts, closing)?,
        Format::Summary => writeln!(out, "{}", serde_json::to_string(&summary)?)?,
    }
    tracing::info!(
        frames = summary.frames,
        skipped = summary.skipped,
        strokes = summary.downs,
        tool_changes = summary.tool_changes,
        "replay complete"
    );
    Ok(())
}

fn emit(
    out: &mut impl Write,
    frame: usize,
    ts: f64,
    commands: Vec<airdraw::surface::SurfaceCommand>,
) -> Result<(), CliError> {
    for command in commands {
        let rendered = serde_json::to_string(&EventLine { frame, ts, command })?;
        writeln!(out, "{rendered}")?;
    }
    Ok(())
}
