//! Solve a maze image and write the solution next to it.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use log::{info, warn, LevelFilter};
use serde::Serialize;
use solver::{encode, find_path, load, render_text, Maze, Point, Search};

/// Find the shortest path through a maze image.
///
/// White pixels are open floor, black pixels are walls, the green pixel is the
/// start and the red pixel is the finish. The solved maze is written with the
/// path drawn in green.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Maze image path.
    input: PathBuf,

    /// Where to write the solved image. Defaults to `solved_<name>` next to the input.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print a JSON report instead of the text summary.
    #[arg(long)]
    json: bool,

    /// Also print the solved maze as text.
    #[arg(long)]
    text: bool,

    /// More log output, repeat for more.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors.
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| solved_path(&self.input))
    }
}

#[derive(Serialize, Debug)]
struct Report<'a> {
    input: &'a Path,
    rows: usize,
    columns: usize,
    path: Option<&'a [Point]>,
    length: Option<usize>,
    output: Option<&'a Path>,
}

/// `dir/maze.png` becomes `dir/solved_maze.png`
fn solved_path(input: &Path) -> PathBuf {
    let name = input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("solved_{name}"))
}

fn init_logging(args: &Args) {
    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(&args);

    info!("loading maze from {}", args.input.display());
    let maze: Maze =
        load(&args.input).with_context(|| format!("failed to load maze {}", args.input.display()))?;
    info!("loaded {}x{} maze", maze.columns(), maze.rows());

    let search = find_path(&maze);

    let output = match &search {
        Search::Found(path) => {
            let output = args.output_path();
            encode(&maze, path)
                .save(&output)
                .with_context(|| format!("failed to write {}", output.display()))?;
            info!("solution written to {}", output.display());
            Some(output)
        }
        Search::NotFound => {
            warn!("nothing written, the finish cannot be reached");
            None
        }
    };

    if args.json {
        let report = Report {
            input: &args.input,
            rows: maze.rows(),
            columns: maze.columns(),
            path: search.path().map(|path| path.points()),
            length: search.path().map(|path| path.len()),
            output: output.as_deref(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        match search.path() {
            Some(path) => println!("Found path with length of {}", path.len()),
            None => println!("No path was found"),
        }
    }

    if args.text {
        let points = search.path().map(|path| path.points()).unwrap_or_default();
        print!("{}", render_text(&maze, points));
    }

    Ok(())
}

#[cfg(test)]
mod test {

    use super::*;

    #[test]
    fn test_solved_path_keeps_directory() {
        assert_eq!(
            solved_path(Path::new("mazes/maze.png")),
            PathBuf::from("mazes/solved_maze.png")
        );
        assert_eq!(
            solved_path(Path::new("maze.png")),
            PathBuf::from("solved_maze.png")
        );
    }

    #[test]
    fn test_args() {
        let args = Args::parse_from(["maze-solver", "maze.png", "-vv", "--json"]);

        assert!(args.json);
        assert!(!args.text);
        assert_eq!(args.log_level(), LevelFilter::Trace);
        assert_eq!(args.output_path(), PathBuf::from("solved_maze.png"));

        let args = Args::parse_from(["maze-solver", "maze.png", "-q", "-o", "out.png"]);
        assert_eq!(args.log_level(), LevelFilter::Error);
        assert_eq!(args.output_path(), PathBuf::from("out.png"));
    }

    #[test]
    fn test_report_json() {
        let path = [Point::new(0, 0), Point::new(0, 1)];
        let report = Report {
            input: Path::new("maze.png"),
            rows: 1,
            columns: 2,
            path: Some(&path[..]),
            length: Some(2),
            output: None,
        };

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["path"][1]["col"], 1);
        assert_eq!(value["length"], 2);
        assert!(value["output"].is_null());
    }
}
