use alignment_groups::{AlignError, AlignmentIndex, GroupOptions, Side};
use std::env;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use tracing_subscriber::EnvFilter;

/// Prints alignment groups for each input line.
///
/// Each line holds `len_x len_y` followed by `s-t` link tokens. Reads stdin
/// when no file is given.
///
/// Usage: cargo run --example groups -- [--target] [--consecutive] [filename]
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut options = GroupOptions::new();
    let mut filename = None;

    for arg in env::args().skip(1) {
        if arg == "--target" {
            options = options.with_side(Side::Target);
        } else if arg == "--consecutive" {
            options = options.consecutive(true);
        } else if filename.is_none() && !arg.starts_with("--") {
            filename = Some(arg);
        } else {
            eprintln!("Usage: groups [--target] [--consecutive] [filename]");
            std::process::exit(1);
        }
    }

    let reader: Box<dyn BufRead> = match &filename {
        Some(name) => match File::open(name) {
            Ok(file) => Box::new(BufReader::new(file)),
            Err(_) => {
                eprintln!("File \"{}\" not found.", name);
                std::process::exit(1);
            }
        },
        None => Box::new(io::stdin().lock()),
    };

    for (n, line) in reader.lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("Error reading input: {}", e);
                std::process::exit(1);
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        match process_line(&line, &options) {
            Ok(groups) => println!("{}", groups.join(" ")),
            Err(e) => eprintln!("line {}: {}", n + 1, e),
        }
    }
}

/// Parses one `len_x len_y tok...` line and renders its groups.
fn process_line(line: &str, options: &GroupOptions) -> Result<Vec<String>, AlignError> {
    let mut fields = line.split_whitespace();
    let mut size = || -> Result<usize, AlignError> {
        let field = fields.next().unwrap_or_default();
        field.parse().map_err(|_| AlignError::Parse {
            token: field.to_string(),
            reason: "expected a side length",
        })
    };
    let len_x = size()?;
    let len_y = size()?;

    let index = AlignmentIndex::new(fields, len_x, len_y)?;
    let groups = index.groups_with(options)?;

    Ok(groups.iter().map(ToString::to_string).collect())
}
