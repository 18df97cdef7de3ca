// SPDX-License-Identifier: MIT
//
// n-picker — command-line front end for n-color.
//
// Parses each argument as a color string and prints it back in the
// requested textual forms:
//
//   $ n-picker '#abc' 'hsl(120deg,100%,25%)'
//   #abc
//     rgba  rgba(170,187,204,1)
//     rgb   rgb(170,187,204)
//     hex   #AABBCC
//     hsl   hsl(210deg,25%,73%)
//     hsv   hsv(210deg,17%,80%)
//   ...
//
//   $ n-picker --to hex 'rgb(255, 128, 0)'
//   #FF8000
//
// Exit status: 0 when every color parsed, 1 when any did not, 2 on a
// usage error. Set `RUST_LOG` to see library diagnostics on stderr.

use std::env;
use std::process;

use n_color::{ColorFormat, Rgba};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
usage: n-picker [--to <rgba|rgb|hex|hsl|all>] <color>...

Colors may be written as #RRGGBB, #RGB, rgb(r,g,b), rgba(r,g,b,a)
or hsl(h,s%,l%). Quote them to protect parentheses from the shell.";

// ─── Arguments ──────────────────────────────────────────────────────────────

/// Which forms to print for each color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Selection {
    /// Every format plus HSV, one labelled line each.
    All,
    /// A single format, one bare line.
    One(ColorFormat),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Help,
    Convert {
        selection: Selection,
        colors: Vec<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
enum UsageError {
    #[error("missing value for {0}")]
    MissingValue(&'static str),

    #[error("unknown option {0}")]
    UnknownOption(String),

    #[error("no colors given")]
    NoColors,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Command, UsageError> {
    let mut selection = Selection::All;
    let mut colors = Vec::new();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "--to" => {
                let name = args.next().ok_or(UsageError::MissingValue("--to"))?;
                selection = parse_selection(&name);
            }
            "--" => {
                colors.extend(args.by_ref());
            }
            _ => {
                if let Some(name) = arg.strip_prefix("--to=") {
                    selection = parse_selection(name);
                } else if arg.starts_with("--") {
                    return Err(UsageError::UnknownOption(arg));
                } else {
                    colors.push(arg);
                }
            }
        }
    }

    if colors.is_empty() {
        return Err(UsageError::NoColors);
    }
    Ok(Command::Convert { selection, colors })
}

fn parse_selection(name: &str) -> Selection {
    if name.eq_ignore_ascii_case("all") {
        return Selection::All;
    }
    let format = ColorFormat::from(name);
    if !format.name().eq_ignore_ascii_case(name) {
        warn!(requested = name, fallback = %format, "unknown format name");
    }
    Selection::One(format)
}

// ─── Rendering ──────────────────────────────────────────────────────────────

fn render(input: &str, color: Rgba, selection: Selection) -> Vec<String> {
    match selection {
        Selection::One(format) => vec![color.format(format)],
        Selection::All => {
            let mut lines = vec![input.to_owned()];
            for format in ColorFormat::ALL {
                lines.push(format!("  {:<5} {}", format.name(), color.format(format)));
            }
            let hsv = color.rgb().to_hsv();
            lines.push(format!(
                "  {:<5} hsv({:.0}deg,{:.0}%,{:.0}%)",
                "hsv", hsv.h, hsv.s, hsv.v
            ));
            lines
        }
    }
}

// ─── Entry point ────────────────────────────────────────────────────────────

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let (selection, colors) = match parse_args(env::args().skip(1)) {
        Ok(Command::Help) => {
            println!("{USAGE}");
            return;
        }
        Ok(Command::Convert { selection, colors }) => (selection, colors),
        Err(e) => {
            eprintln!("n-picker: {e}\n{USAGE}");
            process::exit(2);
        }
    };

    let mut failed = false;
    for input in &colors {
        match input.parse::<Rgba>() {
            Ok(color) => {
                debug!(input = input.as_str(), %color, "parsed");
                for line in render(input, color, selection) {
                    println!("{line}");
                }
            }
            Err(e) => {
                eprintln!("n-picker: {input:?}: {e}");
                failed = true;
            }
        }
    }

    if failed {
        process::exit(1);
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
