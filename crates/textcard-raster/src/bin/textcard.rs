//! Render a markup text file to a card image.
//!
//! Usage:
//!   textcard [OPTIONS] [INPUT]
//!
//! INPUT is a path to a UTF-8 text file, or `-` (the default) for
//! stdin. The path may contain `~`, a `${today_prefix}` placeholder
//! (replaced with the local date as `YYYYMMDD`), and `*`/`?` wildcards
//! in the file name, which resolve to the most recently modified match.

use std::env;
use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::SystemTime;

use textcard::RenderOptions;
use textcard_raster::{render_to_file, FontPaths};

const DEFAULT_OUT_PATH: &str = "card.png";

#[derive(Clone, Debug, Default)]
struct Args {
    input: Option<String>,
    out: Option<PathBuf>,
    config: Option<PathBuf>,
    font: Option<PathBuf>,
    font_bold: Option<PathBuf>,
    width: Option<u32>,
    padding: Option<u32>,
    font_size: Option<f32>,
    theme: Option<String>,
    frame: Option<bool>,
    corner_radius: Option<u32>,
    line_spacing: Option<f32>,
    divider_margin: Option<f32>,
    help: bool,
}

fn usage() {
    println!(
        "Render markup text to a card image.

USAGE:
    textcard [OPTIONS] [INPUT]

ARGS:
    INPUT                    text file path, or '-' for stdin (default);
                             supports ~, ${{today_prefix}} and */? wildcards

OPTIONS:
    --out <PATH>             output image path [default: {DEFAULT_OUT_PATH}]
    --config <PATH>          JSON file with render options
    --font <PATH>            regular font file
    --font-bold <PATH>       bold font file
    --width <PX>             canvas width
    --padding <PX>           content padding
    --font-size <PX>         font size
    --theme <NAME>           default | light | dark | light-gradient | dark-gradient
    --frame / --no-frame     toggle the drop-shadow frame
    --corner-radius <PX>     corner radius, 0 disables rounding
    --line-spacing <PX>      extra spacing between lines
    --divider-margin <PX>    margin around divider rules
    -h, --help               print this help"
    );
}

fn parse_value<T: std::str::FromStr>(flag: &str, value: Option<String>) -> Result<T, String> {
    let raw = value.ok_or_else(|| format!("{flag} needs a value"))?;
    raw.parse()
        .map_err(|_| format!("{flag}: cannot parse '{raw}'"))
}

fn parse_args(mut argv: impl Iterator<Item = String>) -> Result<Args, String> {
    let mut args = Args::default();
    while let Some(arg) = argv.next() {
        match arg.as_str() {
            "-h" | "--help" => args.help = true,
            "--out" => args.out = Some(PathBuf::from(parse_value::<String>(&arg, argv.next())?)),
            "--config" => {
                args.config = Some(PathBuf::from(parse_value::<String>(&arg, argv.next())?));
            }
            "--font" => args.font = Some(PathBuf::from(parse_value::<String>(&arg, argv.next())?)),
            "--font-bold" => {
                args.font_bold = Some(PathBuf::from(parse_value::<String>(&arg, argv.next())?));
            }
            "--width" => args.width = Some(parse_value(&arg, argv.next())?),
            "--padding" => args.padding = Some(parse_value(&arg, argv.next())?),
            "--font-size" => args.font_size = Some(parse_value(&arg, argv.next())?),
            "--theme" => args.theme = Some(parse_value(&arg, argv.next())?),
            "--frame" => args.frame = Some(true),
            "--no-frame" => args.frame = Some(false),
            "--corner-radius" => args.corner_radius = Some(parse_value(&arg, argv.next())?),
            "--line-spacing" => args.line_spacing = Some(parse_value(&arg, argv.next())?),
            "--divider-margin" => args.divider_margin = Some(parse_value(&arg, argv.next())?),
            other if other.starts_with('-') && other != "-" => {
                return Err(format!("unknown flag '{other}'"));
            }
            _ => {
                if args.input.is_some() {
                    return Err("more than one INPUT given".to_string());
                }
                args.input = Some(arg);
            }
        }
    }
    Ok(args)
}

fn build_options(args: &Args) -> Result<RenderOptions, String> {
    let mut opts = match &args.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("config '{}': {err}", path.display()))?;
            serde_json::from_str(&raw)
                .map_err(|err| format!("config '{}': {err}", path.display()))?
        }
        None => RenderOptions::default(),
    };
    if let Some(width) = args.width {
        opts.width = width;
    }
    if let Some(padding) = args.padding {
        opts.padding = padding;
    }
    if let Some(font_size) = args.font_size {
        opts.font_size = font_size;
    }
    if let Some(theme) = &args.theme {
        opts.theme = theme.clone();
    }
    if let Some(frame) = args.frame {
        opts.use_frame = frame;
    }
    if let Some(radius) = args.corner_radius {
        opts.corner_radius = radius;
    }
    if let Some(spacing) = args.line_spacing {
        opts.text_line_spacing = spacing;
    }
    if let Some(margin) = args.divider_margin {
        opts.divider_margin = margin;
    }
    Ok(opts.normalized())
}

/// Match `name` against a file-name pattern with `*`/`?` wildcards.
fn wildcard_match(pattern: &str, name: &str) -> bool {
    let p: Vec<char> = pattern.chars().collect();
    let n: Vec<char> = name.chars().collect();
    let (mut pi, mut ni) = (0usize, 0usize);
    let mut star: Option<(usize, usize)> = None;
    while ni < n.len() {
        if pi < p.len() && (p[pi] == '?' || p[pi] == n[ni]) {
            pi += 1;
            ni += 1;
        } else if pi < p.len() && p[pi] == '*' {
            star = Some((pi, ni));
            pi += 1;
        } else if let Some((sp, sn)) = star {
            pi = sp + 1;
            ni = sn + 1;
            star = Some((sp, sn + 1));
        } else {
            return false;
        }
    }
    while pi < p.len() && p[pi] == '*' {
        pi += 1;
    }
    pi == p.len()
}

/// Expand `${today_prefix}` and `~`, then resolve wildcards in the file
/// name to the most recently modified existing match.
fn resolve_input_path(template: &str) -> Result<PathBuf, String> {
    let today = chrono::Local::now().format("%Y%m%d").to_string();
    let mut resolved = template.replace("${today_prefix}", &today);
    if let Some(rest) = resolved.strip_prefix('~') {
        let home = env::var("HOME").map_err(|_| "cannot expand '~': HOME unset".to_string())?;
        resolved = format!("{home}{rest}");
    }

    let path = PathBuf::from(&resolved);
    let name = match path.file_name().and_then(|n| n.to_str()) {
        Some(name) => name.to_string(),
        None => return Ok(path),
    };
    if !name.contains('*') && !name.contains('?') {
        return Ok(path);
    }

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let entries =
        fs::read_dir(&parent).map_err(|err| format!("'{}': {err}", parent.display()))?;
    let mut newest: Option<(SystemTime, PathBuf)> = None;
    for entry in entries.flatten() {
        let candidate = entry.file_name();
        let Some(candidate) = candidate.to_str() else {
            continue;
        };
        if !wildcard_match(&name, candidate) {
            continue;
        }
        let Ok(meta) = entry.metadata() else { continue };
        let modified = meta.modified().unwrap_or(SystemTime::UNIX_EPOCH);
        let path = entry.path();
        if newest.as_ref().is_none_or(|(best, _)| modified > *best) {
            newest = Some((modified, path));
        }
    }
    newest
        .map(|(_, path)| path)
        .ok_or_else(|| format!("no file matches '{}'", path.display()))
}

fn read_input(args: &Args) -> Result<String, String> {
    match args.input.as_deref() {
        None | Some("-") => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(|err| format!("stdin: {err}"))?;
            Ok(text)
        }
        Some(template) => {
            let path = resolve_input_path(template)?;
            fs::read_to_string(&path).map_err(|err| format!("'{}': {err}", path.display()))
        }
    }
}

fn run(args: &Args) -> Result<PathBuf, String> {
    let opts = build_options(args)?;
    let text = read_input(args)?;
    let fonts = FontPaths {
        regular: args.font.clone(),
        bold: args.font_bold.clone(),
    };
    let out = args
        .out
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_PATH));
    render_to_file(&text, &out, &fonts, &opts).map_err(|err| err.to_string())
}

fn main() -> ExitCode {
    let args = match parse_args(env::args().skip(1)) {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("error: {msg}");
            usage();
            return ExitCode::FAILURE;
        }
    };
    if args.help {
        usage();
        return ExitCode::SUCCESS;
    }
    match run(&args) {
        Ok(path) => {
            println!("{}", path.display());
            ExitCode::SUCCESS
        }
        Err(msg) => {
            eprintln!("error: {msg}");
            ExitCode::FAILURE
        }
    }
}
