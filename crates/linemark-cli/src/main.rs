use anyhow::{Context, Result, bail};
use linemark_config::Config;
use linemark_engine::{convert_str, io};
use std::{
    collections::HashMap,
    env,
    io::{Read, Write},
    path::{Path, PathBuf},
    process,
};

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Help,
    Convert(Vec<PathBuf>),
}

fn parse_args(args: &[String]) -> Result<Command> {
    let mut paths = Vec::new();
    for arg in args {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            opt if opt.starts_with('-') => bail!("unknown option {opt}"),
            path => paths.push(PathBuf::from(path)),
        }
    }
    Ok(Command::Convert(paths))
}

fn print_usage(program_name: &str) {
    eprintln!("Usage: {program_name} [PATH...]");
    eprintln!();
    eprintln!("Converts Markdown files (or directories of .md files) to HTML.");
    eprintln!("With no PATH, the `include` globs from the config file are used;");
    eprintln!("if there are none, Markdown is read from stdin.");
    eprintln!("Config file: {}", Config::config_path().display());
}

/// A file to convert and the directory its output path is relative to.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Input {
    path: PathBuf,
    root: PathBuf,
}

impl Input {
    /// An input named directly: its output lands flat in the output dir.
    fn file(path: PathBuf) -> Self {
        let root = path.parent().map(Path::to_path_buf).unwrap_or_default();
        Self { path, root }
    }
}

/// Expands directories; `None` means nothing was named and stdin should be read.
fn collect_inputs(paths: &[PathBuf], config: &Config) -> Result<Option<Vec<Input>>> {
    if paths.is_empty() {
        if config.include.is_empty() {
            return Ok(None);
        }
        let files = config.resolve_includes()?;
        return Ok(Some(files.into_iter().map(Input::file).collect()));
    }

    let mut inputs = Vec::new();
    for path in paths {
        if path.is_dir() {
            inputs.extend(io::scan_markdown_files(path)?.into_iter().map(|file| Input {
                path: file,
                root: path.clone(),
            }));
        } else {
            inputs.push(Input::file(path.clone()));
        }
    }
    Ok(Some(inputs))
}

/// Output paths for every input, failing if two inputs would share one.
fn output_paths(inputs: &[Input], output_dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let mut claimed: HashMap<PathBuf, &Path> = HashMap::new();
    let mut outs = Vec::with_capacity(inputs.len());

    for input in inputs {
        let out = io::output_path_for(&input.path, &input.root, output_dir, extension);
        if let Some(previous) = claimed.insert(out.clone(), input.path.as_path()) {
            bail!(
                "{} and {} would both be written to {}",
                previous.display(),
                input.path.display(),
                out.display()
            );
        }
        outs.push(out);
    }
    Ok(outs)
}

fn run(
    paths: &[PathBuf],
    config: &Config,
    stdin: &mut impl Read,
    stdout: &mut impl Write,
) -> Result<()> {
    let options = config.convert_options();

    let Some(inputs) = collect_inputs(paths, config)? else {
        log::debug!("No inputs given, reading stdin");
        let mut text = String::new();
        stdin
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        writeln!(stdout, "{}", convert_str(&text, &options))?;
        return Ok(());
    };

    if inputs.is_empty() {
        log::warn!("No markdown files found");
    }

    // Checked up front so a collision never leaves a partial output tree.
    let outs = match &config.output_dir {
        Some(dir) => Some(output_paths(&inputs, dir, &config.extension)?),
        None => None,
    };

    for (i, input) in inputs.iter().enumerate() {
        let text = io::read_file(&input.path)
            .with_context(|| format!("Failed to read {}", input.path.display()))?;
        let html = convert_str(&text, &options);

        match &outs {
            Some(outs) => {
                let out = &outs[i];
                io::write_file(out, &html)
                    .with_context(|| format!("Failed to write {}", out.display()))?;
                log::info!("Wrote {} -> {}", input.path.display(), out.display());
            }
            None => writeln!(stdout, "{html}")?,
        }
    }

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let program_name = env::args()
        .next()
        .unwrap_or_else(|| "linemark".to_string());
    let args: Vec<String> = env::args().skip(1).collect();

    let paths = match parse_args(&args) {
        Ok(Command::Convert(paths)) => paths,
        Ok(Command::Help) => {
            print_usage(&program_name);
            return;
        }
        Err(e) => {
            eprintln!("Error: {e}");
            print_usage(&program_name);
            process::exit(2);
        }
    };

    let config = match Config::load() {
        Ok(Some(config)) => {
            log::debug!("Loaded config from {}", Config::config_path().display());
            config
        }
        Ok(None) => {
            log::debug!("No config file found, using defaults");
            Config::default()
        }
        Err(e) => {
            log::error!("Config::load() failed with error: {e}");
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    if let Err(e) = run(&paths, &config, &mut stdin.lock(), &mut stdout.lock()) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
