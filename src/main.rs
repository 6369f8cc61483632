/*!
Main binary for jpointer.
*/

use anyhow::{Context, Result};
use clap::{ArgAction, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::generate;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use memmap2::Mmap;
use std::io::stdout;
use std::io::{self};
use std::{
    fs::File,
    io::{IsTerminal, Read},
    ops::Deref,
    path::{Path, PathBuf},
};

use jpointer::{
    JsonNode, Kind, Pointer, access, commands,
    utils::{colored_kind, write_colored_result, write_line},
};

/// Resolve an RFC 6901 JSON Pointer against an input document.
#[derive(Parser)]
#[command(name = "jp", version, about, arg_required_else_help = true, long_about = None, disable_help_subcommand = true)]
struct Args {
    /// Optional subcommands
    #[command(subcommand)]
    command: Option<Commands>,
    /// JSON Pointer (e.g., "/paths/~1users/get/0"); "" selects the whole
    /// document
    pointer: Option<String>,
    #[arg(value_name = "FILE")]
    /// Optional path to the input document. If omitted, reads from STDIN
    input: Option<PathBuf>,
    /// Input format. Inferred from the file extension if omitted, else JSON
    #[arg(short, long, value_enum)]
    format: Option<Format>,
    /// Fail unless the resolved value is of this kind (object, array,
    /// string, number, boolean, null)
    #[arg(short = 't', long = "type", value_name = "KIND")]
    expect: Option<Kind>,
    /// Do not pretty-print the JSON output, instead use compact
    #[arg(long, action = ArgAction::SetTrue)]
    compact: bool,
    /// Print the pointer above the resolved value
    #[arg(short = 'p', long, action = ArgAction::SetTrue)]
    with_pointer: bool,
    /// Print the kind of the resolved value instead of the value
    #[arg(short, long, action = ArgAction::SetTrue)]
    kind: bool,
    /// Print the unescaped reference tokens as a JSON array and exit without
    /// reading any input
    #[arg(long, action = ArgAction::SetTrue, conflicts_with_all = ["kind", "with_pointer"])]
    tokens: bool,
    #[command(flatten)]
    verbosity: Verbosity<WarnLevel>,
}

/// Available subcommands for `jp`
#[derive(Subcommand)]
enum Commands {
    #[command(subcommand)]
    /// Generate additional documentation and/or completions
    Generate(GenerateCommand),
}

/// Generate shell completions and man page
#[derive(Subcommand)]
enum GenerateCommand {
    /// Generate shell completions for the given shell to stdout.
    Shell { shell: clap_complete::Shell },
    /// Generate a man page for jp to output directory if specified, else
    /// the current directory.
    Man {
        /// The output directory to write the man pages.
        #[clap(short, long)]
        output_dir: Option<PathBuf>,
    },
}

/// Supported input document formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Yaml,
    Toml,
    Cbor,
    Msgpack,
}

impl Format {
    /// Guess the format from a file extension.
    fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            "toml" => Some(Self::Toml),
            "cbor" => Some(Self::Cbor),
            "msgpack" | "mpk" => Some(Self::Msgpack),
            _ => None,
        }
    }
}

/// Raw bytes of the input document.
enum Input {
    Mapped(Mmap),
    Buffered(Vec<u8>),
}

impl Deref for Input {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        match self {
            Self::Mapped(map) => map,
            Self::Buffered(buf) => buf,
        }
    }
}

/// Entry point for main binary.
///
/// This parses the command line arguments and resolves the pointer. If the
/// input is piped in, it reads from STDIN. The output is printed to STDOUT,
/// with formatting determined by the command line arguments.
fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.verbosity.log_level_filter())
        .parse_default_env()
        .init();

    match args.command {
        Some(Commands::Generate(ref cmd)) => match cmd {
            GenerateCommand::Shell { shell } => {
                let mut cmd = Args::command();
                generate(*shell, &mut cmd, "jp", &mut stdout().lock());
            }
            GenerateCommand::Man { output_dir } => {
                let written = commands::generate::generate_man_pages(
                    &Args::command(),
                    output_dir.clone(),
                )?;
                for path in written {
                    println!("Generated: {}", path.display());
                }
            }
        },
        None => {
            let raw_pointer = args.pointer.as_deref().ok_or_else(|| {
                anyhow::anyhow!("Pointer required unless using subcommand")
            })?;
            let pointer: Pointer = raw_pointer
                .parse()
                .with_context(|| format!("Failed to parse pointer {raw_pointer:?}"))?;
            log::debug!("parsed {} reference token(s)", pointer.len());

            if args.tokens {
                let tokens = serde_json::to_string(pointer.tokens())?;
                return write_line(&mut stdout().lock(), &tokens);
            }

            let Some(input) = read_input(args.input.as_deref())? else {
                // No piped input and no file specified
                let mut cmd = Args::command();
                return Ok(cmd.print_help()?);
            };

            let format = args
                .format
                .or_else(|| args.input.as_deref().and_then(Format::from_path))
                .unwrap_or(Format::Json);
            log::debug!("decoding {} byte(s) as {format:?}", input.len());

            if format == Format::Json {
                // Zero-copy parse: strings borrow from the input buffer
                let json: serde_json_borrow::Value = serde_json::from_slice(&input)
                    .with_context(|| "Failed to parse JSON")?;
                emit(&json, &pointer, raw_pointer, &args)?;
            } else {
                let doc = decode(format, &input)?;
                emit(&doc, &pointer, raw_pointer, &args)?;
            }
        }
    }

    Ok(())
}

/// Read the input document from `path`, or from STDIN when no path is given.
/// Returns `None` if STDIN is an interactive terminal.
fn read_input(path: Option<&Path>) -> Result<Option<Input>> {
    if let Some(path) = path {
        let mut file = File::open(path)
            .with_context(|| format!("Failed to read file {}", path.display()))?;
        let metadata = file
            .metadata()
            .with_context(|| format!("Failed to stat file {}", path.display()))?;
        if !metadata.is_file() {
            // Pipes, FIFOs and character devices cannot be mapped
            log::debug!("{} is not a regular file, reading it", path.display());
            let mut buffer = Vec::new();
            file.read_to_end(&mut buffer)
                .with_context(|| format!("Failed to read file {}", path.display()))?;
            return Ok(Some(Input::Buffered(buffer)));
        }
        // SAFETY: the mapping is read-only and never written through. If
        // another process truncates the file while it is mapped, reading past
        // the new end raises SIGBUS. That risk is accepted, as ripgrep does.
        let map = unsafe { Mmap::map(&file) }
            .with_context(|| format!("Failed to map file {}", path.display()))?;
        return Ok(Some(Input::Mapped(map)));
    }

    if io::stdin().is_terminal() {
        return Ok(None);
    }
    let mut buffer = Vec::new();
    io::stdin()
        .read_to_end(&mut buffer)
        .context("Failed to read STDIN")?;
    Ok(Some(Input::Buffered(buffer)))
}

/// Decode a non-JSON document into an owned JSON value tree.
fn decode(format: Format, bytes: &[u8]) -> Result<serde_json::Value> {
    match format {
        Format::Json => {
            serde_json::from_slice(bytes).with_context(|| "Failed to parse JSON")
        }
        Format::Yaml => decode_yaml(bytes),
        Format::Toml => decode_toml(bytes),
        Format::Cbor => decode_cbor(bytes),
        Format::Msgpack => decode_msgpack(bytes),
    }
}

#[cfg(feature = "yaml")]
fn decode_yaml(bytes: &[u8]) -> Result<serde_json::Value> {
    serde_yaml::from_slice(bytes).with_context(|| "Failed to parse YAML")
}

#[cfg(not(feature = "yaml"))]
fn decode_yaml(_: &[u8]) -> Result<serde_json::Value> {
    anyhow::bail!("YAML input requires the `yaml` feature")
}

#[cfg(feature = "toml")]
fn decode_toml(bytes: &[u8]) -> Result<serde_json::Value> {
    let text = std::str::from_utf8(bytes).context("TOML input is not UTF-8")?;
    toml::from_str(text).with_context(|| "Failed to parse TOML")
}

#[cfg(not(feature = "toml"))]
fn decode_toml(_: &[u8]) -> Result<serde_json::Value> {
    anyhow::bail!("TOML input requires the `toml` feature")
}

#[cfg(feature = "cbor")]
fn decode_cbor(bytes: &[u8]) -> Result<serde_json::Value> {
    ciborium::de::from_reader(bytes).with_context(|| "Failed to parse CBOR")
}

#[cfg(not(feature = "cbor"))]
fn decode_cbor(_: &[u8]) -> Result<serde_json::Value> {
    anyhow::bail!("CBOR input requires the `cbor` feature")
}

#[cfg(feature = "msgpack")]
fn decode_msgpack(bytes: &[u8]) -> Result<serde_json::Value> {
    rmp_serde::from_slice(bytes).with_context(|| "Failed to parse MessagePack")
}

#[cfg(not(feature = "msgpack"))]
fn decode_msgpack(_: &[u8]) -> Result<serde_json::Value> {
    anyhow::bail!("MessagePack input requires the `msgpack` feature")
}

/// Resolve the pointer against `root` and print the result.
fn emit<V: JsonNode>(root: &V, pointer: &Pointer, raw_pointer: &str, args: &Args) -> Result<()> {
    let value = match args.expect {
        Some(kind) => access::as_kind(root, raw_pointer, kind)
            .with_context(|| format!("Failed to resolve {raw_pointer:?} as {kind}"))?,
        None => pointer
            .resolve(root)
            .with_context(|| format!("Failed to resolve {raw_pointer:?}"))?,
    };

    let mut out = stdout().lock();
    if args.kind {
        return write_line(&mut out, &colored_kind(value.kind()));
    }

    write_colored_result(
        &mut out,
        value,
        args.with_pointer.then_some(pointer),
        !args.compact,
    )
}
