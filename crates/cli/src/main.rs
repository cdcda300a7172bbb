use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, bail};
use clap::Parser;
use linkbrief_core::{
    Bookmark, ExtractConfig, FetchConfig, PreparedPrompt, SummarizationRecord, extract_with_config, fetch_file,
    fetch_stdin, fetch_url, is_valid_url,
};
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;
use url::Url;

mod echo;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Output format for an extracted page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Json,
    Prompt,
    Text,
    Bookmark,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "prompt" => Ok(Self::Prompt),
            "text" | "txt" => Ok(Self::Text),
            "bookmark" => Ok(Self::Bookmark),
            _ => Err(format!("Invalid format: {}. Valid options: json, prompt, text, bookmark", s)),
        }
    }
}

/// Extract summarization-ready content from a bookmarked web page
#[derive(Parser, Debug)]
#[command(name = "linkbrief")]
#[command(version)]
#[command(about = "Turn bookmarked web pages into summarization-ready prompts", long_about = None)]
struct Args {
    /// URL to fetch, local HTML file, or "-" for stdin
    #[arg(value_name = "INPUT")]
    input: String,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Output format (json, prompt, text, bookmark)
    #[arg(short, long, default_value = "json", value_name = "FORMAT")]
    format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Source URL of a file or stdin page, used for links and the record URL
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// HTTP timeout in seconds
    #[arg(long, default_value = "30", value_name = "SECS")]
    timeout: u64,

    /// Custom User-Agent for HTTP requests
    #[arg(long, value_name = "UA")]
    user_agent: Option<String>,

    /// Main content budget of the AI-ready text, in characters
    #[arg(long, default_value = "4000", value_name = "NUM")]
    max_ai_chars: usize,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "warn,linkbrief_core=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with_writer(std::io::stderr)
        .init();
}

/// Read the page and work out which URL it belongs to.
async fn read_input(args: &Args) -> anyhow::Result<(String, String)> {
    if args.input.starts_with("http://") || args.input.starts_with("https://") {
        if !is_valid_url(&args.input) {
            bail!("Not a bookmarkable URL: {}", args.input);
        }
        if args.verbose {
            echo::print_step(1, 3, &format!("Fetching {}", args.input.bright_white().underline()));
        }

        let mut config = FetchConfig { timeout: args.timeout, ..Default::default() };
        if let Some(user_agent) = &args.user_agent {
            config.user_agent = user_agent.clone();
        }

        let page = fetch_url(&args.input, &config).await.context("Failed to fetch URL")?;
        return Ok((page.html, page.final_url));
    }

    let source_url = match &args.base_url {
        Some(url) => {
            Url::parse(url).with_context(|| format!("Invalid --base-url: {}", url))?;
            url.clone()
        }
        None => String::new(),
    };

    let html = if args.input == "-" {
        if args.verbose {
            echo::print_step(1, 3, "Reading from stdin");
        }
        fetch_stdin().context("Failed to read from stdin")?
    } else {
        if args.verbose {
            echo::print_step(1, 3, &format!("Reading from file {}", args.input.bright_white()));
        }
        fetch_file(&args.input).with_context(|| format!("Failed to read file: {}", args.input))?
    };

    Ok((html, source_url))
}

fn render(record: &SummarizationRecord, format: OutputFormat, pretty: bool) -> anyhow::Result<String> {
    let output = match format {
        OutputFormat::Json if pretty => record.to_json_pretty()?,
        OutputFormat::Json => record.to_json()?,
        OutputFormat::Prompt => PreparedPrompt::from_record(record).render(),
        OutputFormat::Text => record.ai_ready_text.clone(),
        OutputFormat::Bookmark => {
            let bookmark = Bookmark::from_record(record);
            if pretty { serde_json::to_string_pretty(&bookmark)? } else { serde_json::to_string(&bookmark)? }
        }
    };
    Ok(output)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    if args.verbose {
        echo::print_banner();
    }

    let (html, source_url) = read_input(&args).await?;

    if args.verbose {
        eprintln!("  {} {}", "Size:".dimmed(), echo::format_size(html.len()).bright_white());
        echo::print_step(2, 3, "Extracting content");
    }

    let config = ExtractConfig::builder().max_ai_text_chars(args.max_ai_chars).build();
    let record = extract_with_config(&html, &source_url, &config);

    if args.verbose {
        echo::print_record_details(&record);
        echo::print_step(3, 3, &format!("Writing {:?} output", args.format));
    }

    let output = render(&record, args.format, args.pretty)?;

    match args.output {
        Some(path) => {
            fs::write(&path, output).with_context(|| format!("Failed to write to file: {}", path.display()))?;
            echo::print_success(&format!("Output written to {}", path.display().bright_white()));
        }
        None => {
            println!("{}", output);
        }
    }

    Ok(())
}
