use std::io;
use std::path::PathBuf;

use calx::config::{InvalidCharPolicy, OutputMode, PipelineConfig};
use calx::report::{evaluation_lines, AnalysisReport};
use calx::source::read_source;
use calx::{Pipeline, PipelineError};
use calx_lexer::TOKEN_TABLE;
use clap::{ArgAction, Args, Parser, Subcommand};
use log::LevelFilter;

const DEFAULT_INPUT: &str = "expressions.txt";

#[derive(Debug, Parser)]
#[command(
    name = "calx",
    version,
    about = "Tokenize, validate and evaluate `;`-separated arithmetic expressions",
    long_about = "calx reads arithmetic expressions separated by `;` and runs them through\n\
        three stages: lexical analysis, parenthesis validation and evaluation.\n\n\
        EXAMPLES:\n\
        \n  calx                           Analyze expressions.txt\n\
        \n  calx input.txt                 Analyze another file\n\
        \n  calx -e '2+3*4; (1+2)*3'       Analyze expressions given inline\n\
        \n  calx -q --format json in.txt   Print only the results, as JSON\n\
        \n  calx tokens                    Show the token table",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(flatten)]
    analyze: AnalyzeArgs,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Analyze a file or inline expressions (the default)
    Analyze(AnalyzeArgs),
    /// Print the token table
    Tokens,
}

#[derive(Debug, Args, Clone, Default)]
struct AnalyzeArgs {
    /// File holding `;`-separated expressions [default: expressions.txt]
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Analyze this text instead of reading a file
    #[arg(short = 'e', long = "expr", value_name = "EXPR", conflicts_with = "input")]
    expr: Option<String>,

    /// Drop expressions with invalid characters instead of stopping
    #[arg(long = "skip-invalid")]
    skip_invalid: bool,

    /// Print only the evaluation results
    #[arg(short, long)]
    quiet: bool,

    /// Output format of the results
    #[arg(long, value_enum, default_value_t = OutputMode::Text)]
    format: OutputMode,
}

impl AnalyzeArgs {
    fn config(&self) -> PipelineConfig {
        let policy = if self.skip_invalid {
            InvalidCharPolicy::SkipExpression
        } else {
            InvalidCharPolicy::AbortBatch
        };
        PipelineConfig::default()
            .with_invalid_chars(policy)
            .with_show_stages(!self.quiet)
            .with_output(self.format)
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    // RUST_LOG, when set, takes precedence over -v
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init();
}

fn run_analyze(args: &AnalyzeArgs) -> i32 {
    let source = match &args.expr {
        Some(text) => text.clone(),
        None => {
            let path = args
                .input
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT));
            match read_source(&path) {
                Ok(text) => text,
                Err(e) => {
                    eprintln!("error: {e}");
                    return 2;
                }
            }
        }
    };

    let config = args.config();
    let pipeline = Pipeline::new(config);
    let analysis = match pipeline.run_with_sink(&source, &mut io::stdout().lock()) {
        Ok(analysis) => analysis,
        Err(e) => {
            report_failure(&e);
            return 1;
        }
    };

    for skipped in &analysis.skipped {
        eprintln!("warning: skipped {skipped}");
    }

    match config.output {
        OutputMode::Text => {
            for line in evaluation_lines(&analysis.records) {
                println!("{line}");
            }
        }
        OutputMode::Json => {
            let report = AnalysisReport::new(&analysis.batch, &analysis.records, &analysis.skipped);
            match serde_json::to_string_pretty(&report) {
                Ok(json) => println!("{json}"),
                Err(e) => {
                    eprintln!("error: failed to serialize report: {e}");
                    return 1;
                }
            }
        }
    }
    0
}

fn report_failure(err: &PipelineError) {
    eprintln!("error: {err}");
    if let Some(help) = err.help() {
        eprintln!("help: {help}");
    }
}

fn run_tokens() -> i32 {
    for rule in TOKEN_TABLE.iter() {
        println!("{:<8} {}", rule.kind.name(), rule.pattern);
    }
    0
}

fn run_cli() -> i32 {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Some(Command::Analyze(args)) => run_analyze(&args),
        Some(Command::Tokens) => run_tokens(),
        None => run_analyze(&cli.analyze),
    }
}

fn main() {
    std::process::exit(run_cli());
}
