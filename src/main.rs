//! Evil Hangman - CLI
//!
//! Adversarial Hangman with TUI and console modes, plus tools to inspect and
//! benchmark the engine.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use evil_hangman::{
    commands::{BenchmarkConfig, analyze_letter, run_benchmark, run_simple},
    config::{DictionarySource, GameConfig},
    output::{print_analysis_result, print_benchmark_result, print_game_summary},
    solver::Solution,
    wordlists::LengthChoice,
};
use rand::Rng;

#[derive(Parser)]
#[command(
    name = "evil_hangman",
    about = "Hangman where the computer never commits to a word until it has to",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary: 'all' (default, embedded list) or path to a whitespace-delimited file
    #[arg(short, long, global = true, default_value = "all")]
    dictionary: String,

    /// Seed for word-length selection (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Word length: a number, 'first' (length of the first dictionary word) or 'random'
    #[arg(short, long, global = true, default_value = "random", value_parser = parse_length)]
    length: LengthChoice,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple console mode
    Simple,

    /// Show how a letter would split the current candidates
    Analyze {
        /// Letter to analyze
        letter: char,

        /// Letters guessed before this one
        #[arg(short, long, default_value = "")]
        guessed: String,
    },

    /// Play many games with a greedy guesser
    Benchmark {
        /// Number of games
        #[arg(short = 'n', long, default_value = "100")]
        games: usize,
    },
}

fn parse_length(value: &str) -> Result<LengthChoice, String> {
    match value {
        "random" => Ok(LengthChoice::Random),
        "first" => Ok(LengthChoice::FirstWord),
        n => n
            .parse::<usize>()
            .ok()
            .filter(|&len| len > 0)
            .map(LengthChoice::Fixed)
            .ok_or_else(|| format!("'{n}' is not a word length, 'first' or 'random'")),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = GameConfig::new(
        DictionarySource::from_flag(&cli.dictionary),
        cli.length,
        cli.seed,
    );

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&config),
        Commands::Simple => run_simple_command(&config),
        Commands::Analyze { letter, guessed } => run_analyze_command(&config, letter, &guessed),
        Commands::Benchmark { games } => run_benchmark_command(&config, games),
    }
}

fn new_solution(config: &GameConfig) -> Result<Solution> {
    let selector = config
        .load_selector()
        .context("failed to load dictionary")?;
    let candidates = selector
        .select(config.length, &mut config.rng())
        .context("failed to choose a word length")?;
    Ok(Solution::new(candidates)?)
}

fn run_simple_command(config: &GameConfig) -> Result<()> {
    let summary = run_simple(new_solution(config)?)?;
    print_game_summary(&summary);
    Ok(())
}

fn run_analyze_command(config: &GameConfig, letter: char, guessed: &str) -> Result<()> {
    let candidates = new_solution(config)?.candidates().to_vec();
    let prior: Vec<char> = guessed.chars().filter(|c| !c.is_whitespace()).collect();

    let result = analyze_letter(candidates, &prior, letter).map_err(|e| anyhow::anyhow!(e))?;
    print_analysis_result(&result);
    Ok(())
}

fn run_benchmark_command(config: &GameConfig, games: usize) -> Result<()> {
    let selector = config
        .load_selector()
        .context("failed to load dictionary")?;
    let seed = config.seed.unwrap_or_else(|| config.rng().random());

    println!("Running benchmark on {games} games (seed {seed})...");

    let mut bench = BenchmarkConfig::new(games, seed);
    bench.length = config.length;
    bench.show_progress = true;

    let result = run_benchmark(&selector, &bench).map_err(|e| anyhow::anyhow!(e))?;
    print_benchmark_result(&result);
    Ok(())
}

fn run_play_command(config: &GameConfig) -> Result<()> {
    use evil_hangman::interactive::{App, run_tui};

    let selector = config
        .load_selector()
        .context("failed to load dictionary")?;
    let app = App::new(selector, config.rng(), config.length)?;
    run_tui(app)
}
