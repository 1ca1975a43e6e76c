// src/bin/main.rs
use autocomplete_core::config::{CompletionConfig, CONFIG_ENV_VAR};
use autocomplete_core::{AutocompleteEngine, Candidate};
use crossterm::style::Stylize;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuOption {
    Train,
    Search,
    Quit,
}

impl MenuOption {
    const ALL: [MenuOption; 3] = [MenuOption::Train, MenuOption::Search, MenuOption::Quit];

    fn key(self) -> u32 {
        match self {
            MenuOption::Train => 1,
            MenuOption::Search => 2,
            MenuOption::Quit => 3,
        }
    }

    fn label(self) -> &'static str {
        match self {
            MenuOption::Train => "Train the engine",
            MenuOption::Search => "Search for matches",
            MenuOption::Quit => "Quit",
        }
    }

    fn parse(input: &str) -> Option<Self> {
        let key: u32 = input.trim().parse().ok()?;
        Self::ALL.into_iter().find(|option| option.key() == key)
    }
}

fn main() {
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}", "[ERROR]".red().bold(), e);
            process::exit(1);
        }
    };
    init_tracing(&config.log_filter);

    let mut engine = AutocompleteEngine::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    if let Err(e) = run(&mut engine, &config, &mut stdin.lock(), &mut stdout) {
        eprintln!("{} {}", "[ERROR]".red().bold(), e);
        process::exit(1);
    }
}

/// Config path comes from the first argument, then the environment.
/// With neither, defaults are used.
fn load_config() -> autocomplete_core::Result<CompletionConfig> {
    let path = std::env::args_os()
        .nth(1)
        .or_else(|| std::env::var_os(CONFIG_ENV_VAR))
        .map(PathBuf::from);
    match path {
        Some(path) => CompletionConfig::from_path(&path),
        None => Ok(CompletionConfig::default()),
    }
}

fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(
    engine: &mut AutocompleteEngine,
    config: &CompletionConfig,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<()> {
    loop {
        show_menu(output)?;
        match read_selection(input, output)? {
            MenuOption::Train => {
                let Some(passage) = read_input(input, output)? else { break };
                engine.train(Some(passage.as_str()));
                info!(vocabulary = engine.vocabulary_size(), "trained");
            }
            MenuOption::Search => {
                let Some(fragment) = read_input(input, output)? else { break };
                let matches = match config.max_suggestions {
                    Some(limit) => engine.search_top(Some(fragment.as_str()), limit),
                    None => engine.search(Some(fragment.as_str())),
                };
                print_matches(&matches, config.json_output, output)?;
            }
            MenuOption::Quit => break,
        }
    }

    writeln!(output, "{}", "Done!".green())?;
    output.flush()
}

fn show_menu(output: &mut impl Write) -> io::Result<()> {
    writeln!(output, "{}", "Select an option:".bold())?;
    for option in MenuOption::ALL {
        writeln!(output, "{}: {}", option.key().to_string().cyan(), option.label())?;
    }
    Ok(())
}

/// Prompts until a valid option is entered. End of input counts as quit.
fn read_selection(input: &mut impl BufRead, output: &mut impl Write) -> io::Result<MenuOption> {
    loop {
        write!(output, "Selection: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(MenuOption::Quit);
        }
        match MenuOption::parse(&line) {
            Some(option) => return Ok(option),
            None => {
                warn!(input = line.trim(), "invalid menu selection");
                writeln!(output, "{}", "Invalid input.".yellow())?;
            }
        }
    }
}

/// One line of text, without its line terminator. `None` at end of input.
fn read_input(input: &mut impl BufRead, output: &mut impl Write) -> io::Result<Option<String>> {
    write!(output, "Input: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(trimmed_len);
    Ok(Some(line))
}

fn print_matches(matches: &[Candidate], json: bool, output: &mut impl Write) -> io::Result<()> {
    if json {
        let rendered = serde_json::to_string(matches).map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
        writeln!(output, "{}", rendered)?;
    } else {
        let rendered: Vec<String> = matches.iter().map(Candidate::to_string).collect();
        writeln!(output, "{}", rendered.join(", "))?;
    }
    writeln!(output)
}
