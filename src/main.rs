use std::collections::BTreeMap;
use std::process;

use tmtheme::{Document, Error, Scope, Theme};

struct Config {
    filename: String,
    check: bool,
    json: bool,
    scope: Option<Scope>,
    verbose: bool,
}

struct CliError {
    code: i32,
    msg: String,
    show_usage: bool,
}

impl CliError {
    fn usage(msg: impl Into<String>) -> Self {
        Self { code: 1, msg: msg.into(), show_usage: true }
    }

    fn io(msg: impl Into<String>) -> Self {
        Self { code: 1, msg: msg.into(), show_usage: false }
    }

    fn parse(msg: impl Into<String>) -> Self {
        Self { code: 2, msg: msg.into(), show_usage: false }
    }
}

fn usage_text() -> &'static str {
    "Usage: tmtheme [flags] <theme.conf>\n\
     Flags:\n\
     \x20 --check          Parse the theme without applying it\n\
     \x20 --scope <name>   Print only the named scope\n\
     \x20                  (server|global-session|session|global-window|window)\n\
     \x20 --json           Print resolved options as JSON\n\
     \x20 --verbose        Enable debug logging to stderr\n\
     \x20 -h, --help       Print help information\n\
     \x20 -V, --version    Print version information and exit"
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let config = match parse_args(args) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{}", e.msg);
            if e.show_usage {
                eprintln!("{}", usage_text());
            }
            process::exit(e.code);
        }
    };

    if let Err(e) = run(config) {
        eprintln!("{}", e.msg);
        if e.show_usage {
            eprintln!("{}", usage_text());
        }
        process::exit(e.code);
    }
}

fn parse_args(args: Vec<String>) -> Result<Config, CliError> {
    let mut filename: Option<String> = None;
    let mut check = false;
    let mut json = false;
    let mut scope: Option<Scope> = None;
    let mut verbose = false;

    let mut i = 1;
    while i < args.len() {
        let arg = &args[i];
        if arg == "-h" || arg == "--help" {
            println!("{}", usage_text());
            process::exit(0);
        } else if arg == "-V" || arg == "--version" {
            println!("tmtheme {}", env!("CARGO_PKG_VERSION"));
            process::exit(0);
        } else if arg == "--check" {
            check = true;
        } else if arg == "--json" {
            json = true;
        } else if arg == "--verbose" {
            verbose = true;
        } else if arg == "--scope" {
            if i + 1 >= args.len() {
                return Err(CliError::usage("error: --scope requires an argument"));
            }
            i += 1;
            scope = match Scope::from_name(&args[i]) {
                Some(s) => Some(s),
                None => {
                    return Err(CliError::usage(format!(
                        "error: unknown scope: {}",
                        args[i]
                    )));
                }
            };
        } else if arg.starts_with('-') {
            return Err(CliError::usage(format!("error: unexpected argument: {}", arg)));
        } else if filename.is_none() {
            filename = Some(arg.clone());
        } else {
            return Err(CliError::usage(format!("error: unexpected argument: {}", arg)));
        }
        i += 1;
    }

    let Some(filename) = filename else {
        return Err(CliError::usage("error: missing input file"));
    };

    Ok(Config { filename, check, json, scope, verbose })
}

fn run(config: Config) -> Result<(), CliError> {
    if config.verbose {
        init_logging();
    }

    let document = Document::load(&config.filename).map_err(|e| match e {
        Error::Io(err) => CliError::io(format!("error: {}: {}", config.filename, err)),
        err => CliError::parse(format!("error: {}: {}", config.filename, err)),
    })?;

    if config.check {
        return Ok(());
    }

    let mut theme = Theme::new();
    document
        .execute(&mut theme)
        .map_err(|e| CliError::parse(format!("error: {}: {}", config.filename, e)))?;

    let scopes: Vec<Scope> = match config.scope {
        Some(scope) => vec![scope],
        None => Scope::ALL.to_vec(),
    };

    if config.json {
        print_json(&theme, &scopes)
    } else {
        print_text(&theme, &scopes);
        Ok(())
    }
}

fn print_text(theme: &Theme, scopes: &[Scope]) {
    for &scope in scopes {
        // BTreeMap for deterministic output order.
        let options: BTreeMap<&String, &String> = theme.options(scope).iter().collect();
        for (key, value) in options {
            println!("{} {}={}", scope.name(), key, value);
        }
    }
}

fn print_json(theme: &Theme, scopes: &[Scope]) -> Result<(), CliError> {
    let mut root = serde_json::Map::new();
    for &scope in scopes {
        let options: serde_json::Map<String, serde_json::Value> = theme
            .options(scope)
            .iter()
            .map(|(k, v)| (k.clone(), serde_json::Value::String(v.clone())))
            .collect();
        root.insert(scope.name().to_string(), serde_json::Value::Object(options));
    }

    let rendered = serde_json::to_string_pretty(&serde_json::Value::Object(root))
        .map_err(|e| CliError::io(format!("error: {}", e)))?;
    println!("{}", rendered);
    Ok(())
}

fn init_logging() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tmtheme=debug")),
        )
        .with_writer(std::io::stderr)
        .init();
}
