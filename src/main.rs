use std::{
    fs,
    io::{self, Read},
    process::ExitCode,
    sync::Arc,
    time::Instant,
};

use ael::{
    config::{Config, Emit},
    lexer::lexer::tokenize,
    parse_named,
    parser::parser::match_program,
};
use tracing::{debug, error, info};

fn main() -> ExitCode {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("ael: {}", err);
            return ExitCode::from(2);
        }
    };

    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_max_level(config.log_level)
        .with_writer(io::stderr)
        .init();

    let source = match read_source(&config) {
        Ok(source) => source,
        Err(err) => {
            error!(source = %config.source_name(), error = %err, "failed to read source");
            return ExitCode::from(2);
        }
    };

    let name = config.source_name();
    let start = Instant::now();
    info!(source = %name, emit = %config.emit, "parsing");

    let result = match config.emit {
        Emit::Tokens => {
            let tokens = tokenize(&source, Some(name));
            for token in &tokens {
                println!("{:>6}  {}", token.span.start.0, token.debug());
            }
            Ok(())
        }
        Emit::Derivation => {
            let tokens = tokenize(&source, Some(name.clone()));
            match_program(tokens, Arc::new(name)).map(|derivation| println!("{:#?}", derivation))
        }
        Emit::Ast => parse_named(&source, Some(name)).map(|program| println!("{:#?}", program)),
    };

    debug!(elapsed = ?start.elapsed(), "finished");

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err.render(&source));
            ExitCode::FAILURE
        }
    }
}

fn read_source(config: &Config) -> io::Result<String> {
    match &config.source {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}
