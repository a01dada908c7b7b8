use clap::Parser;
use coil_lexer::{Matcher, Scanner};
use std::path::Path;

#[derive(Parser)]
#[command(name = "coil")]
#[command(about = "Coil — configuration language scanner")]
#[command(version)]
struct Cli {
    /// Input .coil file
    path: String,
}

fn main() {
    let cli = Cli::parse();
    let source = read_source(&cli.path);

    let mut scanner = Scanner::new(&source);
    scanner.skip_ws_and_comments();

    match Matcher::new(&mut scanner).match_name() {
        Ok(Some(name)) => {
            println!("element name matched: {}", name.as_str());
        }
        Ok(None) => {
            println!("no element name at offset {}", scanner.current_pos());
        }
        Err(e) => {
            eprintln!("{e}");
            let remainder: String = source.chars().skip(e.pos).collect();
            eprintln!("at: {remainder}");
            std::process::exit(1);
        }
    }

    println!("current pos: {}", scanner.current_pos());
    println!("next text: {}", scanner.remaining());
}

fn read_source(path: &str) -> String {
    let p = Path::new(path);
    if !p.exists() {
        eprintln!("Error: file not found: {path}");
        std::process::exit(1);
    }
    match std::fs::read_to_string(p) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error reading {path}: {e}");
            std::process::exit(1);
        }
    }
}
