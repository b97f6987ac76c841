use std::{env, path::Path, process};

use lexer::lex;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("ERROR: File not provided.");
        process::exit(1);
    }

    match lex(Path::new(&args[1])) {
        Ok(tokens) => {
            for token in &tokens {
                println!("{}", token);
            }
        }
        Err(error) => {
            eprintln!("ERROR: {}", error);
            process::exit(1);
        }
    }
}
