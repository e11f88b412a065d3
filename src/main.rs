// Soma: compiler front end for a minimal expression language

use std::fs;
use std::path::PathBuf;
use std::process::exit;

use clap::Parser;

use soma::parser::lexer::Lexer;
use soma::CompileError;

/// Compile a Soma source file to a validated, optimized syntax tree.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Source file to compile.
    file: PathBuf,

    /// Print the token stream instead of compiling.
    #[arg(long)]
    dump_tokens: bool,
}

fn main() {
    let args = Args::parse();

    let source = match fs::read_to_string(&args.file) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("Failed to read '{}': {}", args.file.display(), err);
            exit(1);
        }
    };

    if args.dump_tokens {
        match Lexer::new(source.chars()).tokenize() {
            Ok(tokens) => {
                for token in &tokens {
                    println!("{:?} '{}'", token.kind, token.lexeme);
                }
            }
            Err(err) => {
                eprintln!("{err}");
                exit(CompileError::from(err).code());
            }
        }
        return;
    }

    match soma::compile(&source) {
        Ok((program, symbols)) => {
            eprintln!(
                "Compiled {} statement(s), {} symbol(s).",
                program.statements.len(),
                symbols.len()
            );
        }
        Err(err) => {
            eprintln!("{err}");
            exit(err.code());
        }
    }
}
