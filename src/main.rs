/*
 * ==========================================================================
 * BRAMBLE - Experimental Compiler Front End
 * ==========================================================================
 *
 * File:      main.rs
 * Purpose:   Command-line driver: `bramble <source_path>`.
 *
 * License:
 * This file is part of the Bramble programming language project.
 *
 * Bramble is dual-licensed under the terms of:
 *   - The MIT License
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use std::process::ExitCode;

use chrono::Local;
use tracing::level_filters::LevelFilter;

use bramble::diagnostics::{token_table, DiagnosticPrinter};
use bramble::dump::{dump_program, DumpStyle};
use bramble::{compile, load_source_file, Diagnostic};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(LevelFilter::WARN)
        .with_target(false)
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() != 2 {
        println!("Usage: bramble <source_path>");
        return ExitCode::from(1);
    }

    let started = Local::now();

    let mut source = match load_source_file(&args[1]) {
        Ok(source) => source,
        Err(e) => {
            println!("Could not load source file");
            eprintln!("{}: {}", e, e.source);
            return ExitCode::from(1);
        }
    };

    let result = compile(&mut source);
    let printer = DiagnosticPrinter::new(&source);

    let lexical_errors = match &result {
        Ok(compilation) => &compilation.lexical_errors,
        Err(e) => &e.lexical_errors,
    };
    for error in lexical_errors {
        printer.print(&Diagnostic::from(error));
    }

    println!("TOKENS");
    print!("{}", token_table(source.tokens()));
    println!();

    let compilation = match result {
        Ok(compilation) => compilation,
        Err(e) => {
            for error in e.failure.diagnostics.iter().chain([&e.failure.error]) {
                printer.print(&Diagnostic::from(error));
            }
            return ExitCode::from(1);
        }
    };

    for error in &compilation.syntax_diagnostics {
        printer.print(&Diagnostic::from(error));
    }

    println!("PARSER");
    println!("{}", dump_program(&compilation.program, DumpStyle::Pretty));

    let elapsed = Local::now() - started;
    println!("Compilation complete ({} ms)", elapsed.num_milliseconds());

    ExitCode::SUCCESS
}
