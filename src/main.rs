// Grust: batch driver for the Grass machine

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use grust::interpreter::engine::{Machine, Status};
use grust::parser::parse;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("grust");

    let mut tco = false;
    let mut files: Vec<&String> = Vec::new();
    for arg in &args[1..] {
        match arg.as_str() {
            "--tco" => tco = true,
            _ => files.push(arg),
        }
    }

    if files.is_empty() || files.len() > 2 {
        eprintln!("Error: expected a program file");
        eprintln!();
        eprintln!("Usage: {} [--tco] <program.grass> [input-file]", program_name);
        eprintln!();
        eprintln!("Options:");
        eprintln!("  --tco    enable tail call optimization");
        eprintln!();
        eprintln!("Program output is written to stdout; input bytes are read");
        eprintln!("from the optional input file (default: no input).");
        std::process::exit(1);
    }

    let program_file = files[0];
    if !Path::new(program_file).exists() {
        eprintln!("Error: File '{}' not found", program_file);
        std::process::exit(1);
    }

    let source = fs::read_to_string(program_file)?;
    let input = match files.get(1) {
        Some(input_file) => fs::read(input_file)?,
        None => Vec::new(),
    };

    let program = match parse(&source) {
        Ok(program) => program,
        Err(e) => {
            eprintln!("Parser error: {}", e);
            std::process::exit(1);
        }
    };

    eprintln!(
        "Parsed {}: {} top-level instruction{}.",
        program_file,
        program.len(),
        if program.len() == 1 { "" } else { "s" }
    );

    let mut machine = Machine::new(input);
    machine.set_tail_call_optimization(tco);
    machine.load(program)?;

    let mut steps: u64 = 0;
    let result = loop {
        if let Err(e) = machine.step() {
            break Err(e);
        }
        steps += 1;
        if machine.status() == Status::Terminated {
            break Ok(());
        }
    };

    // Whatever happened, accumulated output is valid.
    io::stdout().write_all(machine.output_bytes())?;
    io::stdout().flush()?;

    match result {
        Ok(()) => {
            eprintln!(
                "Terminated after {} steps ({} output bytes).",
                steps,
                machine.output_bytes().len()
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("Runtime error after {} steps: {}", steps, e);
            std::process::exit(1);
        }
    }
}
