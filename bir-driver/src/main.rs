//! Backend IR Compiler Driver
//! 
//! Command-line entry point. Without a frontend in this workspace, the
//! driver compiles built-in demo programs, or emits WAT for a module
//! described as JSON.

use bir_common::Machine;
use bir_driver::{compile, demos, load_wat_module, CompileOptions};
use clap::{Parser, Subcommand};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "birc")]
#[command(about = "Backend IR compiler")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile one of the built-in demo programs
    Demo {
        /// Which demo to compile (aggregate, vector)
        #[arg(short, long, default_value = "aggregate")]
        name: String,

        /// Target machine (wasm32-wa, wasm32-wasi, llir-64bit)
        #[arg(short, long, default_value_t = Machine::default())]
        target: Machine,

        /// Omit the module / target header comment
        #[arg(long)]
        no_header: bool,

        /// Output file, stdout if absent
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Emit WAT for a module described in JSON
    Wat {
        /// Input JSON module description
        input: PathBuf,

        /// Output file, stdout if absent
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Demo { name, target, no_header, output } => {
            let options = CompileOptions { target, emit_header: !no_header };
            if let Err(e) = run_demo(&name, &options, output.as_deref()) {
                eprintln!("Error compiling demo: {}", e);
                std::process::exit(1);
            }
        }
        Commands::Wat { input, output } => {
            if let Err(e) = emit_wat(&input, output.as_deref()) {
                eprintln!("Error emitting WAT: {}", e);
                std::process::exit(1);
            }
        }
    }
}

fn run_demo(name: &str, options: &CompileOptions, output_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    info!("compiling demo '{}' for {}", name, options.target);
    let program = demos::demo(name)?;
    let bytes = compile(&program, options)?;
    write_output(&bytes, output_path)
}

fn emit_wat(input_path: &Path, output_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    info!("reading wat module from {}", input_path.display());
    let json = fs::read_to_string(input_path)?;
    let module = load_wat_module(&json)?;
    write_output(module.to_wat().as_bytes(), output_path)
}

fn write_output(bytes: &[u8], output_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    match output_path {
        Some(path) => {
            fs::write(path, bytes)?;
            info!("output written to {}", path.display());
        }
        None => print!("{}", String::from_utf8_lossy(bytes)),
    }
    Ok(())
}
