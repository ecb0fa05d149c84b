use clap::Parser;
use recap_processor::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    // Create async runtime and run the main command logic
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(commands::run(args));

    match result {
        Ok(_stats) => {
            // Success - stats have already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Recap Processor - Drum Corps Fantasy Artifact Builder");
    println!("=====================================================");
    println!();
    println!("Convert drum corps season recap files into the ranking and caption");
    println!("archive artifacts consumed by the fantasy game.");
    println!();
    println!("USAGE:");
    println!("    recap-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    process     Process recap files into JSON artifacts (main command)");
    println!("    rankings    Print one season's final ranking");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Process every season found in a recap directory:");
    println!("    recap-processor process --input /path/to/recaps --output ./artifacts");
    println!();
    println!("    # Preview a run without writing artifacts:");
    println!("    recap-processor process --input /path/to/recaps --dry-run");
    println!();
    println!("    # Print the 2023 season ranking:");
    println!("    recap-processor rankings --input /path/to/recaps --year 2023");
    println!();
    println!("For detailed help on any command, use:");
    println!("    recap-processor <COMMAND> --help");
}
