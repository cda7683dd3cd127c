use std::path::PathBuf;
use std::process;

use codebase_analyzer::{
    cli::{exit_code, Args, Command},
    config::{load_config, CliArgs, FileConfig, DEFAULT_CONFIG_FILE},
    core::Analyzer,
    error::{try_with_recovery, AnalyzerError, ErrorSeverity, Result},
    models::config::Settings,
    output::{
        create_formatter, create_progress_callback, create_writer, format_console_summary,
        OutputWriter, ProgressReporter, StdoutWriter,
    },
};

fn main() {
    let args = Args::parse_args();
    let command = Command::from_args(args);
    let exit_code = run_command(command);
    process::exit(exit_code);
}

/// Run the command with proper error handling
fn run_command(command: Command) -> i32 {
    match execute_command(command) {
        Ok(_) => 0,
        Err(err) => {
            print_failure(&err);

            let code = exit_code(err.severity());
            if code > 0 {
                eprintln!("\nExiting with code {} due to {}", code, err.severity());
            }
            code
        }
    }
}

fn print_failure(err: &AnalyzerError) {
    let label = match err.severity() {
        ErrorSeverity::Warning => "Warning",
        ErrorSeverity::Error | ErrorSeverity::Critical => "Error",
    };
    eprintln!("\n{}: {}", label, err.user_message());

    if let Some(suggestion) = err.suggestion() {
        eprintln!("Suggestion: {}", suggestion);
    }
}

/// Execute the command with proper orchestration
fn execute_command(command: Command) -> Result<()> {
    match command {
        Command::Init => init_config(PathBuf::from(DEFAULT_CONFIG_FILE)),
        Command::Analyze(args) => {
            let settings = load_config(CliArgs::from(&args))?;
            analyze(settings)
        }
    }
}

fn init_config(config_path: PathBuf) -> Result<()> {
    let file_config = FileConfig::with_path(&config_path);

    if file_config.path().exists() {
        println!("Configuration file already exists at: {}", config_path.display());
        println!("To overwrite it, delete the file first and run this command again.");
        return Ok(());
    }

    file_config.create_default()?;

    println!("Created default configuration file at: {}", config_path.display());
    println!("Uncomment and edit the settings you want to change.");
    Ok(())
}

fn analyze(settings: Settings) -> Result<()> {
    let reporter = ProgressReporter::from_settings(&settings);
    reporter.print_verbose(&format!("Settings: {:#?}", settings));

    let analyzer = Analyzer::new(settings.clone())?;

    reporter.start("Scanning");
    let results = analyzer.analyze_with_progress(create_progress_callback(&reporter))?;
    reporter.finish();

    let formatter = create_formatter(settings.output_format, settings.top_dependencies);
    let report = formatter.format(&results)?;

    if settings.echo_report {
        reporter.print_separator();
        // A closed stdout is a warning; the report is still saved below
        try_with_recovery(|| StdoutWriter.write(&report))?;
    }

    // Saving the report is the step whose failure fails the run
    let report_path = settings.report_path();
    create_writer(Some(&report_path)).write(&report)?;
    reporter.print_success(&format!("\nReport saved to {}", report_path.display()));

    if reporter.is_verbose() {
        reporter.print(&format_console_summary(&results, settings.use_colors));
    }

    Ok(())
}
