use clap::Parser;
use lalp_tei::application::{init, BatchOptions, BatchService, ConvertService, FieldsService};
use lalp_tei::cli::{format_batch_report, format_field_list, Cli, Commands};
use lalp_tei::error::TeiError;
use lalp_tei::infrastructure::{read_input, Config};
use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter directive
const LOG_ENV: &str = "LALP_TEI_LOG";

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        "lalp_tei=debug"
    } else {
        "lalp_tei=warn"
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    // stdout carries documents, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), TeiError> {
    match cli.command {
        Commands::Convert { input, output } => {
            let config = Config::discover(cli.config.as_deref())?;
            let service = ConvertService::new(config.document);
            service.convert_file(input.as_deref(), output.as_deref())
        }
        Commands::Batch { dir, out_dir } => {
            let config = Config::discover(cli.config.as_deref())?;
            let report = BatchService::new(config).execute(&BatchOptions { root: dir, out_dir })?;
            print!("{}", format_batch_report(&report));
            Ok(())
        }
        Commands::Fields { input, all, tag } => {
            let source = read_input(input.as_deref())?;
            if let Some(name) = tag {
                println!("{}", FieldsService::value(&source, &name)?);
            } else {
                let entries = FieldsService::list(&source, all);
                let listing = format_field_list(&entries);
                if listing.ends_with('\n') {
                    print!("{}", listing);
                } else {
                    println!("{}", listing);
                }
            }
            Ok(())
        }
        Commands::Init { path } => {
            let created = init::init(&path)?;
            println!("Created {}", created.display());
            Ok(())
        }
    }
}
