use clap::Parser;
use geonotes::cli::{run_add, run_delete, run_edit, run_list, run_pin, run_show, Cli, Commands};
use geonotes::cli::edit::EditRequest;
use geonotes::config::ENV_LOG;
use geonotes::models::Coordinates;
use geonotes::{Config, Notebook};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = Config::load()?;
    let notebook = Notebook::open(&config)?;

    match cli.command {
        None | Some(Commands::List) => {
            run_list(&notebook)?;
        }
        Some(Commands::Show(args)) => {
            run_show(&notebook, &args.id)?;
        }
        Some(Commands::Add(args)) => {
            let coordinates = coordinates(args.lat, args.lon);
            let address = args.resolved_address();
            run_add(&notebook, args.title, args.body, args.photo, coordinates, address)?;
        }
        Some(Commands::Edit(args)) => {
            let request = EditRequest {
                title: args.title,
                body: args.body,
                photo: args.photo,
                coordinates: coordinates(args.lat, args.lon),
                address: args.address,
                clear_location: args.clear_location,
            };
            run_edit(&notebook, &args.id, request)?;
        }
        Some(Commands::Delete(args)) => {
            run_delete(&notebook, &args.id, args.force)?;
        }
        Some(Commands::Pin(args)) => {
            run_pin(&notebook, &args.id, true)?;
        }
        Some(Commands::Unpin(args)) => {
            run_pin(&notebook, &args.id, false)?;
        }
    }

    Ok(())
}

fn coordinates(lat: Option<f64>, lon: Option<f64>) -> Option<Coordinates> {
    match (lat, lon) {
        (Some(lat), Some(lon)) => Some(Coordinates::new(lat, lon)),
        _ => None,
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(ENV_LOG).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
