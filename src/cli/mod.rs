use clap::{Args, Parser, Subcommand};

use crate::capture::GeocodedAddress;

pub mod add;
pub mod delete;
pub mod display;
pub mod edit;
pub mod list;
pub mod pin;
pub mod show;

pub use add::run_add;
pub use delete::run_delete;
pub use edit::run_edit;
pub use list::run_list;
pub use pin::run_pin;
pub use show::run_show;

#[derive(Parser)]
#[command(name = "geonotes")]
#[command(about = "Photo notes with an optional location")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List notes, pinned first, newest first
    List,
    /// Show a note in full
    Show(ShowArgs),
    /// Add a note
    Add(AddArgs),
    /// Edit a note
    Edit(EditArgs),
    /// Delete a note and its photo
    Delete(DeleteArgs),
    /// Pin a note to the top of the list
    Pin(PinArgs),
    /// Unpin a note
    Unpin(PinArgs),
}

#[derive(Args)]
pub struct ShowArgs {
    /// Note id
    pub id: String,
}

#[derive(Args)]
pub struct AddArgs {
    #[arg(short, long)]
    pub title: String,
    #[arg(short, long, default_value = "")]
    pub body: String,
    /// Path or file:// URI of the photo (copied into the notebook)
    #[arg(short, long)]
    pub photo: Option<String>,
    #[arg(long, allow_hyphen_values = true, requires = "lon")]
    pub lat: Option<f64>,
    #[arg(long, allow_hyphen_values = true, requires = "lat")]
    pub lon: Option<f64>,
    #[arg(short, long)]
    pub address: Option<String>,
    /// Street, used to build the address when --address is not given
    #[arg(long, conflicts_with = "address")]
    pub street: Option<String>,
    #[arg(long, conflicts_with = "address")]
    pub city: Option<String>,
    #[arg(long, conflicts_with = "address")]
    pub country: Option<String>,
}

impl AddArgs {
    /// `--address` as given, otherwise one assembled from the place parts
    pub fn resolved_address(&self) -> Option<String> {
        self.address.clone().or_else(|| {
            GeocodedAddress {
                street: self.street.clone(),
                city: self.city.clone(),
                country: self.country.clone(),
                ..Default::default()
            }
            .format()
        })
    }
}

#[derive(Args)]
pub struct EditArgs {
    /// Note id
    pub id: String,
    #[arg(short, long)]
    pub title: Option<String>,
    #[arg(short, long)]
    pub body: Option<String>,
    /// New photo path or file:// URI
    #[arg(short, long)]
    pub photo: Option<String>,
    #[arg(long, allow_hyphen_values = true, requires = "lon", conflicts_with = "clear_location")]
    pub lat: Option<f64>,
    #[arg(long, allow_hyphen_values = true, requires = "lat", conflicts_with = "clear_location")]
    pub lon: Option<f64>,
    #[arg(short, long)]
    pub address: Option<String>,
    /// Remove coordinates and address
    #[arg(long)]
    pub clear_location: bool,
}

#[derive(Args)]
pub struct DeleteArgs {
    /// Note id
    pub id: String,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Args)]
pub struct PinArgs {
    /// Note id
    pub id: String,
}
