use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "farm-console")]
#[command(about = "Administrative console for the farm supply inventory")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Log in against the inventory API and persist the session
    Login {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },

    /// Invalidate the current session and remove it from disk
    Logout,

    /// List supplies, refreshed from the inventory API
    List {
        /// Render the last local snapshot without calling the API
        #[arg(long)]
        offline: bool,
    },

    /// Show a single supply fetched from the inventory API
    Show {
        /// Supply id
        id: String,
    },

    /// Register a new supply
    Add(AddArgs),

    /// Edit an existing supply
    Edit(EditArgs),

    /// Delete a supply
    Remove {
        /// Supply id
        id: String,
    },
}

#[derive(Args)]
pub struct AddArgs {
    /// Supply name
    #[arg(long)]
    pub name: String,

    /// Amount on hand
    #[arg(long)]
    pub quantity: f64,

    /// Presentation (Kilogramos, Gramo, Litro, Mililitro, Unidad, Caja, Paquete)
    #[arg(long, default_value = "Unidad")]
    pub unit: String,

    /// Unit price
    #[arg(long)]
    pub price: f64,

    /// Entry date; any timestamp is reduced to its UTC day (default: today)
    #[arg(long)]
    pub date: Option<String>,

    /// Category (FOOD, MEDICINE, EQUIPMENT, PACKAGING, DISINFECTANT, OTHER)
    #[arg(long, default_value = "OTHER")]
    pub category: String,

    /// Growth stage (cría, destete, levante, engorde); only applies to FOOD
    #[arg(long)]
    pub stage: Option<String>,
}

#[derive(Args)]
pub struct EditArgs {
    /// Supply id
    pub id: String,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub quantity: Option<f64>,

    #[arg(long)]
    pub unit: Option<String>,

    #[arg(long)]
    pub price: Option<f64>,

    #[arg(long)]
    pub date: Option<String>,

    #[arg(long)]
    pub category: Option<String>,

    #[arg(long)]
    pub stage: Option<String>,
}
