use clap::{Args, Parser, Subcommand};
use reqwest::Client;
use serde_json::{json, Value};

#[derive(Parser, Debug)]
#[command(name = "paprika")]
#[command(about = "client cli used by restaurant staffs to poke the backend", version, long_about = None
)]
struct Cli {
    #[arg(long, default_value = "http://127.0.0.1:8080", help = "Server base url")]
    server: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// restaurant profile
    Info,
    /// current menu
    Menu,
    /// guest testimonials
    Testimonials,
    /// store connectivity diagnostics
    Diag,
    /// submit a reservation
    #[command(arg_required_else_help = true)]
    Reserve(ReserveArgs),
}

#[derive(Debug, Args)]
struct ReserveArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    email: String,
    #[arg(long)]
    phone: String,
    #[arg(long, help = "Reservation date YYYY-MM-DD")]
    date: String,
    #[arg(long, help = "Reservation time HH:MM")]
    time: String,
    #[arg(long, value_parser = clap::value_parser!(i32).range(1..=20))]
    party_size: i32,
    #[arg(long)]
    notes: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let client = Client::new();

    let response = match cli.command {
        Commands::Info => client.get(format!("{}/api/info", cli.server)).send().await?,
        Commands::Menu => client.get(format!("{}/api/menu", cli.server)).send().await?,
        Commands::Testimonials => {
            client
                .get(format!("{}/api/testimonials", cli.server))
                .send()
                .await?
        }
        Commands::Diag => client.get(format!("{}/test", cli.server)).send().await?,
        Commands::Reserve(args) => {
            let body = json!({
                "name": args.name,
                "email": args.email,
                "phone": args.phone,
                "date": args.date,
                "time": args.time,
                "party_size": args.party_size,
                "notes": args.notes,
            });
            client
                .post(format!("{}/api/reservations", cli.server))
                .json(&body)
                .send()
                .await?
        }
    };

    println!("status={}", response.status());
    let value: Value = response.json().await?;
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}
