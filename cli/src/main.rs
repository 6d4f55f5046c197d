mod card;
mod interactive;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use pantry_core::{Language, RecipeClient, Session, View, DEFAULT_SERVER_URL};
use tracing_subscriber::EnvFilter;

use card::render_card;

#[derive(Parser)]
#[command(name = "pantry")]
#[command(about = "Find a real, sourced recipe for the ingredients you have", long_about = None)]
struct Cli {
    /// Relay server URL
    #[arg(long, global = true, env = "PANTRY_SERVER_URL", default_value = DEFAULT_SERVER_URL)]
    server: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find one recipe for the given ingredients
    Generate {
        /// Ingredient to include (repeatable)
        #[arg(short, long = "ingredient")]
        ingredients: Vec<String>,
        /// Output language: en or id
        #[arg(short, long, default_value = "en")]
        language: Language,
    },
    /// Edit an ingredient list and generate recipes interactively
    Interactive {
        /// Output language: en or id
        #[arg(short, long, default_value = "en")]
        language: Language,
    },
    /// Check that the relay is up
    Ping,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let client = RecipeClient::new(cli.server);

    match cli.command {
        Commands::Generate {
            ingredients,
            language,
        } => generate(&client, &ingredients, language).await?,
        Commands::Interactive { language } => interactive::run(&client, language).await?,
        Commands::Ping => println!("{}", client.ping().await?),
    }

    Ok(())
}

async fn generate(client: &RecipeClient, ingredients: &[String], language: Language) -> Result<()> {
    let mut session = Session::new(language);
    for raw in ingredients {
        session.add_ingredient(raw);
    }

    let strings = session.strings();
    if !session.ingredients().is_empty() {
        eprintln!("{}", strings.generating);
    }

    match session.generate(client).await {
        View::Ready(recipe) => {
            print!("{}", render_card(recipe, strings)?);
            Ok(())
        }
        View::Failed(error) => {
            tracing::debug!(error = %error, "generation failed");
            bail!("{}", strings.error_message(error))
        }
        View::Idle | View::Loading => bail!("{}", strings.error_api),
    }
}
