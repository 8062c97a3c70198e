use clap::Parser;
use country_atlas::config::args::{CliConfig, Command, FavCommand, OutputFormat};
use country_atlas::config::toml_config::TomlConfig;
use country_atlas::utils::{logger, validation::Validate};
use country_atlas::{
    Country, CountryClient, CountrySource, FavoritesStore, LocalStorage, Result, Settings,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();
    logger::init_cli_logger(cli.verbose);

    let file_config = match &cli.config {
        Some(path) => Some(TomlConfig::load(path)?),
        None => None,
    };
    let settings = cli.resolve(file_config.as_ref());

    if let Err(e) = settings.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    if cli.verbose {
        tracing::debug!("Resolved settings: {:?}", settings);
    }

    if let Err(e) = run(&cli, &settings).await {
        tracing::error!("Command failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    Ok(())
}

async fn run(cli: &CliConfig, settings: &Settings) -> Result<()> {
    if let Command::Fav(fav) = &cli.command {
        return run_favorites(fav, settings);
    }

    let client = CountryClient::new(settings.client.clone())?;
    let countries = match &cli.command {
        Command::All => client.fetch_all_countries().await?,
        Command::Name { name } => client.fetch_country_by_name(name).await?,
        Command::Region { region } => client.fetch_countries_by_region(region).await?,
        Command::Currency { currency } => client.fetch_countries_by_currency(currency).await?,
        Command::Lang { language } => client.fetch_countries_by_language(language).await?,
        Command::Capital { capital } => client.fetch_countries_by_capital(capital).await?,
        Command::Demonym { demonym } => client.fetch_countries_by_demonym(demonym).await?,
        Command::Independent { status } => client.fetch_independent_countries(*status).await?,
        Command::Fav(_) => return Ok(()), // handled above
    };

    render(&countries, cli.format)
}

fn run_favorites(command: &FavCommand, settings: &Settings) -> Result<()> {
    let store = FavoritesStore::new(LocalStorage::new(settings.favorites_path.clone()));

    match command {
        FavCommand::List => {
            for code in store.get_favorites() {
                println!("{}", code);
            }
        }
        FavCommand::Add { code } => {
            store.add_to_favorites(code);
            println!("Added {} to favorites", code);
        }
        FavCommand::Remove { code } => {
            store.remove_from_favorites(code);
            println!("Removed {} from favorites", code);
        }
        FavCommand::Check { code } => {
            println!("{}", store.is_favorite(code));
        }
    }

    Ok(())
}

fn render(countries: &[Country], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for country in countries {
                println!(
                    "{}  {:<36} {:<10} pop {}",
                    country.cca3, country.name.common, country.region, country.population
                );
            }
            tracing::info!("{} countries", countries.len());
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(countries)?);
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(std::io::stdout());
            writer.write_record([
                "cca3",
                "name",
                "official_name",
                "capital",
                "region",
                "subregion",
                "population",
            ])?;
            for country in countries {
                let capital = country.capital.join("; ");
                let population = country.population.to_string();
                writer.write_record([
                    country.cca3.as_str(),
                    country.name.common.as_str(),
                    country.name.official.as_str(),
                    capital.as_str(),
                    country.region.as_str(),
                    country.subregion.as_str(),
                    population.as_str(),
                ])?;
            }
            writer.flush()?;
        }
    }

    Ok(())
}
