use anyhow::Context;
use clap::{Parser, Subcommand};

use atmos_core::{Config, WeatherClient, WeatherData};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "atmos", version, about = "WeatherAPI.com client")]
pub struct Cli {
    /// WeatherAPI.com key; overrides the stored configuration.
    #[arg(long, global = true, env = "ATMOS_API_KEY")]
    pub key: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store your WeatherAPI.com key in the platform config directory.
    Configure,

    /// Show current weather for a city.
    Current {
        /// City name, e.g. "London".
        city: String,

        /// Language code for the condition text, passed through to the API.
        #[arg(long)]
        lang: Option<String>,
    },

    /// Show a multi-day forecast for a city.
    Forecast {
        /// City name, e.g. "Tokyo".
        city: String,

        /// Number of forecast days (1-14).
        #[arg(long, default_value_t = 3)]
        days: u8,

        /// Restrict the forecast to one date (YYYY-MM-DD, within 14 days).
        #[arg(long)]
        date: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let Cli { key, command } = self;

        match command {
            Command::Configure => configure(),
            Command::Current { city, lang } => {
                let client = client_from(key)?;
                let data = client.get_current_weather(&city, lang.as_deref()).await?;
                print_current(&data);
                Ok(())
            }
            Command::Forecast { city, days, date } => {
                let client = client_from(key)?;
                let data = client.get_forecast(&city, days, date.as_deref()).await?;
                print_current(&data);
                print_forecast(&data);
                Ok(())
            }
        }
    }
}

/// Build a client from `--key`/env, falling back to the stored config.
fn client_from(key: Option<String>) -> anyhow::Result<WeatherClient> {
    let client = match key {
        Some(key) => WeatherClient::new(key)?,
        None => {
            let config = Config::load()?;
            WeatherClient::new(config.require_api_key()?)?
        }
    };

    Ok(client)
}

fn configure() -> anyhow::Result<()> {
    let key = inquire::Password::new("WeatherAPI.com key:")
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    let mut config = Config::load()?;
    config.set_api_key(key);
    config.save()?;

    println!("API key saved to {}", Config::config_file_path()?.display());
    Ok(())
}

fn print_current(data: &WeatherData) {
    let location = &data.location;
    let name = location.name.as_deref().unwrap_or("<unknown location>");

    match (&location.region, &location.country) {
        (Some(region), Some(country)) if !region.is_empty() => {
            println!("{name}, {region}, {country}");
        }
        (_, Some(country)) => println!("{name}, {country}"),
        _ => println!("{name}"),
    }

    let current = &data.current;
    if let Some(condition) = current.condition.as_ref().and_then(|c| c.text.as_deref()) {
        println!("  {condition}");
    }
    if let (Some(c), Some(f)) = (current.temp_c, current.temp_f) {
        println!("  {c:.1} °C / {f:.1} °F");
    }
    if let Some(is_day) = current.is_day {
        println!("  {}", if is_day == 1 { "day" } else { "night" });
    }
    if let Some(updated) = &current.last_updated {
        println!("  last updated: {updated}");
    }
}

fn print_forecast(data: &WeatherData) {
    let Some(forecast) = &data.forecast else {
        return;
    };

    for day in &forecast.forecastday {
        println!();
        println!("{}", day.date);

        if let Some(condition) = day.day.condition.as_ref().and_then(|c| c.text.as_deref()) {
            println!("  {condition}");
        }
        if let (Some(max), Some(min)) = (day.day.maxtemp_c, day.day.mintemp_c) {
            println!("  max {max:.1} °C, min {min:.1} °C");
        }
        if let Some(rain) = day.day.daily_chance_of_rain {
            println!("  chance of rain: {rain}%");
        }
        if let (Some(sunrise), Some(sunset)) = (&day.astro.sunrise, &day.astro.sunset) {
            println!("  sunrise {sunrise}, sunset {sunset}");
        }
    }
}
