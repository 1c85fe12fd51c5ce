use clap::{Parser, Subcommand};
use serde_json::Value;

use wunder_core::{Client, Config, date};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "wunder", version, about = "Weather Underground API client")]
pub struct Cli {
    /// Location identifier in the service's path syntax, e.g.
    /// "CA/San_Francisco", a postal code, or "lat,lon". Defaults to the
    /// configured location.
    #[arg(long, global = true)]
    pub location: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the API key and default location.
    Configure,

    /// Current observation.
    Conditions,

    /// Daily forecast.
    Forecast {
        /// Forecast length in days: 3 or 10.
        #[arg(long, default_value_t = 3)]
        days: u8,
    },

    /// Hourly forecast.
    Hourly {
        /// Fetch the 10-day hourly forecast instead of the next 36 hours.
        #[arg(long)]
        ten_day: bool,
    },

    /// Historical conditions for one date or a date range.
    History {
        /// Single date in YYYYMMDD form; defaults to today.
        #[arg(long, conflicts_with_all = ["from", "to"])]
        date: Option<String>,

        /// Range start in YYYYMMDD form; defaults to yesterday.
        #[arg(long)]
        from: Option<String>,

        /// Range end in YYYYMMDD form; defaults to today.
        #[arg(long)]
        to: Option<String>,
    },

    /// Active alerts and special notices.
    Alerts,

    /// Record high and low temperatures.
    Almanac,

    /// Moon cycle and sunrise / sunset times.
    Astronomy,

    /// Resolve a location to city, state, coordinates, and nearby stations.
    Geolookup,

    /// Historical averages for a month-day span (at most 30 days, no year).
    Planner {
        /// Span start as MMDD, e.g. 0501.
        start_mmdd: String,

        /// Span end as MMDD, e.g. 0531.
        end_mmdd: String,
    },

    /// Tide extremes, or the raw tide series with --raw.
    Tide {
        #[arg(long)]
        raw: bool,
    },

    /// Webcams near the location.
    Webcams,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            command => {
                let config = Config::load()?;
                if !config.has_api_key() {
                    anyhow::bail!(
                        "No API key configured.\n\
                         Hint: run `wunder configure` and enter your API key."
                    );
                }

                let client = Client::from_config(&config);
                let report = query(&client, self.location.as_deref(), command).await?;
                println!("{}", serde_json::to_string_pretty(&report)?);
                Ok(())
            }
        }
    }
}

async fn query(client: &Client, location: Option<&str>, command: Command) -> anyhow::Result<Value> {
    let report = match command {
        Command::Configure => unreachable!("handled before dispatch"),
        Command::Conditions => client.conditions(location).await?,
        Command::Forecast { days } => match days {
            3 => client.forecast_3d(location).await?,
            10 => client.forecast_10d(location).await?,
            other => anyhow::bail!("forecast length must be 3 or 10 days, got {other}"),
        },
        Command::Hourly { ten_day } => {
            if ten_day {
                client.hourly_forecast_10d(location).await?
            } else {
                client.hourly_forecast_36h(location).await?
            }
        }
        Command::History { date: Some(date), .. } => {
            let date = date::parse_yyyymmdd(&date)?;
            client.history(location, Some(date)).await?
        }
        Command::History { from, to, .. } => {
            let days =
                client.history_date_range(location, from.as_deref(), to.as_deref()).await?;
            Value::Array(days)
        }
        Command::Alerts => client.alerts(location).await?,
        Command::Almanac => client.almanac(location).await?,
        Command::Astronomy => client.astronomy(location).await?,
        Command::Geolookup => client.geolookup(location).await?,
        Command::Planner { start_mmdd, end_mmdd } => {
            client.planner(location, &start_mmdd, &end_mmdd).await?
        }
        Command::Tide { raw } => {
            if raw {
                client.raw_tidal(location).await?
            } else {
                client.tidal(location).await?
            }
        }
        Command::Webcams => client.webcams(location).await?,
    };

    Ok(report)
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = inquire::Text::new("API key:").prompt()?;
    let default_location =
        inquire::Text::new("Default location:").with_default(&config.default_location).prompt()?;

    config.api_key = api_key;
    config.default_location = default_location;
    config.save()?;

    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}
