//! CLI command definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tastetrip_domain::{Category, DEFAULT_TRIP_DAYS, TasteProfile};

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// Human-readable colored text
    Text,
    /// Pretty-printed JSON
    Json,
}

impl From<FormatArg> for tastetrip_domain::OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => tastetrip_domain::OutputFormat::Text,
            FormatArg::Json => tastetrip_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for tastetrip
#[derive(Parser, Debug)]
#[command(name = "tastetrip")]
#[command(author, version, about = "Taste-driven trip planner with recommendation fallback")]
#[command(long_about = r#"
tastetrip turns what you like (music, food, fashion, ...) into travel tips.

Each taste is looked up in a structured recommendation source for every
category at once. Categories that come back thin are topped up by a
generative model in a single batched request.

A trip moves through five phases: PLAN, PACK, JOURNEY, DESTINY, RETURN.

Configuration files are loaded from (in priority order):
1. TASTETRIP_* environment variables (e.g. TASTETRIP_GENERATIVE__MODEL)
2. --config <path>        Explicit config file
3. ./tastetrip.toml       Project-level config
4. ~/.config/tastetrip/config.toml   Global config

Example:
  tastetrip recommend "city pop" -c music -c place
  tastetrip plan Tokyo --days 5 --budget "1500 EUR"
  tastetrip pack --music "city pop" --fashion streetwear
  tastetrip chat
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<FormatArg>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Recommendations for a single taste
    Recommend {
        /// The taste, e.g. "jazz" or "ramen"
        taste: String,

        /// Categories to fill (repeatable); defaults come from config
        #[arg(short = 'c', long = "category", value_name = "CATEGORY", value_parser = parse_category)]
        categories: Vec<Category>,
    },

    /// Lock in a trip plan (PLAN)
    Plan {
        /// Where you are going
        destination: String,

        /// Trip length in days (1-60)
        #[arg(short, long, default_value_t = DEFAULT_TRIP_DAYS, value_parser = clap::value_parser!(u32).range(1..=60))]
        days: u32,

        /// Free-text budget, e.g. "1500 EUR"
        #[arg(short, long)]
        budget: Option<String>,
    },

    /// Outfits and brands to pack (PACK)
    Pack {
        #[command(flatten)]
        tastes: TasteArgs,

        /// Trip length (1-60); defaults to the latest locked trip
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=60))]
        days: Option<u32>,
    },

    /// Entertainment and snacks for the way (JOURNEY)
    Journey {
        #[command(flatten)]
        tastes: TasteArgs,
    },

    /// Local foods and places to visit (DESTINY)
    Destiny {
        #[command(flatten)]
        tastes: TasteArgs,

        /// Destination; defaults to the latest locked trip
        #[arg(long)]
        destination: Option<String>,
    },

    /// Rate the trip (RETURN)
    Feedback {
        /// Rating from 1 to 10
        #[arg(value_parser = clap::value_parser!(u8).range(1..=10))]
        rating: u8,

        /// Optional comment
        comment: Vec<String>,
    },

    /// Start the interactive trip conversation
    Chat {
        #[command(flatten)]
        tastes: TasteArgs,
    },

    /// List locked trips
    Trips,

    /// Show configuration sources and the effective configuration
    Config,
}

/// Taste inputs shared by the phase commands
#[derive(Args, Debug, Clone, Default)]
pub struct TasteArgs {
    /// A taste (repeatable)
    #[arg(short = 't', long = "taste", value_name = "TASTE")]
    pub tastes: Vec<String>,

    /// Favourite music
    #[arg(long)]
    pub music: Option<String>,

    /// Favourite food
    #[arg(long)]
    pub food: Option<String>,

    /// Favourite fashion style
    #[arg(long)]
    pub fashion: Option<String>,
}

impl TasteArgs {
    pub fn to_profile(&self) -> TasteProfile {
        let mut profile = TasteProfile::new().with_tastes(self.tastes.iter().cloned());
        profile.music = self.music.clone();
        profile.food = self.food.clone();
        profile.fashion = self.fashion.clone();
        profile
    }
}

fn parse_category(value: &str) -> Result<Category, String> {
    value.parse::<Category>().map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_recommend() {
        let cli = Cli::parse_from(["tastetrip", "recommend", "jazz", "-c", "music", "-c", "Place"]);
        match cli.command {
            Some(Command::Recommend { taste, categories }) => {
                assert_eq!(taste, "jazz");
                assert_eq!(categories, vec![Category::Music, Category::Place]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_category_rejected() {
        let result = Cli::try_parse_from(["tastetrip", "recommend", "jazz", "-c", "weather"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_plan_defaults() {
        let cli = Cli::parse_from(["tastetrip", "plan", "Tokyo"]);
        match cli.command {
            Some(Command::Plan {
                destination,
                days,
                budget,
            }) => {
                assert_eq!(destination, "Tokyo");
                assert_eq!(days, DEFAULT_TRIP_DAYS);
                assert!(budget.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_feedback_rating_range() {
        assert!(Cli::try_parse_from(["tastetrip", "feedback", "11"]).is_err());
        let cli = Cli::parse_from(["tastetrip", "feedback", "9", "great", "food"]);
        match cli.command {
            Some(Command::Feedback { rating, comment }) => {
                assert_eq!(rating, 9);
                assert_eq!(comment.join(" "), "great food");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_taste_args_profile() {
        let cli = Cli::parse_from([
            "tastetrip", "pack", "-t", "anime", "--music", "city pop", "--days", "4", "-o", "json",
        ]);
        assert_eq!(cli.output, Some(FormatArg::Json));
        match cli.command {
            Some(Command::Pack { tastes, days }) => {
                let profile = tastes.to_profile();
                assert_eq!(profile.tastes, vec!["anime"]);
                assert_eq!(profile.music.as_deref(), Some("city pop"));
                assert_eq!(days, Some(4));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_trip_days_range() {
        assert!(Cli::try_parse_from(["tastetrip", "pack", "--days", "0"]).is_err());
        assert!(Cli::try_parse_from(["tastetrip", "pack", "--days", "61"]).is_err());
        assert!(Cli::try_parse_from(["tastetrip", "plan", "Oslo", "-d", "0"]).is_err());
        let cli = Cli::parse_from(["tastetrip", "pack", "--days", "60"]);
        assert!(matches!(cli.command, Some(Command::Pack { days: Some(60), .. })));
    }

    #[test]
    fn test_no_subcommand_is_allowed() {
        let cli = Cli::parse_from(["tastetrip", "-vv"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 2);
    }
}
