//! REPL (Read-Eval-Print Loop) for the trip conversation

use crate::config::ReplConfig;
use crate::output::console::ConsoleFormatter;
use crate::progress::reporter::ProgressReporter;
use colored::Colorize;
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use tastetrip_application::{NoProgress, PlanTripUseCase, ProgressNotifier};
use tastetrip_domain::{
    DEFAULT_TRIP_DAYS, MAX_TRIP_DAYS, MIN_TRIP_DAYS, TasteProfile, TripPhase,
};
use tracing::{debug, warn};

const HISTORY_CAPACITY: usize = 1000;

/// Slash command entered at the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
enum ReplCommand {
    Help,
    Quit,
    Phase,
    Next,
    Tastes,
    Forget,
    Trips,
    Plan {
        destination: String,
        days: u32,
        budget: Option<String>,
    },
    Pack {
        days: Option<u32>,
    },
    Journey,
    Destiny {
        destination: Option<String>,
    },
    Feedback {
        rating: u8,
        comment: String,
    },
    /// Known command with bad arguments; carries the usage line
    Usage(&'static str),
    Unknown(String),
}

fn parse_command(line: &str) -> ReplCommand {
    let (name, rest) = match line.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (line, ""),
    };

    match name {
        "/quit" | "/exit" | "/q" => ReplCommand::Quit,
        "/help" | "/h" | "/?" => ReplCommand::Help,
        "/phase" => ReplCommand::Phase,
        "/next" => ReplCommand::Next,
        "/tastes" => ReplCommand::Tastes,
        "/forget" => ReplCommand::Forget,
        "/trips" => ReplCommand::Trips,
        "/plan" => parse_plan(rest),
        "/pack" => match rest {
            "" => ReplCommand::Pack { days: None },
            days => match days.parse() {
                Ok(days) if (MIN_TRIP_DAYS..=MAX_TRIP_DAYS).contains(&days) => {
                    ReplCommand::Pack { days: Some(days) }
                }
                _ => ReplCommand::Usage("/pack [days]"),
            },
        },
        "/journey" => ReplCommand::Journey,
        "/destiny" => ReplCommand::Destiny {
            destination: Some(rest.to_string()).filter(|d| !d.is_empty()),
        },
        "/feedback" => {
            let (rating, comment) = match rest.split_once(char::is_whitespace) {
                Some((rating, comment)) => (rating, comment.trim()),
                None => (rest, ""),
            };
            match rating.parse() {
                Ok(rating) => ReplCommand::Feedback {
                    rating,
                    comment: comment.to_string(),
                },
                Err(_) => ReplCommand::Usage("/feedback <1-10> [comment]"),
            }
        }
        other => ReplCommand::Unknown(other.to_string()),
    }
}

/// `/plan <destination>[, <days>[, <budget>]]`
fn parse_plan(args: &str) -> ReplCommand {
    const USAGE: &str = "/plan <destination>[, <days>[, <budget>]]";

    let mut parts = args.splitn(3, ',').map(str::trim);
    let destination = parts.next().unwrap_or_default();
    if destination.is_empty() {
        return ReplCommand::Usage(USAGE);
    }

    let days = match parts.next() {
        None | Some("") => DEFAULT_TRIP_DAYS,
        Some(days) => match days.parse() {
            Ok(days) => days,
            Err(_) => return ReplCommand::Usage(USAGE),
        },
    };

    ReplCommand::Plan {
        destination: destination.to_string(),
        days,
        budget: parts.next().map(str::to_string).filter(|b| !b.is_empty()),
    }
}

/// Interactive trip conversation
pub struct TripRepl {
    use_case: PlanTripUseCase,
    profile: TasteProfile,
    phase: TripPhase,
    config: ReplConfig,
}

impl TripRepl {
    pub fn new(use_case: PlanTripUseCase) -> Self {
        Self {
            use_case,
            profile: TasteProfile::new(),
            phase: TripPhase::Plan,
            config: ReplConfig::default(),
        }
    }

    /// Start from tastes given on the command line
    pub fn with_profile(mut self, profile: TasteProfile) -> Self {
        self.profile = profile;
        self
    }

    pub fn with_config(mut self, config: ReplConfig) -> Self {
        self.config = config;
        self
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> std::io::Result<()> {
        let mut line_editor = Reedline::create();

        if let Some(path) = self.config.resolve_history_file() {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            match FileBackedHistory::with_file(HISTORY_CAPACITY, path) {
                Ok(history) => line_editor = line_editor.with_history(Box::new(history)),
                Err(e) => warn!("History disabled: {}", e),
            }
        }

        self.print_welcome();

        loop {
            let prompt = DefaultPrompt::new(
                DefaultPromptSegment::Basic(self.phase.as_str().to_lowercase()),
                DefaultPromptSegment::Empty,
            );

            match line_editor.read_line(&prompt)? {
                Signal::Success(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }

                    if line.starts_with('/') {
                        if self.handle_command(parse_command(line)).await {
                            break;
                        }
                        continue;
                    }

                    self.process_message(line).await;
                }
                Signal::CtrlC => {
                    println!("^C");
                    continue;
                }
                Signal::CtrlD => {
                    println!("Bye!");
                    break;
                }
            }
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│            tastetrip - Trip Chat            │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("{}", TripPhase::welcome_message());
        println!();
        println!("Tell me what you like, or use a command:");
        println!("  {}  lock a trip", "/plan <destination>, <days>, <budget>".cyan());
        println!("  {}                          what to pack", "/pack [days]".cyan());
        println!("  {}                           things for the way", "/journey".cyan());
        println!("  {}             local highlights", "/destiny [destination]".cyan());
        println!("  {}        rate the trip", "/feedback <1-10> [comment]".cyan());
        println!("  {}                              all commands", "/help".cyan());
        println!();
    }

    fn print_help(&self) {
        println!();
        println!("Commands:");
        println!("  /plan <destination>, <days>, <budget>  - Lock a trip (PLAN)");
        println!("  /pack [days]                           - Outfits and brands (PACK)");
        println!("  /journey                               - Entertainment and snacks (JOURNEY)");
        println!("  /destiny [destination]                 - Local foods and places (DESTINY)");
        println!("  /feedback <1-10> [comment]             - Rate the trip (RETURN)");
        println!("  /phase                                 - Show the current phase");
        println!("  /next                                  - Move to the next phase");
        println!("  /tastes                                - Show remembered tastes");
        println!("  /forget                                - Forget session tastes");
        println!("  /trips                                 - List locked trips");
        println!("  /help, /h, /?                          - Show this help");
        println!("  /quit, /exit, /q                       - Exit chat");
        println!();
        println!("Anything else is read for tastes, e.g. \"I love ramen and city pop\".");
        println!();
    }

    fn progress(&self) -> Box<dyn ProgressNotifier> {
        if self.config.show_progress {
            Box::new(ProgressReporter::new())
        } else {
            Box::new(NoProgress)
        }
    }

    /// Handle slash commands. Returns true if should exit.
    async fn handle_command(&mut self, command: ReplCommand) -> bool {
        debug!("REPL command: {:?}", command);

        match command {
            ReplCommand::Quit => {
                println!("Bye!");
                return true;
            }
            ReplCommand::Help => self.print_help(),
            ReplCommand::Phase => println!("Current phase: {}", self.phase.as_str().bold()),
            ReplCommand::Next => match self.phase.next() {
                Some(next) => {
                    self.phase = next;
                    println!("Moving on to {}", next.as_str().bold());
                }
                None => println!("{} is the last phase.", self.phase.as_str()),
            },
            ReplCommand::Tastes => {
                let tastes: Vec<String> = self
                    .profile
                    .gather()
                    .into_iter()
                    .map(|t| t.into_content())
                    .collect();
                if tastes.is_empty() {
                    println!("{}", "No tastes yet. Tell me what you like!".dimmed());
                } else {
                    println!("Tastes: {}", tastes.join(", "));
                }
            }
            ReplCommand::Forget => {
                self.profile.tastes.clear();
                println!("{}", "Session tastes forgotten.".green());
            }
            ReplCommand::Trips => match self.use_case.trips().await {
                Ok(trips) => print!("{}", ConsoleFormatter::format_trips(&trips)),
                Err(e) => eprintln!("{} {}", "Error:".red(), e),
            },
            ReplCommand::Plan {
                destination,
                days,
                budget,
            } => match self.use_case.lock_plan(&destination, days, budget).await {
                Ok(trip) => {
                    println!("{}", trip.lock_message());
                    self.phase = TripPhase::Pack;
                }
                Err(e) => eprintln!("{} {}", "Error:".red(), e),
            },
            ReplCommand::Pack { days } => {
                let days = match days {
                    Some(days) => days,
                    None => self.latest_days().await,
                };
                let progress = self.progress();
                let list = self.use_case.pack(&self.profile, days, progress.as_ref()).await;
                print!("{}", ConsoleFormatter::format_packing(&list));
                self.phase = TripPhase::Journey;
            }
            ReplCommand::Journey => {
                let progress = self.progress();
                let kit = self.use_case.journey(&self.profile, progress.as_ref()).await;
                print!("{}", ConsoleFormatter::format_journey(&kit));
                self.phase = TripPhase::Destiny;
            }
            ReplCommand::Destiny { destination } => {
                let destination = match destination {
                    Some(destination) => Some(destination),
                    None => self.latest_destination().await,
                };
                let progress = self.progress();
                let highlights = self
                    .use_case
                    .destiny(&self.profile, destination, progress.as_ref())
                    .await;
                print!("{}", ConsoleFormatter::format_destiny(&highlights));
                self.phase = TripPhase::Return;
            }
            ReplCommand::Feedback { rating, comment } => {
                match self.use_case.feedback(rating, &comment) {
                    Ok(feedback) => print!("{}", ConsoleFormatter::format_feedback(&feedback)),
                    Err(e) => eprintln!("{} {}", "Error:".red(), e),
                }
            }
            ReplCommand::Usage(usage) => println!("Usage: {}", usage),
            ReplCommand::Unknown(cmd) => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
            }
        }

        false
    }

    async fn process_message(&mut self, message: &str) {
        println!();
        let progress = self.progress();
        let reply = self
            .use_case
            .chat(&mut self.profile, message, progress.as_ref())
            .await;
        println!("{}", reply);
        println!();
    }

    async fn latest_days(&self) -> u32 {
        match self.use_case.latest_trip().await {
            Ok(Some(trip)) => trip.days,
            Ok(None) => DEFAULT_TRIP_DAYS,
            Err(e) => {
                warn!("Could not read trips: {}", e);
                DEFAULT_TRIP_DAYS
            }
        }
    }

    async fn latest_destination(&self) -> Option<String> {
        match self.use_case.latest_trip().await {
            Ok(trip) => trip.map(|t| t.destination),
            Err(e) => {
                warn!("Could not read trips: {}", e);
                None
            }
        }
    }
}
