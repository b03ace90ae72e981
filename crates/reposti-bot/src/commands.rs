//! Slash commands
//!
//! Definitions registered with Discord and parsing of incoming invocations.

use serenity::builder::{CreateCommand, CreateCommandOption};
use serenity::model::application::{CommandInteraction, CommandOptionType, ResolvedOption, ResolvedValue};

use crate::application::SpiceAdjustment;

pub const COFFEE: &str = "coffee";
pub const GOOD_MERLIN: &str = "goodmerlin";
pub const SPICE: &str = "spice";
const SPICE_GET: &str = "get";
const SPICE_SET: &str = "set";
const TOLERANCE: &str = "tolerance";
const TOLERANCE_CHOICES: [&str; 4] = ["more", "less", "max", "min"];

/// A parsed slash command invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotCommand {
    Coffee,
    GoodMerlin,
    SpiceGet,
    SpiceSet(SpiceAdjustment),
}

impl BotCommand {
    /// Parse from the command name, the first subcommand, and its `tolerance` value
    pub fn parse(name: &str, subcommand: Option<&str>, tolerance: Option<&str>) -> Option<Self> {
        match (name, subcommand) {
            (COFFEE, _) => Some(Self::Coffee),
            (GOOD_MERLIN, _) => Some(Self::GoodMerlin),
            (SPICE, Some(SPICE_GET)) => Some(Self::SpiceGet),
            (SPICE, Some(SPICE_SET)) => tolerance?.parse::<SpiceAdjustment>().ok().map(Self::SpiceSet),
            _ => None,
        }
    }

    pub fn from_interaction(command: &CommandInteraction) -> Option<Self> {
        let options = command.data.options();

        let (subcommand, tolerance) = match options.first() {
            Some(ResolvedOption {
                name,
                value: ResolvedValue::SubCommand(inner),
                ..
            }) => {
                let tolerance = inner.iter().find_map(|option| match &option.value {
                    ResolvedValue::String(value) if option.name == TOLERANCE => Some(*value),
                    _ => None,
                });
                (Some(*name), tolerance)
            }
            _ => (None, None),
        };

        Self::parse(&command.data.name, subcommand, tolerance)
    }
}

/// All commands to register
pub fn definitions() -> Vec<CreateCommand> {
    let tolerance = TOLERANCE_CHOICES.iter().fold(
        CreateCommandOption::new(CommandOptionType::String, TOLERANCE, "Specify more or less spice (sass)")
            .required(true),
        |option, choice| option.add_string_choice(*choice, *choice),
    );

    vec![
        CreateCommand::new(COFFEE).description("Gives you coffee"),
        CreateCommand::new(GOOD_MERLIN).description("Say good morning"),
        CreateCommand::new(SPICE)
            .description("Get or set your tolerance level for spiciness from the bot")
            .add_option(CreateCommandOption::new(
                CommandOptionType::SubCommand,
                SPICE_GET,
                "See how much spice you are currently set for",
            ))
            .add_option(
                CreateCommandOption::new(CommandOptionType::SubCommand, SPICE_SET, "Set your spice level")
                    .add_sub_option(tolerance),
            ),
    ]
}
