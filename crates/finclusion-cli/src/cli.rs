//! CLI argument definitions for the financial inclusion predictor.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use finclusion_cli::answers::AnswerOverrides;
use finclusion_model::{
    HouseholdSize, JobType, LocationType, MaritalStatus, RespondentAge, YesNo,
};

#[derive(Parser)]
#[command(
    name = "finclusion",
    version,
    about = "Financial inclusion predictor - estimate bank account ownership from survey answers",
    long_about = "Estimate whether an individual holds a bank account.\n\n\
                  Answers are encoded into the 20-column feature vector a pre-trained\n\
                  classifier expects, echoed for transparency, and scored on request."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow survey answers to appear in logs.
    ///
    /// Answers describe a real person and are redacted by default.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// Configuration file (default: $FINCLUSION_CONFIG, then ./finclusion.toml).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Encode answers and print the feature vector without scoring it.
    Encode(EncodeArgs),

    /// Encode answers and predict bank account ownership.
    Predict(PredictArgs),

    /// List the feature columns in model order.
    Schema,

    /// Inspect a model artifact and check it against the encoder schema.
    Model(ModelArgs),
}

#[derive(Args)]
pub struct EncodeArgs {
    #[command(flatten)]
    pub answers: AnswerArgs,

    /// Output format.
    #[arg(long = "output", value_enum, default_value = "text")]
    pub output: OutputFormatArg,
}

#[derive(Args)]
pub struct PredictArgs {
    #[command(flatten)]
    pub answers: AnswerArgs,

    #[command(flatten)]
    pub model: ModelSourceArgs,

    /// Output format.
    #[arg(long = "output", value_enum, default_value = "text")]
    pub output: OutputFormatArg,
}

#[derive(Args)]
pub struct ModelArgs {
    #[command(flatten)]
    pub model: ModelSourceArgs,
}

#[derive(Args)]
pub struct ModelSourceArgs {
    /// Model artifact (default: $FINCLUSION_MODEL, config, then financialinclusionmodel.json).
    #[arg(long = "model", value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Expected SHA-256 of the model artifact.
    #[arg(long = "model-sha256", value_name = "HEX")]
    pub sha256: Option<String>,
}

/// The prediction form. Unset answers keep their defaults.
#[derive(Args)]
pub struct AnswerArgs {
    /// Read answers from a JSON or TOML file; flags override its values.
    #[arg(long = "answers", value_name = "FILE")]
    pub answers_file: Option<PathBuf>,

    /// Location type: Rural or Urban [default: Rural].
    #[arg(long = "location", value_name = "TYPE")]
    pub location: Option<LocationType>,

    /// Cellphone access: Yes or No [default: Yes].
    #[arg(long = "cellphone", value_name = "YES|NO")]
    pub cellphone: Option<YesNo>,

    /// Household size, 1 to 10 [default: 3].
    #[arg(long = "household-size", value_name = "N")]
    pub household_size: Option<HouseholdSize>,

    /// Age of respondent, 18 to 100 [default: 30].
    #[arg(long = "age", value_name = "YEARS")]
    pub age: Option<RespondentAge>,

    /// Marital status: Married or Single [default: Married].
    #[arg(long = "marital", value_name = "STATUS")]
    pub marital: Option<MaritalStatus>,

    /// Has income: Yes or No [default: Yes].
    #[arg(long = "income", value_name = "YES|NO")]
    pub income: Option<YesNo>,

    /// Job type, e.g. "Self employed" or self-employed [default: Farming and Fishing].
    #[arg(long = "job-type", value_name = "JOB")]
    pub job_type: Option<JobType>,

    /// Primary education.
    #[arg(long = "primary")]
    pub primary: bool,

    /// No formal education.
    #[arg(long = "no-education")]
    pub no_education: bool,

    /// Secondary education.
    #[arg(long = "secondary")]
    pub secondary: bool,

    /// Tertiary education.
    #[arg(long = "tertiary")]
    pub tertiary: bool,

    /// Other education.
    #[arg(long = "other-education")]
    pub other_education: bool,
}

impl AnswerArgs {
    pub fn overrides(&self) -> AnswerOverrides {
        AnswerOverrides {
            location: self.location,
            cellphone_access: self.cellphone,
            household_size: self.household_size,
            age: self.age,
            marital_status: self.marital,
            has_income: self.income,
            job_type: self.job_type,
            primary_education: self.primary,
            no_education: self.no_education,
            secondary_education: self.secondary,
            tertiary_education: self.tertiary,
            other_education: self.other_education,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Text,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
