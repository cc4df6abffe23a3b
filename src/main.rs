//! LiteCode - Command line entry point

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use litecode::{
    config::{LogConfig, CONFIG},
    models::Difficulty,
    telemetry,
};

#[derive(Parser)]
#[command(name = "litecode")]
#[command(about = "LiteCode - Author problems, run code and bootstrap the judge database", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Problem metadata shared by create and edit
#[derive(Args)]
pub struct ProblemArgs {
    #[arg(long)]
    pub title: String,

    #[arg(long)]
    pub slug: String,

    /// Problem statement, or @path to read it from a file
    #[arg(long)]
    pub description: String,

    /// Easy, Medium or Hard
    #[arg(long, default_value = "")]
    pub difficulty: String,

    /// Time limit in milliseconds
    #[arg(long, default_value = "1000")]
    pub time_limit: u32,

    /// Memory limit in MB
    #[arg(long, default_value = "256")]
    pub memory_limit: u32,

    /// Tag id (repeatable)
    #[arg(long = "tag")]
    pub tags: Vec<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a problem with test cases imported from a JSON file
    Create {
        #[command(flatten)]
        problem: ProblemArgs,

        /// JSON array of test cases
        #[arg(short, long)]
        cases: PathBuf,
    },

    /// Update a problem from an edited test-case JSON document
    Edit {
        /// Problem id
        id: u64,

        #[command(flatten)]
        problem: ProblemArgs,

        /// JSON array of test cases
        #[arg(short, long)]
        cases: PathBuf,

        /// Form action (defaults to /problems/edit/{id})
        #[arg(long)]
        action: Option<String>,
    },

    /// Work with a test-case JSON file offline
    Cases {
        #[command(subcommand)]
        action: CasesAction,
    },

    /// Delete a problem
    Delete {
        id: u64,

        /// Confirm the deletion
        #[arg(long, default_value = "false")]
        yes: bool,
    },

    /// Run code against the public test cases
    Run(CodeArgs),

    /// Submit code for full judging
    Submit(CodeArgs),

    /// Log in
    Login {
        #[arg(short, long)]
        username: String,

        #[arg(short, long)]
        password: String,
    },

    /// Create an account
    Signup {
        #[arg(short, long)]
        username: String,

        #[arg(short, long)]
        email: String,

        #[arg(short, long)]
        password: String,

        #[arg(long, default_value = "")]
        full_name: String,
    },

    /// Print the problem listing URL for a set of filters
    Problems {
        #[arg(short, long)]
        difficulty: Option<Difficulty>,

        #[arg(short, long)]
        search: Option<String>,

        #[arg(long = "tag")]
        tags: Vec<String>,

        #[arg(long, default_value = "1")]
        page: u32,
    },

    /// Create the database and tables from the setup script
    DbSetup {
        /// SQL script (defaults to DB_SETUP_SCRIPT)
        #[arg(long)]
        script: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum CasesAction {
    /// Import into an empty collection and list the cards
    Import { file: PathBuf },

    /// Count usable test cases
    Validate { file: PathBuf },

    /// Pretty-print the document
    Format { file: PathBuf },
}

#[derive(Args)]
pub struct CodeArgs {
    /// Problem id
    pub id: u64,

    /// Source file
    #[arg(short, long)]
    pub file: PathBuf,

    #[arg(short, long, default_value = "python")]
    pub language: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match CONFIG.as_ref() {
        Ok(config) => config,
        Err(e) => {
            telemetry::init_tracing(&LogConfig::default());
            return Err(e.clone().into());
        }
    };
    telemetry::init_tracing(&config.log);

    match cli.command {
        Commands::Create { problem, cases } => {
            commands::create_problem(config, problem, &cases).await?;
        }
        Commands::Edit {
            id,
            problem,
            cases,
            action,
        } => {
            commands::edit_problem(config, id, problem, &cases, action).await?;
        }
        Commands::Cases { action } => {
            commands::cases(action).await?;
        }
        Commands::Delete { id, yes } => {
            commands::delete_problem(config, id, yes).await?;
        }
        Commands::Run(args) => {
            commands::run_code(config, args, false).await?;
        }
        Commands::Submit(args) => {
            commands::run_code(config, args, true).await?;
        }
        Commands::Login { username, password } => {
            commands::login(config, username, password).await?;
        }
        Commands::Signup {
            username,
            email,
            password,
            full_name,
        } => {
            commands::signup(config, username, email, password, full_name).await?;
        }
        Commands::Problems {
            difficulty,
            search,
            tags,
            page,
        } => {
            commands::list_problems(config, difficulty, search, tags, page)?;
        }
        Commands::DbSetup { script } => {
            commands::db_setup(config, script).await?;
        }
    }

    Ok(())
}
