// CLI commands for the LiteCode client
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use litecode::{
    client::ApiClient,
    config::Config,
    db,
    editor::{format_buffer, render_cards, validate_buffer, TestCaseCollection},
    feedback::{Dismiss, Feedback, Presenter, Severity},
    models::{Difficulty, LoginForm, ProblemForm, SignupForm},
    pages::{
        edit::edit_action, AuthPage, CreatePage, EditPage, FormOutcome, ListProblemsQuery,
        ProblemDetailPage, ProblemsPage, ResultView,
    },
};

use crate::{CasesAction, CodeArgs, ProblemArgs};

/// Prints feedback to the terminal
struct TerminalPresenter;

impl Presenter for TerminalPresenter {
    fn present(&mut self, feedback: Feedback) {
        match feedback {
            Feedback::Modal {
                severity,
                title,
                text,
                dismiss,
            } => {
                let line = format!("{}: {}", title, text);
                match severity {
                    Severity::Success => println!("✓ {}", line),
                    Severity::Warning => eprintln!("! {}", line),
                    Severity::Error => eprintln!("✗ {}", line),
                }
                if let Dismiss::AutoClose(after) = dismiss {
                    tracing::debug!(after_ms = after.as_millis() as u64, "Toast auto-closes");
                }
            }
            Feedback::Blocking { title, text } => println!("{} - {}", title, text),
            Feedback::Inline(banner) => match banner.severity {
                Severity::Error => eprintln!("{}", banner.text),
                _ => println!("{}", banner.text),
            },
        }
    }

    fn navigate(&mut self, location: &str) {
        println!("-> {}", location);
    }
}

fn client(config: &Config) -> Result<ApiClient> {
    ApiClient::new(&config.client).context("Failed to build HTTP client")
}

async fn read_text(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))
}

async fn problem_form(args: ProblemArgs) -> Result<ProblemForm> {
    let description = match args.description.strip_prefix('@') {
        Some(path) => read_text(Path::new(path)).await?,
        None => args.description,
    };

    Ok(ProblemForm {
        title: args.title,
        slug: args.slug,
        description,
        difficulty: args.difficulty,
        time_limit: args.time_limit,
        memory_limit: args.memory_limit,
        tags: args.tags,
    })
}

fn finish(outcome: FormOutcome) -> Result<()> {
    match outcome {
        FormOutcome::Accepted => Ok(()),
        other => bail!("Request not completed ({:?})", other),
    }
}

/// Create a problem from metadata and a test-case file
pub async fn create_problem(config: &Config, args: ProblemArgs, cases: &Path) -> Result<()> {
    let mut page = CreatePage::new();
    page.form = problem_form(args).await?;

    // Drop the initial blank card; the file supplies every case
    let blank: Vec<_> = page
        .cards()
        .into_iter()
        .filter(|card| card.input.is_empty() && card.expected_output.is_empty())
        .map(|card| card.id)
        .collect();
    for id in blank {
        page.remove_test_case(id);
    }

    page.toggle_import_panel();
    page.set_import_text(read_text(cases).await?);
    let summary = page.import_from_json()?;
    println!("{}", summary.message());

    let api = client(config)?;
    finish(page.submit(&api, &mut TerminalPresenter).await)
}

/// Update a problem from metadata and an edited test-case file
pub async fn edit_problem(
    config: &Config,
    id: u64,
    args: ProblemArgs,
    cases: &Path,
    action: Option<String>,
) -> Result<()> {
    let action = action.unwrap_or_else(|| edit_action(id));
    let mut page = EditPage::load(action, problem_form(args).await?, "");
    page.set_buffer(read_text(cases).await?);

    let api = client(config)?;
    finish(page.submit(&api, &mut TerminalPresenter).await)
}

/// Offline test-case file tools
pub async fn cases(action: CasesAction) -> Result<()> {
    match action {
        CasesAction::Import { file } => {
            let mut collection = TestCaseCollection::new();
            let summary = litecode::editor::import_into(&mut collection, &read_text(&file).await?)?;
            for card in render_cards(&collection) {
                let tc = collection.get(card.id).context("card without test case")?;
                println!(
                    "{} [sample={} hidden={}] {} => {}",
                    card.heading(),
                    card.is_sample,
                    card.is_hidden,
                    tc.input_preview(40),
                    tc.output_preview(40)
                );
            }
            println!("{}", summary.message());
        }
        CasesAction::Validate { file } => match validate_buffer(&read_text(&file).await?) {
            Ok(report) => println!("{}", report.message()),
            Err(err) => bail!(err.editor_message()),
        },
        CasesAction::Format { file } => match format_buffer(&read_text(&file).await?) {
            Ok(pretty) => println!("{}", pretty),
            Err(err) => bail!(err.editor_message()),
        },
    }
    Ok(())
}

/// Delete a problem after confirmation
pub async fn delete_problem(config: &Config, id: u64, confirmed: bool) -> Result<()> {
    if !confirmed {
        TerminalPresenter.present(ProblemsPage::confirmation());
        bail!("Pass --yes to delete problem {}", id);
    }

    let api = client(config)?;
    finish(ProblemsPage::delete(&api, &mut TerminalPresenter, id, confirmed).await)
}

/// Run or submit a source file
pub async fn run_code(config: &Config, args: CodeArgs, submit: bool) -> Result<()> {
    let mut page = ProblemDetailPage::new(args.id, None, "");
    page.select_language(&args.language);
    page.set_code(read_text(&args.file).await?);

    let api = client(config)?;
    let view = if submit {
        page.submit(&api).await
    } else {
        page.run(&api).await
    };

    match view {
        ResultView::Run(run) => {
            println!("{}", run.verdict);
            for card in run.cards {
                println!("  Case {}: {}", card.case, card.status);
                if let Some(detail) = card.detail {
                    println!("    Input: {}", detail.input);
                    println!("    Expect: {}", detail.expected);
                    println!("    Actual: {}", detail.actual);
                }
            }
            if !run.accepted {
                bail!("Run not accepted");
            }
        }
        ResultView::Submit(result) => {
            println!("{}", result.verdict);
            println!("{}", result.summary);
            for line in &result.failure_lines {
                println!("  {}", line);
            }
            for line in [&result.time, &result.memory].into_iter().flatten() {
                println!("{}", line);
            }
            if let Some(link) = &result.submission_link {
                println!("View Submission: {}", link);
            }
            if !result.accepted {
                bail!("Submission not accepted");
            }
        }
        ResultView::Error(msg) => bail!(msg),
    }
    Ok(())
}

pub async fn login(config: &Config, username: String, password: String) -> Result<()> {
    let api = client(config)?;
    let form = LoginForm { username, password };
    finish(AuthPage::login(&api, &mut TerminalPresenter, &form).await)
}

pub async fn signup(
    config: &Config,
    username: String,
    email: String,
    password: String,
    full_name: String,
) -> Result<()> {
    let api = client(config)?;
    let form = SignupForm {
        username,
        email,
        password,
        full_name,
    };
    finish(AuthPage::signup(&api, &mut TerminalPresenter, &form).await)
}

pub fn list_problems(
    config: &Config,
    difficulty: Option<Difficulty>,
    search: Option<String>,
    tags: Vec<String>,
    page: u32,
) -> Result<()> {
    let query = ListProblemsQuery {
        difficulty,
        search,
        tags,
        page,
    };
    println!("{}", query.to_url(&config.client.base_url)?);
    Ok(())
}

/// Run the bootstrap script against the configured server
pub async fn db_setup(config: &Config, script: Option<PathBuf>) -> Result<()> {
    let mut database = config.database.clone();
    if let Some(script) = script {
        database.script_path = script;
    }

    db::setup_database(&database)
        .await
        .context("Error setting up database")?;
    println!("✓ Database setup completed successfully!");
    Ok(())
}
