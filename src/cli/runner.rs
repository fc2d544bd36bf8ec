//! CLI runner - executes commands

use crate::cli::commands::{BrowseCommand, Cli, Commands};
use crate::config::ClientConfig;
use crate::error::{Result, ResultExt};
use crate::render::{LastPage, Renderer, TextRenderer};
use crate::session::CollectionSession;
use crate::types::{Direction, RecordForm};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::{error, info};

const BROWSE_HELP: &str = "f = forward, b = back, n = new record, q = quit";

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let config = self.load_config()?;
        match &self.cli.command {
            Commands::List { forward } => self.list(&config, *forward).await,
            Commands::Browse => self.browse(&config).await,
            Commands::Create {
                name,
                age,
                description,
            } => {
                let mut form = RecordForm {
                    name: name.clone(),
                    age: age.clone(),
                    description: description.clone(),
                };
                self.create(&config, &mut form).await
            }
        }
    }

    /// Load config file (if any), apply flags, validate
    fn load_config(&self) -> Result<ClientConfig> {
        let mut config = match &self.cli.config {
            Some(path) => ClientConfig::load(path)?,
            None => ClientConfig::default(),
        };
        self.cli.apply_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    /// Print the first page, or the page `forward` steps after it
    async fn list(&self, config: &ClientConfig, forward: u32) -> Result<()> {
        let renderer = LastPage::new(TextRenderer::stdio());
        let mut session = CollectionSession::from_config(config, renderer)?;
        walk_forward(&mut session, forward).await?;
        session.into_renderer().flush();
        Ok(())
    }

    /// Interactive navigation over stdin
    async fn browse(&self, config: &ClientConfig) -> Result<()> {
        let mut session = CollectionSession::from_config(config, TextRenderer::stdio())?;
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        if let Err(e) = session.open().await {
            error!("Loading first page failed: {e}");
        }
        prompt(&format!("{BROWSE_HELP}\n> "))?;

        while let Some(line) = lines.next_line().await? {
            match BrowseCommand::parse(&line) {
                BrowseCommand::Forward => step(&mut session, Direction::Forward).await,
                BrowseCommand::Back => step(&mut session, Direction::Back).await,
                BrowseCommand::New => {
                    let Some(mut form) = read_form(&mut lines).await? else {
                        break;
                    };
                    if session.submit(&mut form).await.is_some() {
                        println!("Record created");
                    }
                }
                BrowseCommand::Quit => break,
                BrowseCommand::Help => println!("{BROWSE_HELP}"),
            }
            prompt("> ")?;
        }
        Ok(())
    }

    /// Submit a single record
    async fn create(&self, config: &ClientConfig, form: &mut RecordForm) -> Result<()> {
        let mut session = CollectionSession::from_config(config, TextRenderer::stdio())?;
        if let Some(created) = session.submit(form).await {
            let pretty =
                serde_json::to_string_pretty(&created).context("Formatting created record")?;
            println!("{pretty}");
        }
        Ok(())
    }
}

/// Open the first page, then move up to `forward` pages on
async fn walk_forward<R: Renderer>(
    session: &mut CollectionSession<R>,
    forward: u32,
) -> Result<()> {
    session.open().await?;
    for _ in 0..forward {
        if session.navigate(Direction::Forward).await?.is_none() {
            info!("Reached the last page");
            break;
        }
    }
    Ok(())
}

/// Navigate, logging failures instead of ending the session
async fn step<R: Renderer>(session: &mut CollectionSession<R>, direction: Direction) {
    match session.navigate(direction).await {
        Ok(Some(_)) => {}
        Ok(None) => println!("No page in that direction"),
        Err(e) => error!("Fetching page failed: {e}"),
    }
}

/// Read name, age and description; `None` on end of input
async fn read_form(lines: &mut Lines<BufReader<Stdin>>) -> Result<Option<RecordForm>> {
    let mut form = RecordForm::default();
    for (label, field) in [
        ("name", &mut form.name),
        ("age", &mut form.age),
        ("description", &mut form.description),
    ] {
        prompt(&format!("{label}: "))?;
        match lines.next_line().await? {
            Some(value) => *field = value.trim().to_string(),
            None => return Ok(None),
        }
    }
    Ok(Some(form))
}

fn prompt(text: &str) -> Result<()> {
    let mut stdout = std::io::stdout();
    write!(stdout, "{text}")?;
    stdout.flush()?;
    Ok(())
}
