//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat, PageArgs, WalkArgs};
use crate::config::FetcherConfig;
use crate::error::Result;
use crate::http::{fetch_items, ItemsClient};
use crate::pagination::PageWalker;
use crate::types::{Direction, FetchRequest};
use serde::Serialize;
use std::io::Write;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command, writing results to stdout
    pub async fn run(&self) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.run_to(&mut out).await
    }

    /// Run the CLI command, writing results to `out`
    pub async fn run_to<W: Write>(&self, out: &mut W) -> Result<()> {
        let config = self.load_config()?;
        let client = ItemsClient::with_config(config.client_config())?;

        match &self.cli.command {
            Commands::Fetch(args) => self.fetch(&client, &config, args, out).await,
            Commands::Walk(args) => self.walk(&client, &config, args, out).await,
            Commands::Items(args) => self.items(&client, &config, args, out).await,
        }
    }

    /// Load the config file, then apply global flag overrides
    pub fn load_config(&self) -> Result<FetcherConfig> {
        let mut config = match &self.cli.config {
            Some(path) => FetcherConfig::from_file(path)?,
            None => FetcherConfig::default(),
        };

        if let Some(base_url) = &self.cli.base_url {
            config.base_url = Some(base_url.clone());
        }
        if let Some(timeout_secs) = self.cli.timeout_secs {
            config.timeout_secs = timeout_secs;
        }

        config.validate()?;
        Ok(config)
    }

    /// Fetch one page
    async fn fetch<W: Write>(
        &self,
        client: &ItemsClient,
        config: &FetcherConfig,
        args: &PageArgs,
        out: &mut W,
    ) -> Result<()> {
        let request = build_request(config, args)?;
        let page = fetch_items(client, &request).await?;
        self.emit(out, &page)
    }

    /// Print every page of a walk
    async fn walk<W: Write>(
        &self,
        client: &ItemsClient,
        config: &FetcherConfig,
        args: &WalkArgs,
        out: &mut W,
    ) -> Result<()> {
        let mut walker = build_walker(client, config, args)?;
        while let Some(page) = walker.next_page().await? {
            self.emit(out, &page)?;
        }
        Ok(())
    }

    /// Print the items of a walk as one list
    async fn items<W: Write>(
        &self,
        client: &ItemsClient,
        config: &FetcherConfig,
        args: &WalkArgs,
        out: &mut W,
    ) -> Result<()> {
        let items = build_walker(client, config, args)?.collect_items().await?;
        self.emit(out, &items)
    }

    fn emit<W: Write, T: Serialize + ?Sized>(&self, out: &mut W, value: &T) -> Result<()> {
        let rendered = match self.cli.format {
            OutputFormat::Json => serde_json::to_string(value)?,
            OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
        };
        writeln!(out, "{rendered}")?;
        Ok(())
    }
}

/// Command-line values win over the config file
fn build_request(config: &FetcherConfig, args: &PageArgs) -> Result<FetchRequest> {
    let api_url = match &args.api_url {
        Some(url) => url.as_str(),
        None => config.require_api_url()?,
    };
    let limit = args.limit.unwrap_or(config.limit);
    Ok(FetchRequest::new(api_url, limit, args.cursor))
}

fn build_walker<'a>(
    client: &'a ItemsClient,
    config: &FetcherConfig,
    args: &WalkArgs,
) -> Result<PageWalker<'a, ItemsClient>> {
    let request = build_request(config, &args.page)?;
    let mut walker = PageWalker::new(client, request).direction(Direction::from(args.direction));
    if let Some(max) = args.max_pages {
        walker = walker.max_pages(max);
    }
    Ok(walker)
}
