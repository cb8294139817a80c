//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::LoaderConfig;
use crate::error::{Error, Result};
use crate::schema;
use crate::source::ArticleSource;
use crate::types::{JsonValue, Record};
use futures::{pin_mut, StreamExt};
use serde_json::json;

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
        match &self.cli.command {
            Commands::Check { incremental_column } => self.check(incremental_column.as_deref()),
            Commands::Schema => self.schema(),
            Commands::Read {
                query,
                api_key,
                batch_size,
                page_limit,
            } => {
                self.read(
                    query.as_deref(),
                    api_key.as_deref(),
                    *batch_size,
                    *page_limit,
                )
                .await
            }
        }
    }

    /// Load the loader configuration
    fn load_config(&self) -> Result<LoaderConfig> {
        let path = self
            .cli
            .config
            .as_ref()
            .ok_or_else(|| Error::config("Config file not specified (use -c flag)"))?;
        LoaderConfig::from_yaml_file(path)
    }

    /// Validate configuration and connection request
    fn check(&self, incremental_column: Option<&str>) -> Result<()> {
        let config = self.load_config()?;
        let source = ArticleSource::new(config)?;

        // The incremental rejection is fatal: propagate it so the binary
        // exits non-zero.
        source.connect(incremental_column)?;

        self.output_message(&json!({
            "type": "CONNECTION_STATUS",
            "connectionStatus": {
                "status": "SUCCEEDED",
                "message": "Configuration valid"
            }
        }));

        Ok(())
    }

    /// Print the article field catalog
    fn schema(&self) -> Result<()> {
        match self.cli.format {
            OutputFormat::Pretty => {
                for field in schema::article_fields() {
                    println!("{field}");
                }
            }
            OutputFormat::Json => {
                self.output_message(&json!({
                    "type": "SCHEMA",
                    "fields": schema::article_fields()
                }));
            }
        }
        Ok(())
    }

    /// Fetch articles and print them in batches
    async fn read(
        &self,
        query: Option<&str>,
        api_key: Option<&str>,
        batch_size: Option<usize>,
        page_limit: Option<u64>,
    ) -> Result<()> {
        let mut config = self.load_config()?;

        // Flag overrides win over the config file
        if let Some(query) = query {
            config.query = query.to_string();
        }
        if let Some(api_key) = api_key {
            config.api_key = api_key.to_string();
        }
        if let Some(batch_size) = batch_size {
            config.batch_size = batch_size;
        }
        if let Some(page_limit) = page_limit {
            config.page_limit = page_limit;
        }
        config.validate()?;

        let batch_size = config.batch_size;
        let mut source = ArticleSource::new(config)?;
        source.connect(None)?;

        let mut index = 0usize;
        let mut total = 0usize;

        {
            let stream = source.batches(batch_size);
            pin_mut!(stream);

            while let Some(batch) = stream.next().await {
                let batch = batch?;
                total += batch.len();

                match self.cli.format {
                    OutputFormat::Pretty => {
                        println!("{index} Batch of {} items", batch.len());
                        for record in &batch {
                            println!(
                                "  - {} - {}",
                                display_field(record, "_id"),
                                display_field(record, "headline.main")
                            );
                        }
                    }
                    OutputFormat::Json => {
                        for record in &batch {
                            self.output_message(&json!({
                                "type": "RECORD",
                                "record": { "batch": index, "data": record }
                            }));
                        }
                    }
                }

                index += 1;
            }
        }

        source.disconnect();

        match self.cli.format {
            OutputFormat::Pretty => {
                println!("Fetched {total} records in {index} batches");
            }
            OutputFormat::Json => {
                self.output_message(&json!({
                    "type": "SUMMARY",
                    "summary": { "records": total, "batches": index }
                }));
            }
        }

        Ok(())
    }

    /// Output a message
    fn output_message(&self, msg: &JsonValue) {
        match self.cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(msg).unwrap_or_default());
            }
            OutputFormat::Pretty => {
                println!("{}", serde_json::to_string_pretty(msg).unwrap_or_default());
            }
        }
    }
}

/// Render a record field for display, with a placeholder for missing ones
fn display_field(record: &Record, field: &str) -> String {
    match record.get(field) {
        Some(JsonValue::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Map;

    #[test]
    fn test_display_field() {
        let mut record = Map::new();
        record.insert("_id".to_string(), json!("doc-1"));
        record.insert("word_count".to_string(), json!(42));

        assert_eq!(display_field(&record, "_id"), "doc-1");
        assert_eq!(display_field(&record, "word_count"), "42");
        assert_eq!(display_field(&record, "missing"), "-");
    }
}
