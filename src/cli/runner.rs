//! CLI runner - executes commands

use crate::api::{ApiClient, FeedListParams, MediaListParams, TagListParams};
use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::ExportConfig;
use crate::error::Result;
use crate::output::{write_rows_to_path, FieldSpec};
use crate::pagination::{CursorPaginator, ListOperation};
use crate::types::OptionStringExt;
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

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
            Commands::Media {
                name,
                tags,
                sort,
                output,
            } => {
                let api = ApiClient::from_config(&config)?;
                let params = MediaListParams {
                    name: name.clone().none_if_empty(),
                    tag_groups: tags.clone(),
                    sort: sort.map(Into::into),
                };
                let path = resolve_output(&config, output.as_deref(), "media.csv");
                self.export(&config, "media", &api.media(), &params, &FieldSpec::media(), &path)
                    .await
            }
            Commands::Feeds { media_id, output } => {
                let api = ApiClient::from_config(&config)?;
                let params = FeedListParams {
                    media_id: *media_id,
                };
                let path =
                    resolve_output(&config, output.as_deref(), &format!("feeds-{media_id}.csv"));
                self.export(&config, "feeds", &api.feeds(), &params, &FieldSpec::feeds(), &path)
                    .await
            }
            Commands::Tags {
                tag_sets_id,
                output,
            } => {
                let api = ApiClient::from_config(&config)?;
                let params = TagListParams {
                    tag_sets_id: *tag_sets_id,
                };
                let path = resolve_output(
                    &config,
                    output.as_deref(),
                    &format!("tags-{tag_sets_id}.csv"),
                );
                self.export(&config, "tags", &api.tags(), &params, &FieldSpec::tags(), &path)
                    .await
            }
            Commands::TagSets => {
                self.tag_sets(&config);
                Ok(())
            }
        }
    }

    /// Load the config file (if any) and apply command-line overrides
    fn load_config(&self) -> Result<ExportConfig> {
        let mut config = match &self.cli.config {
            Some(path) => ExportConfig::load(path)?,
            None => ExportConfig::default(),
        };

        if let Some(base_url) = &self.cli.base_url {
            config.base_url.clone_from(base_url);
        }
        if let Some(var) = &self.cli.api_key_env {
            config.api_key_env.clone_from(var);
        }
        if let Some(page_size) = self.cli.page_size {
            config.page_size = page_size;
        }

        config.validate()?;
        Ok(config)
    }

    /// Traverse one listing and write it to a CSV file
    async fn export<L>(
        &self,
        config: &ExportConfig,
        entity: &str,
        listing: &L,
        params: &L::Params,
        spec: &FieldSpec,
        path: &Path,
    ) -> Result<()>
    where
        L: ListOperation,
    {
        let started = Instant::now();
        let paginator = CursorPaginator::for_operation(listing, config.page_size()?)
            .with_max_records(self.cli.max_records);

        let records = paginator.fetch_all(listing, params).await?;
        let rows = write_rows_to_path(path, &records, spec, None)?;

        info!(
            entity,
            rows,
            path = %path.display(),
            "Export complete"
        );

        self.output_message(&json!({
            "type": "EXPORT",
            "entity": entity,
            "records": rows,
            "path": path.display().to_string(),
            "duration_ms": started.elapsed().as_millis() as u64
        }));

        Ok(())
    }

    /// Print the configured tag-set identifiers
    fn tag_sets(&self, config: &ExportConfig) {
        let tag_sets: Vec<Value> = config
            .tag_sets
            .entries()
            .into_iter()
            .map(|(name, id)| json!({ "name": name, "tag_sets_id": id }))
            .collect();

        self.output_message(&json!({
            "type": "TAG_SETS",
            "tag_sets": tag_sets
        }));
    }

    /// Output a message
    fn output_message(&self, msg: &Value) {
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

/// Explicit output path, or a default file name under the output directory
fn resolve_output(config: &ExportConfig, output: Option<&Path>, default_name: &str) -> PathBuf {
    output.map_or_else(|| config.output_dir.join(default_name), Path::to_path_buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn runner(args: &[&str]) -> Runner {
        Runner::new(Cli::try_parse_from(args).unwrap())
    }

    #[test]
    fn test_overrides_apply_on_top_of_defaults() {
        let runner = runner(&[
            "mediapager",
            "--base-url",
            "http://localhost:9000",
            "--api-key-env",
            "OTHER_KEY",
            "--page-size",
            "25",
            "tag-sets",
        ]);

        let config = runner.load_config().unwrap();
        assert_eq!(config.base_url, "http://localhost:9000");
        assert_eq!(config.api_key_env, "OTHER_KEY");
        assert_eq!(config.page_size, 25);
    }

    #[test]
    fn test_zero_page_size_override_rejected() {
        let runner = runner(&["mediapager", "--page-size", "0", "tag-sets"]);
        assert!(runner.load_config().is_err());
    }

    #[test]
    fn test_config_file_then_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "page_size: 10\noutput_dir: out\n").unwrap();

        let runner = runner(&[
            "mediapager",
            "-C",
            path.to_str().unwrap(),
            "--page-size",
            "40",
            "tag-sets",
        ]);

        let config = runner.load_config().unwrap();
        assert_eq!(config.page_size, 40);
        assert_eq!(config.output_dir, PathBuf::from("out"));
    }

    #[test]
    fn test_resolve_output_defaults_under_output_dir() {
        let config = ExportConfig {
            output_dir: PathBuf::from("exports"),
            ..ExportConfig::default()
        };

        assert_eq!(
            resolve_output(&config, None, "feeds-1.csv"),
            PathBuf::from("exports/feeds-1.csv")
        );
        assert_eq!(
            resolve_output(&config, Some(Path::new("x.csv")), "feeds-1.csv"),
            PathBuf::from("x.csv")
        );
    }
}
