use picker_core::Effect;
use picker_engine::{csv_artifact, json_artifact, write_artifact, Artifact, ExportError, PickerConfig};
use picker_logging::{picker_error, picker_info};

/// Executes core effects against the filesystem and reports the outcome as user-facing lines.
pub(crate) struct EffectRunner {
    config: PickerConfig,
    location: Option<String>,
}

impl EffectRunner {
    pub fn new(config: PickerConfig) -> Self {
        Self {
            config,
            location: None,
        }
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    /// URL last pushed with "Update URL".
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn run(&mut self, effects: Vec<Effect>) -> Vec<String> {
        let mut notices = Vec::with_capacity(effects.len());
        for effect in effects {
            let notice = match effect {
                Effect::DownloadJson { selections } => {
                    self.download(json_artifact(&selections, &self.config))
                }
                Effect::DownloadCsv { selections } => {
                    self.download(csv_artifact(&selections, &self.config))
                }
                Effect::SetLocation { query } => {
                    let url = self.config.share_url(&query);
                    picker_info!("SetLocation url_len={}", url.len());
                    let notice = format!("URL updated: {url}");
                    self.location = Some(url);
                    notice
                }
            };
            notices.push(notice);
        }
        notices
    }

    fn download(&self, artifact: Result<Artifact, ExportError>) -> String {
        let written = artifact.and_then(|artifact| {
            write_artifact(&self.config.output_dir, &artifact).map(|path| (artifact, path))
        });
        match written {
            Ok((artifact, path)) => {
                picker_info!(
                    "Wrote {} ({} bytes, {}) to {:?}",
                    artifact.file_name,
                    artifact.bytes.len(),
                    artifact.mime,
                    path
                );
                format!("Saved {}", path.display())
            }
            Err(err) => {
                picker_error!("Export to {:?} failed: {}", self.config.output_dir, err);
                format!("Export failed: {err}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use picker_core::SelectionState;

    fn selections() -> SelectionState {
        vec![("Tech".to_string(), vec!["AI".to_string()])]
            .into_iter()
            .collect()
    }

    #[test]
    fn downloads_land_in_the_output_dir() {
        let temp = tempfile::TempDir::new().unwrap();
        let mut runner = EffectRunner::new(PickerConfig::default_with_output(temp.path().to_path_buf()));

        let notices = runner.run(vec![
            Effect::DownloadJson {
                selections: selections(),
            },
            Effect::DownloadCsv {
                selections: selections(),
            },
        ]);

        assert_eq!(notices.len(), 2);
        assert!(notices.iter().all(|n| n.starts_with("Saved ")));
        assert!(temp.path().join("selections.json").is_file());
        assert_eq!(
            std::fs::read_to_string(temp.path().join("selections.csv")).unwrap(),
            "industry,niche\nTech,AI\n"
        );
    }

    #[test]
    fn set_location_records_full_url() {
        let mut runner = EffectRunner::new(PickerConfig {
            base_url: "https://picker.example.com/".to_string(),
            ..PickerConfig::default()
        });

        let notices = runner.run(vec![Effect::SetLocation {
            query: "industries=Tech".to_string(),
        }]);

        assert_eq!(
            notices,
            vec!["URL updated: https://picker.example.com/?industries=Tech".to_string()]
        );
        assert_eq!(
            runner.location(),
            Some("https://picker.example.com/?industries=Tech")
        );
    }

    #[test]
    fn write_failures_are_reported_not_raised() {
        let temp = tempfile::TempDir::new().unwrap();
        let blocker = temp.path().join("blocked");
        std::fs::write(&blocker, "x").unwrap();
        let mut runner = EffectRunner::new(PickerConfig::default_with_output(blocker));

        let notices = runner.run(vec![Effect::DownloadCsv {
            selections: selections(),
        }]);

        assert!(notices[0].starts_with("Export failed"));
    }
}
