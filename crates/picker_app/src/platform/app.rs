use std::io::{self, BufRead, Write};

use anyhow::Context;
use picker_core::{update, AppState, Dataset, Msg, ShareLink, EMPTY_SELECTION_NOTICE};
use picker_engine::{load_dataset, PickerConfig};
use picker_logging::{picker_debug, picker_error, picker_info};

use super::commands::{self, Command};
use super::effects::EffectRunner;
use super::ui;

/// Loads the dataset, opens a session (optionally from a share link) and serves
/// commands from stdin until EOF or `quit`.
pub(crate) fn run_app(config: PickerConfig, link: Option<&str>) -> anyhow::Result<()> {
    let dataset = match load_dataset(&config.data_path) {
        Ok(dataset) => dataset,
        Err(err) => {
            picker_error!("Failed to load dataset {:?}: {}", config.data_path, err);
            return Err(err)
                .with_context(|| format!("Failed to read {}", config.data_path.display()));
        }
    };
    picker_info!(
        "Session starting: {} industries, output dir {:?}",
        dataset.len(),
        config.output_dir
    );

    let mut session = Session::new(&dataset, EffectRunner::new(config));
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    session.open(link.map(ShareLink::parse), &mut out)?;
    session.serve(stdin.lock(), &mut out)?;
    Ok(())
}

/// One user session: its own widget state over a shared read-only dataset.
pub(crate) struct Session<'a> {
    dataset: &'a Dataset,
    state: AppState,
    effects: EffectRunner,
}

impl<'a> Session<'a> {
    pub fn new(dataset: &'a Dataset, effects: EffectRunner) -> Self {
        Self {
            dataset,
            state: AppState::new(),
            effects,
        }
    }

    pub fn open(&mut self, link: Option<ShareLink>, out: &mut impl Write) -> io::Result<()> {
        self.dispatch(Msg::PageLoaded { link }, out)?;
        writeln!(out, "Type 'help' for commands.")
    }

    pub fn serve(&mut self, input: impl BufRead, out: &mut impl Write) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;
            let command = match commands::parse(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(hint) => {
                    writeln!(out, "{hint}")?;
                    continue;
                }
            };
            picker_debug!("command {:?}", command);

            match command {
                Command::Quit => break,
                Command::Help => writeln!(out, "{}", commands::HELP)?,
                Command::Show => write!(out, "{}", ui::render::render(&self.state.view()))?,
                Command::ShowLink => self.show_link(out)?,
                command => match commands::to_msg(&command, &self.state.view()) {
                    Ok(Some(msg)) => {
                        let wants_export = matches!(
                            msg,
                            Msg::DownloadJsonClicked
                                | Msg::DownloadCsvClicked
                                | Msg::UpdateUrlClicked
                        );
                        if self.dispatch(msg, out)? == 0 && wants_export {
                            writeln!(out, "{EMPTY_SELECTION_NOTICE}")?;
                        }
                    }
                    Ok(None) => {}
                    Err(hint) => writeln!(out, "{hint}")?,
                },
            }
            out.flush()?;
        }
        picker_info!("Session closed");
        Ok(())
    }

    /// Applies one message, re-renders if needed and runs its effects. Returns the
    /// number of effects executed.
    fn dispatch(&mut self, msg: Msg, out: &mut impl Write) -> io::Result<usize> {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, self.dataset, msg);
        let was_dirty = state.consume_dirty();
        self.state = state;

        if was_dirty {
            write!(out, "{}", ui::render::render(&self.state.view()))?;
        }
        let count = effects.len();
        for notice in self.effects.run(effects) {
            writeln!(out, "{notice}")?;
        }
        Ok(count)
    }

    fn show_link(&self, out: &mut impl Write) -> io::Result<()> {
        match self.state.view().share_query {
            Some(query) => writeln!(out, "{}", self.effects.config().share_url(&query))?,
            None => writeln!(out, "Nothing to share yet.")?,
        }
        if let Some(location) = self.effects.location() {
            writeln!(out, "Current location: {location}")?;
        }
        Ok(())
    }
}
