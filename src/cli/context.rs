use std::path::PathBuf;

use crate::{
    config::{Config, ConfigManager},
    core::derive_range,
    domain::{ComparisonPeriod, DateRange, OverviewPoint},
    storage::{BundledSeries, JsonSeriesFile, SeriesSource},
    utils::closest_match,
};

use super::{
    commands::{self, CommandRegistry},
    errors::{CliError, CommandError},
    output::Formatter,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

/// State owned by the shell: preferences, the loaded series, and the
/// currently selected range and comparison period.
pub struct ShellContext {
    pub mode: CliMode,
    pub running: bool,
    pub(crate) registry: CommandRegistry,
    pub config: Config,
    config_manager: ConfigManager,
    pub series: Vec<OverviewPoint>,
    pub source: String,
    pub selected: Option<DateRange>,
    pub period: ComparisonPeriod,
    pub out: Formatter,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let config_manager = ConfigManager::new()?;
        Self::with_config_manager(mode, config_manager)
    }

    pub fn with_config_manager(
        mode: CliMode,
        config_manager: ConfigManager,
    ) -> Result<Self, CliError> {
        let config = config_manager.load()?;
        let source: Box<dyn SeriesSource> = match &config.data_path {
            Some(path) => Box::new(JsonSeriesFile::new(path.clone())),
            None => Box::new(BundledSeries),
        };
        let series = source.load()?;
        let out = Formatter::new(config.ui_color_enabled && mode == CliMode::Interactive);

        let mut context = Self {
            mode,
            running: true,
            registry: CommandRegistry::new(commands::all_definitions()),
            period: config.comparison_period,
            selected: None,
            source: source.describe(),
            series,
            config,
            config_manager,
            out,
        };
        context.reset_range();
        Ok(context)
    }

    /// Re-derives the trailing window from the loaded series. An empty series,
    /// or a window reaching past the supported calendar, leaves no range
    /// selected.
    pub fn reset_range(&mut self) -> Option<DateRange> {
        self.selected = match derive_range(&self.series, self.config.range_days) {
            Ok(range) => Some(range),
            Err(err) => {
                tracing::warn!(%err, "no default range available");
                None
            }
        };
        self.selected
    }

    pub fn require_range(&self) -> Result<DateRange, CommandError> {
        self.selected.ok_or(CommandError::NoRange)
    }

    pub fn replace_series(&mut self, series: Vec<OverviewPoint>, source: String) {
        self.series = series;
        self.source = source;
        self.reset_range();
    }

    pub fn save_config(&self) -> Result<(), CommandError> {
        self.config_manager.save(&self.config)?;
        Ok(())
    }

    pub fn config_path(&self) -> PathBuf {
        self.config_manager.path().to_path_buf()
    }

    pub fn prompt(&self) -> String {
        match self.selected {
            Some(range) => format!("overview [{}]> ", range),
            None => "overview> ".to_string(),
        }
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        let Some(handler) = self.registry.get(command).map(|definition| definition.handler) else {
            self.suggest_command(command);
            return Ok(LoopControl::Continue);
        };
        match handler(self, args) {
            Ok(()) => Ok(LoopControl::Continue),
            Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
            Err(err) => Err(err),
        }
    }

    pub(crate) fn report_error(&self, err: CommandError) {
        tracing::debug!(%err, "command failed");
        self.out.print_error(err);
    }

    fn suggest_command(&self, input: &str) {
        self.out
            .print_warning(format!("Unknown command `{input}`. Type `help` for a list."));
        if let Some(best) = closest_match(input, self.registry.names()) {
            self.out.print_info(format!("Suggestion: `{best}`?"));
        }
    }
}
