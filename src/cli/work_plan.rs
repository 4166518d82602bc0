use super::{emit_report, read_input};
use crate::models::{CotizadorConfig, ScheduleOptions};
use crate::parser::parse_work_plan;
use crate::report::to_report;
use crate::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub struct WorkPlanArgs {
    /// Raw model output (file path, or '-' / omitted for stdin)
    pub input: Option<PathBuf>,

    /// Working days per week
    #[arg(long)]
    pub workdays_per_week: Option<f64>,

    /// Working hours per day
    #[arg(long)]
    pub hours_per_day: Option<f64>,

    /// Timeframe in weeks
    #[arg(long)]
    pub timeframe_weeks: Option<f64>,
}

impl WorkPlanArgs {
    /// Schedule options from config, overridden by flags
    pub fn schedule(&self, config: &CotizadorConfig) -> ScheduleOptions {
        let base: ScheduleOptions = config.schedule.into();
        ScheduleOptions {
            workdays_per_week: self.workdays_per_week.unwrap_or(base.workdays_per_week),
            hours_per_day: self.hours_per_day.unwrap_or(base.hours_per_day),
            timeframe_weeks: self.timeframe_weeks.unwrap_or(base.timeframe_weeks),
        }
    }
}

pub fn run(args: &WorkPlanArgs, config: &CotizadorConfig) -> Result<()> {
    let raw = read_input(args.input.as_deref())?;
    let options = args.schedule(config);
    tracing::debug!(?options, "parsing work plan");

    let result = parse_work_plan(&raw, &options);
    if let Ok(parsed) = &result {
        tracing::info!(summary = %parsed.summary_line, "work plan parsed");
        if parsed.schedule.exceeds_timeframe {
            tracing::warn!(
                total_days = parsed.stats.total_duration_days,
                max_days = parsed.schedule.max_days,
                "work plan exceeds the requested timeframe"
            );
        }
    }
    emit_report(&to_report(&result))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let mut config = CotizadorConfig::default();
        config.schedule.hours_per_day = 6.0;
        let args = WorkPlanArgs {
            timeframe_weeks: Some(4.0),
            ..Default::default()
        };

        let options = args.schedule(&config);
        assert_eq!(options.hours_per_day, 6.0);
        assert_eq!(options.timeframe_weeks, 4.0);
        assert_eq!(options.workdays_per_week, 5.0);
    }
}
