use std::path::PathBuf;

use clap::Args;
use restwell_core::{calculate_report, Config, SleepInputs, WakeTime};

#[derive(Args)]
pub struct BedtimeArgs {
    /// Desired wake time as HH:MM
    #[arg(long, default_value = "07:00")]
    pub wake: String,
    /// Desired hours of sleep (4.0-12.0, step 0.25)
    #[arg(long, default_value = "8.0")]
    pub sleep: f64,
    /// Daily cups of coffee (0-20)
    #[arg(long, default_value = "0")]
    pub coffee: u8,
    /// Path to a custom model artifact
    #[arg(long)]
    pub model: Option<PathBuf>,
    /// Print the full calculation report as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: BedtimeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let model = super::resolve_model(args.model, &config)?;

    let wake = WakeTime::parse(&args.wake)?;
    let inputs = SleepInputs::new(wake, args.sleep, args.coffee)?;

    let report = calculate_report(&model, &inputs)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let when = if report.bedtime.previous_day {
            " (previous day)"
        } else {
            ""
        };
        println!(
            "Recommended bedtime: {}{}",
            report.bedtime.format(config.display.use_24h_clock),
            when
        );
    }
    Ok(())
}
