use clap::Parser;
use std::process::ExitCode;
use tracing::{error, info};

use u_fixture::config::{CaseOverride, RunConfig};
use u_fixture::driver::run_cases;
use u_fixture::generator::{CaseGenerator, CaseGeneratorConfig};
use u_fixture::io::{write_case, write_case_csv};
use u_fixture::scheduler::SlotPolicy;

mod cli;

use cli::{Cli, Command, Preset};

fn main() -> ExitCode {
    let cli = Cli::parse();
    u_fixture::logging::init(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> u_fixture::Result<ExitCode> {
    match cli.command {
        Command::Run {
            cases,
            duration,
            fields,
            fixed_slots,
            max_week,
        } => {
            let mut config = RunConfig::load(cli.config.as_deref())?;
            config.override_all(&CaseOverride {
                game_duration_hours: duration,
                fields_override: fields,
                max_week,
                game_limit: None,
            });
            if fixed_slots {
                config.engine.slot_policy = SlotPolicy::two_daily_slots();
            }
            config.check()?;

            let results = run_cases(&cases, &config);
            let failed = results.iter().filter(|r| r.is_err()).count();
            for report in results.iter().flatten() {
                info!(
                    "{}: {} placed, {} unscheduled, {} input problems",
                    report.case,
                    report.placed(),
                    report.unscheduled(),
                    report.validation_problems
                );
            }
            Ok(if failed == 0 {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Command::Generate {
            out,
            seed,
            preset,
            csv,
        } => {
            let config = match preset {
                Preset::Small => CaseGeneratorConfig::small(),
                Preset::Default => CaseGeneratorConfig::default(),
                Preset::Large => CaseGeneratorConfig::large(),
            };
            let case = CaseGenerator::new(config, seed).generate();
            if csv {
                write_case_csv(&out, &case)?;
            } else {
                write_case(&out, &case)?;
            }
            info!(
                "Generated {} teams, {} leagues, {} venues into {}",
                case.teams.len(),
                case.leagues.len(),
                case.venues.len(),
                out.display()
            );
            Ok(ExitCode::SUCCESS)
        }
    }
}
