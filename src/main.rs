use prisoners_contest::logger::init_logger;
use prisoners_contest::prelude::*;
use tracing::info;

/// Runs the contest described by `CONTEST_*` environment variables, or the classic lineup when
/// `CONTEST_TEAM_SIZE` is unset.
fn main() -> anyhow::Result<()> {
    let config = Configuration::from_env();
    if config.log() {
        init_logger()?;
    }

    let lineup = if std::env::var_os("CONTEST_TEAM_SIZE").is_some() {
        vec![ContestSettingsBuilder::from_env().build()?]
    } else {
        ContestSettings::classic_lineup()
    };
    info!(contests = lineup.len(), "starting");

    // one source of each kind for the whole process
    let mut pseudo = Entropy::pseudo();
    let mut secure = Entropy::secure();

    for settings in lineup {
        let rng = match settings.entropy() {
            EntropyKind::Pseudo => &mut pseudo,
            EntropyKind::Secure => &mut secure,
        };
        let mut reporter = Reporter::stdout(settings.verbosity());
        ContestDriver::new(rng).run(&settings, &mut reporter)?;
    }
    Ok(())
}
