use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::mark::{ImageSource, MarkLogic, MarkRequest};
use crate::core::{open_journal, open_ledger};
use crate::errors::{AppError, AppResult};
use crate::ledger::ArtifactStore;
use crate::utils::path::expand_tilde;
use crate::utils::{date, time};

/// Handle the `mark` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Mark {
        student_id,
        name,
        date: date_arg,
        time: time_arg,
        image,
        photo,
    } = cmd
    {
        // Validate input before anything is opened.
        let day = date::date_or_today(date_arg.as_ref()).map_err(AppError::InvalidDate)?;
        let at = time::time_or_now(time_arg.as_ref())?;

        let photo_path = photo.as_deref().map(expand_tilde);
        let source = match (image, &photo_path) {
            (Some(r), _) => ImageSource::Reference(r),
            (None, Some(p)) => ImageSource::Photo(p),
            (None, None) => ImageSource::None,
        };

        let ledger = open_ledger(cfg)?;
        let journal = open_journal(cfg);
        let artifacts = ArtifactStore::new(cfg.images_path());

        let request = MarkRequest {
            student_id,
            name,
            date: day,
            time: at,
            image: source,
        };

        // Both outcomes are a successful run.
        MarkLogic::mark(&ledger, &artifacts, journal.as_ref(), &request)?;
    }

    Ok(())
}
