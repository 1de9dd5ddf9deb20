use std::path::PathBuf;
use std::process::ExitCode;

use tracing::{error, info};

use compere::config::{Settings, load_config};
use compere::feed::{apply_default_avatar, decode_entries, encode_record, read_input};
use compere::utils::{CompereError, logging};

fn run(settings: &Settings) -> Result<(), CompereError> {
    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| settings.feed.input.as_ref().map(PathBuf::from));

    let raw = read_input(path.as_deref())?;
    let mut records = decode_entries(&raw)?;

    if let Some(avatar) = &settings.feed.default_avatar {
        apply_default_avatar(&mut records, avatar);
    }

    for record in &records {
        println!("{}", encode_record(record)?);
    }

    info!(count = records.len(), "Converted feed");
    Ok(())
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let settings = match load_config() {
        Ok(settings) => settings,
        Err(e) => {
            logging::init("info");
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };
    logging::init(&settings.log.level);

    match run(&settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
