use std::path::Path;
use std::process::ExitCode;

use clap::Parser;

use drumpad_driver::{DriverConfig, DrumDriver};
use drumpadd::cli::{Cli, Command};
use drumpadd::{format_state, load_capture, load_config, logging, Replay};
use drumpadd::{print_debug, print_error, print_info, print_warning};

fn replay(capture: &Path, realtime: bool, config: DriverConfig) -> ExitCode {
    let frames = match load_capture(capture) {
        Ok(frames) => frames,
        Err(e) => {
            print_error!("failed to read capture {}: {e}", capture.display());
            return ExitCode::FAILURE;
        }
    };
    print_debug!("loaded {} frames from {}", frames.len(), capture.display());

    let mut replay = match Replay::new(config) {
        Ok(replay) => replay.realtime(realtime),
        Err(e) => {
            print_error!("failed to attach driver: {e}");
            return ExitCode::FAILURE;
        }
    };
    match replay.run_with(frames, |state| {
        print_info!("{}", format_state(state));
    }) {
        Ok(summary) => {
            print_info!(
                "replayed {} frames, {} reports, {} handshakes",
                summary.frames,
                summary.reports,
                summary.handshakes
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            print_error!("replay failed: {e}");
            ExitCode::FAILURE
        }
    }
}

fn probe(vendor_id: u16, product_id: u16) -> ExitCode {
    if DrumDriver::probe(vendor_id, product_id) {
        print_info!(
            "{vendor_id:04x}:{product_id:04x} is handled by {}",
            DrumDriver::NAME
        );
        ExitCode::SUCCESS
    } else {
        print_warning!("{vendor_id:04x}:{product_id:04x} is not supported");
        ExitCode::FAILURE
    }
}

fn describe() -> ExitCode {
    let desc = DrumDriver::descriptor();
    print_info!("{} ({})", DrumDriver::NAME, desc.id);
    print_info!("class: {:?}", desc.class);
    print_info!("buttons: {:?}", desc.available_buttons());
    print_info!("axes: {:?}", desc.available_axes());
    print_info!(
        "touch points: {}, leds: {}, accelerometers: {}, rumble: {}",
        desc.num_touch_points,
        desc.num_leds,
        desc.num_accelerometers,
        desc.has_rumble
    );
    ExitCode::SUCCESS
}

#[allow(clippy::print_stderr)]
fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = logging::setup(cli.verbose, cli.no_color) {
        eprintln!("unable to set up logger: {e}");
        return ExitCode::FAILURE;
    }

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            print_error!("failed to load config: {e}");
            return ExitCode::FAILURE;
        }
    };
    print_debug!("driver config: {config:?}");

    match cli.command {
        Command::Replay { capture, realtime } => replay(&capture, realtime, config),
        Command::Probe { vid, pid } => probe(vid, pid),
        Command::Describe => describe(),
    }
}
