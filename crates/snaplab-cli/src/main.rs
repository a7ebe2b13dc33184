//! Snaplab CLI - thin adapter over the edit session.
//!
//! Each subcommand translates one user request into session calls:
//! acquire a bitmap, optionally transform it, and write the result.
//! All parameters of an operation are required; an incomplete command
//! line aborts the whole operation with no partial effect.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use snaplab_core::source::list_devices;
use snaplab_core::{ChannelSelection, EditSession};

#[derive(Parser)]
#[command(name = "snaplab", version, about = "Load, transform, and save images")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the dimensions of an image
    Info {
        /// Image file to inspect (PNG or JPEG)
        input: PathBuf,
    },

    /// Keep one color channel, zeroing the other two
    Isolate {
        /// Image file to load (PNG or JPEG)
        input: PathBuf,
        /// Where to save the result; the extension selects the format
        #[arg(short, long)]
        output: PathBuf,
        /// Channel to keep
        #[arg(long, value_enum)]
        channel: ChannelArg,
    },

    /// Crop to a sub-rectangle
    Crop {
        input: PathBuf,
        #[arg(short, long)]
        output: PathBuf,
        /// Left edge of the crop rectangle
        #[arg(short = 'x', long)]
        x: i32,
        /// Top edge of the crop rectangle
        #[arg(short = 'y', long)]
        y: i32,
        #[arg(short = 'w', long)]
        width: u32,
        #[arg(short = 'H', long)]
        height: u32,
    },

    /// Stamp a circle annotation onto the image
    Circle {
        input: PathBuf,
        #[arg(short, long)]
        output: PathBuf,
        #[arg(long)]
        center_x: i32,
        #[arg(long)]
        center_y: i32,
        #[arg(long)]
        radius: i32,
        /// Outline thickness in pixels; zero or negative fills the disk
        #[arg(long)]
        thickness: i32,
    },

    /// Apply a Gaussian blur with an odd kernel size
    Blur {
        input: PathBuf,
        #[arg(short, long)]
        output: PathBuf,
        /// Kernel size (odd number)
        #[arg(short = 'k', long)]
        kernel_size: u32,
    },

    /// Capture a single frame from a camera device
    Capture {
        /// Where to save the frame; the extension selects the format
        #[arg(short, long)]
        output: PathBuf,
        /// Camera device index
        #[arg(short, long, default_value_t = 0)]
        device: u32,
    },

    /// List attached camera devices
    Devices,
}

/// Channel choices as presented on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ChannelArg {
    Original,
    Red,
    Green,
    Blue,
}

impl From<ChannelArg> for ChannelSelection {
    fn from(arg: ChannelArg) -> Self {
        match arg {
            ChannelArg::Original => ChannelSelection::Original,
            ChannelArg::Red => ChannelSelection::Red,
            ChannelArg::Green => ChannelSelection::Green,
            ChannelArg::Blue => ChannelSelection::Blue,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Info { input } => {
            let mut session = EditSession::new();
            let bitmap = session
                .load_from_path(&input)
                .with_context(|| format!("failed to load {}", input.display()))?;
            println!("Image size: {}", bitmap.dimensions_text());
        }

        Command::Isolate {
            input,
            output,
            channel,
        } => {
            let mut session = load(&input)?;
            session.isolate_channel(channel.into())?;
            save(&session, &output)?;
        }

        Command::Crop {
            input,
            output,
            x,
            y,
            width,
            height,
        } => {
            let mut session = load(&input)?;
            session
                .crop(x, y, width, height)
                .context("crop rejected")?;
            save(&session, &output)?;
        }

        Command::Circle {
            input,
            output,
            center_x,
            center_y,
            radius,
            thickness,
        } => {
            let mut session = load(&input)?;
            session.stamp_circle(center_x, center_y, radius, thickness)?;
            save(&session, &output)?;
        }

        Command::Blur {
            input,
            output,
            kernel_size,
        } => {
            let mut session = load(&input)?;
            session.blur(kernel_size).context("blur rejected")?;
            save(&session, &output)?;
        }

        Command::Capture { output, device } => {
            let mut session = EditSession::new();
            let frame = session
                .capture_from_device(device)
                .with_context(|| format!("failed to capture from device {device}"))?;
            log::info!("captured frame: {}", frame.dimensions_text());
            save(&session, &output)?;
        }

        Command::Devices => {
            let devices = list_devices();
            if devices.is_empty() {
                println!("No camera devices found");
            }
            for device in devices {
                println!("{}: {} ({})", device.index, device.name, device.description);
            }
        }
    }

    Ok(())
}

fn load(input: &Path) -> anyhow::Result<EditSession> {
    let mut session = EditSession::new();
    session
        .load_from_path(input)
        .with_context(|| format!("failed to load {}", input.display()))?;
    Ok(session)
}

fn save(session: &EditSession, output: &Path) -> anyhow::Result<()> {
    session
        .export_to_path(output)
        .with_context(|| format!("failed to save {}", output.display()))?;
    println!("Saved {}", output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_channel_arg_maps_to_selection() {
        assert_eq!(
            ChannelSelection::from(ChannelArg::Red),
            ChannelSelection::Red
        );
        assert_eq!(
            ChannelSelection::from(ChannelArg::Original),
            ChannelSelection::Original
        );
    }

    #[test]
    fn test_crop_command_parses() {
        let cli = Cli::try_parse_from([
            "snaplab", "crop", "in.png", "-o", "out.png", "-x", "10", "-y", "10", "-w", "20",
            "-H", "20",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Command::Crop {
                x: 10,
                y: 10,
                width: 20,
                height: 20,
                ..
            }
        ));
    }

    #[test]
    fn test_capture_defaults_to_device_zero() {
        let cli = Cli::try_parse_from(["snaplab", "capture", "-o", "frame.png"]).unwrap();
        assert!(matches!(cli.command, Command::Capture { device: 0, .. }));
    }

    #[test]
    fn test_missing_parameter_aborts() {
        // Leaving out a required crop parameter fails before anything runs
        let result =
            Cli::try_parse_from(["snaplab", "crop", "in.png", "-o", "out.png", "-x", "10"]);
        assert!(result.is_err());
    }
}
