use std::path::PathBuf;

use clap::Parser;
use log::info;

use clutil::{kernel_from_file, or_exit, select, SelectOptions};

/// Pick an OpenCL device and build a kernel from a source file.
#[derive(Debug, Parser)]
#[command(name = "clutil", version, about)]
struct Args {
    /// Path to the OpenCL source file.
    source: PathBuf,

    /// Name of the kernel entry function.
    entry: String,

    /// Platform index to use instead of prompting.
    #[arg(short, long)]
    platform: Option<usize>,

    /// Device index to use instead of prompting.
    #[arg(short, long)]
    device: Option<usize>,

    /// Options passed to the kernel compiler.
    #[arg(short, long, default_value = "")]
    options: String,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let selection = or_exit(
        select(SelectOptions {
            platform: args.platform,
            device: args.device,
        }),
        "device selection",
    );
    let device_name = or_exit(
        selection
            .device()
            .name()
            .map_err(clutil::ClutilError::DeviceInfoNotAvailable),
        "device info",
    );
    info!("building {} for {}", args.source.display(), device_name);

    let kernel = or_exit(
        kernel_from_file(
            &args.source,
            &args.entry,
            selection.context(),
            selection.device(),
            &args.options,
        ),
        "kernel build",
    );
    let name = kernel
        .function_name()
        .unwrap_or_else(|_| args.entry.clone());
    println!("built kernel {} on {}", name, device_name);
}
