//! Interactive and pre-configured platform/device selection.
//!
//! Selection policy and console interaction are kept apart: the policy
//! validates pre-supplied indices or delegates to a [`Chooser`], and the
//! [`Console`] chooser is generic over its streams so it can be driven by
//! in-memory buffers as well as by stdin/stdout.

use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

use log::debug;
use opencl3::context::Context;
use opencl3::device::{Device, CL_DEVICE_TYPE_ALL};
use opencl3::platform::{get_platforms, Platform};

use crate::error::{ClutilError, ClutilResult};

/// Which platform and device to pick.
///
/// `None` means "ask the chooser", which for [`Console`] is an interactive
/// prompt. A supplied index is used as-is when it is in range and rejected
/// with [`ClutilError::InvalidSelection`] when it is not, so that headless
/// callers fail fast instead of blocking on a prompt.
#[derive(Clone, Copy, Debug, Default)]
pub struct SelectOptions {
    /// Platform index, by enumeration order.
    pub platform: Option<usize>,
    /// Device index within the chosen platform, by enumeration order.
    pub device: Option<usize>,
}

/// Supplies an index into a list of labeled entries.
pub trait Chooser {
    /// Returns an index smaller than `items.len()`.
    ///
    /// `what` names the kind of entry being chosen, e.g. `"platform"`.
    fn choose(&mut self, what: &str, items: &[String]) -> ClutilResult<usize>;
}

/// A [`Chooser`] that lists the entries and prompts for an index.
///
/// Every entry is printed with its ordinal, then the prompt repeats until a
/// line parses as an in-range index. Invalid lines are discarded whole, so a
/// stray token never bleeds into the next attempt.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<BufReader<Stdin>, Stdout> {
    /// Returns a console bound to the process's standard streams.
    pub fn stdio() -> Self {
        Console {
            input: BufReader::new(io::stdin()),
            output: io::stdout(),
        }
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Returns a console reading from `input` and writing to `output`.
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }
}

impl<R: BufRead, W: Write> Chooser for Console<R, W> {
    fn choose(&mut self, what: &str, items: &[String]) -> ClutilResult<usize> {
        for (ordinal, item) in items.iter().enumerate() {
            writeln!(self.output, "{}. {}", ordinal, item)?;
        }
        loop {
            write!(self.output, "Choose a {}: ", what)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    format!("input closed before a {} was chosen", what),
                )
                .into());
            }
            if let Some(index) = parse_choice(&line, items.len()) {
                return Ok(index);
            }
        }
    }
}

/// Parses a line as an index into a list of `count` entries.
fn parse_choice(line: &str, count: usize) -> Option<usize> {
    line.trim().parse::<usize>().ok().filter(|index| *index < count)
}

/// Validates a pre-supplied index, or asks the chooser for one.
fn resolve<C: Chooser>(
    preset: Option<usize>,
    what: &str,
    items: &[String],
    chooser: &mut C,
) -> ClutilResult<usize> {
    match preset {
        Some(index) if index < items.len() => Ok(index),
        Some(index) => Err(ClutilError::InvalidSelection {
            index,
            count: items.len(),
        }),
        None => chooser.choose(what, items),
    }
}

/// The outcome of a selection: the chosen platform, the chosen device, and a
/// context bound to that device.
///
/// The context is owned by this struct and released on drop; [`into_parts`]
/// transfers ownership to the caller.
///
/// [`into_parts`]: Selection::into_parts
pub struct Selection {
    platform: Platform,
    context: Context,
    device: Device,
}

impl Selection {
    /// Returns the chosen platform.
    pub fn platform(&self) -> &Platform {
        &self.platform
    }

    /// Returns the context created for the chosen device.
    pub fn context(&self) -> &Context {
        &self.context
    }

    /// Returns the chosen device.
    pub fn device(&self) -> &Device {
        &self.device
    }

    /// Consumes the selection, handing the platform, context and device to
    /// the caller.
    pub fn into_parts(self) -> (Platform, Context, Device) {
        (self.platform, self.context, self.device)
    }
}

/// Selects a platform and device, prompting on the standard streams for
/// anything not fixed by `options`.
pub fn select(options: SelectOptions) -> ClutilResult<Selection> {
    select_with(options, &mut Console::stdio())
}

/// Selects a platform and device, delegating unresolved choices to `chooser`.
///
/// Enumerates all platforms, picks one, enumerates the platform's devices of
/// every type, picks one and creates a context for it. Empty enumerations
/// are errors: [`ClutilError::NoPlatforms`] and [`ClutilError::NoDevices`].
pub fn select_with<C: Chooser>(options: SelectOptions, chooser: &mut C) -> ClutilResult<Selection> {
    let mut platforms = get_platforms()?;
    if platforms.is_empty() {
        return Err(ClutilError::NoPlatforms);
    }
    debug!("found {} platform(s)", platforms.len());

    let platform_labels = platforms
        .iter()
        .map(platform_label)
        .collect::<ClutilResult<Vec<_>>>()?;
    let platform_index = resolve(options.platform, "platform", &platform_labels, chooser)?;
    let platform = platforms.swap_remove(platform_index);

    let device_ids = platform.get_devices(CL_DEVICE_TYPE_ALL)?;
    if device_ids.is_empty() {
        return Err(ClutilError::NoDevices);
    }
    debug!(
        "platform {} exposes {} device(s)",
        platform_labels[platform_index],
        device_ids.len()
    );

    let mut devices: Vec<Device> = device_ids.into_iter().map(Device::new).collect();
    let device_labels = devices
        .iter()
        .map(device_label)
        .collect::<ClutilResult<Vec<_>>>()?;

    let device_index = resolve(options.device, "device", &device_labels, chooser)?;
    let device = devices.swap_remove(device_index);
    debug!("selected device {}", device_labels[device_index]);

    let context = Context::from_device(&device)?;

    Ok(Selection {
        platform,
        context,
        device,
    })
}

fn platform_label(platform: &Platform) -> ClutilResult<String> {
    let name = platform
        .name()
        .map_err(ClutilError::PlatformInfoNotAvailable)?;
    let version = platform
        .version()
        .map_err(ClutilError::PlatformInfoNotAvailable)?;
    let vendor = platform
        .vendor()
        .map_err(ClutilError::PlatformInfoNotAvailable)?;
    Ok(format!("{} [{}] {}", name, version, vendor))
}

fn device_label(device: &Device) -> ClutilResult<String> {
    let name = device.name().map_err(ClutilError::DeviceInfoNotAvailable)?;
    let version = device
        .version()
        .map_err(ClutilError::DeviceInfoNotAvailable)?;
    let vendor = device
        .vendor()
        .map_err(ClutilError::DeviceInfoNotAvailable)?;
    Ok(format!("{} [{}] {}", name, version, vendor))
}

#[cfg(test)]
mod test {
    use std::io::Cursor;

    use super::{parse_choice, resolve, select_with, Chooser, Console, SelectOptions};
    use crate::error::{ClutilError, ClutilResult};

    /// Fails the test if the policy consults it.
    struct NeverChooser;

    impl Chooser for NeverChooser {
        fn choose(&mut self, what: &str, _items: &[String]) -> ClutilResult<usize> {
            panic!("chooser must not be consulted for a pre-supplied {}", what);
        }
    }

    fn labels(count: usize) -> Vec<String> {
        (0..count).map(|i| format!("entry {}", i)).collect()
    }

    fn choose_from(input: &str, items: &[String]) -> (ClutilResult<usize>, String) {
        let mut console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let result = console.choose("platform", items);
        (result, String::from_utf8(console.output).unwrap())
    }

    #[test]
    fn test_parse_choice() {
        assert_eq!(parse_choice("1\n", 2), Some(1));
        assert_eq!(parse_choice(" 0 \n", 2), Some(0));
        assert_eq!(parse_choice("two\n", 2), None);
        assert_eq!(parse_choice("-1\n", 2), None);
        assert_eq!(parse_choice("5\n", 2), None);
        assert_eq!(parse_choice("\n", 2), None);
    }

    #[test]
    fn test_choose_lists_entries_with_ordinals() {
        let (result, output) = choose_from("0\n", &labels(2));
        assert_eq!(result.unwrap(), 0);
        assert!(output.starts_with("0. entry 0\n1. entry 1\n"));
        assert!(output.ends_with("Choose a platform: "));
    }

    #[test]
    fn test_choose_discards_non_numeric_input() {
        let (result, output) = choose_from("nonsense\n1\n", &labels(2));
        assert_eq!(result.unwrap(), 1);
        // One prompt per attempt, nothing else in between.
        assert_eq!(output.matches("Choose a platform: ").count(), 2);
    }

    #[test]
    fn test_choose_rejects_out_of_range_input() {
        let (result, output) = choose_from("5\n2\n0\n", &labels(2));
        assert_eq!(result.unwrap(), 0);
        assert_eq!(output.matches("Choose a platform: ").count(), 3);
    }

    #[test]
    fn test_choose_errors_on_closed_input() {
        let (result, _) = choose_from("bogus\n", &labels(2));
        assert!(matches!(result, Err(ClutilError::IO(_))));
    }

    #[test]
    fn test_resolve_accepts_preset_in_range() {
        let index = resolve(Some(1), "platform", &labels(2), &mut NeverChooser).unwrap();
        assert_eq!(index, 1);
    }

    #[test]
    fn test_resolve_rejects_preset_out_of_range() {
        let result = resolve(Some(5), "platform", &labels(2), &mut NeverChooser);
        assert!(matches!(
            result,
            Err(ClutilError::InvalidSelection { index: 5, count: 2 })
        ));
    }

    #[test]
    fn test_resolve_delegates_when_unset() {
        let mut console = Console::new(Cursor::new(b"1\n".to_vec()), Vec::new());
        let index = resolve(None, "device", &labels(2), &mut console).unwrap();
        assert_eq!(index, 1);
    }

    #[test]
    #[ignore = "requires an OpenCL runtime"]
    fn test_select_first_platform_and_device() {
        let options = SelectOptions {
            platform: Some(0),
            device: Some(0),
        };
        let selection = select_with(options, &mut NeverChooser).unwrap();
        assert!(!selection.context().devices().is_empty());
        assert!(!selection.device().name().unwrap().is_empty());
    }
}
