//! Building OpenCL programs from source and binding kernels by name.

use std::fs;
use std::path::Path;

use log::debug;
use opencl3::context::Context;
use opencl3::device::Device;
use opencl3::error_codes::{ClError, CL_INVALID_KERNEL_NAME};
use opencl3::kernel::Kernel;
use opencl3::program::Program;

use crate::error::{ClutilError, ClutilResult};

/// Reads an OpenCL source file and builds the kernel named `entry` for
/// `device`.
///
/// An unreadable file is reported as [`ClutilError::SourceUnreadable`] before
/// any runtime call is made. See [`kernel_from_source`] for the build
/// behavior.
pub fn kernel_from_file(
    path: impl AsRef<Path>,
    entry: &str,
    context: &Context,
    device: &Device,
    options: &str,
) -> ClutilResult<Kernel> {
    let path = path.as_ref();
    let source = read_source(path)?;
    debug!("read kernel source from {}", path.display());
    kernel_from_source(&source, entry, context, device, options)
}

fn read_source(path: &Path) -> ClutilResult<String> {
    fs::read_to_string(path).map_err(|source| ClutilError::SourceUnreadable {
        path: path.to_path_buf(),
        source,
    })
}

/// Builds `source` for `device` with the given compiler `options` and returns
/// the kernel named `entry`.
///
/// On a build failure the device's build log is written to the error stream,
/// prefixed with the entry name, and also attached to the returned
/// [`ClutilError::Opencl3`]. On success ownership of the kernel handle
/// transfers to the caller; the context and device are left untouched.
pub fn kernel_from_source(
    source: &str,
    entry: &str,
    context: &Context,
    device: &Device,
    options: &str,
) -> ClutilResult<Kernel> {
    debug!("building kernel {} from source", entry);
    let mut program = Program::create_from_source(context, source)?;
    if let Err(build_error) = program.build(&[device.id()], options) {
        let log = program.get_build_log(device.id())?;
        eprintln!("{}: {}", entry, log);
        return Err(ClutilError::Opencl3(build_error, Some(log)));
    }
    debug!("building kernel {} from source: done", entry);

    Kernel::create(&program, entry).map_err(|err| match err {
        ClError(CL_INVALID_KERNEL_NAME) => ClutilError::KernelNotFound(entry.to_string()),
        other => other.into(),
    })
}

#[cfg(test)]
mod test {
    use std::path::Path;

    use super::{kernel_from_file, kernel_from_source, read_source};
    use crate::error::ClutilError;
    use crate::select::{select_with, Chooser, SelectOptions, Selection};
    use crate::ClutilResult;

    const VALID_SOURCE: &str = r#"
        __kernel void add(__global const uint* a, __global const uint* b, __global uint* out) {
            size_t i = get_global_id(0);
            out[i] = a[i] + b[i];
        }
    "#;

    // Missing semicolon, every compiler rejects it.
    const BROKEN_SOURCE: &str = r#"
        __kernel void add(__global uint* out) {
            out[0] = 1
        }
    "#;

    struct FirstChooser;

    impl Chooser for FirstChooser {
        fn choose(&mut self, _what: &str, _items: &[String]) -> ClutilResult<usize> {
            Ok(0)
        }
    }

    fn first_device() -> Selection {
        select_with(SelectOptions::default(), &mut FirstChooser).unwrap()
    }

    #[test]
    fn test_unreadable_source_is_an_error() {
        let missing = Path::new("/definitely/not/here.cl");
        let err = read_source(missing).unwrap_err();
        match err {
            ClutilError::SourceUnreadable { path, .. } => assert_eq!(path, missing),
            other => panic!("expected SourceUnreadable, got {:?}", other),
        }
    }

    #[test]
    #[ignore = "requires an OpenCL runtime"]
    fn test_build_valid_source() {
        let selection = first_device();
        let kernel = kernel_from_source(
            VALID_SOURCE,
            "add",
            selection.context(),
            selection.device(),
            "",
        )
        .unwrap();
        assert_eq!(kernel.function_name().unwrap(), "add");
    }

    #[test]
    #[ignore = "requires an OpenCL runtime"]
    fn test_build_failure_carries_the_log() {
        let selection = first_device();
        let result = kernel_from_source(
            BROKEN_SOURCE,
            "add",
            selection.context(),
            selection.device(),
            "",
        );
        match result {
            Err(ClutilError::Opencl3(_, Some(log))) => assert!(!log.is_empty()),
            other => panic!("expected a build failure with a log, got {:?}", other.err()),
        }
    }

    #[test]
    #[ignore = "requires an OpenCL runtime"]
    fn test_unknown_entry_name() {
        let selection = first_device();
        let result = kernel_from_source(
            VALID_SOURCE,
            "no_such_kernel",
            selection.context(),
            selection.device(),
            "",
        );
        assert!(matches!(result, Err(ClutilError::KernelNotFound(name)) if name == "no_such_kernel"));
    }

    #[test]
    #[ignore = "requires an OpenCL runtime"]
    fn test_build_from_file() {
        let selection = first_device();
        let path = std::env::temp_dir().join("clutil_add_test.cl");
        std::fs::write(&path, VALID_SOURCE).unwrap();
        let kernel = kernel_from_file(&path, "add", selection.context(), selection.device(), "")
            .unwrap();
        assert_eq!(kernel.function_name().unwrap(), "add");
        let _ = std::fs::remove_file(&path);
    }
}
