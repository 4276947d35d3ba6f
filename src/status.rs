//! Translation of numeric OpenCL status codes into their documented labels.

use opencl3::error_codes as codes;
use opencl3::types::cl_int;

/// Returns the documented label for an OpenCL status code.
///
/// Covers the CL 1.2 core codes, which is what the enabled `opencl3` feature
/// set can produce. Codes outside the table map to `"CL_UNKNOWN_ERROR"`.
pub fn status_label(status: cl_int) -> &'static str {
    match status {
        codes::CL_SUCCESS => "CL_SUCCESS",
        codes::CL_DEVICE_NOT_FOUND => "CL_DEVICE_NOT_FOUND",
        codes::CL_DEVICE_NOT_AVAILABLE => "CL_DEVICE_NOT_AVAILABLE",
        codes::CL_COMPILER_NOT_AVAILABLE => "CL_COMPILER_NOT_AVAILABLE",
        codes::CL_MEM_OBJECT_ALLOCATION_FAILURE => "CL_MEM_OBJECT_ALLOCATION_FAILURE",
        codes::CL_OUT_OF_RESOURCES => "CL_OUT_OF_RESOURCES",
        codes::CL_OUT_OF_HOST_MEMORY => "CL_OUT_OF_HOST_MEMORY",
        codes::CL_PROFILING_INFO_NOT_AVAILABLE => "CL_PROFILING_INFO_NOT_AVAILABLE",
        codes::CL_MEM_COPY_OVERLAP => "CL_MEM_COPY_OVERLAP",
        codes::CL_IMAGE_FORMAT_MISMATCH => "CL_IMAGE_FORMAT_MISMATCH",
        codes::CL_IMAGE_FORMAT_NOT_SUPPORTED => "CL_IMAGE_FORMAT_NOT_SUPPORTED",
        codes::CL_BUILD_PROGRAM_FAILURE => "CL_BUILD_PROGRAM_FAILURE",
        codes::CL_MAP_FAILURE => "CL_MAP_FAILURE",
        codes::CL_MISALIGNED_SUB_BUFFER_OFFSET => "CL_MISALIGNED_SUB_BUFFER_OFFSET",
        codes::CL_EXEC_STATUS_ERROR_FOR_EVENTS_IN_WAIT_LIST => {
            "CL_EXEC_STATUS_ERROR_FOR_EVENTS_IN_WAIT_LIST"
        }
        codes::CL_COMPILE_PROGRAM_FAILURE => "CL_COMPILE_PROGRAM_FAILURE",
        codes::CL_LINKER_NOT_AVAILABLE => "CL_LINKER_NOT_AVAILABLE",
        codes::CL_LINK_PROGRAM_FAILURE => "CL_LINK_PROGRAM_FAILURE",
        codes::CL_DEVICE_PARTITION_FAILED => "CL_DEVICE_PARTITION_FAILED",
        codes::CL_KERNEL_ARG_INFO_NOT_AVAILABLE => "CL_KERNEL_ARG_INFO_NOT_AVAILABLE",
        codes::CL_INVALID_VALUE => "CL_INVALID_VALUE",
        codes::CL_INVALID_DEVICE_TYPE => "CL_INVALID_DEVICE_TYPE",
        codes::CL_INVALID_PLATFORM => "CL_INVALID_PLATFORM",
        codes::CL_INVALID_DEVICE => "CL_INVALID_DEVICE",
        codes::CL_INVALID_CONTEXT => "CL_INVALID_CONTEXT",
        codes::CL_INVALID_QUEUE_PROPERTIES => "CL_INVALID_QUEUE_PROPERTIES",
        codes::CL_INVALID_COMMAND_QUEUE => "CL_INVALID_COMMAND_QUEUE",
        codes::CL_INVALID_HOST_PTR => "CL_INVALID_HOST_PTR",
        codes::CL_INVALID_MEM_OBJECT => "CL_INVALID_MEM_OBJECT",
        codes::CL_INVALID_IMAGE_FORMAT_DESCRIPTOR => "CL_INVALID_IMAGE_FORMAT_DESCRIPTOR",
        codes::CL_INVALID_IMAGE_SIZE => "CL_INVALID_IMAGE_SIZE",
        codes::CL_INVALID_SAMPLER => "CL_INVALID_SAMPLER",
        codes::CL_INVALID_BINARY => "CL_INVALID_BINARY",
        codes::CL_INVALID_BUILD_OPTIONS => "CL_INVALID_BUILD_OPTIONS",
        codes::CL_INVALID_PROGRAM => "CL_INVALID_PROGRAM",
        codes::CL_INVALID_PROGRAM_EXECUTABLE => "CL_INVALID_PROGRAM_EXECUTABLE",
        codes::CL_INVALID_KERNEL_NAME => "CL_INVALID_KERNEL_NAME",
        codes::CL_INVALID_KERNEL_DEFINITION => "CL_INVALID_KERNEL_DEFINITION",
        codes::CL_INVALID_KERNEL => "CL_INVALID_KERNEL",
        codes::CL_INVALID_ARG_INDEX => "CL_INVALID_ARG_INDEX",
        codes::CL_INVALID_ARG_VALUE => "CL_INVALID_ARG_VALUE",
        codes::CL_INVALID_ARG_SIZE => "CL_INVALID_ARG_SIZE",
        codes::CL_INVALID_KERNEL_ARGS => "CL_INVALID_KERNEL_ARGS",
        codes::CL_INVALID_WORK_DIMENSION => "CL_INVALID_WORK_DIMENSION",
        codes::CL_INVALID_WORK_GROUP_SIZE => "CL_INVALID_WORK_GROUP_SIZE",
        codes::CL_INVALID_WORK_ITEM_SIZE => "CL_INVALID_WORK_ITEM_SIZE",
        codes::CL_INVALID_GLOBAL_OFFSET => "CL_INVALID_GLOBAL_OFFSET",
        codes::CL_INVALID_EVENT_WAIT_LIST => "CL_INVALID_EVENT_WAIT_LIST",
        codes::CL_INVALID_EVENT => "CL_INVALID_EVENT",
        codes::CL_INVALID_OPERATION => "CL_INVALID_OPERATION",
        codes::CL_INVALID_GL_OBJECT => "CL_INVALID_GL_OBJECT",
        codes::CL_INVALID_BUFFER_SIZE => "CL_INVALID_BUFFER_SIZE",
        codes::CL_INVALID_MIP_LEVEL => "CL_INVALID_MIP_LEVEL",
        codes::CL_INVALID_GLOBAL_WORK_SIZE => "CL_INVALID_GLOBAL_WORK_SIZE",
        codes::CL_INVALID_PROPERTY => "CL_INVALID_PROPERTY",
        codes::CL_INVALID_IMAGE_DESCRIPTOR => "CL_INVALID_IMAGE_DESCRIPTOR",
        codes::CL_INVALID_COMPILER_OPTIONS => "CL_INVALID_COMPILER_OPTIONS",
        codes::CL_INVALID_LINKER_OPTIONS => "CL_INVALID_LINKER_OPTIONS",
        codes::CL_INVALID_DEVICE_PARTITION_COUNT => "CL_INVALID_DEVICE_PARTITION_COUNT",
        _ => "CL_UNKNOWN_ERROR",
    }
}
