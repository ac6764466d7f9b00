//! Kernel command-line construction.

use nodetune_shared::constants::kernel as const_kernel;
use nodetune_shared::{CpuSet, HugePages};

/// Build the kernel arguments for a performance node.
///
/// The fixed tuning base always comes first, in table order. Then, when set:
/// - `isolcpus=<isolated>`
/// - `default_hugepagesz=<size>`
/// - `hugepagesz=<size>` and `hugepages=<count>` for each page entry, in
///   input order
///
/// Values are copied verbatim; nothing here validates CPU lists or sizes.
pub fn kernel_args(
    huge_pages: Option<&HugePages>,
    isolated_cpus: Option<&CpuSet>,
) -> Vec<String> {
    let mut kargs: Vec<String> = const_kernel::BASE_ARGS
        .iter()
        .map(|arg| arg.to_string())
        .collect();

    if let Some(isolated) = isolated_cpus {
        kargs.push(format!("{}={}", const_kernel::ISOLCPUS, isolated));
    }

    if let Some(huge_pages) = huge_pages {
        if let Some(default_size) = &huge_pages.default_huge_pages_size {
            kargs.push(format!(
                "{}={}",
                const_kernel::DEFAULT_HUGEPAGE_SIZE,
                default_size
            ));
        }

        for page in &huge_pages.pages {
            kargs.push(format!("{}={}", const_kernel::HUGEPAGE_SIZE, page.size));
            kargs.push(format!("{}={}", const_kernel::HUGEPAGES, page.count));
        }
    }

    kargs
}
