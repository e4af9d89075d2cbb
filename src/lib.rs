/// Use mimalloc as the global allocator.
/// 2-3x faster than glibc malloc for the many small line/hex strings
/// this tool allocates per file.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

pub mod common;
pub mod generate;
pub mod hash;
pub mod resolve;
