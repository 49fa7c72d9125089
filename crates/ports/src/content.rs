// crates/ports/src/content.rs
use line_tally_shared_kernel::Result;

/// Port for anything that can surrender its full content as text.
///
/// The analyzer consumes this instead of a concrete file type so it can run
/// over scoped files, in-memory buffers, or test stubs alike.
pub trait ContentSource {
    fn read_all(&mut self) -> Result<String>;
}
