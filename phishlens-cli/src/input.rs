//! Reading page markup from a file or stdin.

use std::io::Read;
use std::path::Path;

use phishlens_core::errors::InputError;

/// Source name meaning "read from stdin".
pub const STDIN: &str = "-";

/// Read markup from `source` (a path, or `-` for stdin). A missing source
/// means no markup at all, which the analyzer treats as an empty page.
pub fn read_markup(source: Option<&str>) -> Result<String, InputError> {
    let Some(source) = source else {
        return Ok(String::new());
    };

    let bytes = if source == STDIN {
        let mut buf = Vec::new();
        std::io::stdin()
            .read_to_end(&mut buf)
            .map_err(|e| InputError::Unreadable {
                source_name: "stdin".to_string(),
                message: e.to_string(),
            })?;
        buf
    } else {
        std::fs::read(Path::new(source)).map_err(|e| InputError::Unreadable {
            source_name: source.to_string(),
            message: e.to_string(),
        })?
    };

    String::from_utf8(bytes).map_err(|_| InputError::NotUtf8 {
        source_name: source.to_string(),
    })
}
