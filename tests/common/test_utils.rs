use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Reads a source file and returns its contents as a string.
pub fn read_file_as_string<P: AsRef<Path>>(path: P) -> std::io::Result<String> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut buffer = String::new();
    reader.read_to_string(&mut buffer)?;
    Ok(buffer)
}
