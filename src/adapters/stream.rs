//! # Stream adapter
//!
//! Drives an [`Encipher`] implementation over a pair of byte streams.
//! The engine does no read-ahead; buffering lives here, at the boundary.
//! End-of-stream is the only termination signal and is not an error.

use std::io::{self, BufReader, BufWriter, Read, Write};

use crate::ports::Encipher;

/// Encipher `reader` into `writer`, byte by byte.
///
/// Letters are folded to uppercase and enciphered; every other byte is
/// copied through unchanged. The writer is flushed before returning.
pub fn encipher_stream<C, R, W>(cipher: &mut C, reader: R, writer: W) -> io::Result<()>
where
    C: Encipher + ?Sized,
    R: Read,
    W: Write,
{
    let reader = BufReader::new(reader);
    let mut writer = BufWriter::new(writer);

    for byte in reader.bytes() {
        writer.write_all(&[cipher.encipher_byte(byte?)])?;
    }

    writer.flush()
}
