use std::io::{self, ErrorKind, Write};

use bytes::BytesMut;
use tracing::trace;

use crate::codec::{encode_frame, FrameConfig};
use crate::error::{FrameError, Result};

/// Writes length-prefixed frames to a blocking `Write` stream.
///
/// Header and payload are staged in one buffer so a frame goes out in as few
/// writes as the stream allows. Each `send` flushes before returning.
pub struct FrameWriter<T> {
    inner: T,
    staged: BytesMut,
    config: FrameConfig,
}

impl<T: Write> FrameWriter<T> {
    pub fn new(inner: T) -> Self {
        Self::with_config(inner, FrameConfig::default())
    }

    pub fn with_config(inner: T, config: FrameConfig) -> Self {
        Self {
            inner,
            staged: BytesMut::new(),
            config,
        }
    }

    /// Send `payload` as one frame.
    ///
    /// Oversized payloads are rejected before anything reaches the stream.
    pub fn send(&mut self, payload: &[u8]) -> Result<()> {
        let max = self.config.max_payload_size;
        if payload.len() > max {
            return Err(FrameError::PayloadTooLarge {
                size: payload.len(),
                max,
            });
        }

        self.staged.clear();
        encode_frame(payload, &mut self.staged)?;

        let mut pending: &[u8] = &self.staged;
        while !pending.is_empty() {
            let written = retry(|| self.inner.write(pending))?;
            if written == 0 {
                return Err(FrameError::ConnectionClosed);
            }
            pending = &pending[written..];
        }
        self.flush()?;

        trace!(len = payload.len(), "frame written");
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        retry(|| self.inner.flush())
    }
}

/// Repeat `op` while the stream reports a transient condition.
fn retry<R>(mut op: impl FnMut() -> io::Result<R>) -> Result<R> {
    loop {
        match op() {
            Ok(value) => return Ok(value),
            Err(err) if matches!(err.kind(), ErrorKind::Interrupted | ErrorKind::WouldBlock) => {}
            Err(err) => return Err(FrameError::Io(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::codec::HEADER_SIZE;
    use crate::reader::FrameReader;

    /// Accepts at most `chunk` bytes per write and fails the first
    /// `interruptions` calls of each kind.
    struct Choppy {
        data: Vec<u8>,
        chunk: usize,
        write_interruptions: usize,
        flush_interruptions: usize,
        flushes: usize,
    }

    impl Choppy {
        fn new(chunk: usize, interruptions: usize) -> Self {
            Self {
                data: Vec::new(),
                chunk,
                write_interruptions: interruptions,
                flush_interruptions: interruptions,
                flushes: 0,
            }
        }
    }

    impl Write for Choppy {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.write_interruptions > 0 {
                self.write_interruptions -= 1;
                return Err(ErrorKind::Interrupted.into());
            }
            let n = buf.len().min(self.chunk);
            self.data.extend_from_slice(&buf[..n]);
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            if self.flush_interruptions > 0 {
                self.flush_interruptions -= 1;
                return Err(ErrorKind::WouldBlock.into());
            }
            self.flushes += 1;
            Ok(())
        }
    }

    #[test]
    fn frames_are_length_prefixed() {
        let mut wire = Vec::new();
        let mut writer = FrameWriter::new(&mut wire);
        writer.send(b"hello").unwrap();
        writer.send(b"").unwrap();
        drop(writer);

        assert_eq!(&wire[..4], &[0, 0, 0, 5]);
        assert_eq!(&wire[4..9], b"hello");
        assert_eq!(&wire[9..], &[0, 0, 0, 0]);
    }

    #[test]
    fn short_and_interrupted_writes_complete_the_frame() {
        let mut sink = Choppy::new(3, 2);
        FrameWriter::new(&mut sink).send(b"partial writes").unwrap();

        assert_eq!(sink.data.len(), HEADER_SIZE + 14);
        assert_eq!(&sink.data[HEADER_SIZE..], b"partial writes");
        assert_eq!(sink.flushes, 1);
    }

    #[test]
    fn oversized_payload_never_reaches_the_stream() {
        let mut wire = Vec::new();
        let mut writer = FrameWriter::with_config(&mut wire, FrameConfig { max_payload_size: 4 });

        let err = writer.send(b"oversized").unwrap_err();
        assert!(matches!(err, FrameError::PayloadTooLarge { size: 9, max: 4 }));
        writer.send(b"fits").unwrap();
        drop(writer);
        assert_eq!(wire.len(), HEADER_SIZE + 4);
    }

    #[test]
    fn zero_length_write_means_closed() {
        let mut sink = Choppy::new(0, 0);
        let err = FrameWriter::new(&mut sink).send(b"x").unwrap_err();
        assert!(matches!(err, FrameError::ConnectionClosed));
    }

    #[test]
    fn hard_io_errors_propagate() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(ErrorKind::BrokenPipe.into())
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let err = FrameWriter::new(Broken).send(b"x").unwrap_err();
        assert!(matches!(err, FrameError::Io(ref e) if e.kind() == ErrorKind::BrokenPipe));
    }

    #[test]
    fn reader_recovers_what_writer_sent() {
        let mut wire = Vec::new();
        {
            let mut writer = FrameWriter::new(&mut wire);
            for payload in [&b"one"[..], b"two", b"three"] {
                writer.send(payload).unwrap();
            }
        }

        let mut reader = FrameReader::new(Cursor::new(wire));
        assert_eq!(reader.read_frame().unwrap().as_ref(), b"one");
        assert_eq!(reader.read_frame().unwrap().as_ref(), b"two");
        assert_eq!(reader.read_frame().unwrap().as_ref(), b"three");
    }
}
