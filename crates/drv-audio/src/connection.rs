//! Audio TCP connection and block framing (§4.5, §6.3).

use std::io::Write;
use std::net::TcpStream;

use drv_backend::AudioBlock;

use crate::error::{Error, Result};

/// An established connection to the downstream audio server.
///
/// Single-writer per spec §5: a backend pushes blocks through this type
/// serially via its [`drv_backend::SynthesisSink`] implementation. The
/// stream is unbuffered — each `send_block` issues its writes directly to
/// the socket and flushes at the end, matching the source's choice of an
/// unbuffered `FILE*` stream over the TCP descriptor.
pub struct AudioConnection {
    stream: TcpStream,
}

/// Open the audio side-channel.
///
/// Disables Nagle's algorithm (`TCP_NODELAY`) so that small audio blocks
/// are not held back waiting to coalesce with future writes — latency
/// matters more than throughput on this channel.
pub fn connect(host: &str, port: u16) -> Result<AudioConnection> {
    let stream = TcpStream::connect((host, port)).map_err(|source| Error::Connect {
        host: host.to_string(),
        port,
        source,
    })?;
    stream.set_nodelay(true).map_err(|source| Error::Connect {
        host: host.to_string(),
        port,
        source,
    })?;
    tracing::debug!(host, port, "audio connection established");
    Ok(AudioConnection { stream })
}

impl AudioConnection {
    /// Write one audio block as the exact byte sequence of spec §4.5 and
    /// flush.
    ///
    /// The data section is written with a single `write_all`: it is
    /// binary-transparent, never passed through any line discipline, so
    /// embedded `\r\n` bytes inside PCM samples are never reinterpreted.
    pub fn send_block(&mut self, block: &AudioBlock) -> Result<()> {
        write!(self.stream, "BLOCK {} {}\r\n", block.msg_id, block.number)?;
        write!(self.stream, "PARAMETERS\r\n")?;
        write!(
            self.stream,
            "data_format {}\r\n",
            block.data_format.as_wire()
        )?;
        write!(self.stream, "data_length {}\r\n", block.data_length())?;
        write!(self.stream, "audio_length {}\r\n", block.audio_length)?;
        write!(self.stream, "sample_rate {}\r\n", block.sample_rate)?;
        write!(self.stream, "channels {}\r\n", block.channels)?;
        write!(self.stream, "encoding {}\r\n", block.encoding_token())?;
        write!(self.stream, "END OF PARAMETERS\r\n")?;
        write!(self.stream, "EVENTS\r\n")?;
        write!(self.stream, "END OF EVENTS\r\n")?;
        write!(self.stream, "DATA\r\n")?;
        self.stream.write_all(&block.data)?;
        write!(self.stream, "END OF DATA\r\n")?;
        self.stream.flush()?;
        tracing::debug!(
            msg_id = block.msg_id,
            block_number = block.number,
            data_length = block.data_length(),
            "audio block sent"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drv_backend::{DataFormat, Endianness, EncodingSign};
    use std::io::Read;
    use std::net::TcpListener;

    fn sample_block() -> AudioBlock {
        AudioBlock {
            msg_id: 1,
            number: 0,
            data_format: DataFormat::Raw,
            audio_length: 2,
            sample_rate: 22050,
            channels: 1,
            encoding_sign: EncodingSign::Signed,
            encoding_bpw: 16,
            encoding_endian: Endianness::Little,
            events: Vec::new(),
            data: vec![0, 1, 2, 3],
        }
    }

    #[test]
    fn send_block_matches_exact_framing() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        let server = std::thread::spawn(move || {
            let (mut sock, _) = listener.accept().unwrap();
            let mut buf = Vec::new();
            sock.read_to_end(&mut buf).unwrap();
            buf
        });

        let mut conn = connect(&addr.ip().to_string(), addr.port()).unwrap();
        conn.send_block(&sample_block()).unwrap();
        drop(conn);

        let received = server.join().unwrap();
        let expected = b"BLOCK 1 0\r\n\
PARAMETERS\r\n\
data_format raw\r\n\
data_length 4\r\n\
audio_length 2\r\n\
sample_rate 22050\r\n\
channels 1\r\n\
encoding s16LE\r\n\
END OF PARAMETERS\r\n\
EVENTS\r\n\
END OF EVENTS\r\n\
DATA\r\n\
\x00\x01\x02\x03\
END OF DATA\r\n";
        assert_eq!(received, expected);
    }
}
