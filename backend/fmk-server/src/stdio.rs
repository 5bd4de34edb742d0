//! Line-oriented request loop.

use crate::error::Result as ServerErrorResult;

use fmk_ipc::{Router, build_error_response, encode_response};

use log::{debug, info, warn};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

const INVALID_UTF8_MESSAGE: &str = "Request is not valid UTF-8.";

/// Read requests from `reader` until EOF and write one response line per
/// request to `writer`. Blank lines are skipped. Returns the number of
/// requests answered.
///
/// A line that is not UTF-8 is answered with an error envelope and the loop
/// keeps reading. Only I/O failures on the streams end it early.
pub async fn serve<R, W>(
    router: &Router,
    mut reader: R,
    mut writer: W,
) -> ServerErrorResult<u64>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut buf = Vec::new();
    let mut handled = 0u64;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            break;
        }

        let response = match std::str::from_utf8(&buf) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                router.handle_raw(line).await
            }
            Err(e) => {
                warn!("Rejected request line: {e}");
                encode_response(&build_error_response(INVALID_UTF8_MESSAGE.to_string()))
            }
        };

        writer.write_all(response.as_bytes()).await?;
        writer.write_all(b"\n").await?;
        writer.flush().await?;

        handled += 1;
        debug!("Answered request #{handled}");
    }

    info!("Input closed after {handled} requests");

    Ok(handled)
}
