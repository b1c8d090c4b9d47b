//! Line-oriented terminal conversation

use crate::bot::models::{GOODBYE, HELP_TEXT};
use crate::bot::Session;
use crate::error::AppError;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

async fn write_out<W: AsyncWrite + Unpin>(writer: &mut W, text: &str) -> Result<(), AppError> {
    writer
        .write_all(text.as_bytes())
        .await
        .map_err(AppError::Output)?;
    writer.flush().await.map_err(AppError::Output)
}

/// Runs a conversation until `exit` or end of input.
///
/// Blank lines are skipped; every other line gets exactly one timestamped
/// reply.
pub async fn run_conversation<R, W>(
    session: &mut Session,
    reader: R,
    mut writer: W,
) -> Result<(), AppError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    write_out(&mut writer, &format!("{}\n\n", HELP_TEXT)).await?;

    let mut lines = reader.lines();
    loop {
        write_out(&mut writer, "You: ").await?;
        let Some(line) = lines.next_line().await.map_err(AppError::Input)? else {
            tracing::debug!("end of input");
            break;
        };

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("exit") {
            write_out(&mut writer, &format!("{}\n", GOODBYE)).await?;
            break;
        }

        let reply = session.respond(input);
        write_out(&mut writer, &format!("{}\n", reply.render())).await?;
    }

    tracing::info!(
        user = %session.user.id,
        queries = session.queries().len(),
        "conversation finished"
    );
    Ok(())
}
