use anyhow::Result;
use tokio::io::{self, AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::info;

use checkin_application::{CheckinPrompt, LoadOutcome};
use checkin_domain::CheckinOutcome;

use crate::console::{
    is_confirmation, parse_intent, render_attendees, render_checkin, render_event, render_scan,
    Intent, HELP,
};
use crate::context::AppContext;

const PROMPT: &str = "> ";

/// Drives the console on stdin/stdout until `quit` or end of input.
pub async fn run_console(context: AppContext) -> Result<()> {
    let stdin = BufReader::new(io::stdin());
    let stdout = io::stdout();
    run_session(&context, stdin, stdout).await?;
    info!("session finished: {}", context.state.metrics.render_summary());
    Ok(())
}

pub async fn run_session<R, W>(context: &AppContext, input: R, mut output: W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    let mut list_mounted = false;

    context.event.load().await;
    emit(&mut output, &render_event(&context.event.snapshot().await)).await?;
    emit(&mut output, "type 'help' for commands").await?;

    loop {
        output.write_all(PROMPT.as_bytes()).await?;
        output.flush().await?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        let Some(intent) = parse_intent(&line) else {
            continue;
        };

        match intent {
            Intent::Quit => break,
            Intent::ShowEvent => {
                list_mounted = false;
                context.event.on_focus().await;
                emit(&mut output, &render_event(&context.event.snapshot().await)).await?;
            }
            Intent::RefreshEvent => {
                list_mounted = false;
                context.event.refresh().await;
                emit(&mut output, &render_event(&context.event.snapshot().await)).await?;
            }
            Intent::ShowAttendees => {
                if !list_mounted {
                    context.attendees.mount().await;
                    list_mounted = true;
                }
                emit(&mut output, &render_attendees(&context.attendees.snapshot().await)).await?;
            }
            Intent::Search(term) => {
                context.attendees.set_search_term(term).await;
                list_mounted = true;
                emit(&mut output, &render_attendees(&context.attendees.snapshot().await)).await?;
            }
            Intent::ClearSearch => {
                context.attendees.set_search_term(String::new()).await;
                list_mounted = true;
                emit(&mut output, &render_attendees(&context.attendees.snapshot().await)).await?;
            }
            Intent::LoadMore => {
                if context.attendees.load_more().await == LoadOutcome::Skipped {
                    emit(&mut output, "No more attendees to load.").await?;
                } else {
                    emit(&mut output, &render_attendees(&context.attendees.snapshot().await))
                        .await?;
                }
            }
            Intent::RefreshAttendees => {
                context.attendees.refresh().await;
                list_mounted = true;
                emit(&mut output, &render_attendees(&context.attendees.snapshot().await)).await?;
            }
            Intent::Checkin(attendee_id) => match context.attendees.request_checkin(&attendee_id).await {
                CheckinPrompt::NotFound => {
                    emit(
                        &mut output,
                        &format!("{attendee_id} is not in the loaded list. Try 'list' or 'search' first."),
                    )
                    .await?;
                }
                CheckinPrompt::AlreadyPresent {
                    name,
                    checked_in_at,
                } => {
                    let outcome = CheckinOutcome::AlreadyPresent {
                        checked_in_at: Some(checked_in_at),
                    };
                    emit(&mut output, &render_checkin(&name, &outcome)).await?;
                }
                CheckinPrompt::NeedsConfirmation { attendee } => {
                    output
                        .write_all(format!("Check in {}? [y/N] ", attendee.name).as_bytes())
                        .await?;
                    output.flush().await?;
                    let answer = lines.next_line().await?.unwrap_or_default();
                    if is_confirmation(&answer) {
                        let outcome = context.attendees.confirm_checkin(&attendee_id).await;
                        emit(&mut output, &render_checkin(&attendee.name, &outcome)).await?;
                    } else {
                        emit(&mut output, "Cancelled.").await?;
                    }
                }
            },
            Intent::Scan(payload) => match context.scanner.handle_scan(&payload).await {
                Some(outcome) => emit(&mut output, &render_scan(&outcome)).await?,
                None => emit(&mut output, "Scanner busy, try again in a moment.").await?,
            },
            Intent::Stats => {
                emit(&mut output, &context.state.metrics.render_summary()).await?;
            }
            Intent::Help => emit(&mut output, HELP).await?,
            Intent::Unknown(line) => {
                emit(&mut output, &format!("unknown command: {line} (type 'help')")).await?;
            }
        }
    }
    Ok(())
}

async fn emit<W: AsyncWrite + Unpin>(output: &mut W, text: &str) -> io::Result<()> {
    output.write_all(text.as_bytes()).await?;
    if !text.ends_with('\n') {
        output.write_all(b"\n").await?;
    }
    output.flush().await
}
