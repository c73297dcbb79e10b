// ABOUTME: App orchestrator — wires store, session manager, transcript logger, and the TUI.
// ABOUTME: Runs the single event loop and schedules delayed replies on tokio timers.

use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::DefaultTerminal;
use tokio::sync::mpsc;

use crate::config::Config;
use crate::session::manager::ScheduledReply;
use crate::session::store::{EphemeralKey, Store};
use crate::session::{FileStore, HISTORY_KEY, Message, SessionManager, TranscriptLogger};
use crate::tui::input::{self, InputResult};
use crate::tui::state::TuiState;
use crate::tui::ui::{self, SessionView};

/// Top-level application: configuration plus run-scoped flags.
pub struct App {
    config: Config,
    fresh: bool,
}

impl App {
    /// Create a new app with the given configuration.
    pub fn new(config: Config, fresh: bool) -> Self {
        Self { config, fresh }
    }

    /// Open the store, restore the session, and drive the TUI until quit.
    pub async fn run(self) -> anyhow::Result<()> {
        let store = FileStore::open(&self.config.store_dir())?;
        // --fresh masks the history key: this run starts from the
        // greeting and its history writes are discarded, while the
        // stored history and the preferences stay live.
        let store: Box<dyn Store> = if self.fresh {
            Box::new(EphemeralKey::new(store, HISTORY_KEY))
        } else {
            Box::new(store)
        };
        let mut manager = SessionManager::initialize(store);

        let logger = match TranscriptLogger::new_in_dir(&self.config.transcripts_dir()) {
            Ok(logger) => Some(logger),
            Err(e) => {
                eprintln!("Warning: failed to create transcript logger: {e}");
                None
            }
        };

        let delay = Duration::from_millis(self.config.reply.delay_ms);

        let mut terminal = ratatui::try_init()?;
        let result = run_loop(&mut terminal, &mut manager, logger, delay).await;
        ratatui::restore();
        result
    }
}

/// The single-threaded event loop: every history mutation and its
/// persistence happens here, in the turn of the event that caused it.
/// Scheduled replies arrive over the mpsc channel; when the loop exits
/// the receiver is dropped and still-sleeping replies are discarded
/// without touching the store.
async fn run_loop<S: Store>(
    terminal: &mut DefaultTerminal,
    manager: &mut SessionManager<S>,
    mut logger: Option<TranscriptLogger>,
    delay: Duration,
) -> anyhow::Result<()> {
    let mut state = TuiState::new();
    let (reply_tx, mut reply_rx) = mpsc::channel::<ScheduledReply>(16);
    let mut events = EventStream::new();

    loop {
        terminal.draw(|frame| {
            let view = SessionView {
                history: manager.history(),
                theme: manager.theme(),
                preset: manager.preset(),
            };
            ui::render(frame, &view, &mut state);
        })?;

        tokio::select! {
            maybe_event = events.next() => {
                let Some(event) = maybe_event else { break };
                let Event::Key(key) = event? else { continue };
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match input::handle_key(&mut state, key) {
                    InputResult::Quit => break,
                    InputResult::Send(text) => {
                        if let Some(scheduled) = manager.submit_message(&text) {
                            log_last(&mut logger, manager.history().last());
                            state.pending_replies += 1;
                            state.scroll_to_bottom();
                            schedule_reply(reply_tx.clone(), delay, scheduled);
                        }
                    }
                    InputResult::ToggleTheme => {
                        manager.set_theme(manager.theme().toggled());
                    }
                    InputResult::CyclePreset => {
                        manager.set_preset(manager.preset().cycled());
                    }
                    InputResult::ClearChat => {
                        manager.clear_chat();
                        state.scroll_to_bottom();
                    }
                    InputResult::None => {}
                }
            }
            Some(reply) = reply_rx.recv() => {
                manager.apply_reply(&reply);
                log_last(&mut logger, manager.history().last());
                state.pending_replies = state.pending_replies.saturating_sub(1);
                state.scroll_to_bottom();
            }
        }
    }

    Ok(())
}

/// Deliver `reply` into the event loop after `delay`. One task per
/// submission; if the receiver is gone by the time the delay elapses,
/// the send fails and the reply is dropped.
pub fn schedule_reply(
    tx: mpsc::Sender<ScheduledReply>,
    delay: Duration,
    reply: ScheduledReply,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let _ = tx.send(reply).await;
    })
}

/// Append the newest message to the transcript. Logging failures
/// disable the transcript for the rest of the run, never the session.
fn log_last(logger: &mut Option<TranscriptLogger>, newest: Option<&Message>) {
    let (Some(active), Some(msg)) = (logger.as_mut(), newest) else {
        return;
    };
    if let Err(e) = active.log_message(msg) {
        eprintln!("Warning: transcript logging disabled: {e}");
        *logger = None;
    }
}
