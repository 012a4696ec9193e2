use std::time::{Duration, Instant};

use crossterm::event::EventStream;
use futures_util::StreamExt;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};

use crate::command::{ActionId, CommandOutcome};
use crate::error::AppResult;
use crate::event::DomainEvent;

use super::core::App;
use super::terminal_session::TerminalSession;

struct LoopRuntime {
    session: TerminalSession,
    redraw_tick: time::Interval,
    carousel_tick: time::Interval,
    event_tx: UnboundedSender<DomainEvent>,
    event_rx: UnboundedReceiver<DomainEvent>,
    input_task: JoinHandle<()>,
    needs_redraw: bool,
}

enum WaitEvent {
    Event(DomainEvent),
    Closed,
}

enum LoopControl {
    Continue,
    Break,
}

impl App {
    pub async fn run(&mut self) -> AppResult<()> {
        let mut runtime = self.initialize_loop_runtime()?;

        loop {
            if runtime.needs_redraw {
                runtime.needs_redraw = false;
                self.render_frame(&mut runtime.session, Instant::now())?;
                let (changed, events) = self.after_frame_sync();
                for event in events {
                    let _ = runtime.event_tx.send(DomainEvent::App(event));
                }
                if changed {
                    runtime.needs_redraw = true;
                }
            }

            let waited = wait_next_event(
                &mut runtime.event_rx,
                &mut runtime.redraw_tick,
                &mut runtime.carousel_tick,
            )
            .await;
            if matches!(
                self.handle_waited_event(waited, &mut runtime),
                LoopControl::Break
            ) {
                break;
            }
        }

        runtime.input_task.abort();
        runtime.session.restore()?;
        Ok(())
    }

    fn initialize_loop_runtime(&mut self) -> AppResult<LoopRuntime> {
        let session = TerminalSession::enter()?;

        let (event_tx, event_rx) = unbounded_channel();
        let input_task = spawn_input_task(event_tx.clone());

        let mut redraw_tick =
            time::interval(Duration::from_millis(self.config.ui.redraw_tick_ms));
        redraw_tick.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut carousel_tick =
            time::interval(Duration::from_millis(self.config.ui.carousel_interval_ms));
        carousel_tick.set_missed_tick_behavior(MissedTickBehavior::Skip);

        self.nav.sync_location(&self.location.current());

        Ok(LoopRuntime {
            session,
            redraw_tick,
            carousel_tick,
            event_tx,
            event_rx,
            input_task,
            needs_redraw: true,
        })
    }

    fn handle_waited_event(&mut self, waited: WaitEvent, runtime: &mut LoopRuntime) -> LoopControl {
        match waited {
            WaitEvent::Event(DomainEvent::Input(event)) => {
                let outcome = self.handle_input_event(event);
                if outcome.redraw {
                    runtime.needs_redraw = true;
                }
                if let Some(command) = outcome.command {
                    let _ = runtime.event_tx.send(DomainEvent::Command(command));
                }
            }
            WaitEvent::Event(DomainEvent::InputError(message)) => {
                self.state.status.last_action_id = Some(ActionId::Input);
                self.state.status.message = format!("input error: {message}");
                runtime.needs_redraw = true;
            }
            WaitEvent::Event(DomainEvent::Command(command)) => {
                let dispatch = self.dispatch_command(command, Instant::now());
                for event in dispatch.emitted_events {
                    let _ = runtime.event_tx.send(DomainEvent::App(event));
                }
                match dispatch.outcome {
                    CommandOutcome::QuitRequested => return LoopControl::Break,
                    CommandOutcome::Applied | CommandOutcome::Noop => {
                        runtime.needs_redraw = true;
                    }
                }
            }
            WaitEvent::Event(DomainEvent::App(event)) => {
                self.handle_app_event(&event);
                runtime.needs_redraw = true;
            }
            WaitEvent::Event(DomainEvent::CarouselTick) => {
                if self.advance_carousels() {
                    runtime.needs_redraw = true;
                }
            }
            WaitEvent::Event(DomainEvent::RedrawTick) => {
                if self.state.theme.advance(Instant::now()) {
                    runtime.needs_redraw = true;
                }
            }
            WaitEvent::Closed => return LoopControl::Break,
        }
        LoopControl::Continue
    }
}

fn spawn_input_task(tx: UnboundedSender<DomainEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut input_stream = EventStream::new();
        while let Some(event) = input_stream.next().await {
            let loop_event = match event {
                Ok(event) => DomainEvent::Input(event),
                Err(err) => DomainEvent::InputError(err.to_string()),
            };
            if tx.send(loop_event).is_err() {
                return;
            }
        }
    })
}

async fn wait_next_event(
    event_rx: &mut UnboundedReceiver<DomainEvent>,
    redraw_tick: &mut time::Interval,
    carousel_tick: &mut time::Interval,
) -> WaitEvent {
    tokio::select! {
        biased;
        maybe_event = event_rx.recv() => {
            match maybe_event {
                Some(event) => WaitEvent::Event(event),
                None => WaitEvent::Closed,
            }
        },
        _ = carousel_tick.tick() => {
            WaitEvent::Event(DomainEvent::CarouselTick)
        },
        _ = redraw_tick.tick() => {
            WaitEvent::Event(DomainEvent::RedrawTick)
        },
    }
}
