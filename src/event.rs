//! Terminal input and tick events merged into one async stream

use crossterm::event::{self, Event};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{self, Interval, MissedTickBehavior};

/// How long the input thread blocks in `poll` before checking for shutdown
const INPUT_POLL: Duration = Duration::from_millis(50);

/// Something the main loop has to react to
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    Input(Event),
    Tick,
}

/// Merges terminal input with a periodic tick
pub struct EventPump {
    input: mpsc::UnboundedReceiver<Event>,
    ticker: Interval,
}

impl EventPump {
    /// Start reading terminal input on a dedicated thread
    pub fn spawn(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        // poll() and read() stay on one OS thread; the thread exits once the
        // receiver is dropped.
        std::thread::spawn(move || {
            while !tx.is_closed() {
                match event::poll(INPUT_POLL) {
                    Ok(true) => match event::read() {
                        Ok(event) => {
                            if tx.send(event).is_err() {
                                break;
                            }
                        }
                        Err(e) => {
                            tracing::warn!("Failed to read event: {e}");
                            break;
                        }
                    },
                    Ok(false) => {}
                    Err(e) => {
                        tracing::warn!("Failed to poll events: {e}");
                        break;
                    }
                }
            }
            tracing::debug!("Input thread stopped");
        });

        Self::from_receiver(rx, tick_rate)
    }

    /// Build a pump over an existing input channel
    pub fn from_receiver(input: mpsc::UnboundedReceiver<Event>, tick_rate: Duration) -> Self {
        let mut ticker = time::interval(tick_rate);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Self { input, ticker }
    }

    /// Next event; `None` once the input source is gone
    pub async fn next(&mut self) -> Option<AppEvent> {
        tokio::select! {
            maybe_event = self.input.recv() => maybe_event.map(AppEvent::Input),
            _ = self.ticker.tick() => Some(AppEvent::Tick),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;

    fn key(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
    }

    #[tokio::test]
    async fn test_first_event_is_immediate_tick() {
        let (_tx, rx) = mpsc::unbounded_channel();
        let mut pump = EventPump::from_receiver(rx, Duration::from_secs(60));
        assert_eq!(pump.next().await, Some(AppEvent::Tick));
    }

    #[tokio::test]
    async fn test_forwards_input_events() {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut pump = EventPump::from_receiver(rx, Duration::from_secs(60));
        // consume the immediate first tick
        pump.next().await;

        tx.send(key('a')).unwrap();
        assert_eq!(pump.next().await, Some(AppEvent::Input(key('a'))));
    }

    #[tokio::test]
    async fn test_closed_input_ends_stream() {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut pump = EventPump::from_receiver(rx, Duration::from_secs(60));
        pump.next().await;

        drop(tx);
        assert_eq!(pump.next().await, None);
    }
}
