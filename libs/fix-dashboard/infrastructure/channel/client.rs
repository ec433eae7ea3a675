use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crossbeam_channel::{unbounded, Receiver, Sender};
use futures::StreamExt;
use tokio::net::TcpStream;
use tokio::runtime::Handle;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};
use tracing::{debug, error, info, warn};
use url::Url;

use super::reconnect::ReconnectPolicy;
use crate::infrastructure::DashboardError;
use crate::Result;

/// How often a blocked read re-checks the shutdown flag
const SHUTDOWN_POLL: Duration = Duration::from_millis(100);

type Socket = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Signals delivered to the consumer, in transport order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelSignal {
    /// Socket handshake completed
    Opened,
    /// One inbound text frame, undecoded
    Frame(String),
    /// Socket closed, failed, or could not be opened
    Closed,
}

/// Builder/launcher for the channel task
pub struct ChannelClient {
    url: Url,
    reconnect: ReconnectPolicy,
    shutdown_flag: Arc<AtomicBool>,
}

impl ChannelClient {
    pub fn new(url: Url) -> Self {
        Self {
            url,
            reconnect: ReconnectPolicy::Never,
            shutdown_flag: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn reconnect(mut self, policy: ReconnectPolicy) -> Self {
        self.reconnect = policy;
        self
    }

    /// Share a running flag with other components (true = keep running)
    pub fn shutdown_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.shutdown_flag = flag;
        self
    }

    /// Spawn the socket task on `runtime` and return the consumer handle
    pub fn spawn(self, runtime: &Handle) -> ChannelHandle {
        let ChannelClient {
            url,
            reconnect,
            shutdown_flag,
        } = self;
        let (signal_tx, signal_rx) = unbounded();
        let frames_received = Arc::new(AtomicU64::new(0));

        let task = {
            let shutdown_flag = Arc::clone(&shutdown_flag);
            let frames_received = Arc::clone(&frames_received);
            runtime.spawn(async move {
                run_channel(url, reconnect, shutdown_flag, frames_received, signal_tx).await;
            })
        };

        ChannelHandle {
            signals: signal_rx,
            shutdown_flag,
            frames_received,
            task: Some(task),
        }
    }
}

/// Consumer side of a running channel
pub struct ChannelHandle {
    signals: Receiver<ChannelSignal>,
    shutdown_flag: Arc<AtomicBool>,
    frames_received: Arc<AtomicU64>,
    task: Option<tokio::task::JoinHandle<()>>,
}

impl ChannelHandle {
    /// A receiver for the signal stream (crossbeam receivers are cheap to clone)
    pub fn signals(&self) -> Receiver<ChannelSignal> {
        self.signals.clone()
    }

    pub fn try_recv(&self) -> Option<ChannelSignal> {
        self.signals.try_recv().ok()
    }

    pub fn frames_received(&self) -> u64 {
        self.frames_received.load(Ordering::Relaxed)
    }

    pub fn is_running(&self) -> bool {
        self.shutdown_flag.load(Ordering::Acquire)
    }

    /// Stop the socket task; the socket is closed within one poll interval
    pub async fn shutdown(mut self) {
        info!("Shutting down channel client");
        self.shutdown_flag.store(false, Ordering::Release);
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
    }

    /// Request shutdown without waiting (usable outside the runtime)
    pub fn request_shutdown(&self) {
        self.shutdown_flag.store(false, Ordering::Release);
    }
}

impl Drop for ChannelHandle {
    fn drop(&mut self) {
        self.shutdown_flag.store(false, Ordering::Release);
    }
}

async fn run_channel(
    url: Url,
    reconnect: ReconnectPolicy,
    shutdown_flag: Arc<AtomicBool>,
    frames_received: Arc<AtomicU64>,
    signal_tx: Sender<ChannelSignal>,
) {
    let mut attempt = 0;

    loop {
        if !shutdown_flag.load(Ordering::Acquire) {
            debug!("Shutdown flag is false, channel task exiting");
            break;
        }

        match connect_async(url.as_str()).await {
            Ok((socket, _)) => {
                info!("Connected to {}", url);
                attempt = 0;
                if signal_tx.send(ChannelSignal::Opened).is_err() {
                    break;
                }

                if let Err(e) =
                    read_frames(socket, &shutdown_flag, &frames_received, &signal_tx).await
                {
                    warn!("Channel closed: {}", e);
                }

                if signal_tx.send(ChannelSignal::Closed).is_err() {
                    break;
                }
            }
            Err(e) => {
                error!("Failed to connect to {}: {}", url, e);
                if signal_tx.send(ChannelSignal::Closed).is_err() {
                    break;
                }
            }
        }

        if !shutdown_flag.load(Ordering::Acquire) {
            break;
        }

        let Some(delay) = reconnect.next_delay(attempt) else {
            info!("Reconnection disabled, channel stays closed");
            break;
        };

        info!("Reconnecting in {:?} (attempt {})", delay, attempt + 1);
        let mut elapsed = Duration::ZERO;
        while elapsed < delay {
            if !shutdown_flag.load(Ordering::Acquire) {
                return;
            }
            let step = SHUTDOWN_POLL.min(delay - elapsed);
            tokio::time::sleep(step).await;
            elapsed += step;
        }
        attempt += 1;
    }

    info!("Channel task exiting");
}

/// Forward frames until the socket ends; `Ok` on orderly close or shutdown
async fn read_frames(
    mut socket: Socket,
    shutdown_flag: &AtomicBool,
    frames_received: &AtomicU64,
    signal_tx: &Sender<ChannelSignal>,
) -> Result<()> {
    loop {
        if !shutdown_flag.load(Ordering::Acquire) {
            debug!("Shutdown detected, closing socket");
            let _ = socket.close(None).await;
            return Ok(());
        }

        let next = match tokio::time::timeout(SHUTDOWN_POLL, socket.next()).await {
            Ok(next) => next,
            Err(_) => continue,
        };

        let frame = match next {
            Some(Ok(Message::Text(text))) => text,
            Some(Ok(Message::Binary(bytes))) => match String::from_utf8(bytes) {
                Ok(text) => text,
                Err(e) => {
                    warn!("Dropping binary frame that is not UTF-8: {}", e);
                    continue;
                }
            },
            Some(Ok(Message::Close(frame))) => {
                debug!("Server closed channel: {:?}", frame);
                return Ok(());
            }
            Some(Ok(Message::Ping(_) | Message::Pong(_) | Message::Frame(_))) => continue,
            Some(Err(e)) => return Err(DashboardError::WebSocket(e.to_string())),
            None => return Err(DashboardError::WebSocket("stream ended".into())),
        };

        frames_received.fetch_add(1, Ordering::Relaxed);
        if signal_tx.send(ChannelSignal::Frame(frame)).is_err() {
            debug!("Signal consumer dropped, closing socket");
            let _ = socket.close(None).await;
            return Ok(());
        }
    }
}
