//! Common test utilities for dashboard integration tests

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use fix_dashboard::{ChannelHandle, ChannelSignal};
use futures::{SinkExt, StreamExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::Notify;
use tokio_tungstenite::accept_async;
use tokio_tungstenite::tungstenite::Message;
use url::Url;

/// What the server does once the scripted frames are sent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AfterScript {
    Close,
    HoldOpen,
}

/// A mock session server that pushes a fixed script to every connection
pub struct MockWsServer {
    pub addr: SocketAddr,
    shutdown: Arc<Notify>,
    connections: Arc<AtomicUsize>,
}

impl MockWsServer {
    pub async fn start(script: Vec<String>, after: AfterScript) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let shutdown = Arc::new(Notify::new());
        let connections = Arc::new(AtomicUsize::new(0));

        let shutdown_clone = Arc::clone(&shutdown);
        let connections_clone = Arc::clone(&connections);
        tokio::spawn(async move {
            loop {
                tokio::select! {
                    result = listener.accept() => {
                        match result {
                            Ok((stream, _)) => {
                                connections_clone.fetch_add(1, Ordering::SeqCst);
                                let script = script.clone();
                                let shutdown = Arc::clone(&shutdown_clone);
                                tokio::spawn(async move {
                                    Self::handle_connection(stream, script, after, shutdown).await;
                                });
                            }
                            Err(e) => {
                                eprintln!("Accept error: {}", e);
                                break;
                            }
                        }
                    }
                    _ = shutdown_clone.notified() => break,
                }
            }
        });

        Self {
            addr,
            shutdown,
            connections,
        }
    }

    async fn handle_connection(
        stream: TcpStream,
        script: Vec<String>,
        after: AfterScript,
        shutdown: Arc<Notify>,
    ) {
        let mut ws = match accept_async(stream).await {
            Ok(ws) => ws,
            Err(e) => {
                eprintln!("WebSocket handshake failed: {}", e);
                return;
            }
        };

        for frame in script {
            if ws.send(Message::Text(frame)).await.is_err() {
                return;
            }
        }

        if after == AfterScript::Close {
            let _ = ws.close(None).await;
            return;
        }

        loop {
            tokio::select! {
                msg = ws.next() => {
                    match msg {
                        Some(Ok(msg)) if msg.is_close() => break,
                        Some(Ok(_)) => continue,
                        Some(Err(_)) | None => break,
                    }
                }
                _ = shutdown.notified() => break,
            }
        }
    }

    pub fn ws_url(&self) -> Url {
        Url::parse(&format!("ws://{}/ws", self.addr)).unwrap()
    }

    pub fn connections(&self) -> usize {
        self.connections.load(Ordering::SeqCst)
    }

    pub fn shutdown(&self) {
        self.shutdown.notify_waiters();
    }
}

impl Drop for MockWsServer {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Poll the handle without blocking the runtime
pub async fn next_signal(handle: &ChannelHandle, timeout: Duration) -> Option<ChannelSignal> {
    let deadline = Instant::now() + timeout;
    loop {
        if let Some(signal) = handle.try_recv() {
            return Some(signal);
        }
        if Instant::now() >= deadline {
            return None;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}

/// Collect signals until `count` arrive or the timeout passes
pub async fn collect_signals(
    handle: &ChannelHandle,
    count: usize,
    timeout: Duration,
) -> Vec<ChannelSignal> {
    let deadline = Instant::now() + timeout;
    let mut signals = Vec::new();
    while signals.len() < count {
        let remaining = deadline.saturating_duration_since(Instant::now());
        match next_signal(handle, remaining).await {
            Some(signal) => signals.push(signal),
            None => break,
        }
    }
    signals
}

pub fn frame(json: serde_json::Value) -> String {
    json.to_string()
}
