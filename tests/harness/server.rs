use std::net::SocketAddr;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use storekeep::adapter::inbound::http;
use storekeep::application::DataContext;
use storekeep::port::outbound::catalog::Catalog;
use storekeep::port::outbound::directory::ManagerDirectory;

/// Application server on an ephemeral loopback port.
pub struct TestServer {
    addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl TestServer {
    pub async fn start<C, M>(ctx: DataContext<C, M>) -> Self
    where
        C: Catalog + 'static,
        M: ManagerDirectory + 'static,
    {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind test listener");
        let addr = listener.local_addr().expect("listener address");
        let (tx, rx) = oneshot::channel::<()>();
        let handle = tokio::spawn(async move {
            let shutdown = async move {
                let _ = rx.await;
            };
            http::serve(listener, ctx, shutdown)
                .await
                .expect("test server");
        });
        Self {
            addr,
            shutdown: Some(tx),
            handle: Some(handle),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    pub async fn stop(mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}
