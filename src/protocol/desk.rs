use super::request::Format;
use super::request::Request;
use std::sync::mpsc::Sender;
use std::sync::mpsc::SyncSender;
use std::thread::JoinHandle;

/// One request waiting at the desk, with somewhere to send the answer.
struct Ticket {
    request: Request,
    format: Format,
    reply: Sender<String>,
}

/// Single-admission front desk for the engines.
///
/// One worker thread owns all computation. Requests queue on a bounded
/// channel and are answered in arrival order, so at most one report is
/// ever in flight. The engines themselves stay lock free.
pub struct Desk {
    sender: Option<SyncSender<Ticket>>,
    worker: Option<JoinHandle<()>>,
}

impl Desk {
    pub fn open() -> Self {
        let (sender, tickets) = std::sync::mpsc::sync_channel::<Ticket>(1);
        let worker = std::thread::spawn(move || {
            for ticket in tickets {
                let response = ticket.request.respond(ticket.format);
                let _ = ticket.reply.send(response);
            }
            log::debug!("desk closed");
        });
        Self {
            sender: Some(sender),
            worker: Some(worker),
        }
    }

    /// Blocks until the worker has answered this request.
    pub fn submit(&self, request: Request, format: Format) -> anyhow::Result<String> {
        let (reply, answer) = std::sync::mpsc::channel();
        self.sender
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("desk is closed"))?
            .send(Ticket {
                request,
                format,
                reply,
            })
            .map_err(|_| anyhow::anyhow!("desk worker stopped"))?;
        answer
            .recv()
            .map_err(|_| anyhow::anyhow!("desk worker dropped the request"))
    }

    /// Stop admitting requests and wait for the worker to drain.
    pub fn close(&mut self) {
        drop(self.sender.take());
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                log::error!("desk worker panicked");
            }
        }
    }
}

impl Default for Desk {
    fn default() -> Self {
        Self::open()
    }
}

impl Drop for Desk {
    fn drop(&mut self) {
        self.close();
    }
}
