use crate::controllers::interactive::ports::renderer::RendererError;
use crate::core::data::pixel_buffer::PixelBuffer;
use futures::channel::oneshot;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaptureError {
    #[error("multiple captures cannot be taken concurrently")]
    InProgress,
    #[error("render loop stopped before the capture completed")]
    Abandoned,
    #[error("frame readback failed: {0}")]
    Readback(#[from] RendererError),
}

pub type CaptureResult = Result<PixelBuffer, CaptureError>;

/// Receiving half of a capture request.
///
/// Resolves exactly once, on the first frame the render loop completes after
/// the request. Can be awaited or polled with [`CaptureTicket::try_take`].
#[derive(Debug)]
pub struct CaptureTicket {
    receiver: oneshot::Receiver<CaptureResult>,
}

impl CaptureTicket {
    /// Takes the result if it is ready, without blocking.
    ///
    /// Once this has returned `Some`, the ticket is spent.
    pub fn try_take(&mut self) -> Option<CaptureResult> {
        match self.receiver.try_recv() {
            Ok(received) => received,
            Err(oneshot::Canceled) => Some(Err(CaptureError::Abandoned)),
        }
    }
}

impl Future for CaptureTicket {
    type Output = CaptureResult;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.receiver)
            .poll(cx)
            .map(|received| received.unwrap_or_else(|_| Err(CaptureError::Abandoned)))
    }
}

/// Holds at most one outstanding capture.
#[derive(Debug, Default)]
pub struct CaptureSlot {
    pending: Option<oneshot::Sender<CaptureResult>>,
}

impl CaptureSlot {
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Opens a capture, failing immediately if one is already outstanding.
    pub fn open(&mut self) -> Result<CaptureTicket, CaptureError> {
        if self.pending.is_some() {
            return Err(CaptureError::InProgress);
        }

        let (sender, receiver) = oneshot::channel();
        self.pending = Some(sender);

        Ok(CaptureTicket { receiver })
    }

    /// Resolves the outstanding capture, if any. Returns whether one was
    /// resolved.
    pub fn fulfil(&mut self, result: CaptureResult) -> bool {
        let Some(sender) = self.pending.take() else {
            return false;
        };

        if sender.send(result).is_err() {
            debug!("capture ticket dropped before the frame was ready");
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::canvas_size::CanvasSize;
    use futures::executor::block_on;

    fn frame() -> PixelBuffer {
        PixelBuffer::new(CanvasSize::new(2, 2))
    }

    #[test]
    fn second_open_fails_while_pending() {
        let mut slot = CaptureSlot::default();

        let _first = slot.open().unwrap();

        assert_eq!(slot.open().unwrap_err(), CaptureError::InProgress);
        assert!(slot.is_pending());
    }

    #[test]
    fn ticket_resolves_once_after_fulfil() {
        let mut slot = CaptureSlot::default();
        let mut ticket = slot.open().unwrap();

        assert!(ticket.try_take().is_none());
        assert!(slot.fulfil(Ok(frame())));
        assert!(!slot.is_pending());
        assert!(!slot.fulfil(Ok(frame())));

        assert_eq!(ticket.try_take(), Some(Ok(frame())));
    }

    #[test]
    fn ticket_can_be_awaited() {
        let mut slot = CaptureSlot::default();
        let ticket = slot.open().unwrap();

        slot.fulfil(Err(CaptureError::Readback(RendererError::NoFrame)));

        assert_eq!(
            block_on(ticket),
            Err(CaptureError::Readback(RendererError::NoFrame))
        );
    }

    #[test]
    fn dropping_the_slot_abandons_the_ticket() {
        let mut slot = CaptureSlot::default();
        let mut ticket = slot.open().unwrap();

        drop(slot);

        assert_eq!(ticket.try_take(), Some(Err(CaptureError::Abandoned)));
    }

    #[test]
    fn slot_reopens_after_fulfil() {
        let mut slot = CaptureSlot::default();
        let _first = slot.open().unwrap();
        slot.fulfil(Ok(frame()));

        assert!(slot.open().is_ok());
    }
}
