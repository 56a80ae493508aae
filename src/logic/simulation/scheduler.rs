use tokio::task::JoinHandle;

/// Owner of the cancelable one-shot timers that make up one logical
/// attack timeline. Command handlers cancel the previous timeline
/// before registering a new one, so two timelines never overlap.
#[derive(Debug, Default)]
pub struct Scheduler {
    handles: Vec<JoinHandle<()>>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track a spawned one-shot so it can be canceled later.
    pub fn register(&mut self, handle: JoinHandle<()>) {
        // Drop already-finished handles while we are here
        self.handles.retain(|h| !h.is_finished());
        self.handles.push(handle);
    }

    /// Abort every outstanding timer. Idempotent.
    pub fn cancel_all(&mut self) {
        for handle in self.handles.drain(..) {
            handle.abort();
        }
    }

    pub fn pending(&self) -> usize {
        self.handles.iter().filter(|h| !h.is_finished()).count()
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn test_cancel_all_aborts_pending_timers() {
        let mut scheduler = Scheduler::new();
        let fired = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(false));

        let flag = fired.clone();
        scheduler.register(tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(2000)).await;
            flag.store(true, std::sync::atomic::Ordering::SeqCst);
        }));

        assert_eq!(scheduler.pending(), 1);
        scheduler.cancel_all();
        assert_eq!(scheduler.pending(), 0);

        tokio::time::advance(Duration::from_millis(5000)).await;
        tokio::task::yield_now().await;
        assert!(!fired.load(std::sync::atomic::Ordering::SeqCst));
    }
}
