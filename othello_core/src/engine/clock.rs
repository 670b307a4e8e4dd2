/// Milliseconds from an arbitrary origin.
pub fn now() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        if let Some(window) = web_sys::window() {
            return window.performance().map(|p| p.now()).unwrap_or(0.0);
        }
        let global = js_sys::global();
        if let Ok(worker) = global.dyn_into::<web_sys::WorkerGlobalScope>() {
            return worker.performance().map(|p| p.now()).unwrap_or(0.0);
        }
        0.0
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::sync::OnceLock;
        use std::time::Instant;

        static ORIGIN: OnceLock<Instant> = OnceLock::new();
        let origin = *ORIGIN.get_or_init(Instant::now);
        origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// Absolute point in time after which the search stops expanding nodes.
/// Passed by value into every recursive call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Deadline {
    at_ms: Option<f64>,
}

impl Deadline {
    #[allow(clippy::cast_precision_loss)]
    pub fn after_ms(budget_ms: u64) -> Self {
        Self {
            at_ms: Some(now() + budget_ms as f64),
        }
    }

    pub const fn unbounded() -> Self {
        Self { at_ms: None }
    }

    /// Time left in milliseconds; infinite for an unbounded deadline.
    pub fn remaining_ms(&self) -> f64 {
        self.at_ms.map_or(f64::INFINITY, |at| at - now())
    }

    pub fn expired(&self) -> bool {
        self.remaining_ms() <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_budget_is_expired() {
        assert!(Deadline::after_ms(0).expired());
    }

    #[test]
    fn test_unbounded_never_expires() {
        let deadline = Deadline::unbounded();
        assert!(!deadline.expired());
        assert!(deadline.remaining_ms().is_infinite());
    }

    #[test]
    fn test_now_never_goes_backwards() {
        let mut last = now();
        for _ in 0..1000 {
            let t = now();
            assert!(t >= last);
            last = t;
        }
    }

    #[test]
    fn test_long_budget_has_time_left() {
        let deadline = Deadline::after_ms(60_000);
        assert!(!deadline.expired());
        assert!(deadline.remaining_ms() > 50_000.0);
    }
}
