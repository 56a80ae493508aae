use std::collections::VecDeque;

use super::generator::TelemetryPoint;

/// Bounded, append-only telemetry window with ring-buffer semantics.
#[derive(Debug)]
pub struct TelemetryWindow {
    points: VecDeque<TelemetryPoint>,
    capacity: usize,
}

impl TelemetryWindow {
    pub fn new(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a point, dropping the oldest on overflow.
    pub fn push(&mut self, point: TelemetryPoint) {
        if self.points.len() == self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Ordered copy of the window (oldest first) for the presentation layer.
    pub fn snapshot(&self) -> Vec<TelemetryPoint> {
        self.points.iter().cloned().collect()
    }

    /// Trailing `count` points as `(pressure, flow, level)` triples,
    /// oldest first. `None` until the window holds at least `count`.
    pub fn trailing_triples(&self, count: usize) -> Option<Vec<[f64; 3]>> {
        if self.points.len() < count {
            return None;
        }

        let start = self.points.len() - count;
        Some(
            self.points
                .iter()
                .skip(start)
                .map(|p| [p.pressure, p.flow, p.level])
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(pressure: f64) -> TelemetryPoint {
        TelemetryPoint {
            time: "00:00:00".to_string(),
            pressure,
            flow: 40.0,
            level: 68.0,
            anomaly_level: 0.1,
        }
    }

    #[test]
    fn test_oldest_dropped_on_overflow() {
        let mut window = TelemetryWindow::new(3);
        for i in 0..5 {
            window.push(point(60.0 + i as f64));
        }

        assert_eq!(window.len(), 3);
        let snap = window.snapshot();
        assert_eq!(snap[0].pressure, 62.0);
        assert_eq!(snap[2].pressure, 64.0);
    }

    #[test]
    fn test_trailing_triples_requires_enough_points() {
        let mut window = TelemetryWindow::new(44);
        for i in 0..19 {
            window.push(point(60.0 + i as f64));
        }
        assert!(window.trailing_triples(20).is_none());

        window.push(point(90.0));
        let triples = window.trailing_triples(20).unwrap();
        assert_eq!(triples.len(), 20);
        // Oldest first, newest last
        assert_eq!(triples[0][0], 60.0);
        assert_eq!(triples[19][0], 90.0);
    }
}
