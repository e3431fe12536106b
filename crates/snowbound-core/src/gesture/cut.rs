use crate::gesture::Point;
use crate::tuning::CutTuning;

/// Path-tracing cut across the heart target.
///
/// Points are captured between pointer-down and pointer-up/leave, in
/// target-local coordinates. Every new attempt discards the previous path.
#[derive(Clone, Debug)]
pub struct HeartCut {
    tuning: CutTuning,
    points: Vec<Point>,
    cutting: bool,
    severed: bool,
}

impl HeartCut {
    pub fn new(tuning: CutTuning) -> Self {
        Self {
            tuning,
            points: Vec::new(),
            cutting: false,
            severed: false,
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn is_cutting(&self) -> bool {
        self.cutting
    }

    pub fn is_severed(&self) -> bool {
        self.severed
    }

    /// Pointer down. Ignored once the heart has been cut.
    pub fn begin(&mut self) -> bool {
        if self.severed {
            return false;
        }
        self.cutting = true;
        self.points.clear();
        true
    }

    pub fn track(&mut self, p: Point) {
        if self.cutting && p.is_finite() {
            self.points.push(p);
        }
    }

    /// Pointer up or leave. True only when this attempt severs the heart.
    pub fn end(&mut self) -> bool {
        if !self.cutting {
            return false;
        }
        self.cutting = false;
        if self.severed || !path_severs(&self.points, &self.tuning) {
            return false;
        }
        self.severed = true;
        log::debug!("[cut] severed with {} points", self.points.len());
        true
    }

    pub fn reset(&mut self) {
        self.points.clear();
        self.cutting = false;
        self.severed = false;
    }
}

/// Forgiving match against the arc from (20,100) over (100,20) to (180,100):
/// the stroke must run left to right across the target and pass through the
/// window around the arc's peak enough times.
pub fn path_severs(points: &[Point], tuning: &CutTuning) -> bool {
    if points.len() < tuning.min_points {
        return false;
    }
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return false;
    };
    if !(first.x < tuning.start_max_x && last.x > tuning.end_min_x) {
        return false;
    }
    let peak_hits = points
        .iter()
        .filter(|p| p.cmpgt(tuning.peak_min).all() && p.cmplt(tuning.peak_max).all())
        .count();
    peak_hits >= tuning.min_peak_hits
}
