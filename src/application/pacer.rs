/// Fixed-rate gate for the simulation, fed with the render frame time.
#[derive(Clone, Debug)]
pub struct FramePacer {
    interval: f32,
    timer: f32,
}

impl FramePacer {
    /// `target_fps` must be positive; the configuration layer guarantees it
    pub fn new(target_fps: f32) -> Self {
        Self {
            interval: 1.0 / target_fps,
            timer: 0.0,
        }
    }

    /// Accumulate `delta_time` seconds; true when a simulation frame is due.
    /// Leftover time carries into the next frame, capped at one interval so a
    /// stall does not turn into a burst of steps.
    pub fn ready(&mut self, delta_time: f32) -> bool {
        self.timer += delta_time;
        if self.timer >= self.interval {
            self.timer = (self.timer - self.interval).min(self.interval);
            true
        } else {
            false
        }
    }
}
