// src/controllers/scene.rs
//
// The complete interactive state as a value. Discrete commands (keys, OSC)
// and continuous rates (held keys) each produce a new state; the render pass
// only ever reads the current one.

use log::{debug, info, warn};
use rand::Rng;

use crate::config::{Config, FibonacciConfig, TilingConfig};
use crate::models::geometry::GEOMETRY_EPSILON;
use crate::models::{Line2D, TilingParameters, Vec2d, Viewport, GRID_COUNT};
use crate::views::Camera;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneMode {
    Penrose,
    Fibonacci,
}

impl SceneMode {
    pub fn next(self) -> Self {
        match self {
            SceneMode::Penrose => SceneMode::Fibonacci,
            SceneMode::Fibonacci => SceneMode::Penrose,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SceneCommand {
    SetGamma { index: usize, value: f64 },
    SetGammas([f64; GRID_COUNT]),
    RotateFactor { index: usize, angle: f64 },
    Inflate,
    Deflate,
    Reset,
    RandomGamma,
    SetLines { min: i32, max: i32 },
    Zoom(f64),
    Move(Vec2d),
    SwitchScene,
    TogglePause,
}

/// Per-second rates of the continuous controls
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterRates {
    pub gamma: [f64; GRID_COUNT],
    pub rotation: [f64; GRID_COUNT],
    pub pan: Vec2d,
    /// Natural log of the zoom factor per second
    pub zoom: f64,
    pub line_angle: f64,
    pub line_offset: f64,
}

impl Default for ParameterRates {
    fn default() -> Self {
        Self {
            gamma: [0.0; GRID_COUNT],
            rotation: [0.0; GRID_COUNT],
            pan: Vec2d::zeros(),
            zoom: 0.0,
            line_angle: 0.0,
            line_offset: 0.0,
        }
    }
}

impl ParameterRates {
    pub fn is_idle(&self) -> bool {
        *self == Self::default()
    }
}

/// Number of lines in `min..=max`, 0 for an empty range
fn line_range_len(min: i32, max: i32) -> u64 {
    (i64::from(max) - i64::from(min) + 1).max(0) as u64
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneState {
    pub mode: SceneMode,
    pub params: TilingParameters,
    /// Parameters restored by [`SceneCommand::Reset`]
    pub initial: TilingParameters,
    pub line_min: i32,
    pub line_max: i32,
    /// Longest line range accepted from the controls, at least 1
    pub max_lines_per_pencil: u32,
    pub camera: Camera,
    pub fibonacci_line: Line2D,
    pub fibonacci_extent: f64,
    pub paused: bool,
}

impl SceneState {
    pub fn new(params: TilingParameters, line_min: i32, line_max: i32, camera: Camera) -> Self {
        let fibonacci = FibonacciConfig::default();
        Self {
            mode: SceneMode::Penrose,
            params,
            initial: params,
            line_min,
            line_max,
            max_lines_per_pencil: TilingConfig::default().max_lines_per_pencil,
            camera,
            fibonacci_line: Line2D::new(fibonacci.offset, fibonacci.angle),
            fibonacci_extent: fibonacci.half_extent,
            paused: false,
        }
    }

    /// Initial state from the config. A gamma that does not sum to zero is
    /// kept but reported; an empty or oversized line range is replaced by
    /// the widest centred range the limit allows.
    pub fn from_config(config: &Config) -> Self {
        let tiling = &config.tiling;
        let params = TilingParameters::penrose(tiling.gamma);
        let gamma_sum = params.gamma_sum();
        if gamma_sum.abs() > GEOMETRY_EPSILON {
            warn!("configured gamma sums to {gamma_sum:.4}, the tiling will not be edge-to-edge");
        }

        let max_lines = tiling.max_lines_per_pencil.max(1);
        let count = line_range_len(tiling.line_min, tiling.line_max);
        let (line_min, line_max) = if count == 0 || count > u64::from(max_lines) {
            let half = ((max_lines - 1) / 2).min(i32::MAX as u32) as i32;
            warn!(
                "configured lines {}..={} are empty or exceed the limit of {max_lines}, using {}..={half}",
                tiling.line_min, tiling.line_max, -half
            );
            (-half, half)
        } else {
            (tiling.line_min, tiling.line_max)
        };
        info!("starting with gamma {:?}, lines {line_min}..={line_max}", params.gamma);

        let camera = Camera::new(Vec2d::zeros(), config.view.scale);
        Self {
            max_lines_per_pencil: max_lines,
            fibonacci_line: Line2D::new(config.fibonacci.offset, config.fibonacci.angle),
            fibonacci_extent: config.fibonacci.half_extent,
            ..Self::new(params, line_min, line_max, camera)
        }
    }

    pub fn apply<R: Rng>(&self, command: &SceneCommand, rng: &mut R) -> Self {
        let mut next = *self;
        match command {
            SceneCommand::SetGamma { index, value } => {
                if let Some(g) = next.params.gamma.get_mut(*index) {
                    *g = *value;
                }
            }
            SceneCommand::SetGammas(gamma) => next.params = self.params.with_gamma(*gamma),
            SceneCommand::RotateFactor { index, angle } => {
                let mut angles = [0.0; GRID_COUNT];
                if let Some(a) = angles.get_mut(*index) {
                    *a = *angle;
                }
                next.params = self.params.with_rotation_delta(angles);
            }
            SceneCommand::Inflate => next.params = self.params.inflated(),
            SceneCommand::Deflate => next.params = self.params.deflated(),
            SceneCommand::Reset => next.params = self.initial,
            SceneCommand::RandomGamma => next.params = self.params.with_random_gamma(rng),
            SceneCommand::SetLines { min, max } => {
                let count = line_range_len(*min, *max);
                if count == 0 {
                    warn!("ignoring empty line range {min}..={max}");
                } else if count > u64::from(self.max_lines_per_pencil) {
                    warn!(
                        "ignoring line range {min}..={max}, {count} lines exceed the limit of {}",
                        self.max_lines_per_pencil
                    );
                } else {
                    next.line_min = *min;
                    next.line_max = *max;
                }
            }
            SceneCommand::Zoom(factor) => next.camera = self.camera.zoomed(*factor),
            SceneCommand::Move(delta) => next.camera = self.camera.panned(*delta),
            SceneCommand::SwitchScene => next.mode = self.mode.next(),
            SceneCommand::TogglePause => next.paused = !self.paused,
        }

        if next.params != self.params {
            debug!(
                "{:?}: gamma {:?}, gamma sum {:.4}",
                command,
                next.params.gamma,
                next.params.gamma_sum()
            );
        }
        next
    }

    /// Apply held-control rates over `dt` seconds. A paused scene keeps
    /// its parameters but the camera still moves.
    pub fn advanced(&self, rates: &ParameterRates, dt: f64) -> Self {
        let mut next = *self;
        next.camera = self
            .camera
            .panned(rates.pan * dt)
            .zoomed((rates.zoom * dt).exp());

        if self.paused {
            return next;
        }

        next.params = self
            .params
            .with_gamma_delta(rates.gamma.map(|rate| rate * dt))
            .with_rotation_delta(rates.rotation.map(|rate| rate * dt));

        let line = self.fibonacci_line;
        next.fibonacci_line = Line2D::new(
            line.dist_to_origin + rates.line_offset * dt,
            line.angle() + rates.line_angle * dt,
        );
        next
    }

    /// Whether some pencil's offset has left `line_min..=line_max`. Repeated
    /// inflation scales gamma by the golden ratio each time, which eventually
    /// moves the tiling around the origin out of the generated lines.
    pub fn gamma_outside_lines(&self) -> bool {
        let (low, high) = (f64::from(self.line_min), f64::from(self.line_max));
        self.params.gamma.iter().any(|&g| g < low || g > high)
    }

    /// Model-space viewport for a window of the given pixel size
    pub fn viewport(&self, width: f64, height: f64, overscan: f64) -> Viewport {
        Viewport::new(
            self.camera.model_bounds(width, height, overscan),
            self.line_min,
            self.line_max,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn scene() -> SceneState {
        SceneState::new(TilingParameters::default(), -5, 5, Camera::default())
    }

    #[test]
    fn test_commands_produce_new_state() {
        let mut rng = StdRng::seed_from_u64(1);
        let start = scene();

        let moved = start.apply(&SceneCommand::SetGamma { index: 2, value: 0.45 }, &mut rng);
        assert_eq!(moved.params.gamma[2], 0.45);
        assert_eq!(start.params.gamma[2], 0.2);

        let reset = moved.apply(&SceneCommand::Reset, &mut rng);
        assert_eq!(reset.params, start.params);

        let switched = start.apply(&SceneCommand::SwitchScene, &mut rng);
        assert_eq!(switched.mode, SceneMode::Fibonacci);
        assert_eq!(switched.apply(&SceneCommand::SwitchScene, &mut rng).mode, SceneMode::Penrose);
    }

    #[test]
    fn test_out_of_range_index_is_ignored() {
        let mut rng = StdRng::seed_from_u64(1);
        let start = scene();
        assert_eq!(start.apply(&SceneCommand::SetGamma { index: 9, value: 1.0 }, &mut rng), start);
        assert_eq!(start.apply(&SceneCommand::RotateFactor { index: 5, angle: 1.0 }, &mut rng), start);
    }

    #[test]
    fn test_inflate_then_deflate() {
        let mut rng = StdRng::seed_from_u64(1);
        let start = scene();
        let back = start
            .apply(&SceneCommand::Inflate, &mut rng)
            .apply(&SceneCommand::Deflate, &mut rng);
        for k in 0..GRID_COUNT {
            assert_relative_eq!(back.params.gamma[k], start.params.gamma[k], epsilon = 1e-9);
        }
    }

    #[test]
    fn test_set_lines_rejects_empty_range() {
        let mut rng = StdRng::seed_from_u64(1);
        let start = scene();
        let widened = start.apply(&SceneCommand::SetLines { min: -8, max: 8 }, &mut rng);
        assert_eq!((widened.line_min, widened.line_max), (-8, 8));
        assert_eq!(start.apply(&SceneCommand::SetLines { min: 3, max: 1 }, &mut rng), start);
    }

    #[test]
    fn test_set_lines_rejects_oversized_range() {
        let mut rng = StdRng::seed_from_u64(1);
        let start = scene();
        let limit = start.max_lines_per_pencil as i32;
        for (min, max) in [(-100_000, 100_000), (i32::MIN, i32::MAX), (0, limit)] {
            assert_eq!(start.apply(&SceneCommand::SetLines { min, max }, &mut rng), start);
        }

        let widest = start.apply(&SceneCommand::SetLines { min: 0, max: limit - 1 }, &mut rng);
        assert_eq!((widest.line_min, widest.line_max), (0, limit - 1));
        assert_eq!(widest.viewport(800.0, 600.0, 1.0).line_max, limit - 1);
    }

    #[test]
    fn test_repeated_inflation_leaves_line_window() {
        let mut rng = StdRng::seed_from_u64(1);
        let start = SceneState::new(TilingParameters::default(), -1, 1, Camera::default());
        assert!(!start.gamma_outside_lines());

        let once = start.apply(&SceneCommand::Inflate, &mut rng);
        assert!(!once.gamma_outside_lines());
        let twice = once.apply(&SceneCommand::Inflate, &mut rng);
        assert!(twice.gamma_outside_lines());
        assert!(!twice.apply(&SceneCommand::Reset, &mut rng).gamma_outside_lines());
    }

    #[test]
    fn test_rates_drift_gamma_without_renormalizing() {
        let rates = ParameterRates {
            gamma: [0.5, 0.0, 0.0, 0.0, 0.0],
            ..ParameterRates::default()
        };
        let next = scene().advanced(&rates, 0.2);
        assert_relative_eq!(next.params.gamma[0], 0.1, epsilon = 1e-12);
        assert_relative_eq!(next.params.gamma_sum(), 0.1, epsilon = 1e-12);
    }

    #[test]
    fn test_paused_scene_keeps_parameters() {
        let mut rng = StdRng::seed_from_u64(1);
        let paused = scene().apply(&SceneCommand::TogglePause, &mut rng);
        let rates = ParameterRates {
            gamma: [1.0; GRID_COUNT],
            pan: Vec2d::new(1.0, 0.0),
            ..ParameterRates::default()
        };
        let next = paused.advanced(&rates, 0.5);
        assert_eq!(next.params, paused.params);
        assert_eq!(next.camera.center, Vec2d::new(0.5, 0.0));
    }

    #[test]
    fn test_idle_rates_change_nothing() {
        let start = scene();
        assert!(ParameterRates::default().is_idle());
        assert_eq!(start.advanced(&ParameterRates::default(), 0.016), start);
    }

    #[test]
    fn test_from_config_uses_configured_values() {
        let config = Config::default();
        let state = SceneState::from_config(&config);
        assert_eq!(state.params, TilingParameters::default());
        assert_eq!(state.line_min, config.tiling.line_min);
        assert_eq!(state.camera.scale, config.view.scale);
        assert_eq!(state.max_lines_per_pencil, config.tiling.max_lines_per_pencil);
    }

    #[test]
    fn test_from_config_keeps_drifted_gamma() {
        let mut config = Config::default();
        config.tiling.gamma = [0.5, 0.0, 0.0, 0.0, 0.0];
        let state = SceneState::from_config(&config);
        assert_eq!(state.params.gamma, config.tiling.gamma);
        assert_relative_eq!(state.params.gamma_sum(), 0.5);
    }

    #[test]
    fn test_from_config_limits_line_range() {
        let mut config = Config::default();
        config.tiling.max_lines_per_pencil = 21;
        for (min, max) in [(-5_000, 5_000), (i32::MIN, i32::MAX), (4, -4)] {
            config.tiling.line_min = min;
            config.tiling.line_max = max;
            let state = SceneState::from_config(&config);
            assert_eq!((state.line_min, state.line_max), (-10, 10));
        }

        config.tiling.line_min = -3;
        config.tiling.line_max = 7;
        let state = SceneState::from_config(&config);
        assert_eq!((state.line_min, state.line_max), (-3, 7));
    }
}
