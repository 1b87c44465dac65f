//! Simulation engine — composes rotation, geometry, and trails per tick.
//!
//! `SimulationEngine` owns the body geometry, the parameter store, and the
//! two trail buffers, and produces a `FrameSnapshot` per tick. Completely
//! headless: the external driver supplies the frame index and the cadence,
//! and a renderer consumes the snapshots.

use glam::DVec3;
use tracing::{debug, info};

use gyrosim_core::config::SimConfig;
use gyrosim_core::error::SimError;
use gyrosim_core::geometry::BodyGeometry;
use gyrosim_core::params::{ParameterStore, RotationParameters, TrailReset};
use gyrosim_core::rotation;
use gyrosim_core::state::{AxisSegment, FrameSnapshot};
use gyrosim_core::types::SimTime;

use crate::trail::TrailBuffer;

/// The simulation engine. Owns all mutable simulation state.
pub struct SimulationEngine {
    config: SimConfig,
    geometry: BodyGeometry,
    params: ParameterStore,
    apex_trail: TrailBuffer,
    base_trail: TrailBuffer,
}

impl SimulationEngine {
    /// Validate `config`, build the body geometry, and create empty trails.
    pub fn new(config: SimConfig) -> Result<Self, SimError> {
        config.validate()?;
        let geometry =
            BodyGeometry::build(config.cone_radius, config.cone_height, config.cone_points)?;
        let params = ParameterStore::new(config.rotation_parameters());

        info!(
            cone_height = config.cone_height,
            cone_radius = config.cone_radius,
            cone_points = config.cone_points,
            dt = config.dt,
            trail_length = config.trail_length,
            "simulation engine initialized"
        );

        Ok(Self {
            geometry,
            params,
            apex_trail: TrailBuffer::new(config.trail_length),
            base_trail: TrailBuffer::new(config.trail_length),
            config,
        })
    }

    /// Compute the snapshot for `frame_index`, where t = frame_index × dt.
    ///
    /// Pure in the current parameters and geometry, except that the new apex
    /// and base positions are pushed into their trails. The frame index is
    /// owned by the external driver; the engine keeps no clock of its own.
    pub fn compute_frame(&mut self, frame_index: u64) -> FrameSnapshot {
        let time = SimTime::at(frame_index, self.config.dt);
        let rotation = rotation::rotation_at(&self.params.get(), time.secs);

        let world_points: Vec<DVec3> = self
            .geometry
            .points()
            .iter()
            .map(|&point| rotation * point)
            .collect();
        // Geometry ordering contract: first point = base reference, last = apex.
        let apex = world_points[world_points.len() - 1];
        let base_point = world_points[0];

        self.apex_trail.push(apex);
        self.base_trail.push(base_point);

        FrameSnapshot {
            time,
            apex,
            base_point,
            axis: AxisSegment {
                start: DVec3::ZERO,
                end: apex,
            },
            apex_trail: self.apex_trail.snapshot(),
            base_trail: self.base_trail.snapshot(),
            world_points,
        }
    }

    /// Replace the three angular rates and clear both trails.
    ///
    /// Fails with [`SimError::InvalidParameterRange`] — rates and trails
    /// untouched — if any rate lies outside its control range. A successful
    /// update takes effect from the next `compute_frame`.
    pub fn set_parameters(
        &mut self,
        omega_rot: f64,
        omega_p: f64,
        omega_n: f64,
    ) -> Result<(), SimError> {
        let reset = self.params.set(omega_rot, omega_p, omega_n)?;
        self.apply_trail_reset(reset);
        debug!(omega_rot, omega_p, omega_n, "rates replaced, trails cleared");
        Ok(())
    }

    /// Discharge the reset obligation on both trails together.
    fn apply_trail_reset(&mut self, _token: TrailReset) {
        self.apex_trail.reset();
        self.base_trail.reset();
    }

    /// The immutable body-frame geometry.
    pub fn geometry(&self) -> &BodyGeometry {
        &self.geometry
    }

    /// Current rotation parameters (copy).
    pub fn parameters(&self) -> RotationParameters {
        self.params.get()
    }

    /// The validated configuration this engine was built from.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }
}
