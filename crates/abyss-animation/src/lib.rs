//! Time-driven animation: the frame clock and the closed-form motion
//! functions evaluated from it each frame.
//!
//! Every function here is a pure function of elapsed time and static
//! parameters, so evaluating twice at the same time yields identical
//! results.

pub mod camera_bob;
pub mod clock;
pub mod drift;
pub mod swim_path;

pub use camera_bob::{CameraBob, camera_bob};
pub use clock::{FrameClock, MAX_FRAME_TIME};
pub use drift::{ParticleDrift, particle_drift};
pub use swim_path::{SwimParams, WHALE_PATHS, WhalePathConfig, WhalePose, whale_pose};
