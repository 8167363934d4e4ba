//! Storm-Track Transects and Ocean Heat Content
//!
//! This crate holds the numerical core used to compare ocean models along a
//! hurricane's path:
//!
//! - **Transects**: densify a best track into evenly stepped sample points
//! - **Sections**: sample a model cube along a transect
//! - **Heat content**: integrate the warm layer above the 26 C isotherm for
//!   single profiles and whole grids
//!
//! # Architecture
//!
//! ```text
//! StormTrack (IBTrACS fixes)
//!      │
//!      ├─► within(bbox) ─► to_transect(config)
//!      │                        │
//!      │                        ▼
//!      │              sample_section(cube, transect)
//!      │                        │
//!      │                        └─► Section::ohc_along
//!      │
//! FieldCube (temperature, [depth][lat][lon])
//!      │
//!      ├─► nearest_profile(lon, lat) ─► VerticalProfile::ohc
//!      │
//!      └─► subset(bbox) ─► ohc_field ─► OhcField (None = no warm layer)
//!
//! GliderProfile ─► within(window) ─► to_profile ─► VerticalProfile::ohc
//! ```
//!
//! # Example
//!
//! ```ignore
//! use ocean_analysis::{build_transect, ohc_profile};
//!
//! let (lons, lats) = build_transect(&[-90.0, -91.0], &[25.0, 26.0])?;
//! let ohc = ohc_profile(&[29.0, 28.0, 27.0, 25.0], &[0.0, 10.0, 20.0, 30.0])?;
//! ```

pub mod config;
pub mod cube;
pub mod error;
pub mod glider;
pub mod ohc;
pub mod profile;
pub mod section;
pub mod track;
pub mod transect;

// Re-export commonly used types at crate root
pub use config::{OhcConfig, TransectConfig};
pub use cube::{FieldCube, SurfaceField};
pub use error::{AnalysisError, Result};
pub use glider::{GliderProfile, GliderSample};
pub use ohc::{
    ohc_field, ohc_grid, ohc_grid_with_config, ohc_profile, ohc_profile_with_config, trapezoid,
    OhcField,
};
pub use profile::VerticalProfile;
pub use section::{sample_section, Section};
pub use track::{SaffirSimpson, StormFix, StormTrack};
pub use transect::{build_transect, densify, TrackPoint, Transect};
